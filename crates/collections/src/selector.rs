//! Caller-supplied selectors and iteratees.

use std::fmt;

use sundry_value::{Record, Value, oracle};

use crate::select::template_matches;

/// Position handed to traversal iteratees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
	/// Position within a list.
	Index(usize),
	/// Own key of a record or host object.
	Name(&'a str),
}

impl fmt::Display for Key<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{index}"),
			Self::Name(name) => f.write_str(name),
		}
	}
}

/// Element test for [`crate::filter`], [`crate::find`] and
/// [`crate::find_right`].
pub enum Selector<'a> {
	Predicate(Box<dyn Fn(&Value) -> bool + 'a>),
	/// Truthiness of `x[name]`.
	Property(String),
	/// Structural match against every key of the template.
	Matches(Record),
}

impl<'a> Selector<'a> {
	pub fn predicate(f: impl Fn(&Value) -> bool + 'a) -> Self {
		Self::Predicate(Box::new(f))
	}

	pub fn test(&self, value: &Value) -> bool {
		match self {
			Self::Predicate(f) => f(value),
			Self::Property(name) => oracle::truthy(&oracle::prop(value, name)),
			Self::Matches(template) => template_matches(template, value),
		}
	}
}

impl From<&str> for Selector<'_> {
	fn from(name: &str) -> Self {
		Self::Property(name.to_owned())
	}
}

impl From<String> for Selector<'_> {
	fn from(name: String) -> Self {
		Self::Property(name)
	}
}

impl From<Record> for Selector<'_> {
	fn from(template: Record) -> Self {
		Self::Matches(template)
	}
}

/// Per-element transform for [`crate::map`].
pub enum Iteratee<'a> {
	Function(Box<dyn FnMut(&Value, Key<'_>, &Value) -> Value + 'a>),
	/// Shorthand for `|x| x[name]`.
	Property(String),
}

impl<'a> Iteratee<'a> {
	pub fn function(f: impl FnMut(&Value, Key<'_>, &Value) -> Value + 'a) -> Self {
		Self::Function(Box::new(f))
	}

	pub(crate) fn call(&mut self, value: &Value, key: Key<'_>, collection: &Value) -> Value {
		match self {
			Self::Function(f) => f(value, key, collection),
			Self::Property(name) => oracle::prop(value, name),
		}
	}
}

impl From<&str> for Iteratee<'_> {
	fn from(name: &str) -> Self {
		Self::Property(name.to_owned())
	}
}

impl From<String> for Iteratee<'_> {
	fn from(name: String) -> Self {
		Self::Property(name)
	}
}

/// Key derivation for [`crate::uniq`].
#[derive(Default)]
pub enum KeyFn<'a> {
	#[default]
	Identity,
	Function(Box<dyn Fn(&Value) -> Value + 'a>),
	Property(String),
}

impl<'a> KeyFn<'a> {
	pub fn function(f: impl Fn(&Value) -> Value + 'a) -> Self {
		Self::Function(Box::new(f))
	}

	pub(crate) fn derive(&self, value: &Value) -> Value {
		match self {
			Self::Identity => oracle::id(value),
			Self::Function(f) => f(value),
			Self::Property(name) => oracle::prop(value, name),
		}
	}
}

impl From<&str> for KeyFn<'_> {
	fn from(name: &str) -> Self {
		Self::Property(name.to_owned())
	}
}

impl From<String> for KeyFn<'_> {
	fn from(name: String) -> Self {
		Self::Property(name)
	}
}

/// Key choice for [`crate::pick`] and [`crate::omit`].
pub enum KeySelector<'a> {
	Keys(Vec<String>),
	Predicate(Box<dyn Fn(&Value, &str) -> bool + 'a>),
}

impl<'a> KeySelector<'a> {
	pub fn predicate(f: impl Fn(&Value, &str) -> bool + 'a) -> Self {
		Self::Predicate(Box::new(f))
	}
}

impl From<Vec<String>> for KeySelector<'_> {
	fn from(keys: Vec<String>) -> Self {
		Self::Keys(keys)
	}
}

impl From<Vec<&str>> for KeySelector<'_> {
	fn from(keys: Vec<&str>) -> Self {
		Self::Keys(keys.into_iter().map(str::to_owned).collect())
	}
}

impl From<&[&str]> for KeySelector<'_> {
	fn from(keys: &[&str]) -> Self {
		Self::Keys(keys.iter().map(|key| (*key).to_owned()).collect())
	}
}

impl<const N: usize> From<[&str; N]> for KeySelector<'_> {
	fn from(keys: [&str; N]) -> Self {
		Self::Keys(keys.into_iter().map(str::to_owned).collect())
	}
}
