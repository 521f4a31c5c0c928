//! An insertion-ordered set that is writable only at construction.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;
use indexmap::set::Iter;
use sundry_value::{Cloneable, CollectionError, Container, HostObject, Result, Value, ValueTypeError};

use crate::Collection;

/// Immutable set snapshot.
///
/// The elements are fixed by [`FrozenSet::new`] (or `collect`). Every
/// mutating entry point returns [`CollectionError::FrozenMutation`] and
/// leaves the set untouched, no matter how often it is retried.
pub struct FrozenSet<T> {
	items: IndexSet<T>,
	/// Position of [`Collection::next_item`]; never touches `items`.
	cursor: usize,
}

impl<T: Hash + Eq> FrozenSet<T> {
	pub fn new(items: impl IntoIterator<Item = T>) -> Self {
		Self {
			items: items.into_iter().collect(),
			cursor: 0,
		}
	}

	pub fn has(&self, item: &T) -> bool {
		self.items.contains(item)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Elements in construction order.
	pub fn iter(&self) -> Iter<'_, T> {
		self.items.iter()
	}

	/// Always fails.
	pub fn add(&mut self, _item: T) -> Result<()> {
		Err(self.reject("add"))
	}

	/// Always fails.
	pub fn delete(&mut self, _item: &T) -> Result<bool> {
		Err(self.reject("delete"))
	}

	/// Always fails.
	pub fn clear(&mut self) -> Result<()> {
		Err(self.reject("clear"))
	}

	fn reject(&self, op: &'static str) -> CollectionError {
		tracing::debug!(op, len = self.items.len(), "collections.frozen_set.reject");
		CollectionError::frozen(op)
	}
}

impl<T: Hash + Eq> FromIterator<T> for FrozenSet<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter)
	}
}

/// Builds a set from a list value, converting every element to `T`.
///
/// # Errors
///
/// [`CollectionError::Type`] when `value` is not a list or an element does
/// not convert.
impl<T> TryFrom<&Value> for FrozenSet<T>
where
	T: Hash + Eq + for<'a> TryFrom<&'a Value, Error = ValueTypeError>,
{
	type Error = CollectionError;

	fn try_from(value: &Value) -> Result<Self> {
		let vals = value.as_list()?;
		let items = vals.snapshot().iter().map(T::try_from).collect::<std::result::Result<IndexSet<T>, _>>()?;
		Ok(Self { items, cursor: 0 })
	}
}

impl<'a, T> IntoIterator for &'a FrozenSet<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl<T: Hash + Eq> PartialEq for FrozenSet<T> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<T: Hash + Eq> Eq for FrozenSet<T> {}

impl<T: fmt::Debug> fmt::Debug for FrozenSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.items.iter()).finish()
	}
}

impl<T: Hash + Eq + Clone> Collection for FrozenSet<T> {
	type Item = T;

	fn add(&mut self, _item: T) -> Result<()> {
		Err(self.reject("add"))
	}

	fn remove(&mut self, _item: &T) -> Result<()> {
		Err(self.reject("remove"))
	}

	fn pop(&mut self, _index: usize) -> Result<Option<T>> {
		Err(self.reject("pop"))
	}

	fn clear(&mut self) -> Result<()> {
		Err(self.reject("clear"))
	}

	fn contains(&self, item: &T) -> bool {
		self.has(item)
	}

	fn size(&self) -> Result<usize> {
		Ok(self.len())
	}

	/// Walks the elements in order. Returns `None` once at the end and
	/// rewinds, so the next walk starts from the first element again.
	fn next_item(&mut self) -> Option<T> {
		match self.items.get_index(self.cursor) {
			Some(item) => {
				self.cursor += 1;
				Some(item.clone())
			}
			None => {
				self.cursor = 0;
				None
			}
		}
	}
}

impl<T> Container for FrozenSet<T>
where
	T: Hash + Eq + for<'a> TryFrom<&'a Value>,
{
	/// Values that do not convert to `T` are never members.
	fn contains(&self, item: &Value) -> bool {
		T::try_from(item).is_ok_and(|item| self.has(&item))
	}
}

impl<T> Cloneable for FrozenSet<T>
where
	T: Hash + Eq + Clone + fmt::Debug + for<'a> TryFrom<&'a Value> + 'static,
{
	/// Elements are immutable, so shallow and deep copies coincide.
	fn clone_value(&self, _deep: bool) -> Value {
		Value::object(self.iter().cloned().collect::<Self>())
	}
}

impl<T> HostObject for FrozenSet<T>
where
	T: Hash + Eq + Clone + fmt::Debug + for<'a> TryFrom<&'a Value> + 'static,
{
	fn type_name(&self) -> &str {
		"FrozenSet"
	}

	fn get(&self, key: &str) -> Value {
		match key {
			"size" => Value::from(self.len()),
			_ => Value::Undefined,
		}
	}

	fn as_container(&self) -> Option<&dyn Container> {
		Some(self)
	}

	fn as_cloneable(&self) -> Option<&dyn Cloneable> {
		Some(self)
	}
}
