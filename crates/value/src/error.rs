//! Error types shared by the value model and the collection contracts.

use std::fmt;

use thiserror::Error;

/// Coarse value type used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
	Undefined,
	Null,
	Bool,
	Int,
	Float,
	String,
	List,
	Record,
	Object,
}

impl ValueType {
	pub fn is_number(self) -> bool {
		matches!(self, Self::Int | Self::Float)
	}
}

impl fmt::Display for ValueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Undefined => "undefined",
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::String => "string",
			Self::List => "list",
			Self::Record => "record",
			Self::Object => "object",
		};
		f.write_str(name)
	}
}

/// Error returned by typed accessors like [`crate::Value::as_record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {got}")]
pub struct ValueTypeError {
	expected: &'static str,
	got: ValueType,
}

impl ValueTypeError {
	pub fn new(expected: &'static str, got: ValueType) -> Self {
		Self { expected, got }
	}

	pub fn expected(&self) -> &'static str {
		self.expected
	}

	pub fn got(&self) -> ValueType {
		self.got
	}
}

/// Failures surfaced by collection contracts.
///
/// Lookup misses are never errors; they read as `None` or
/// [`crate::Value::Undefined`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
	/// An abstract member was called without an override.
	#[error("{member} is not implemented")]
	NotImplemented {
		/// Qualified member name, e.g. `Sequence::get`.
		member: &'static str,
	},

	/// `remove` could not find the element.
	#[error("value not found: {item}")]
	ValueNotFound {
		/// Debug rendering of the missing element.
		item: String,
	},

	/// A mutating call reached a frozen set.
	#[error("cannot {op}: set is frozen")]
	FrozenMutation {
		/// The rejected operation.
		op: &'static str,
	},

	/// A positional write or delete past the end of a sequence.
	#[error("index {index} out of range for length {len}")]
	OutOfRange { index: usize, len: usize },

	#[error(transparent)]
	Type(#[from] ValueTypeError),
}

impl CollectionError {
	pub fn not_implemented(member: &'static str) -> Self {
		Self::NotImplemented { member }
	}

	pub fn value_not_found(item: &impl fmt::Debug) -> Self {
		Self::ValueNotFound {
			item: format!("{item:?}"),
		}
	}

	pub fn frozen(op: &'static str) -> Self {
		Self::FrozenMutation { op }
	}
}

/// Result type for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;
