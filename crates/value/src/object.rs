//! Host objects and the optional capabilities they may expose.
//!
//! A host object is any user type placed inside [`Value::Object`]. Algorithms
//! never require a capability; they probe for it through the `as_*`
//! accessors on [`HostObject`] and fall back to generic logic when the
//! accessor returns `None`.

use std::fmt;

use crate::{CollectionError, Value};

/// Capability: answers membership queries.
pub trait Container {
	fn contains(&self, item: &Value) -> bool;
}

/// Capability: rich comparison against another value.
///
/// `eq` and `ne` are logical negations of each other; implementors that
/// override `ne` must keep it that way. The ordering members are optional and
/// report `None` when the comparison is not supported.
pub trait Comparable {
	fn eq(&self, other: &Value) -> bool;

	fn ne(&self, other: &Value) -> bool {
		!self.eq(other)
	}

	fn lt(&self, _other: &Value) -> Option<bool> {
		None
	}

	fn le(&self, other: &Value) -> Option<bool> {
		self.lt(other).map(|lt| lt || self.eq(other))
	}

	fn gt(&self, _other: &Value) -> Option<bool> {
		None
	}

	fn ge(&self, other: &Value) -> Option<bool> {
		self.gt(other).map(|gt| gt || self.eq(other))
	}
}

/// Capability: `indexOf`-style search. The result is used verbatim; a
/// negative position means "not found".
pub trait IndexOf {
	fn index_of(&self, item: &Value, start: i64) -> i64;
}

/// Capability: `index`-style search, consulted after [`IndexOf`].
pub trait Indexed {
	fn index(&self, item: &Value, start: i64) -> Result<Option<usize>, CollectionError>;
}

/// Capability: the object knows how to copy itself.
///
/// When present it replaces generic key-by-key copying at every level of a
/// clone, shallow or deep.
pub trait Cloneable {
	fn clone_value(&self, deep: bool) -> Value;
}

/// A user-defined value living inside [`Value::Object`].
///
/// The keyed view (`keys` / `get`) is what generic algorithms see when the
/// object exposes no matching capability.
pub trait HostObject: fmt::Debug {
	/// Name used in diagnostics and key coercion.
	fn type_name(&self) -> &str;

	/// Own enumerable keys, in enumeration order.
	fn keys(&self) -> Vec<String> {
		Vec::new()
	}

	/// Reads an own property; misses are [`Value::Undefined`].
	fn get(&self, _key: &str) -> Value {
		Value::Undefined
	}

	fn is_callable(&self) -> bool {
		false
	}

	fn as_container(&self) -> Option<&dyn Container> {
		None
	}

	fn as_comparable(&self) -> Option<&dyn Comparable> {
		None
	}

	fn as_index_of(&self) -> Option<&dyn IndexOf> {
		None
	}

	fn as_indexed(&self) -> Option<&dyn Indexed> {
		None
	}

	fn as_cloneable(&self) -> Option<&dyn Cloneable> {
		None
	}
}
