//! Shallow and deep copies of lists and keyed values.

use sundry_value::{ListRef, Record, Value, oracle};

use crate::CloneDepth;


/// Copies `value`.
///
/// Lists go through [`clone_array`]. Records, and host objects without a
/// [`Cloneable`](sundry_value::Cloneable) override, are copied key by key
/// into a new record. A host override is always used when present, in both
/// modes and at every nesting level. Scalars come back unchanged.
pub fn clone(value: &Value, depth: impl Into<CloneDepth>) -> Value {
	let depth = depth.into();
	match value {
		Value::List(vals) => Value::List(clone_array(vals, depth)),
		Value::Record(_) | Value::Object(_) => clone_keyed(value, depth),
		scalar => scalar.clone(),
	}
}

/// Copies a list. Shallow copies share element handles with the source;
/// deep copies clone every element with [`CloneDepth::Deep`].
pub fn clone_array(list: &ListRef, depth: impl Into<CloneDepth>) -> ListRef {
	let items = list.snapshot();
	match depth.into() {
		CloneDepth::Shallow => ListRef::new(items),
		CloneDepth::Deep => ListRef::new(items.iter().map(|item| clone(item, CloneDepth::Deep)).collect()),
	}
}

fn clone_keyed(value: &Value, depth: CloneDepth) -> Value {
	if let Value::Object(object) = value
		&& let Some(cloneable) = object.as_cloneable()
	{
		tracing::trace!(type_name = object.type_name(), deep = depth.is_deep(), "collections.clone.override");
		return cloneable.clone_value(depth.is_deep());
	}

	let keys = oracle::keys(value);
	let mut out = Record::with_capacity(keys.len());
	for key in keys {
		let item = oracle::prop(value, &key);
		let item = match depth {
			CloneDepth::Shallow => item,
			CloneDepth::Deep => clone(&item, depth),
		};
		out.insert(key, item);
	}
	Value::record(out)
}
