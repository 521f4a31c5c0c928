//! Flattening of nested lists and of keyed values into dotted paths.

use sundry_value::{ListRef, Record, Value, oracle};

use crate::{Depth, FlattenOptions};

#[cfg(test)]
mod tests;

/// Flattens `value` by `depth`.
///
/// A zero depth returns `value` as is. Lists are flattened **in place** with
/// [`flatten_array`] and the returned value shares the same handle. Records
/// and host objects become a dotted-path record via [`flatten_obj`].
/// Anything else is returned unchanged.
pub fn flatten(value: &Value, depth: impl Into<Depth>) -> Value {
	let depth = depth.into();
	if depth.is_zero() {
		return value.clone();
	}
	match value {
		Value::List(vals) => Value::List(flatten_array(vals, depth).clone()),
		Value::Record(_) | Value::Object(_) => Value::record(flatten_obj(value, &FlattenOptions::default())),
		other => other.clone(),
	}
}

/// Splices nested lists into `list`, mutating it, and returns the same
/// handle.
///
/// Scans left to right. Each nested list is first flattened (also in place)
/// with one level less budget, then spliced over its slot, and scanning
/// resumes at that same slot so spliced-in lists are flattened again under
/// the current budget.
pub fn flatten_array(list: &ListRef, depth: impl Into<Depth>) -> &ListRef {
	let depth = depth.into();
	if depth.is_zero() {
		return list;
	}

	let mut index = 0;
	loop {
		let nested = match list.borrow().get(index) {
			None => break,
			Some(Value::List(nested)) => nested.clone(),
			Some(_) => {
				index += 1;
				continue;
			}
		};
		flatten_array(&nested, depth.decrement());
		let contents = nested.snapshot();
		tracing::trace!(index, spliced = contents.len(), "collections.flatten_array.splice");
		list.borrow_mut().splice(index..=index, contents);
	}
	list
}

/// Non-mutating [`flatten_array`]: flattens a copy of every list level and
/// leaves `list` untouched. Non-list elements are shared.
pub fn flattened_array(list: &ListRef, depth: impl Into<Depth>) -> ListRef {
	let copy = copy_lists(list);
	flatten_array(&copy, depth);
	copy
}

fn copy_lists(list: &ListRef) -> ListRef {
	let items = list
		.borrow()
		.iter()
		.map(|item| match item {
			Value::List(nested) => Value::List(copy_lists(nested)),
			other => other.clone(),
		})
		.collect();
	ListRef::new(items)
}

/// Collapses `value` into a one-level record from paths to scalar leaves.
///
/// List children extend the path with `[i]`, keyed children with `.key` (or
/// a bare `key` at the root). `Null` and `Undefined` leaves are kept only
/// with [`FlattenOptions::keep_null`]. Empty lists and records leave no
/// trace.
pub fn flatten_obj(value: &Value, options: &FlattenOptions) -> Record {
	let mut result = Record::new();
	flatten_obj_into(value, options, &mut result);
	result
}

/// [`flatten_obj`] writing into an existing record.
pub fn flatten_obj_into(value: &Value, options: &FlattenOptions, result: &mut Record) {
	visit(value, &options.prefix, options.keep_null, result);
}

fn visit(value: &Value, prefix: &str, keep_null: bool, result: &mut Record) {
	match value {
		Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
			result.insert(prefix, value.clone());
		}
		Value::Null | Value::Undefined => {
			if keep_null {
				result.insert(prefix, value.clone());
			}
		}
		Value::List(vals) => {
			for (index, item) in vals.snapshot().iter().enumerate() {
				visit(item, &format!("{prefix}[{index}]"), keep_null, result);
			}
		}
		Value::Record(_) | Value::Object(_) => {
			for key in oracle::keys(value) {
				let child = oracle::prop(value, &key);
				let path = if prefix.is_empty() { key } else { format!("{prefix}.{key}") };
				visit(&child, &path, keep_null, result);
			}
		}
	}
}
