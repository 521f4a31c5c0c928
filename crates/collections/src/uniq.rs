//! Deduplication keyed by each element's own property-key coercion.

use indexmap::IndexMap;
use sundry_value::{Value, oracle};

use crate::KeyFn;

/// One derived value per distinct element of `list`.
///
/// Each element `x` is coerced with [`oracle::key_of`] and that string keys a
/// last-write-wins map holding `key_fn(x)`. The map's values come back in
/// the order their keys were first seen. Elements that coerce to the same
/// key, such as any two records, collapse into one slot holding the derived
/// value of the last of them. Non-list operands give an empty result.
///
/// Integer-like keys are not hoisted ahead of the others: `uniq([3, 1, 2])`
/// is `[3, 1, 2]`, not `[1, 2, 3]`. Use [`sorted_uniq`] for ascending order.
pub fn uniq<'a>(list: &Value, key_fn: impl Into<KeyFn<'a>>) -> Vec<Value> {
	let Value::List(vals) = list else {
		return Vec::new();
	};
	let key_fn = key_fn.into();
	let mut seen: IndexMap<String, Value> = IndexMap::with_capacity(vals.len());
	for item in vals.snapshot() {
		let derived = key_fn.derive(&item);
		seen.insert(oracle::key_of(&item), derived);
	}
	seen.into_values().collect()
}

/// [`uniq`] sorted ascending with [`oracle::comp`].
pub fn sorted_uniq<'a>(list: &Value, key_fn: impl Into<KeyFn<'a>>) -> Vec<Value> {
	let mut out = uniq(list, key_fn);
	out.sort_by(oracle::comp);
	out
}
