use sundry_value::{Value, oracle};

use crate::{Iteratee, Key};

/// Calls `f(value, key, collection)` for every element.
///
/// Lists pass [`Key::Index`]; records and host objects pass [`Key::Name`] in
/// their own key order. Scalars have nothing to visit. The elements are read
/// up front, so `f` may mutate `collection`.
pub fn for_each(collection: &Value, mut f: impl FnMut(&Value, Key<'_>, &Value)) {
	match collection {
		Value::List(vals) => {
			for (index, item) in vals.snapshot().iter().enumerate() {
				f(item, Key::Index(index), collection);
			}
		}
		Value::Record(_) | Value::Object(_) => {
			for key in oracle::keys(collection) {
				let item = oracle::prop(collection, &key);
				f(&item, Key::Name(&key), collection);
			}
		}
		_ => {}
	}
}

/// Collects `iteratee` applied to every element into a new list.
pub fn map<'a>(collection: &Value, iteratee: impl Into<Iteratee<'a>>) -> Vec<Value> {
	let mut iteratee = iteratee.into();
	let mut out = Vec::new();
	for_each(collection, |item, key, whole| out.push(iteratee.call(item, key, whole)));
	out
}
