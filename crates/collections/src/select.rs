//! Predicate-based selection over lists.
//!
//! These operations are defined only for ordered sequences: a record or any
//! other operand yields `None`.

use sundry_value::{Record, Value, oracle};

use crate::Selector;

/// Returns a predicate that holds when every key of `template` reads back an
/// equal value from the tested element. Missing keys read as `Undefined`.
pub fn matches(template: Record) -> impl Fn(&Value) -> bool {
	move |value| template_matches(&template, value)
}

pub(crate) fn template_matches(template: &Record, value: &Value) -> bool {
	template
		.iter()
		.all(|(key, expected)| oracle::eq(&oracle::prop(value, key), expected))
}

/// Every element of the list accepted by `selector`, in order.
pub fn filter<'a>(collection: &Value, selector: impl Into<Selector<'a>>) -> Option<Vec<Value>> {
	let Value::List(vals) = collection else {
		return None;
	};
	let selector = selector.into();
	Some(vals.snapshot().into_iter().filter(|item| selector.test(item)).collect())
}

/// First element accepted by `selector`.
pub fn find<'a>(collection: &Value, selector: impl Into<Selector<'a>>) -> Option<Value> {
	let Value::List(vals) = collection else {
		return None;
	};
	let selector = selector.into();
	vals.snapshot().into_iter().find(|item| selector.test(item))
}

/// Last element accepted by `selector`, found by scanning from the end.
pub fn find_right<'a>(collection: &Value, selector: impl Into<Selector<'a>>) -> Option<Value> {
	let Value::List(vals) = collection else {
		return None;
	};
	let selector = selector.into();
	vals.snapshot().into_iter().rev().find(|item| selector.test(item))
}
