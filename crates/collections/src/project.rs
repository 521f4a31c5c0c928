//! Key projection for records: [`pick`] and its complement [`omit`].
//!
//! Only own enumerable keys are considered and nested values are shared, not
//! copied. A `Null` or `Undefined` operand projects to an empty record.

use sundry_value::{Record, Value, oracle};

use crate::KeySelector;

/// Copies the selected keys of `object` into a new record.
///
/// With an explicit key list every listed key is present in the result, even
/// when `object` lacks it (its value is then `Undefined`). With a predicate,
/// only own keys for which `predicate(value, key)` holds are copied.
pub fn pick<'a>(object: &Value, selector: impl Into<KeySelector<'a>>) -> Record {
	let mut out = Record::new();
	if object.is_nullish() {
		return out;
	}
	match selector.into() {
		KeySelector::Keys(keys) => {
			for key in keys {
				let item = oracle::prop(object, &key);
				out.insert(key, item);
			}
		}
		KeySelector::Predicate(predicate) => {
			for key in oracle::keys(object) {
				let item = oracle::prop(object, &key);
				if predicate(&item, &key) {
					out.insert(key, item);
				}
			}
		}
	}
	out
}

/// Copies every own key of `object` except the selected ones.
pub fn omit<'a>(object: &Value, selector: impl Into<KeySelector<'a>>) -> Record {
	let mut out = Record::new();
	if object.is_nullish() {
		return out;
	}
	let selector = selector.into();
	for key in oracle::keys(object) {
		let item = oracle::prop(object, &key);
		let dropped = match &selector {
			KeySelector::Keys(keys) => keys.contains(&key),
			KeySelector::Predicate(predicate) => predicate(&item, &key),
		};
		if !dropped {
			out.insert(key, item);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;
	use sundry_value::HostObject;

	use super::*;

	#[derive(Debug)]
	struct Point;

	impl HostObject for Point {
		fn type_name(&self) -> &str {
			"Point"
		}

		fn keys(&self) -> Vec<String> {
			vec!["y".to_owned(), "x".to_owned(), "label".to_owned()]
		}

		fn get(&self, key: &str) -> Value {
			match key {
				"x" => Value::Int(1),
				"y" => Value::Int(2),
				"label" => Value::from("p"),
				_ => Value::Undefined,
			}
		}
	}

	fn v(json: serde_json::Value) -> Value {
		Value::from(json)
	}

	fn rec(json: serde_json::Value) -> Record {
		v(json).as_record().unwrap().snapshot()
	}

	#[test]
	fn pick_listed_keys() {
		assert_eq!(pick(&v(json!({"a": 1, "b": 2, "c": 3})), ["a", "c"]), rec(json!({"a": 1, "c": 3})));
	}

	#[test]
	fn pick_keeps_missing_keys_as_undefined() {
		let picked = pick(&v(json!({"a": 1})), ["z"]);
		assert_eq!(picked.len(), 1);
		assert!(picked.contains_key("z"));
		assert_eq!(picked.get("z"), Some(&Value::Undefined));
	}

	#[test]
	fn pick_by_predicate() {
		let picked = pick(
			&v(json!({"a": 1, "b": "x", "c": 3})),
			KeySelector::predicate(|value, key| key != "c" && value.as_int().is_ok()),
		);
		assert_eq!(picked, rec(json!({"a": 1})));
	}

	#[test]
	fn pick_from_absent_object_is_empty() {
		assert!(pick(&Value::Undefined, ["a"]).is_empty());
		assert!(pick(&Value::Null, KeySelector::predicate(|_, _| true)).is_empty());
	}

	#[test]
	fn omit_listed_keys() {
		assert_eq!(omit(&v(json!({"a": 1, "b": 2})), ["a"]), rec(json!({"b": 2})));
		assert_eq!(omit(&v(json!({"a": 1})), ["zzz"]), rec(json!({"a": 1})));
	}

	#[test]
	fn omit_by_predicate() {
		let kept = omit(&v(json!({"a": 1, "b": null})), KeySelector::predicate(|value, _| value.is_nullish()));
		assert_eq!(kept, rec(json!({"a": 1})));
	}

	#[test]
	fn projection_shares_nested_values() {
		let source = v(json!({"inner": {"n": 1}}));
		let picked = pick(&source, ["inner"]);
		picked.get("inner").unwrap().as_record().unwrap().insert("n", Value::Int(2));
		assert_eq!(oracle::prop(&oracle::prop(&source, "inner"), "n"), Value::Int(2));
	}

	#[test]
	fn lists_project_by_index_keys() {
		assert_eq!(omit(&v(json!(["x", "y"])), ["0"]), rec(json!({"1": "y"})));
	}

	#[test]
	fn pick_from_host_object() {
		let point = Value::object(Point);
		let expected: Record = [("x", Value::Int(1)), ("z", Value::Undefined)].into_iter().collect();
		assert_eq!(pick(&point, ["x", "z"]), expected);

		let numbers = pick(&point, KeySelector::predicate(|value, _| value.as_int().is_ok()));
		assert_eq!(numbers.keys().collect::<Vec<_>>(), vec!["y", "x"]);
		assert_eq!(numbers, rec(json!({"x": 1, "y": 2})));
	}

	#[test]
	fn omit_from_host_object() {
		let point = Value::object(Point);
		assert_eq!(omit(&point, ["label"]), rec(json!({"y": 2, "x": 1})));
		let kept = omit(&point, KeySelector::predicate(|_, key| key != "label"));
		assert_eq!(kept, rec(json!({"label": "p"})));
	}
}
