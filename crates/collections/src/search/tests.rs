use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use sundry_value::{CollectionError, Container, HostObject, IndexOf, Indexed};

use super::*;

fn v(json: serde_json::Value) -> Value {
	Value::from(json)
}

/// Answers every search with a fixed position through `IndexOf`, and would
/// answer differently through `Indexed`.
#[derive(Debug)]
struct Both;

impl IndexOf for Both {
	fn index_of(&self, _item: &Value, _start: i64) -> i64 {
		7
	}
}

impl Indexed for Both {
	fn index(&self, _item: &Value, _start: i64) -> Result<Option<usize>> {
		Ok(Some(1))
	}
}

impl HostObject for Both {
	fn type_name(&self) -> &str {
		"Both"
	}

	fn as_index_of(&self) -> Option<&dyn IndexOf> {
		Some(self)
	}

	fn as_indexed(&self) -> Option<&dyn Indexed> {
		Some(self)
	}
}

/// Reports "not found" through a negative `IndexOf` result.
#[derive(Debug)]
struct Missing;

impl IndexOf for Missing {
	fn index_of(&self, _item: &Value, _start: i64) -> i64 {
		-1
	}
}

impl HostObject for Missing {
	fn type_name(&self) -> &str {
		"Missing"
	}

	fn as_index_of(&self) -> Option<&dyn IndexOf> {
		Some(self)
	}
}

/// Exposes `index` without overriding it.
#[derive(Debug)]
struct Abstract;

impl Indexed for Abstract {
	fn index(&self, _item: &Value, _start: i64) -> Result<Option<usize>> {
		Err(CollectionError::not_implemented("Sequence::index"))
	}
}

impl HostObject for Abstract {
	fn type_name(&self) -> &str {
		"Abstract"
	}

	fn as_indexed(&self) -> Option<&dyn Indexed> {
		Some(self)
	}
}

/// Contains only even integers; has array-like keys that disagree.
#[derive(Debug)]
struct Evens;

impl Container for Evens {
	fn contains(&self, item: &Value) -> bool {
		item.as_int().is_ok_and(|n| n % 2 == 0)
	}
}

impl HostObject for Evens {
	fn type_name(&self) -> &str {
		"Evens"
	}

	fn get(&self, key: &str) -> Value {
		match key {
			"length" => Value::Int(1),
			"0" => Value::Int(1),
			_ => Value::Undefined,
		}
	}

	fn as_container(&self) -> Option<&dyn Container> {
		Some(self)
	}
}

/// Array-like view with no capabilities at all.
#[derive(Debug)]
struct Pair;

impl HostObject for Pair {
	fn type_name(&self) -> &str {
		"Pair"
	}

	fn keys(&self) -> Vec<String> {
		vec!["0".into(), "1".into(), "length".into()]
	}

	fn get(&self, key: &str) -> Value {
		match key {
			"0" => Value::from("left"),
			"1" => Value::from("right"),
			"length" => Value::Int(2),
			_ => Value::Undefined,
		}
	}
}

#[test]
fn contains_over_lists() {
	let list = v(json!([1, 2, 3]));
	assert_eq!(contains(&list, &Value::Int(2)), Ok(true));
	assert_eq!(contains(&list, &Value::Int(9)), Ok(false));
	assert_eq!(contains(&v(json!([{"a": [1]}])), &v(json!({"a": [1]}))), Ok(true));
}

#[rstest]
#[case("hello", "l", 0, Some(2))]
#[case("hello", "l", 3, Some(3))]
#[case("hello", "l", 4, None)]
#[case("hello", "lo", -2, Some(3))]
#[case("hello", "h", -99, Some(0))]
#[case("héllo", "l", 0, Some(2))]
#[case("abc", "", 10, Some(3))]
fn index_in_strings(#[case] haystack: &str, #[case] needle: &str, #[case] start: i64, #[case] expected: Option<usize>) {
	assert_eq!(index(&Value::from(haystack), &Value::from(needle), start), Ok(expected));
}

#[test]
fn string_search_coerces_needle() {
	assert_eq!(index(&Value::from("a1b"), &Value::Int(1), 0), Ok(Some(1)));
}

#[rstest]
#[case(0, Some(1))]
#[case(2, Some(3))]
#[case(-1, Some(3))]
#[case(-2, Some(3))]
#[case(-100, Some(1))]
#[case(100, None)]
fn index_in_lists(#[case] start: i64, #[case] expected: Option<usize>) {
	let list = v(json!(["a", "b", "c", "b"]));
	assert_eq!(index(&list, &Value::from("b"), start), Ok(expected));
}

#[test]
fn index_of_wins_over_index() {
	assert_eq!(index(&Value::object(Both), &Value::Null, 0), Ok(Some(7)));
}

#[test]
fn negative_delegated_result_is_not_found() {
	assert_eq!(index(&Value::object(Missing), &Value::Null, 0), Ok(None));
	assert_eq!(contains(&Value::object(Missing), &Value::Null), Ok(false));
}

#[test]
fn delegated_not_implemented_propagates() {
	let err = index(&Value::object(Abstract), &Value::Int(1), 0).unwrap_err();
	assert_eq!(err, CollectionError::not_implemented("Sequence::index"));
	assert!(contains(&Value::object(Abstract), &Value::Int(1)).is_err());
}

#[test]
fn container_answers_verbatim() {
	let evens = Value::object(Evens);
	assert_eq!(contains(&evens, &Value::Int(4)), Ok(true));
	// The array-like view holds 1, but the capability decides.
	assert_eq!(contains(&evens, &Value::Int(1)), Ok(false));
	assert_eq!(index(&evens, &Value::Int(1), 0), Ok(Some(0)));
}

#[test]
fn array_like_values_are_scanned() {
	assert_eq!(index(&Value::object(Pair), &Value::from("right"), 0), Ok(Some(1)));
	let record = v(json!({"0": "x", "1": "y", "length": 2}));
	assert_eq!(contains(&record, &Value::from("y")), Ok(true));
	assert_eq!(contains(&v(json!({"a": "y"})), &Value::from("y")), Ok(false));
}

#[test]
fn scalars_contain_nothing() {
	assert_eq!(index(&Value::Int(5), &Value::Int(5), 0), Ok(None));
	assert_eq!(contains(&Value::Undefined, &Value::Undefined), Ok(false));
}
