use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use serde_json::json;

use super::*;
use crate::clone_array;

fn v(json: serde_json::Value) -> Value {
	Value::from(json)
}

fn rec(json: serde_json::Value) -> Record {
	v(json).as_record().unwrap().snapshot()
}

#[rstest]
#[case(json!([1, [2, 3], 4]), Depth::Levels(1), json!([1, 2, 3, 4]))]
#[case(json!([1, [2, [3, [4]]], 5]), Depth::Levels(1), json!([1, 2, 3, 4, 5]))]
#[case(json!([[[["deep"]]]]), Depth::Levels(2), json!(["deep"]))]
#[case(json!([[], [[]], 1]), Depth::Unbounded, json!([1]))]
#[case(json!([1, 2]), Depth::Levels(3), json!([1, 2]))]
fn flatten_array_cases(#[case] input: serde_json::Value, #[case] depth: Depth, #[case] expected: serde_json::Value) {
	let value = v(input);
	let list = value.as_list().unwrap();
	flatten_array(list, depth);
	assert_eq!(value, v(expected));
}

#[test]
fn flatten_array_mutates_and_returns_same_handle() {
	let value = v(json!([1, [2]]));
	let list = value.as_list().unwrap();
	let returned = flatten_array(list, Depth::Levels(1));
	assert!(returned.ptr_eq(list));
	assert_eq!(value, v(json!([1, 2])));
}

#[test]
fn nested_lists_are_flattened_in_place_too() {
	let inner = v(json!([[1], 2]));
	let outer = Value::list(vec![inner.clone(), Value::Int(3)]);
	flatten_array(outer.as_list().unwrap(), Depth::Levels(2));
	assert_eq!(outer, v(json!([1, 2, 3])));
	assert_eq!(inner, v(json!([1, 2])));
}

#[test]
fn zero_depth_is_a_no_op() {
	let value = v(json!([[1]]));
	let same = flatten(&value, Depth::Levels(0));
	assert!(same.same(&value));
	assert_eq!(value, v(json!([[1]])));
	assert_eq!(flatten(&value, false), v(json!([[1]])));
}

#[test]
fn flatten_dispatches_on_shape() {
	let list = v(json!([[1], 2]));
	let flat = flatten(&list, Depth::Levels(1));
	assert!(flat.same(&list));
	assert_eq!(flat, v(json!([1, 2])));

	assert_eq!(flatten(&v(json!({"a": {"b": 1}})), Depth::default()), v(json!({"a.b": 1})));
	assert_eq!(flatten(&Value::from("s"), true), Value::from("s"));
}

#[test]
fn flattened_array_leaves_source_alone() {
	let source = v(json!([1, [2, [3]]]));
	let flat = flattened_array(source.as_list().unwrap(), Depth::Unbounded);
	assert_eq!(Value::List(flat), v(json!([1, 2, 3])));
	assert_eq!(source, v(json!([1, [2, [3]]])));
}

#[test]
fn flatten_obj_builds_dotted_paths() {
	let source = v(json!({"a": {"b": 1, "c": [1, {"d": null}]}, "e": "x", "f": {}}));
	assert_eq!(
		flatten_obj(&source, &FlattenOptions::default()),
		rec(json!({"a.b": 1, "a.c[0]": 1, "e": "x"}))
	);
	assert_eq!(
		flatten_obj(&source, &FlattenOptions::default().keep_null(true)),
		rec(json!({"a.b": 1, "a.c[0]": 1, "a.c[1].d": null, "e": "x"}))
	);
}

#[test]
fn flatten_obj_prefix_and_roots() {
	let options = FlattenOptions::default().with_prefix("root");
	assert_eq!(flatten_obj(&v(json!({"a": [true]})), &options), rec(json!({"root.a[0]": true})));
	assert_eq!(
		flatten_obj(&v(json!([1, [2]])), &FlattenOptions::default()),
		rec(json!({"[0]": 1, "[1][0]": 2}))
	);
	assert_eq!(flatten_obj(&Value::Int(5), &FlattenOptions::default()), rec(json!({"": 5})));
}

#[test]
fn flatten_obj_into_accumulates() {
	let mut result = rec(json!({"kept": 0}));
	flatten_obj_into(&v(json!({"a": 1})), &FlattenOptions::default(), &mut result);
	flatten_obj_into(&v(json!({"b": 2})), &FlattenOptions::default(), &mut result);
	assert_eq!(result, rec(json!({"kept": 0, "a": 1, "b": 2})));
}

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
	let leaf = prop_oneof![
		Just(serde_json::Value::Null),
		any::<bool>().prop_map(serde_json::Value::from),
		any::<i16>().prop_map(serde_json::Value::from),
		"[a-z]{0,3}".prop_map(serde_json::Value::from),
	];
	leaf.prop_recursive(4, 48, 5, |inner| {
		prop_oneof![
			prop::collection::vec(inner.clone(), 0..5).prop_map(serde_json::Value::Array),
			prop::collection::vec(("[a-d]", inner), 0..4)
				.prop_map(|pairs| serde_json::Value::Object(pairs.into_iter().collect())),
		]
	})
}

proptest! {
	/// After flattening one level, no element is itself a list.
	#[test]
	fn prop_flatten_one_level_leaves_no_lists(json in prop::collection::vec(arb_json(), 0..6)) {
		let source = Value::from(serde_json::Value::Array(json));
		let copy = Value::List(clone_array(source.as_list().unwrap(), false));
		let flat = flatten(&copy, Depth::Levels(1));
		let flat = flat.as_list().unwrap().snapshot();
		prop_assert!(flat.iter().all(|item| !oracle::is_array(item)));
	}

	/// Every flattened value is a scalar, or null-ish only when requested.
	#[test]
	fn prop_flatten_obj_values_are_leaves(json in arb_json(), keep_null in any::<bool>()) {
		let source = Value::from(json);
		let options = FlattenOptions::default().keep_null(keep_null);
		let flat = flatten_obj(&source, &options);
		for (_, item) in &flat {
			prop_assert!(item.is_scalar() || (keep_null && item.is_nullish()));
		}
	}
}
