//! Type classification, equality and ordering over [`Value`].
//!
//! Every collection algorithm goes through these functions when it needs to
//! know an operand's shape, compare two elements or read a property, so the
//! behaviour of host objects is decided in one place.

use std::cmp::Ordering;

use crate::{ListRef, Value, ValueType};


pub fn type_of(value: &Value) -> ValueType {
	value.get_type()
}

/// Keyed mappings: records and host objects.
pub fn is_object(value: &Value) -> bool {
	matches!(value, Value::Record(_) | Value::Object(_))
}

pub fn is_array(value: &Value) -> bool {
	matches!(value, Value::List(_))
}

pub fn is_string(value: &Value) -> bool {
	matches!(value, Value::String(_))
}

pub fn is_number(value: &Value) -> bool {
	value.get_type().is_number()
}

pub fn is_bool(value: &Value) -> bool {
	matches!(value, Value::Bool(_))
}

/// `Null` and `Undefined` both count.
pub fn is_null(value: &Value) -> bool {
	value.is_nullish()
}

pub fn is_func(value: &Value) -> bool {
	matches!(value, Value::Object(object) if object.is_callable())
}

/// True when the value has no enumerable content. Numbers and booleans are
/// always empty.
pub fn is_empty(value: &Value) -> bool {
	match value {
		Value::String(val) => val.is_empty(),
		Value::List(vals) => vals.is_empty(),
		Value::Record(val) => val.is_empty(),
		Value::Object(object) => object.keys().is_empty(),
		_ => true,
	}
}

pub fn id(value: &Value) -> Value {
	value.clone()
}

/// Deep structural equality.
///
/// Integers and floats compare numerically and NaN equals NaN. A host object
/// exposing [`crate::Comparable`] decides for itself; otherwise objects are
/// equal only to themselves.
pub fn eq(a: &Value, b: &Value) -> bool {
	match (a, b) {
		(Value::Object(x), other) => match x.as_comparable() {
			Some(comparable) => comparable.eq(other),
			None => matches!(other, Value::Object(y) if x.ptr_eq(y)),
		},
		(other, Value::Object(y)) => y.as_comparable().is_some_and(|comparable| comparable.eq(other)),
		(Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
		(Value::Bool(x), Value::Bool(y)) => x == y,
		(Value::Int(x), Value::Int(y)) => x == y,
		(Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
			let (x, y) = (number(a), number(b));
			x == y || (x.is_nan() && y.is_nan())
		}
		(Value::String(x), Value::String(y)) => x == y,
		(Value::List(x), Value::List(y)) => x.ptr_eq(y) || lists_eq(x, y),
		(Value::Record(x), Value::Record(y)) => x.ptr_eq(y) || *x.borrow() == *y.borrow(),
		_ => false,
	}
}

fn lists_eq(x: &ListRef, y: &ListRef) -> bool {
	let (x, y) = (x.borrow(), y.borrow());
	x.len() == y.len() && x.iter().zip(y.iter()).all(|(a, b)| eq(a, b))
}

/// Three-way comparison used for sorting.
///
/// Values of different kinds order by kind: undefined, null, booleans,
/// numbers, strings, lists, records, objects. Lists compare element-wise,
/// records by size. Host objects use their [`crate::Comparable`] ordering
/// when they have one.
pub fn comp(a: &Value, b: &Value) -> Ordering {
	if let Some(ordering) = host_ordering(a, b) {
		return ordering;
	}
	if let Some(ordering) = host_ordering(b, a) {
		return ordering.reverse();
	}

	match (a, b) {
		(Value::Bool(x), Value::Bool(y)) => x.cmp(y),
		(Value::Int(x), Value::Int(y)) => x.cmp(y),
		(Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => cmp_numbers(number(a), number(b)),
		(Value::String(x), Value::String(y)) => x.cmp(y),
		(Value::List(x), Value::List(y)) => {
			let (x, y) = (x.borrow(), y.borrow());
			x.iter()
				.zip(y.iter())
				.map(|(a, b)| comp(a, b))
				.find(|ordering| ordering.is_ne())
				.unwrap_or_else(|| x.len().cmp(&y.len()))
		}
		(Value::Record(x), Value::Record(y)) => x.len().cmp(&y.len()),
		_ => rank(a).cmp(&rank(b)),
	}
}

fn host_ordering(a: &Value, b: &Value) -> Option<Ordering> {
	let Value::Object(object) = a else {
		return None;
	};
	let comparable = object.as_comparable()?;
	if comparable.lt(b) == Some(true) {
		Some(Ordering::Less)
	} else if comparable.gt(b) == Some(true) {
		Some(Ordering::Greater)
	} else if comparable.eq(b) {
		Some(Ordering::Equal)
	} else {
		None
	}
}

fn rank(value: &Value) -> u8 {
	match value {
		Value::Undefined => 0,
		Value::Null => 1,
		Value::Bool(_) => 2,
		Value::Int(_) | Value::Float(_) => 3,
		Value::String(_) => 4,
		Value::List(_) => 5,
		Value::Record(_) => 6,
		Value::Object(_) => 7,
	}
}

fn number(value: &Value) -> f64 {
	match value {
		Value::Int(val) => *val as f64,
		Value::Float(val) => *val,
		_ => f64::NAN,
	}
}

// NaN sorts before every other number and equal to itself.
fn cmp_numbers(x: f64, y: f64) -> Ordering {
	match (x.is_nan(), y.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Less,
		(false, true) => Ordering::Greater,
		(false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
	}
}

/// Own enumerable keys in enumeration order.
///
/// Lists and strings enumerate their indices; scalars have no keys.
pub fn keys(value: &Value) -> Vec<String> {
	match value {
		Value::Record(val) => val.keys(),
		Value::List(vals) => (0..vals.len()).map(|i| i.to_string()).collect(),
		Value::String(val) => (0..val.chars().count()).map(|i| i.to_string()).collect(),
		Value::Object(object) => object.keys(),
		_ => Vec::new(),
	}
}

/// Reads `value[key]`; any miss is [`Value::Undefined`].
///
/// Lists and strings answer `length` and decimal indices.
pub fn prop(value: &Value, key: &str) -> Value {
	match value {
		Value::Record(val) => val.get(key).unwrap_or_default(),
		Value::List(vals) => match key {
			"length" => vals.len().into(),
			_ => key
				.parse::<usize>()
				.ok()
				.and_then(|index| vals.get(index))
				.unwrap_or_default(),
		},
		Value::String(val) => match key {
			"length" => val.chars().count().into(),
			_ => key
				.parse::<usize>()
				.ok()
				.and_then(|index| val.chars().nth(index))
				.map(|ch| Value::String(ch.to_string()))
				.unwrap_or_default(),
		},
		Value::Object(object) => object.get(key),
		_ => Value::Undefined,
	}
}

/// Truthiness: `false`, `0`, NaN, `""`, `Null` and `Undefined` are falsy.
pub fn truthy(value: &Value) -> bool {
	match value {
		Value::Undefined | Value::Null => false,
		Value::Bool(val) => *val,
		Value::Int(val) => *val != 0,
		Value::Float(val) => *val != 0.0 && !val.is_nan(),
		Value::String(val) => !val.is_empty(),
		Value::List(_) | Value::Record(_) | Value::Object(_) => true,
	}
}

/// Coerces a value to the string it would occupy as a property key.
///
/// Distinct values may collide: `1`, `1.0` and `"1"` all become `"1"`, and
/// every record becomes `"[object Object]"`.
pub fn key_of(value: &Value) -> String {
	match value {
		Value::Undefined => "undefined".to_owned(),
		Value::Null => "null".to_owned(),
		Value::Bool(val) => val.to_string(),
		Value::Int(val) => val.to_string(),
		Value::Float(val) => number_to_string(*val),
		Value::String(val) => val.clone(),
		Value::List(vals) => vals
			.borrow()
			.iter()
			.map(|item| if item.is_nullish() { String::new() } else { key_of(item) })
			.collect::<Vec<_>>()
			.join(","),
		Value::Record(_) => "[object Object]".to_owned(),
		Value::Object(object) => format!("[object {}]", object.type_name()),
	}
}

fn number_to_string(val: f64) -> String {
	if val.is_nan() {
		"NaN".to_owned()
	} else if val.is_infinite() {
		if val > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
	} else if val == 0.0 {
		"0".to_owned()
	} else if val.fract() == 0.0 && val.abs() < 1e21 {
		format!("{val:.0}")
	} else {
		val.to_string()
	}
}
