//! Conversions between [`Value`] and `serde_json` values.

use serde_json::{Map, Number};

use crate::{Record, Value, ValueType, ValueTypeError};

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(val) => Self::Bool(val),
			serde_json::Value::Number(val) => match val.as_i64() {
				Some(int) => Self::Int(int),
				None => Self::Float(val.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(val) => Self::String(val),
			serde_json::Value::Array(vals) => Self::list(vals.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::record(map.into()),
		}
	}
}

impl From<Map<String, serde_json::Value>> for Record {
	fn from(map: Map<String, serde_json::Value>) -> Self {
		let mut out = Self::with_capacity(map.len());
		for (key, value) in map {
			out.insert(key, value.into());
		}
		out
	}
}

impl Value {
	/// Converts to JSON. `Undefined` and non-finite floats become `null`;
	/// host objects have no JSON form.
	pub fn to_json(&self) -> Result<serde_json::Value, ValueTypeError> {
		Ok(match self {
			Self::Undefined | Self::Null => serde_json::Value::Null,
			Self::Bool(val) => serde_json::Value::Bool(*val),
			Self::Int(val) => serde_json::Value::Number((*val).into()),
			Self::Float(val) => Number::from_f64(*val).map_or(serde_json::Value::Null, serde_json::Value::Number),
			Self::String(val) => serde_json::Value::String(val.clone()),
			Self::List(vals) => {
				let vals = vals.borrow().iter().map(Self::to_json).collect::<Result<Vec<_>, _>>()?;
				serde_json::Value::Array(vals)
			}
			Self::Record(val) => {
				let mut map = Map::with_capacity(val.len());
				for (key, item) in val.borrow().iter() {
					map.insert(key.clone(), item.to_json()?);
				}
				serde_json::Value::Object(map)
			}
			Self::Object(_) => return Err(ValueTypeError::new("json-compatible value", ValueType::Object)),
		})
	}
}
