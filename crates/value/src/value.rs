use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::object::HostObject;
use crate::{Record, ValueType, ValueTypeError};

/// Shared, mutable handle to a list.
///
/// Cloning the handle aliases the same storage; use the collection
/// algorithms' `clone` for a copy.
#[derive(Clone, Default)]
pub struct ListRef(Rc<RefCell<Vec<Value>>>);

impl ListRef {
	pub fn new(vals: Vec<Value>) -> Self {
		Self(Rc::new(RefCell::new(vals)))
	}

	pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
		self.0.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
		self.0.borrow_mut()
	}

	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Returns the element at `index`, sharing any nested handles.
	pub fn get(&self, index: usize) -> Option<Value> {
		self.0.borrow().get(index).cloned()
	}

	pub fn push(&self, value: Value) {
		self.0.borrow_mut().push(value);
	}

	/// Copies the current elements out so callers can iterate without
	/// holding a borrow.
	pub fn snapshot(&self) -> Vec<Value> {
		self.0.borrow().clone()
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Debug for ListRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.0.borrow().iter()).finish()
	}
}

impl From<Vec<Value>> for ListRef {
	fn from(vals: Vec<Value>) -> Self {
		Self::new(vals)
	}
}

/// Shared, mutable handle to a [`Record`].
#[derive(Clone, Default)]
pub struct RecordRef(Rc<RefCell<Record>>);

impl RecordRef {
	pub fn new(record: Record) -> Self {
		Self(Rc::new(RefCell::new(record)))
	}

	pub fn borrow(&self) -> Ref<'_, Record> {
		self.0.borrow()
	}

	pub fn borrow_mut(&self) -> RefMut<'_, Record> {
		self.0.borrow_mut()
	}

	pub fn len(&self) -> usize {
		self.0.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	pub fn get(&self, key: impl AsRef<str>) -> Option<Value> {
		self.0.borrow().get(key).cloned()
	}

	pub fn insert(&self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.0.borrow_mut().insert(key, value)
	}

	pub fn keys(&self) -> Vec<String> {
		self.0.borrow().keys().cloned().collect()
	}

	pub fn snapshot(&self) -> Record {
		self.0.borrow().clone()
	}

	pub fn ptr_eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl fmt::Debug for RecordRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.0.borrow().iter()).finish()
	}
}

impl From<Record> for RecordRef {
	fn from(record: Record) -> Self {
		Self::new(record)
	}
}

/// Shared handle to a [`HostObject`].
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn HostObject>);

impl ObjectRef {
	pub fn new<T>(object: T) -> Self
	where
		T: HostObject + 'static,
	{
		Self(Rc::new(object))
	}

	/// Identity comparison; ignores vtable differences.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
	}
}

impl Deref for ObjectRef {
	type Target = dyn HostObject;

	fn deref(&self) -> &Self::Target {
		&*self.0
	}
}

impl fmt::Debug for ObjectRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Dynamic value operated on by the collection algorithms.
///
/// Scalars are stored inline. Lists, records and host objects are handles:
/// cloning a `Value` shares them.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// An absent value (a missing key, a missing element).
	#[default]
	Undefined,
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	String(String),
	List(ListRef),
	Record(RecordRef),
	Object(ObjectRef),
}

impl Value {
	pub fn string(val: impl Into<String>) -> Self {
		Self::String(val.into())
	}

	pub fn list(vals: Vec<Value>) -> Self {
		Self::List(ListRef::new(vals))
	}

	pub fn record(val: Record) -> Self {
		Self::Record(RecordRef::new(val))
	}

	pub fn object<T>(object: T) -> Self
	where
		T: HostObject + 'static,
	{
		Self::Object(ObjectRef::new(object))
	}

	pub fn get_type(&self) -> ValueType {
		match self {
			Self::Undefined => ValueType::Undefined,
			Self::Null => ValueType::Null,
			Self::Bool(_) => ValueType::Bool,
			Self::Int(_) => ValueType::Int,
			Self::Float(_) => ValueType::Float,
			Self::String(_) => ValueType::String,
			Self::List(_) => ValueType::List,
			Self::Record(_) => ValueType::Record,
			Self::Object(_) => ValueType::Object,
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Self::Undefined)
	}

	/// `Null` or `Undefined`.
	pub fn is_nullish(&self) -> bool {
		matches!(self, Self::Null | Self::Undefined)
	}

	/// Strings, numbers and booleans.
	pub fn is_scalar(&self) -> bool {
		matches!(self, Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_))
	}

	pub fn as_bool(&self) -> Result<bool, ValueTypeError> {
		match self {
			Self::Bool(val) => Ok(*val),
			other => Err(ValueTypeError::new("bool", other.get_type())),
		}
	}

	pub fn as_int(&self) -> Result<i64, ValueTypeError> {
		match self {
			Self::Int(val) => Ok(*val),
			other => Err(ValueTypeError::new("int", other.get_type())),
		}
	}

	pub fn as_float(&self) -> Result<f64, ValueTypeError> {
		match self {
			Self::Float(val) => Ok(*val),
			other => Err(ValueTypeError::new("float", other.get_type())),
		}
	}

	/// Either numeric variant widened to `f64`.
	pub fn as_number(&self) -> Result<f64, ValueTypeError> {
		match self {
			Self::Int(val) => Ok(*val as f64),
			Self::Float(val) => Ok(*val),
			other => Err(ValueTypeError::new("number", other.get_type())),
		}
	}

	pub fn as_str(&self) -> Result<&str, ValueTypeError> {
		match self {
			Self::String(val) => Ok(val),
			other => Err(ValueTypeError::new("string", other.get_type())),
		}
	}

	pub fn as_list(&self) -> Result<&ListRef, ValueTypeError> {
		match self {
			Self::List(vals) => Ok(vals),
			other => Err(ValueTypeError::new("list", other.get_type())),
		}
	}

	pub fn as_record(&self) -> Result<&RecordRef, ValueTypeError> {
		match self {
			Self::Record(val) => Ok(val),
			other => Err(ValueTypeError::new("record", other.get_type())),
		}
	}

	pub fn as_object(&self) -> Result<&ObjectRef, ValueTypeError> {
		match self {
			Self::Object(val) => Ok(val),
			other => Err(ValueTypeError::new("object", other.get_type())),
		}
	}

	/// True when both values are the same handle (or equal scalars).
	pub fn same(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::List(a), Self::List(b)) => a.ptr_eq(b),
			(Self::Record(a), Self::Record(b)) => a.ptr_eq(b),
			(Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
			(Self::List(_) | Self::Record(_) | Self::Object(_), _)
			| (_, Self::List(_) | Self::Record(_) | Self::Object(_)) => false,
			(a, b) => crate::oracle::eq(a, b),
		}
	}
}

/// Structural equality under [`crate::oracle::eq`].
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		crate::oracle::eq(self, other)
	}
}

impl From<bool> for Value {
	fn from(val: bool) -> Self {
		Self::Bool(val)
	}
}

impl From<i64> for Value {
	fn from(val: i64) -> Self {
		Self::Int(val)
	}
}

impl From<i32> for Value {
	fn from(val: i32) -> Self {
		Self::Int(val.into())
	}
}

impl From<usize> for Value {
	fn from(val: usize) -> Self {
		match i64::try_from(val) {
			Ok(val) => Self::Int(val),
			Err(_) => Self::Float(val as f64),
		}
	}
}

impl From<f64> for Value {
	fn from(val: f64) -> Self {
		Self::Float(val)
	}
}

impl From<&str> for Value {
	fn from(val: &str) -> Self {
		Self::String(val.to_owned())
	}
}

impl From<String> for Value {
	fn from(val: String) -> Self {
		Self::String(val)
	}
}

impl From<Vec<Value>> for Value {
	fn from(vals: Vec<Value>) -> Self {
		Self::list(vals)
	}
}

impl From<Record> for Value {
	fn from(val: Record) -> Self {
		Self::record(val)
	}
}

impl From<ListRef> for Value {
	fn from(vals: ListRef) -> Self {
		Self::List(vals)
	}
}

impl From<RecordRef> for Value {
	fn from(val: RecordRef) -> Self {
		Self::Record(val)
	}
}

impl From<ObjectRef> for Value {
	fn from(val: ObjectRef) -> Self {
		Self::Object(val)
	}
}

impl TryFrom<&Value> for bool {
	type Error = ValueTypeError;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		value.as_bool()
	}
}

impl TryFrom<&Value> for i64 {
	type Error = ValueTypeError;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		match value {
			Value::Float(val) if val.fract() == 0.0 && val.is_finite() => Ok(*val as i64),
			other => other.as_int(),
		}
	}
}

impl TryFrom<&Value> for f64 {
	type Error = ValueTypeError;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		value.as_number()
	}
}

impl TryFrom<&Value> for String {
	type Error = ValueTypeError;

	fn try_from(value: &Value) -> Result<Self, Self::Error> {
		value.as_str().map(str::to_owned)
	}
}
