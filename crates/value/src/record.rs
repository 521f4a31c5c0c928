use indexmap::IndexMap;

use crate::Value;

/// Insertion-ordered record backing [`Value::Record`].
///
/// Keys enumerate in the order they were first inserted. Overwriting an
/// existing key replaces its value in place and keeps its position.
#[derive(Debug, Clone, Default)]
pub struct Record {
	inner: IndexMap<String, Value>,
}

impl Record {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			inner: IndexMap::with_capacity(capacity),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Inserts `value` under `key`, returning the previous value if any.
	pub fn insert<K>(&mut self, key: K, value: Value) -> Option<Value>
	where
		K: Into<String>,
	{
		self.inner.insert(key.into(), value)
	}

	/// Removes `key` while preserving the order of the remaining keys.
	pub fn remove(&mut self, key: impl AsRef<str>) -> Option<Value> {
		self.inner.shift_remove(key.as_ref())
	}

	pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
		self.inner.contains_key(key.as_ref())
	}

	pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
		self.inner.get(key.as_ref())
	}

	pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut Value> {
		self.inner.get_mut(key.as_ref())
	}

	pub fn keys(&self) -> impl ExactSizeIterator<Item = &String> {
		self.inner.keys()
	}

	pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
		self.inner.values()
	}

	pub fn clear(&mut self) {
		self.inner.clear();
	}

	pub fn iter(&self) -> RecordIter<'_> {
		RecordIter { inner: self.inner.iter() }
	}
}

pub struct RecordIter<'a> {
	inner: indexmap::map::Iter<'a, String, Value>,
}

impl<'a> Iterator for RecordIter<'a> {
	type Item = (&'a String, &'a Value);

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a> DoubleEndedIterator for RecordIter<'a> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.next_back()
	}
}

impl<'a> ExactSizeIterator for RecordIter<'a> {}

impl<'a> IntoIterator for &'a Record {
	type Item = (&'a String, &'a Value);
	type IntoIter = RecordIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for Record {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

impl<K, V> FromIterator<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut record = Self::new();
		for (key, value) in iter {
			record.insert(key, value.into());
		}
		record
	}
}

impl<K, V> Extend<(K, V)> for Record
where
	K: Into<String>,
	V: Into<Value>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value.into());
		}
	}
}

/// Structural equality under [`crate::oracle::eq`]; key order is ignored.
impl PartialEq for Record {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len()
			&& self
				.iter()
				.all(|(key, value)| other.get(key).is_some_and(|theirs| crate::oracle::eq(value, theirs)))
	}
}
