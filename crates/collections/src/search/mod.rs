//! Membership and position search with duck-typed delegation.
//!
//! A host object that exposes a search capability answers for itself and the
//! generic scan is skipped entirely. Dispatch order for [`index`] is
//! [`IndexOf`](sundry_value::IndexOf), then [`Indexed`](sundry_value::Indexed),
//! then the generic scan.

use sundry_value::{Result, Value, oracle};

#[cfg(test)]
mod tests;

/// Whether `item` occurs in `collection`.
///
/// Delegates verbatim to a host [`Container`](sundry_value::Container);
/// otherwise this is `index(collection, item, 0)` finding a position.
pub fn contains(collection: &Value, item: &Value) -> Result<bool> {
	if let Value::Object(object) = collection
		&& let Some(container) = object.as_container()
	{
		tracing::trace!(type_name = object.type_name(), "collections.contains.delegate");
		return Ok(container.contains(item));
	}
	Ok(index(collection, item, 0)?.is_some())
}

/// Lowest position at or after `start` holding `item`.
///
/// A negative `start` counts from the end and clamps at zero. Strings search
/// for the substring `key_of(item)` and report character positions. Lists,
/// and array-like records or host objects (decimal keys plus `length`),
/// compare elements with [`oracle::eq`]. Other operands contain nothing.
pub fn index(collection: &Value, item: &Value, start: i64) -> Result<Option<usize>> {
	if let Value::Object(object) = collection {
		if let Some(search) = object.as_index_of() {
			tracing::trace!(type_name = object.type_name(), via = "index_of", "collections.index.delegate");
			return Ok(usize::try_from(search.index_of(item, start)).ok());
		}
		if let Some(search) = object.as_indexed() {
			tracing::trace!(type_name = object.type_name(), via = "index", "collections.index.delegate");
			return search.index(item, start);
		}
	}
	Ok(scan(collection, item, start))
}

fn scan(collection: &Value, item: &Value, start: i64) -> Option<usize> {
	match collection {
		Value::String(haystack) => find_substring(haystack, &oracle::key_of(item), start),
		Value::List(vals) => {
			let vals = vals.borrow();
			let from = normalize_start(start, vals.len());
			vals.iter()
				.enumerate()
				.skip(from)
				.find_map(|(position, candidate)| oracle::eq(candidate, item).then_some(position))
		}
		Value::Record(_) | Value::Object(_) => {
			let len = array_like_len(collection);
			let from = normalize_start(start, len);
			(from..len).find(|position| oracle::eq(&oracle::prop(collection, &position.to_string()), item))
		}
		_ => None,
	}
}

fn normalize_start(start: i64, len: usize) -> usize {
	if start >= 0 {
		return usize::try_from(start).unwrap_or(usize::MAX);
	}
	let len = i64::try_from(len).unwrap_or(i64::MAX);
	usize::try_from(start.saturating_add(len)).unwrap_or(0)
}

fn array_like_len(collection: &Value) -> usize {
	match oracle::prop(collection, "length") {
		Value::Int(len) => usize::try_from(len).unwrap_or(0),
		Value::Float(len) if len.is_finite() && len > 0.0 => len as usize,
		_ => 0,
	}
}

fn find_substring(haystack: &str, needle: &str, start: i64) -> Option<usize> {
	let from = normalize_start(start, haystack.chars().count());
	let byte_from = haystack
		.char_indices()
		.nth(from)
		.map_or(haystack.len(), |(offset, _)| offset);
	let tail = &haystack[byte_from..];
	let offset = tail.find(needle)?;
	Some(from.min(haystack.chars().count()) + tail[..offset].chars().count())
}
