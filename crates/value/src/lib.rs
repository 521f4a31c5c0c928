//! Dynamic value model shared by the sundry crates.
//!
//! [`Value`] is a small dynamically typed value: scalars, shared lists,
//! shared insertion-ordered records, and user-defined [`HostObject`]s that
//! advertise optional capabilities. The [`oracle`] module classifies and
//! compares values; the collection algorithms are built on top of it.

/// Error taxonomy for collection contracts and typed accessors.
pub mod error;
/// Conversions to and from `serde_json`.
mod json;
/// Host objects and their optional capabilities.
pub mod object;
/// Type classification, equality and ordering.
pub mod oracle;
/// Insertion-ordered string-keyed record.
pub mod record;
/// The value enum and its shared handles.
pub mod value;

pub use error::{CollectionError, Result, ValueType, ValueTypeError};
pub use object::{Cloneable, Comparable, Container, HostObject, IndexOf, Indexed};
pub use record::{Record, RecordIter};
pub use value::{ListRef, ObjectRef, RecordRef, Value};
