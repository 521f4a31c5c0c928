//! Collection contracts and polymorphic collection algorithms.
//!
//! The contracts ([`Collection`], [`Sequence`], [`Reversible`]) are traits
//! that user containers implement; [`FrozenSet`] is the one concrete
//! container shipped here. The algorithms operate on dynamic
//! [`Value`]s and behave the same whether the operand is a list, a record
//! or a host object, deferring to a host object's own capabilities before
//! falling back to generic logic.

/// Shallow and deep copies.
mod clone;
/// The base container contract.
mod collection;
/// Nested list and dotted-path flattening.
mod flatten;
/// Immutable insertion-ordered set.
mod frozen_set;
/// Typed algorithm options.
mod options;
/// `pick` and `omit`.
mod project;
/// Membership and position search.
mod search;
/// Predicate-based selection.
mod select;
/// Selector, iteratee and key-function arguments.
mod selector;
/// Positional containers.
mod sequence;
/// Traversal over lists and keyed values.
mod traverse;
/// Deduplication.
mod uniq;

pub use clone::{clone, clone_array};
pub use collection::{Collection, Items};
pub use flatten::{flatten, flatten_array, flatten_obj, flatten_obj_into, flattened_array};
pub use frozen_set::FrozenSet;
pub use options::{CloneDepth, Depth, FlattenOptions};
pub use project::{omit, pick};
pub use search::{contains, index};
pub use select::{filter, find, find_right, matches};
pub use selector::{Iteratee, Key, KeyFn, KeySelector, Selector};
pub use sequence::{Reversible, Sequence};
pub use sundry_value::{CollectionError, ListRef, Record, RecordRef, Result, Value, oracle};
pub use traverse::{for_each, map};
pub use uniq::{sorted_uniq, uniq};
