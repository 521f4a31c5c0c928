//! Typed knobs for the algorithms that take them.
//!
//! All of these deserialize, so a host can keep them in its own config
//! files.

use serde::Deserialize;

/// How far [`crate::flatten`] descends.
///
/// Deserializes from a non-negative integer, or from a boolean where `true`
/// means unbounded and `false` means zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "DepthRepr")]
pub enum Depth {
	Levels(usize),
	Unbounded,
}

impl Depth {
	pub fn is_zero(self) -> bool {
		self == Self::Levels(0)
	}

	/// The budget one level further down.
	pub fn decrement(self) -> Self {
		match self {
			Self::Levels(levels) => Self::Levels(levels.saturating_sub(1)),
			Self::Unbounded => Self::Unbounded,
		}
	}
}

impl Default for Depth {
	fn default() -> Self {
		Self::Levels(1)
	}
}

impl From<usize> for Depth {
	fn from(levels: usize) -> Self {
		Self::Levels(levels)
	}
}

impl From<bool> for Depth {
	fn from(unbounded: bool) -> Self {
		if unbounded { Self::Unbounded } else { Self::Levels(0) }
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DepthRepr {
	Levels(usize),
	Flag(bool),
}

impl From<DepthRepr> for Depth {
	fn from(repr: DepthRepr) -> Self {
		match repr {
			DepthRepr::Levels(levels) => levels.into(),
			DepthRepr::Flag(flag) => flag.into(),
		}
	}
}

/// Whether [`crate::clone`] copies nested lists and records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloneDepth {
	/// One level; nested handles are shared with the source.
	#[default]
	Shallow,
	/// Every nested list and record is copied.
	Deep,
}

impl CloneDepth {
	pub fn is_deep(self) -> bool {
		self == Self::Deep
	}
}

impl From<bool> for CloneDepth {
	fn from(deep: bool) -> Self {
		if deep { Self::Deep } else { Self::Shallow }
	}
}

/// Options for [`crate::flatten_obj`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
	/// Path prepended to every produced key.
	pub prefix: String,
	/// Keep `Null` and `Undefined` leaves instead of dropping them.
	pub keep_null: bool,
}

impl FlattenOptions {
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	pub fn keep_null(mut self, keep_null: bool) -> Self {
		self.keep_null = keep_null;
		self
	}
}
