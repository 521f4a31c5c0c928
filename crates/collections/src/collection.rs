//! The base contract for user-defined containers.

use std::fmt;

use sundry_value::{CollectionError, Result};

/// A container that can be grown, shrunk and walked.
///
/// Implementors supply the mutators. `contains` and `next_item` have no-op
/// defaults; `size` has no sound default and fails until overridden. A
/// container whose `size` is zero must never report `contains` as true.
///
/// Every [`Sequence`](crate::Sequence) is a `Collection` through a blanket
/// implementation.
pub trait Collection {
	type Item;

	fn add(&mut self, item: Self::Item) -> Result<()>;

	/// Removes the first element equal to `item`.
	///
	/// # Errors
	///
	/// [`CollectionError::ValueNotFound`] when no element matches.
	fn remove(&mut self, item: &Self::Item) -> Result<()>;

	/// Retrieves and removes the element at `index`; `Ok(None)` when there is
	/// none.
	fn pop(&mut self, index: usize) -> Result<Option<Self::Item>>;

	fn clear(&mut self) -> Result<()>;

	fn contains(&self, _item: &Self::Item) -> bool {
		false
	}

	fn size(&self) -> Result<usize> {
		Err(CollectionError::not_implemented("Collection::size"))
	}

	/// Advances the collection's own iteration cursor.
	fn next_item(&mut self) -> Option<Self::Item> {
		None
	}

	/// Iterator over the collection's elements.
	///
	/// Defaults to repeated [`next_item`](Self::next_item). Sequences walk
	/// their positions with `get` instead.
	fn items(&mut self) -> Items<'_, Self>
	where
		Self: Sized,
	{
		Items {
			collection: self,
			walk: Walk::Cursor,
		}
	}
}

/// Iterator returned by [`Collection::items`].
pub struct Items<'a, C: Collection> {
	collection: &'a mut C,
	walk: Walk<C>,
}

enum Walk<C: Collection> {
	Cursor,
	Position {
		next: usize,
		read: fn(&C, usize) -> Option<C::Item>,
	},
}

impl<'a, C: Collection> Items<'a, C> {
	/// Walks positions from zero, stopping at the first one `read` misses.
	pub(crate) fn positional(collection: &'a mut C, read: fn(&C, usize) -> Option<C::Item>) -> Self {
		Self {
			collection,
			walk: Walk::Position { next: 0, read },
		}
	}
}

impl<C: Collection> Iterator for Items<'_, C> {
	type Item = C::Item;

	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.walk {
			Walk::Cursor => self.collection.next_item(),
			Walk::Position { next, read } => {
				let item = (*read)(&*self.collection, *next)?;
				*next += 1;
				Some(item)
			}
		}
	}
}

impl<C: Collection> fmt::Debug for Items<'_, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.walk {
			Walk::Cursor => f.debug_struct("Items").field("walk", &"cursor").finish(),
			Walk::Position { next, .. } => f.debug_struct("Items").field("next", next).finish(),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	/// Implements only the required members.
	#[derive(Debug, Default)]
	struct Bag {
		items: Vec<i64>,
	}

	impl Collection for Bag {
		type Item = i64;

		fn add(&mut self, item: i64) -> Result<()> {
			self.items.push(item);
			Ok(())
		}

		fn remove(&mut self, item: &i64) -> Result<()> {
			let position = self
				.items
				.iter()
				.position(|candidate| candidate == item)
				.ok_or_else(|| CollectionError::value_not_found(item))?;
			self.items.remove(position);
			Ok(())
		}

		fn pop(&mut self, index: usize) -> Result<Option<i64>> {
			Ok((index < self.items.len()).then(|| self.items.remove(index)))
		}

		fn clear(&mut self) -> Result<()> {
			self.items.clear();
			Ok(())
		}
	}

	#[test]
	fn defaults_are_conservative() {
		let mut bag = Bag::default();
		bag.add(1).unwrap();
		assert!(!bag.contains(&1));
		assert_eq!(bag.size(), Err(CollectionError::not_implemented("Collection::size")));
		assert_eq!(bag.next_item(), None);
		assert_eq!(bag.items().count(), 0);
	}

	#[test]
	fn required_members_drive_the_container() {
		let mut bag = Bag::default();
		for item in [3, 4, 3] {
			bag.add(item).unwrap();
		}
		bag.remove(&3).unwrap();
		assert_eq!(bag.items, vec![4, 3]);
		assert_eq!(bag.remove(&9), Err(CollectionError::value_not_found(&9)));
		assert_eq!(bag.pop(1), Ok(Some(3)));
		assert_eq!(bag.pop(5), Ok(None));
		bag.clear().unwrap();
		assert!(bag.items.is_empty());
	}
}
