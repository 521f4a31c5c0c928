//! Index-addressable containers.
//!
//! [`Sequence`] members that have no sound default fail with
//! [`CollectionError::NotImplemented`] until overridden. `len` defaults to
//! zero, so a sequence that overrides nothing is simply empty.

use std::fmt;

use sundry_value::{CollectionError, ListRef, Result, Value, oracle};

use crate::{Collection, Items};


/// Reverse iteration.
pub trait Reversible {
	type Item;

	/// The elements of forward iteration, back to front.
	fn reversed(&self) -> Result<Box<dyn Iterator<Item = Self::Item> + '_>> {
		Err(CollectionError::not_implemented("Reversible::reversed"))
	}
}

/// A positional container.
pub trait Sequence: Reversible {
	fn get(&self, _index: usize) -> Result<Option<Self::Item>> {
		Err(CollectionError::not_implemented("Sequence::get"))
	}

	/// Writes `item` at `index`. Writing at `len()` grows the sequence.
	fn set(&mut self, _index: usize, _item: Self::Item) -> Result<()> {
		Err(CollectionError::not_implemented("Sequence::set"))
	}

	fn delete(&mut self, _index: usize) -> Result<()> {
		Err(CollectionError::not_implemented("Sequence::delete"))
	}

	/// Lowest position holding an element equal to `item`.
	fn index(&self, _item: &Self::Item) -> Result<Option<usize>> {
		Err(CollectionError::not_implemented("Sequence::index"))
	}

	fn append(&mut self, item: Self::Item) -> Result<()> {
		let len = self.len();
		self.set(len, item)
	}

	fn extend<I>(&mut self, items: I) -> Result<()>
	where
		I: IntoIterator<Item = Self::Item>,
		Self: Sized,
	{
		for item in items {
			self.append(item)?;
		}
		Ok(())
	}

	fn len(&self) -> usize {
		0
	}

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<S> Collection for S
where
	S: Sequence,
	<S as Reversible>::Item: fmt::Debug,
{
	type Item = <S as Reversible>::Item;

	fn add(&mut self, item: <S as Reversible>::Item) -> Result<()> {
		self.append(item)
	}

	fn remove(&mut self, item: &<S as Reversible>::Item) -> Result<()> {
		match Sequence::index(self, item)? {
			Some(position) => self.delete(position),
			None => Err(CollectionError::value_not_found(item)),
		}
	}

	fn pop(&mut self, index: usize) -> Result<Option<<S as Reversible>::Item>> {
		let Some(item) = Sequence::get(self, index)? else {
			return Ok(None);
		};
		self.delete(index)?;
		Ok(Some(item))
	}

	fn clear(&mut self) -> Result<()> {
		while let Some(last) = Sequence::len(self).checked_sub(1) {
			self.delete(last)?;
		}
		Ok(())
	}

	fn contains(&self, item: &<S as Reversible>::Item) -> bool {
		matches!(Sequence::index(self, item), Ok(Some(_)))
	}

	fn size(&self) -> Result<usize> {
		Ok(Sequence::len(self))
	}

	/// Reads positions `0, 1, ..` with [`Sequence::get`] until one misses or
	/// fails. `next_item` keeps its default since a sequence has no cursor
	/// of its own.
	fn items(&mut self) -> Items<'_, Self>
	where
		Self: Sized,
	{
		Items::positional(self, |sequence, position| Sequence::get(sequence, position).ok().flatten())
	}
}

fn out_of_range(index: usize, len: usize) -> CollectionError {
	CollectionError::OutOfRange { index, len }
}

impl<T: Clone + PartialEq> Reversible for Vec<T> {
	type Item = T;

	fn reversed(&self) -> Result<Box<dyn Iterator<Item = T> + '_>> {
		Ok(Box::new(self.iter().rev().cloned()))
	}
}

impl<T: Clone + PartialEq> Sequence for Vec<T> {
	fn get(&self, index: usize) -> Result<Option<T>> {
		Ok(self.as_slice().get(index).cloned())
	}

	fn set(&mut self, index: usize, item: T) -> Result<()> {
		let len = Vec::len(self);
		match index {
			_ if index < len => self[index] = item,
			_ if index == len => self.push(item),
			_ => return Err(out_of_range(index, len)),
		}
		Ok(())
	}

	fn delete(&mut self, index: usize) -> Result<()> {
		let len = Vec::len(self);
		if index >= len {
			return Err(out_of_range(index, len));
		}
		Vec::remove(self, index);
		Ok(())
	}

	fn index(&self, item: &T) -> Result<Option<usize>> {
		Ok(self.iter().position(|candidate| candidate == item))
	}

	fn append(&mut self, item: T) -> Result<()> {
		self.push(item);
		Ok(())
	}

	fn len(&self) -> usize {
		Vec::len(self)
	}
}

impl Reversible for ListRef {
	type Item = Value;

	fn reversed(&self) -> Result<Box<dyn Iterator<Item = Value> + '_>> {
		Ok(Box::new(self.snapshot().into_iter().rev()))
	}
}

/// Shared list handles are sequences too; writes are visible through every
/// clone of the handle.
impl Sequence for ListRef {
	fn get(&self, index: usize) -> Result<Option<Value>> {
		Ok(ListRef::get(self, index))
	}

	fn set(&mut self, index: usize, item: Value) -> Result<()> {
		let mut vals = self.borrow_mut();
		let len = vals.len();
		match index {
			_ if index < len => vals[index] = item,
			_ if index == len => vals.push(item),
			_ => return Err(out_of_range(index, len)),
		}
		Ok(())
	}

	fn delete(&mut self, index: usize) -> Result<()> {
		let mut vals = self.borrow_mut();
		let len = vals.len();
		if index >= len {
			return Err(out_of_range(index, len));
		}
		vals.remove(index);
		Ok(())
	}

	fn index(&self, item: &Value) -> Result<Option<usize>> {
		Ok(self.snapshot().iter().position(|candidate| oracle::eq(candidate, item)))
	}

	fn append(&mut self, item: Value) -> Result<()> {
		self.push(item);
		Ok(())
	}

	fn len(&self) -> usize {
		ListRef::len(self)
	}
}
