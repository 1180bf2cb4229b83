use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{ArrayCursor, Iter, IterMut};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::fmt::{DebugIter, display_seq};
use crate::util::generation::Generation;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 1;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous list, backed by a single block of slots which is replaced with one
/// twice the size whenever it runs out of room.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the ArrayList has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct ArrayList<T> {
    pub(crate) arr: Box<[Option<T>]>,
    pub(crate) len: usize,
    pub(crate) generation: Generation,
}

impl<T> ArrayList<T> {
    /// Creates a new ArrayList with length and capacity 0. Storage will be allocated when the
    /// first element is added.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 0);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(0)
    }

    /// Creates a new ArrayList with capacity exactly equal to the provided value, allowing values
    /// to be added without reallocation.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<u8> = ArrayList::with_cap(5);
    /// assert_eq!(list.cap(), 5);
    /// list.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(list.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList {
            arr: empty_slots(cap),
            len: 0,
            generation: Generation::fresh(),
        }
    }

    /// Returns the length of the ArrayList.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList, the number of elements it can hold before
    /// the next reallocation.
    pub fn cap(&self) -> usize {
        self.arr.len()
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slot(index))
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the ArrayList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(self.slot_mut(index))
    }

    /// Replaces the element at the provided index with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (1..=3).collect();
    /// assert_eq!(list.set(1, 20), 2);
    /// assert_eq!(list.to_string(), "[1, 20, 3]");
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    /// Replaces the element at the provided index with `value`, returning the old value or an
    /// [`Err`] if the index is out of bounds.
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Push the provided value onto the end of the ArrayList, growing it first if it is full.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let mut list = ArrayList::<u8>::new();
    /// for i in 0..=5 {
    ///     list.push(i);
    /// }
    /// assert_eq!(list.to_string(), "[0, 1, 2, 3, 4, 5]");
    /// assert_eq!(list.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }

        self.arr[self.len] = Some(value);
        self.len += 1;
        self.generation = Generation::fresh();
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to [`push`](ArrayList::push).
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = (0..3).collect();
    /// list.insert(1, 100);
    /// list.insert(1, 200);
    /// list.insert(5, 300);
    /// assert_eq!(list.to_string(), "[0, 200, 100, 1, 2, 300]");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, returning an [`Err`] if the index is
    /// greater than the length.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // Place the value in the first free slot, then rotate it down into position.
        self.arr[self.len] = Some(value);
        self.arr[index..=self.len].rotate_right(1);

        self.len += 1;
        self.generation = Generation::fresh();
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// let mut list: ArrayList<_> = "Hello world!".chars().collect();
    /// assert_eq!(list.remove(1), 'e');
    /// assert_eq!(list.remove(4), ' ');
    /// assert_eq!(list, "Hlloworld!".chars().collect::<ArrayList<_>>());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, returning it or an [`Err`] if the index is out
    /// of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // Rotate the removed value up into the last occupied slot, then clear that slot.
        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;
        self.generation = Generation::fresh();

        // SAFETY: The slot at the old len - 1 was occupied and now holds the removed value.
        Ok(unsafe { self.arr[self.len].take().unreachable() })
    }

    /// Removes all elements from the ArrayList, keeping its capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.arr[..self.len] {
            *slot = None;
        }
        self.len = 0;
        self.generation = Generation::fresh();
    }

    /// Ensures that the ArrayList has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if len + extra overflows [`usize`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Creates a cursor positioned before the first element. The same cursor supports forward
    /// traversal ([`Sequenceable`](crate::collections::traits::Sequenceable)) and traversal in
    /// both directions ([`Bidirectional`](crate::collections::traits::Bidirectional)).
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::contiguous::ArrayList;
    /// # use seq_collections::collections::traits::{Bidirectional, Sequenceable};
    /// let mut list: ArrayList<_> = (1..=3).collect();
    /// let mut cursor = list.cursor();
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.remove(&mut list), Ok(2));
    /// assert_eq!(cursor.previous(&list), Ok(&1));
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// ```
    pub fn cursor(&self) -> ArrayCursor<T> {
        ArrayCursor::new(self.generation)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Replaces the backing storage with a new block of `new_cap` slots, moving every element
    /// into the same index of the new block.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        let mut new_arr = empty_slots(new_cap);

        for (new_slot, old_slot) in new_arr.iter_mut().zip(&mut self.arr[..self.len]) {
            *new_slot = old_slot.take();
        }

        self.arr = new_arr;
    }

    /// Grows the backing storage to allow for the insertion of additional elements. After calling
    /// this, the ArrayList can take at least one more element.
    ///
    /// # Panics
    /// Panics if the new capacity would overflow [`usize`].
    pub(crate) fn grow(&mut self) {
        // Doubling an empty list leaves no room, so there's a floor of MIN_CAP.
        let doubled = self.len.checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow).throw();
        self.realloc_with_cap(cmp::max(doubled, MIN_CAP));
    }

    /// Checks that the provided index refers to an element of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) const fn generation(&self) -> Generation {
        self.generation
    }

    fn slot(&self, index: usize) -> &T {
        // SAFETY: Callers only pass indices < len, and all slots < len are occupied.
        unsafe { self.arr[index].as_ref().unreachable() }
    }

    fn slot_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: Callers only pass indices < len, and all slots < len are occupied.
        unsafe { self.arr[index].as_mut().unreachable() }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(value);
        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());

        for value in self.iter() {
            list.push(value.clone());
        }

        list
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_seq(f, self.iter())
    }
}
