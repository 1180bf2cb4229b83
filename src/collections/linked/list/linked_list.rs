use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, LinkedCursor, Length, Link, Node, NodePtr, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, EmptyContainer, IndexOutOfBounds};
use crate::util::fmt::{DebugIter, display_seq};
use crate::util::generation::Generation;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`LinkedCursor`] for detached traversal with
/// removal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `first/last` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `remove_first/last` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `set` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// Indexed access walks from whichever end of the list is closer to the index.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) generation: Generation,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            generation: Generation::fresh(),
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn first(&self) -> &T {
        self.try_first().throw()
    }

    /// Returns a reference to the first element in the list, or an [`Err`] if the list is empty.
    pub const fn try_first(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { head, .. }) => Ok(head.value()),
        }
    }

    /// Returns a reference to the last element in the list.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn last(&self) -> &T {
        self.try_last().throw()
    }

    /// Returns a reference to the last element in the list, or an [`Err`] if the list is empty.
    pub const fn try_last(&self) -> Result<&T, EmptyContainer> {
        match &self.state {
            Empty => Err(EmptyContainer),
            Full(ListContents { tail, .. }) => Ok(tail.value()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow [`usize`].
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
        self.generation = Generation::fresh();
    }

    /// Add the provided element to the back of the LinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow [`usize`].
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
        self.generation = Generation::fresh();
    }

    /// Add the provided element to the back of the LinkedList, the same as
    /// [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if the length of the list would overflow [`usize`].
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.to_string(), "[1, 2]");
    /// ```
    pub fn push(&mut self, value: T) {
        self.push_back(value);
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(1);
    /// list.push_back(2);
    /// list.push_front(0);
    /// assert_eq!(list.to_string(), "[0, 1, 2]");
    /// assert_eq!(list.remove_first(), 0);
    /// assert_eq!(list.remove_last(), 2);
    /// assert_eq!(list.to_string(), "[1]");
    /// ```
    pub fn remove_first(&mut self) -> T {
        self.try_remove_first().throw()
    }

    /// Removes the first element from the list and returns it, or an [`Err`] if the list is
    /// empty.
    pub fn try_remove_first(&mut self) -> Result<T, EmptyContainer> {
        let Full(ListContents { len, head, .. }) = &mut self.state else {
            return Err(EmptyContainer);
        };
        let node = head.take_node();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: The previous length was greater than 1, so the first node was followed
                // by at least one more.
                let mut new_head = unsafe { node.next.unreachable() };
                new_head.set_prev(None);
                *head = new_head;
                *len = new_len;
            },
            None => self.state = Empty,
        }

        self.generation = Generation::fresh();
        Ok(node.value)
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn remove_last(&mut self) -> T {
        self.try_remove_last().throw()
    }

    /// Removes the last element from the list and returns it, or an [`Err`] if the list is empty.
    pub fn try_remove_last(&mut self) -> Result<T, EmptyContainer> {
        let Full(ListContents { len, tail, .. }) = &mut self.state else {
            return Err(EmptyContainer);
        };
        let node = tail.take_node();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: The previous length was greater than 1, so the last node was preceded
                // by at least one more.
                let mut new_tail = unsafe { node.prev.unreachable() };
                new_tail.set_next(None);
                *tail = new_tail;
                *len = new_len;
            },
            None => self.state = Empty,
        }

        self.generation = Generation::fresh();
        Ok(node.value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Replaces the element at the provided index with `value`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn set(&mut self, index: usize, value: T) -> T {
        self.try_set(index, value).throw()
    }

    pub fn try_set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Inserts the provided value so that it ends up at `index`, moving all following elements
    /// back by one. Inserting at `len` is equivalent to [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (0..3).collect();
    /// list.insert(0, 10);
    /// list.insert(2, 20);
    /// list.insert(5, 30);
    /// assert_eq!(list.to_string(), "[10, 0, 20, 1, 2, 30]");
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }

        match &mut self.state {
            Full(contents) if index > 0 => {
                let prev_node = contents.seek(index - 1);
                contents.insert_after(prev_node, value);
                self.generation = Generation::fresh();
            },
            // Either the index is 0, or the list is empty and the index must be 0.
            _ => self.push_front(value),
        }
        Ok(())
    }

    /// Removes the element at the provided index, returning it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let node = self.checked_seek(index)?;
        Ok(self.unlink(node))
    }

    /// Removes all elements from the LinkedList.
    pub fn clear(&mut self) {
        drop(mem::take(self));
    }

    /// Moves all elements of `other` onto the end of self, without reallocating any nodes.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let other_state = mem::take(&mut other.state);

        match &mut self.state {
            Empty => self.state = other_state,
            Full(self_contents) => match other_state {
                Empty => return,
                Full(other_contents) => {
                    self_contents.len = self_contents.len.0
                        .checked_add(other_contents.len.get())
                        .map(Length)
                        .ok_or(CapacityOverflow)
                        .throw();

                    let mut other_head = other_contents.head;
                    self_contents.tail.set_next(Some(other_head));
                    other_head.set_prev(Some(self_contents.tail));
                    self_contents.tail = other_contents.tail;
                },
            },
        }
        self.generation = Generation::fresh();
    }

    /// Creates a cursor positioned before the first element, for forward traversal with removal
    /// ([`Sequenceable`](crate::collections::traits::Sequenceable)).
    ///
    /// # Examples
    /// ```
    /// # use seq_collections::collections::linked::LinkedList;
    /// # use seq_collections::collections::traits::Sequenceable;
    /// let mut list: LinkedList<_> = (1..=4).collect();
    /// let mut cursor = list.cursor();
    /// while cursor.has_next(&list) {
    ///     if cursor.next(&list)? % 2 == 0 {
    ///         cursor.remove(&mut list)?;
    ///     }
    /// }
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// # Ok::<(), seq_collections::collections::CursorError>(())
    /// ```
    pub fn cursor(&self) -> LinkedCursor<T> {
        LinkedCursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`, if there is one.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T> LinkedList<T> {
    pub(crate) const fn generation(&self) -> Generation {
        self.generation
    }

    pub(crate) const fn head(&self) -> Link<T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(*head),
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Full(contents) if index < contents.len.get() => Ok(contents.seek(index)),
            _ => Err(IndexOutOfBounds { index, len: self.len() }),
        }
    }

    /// Removes the provided node from the list, relinking its neighbours around it.
    ///
    /// The node must belong to this list.
    pub(crate) fn unlink(&mut self, node: NodePtr<T>) -> T {
        match (node.prev(), node.next()) {
            // SAFETY: A node with no predecessor is the head, so the list isn't empty.
            (None, _) => unsafe { self.try_remove_first().ok().unreachable() },
            // SAFETY: A node with no successor is the tail, so the list isn't empty.
            (_, None) => unsafe { self.try_remove_last().ok().unreachable() },
            (Some(mut prev), Some(mut next)) => {
                let Full(contents) = &mut self.state else {
                    unreachable!("an interior node belongs to a non-empty list")
                };

                let node = node.take_node();
                prev.set_next(Some(next));
                next.set_prev(Some(prev));
                // SAFETY: An interior node has neighbours on both sides, so the length was >= 3.
                contents.len = unsafe { contents.len.decremented().unreachable() };

                self.generation = Generation::fresh();
                node.value
            },
        }
    }

    /// Checks every link in the list, panicking if any invariant is broken.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                assert!(head.prev().is_none(), "The head shouldn't have a previous node.");
                assert!(tail.next().is_none(), "The tail shouldn't have a next node.");

                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    assert!(next.prev() == Some(curr), "Every next link should be mirrored.");
                    curr = next;
                    count += 1;
                }
                assert!(*tail == curr, "Following next links should end at the tail.");
                assert_eq!(count, len.get(), "The stored length should match the node count.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, walking from whichever end is nearer.
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index > self.len.get() / 2 {
            self.seek_bwd(self.last_index() - index, self.tail)
        } else {
            self.seek_fwd(index, self.head)
        }
    }

    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: count never walks past the tail.
            node = unsafe { node.next().unreachable() };
        }
        node
    }

    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // SAFETY: count never walks past the head.
            node = unsafe { node.prev().unreachable() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.incremented().ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        self.head.set_prev(Some(node));
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.insert_after(self.tail, value);
    }

    /// Links a new node directly after `prev_node`, which must belong to these contents.
    pub fn insert_after(&mut self, mut prev_node: NodePtr<T>, value: T) {
        self.len = self.len.incremented().ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(prev_node),
            next: prev_node.next(),
        });

        match prev_node.next() {
            Some(mut next_node) => next_node.set_prev(Some(node)),
            None => self.tail = node,
        }
        prev_node.set_next(Some(node));
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            // Free nodes along the owning direction only.
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

// SAFETY: A LinkedList uniquely owns all of its nodes, and only hands out references to their
// values through borrows of itself, so it is as thread-safe as T.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: No interior mutability is reachable through a shared LinkedList.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter(self.iter()))
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_seq(f, self.iter())
    }
}
