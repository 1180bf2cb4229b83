use std::marker::PhantomData;

use super::{Link, LinkedList};
use crate::collections::traits::Sequenceable;
use crate::util::error::{ConcurrentModification, CursorError, Exhausted, NoCurrentElement};
use crate::util::generation::Generation;

/// A detached forward cursor over a [`LinkedList`], created by [`LinkedList::cursor`].
///
/// The cursor holds the node it will return next and the node it returned last, so each step and
/// each removal is `O(1)`. It records the [`Generation`] of the list as of its last operation, and
/// only touches those nodes if the list it is given still carries that generation, failing with
/// [`CursorError::ConcurrentModification`] otherwise.
#[derive(Debug)]
pub struct LinkedCursor<T> {
    pub(crate) next: Link<T>,
    pub(crate) last: Link<T>,
    pub(crate) index: usize,
    pub(crate) generation: Generation,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> LinkedCursor<T> {
    pub(crate) const fn new(list: &LinkedList<T>) -> LinkedCursor<T> {
        LinkedCursor {
            next: list.head(),
            last: None,
            index: 0,
            generation: list.generation(),
            _phantom: PhantomData,
        }
    }

    /// The number of elements before the cursor.
    pub const fn index(&self) -> usize {
        self.index
    }

    fn check(&self, list: &LinkedList<T>) -> Result<(), ConcurrentModification> {
        let found = list.generation();
        if self.generation == found {
            Ok(())
        } else {
            Err(ConcurrentModification {
                expected: self.generation,
                found,
            })
        }
    }
}

impl<T> Sequenceable for LinkedCursor<T> {
    type Seq = LinkedList<T>;
    type Item = T;

    fn has_next(&self, seq: &LinkedList<T>) -> bool {
        self.index < seq.len()
    }

    fn next<'a>(&mut self, seq: &'a LinkedList<T>) -> Result<&'a T, CursorError> {
        self.check(seq)?;
        let node = self.next.ok_or(Exhausted)?;

        self.next = node.next();
        self.last = Some(node);
        self.index += 1;
        Ok(node.value())
    }

    fn remove(&mut self, seq: &mut LinkedList<T>) -> Result<T, CursorError> {
        self.check(seq)?;
        let node = self.last.take().ok_or(NoCurrentElement)?;

        // The next node is untouched, only its link back to the removed node changes.
        let value = seq.unlink(node);
        self.index -= 1;
        self.generation = seq.generation();
        Ok(value)
    }
}
