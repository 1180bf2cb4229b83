use std::marker::PhantomData;

use super::ArrayList;
use crate::collections::traits::{Bidirectional, Direction, Sequenceable};
use crate::util::error::{ConcurrentModification, CursorError, Exhausted, NoCurrentElement};
use crate::util::generation::Generation;

/// A detached cursor over an [`ArrayList`], created by [`ArrayList::cursor`].
///
/// The cursor is an index between two elements, along with the direction of its last step and
/// whether the element it stepped over can still be removed or replaced. It records the
/// [`Generation`] of the list as of its last operation, and every operation fails with
/// [`CursorError::ConcurrentModification`] if the list it is given has a different one. Structural
/// changes made through the cursor itself keep it in sync.
#[derive(Debug)]
pub struct ArrayCursor<T> {
    pub(crate) next: usize,
    pub(crate) direction: Direction,
    pub(crate) has_current: bool,
    pub(crate) generation: Generation,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> ArrayCursor<T> {
    pub(crate) const fn new(generation: Generation) -> ArrayCursor<T> {
        ArrayCursor {
            next: 0,
            direction: Direction::Forward,
            has_current: false,
            generation,
            _phantom: PhantomData,
        }
    }

    fn check(&self, list: &ArrayList<T>) -> Result<(), ConcurrentModification> {
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

    /// The index of the element last stepped over, which depends on the direction of the step.
    const fn current(&self) -> Result<usize, NoCurrentElement> {
        if !self.has_current {
            return Err(NoCurrentElement);
        }
        Ok(match self.direction {
            Direction::Forward => self.next - 1,
            Direction::Backward => self.next,
        })
    }
}

impl<T> Sequenceable for ArrayCursor<T> {
    type Seq = ArrayList<T>;
    type Item = T;

    fn has_next(&self, seq: &ArrayList<T>) -> bool {
        self.next < seq.len()
    }

    fn next<'a>(&mut self, seq: &'a ArrayList<T>) -> Result<&'a T, CursorError> {
        self.check(seq)?;
        let value = seq.try_get(self.next).map_err(|_| Exhausted)?;

        self.next += 1;
        self.direction = Direction::Forward;
        self.has_current = true;
        Ok(value)
    }

    fn remove(&mut self, seq: &mut ArrayList<T>) -> Result<T, CursorError> {
        self.check(seq)?;
        let index = self.current()?;
        let value = seq.try_remove(index)?;

        // After a forward step the removed element was behind the cursor, so everything at and
        // after the cursor has shifted down by one.
        if index < self.next {
            self.next -= 1;
        }
        self.has_current = false;
        self.generation = seq.generation();
        Ok(value)
    }
}

impl<T> Bidirectional for ArrayCursor<T> {
    fn has_previous(&self, _seq: &ArrayList<T>) -> bool {
        self.next > 0
    }

    fn previous<'a>(&mut self, seq: &'a ArrayList<T>) -> Result<&'a T, CursorError> {
        self.check(seq)?;
        let index = self.next.checked_sub(1).ok_or(Exhausted)?;
        let value = seq.try_get(index)?;

        self.next = index;
        self.direction = Direction::Backward;
        self.has_current = true;
        Ok(value)
    }

    fn next_index(&self) -> usize {
        self.next
    }

    fn previous_index(&self) -> Option<usize> {
        self.next.checked_sub(1)
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn add(&mut self, seq: &mut ArrayList<T>, value: T) -> Result<(), CursorError> {
        self.check(seq)?;
        seq.try_insert(self.next, value)?;

        self.next += 1;
        self.has_current = false;
        self.generation = seq.generation();
        Ok(())
    }

    fn set(&mut self, seq: &mut ArrayList<T>, value: T) -> Result<T, CursorError> {
        self.check(seq)?;
        let index = self.current()?;
        Ok(seq.try_set(index, value)?)
    }
}
