use std::iter::FusedIterator;
use std::marker::PhantomData;

use ListState::*;

use super::{LinkedList, ListContents, ListState};
use crate::util::option::OptionExtension;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

pub struct IntoIter<T> {
    // The iterator just holds the list and removes from either end.
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.try_remove_last().ok()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.list.len()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    // Although the fields are exactly the same as a list, this structure doesn't modify the
    // underlying nodes and uses len to track the number of items left to yield.
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let Full(ListContents { len, head, .. }) = &mut self.state else {
            return None;
        };
        let value = head.value_mut();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: More than one element remained, so the head has a successor.
                *head = unsafe { head.next().unreachable() };
                *len = new_len;
            },
            None => self.state = Empty,
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let Full(ListContents { len, tail, .. }) = &mut self.state else {
            return None;
        };
        let value = tail.value_mut();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: More than one element remained, so the tail has a predecessor.
                *tail = unsafe { tail.prev().unreachable() };
                *len = new_len;
            },
            None => self.state = Empty,
        }

        Some(value)
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}

pub struct Iter<'a, T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let Full(ListContents { len, head, .. }) = &mut self.state else {
            return None;
        };
        let value = head.value();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: More than one element remained, so the head has a successor.
                *head = unsafe { head.next().unreachable() };
                *len = new_len;
            },
            None => self.state = Empty,
        }

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let Full(ListContents { len, tail, .. }) = &mut self.state else {
            return None;
        };
        let value = tail.value();

        match len.decremented() {
            Some(new_len) => {
                // SAFETY: More than one element remained, so the tail has a predecessor.
                *tail = unsafe { tail.prev().unreachable() };
                *len = new_len;
            },
            None => self.state = Empty,
        }

        Some(value)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.state.len()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            state: self.state.clone(),
            _phantom: PhantomData,
        }
    }
}
