//! Test helpers for observing how collections treat the values they own.

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped. Cloning shares the counter, so a whole
/// collection of these reports how many of its elements have been dropped so far.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new counter starting from `value`.
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(value)))
    }

    /// Returns the number of drops recorded so far by any clone sharing this counter.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
