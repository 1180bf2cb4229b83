use std::num::NonZero;

/// The length of a non-empty list. An empty list has no contents at all, so its length never
/// needs to be stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Adds one node, returning [`None`] on overflow.
    pub const fn incremented(self) -> Option<Length> {
        match self.0.checked_add(1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    /// Removes one node, returning [`None`] if this was the last one.
    pub const fn decremented(self) -> Option<Length> {
        match NonZero::new(self.0.get() - 1) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
