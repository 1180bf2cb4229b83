//! Structural modification tracking.
//!
//! Every collection holds a [`Generation`], and replaces it with a fresh one whenever it is
//! structurally modified (an element is added or removed). Cursors record the generation they
//! last observed and refuse to continue if the collection they're given no longer carries it.
//!
//! Generations are drawn from a single process-wide counter rather than a per-collection one, so
//! no two collections ever carry the same value. A matching generation therefore proves both that
//! the collection is unmodified and that it's the same collection the cursor was created from.

use std::sync::atomic::{AtomicU64, Ordering};

use derive_more::Display;

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// An opaque, globally unique stamp for one structural state of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("#{_0}")]
pub struct Generation(u64);

impl Generation {
    /// Returns a generation which has never been returned before.
    pub fn fresh() -> Generation {
        // Only uniqueness matters, no other memory is synchronized through this counter.
        Generation(NEXT_GENERATION.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_generations_are_unique() {
        let a = Generation::fresh();
        let b = Generation::fresh();
        assert_ne!(a, b, "Two fresh generations should never be equal.");
        let copy = a;
        assert_eq!(a, copy, "Copies of a generation should be equal.");
    }
}
