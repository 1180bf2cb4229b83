use std::hint;

pub(crate) trait OptionExtension<T> {
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Unwraps an [`Option`] that a structural invariant guarantees to be [`Some`], such as an
    /// occupied slot below an ArrayList's length or the neighbour of an interior node.
    ///
    /// Debug builds panic via [`unreachable!`] when the invariant is broken, release builds use
    /// [`unreachable_unchecked`](hint::unreachable_unchecked).
    #[track_caller]
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!("collection invariant violated"),
            // SAFETY: It is the responsibility of the caller to ensure that None is impossible when
            // invoking this method.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
