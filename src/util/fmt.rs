//! Formatting helpers shared by the collections' [`Debug`] and [`Display`] implementations.

use std::fmt::{self, Debug, Display, Formatter};

/// Formats a cloneable iterator as a debug list, so that a collection can nest its contents in a
/// `debug_struct` without collecting them first.
pub struct DebugIter<I>(pub I);

impl<I> Debug for DebugIter<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Writes the canonical rendering of a sequence: `[]` when empty, otherwise each element's
/// [`Display`] form in order, separated by `", "` and wrapped in brackets.
pub fn display_seq<I>(f: &mut Formatter<'_>, iter: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Display,
{
    write!(f, "[")?;
    let mut iter = iter.into_iter();
    if let Some(first) = iter.next() {
        write!(f, "{first}")?;
        for item in iter {
            write!(f, ", {item}")?;
        }
    }
    write!(f, "]")
}
