use crate::util::error::CursorError;

/// Forward traversal of a collection, one element at a time in index order, with removal of the
/// element most recently returned.
///
/// The collection is passed to every call and must be the same one that created the cursor.
/// Passing a different collection, or one that has been structurally modified other than through
/// this cursor, results in [`CursorError::ConcurrentModification`].
pub trait Sequenceable {
    /// The collection type this cursor traverses.
    type Seq;
    /// The type of the elements in [`Self::Seq`].
    type Item;

    /// Returns true if a call to [`next`](Sequenceable::next) would produce an element.
    fn has_next(&self, seq: &Self::Seq) -> bool;

    /// Returns the element at the cursor and advances past it.
    ///
    /// # Errors
    /// - [`CursorError::Exhausted`] if the cursor is already past the last element.
    /// - [`CursorError::ConcurrentModification`] if `seq` has been structurally modified since
    ///   the cursor last observed it.
    fn next<'a>(&mut self, seq: &'a Self::Seq) -> Result<&'a Self::Item, CursorError>;

    /// Removes the element most recently returned by this cursor from `seq`, and returns it. At
    /// most one element can be removed per step.
    ///
    /// # Errors
    /// - [`CursorError::NoCurrentElement`] if nothing has been returned since the cursor was
    ///   created or last modified `seq`.
    /// - [`CursorError::ConcurrentModification`] as for [`next`](Sequenceable::next).
    fn remove(&mut self, seq: &mut Self::Seq) -> Result<Self::Item, CursorError>;
}

/// The direction of the last successful step of a [`Bidirectional`] cursor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The last step was a call to [`next`](Sequenceable::next).
    #[default]
    Forward,
    /// The last step was a call to [`previous`](Bidirectional::previous).
    Backward,
}

/// Traversal in both directions, with insertion and replacement at the cursor.
///
/// The cursor sits between two elements: [`next_index`](Bidirectional::next_index) is the index
/// of the element after it and [`previous_index`](Bidirectional::previous_index) the element
/// before it.
pub trait Bidirectional: Sequenceable {
    /// Returns true if a call to [`previous`](Bidirectional::previous) would produce an element.
    fn has_previous(&self, seq: &Self::Seq) -> bool;

    /// Returns the element before the cursor and moves the cursor back past it.
    ///
    /// # Errors
    /// - [`CursorError::Exhausted`] if the cursor is at the start.
    /// - [`CursorError::ConcurrentModification`] as for [`next`](Sequenceable::next).
    fn previous<'a>(&mut self, seq: &'a Self::Seq) -> Result<&'a Self::Item, CursorError>;

    /// The index of the element that would be returned by [`next`](Sequenceable::next).
    fn next_index(&self) -> usize;

    /// The index of the element that would be returned by
    /// [`previous`](Bidirectional::previous), or [`None`] at the start.
    fn previous_index(&self) -> Option<usize>;

    /// The direction of the last successful step.
    fn direction(&self) -> Direction;

    /// Inserts `value` immediately before the cursor. A following call to
    /// [`next`](Sequenceable::next) is unaffected, while [`previous`](Bidirectional::previous)
    /// would return the new element.
    ///
    /// # Errors
    /// - [`CursorError::ConcurrentModification`] as for [`next`](Sequenceable::next).
    fn add(&mut self, seq: &mut Self::Seq, value: Self::Item) -> Result<(), CursorError>;

    /// Replaces the element most recently returned by [`next`](Sequenceable::next) or
    /// [`previous`](Bidirectional::previous), returning the old value.
    ///
    /// # Errors
    /// - [`CursorError::NoCurrentElement`] if there is no such element, as for
    ///   [`remove`](Sequenceable::remove).
    /// - [`CursorError::ConcurrentModification`] as for [`next`](Sequenceable::next).
    fn set(&mut self, seq: &mut Self::Seq, value: Self::Item) -> Result<Self::Item, CursorError>;
}
