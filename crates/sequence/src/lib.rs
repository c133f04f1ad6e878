mod error;

pub mod impls;

pub use error::SequenceError;
pub use impls::{array_list::ArrayList, linked_list::LinkedList};

/// Ordered, index-addressable, mutable collection.
///
/// - `add` appends at the tail and never fails.
/// - `remove` deletes the first element equal to the argument; an absent
///   element is a silent no-op.
/// - `get` and `set` accept indices in `0..count()` and report
///   [`SequenceError::IndexOutOfBounds`] otherwise.
pub trait Sequence {
    type Item;

    fn add(&mut self, item: Self::Item);

    /// Returns `true` when an element was removed.
    fn remove(&mut self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    fn get(&self, index: usize) -> Result<&Self::Item, SequenceError>;

    fn set(&mut self, index: usize, item: Self::Item) -> Result<(), SequenceError>;

    fn count(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Elements in insertion order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iter().any(|x| x == item)
    }

    fn to_vec(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        self.iter().cloned().collect()
    }

    fn extend<I: IntoIterator<Item = Self::Item>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}
