use std::fmt;

use tracing::trace;

use crate::Sequence;
use crate::error::{SequenceError, check_index};

pub const INITIAL_CAPACITY: usize = 10;

/// Growable contiguous storage. Capacity starts at [`INITIAL_CAPACITY`] and
/// doubles whenever an `add` finds it full.
#[derive(Clone)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    fn grow(&mut self) {
        let old = self.items.capacity();
        let new = old.max(1) * 2;
        self.items.reserve_exact(new - self.items.len());
        trace!(from = old, to = self.items.capacity(), "array list storage grown");
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for ArrayList<T> {
    type Item = T;

    fn add(&mut self, item: T) {
        if self.items.len() == self.items.capacity() {
            self.grow();
        }
        self.items.push(item);
    }

    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.items.iter().position(|x| x == item) {
            Some(index) => {
                // Shifts the tail left by one.
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        check_index(index, self.items.len())?;
        Ok(&self.items[index])
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), SequenceError> {
        check_index(index, self.items.len())?;
        self.items[index] = item;
        Ok(())
    }

    fn count(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        Sequence::extend(&mut list, iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
