use std::fmt;

use crate::Sequence;
use crate::error::{SequenceError, check_index};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    next: Link<T>,
}

/// Singly-linked chain of owned nodes. Each node is owned by its predecessor
/// and the head by the list itself.
///
/// `add` walks to the tail, so appending is O(n).
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        let mut current = self.head.as_deref();
        for _ in 0..index {
            current = current?.next.as_deref();
        }
        current
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn add(&mut self, item: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { item, next: None }));
        self.len += 1;
    }

    fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let Some(head) = self.head.as_mut() else {
            return false;
        };
        if head.item == *item {
            self.head = head.next.take();
            self.len -= 1;
            return true;
        }

        let mut current = head;
        loop {
            let matched = match &current.next {
                Some(next) => next.item == *item,
                None => return false,
            };
            if matched {
                if let Some(removed) = current.next.take() {
                    current.next = removed.next;
                }
                self.len -= 1;
                return true;
            }
            match current.next.as_mut() {
                Some(next) => current = next,
                None => return false,
            }
        }
    }

    fn get(&self, index: usize) -> Result<&T, SequenceError> {
        check_index(index, self.len)?;
        self.node(index)
            .map(|node| &node.item)
            .ok_or(SequenceError::IndexOutOfBounds {
                index,
                len: self.len,
            })
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), SequenceError> {
        check_index(index, self.len)?;
        let len = self.len;
        let node = self
            .node_mut(index)
            .ok_or(SequenceError::IndexOutOfBounds { index, len })?;
        node.item = item;
        Ok(())
    }

    fn count(&self) -> usize {
        self.len
    }

    fn iter(&self) -> impl Iterator<Item = &T> {
        LinkedList::iter(self)
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop overflows on long chains.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Builds the chain through a tail cursor instead of repeated `add`.
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for item in iter {
            let node = tail.insert(Box::new(Node { item, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
