use std::cmp::Ordering;

use crate::Book;

/// Three-way ordering of two values.
///
/// `Less` means `x` orders before `y`, `Greater` after, `Equal` ties.
/// Implementations must be total and free of side effects.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, x: &T, y: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, x: &T, y: &T) -> Ordering {
        self(x, y)
    }
}

/// Orders strings by character count, shortest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByLength;

impl<S: AsRef<str> + ?Sized> Comparator<S> for ByLength {
    #[inline]
    fn compare(&self, x: &S, y: &S) -> Ordering {
        x.as_ref()
            .chars()
            .count()
            .cmp(&y.as_ref().chars().count())
    }
}

/// Orders books by price, cheapest first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ByPrice;

impl Comparator<Book> for ByPrice {
    #[inline]
    fn compare(&self, x: &Book, y: &Book) -> Ordering {
        x.price.total_cmp(&y.price)
    }
}
