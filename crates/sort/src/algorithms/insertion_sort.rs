use crate::Comparator;

use super::common;

pub fn sort<T, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    common::insertion_sort(data, cmp);
}
