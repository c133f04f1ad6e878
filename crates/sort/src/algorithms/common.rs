use std::cmp::Ordering;

use crate::Comparator;

/// Stable: an element only moves past neighbours that compare `Greater`.
#[inline]
pub fn insertion_sort<T, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && cmp.compare(&data[j - 1], &data[i]) == Ordering::Greater {
            j -= 1;
        }
        if j < i {
            data[j..=i].rotate_right(1);
        }
    }
}

/// Stable: the insertion point is the upper bound of equal keys.
#[inline]
pub fn binary_insertion_sort<T, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    for i in 1..data.len() {
        let (sorted, rest) = data.split_at(i);
        let key = &rest[0];
        let pos = sorted.partition_point(|x| cmp.compare(x, key) != Ordering::Greater);
        if pos < i {
            data[pos..=i].rotate_right(1);
        }
    }
}

#[inline]
pub fn is_sorted_by<T, C: Comparator<T> + ?Sized>(data: &[T], cmp: &C) -> bool {
    data.windows(2)
        .all(|w| cmp.compare(&w[0], &w[1]) != Ordering::Greater)
}

/// Merges `src[left..mid]` and `src[mid..right]` into `dst[left..right]`.
/// Ties are taken from the left run.
#[inline]
pub fn merge_ranges<T: Clone, C: Comparator<T> + ?Sized>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    cmp: &C,
) {
    let mut i = left;
    let mut j = mid;
    let mut k = left;

    while i < mid && j < right {
        if cmp.compare(&src[j], &src[i]) == Ordering::Less {
            dst[k] = src[j].clone();
            j += 1;
        } else {
            dst[k] = src[i].clone();
            i += 1;
        }
        k += 1;
    }

    if i < mid {
        dst[k..(k + (mid - i))].clone_from_slice(&src[i..mid]);
    } else if j < right {
        dst[k..(k + (right - j))].clone_from_slice(&src[j..right]);
    }
}
