use std::cmp::Ordering;

use crate::{Comparator, INSERTION_THRESHOLD, SortContext};

use super::common;

pub fn sort<T: Clone, C: Comparator<T> + ?Sized>(
    data: &mut [T],
    cmp: &C,
    ctx: &mut SortContext<T>,
) {
    let len = data.len();
    if len < 2 {
        return;
    }
    if common::is_sorted_by(data, cmp) {
        return;
    }

    let buf = ctx.fill_scratch(data);
    merge_sort_recursive(buf, data, 0, len, cmp);
}

// `src` and `dst` hold the same elements on entry; the sorted range ends up in `dst`.
fn merge_sort_recursive<T: Clone, C: Comparator<T> + ?Sized>(
    src: &mut [T],
    dst: &mut [T],
    left: usize,
    right: usize,
    cmp: &C,
) {
    let len = right - left;
    if len <= INSERTION_THRESHOLD {
        common::insertion_sort(&mut dst[left..right], cmp);
        return;
    }

    let mid = left + (len >> 1);

    merge_sort_recursive(dst, src, left, mid, cmp);
    merge_sort_recursive(dst, src, mid, right, cmp);

    if cmp.compare(&src[mid - 1], &src[mid]) != Ordering::Greater {
        dst[left..right].clone_from_slice(&src[left..right]);
        return;
    }

    common::merge_ranges(src, dst, left, mid, right, cmp);
}
