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

    let run = INSERTION_THRESHOLD.max(8);
    if len <= run {
        common::insertion_sort(data, cmp);
        return;
    }

    for chunk in data.chunks_mut(run) {
        common::insertion_sort(chunk, cmp);
    }

    let buf = ctx.fill_scratch(data);

    let mut width = run;
    let mut src_is_buf = true;
    while width < len {
        if src_is_buf {
            merge_pass(buf, data, width, cmp);
        } else {
            merge_pass(data, buf, width, cmp);
        }
        src_is_buf = !src_is_buf;
        width <<= 1;
    }

    if src_is_buf {
        data.clone_from_slice(buf);
    }
}

fn merge_pass<T: Clone, C: Comparator<T> + ?Sized>(
    src: &[T],
    dst: &mut [T],
    width: usize,
    cmp: &C,
) {
    let len = src.len();
    let mut left = 0usize;
    while left < len {
        let mid = (left + width).min(len);
        let right = (mid + width).min(len);

        if mid >= right || cmp.compare(&src[mid - 1], &src[mid]) != Ordering::Greater {
            dst[left..right].clone_from_slice(&src[left..right]);
        } else {
            common::merge_ranges(src, dst, left, mid, right, cmp);
        }

        left = right;
    }
}
