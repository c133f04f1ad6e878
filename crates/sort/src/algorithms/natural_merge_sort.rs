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
    if len <= INSERTION_THRESHOLD {
        common::insertion_sort(data, cmp);
        return;
    }

    let scratch = ctx.fill_scratch(data);
    let mut runs = Vec::new();

    loop {
        runs.clear();
        collect_runs(data, &mut runs, cmp);
        if runs.len() <= 1 {
            break;
        }

        let mut write = 0usize;
        let mut idx = 0usize;
        while idx < runs.len() {
            if idx + 1 < runs.len() {
                let (l0, l1) = runs[idx];
                let (r0, r1) = runs[idx + 1];
                let total = (l1 - l0) + (r1 - r0);
                merge_two_runs(
                    &data[l0..l1],
                    &data[r0..r1],
                    &mut scratch[write..(write + total)],
                    cmp,
                );
                write += total;
                idx += 2;
            } else {
                let (start, end) = runs[idx];
                let run_len = end - start;
                scratch[write..(write + run_len)].clone_from_slice(&data[start..end]);
                write += run_len;
                idx += 1;
            }
        }

        data.clone_from_slice(&scratch[..len]);
    }
}

// Only strictly descending runs are reversed, so equal elements never swap.
fn collect_runs<T, C: Comparator<T> + ?Sized>(
    data: &mut [T],
    runs: &mut Vec<(usize, usize)>,
    cmp: &C,
) {
    let n = data.len();
    let mut i = 0usize;

    while i < n {
        let start = i;
        i += 1;
        if i == n {
            runs.push((start, i));
            break;
        }

        if cmp.compare(&data[i - 1], &data[i]) != Ordering::Greater {
            while i < n && cmp.compare(&data[i - 1], &data[i]) != Ordering::Greater {
                i += 1;
            }
        } else {
            while i < n && cmp.compare(&data[i - 1], &data[i]) == Ordering::Greater {
                i += 1;
            }
            data[start..i].reverse();
        }

        runs.push((start, i));
    }
}

#[inline]
fn merge_two_runs<T: Clone, C: Comparator<T> + ?Sized>(
    left: &[T],
    right: &[T],
    dst: &mut [T],
    cmp: &C,
) {
    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = 0usize;

    while i < left.len() && j < right.len() {
        if cmp.compare(&right[j], &left[i]) == Ordering::Less {
            dst[k] = right[j].clone();
            j += 1;
        } else {
            dst[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    if i < left.len() {
        dst[k..(k + (left.len() - i))].clone_from_slice(&left[i..]);
    } else if j < right.len() {
        dst[k..(k + (right.len() - j))].clone_from_slice(&right[j..]);
    }
}
