mod algorithms;
mod book;
mod comparator;

use tracing::trace;

pub use book::Book;
pub use comparator::{ByLength, ByPrice, Comparator};

/// Every algorithm here is stable: elements the comparator reports `Equal`
/// keep their input order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    BinaryInsertionSort,
    MergeSortTopDown,
    MergeSortBottomUp,
    NaturalMergeSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 5] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::BinaryInsertionSort,
    SortAlgorithm::MergeSortTopDown,
    SortAlgorithm::MergeSortBottomUp,
    SortAlgorithm::NaturalMergeSort,
];

pub const DEFAULT_ALGORITHM: SortAlgorithm = SortAlgorithm::MergeSortTopDown;

pub(crate) const INSERTION_THRESHOLD: usize = 24;

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::BinaryInsertionSort => "binary_insertion_sort",
        SortAlgorithm::MergeSortTopDown => "merge_sort_top_down",
        SortAlgorithm::MergeSortBottomUp => "merge_sort_bottom_up",
        SortAlgorithm::NaturalMergeSort => "natural_merge_sort",
    }
}

/// Reusable merge buffer. Keeping one around across calls avoids
/// reallocating scratch space for every sort.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    scratch: Vec<T>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
        }
    }
}

impl<T: Clone> SortContext<T> {
    #[inline]
    pub(crate) fn fill_scratch(&mut self, data: &[T]) -> &mut [T] {
        self.scratch.clear();
        self.scratch.extend_from_slice(data);
        &mut self.scratch
    }
}

/// Sorts `data` in place, stably, in the order given by `cmp`.
pub fn sort<T: Clone, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    sort_with(DEFAULT_ALGORITHM, data, cmp);
}

pub fn sort_with<T: Clone, C: Comparator<T> + ?Sized>(
    algo: SortAlgorithm,
    data: &mut [T],
    cmp: &C,
) {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, cmp, &mut ctx);
}

pub fn sort_with_ctx<T: Clone, C: Comparator<T> + ?Sized>(
    algo: SortAlgorithm,
    data: &mut [T],
    cmp: &C,
    ctx: &mut SortContext<T>,
) {
    trace!(algorithm = algorithm_name(algo), len = data.len(), "sort");
    match algo {
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, cmp),
        SortAlgorithm::BinaryInsertionSort => algorithms::binary_insertion_sort::sort(data, cmp),
        SortAlgorithm::MergeSortTopDown => algorithms::merge_sort_top_down::sort(data, cmp, ctx),
        SortAlgorithm::MergeSortBottomUp => algorithms::merge_sort_bottom_up::sort(data, cmp, ctx),
        SortAlgorithm::NaturalMergeSort => algorithms::natural_merge_sort::sort(data, cmp, ctx),
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    // Tags every element with its input position so stability is observable.
    fn assert_sorts_like_std_stable(data: &[u64]) {
        let tagged: Vec<(u64, usize)> = data.iter().copied().zip(0..).collect();
        let by_key = |x: &(u64, usize), y: &(u64, usize)| x.0.cmp(&y.0);

        let mut expected = tagged.clone();
        expected.sort_by(by_key);

        for &algo in all_algorithms() {
            let mut actual = tagged.clone();
            sort_with(algo, &mut actual, &by_key);
            assert_eq!(
                actual,
                expected,
                "algorithm={} input_len={}",
                algorithm_name(algo),
                data.len(),
            );
        }
    }

    #[test]
    fn algorithm_names_are_unique() {
        let mut seen = HashSet::new();
        for &algo in all_algorithms() {
            assert!(seen.insert(algorithm_name(algo)));
        }
    }

    #[test]
    fn edge_cases() {
        let cases = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![u64::MIN, 1, u64::MAX, 0, u64::MAX - 1, 2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std_stable(case);
        }
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let data: Vec<u64> = (0..size).map(|_| rng.random::<u64>()).collect();
            assert_sorts_like_std_stable(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let data: Vec<u64> = (0..size).map(|_| rng.random_range(0..16u64) * 17).collect();
            assert_sorts_like_std_stable(&data);
        }
    }

    #[test]
    fn words_by_length_keep_tie_order() {
        let mut words = ["banana", "kiwi", "apple", "grape"];
        sort(&mut words, &ByLength);
        assert_eq!(words, ["kiwi", "apple", "grape", "banana"]);

        let mut words = vec![
            "apple".to_string(),
            "banana".to_string(),
            "kiwi".to_string(),
            "grape".to_string(),
        ];
        sort(&mut words, &ByLength);
        assert_eq!(words, ["kiwi", "apple", "grape", "banana"]);
    }

    #[test]
    fn books_by_price_ascending() {
        let mut books = vec![
            Book::new("SICP", 54.0),
            Book::new("Dune", 9.99),
            Book::new("TAOCP", 199.5),
            Book::new("Hyperion", 9.99),
        ];
        for &algo in all_algorithms() {
            let mut actual = books.clone();
            sort_with(algo, &mut actual, &ByPrice);
            let titles: Vec<&str> = actual.iter().map(|b| b.title.as_str()).collect();
            assert_eq!(titles, ["Dune", "Hyperion", "SICP", "TAOCP"]);
        }
        sort(&mut books, &ByPrice);
        assert_eq!(books[0].price, 9.99);
    }

    #[test]
    fn dyn_comparator_and_reused_context() {
        let desc: &dyn Comparator<i32> = &|x: &i32, y: &i32| y.cmp(x);
        let mut ctx = SortContext::default();
        for len in [0usize, 1, 30, 100] {
            let mut data: Vec<i32> = (0..len as i32).collect();
            sort_with_ctx(SortAlgorithm::MergeSortBottomUp, &mut data, desc, &mut ctx);
            assert!(data.windows(2).all(|w| w[0].cmp(&w[1]) != Ordering::Less));
        }
    }
}
