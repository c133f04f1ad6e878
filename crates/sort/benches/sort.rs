use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{apply_medium_runtime_config, apply_small_runtime_config, random_values, random_words};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sort::{
    Book, ByLength, ByPrice, Comparator, SortAlgorithm, SortContext, algorithm_name,
    all_algorithms, sort_with_ctx,
};

const BENCH_SIZES: [usize; 3] = [1024, 16384, 65536];
const MAX_WORD_LEN: usize = 12;

#[inline]
fn is_benchmark_target(algo: SortAlgorithm, size: usize) -> bool {
    let quadratic = matches!(
        algo,
        SortAlgorithm::InsertionSort | SortAlgorithm::BinaryInsertionSort
    );
    !quadratic || size <= 1024
}

fn bench_dataset<T, C, M>(group: &mut BenchmarkGroup<'_, M>, size: usize, base: &[T], cmp: &C)
where
    T: Clone,
    C: Comparator<T>,
    M: Measurement<Value = Duration>,
{
    for &algo in all_algorithms() {
        if !is_benchmark_target(algo, size) {
            continue;
        }
        group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                let mut ctx = SortContext::default();
                for _ in 0..iters {
                    let mut data = base.to_vec();
                    let start = Instant::now();
                    sort_with_ctx(algo, &mut data, cmp, &mut ctx);
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }

    group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
        bencher.iter_custom(|iters| {
            let mut total = Duration::ZERO;
            for _ in 0..iters {
                let mut data = base.to_vec();
                let start = Instant::now();
                data.sort_by(|x, y| cmp.compare(x, y));
                total += start.elapsed();
                black_box(&data);
            }
            total
        });
    });
}

fn bench_sort(c: &mut Criterion) {
    let mut words = c.benchmark_group("sort/words_by_length");
    for &size in &BENCH_SIZES {
        apply_small_runtime_config(&mut words);
        let mut rng = StdRng::seed_from_u64(0x5EED_0001 ^ size as u64);
        let base = random_words(&mut rng, size, MAX_WORD_LEN);
        bench_dataset(&mut words, size, &base, &ByLength);
    }
    words.finish();

    let mut books = c.benchmark_group("sort/books_by_price");
    for &size in &BENCH_SIZES {
        apply_medium_runtime_config(&mut books);
        let mut rng = StdRng::seed_from_u64(0x5EED_0002 ^ size as u64);
        let base: Vec<Book> = random_values(&mut rng, size, 1.0, 500.0)
            .into_iter()
            .enumerate()
            .map(|(i, price)| Book::new(format!("book-{i}"), price))
            .collect();
        bench_dataset(&mut books, size, &base, &ByPrice);
    }
    books.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
