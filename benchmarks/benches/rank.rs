use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tupi_algorithm::hashtable::MapAlgorithm;

fn hashmap_rank_benchmark(c: &mut Criterion) {
    // Zipf-ish synthetic corpus: low word ids repeat much more often.
    let words: Vec<String> = (1..200_000u32)
        .map(|n| format!("palavra{}", n % (n / 100 + 1)))
        .collect();

    let mut map = MapAlgorithm::default();

    println!("Testing HashMap algorithm on {} words.", words.len());

    c.bench_function("set HashMap", |b| {
        b.iter(|| {
            for word in words.iter().take(black_box(words.len())) {
                map.set(word.to_string());
            }
        });
    });

    c.bench_function("rank 3 most used words HashMap", |b| {
        b.iter(|| map.rank(3))
    });

    c.bench_function("rank 10 most used words HashMap", |b| {
        b.iter(|| map.rank(10))
    });

    c.bench_function("rank 100 most used words HashMap", |b| {
        b.iter(|| map.rank(100))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = hashmap_rank_benchmark,
}
criterion_main!(benches);
