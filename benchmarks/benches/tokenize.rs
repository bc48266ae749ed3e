use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::HashSet;
use tupi_tokenizer::filter;

fn tokenize_benchmark(c: &mut Criterion) {
    const PORTUGUESE: &str =
        "O sol brilha, iluminando a cidade adormecida. As ruas estão calmas, banhadas numa luz suave. Ao longe, os pássaros cantam a vida!";

    let stopwords: HashSet<String> = ["o", "a", "os", "as", "ao", "numa"]
        .iter()
        .map(|word| word.to_string())
        .collect();

    c.bench_function("filter 130 bytes", |b| {
        b.iter(|| filter(PORTUGUESE, &stopwords))
    });
}

criterion_group!(benches, tokenize_benchmark);
criterion_main!(benches);
