use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_trie::Trie;

fn words(n: usize) -> Vec<String> {
    // Spread keys over shared prefixes so the tree has depth as well as width.
    (0..n).map(|i| format!("w{:x}{}", i * 7919 % 65521, i % 13)).collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = words(50_000);
    let mut trie = Trie::new();
    trie.add_all(words.iter().map(|w| w.as_str()));
    let encoded = trie.serialize();

    { let mut group = c.benchmark_group("trie");
        group.sample_size(10);
        group.bench_function("insert 50k", |b| b.iter(|| {
            let mut t = Trie::new();
            t.add_all(words.iter().map(|w| w.as_str()));
            t
        }));
        group.bench_function("search", |b| b.iter(|| trie.search(black_box("w1f2a3"))));
        group.bench_function("prefix w1", |b| b.iter(|| trie.find_all_with_prefix(black_box("w1"))));
        group.bench_function("serialize", |b| b.iter(|| trie.serialize()));
        group.bench_function("deserialize", |b| b.iter(|| Trie::from_encoded(black_box(&encoded))));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
