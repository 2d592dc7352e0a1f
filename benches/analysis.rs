use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use text_analyzer::analyze;

fn analysis_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    // Sample texts of various sizes
    let texts = [
        "Hello world".to_string(),
        "This is a simple test. Does it count sentences? It should!".to_string(),
        // Generate progressively larger texts
        std::iter::repeat("The quick brown fox jumps over the lazy dog. ")
            .take(10)
            .collect::<String>(),
        std::iter::repeat("The quick brown fox jumps over the lazy dog. ")
            .take(100)
            .collect::<String>(),
        std::iter::repeat("Ünïcödé wörds, tøo! ")
            .take(100)
            .collect::<String>(),
    ];

    for (i, text) in texts.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("text", i), text, |b, text| {
            b.iter(|| analyze(text));
        });
    }

    group.finish();
}

criterion_group!(benches, analysis_benchmark);
criterion_main!(benches);
