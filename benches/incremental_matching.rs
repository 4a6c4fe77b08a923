use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use digiguard::filters::{MatchScope, filter, filter_in_scope, suggest};
use digiguard::models::GlossaryEntry;

/// Generate synthetic glossary entries with varied terms and categories
fn generate_glossary(num_entries: usize) -> Vec<GlossaryEntry> {
    let words = [
        "phishing", "smishing", "vishing", "spoofing", "malware", "ransomware", "truffa", "pacco",
        "bonifico", "password", "identità", "spid",
    ];
    let categories = ["Email", "SMS", "Telefono", "Web", "Identità"];

    (0..num_entries)
        .map(|i| {
            let word = words[i % words.len()];
            GlossaryEntry::new(
                i as i64,
                format!("{} {}", word, i),
                format!("Definizione di {} con dettagli sulla truffa numero {}", word, i),
                categories[i % categories.len()],
            )
        })
        .collect()
}

fn bench_incremental_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_matching");

    for size in [100, 1_000, 10_000].iter() {
        let glossary = generate_glossary(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("filter_query", size), size, |b, _| {
            b.iter(|| filter(black_box(&glossary), black_box("phish"), None).len());
        });

        group.bench_with_input(BenchmarkId::new("filter_query_category", size), size, |b, _| {
            b.iter(|| filter(black_box(&glossary), black_box("ing"), Some("Email")).len());
        });

        group.bench_with_input(BenchmarkId::new("filter_definitions", size), size, |b, _| {
            b.iter(|| {
                let query = black_box("dettagli");
                filter_in_scope(black_box(&glossary), query, None, MatchScope::Extended).len()
            });
        });

        group.bench_with_input(BenchmarkId::new("suggest", size), size, |b, _| {
            b.iter(|| suggest(black_box(&glossary), black_box("tru"), 5));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_incremental_matching);
criterion_main!(benches);
