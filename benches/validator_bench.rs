use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cuival::validator::validate_cui;

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_bare_cui", |b| {
        b.iter(|| validate_cui(black_box("18547290")));
    });

    c.bench_function("validate_prefixed_separated", |b| {
        b.iter(|| validate_cui(black_box("RO 18.547-290")));
    });

    c.bench_function("validate_invalid_checksum", |b| {
        b.iter(|| validate_cui(black_box("18547291")));
    });

    c.bench_function("validate_batch_of_100", |b| {
        let cuis: Vec<String> = (0..100).map(|i| format!("185472{:02}", i % 100)).collect();
        b.iter(|| {
            for cui in &cuis {
                black_box(validate_cui(black_box(cui)));
            }
        });
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
