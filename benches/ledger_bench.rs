//! Criterion benchmarks for hot paths in the achievement ledger.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - report_progress (linear key scan, no-unlock paths)
//!   - persisted blob encode/decode (serde_json)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use questline_core::store::MemoryStore;
use questline_core::{AchievementLedger, AchievementRecord};

fn full_catalog_ledger() -> AchievementLedger {
    AchievementLedger::load(Box::new(MemoryStore::new()), "achievements")
}

// ─── report_progress ─────────────────────────────────────────────────────────

fn bench_report_progress(c: &mut Criterion) {
    c.bench_function("report_progress_below_threshold", |b| {
        let mut ledger = full_catalog_ledger();
        b.iter(|| {
            black_box(ledger.report_progress(black_box("quests_100"), black_box(5)));
        });
    });

    c.bench_function("report_progress_unknown_key", |b| {
        let mut ledger = full_catalog_ledger();
        b.iter(|| {
            black_box(ledger.report_progress(black_box("not_a_key"), black_box(999)));
        });
    });
}

// ─── Blob codec ──────────────────────────────────────────────────────────────

fn bench_blob_codec(c: &mut Criterion) {
    let mut ledger = full_catalog_ledger();
    ledger.report_progress("quests_10", 10);
    ledger.report_progress("gold_1k", 640);

    c.bench_function("encode_ledger_blob", |b| {
        b.iter(|| {
            let bytes = serde_json::to_vec(black_box(ledger.records())).unwrap();
            black_box(bytes);
        });
    });

    c.bench_function("decode_ledger_blob", |b| {
        let bytes = serde_json::to_vec(ledger.records()).unwrap();
        b.iter(|| {
            let records: Vec<AchievementRecord> =
                serde_json::from_slice(black_box(&bytes)).unwrap();
            black_box(records);
        });
    });
}

criterion_group!(benches, bench_report_progress, bench_blob_codec);
criterion_main!(benches);
