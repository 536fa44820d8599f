//! mergington-storage 성능 벤치마크
//!
//! 실행: cargo bench -p mergington-storage
//!
//! 벤치마크 대상:
//! - 카탈로그 스냅샷
//! - 참가 신청/취소 왕복

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mergington_core::models::activity::{Activity, ActivityCatalog};
use mergington_storage::MemoryDirectory;
use std::hint::black_box;

/// 참가자 수가 지정된 단일 활동 디렉토리
fn directory_with_participants(count: usize) -> MemoryDirectory {
    let activity = Activity::new("Bench", "Daily", u32::MAX)
        .with_participants((0..count).map(|i| format!("student{i}@mergington.edu")));
    let catalog: ActivityCatalog = [("Bench Club", activity)].into_iter().collect();
    MemoryDirectory::new(catalog)
}

/// 스냅샷 벤치마크
fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(size as u64));
        let dir = directory_with_participants(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dir, |b, dir| {
            b.iter(|| black_box(dir.snapshot()));
        });
    }

    group.finish();
}

/// 신청 후 취소 왕복 벤치마크 (참가자 수에 따른 선형 탐색 비용)
fn bench_signup_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("signup_roundtrip");

    for size in [10, 100, 1_000] {
        let dir = directory_with_participants(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dir, |b, dir| {
            b.iter(|| {
                dir.register("Bench Club", "bench@mergington.edu").unwrap();
                black_box(dir.withdraw("Bench Club", "bench@mergington.edu").unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_snapshot, bench_signup_roundtrip);
criterion_main!(benches);
