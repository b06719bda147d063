//! Benchmarks for command construction.
//!
//! Run benchmarks:
//! ```bash
//! cargo bench --bench builder_benchmark
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use muxis_cmds::{key_slot, Builder, CommandPool, KeySlot, PoolConfig};

/// Benchmark: slot hashing for keys of different lengths.
fn bench_key_slot(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_slot");

    for len in [8usize, 64, 512].iter() {
        let key = "k".repeat(*len);
        group.throughput(Throughput::Bytes(*len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &key, |b, key| {
            b.iter(|| key_slot(black_box(key)));
        });
    }

    group.bench_function("hash_tag", |b| {
        b.iter(|| key_slot(black_box("{user1000}.following")));
    });

    group.finish();
}

/// Benchmark: SET with options, recycling through the pool.
fn bench_set_recycled(c: &mut Criterion) {
    let builder = Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT);

    c.bench_function("set_recycled", |b| {
        b.iter(|| {
            let cmd = builder
                .set()
                .key(black_box("bench:key"))
                .value(black_box("value"))
                .nx()
                .ex(60)
                .build();
            cmd.release();
        });
    });
}

/// Benchmark: SET without returning buffers, so every command allocates.
fn bench_set_unpooled(c: &mut Criterion) {
    let builder = Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT);

    c.bench_function("set_unpooled", |b| {
        b.iter(|| {
            let cmd = builder
                .set()
                .key(black_box("bench:key"))
                .value(black_box("value"))
                .nx()
                .ex(60)
                .build();
            drop(black_box(cmd));
        });
    });
}

/// Benchmark: MGET with a growing number of same-slot keys.
fn bench_mget(c: &mut Criterion) {
    let mut group = c.benchmark_group("mget");
    let builder = Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT);

    for count in [1usize, 10, 100].iter() {
        let keys: Vec<String> = (0..*count).map(|i| format!("{{tag}}:{i}")).collect();
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &keys, |b, keys| {
            b.iter(|| {
                let cmd = builder.mget().key(keys.iter().cloned()).cache();
                cmd.into_completed().release();
            });
        });
    }

    group.finish();
}

/// Benchmark: scatter of a cross-slot key set into per-slot MGETs.
fn bench_mgets_scatter(c: &mut Criterion) {
    let builder = Builder::with_pool(CommandPool::new(PoolConfig::default()), KeySlot::NO_SLOT);
    let keys: Vec<String> = (0..64).map(|i| format!("key:{i}")).collect();

    c.bench_function("mgets_scatter_64", |b| {
        b.iter(|| {
            for (_, cmd) in builder.mgets(keys.iter().cloned()) {
                cmd.release();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_key_slot,
    bench_set_recycled,
    bench_set_unpooled,
    bench_mget,
    bench_mgets_scatter
);
criterion_main!(benches);
