//! Throughput benchmarks.
//! 吞吐量基准测试

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mimalloc::MiMalloc;

use cuckoo_filter::Filter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const CAPACITY: usize = 1 << 20;

fn insert(c: &mut Criterion) {
  let mut group = c.benchmark_group("insert");

  for load in [0.25, 0.5, 0.9] {
    let mut filter = Filter::new(CAPACITY);
    let prefill = (CAPACITY as f64 * load) as u64;
    for i in 0..prefill {
      filter.insert(&i.to_le_bytes());
    }

    group.bench_function(BenchmarkId::new("load", load), |b| {
      let mut i = prefill;
      b.iter(|| {
        // Keep the load level steady
        // 保持负载稳定
        let key = i.to_le_bytes();
        let r = filter.insert(&key);
        filter.delete(&key);
        i += 1;
        std::hint::black_box(r)
      })
    });
  }
}

fn lookup(c: &mut Criterion) {
  let mut group = c.benchmark_group("lookup");

  for load in [0.25, 0.5, 0.9] {
    let mut filter = Filter::new(CAPACITY);
    let prefill = (CAPACITY as f64 * load) as u64;
    for i in 0..prefill {
      filter.insert(&i.to_le_bytes());
    }

    group.bench_function(BenchmarkId::new("hit", load), |b| {
      let mut i = 0u64;
      b.iter(|| {
        let r = filter.lookup(&i.to_le_bytes());
        i = (i + 1) % prefill;
        std::hint::black_box(r)
      })
    });

    group.bench_function(BenchmarkId::new("miss", load), |b| {
      let mut i = prefill;
      b.iter(|| {
        let r = filter.lookup(&i.to_le_bytes());
        i += 1;
        std::hint::black_box(r)
      })
    });
  }
}

fn encode(c: &mut Criterion) {
  let mut filter = Filter::new(CAPACITY);
  for i in 0..(CAPACITY / 2) as u64 {
    filter.insert(&i.to_le_bytes());
  }
  let bytes = filter.encode();

  c.bench_function("encode", |b| b.iter(|| std::hint::black_box(filter.encode())));
  c.bench_function("decode", |b| {
    b.iter(|| std::hint::black_box(Filter::decode(&bytes).map(|f| f.count())))
  });
}

criterion_group!(benches, insert, lookup, encode);
criterion_main!(benches);
