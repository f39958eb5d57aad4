// Copyright 2025 the Trigon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use trigon_bst::{Direction, Tree, Value};
use trigon_render::{
    PolygonStyle, Recording, TreeStyle, draw_tree, draw_triangulation, vertex_labels, vertices,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_key(&mut self, span: i64) -> i64 {
        (self.next_u64() % span as u64) as i64
    }
}

fn gen_keys(count: usize, seed: u64) -> Vec<i64> {
    let mut rng = Rng::new(seed);
    let span = (count as i64 * 4).max(1);
    (0..count).map(|_| rng.next_key(span)).collect()
}

fn build(keys: &[i64]) -> Tree<Value> {
    let mut tree = Tree::with_capacity(keys.len());
    for &k in keys {
        tree.insert(Value::Int(k));
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[16_usize, 256, 4096] {
        let keys = gen_keys(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("random_{n}"), |b| {
            b.iter(|| black_box(build(black_box(&keys))));
        });
    }
    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let keys = gen_keys(1024, 0xBADC_F00D_1234_5678);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let targets: Vec<(i64, Direction)> = (0..256)
        .map(|_| {
            let k = keys[rng.next_u64() as usize % keys.len()];
            (k, Direction::from_flag((rng.next_u64() & 1) as u8))
        })
        .collect();
    c.bench_function("rotate_256_in_1024", |b| {
        b.iter_batched(
            || build(&keys),
            |mut tree| {
                for &(k, dir) in &targets {
                    black_box(tree.rotate(dir, Value::Int(k)));
                }
                tree
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_draw_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_tree");
    let style = TreeStyle::default();
    for &n in &[16_usize, 256] {
        let tree = build(&gen_keys(n, 0x0123_4567_89AB_CDEF));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("nodes_{n}"), |b| {
            b.iter_batched(
                Recording::new,
                |mut surface| {
                    draw_tree(&mut surface, black_box(&tree), &style);
                    surface
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation");
    let style = PolygonStyle::default();
    for &n in &[16_usize, 256] {
        let tree = build(&gen_keys(n, 0xFEED_FACE_0BAD_CAFE));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("vertices_{n}"), |b| {
            b.iter(|| black_box(vertices(&vertex_labels(black_box(&tree)), &style)));
        });
        group.bench_function(format!("draw_{n}"), |b| {
            b.iter_batched(
                Recording::new,
                |mut surface| {
                    draw_triangulation(&mut surface, black_box(&tree), &style);
                    surface
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_rotate,
    bench_draw_tree,
    bench_triangulation,
);
criterion_main!(benches);
