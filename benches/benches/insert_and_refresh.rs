// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_quadtree::{QuadTree, Region};

const SIZE: f64 = 2048.0;

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * SIZE, rng.next_f64() * SIZE))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * SIZE, rng.next_f64() * SIZE));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(
                (cx + dx).clamp(0.0, SIZE),
                (cy + dy).clamp(0.0, SIZE),
            ));
        }
    }
    out
}

fn gen_random_rects(count: usize, w: f64, h: f64) -> Vec<Rect> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * (SIZE - w);
            let y0 = rng.next_f64() * (SIZE - h);
            Rect::new(x0, y0, x0 + w, y0 + h)
        })
        .collect()
}

fn filled_tree(points: &[Point]) -> QuadTree<Point> {
    let mut tree = QuadTree::new(Region::new(0.0, 0.0, SIZE, SIZE), 8, 10);
    for p in points {
        tree.insert(*p);
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &[1_000usize, 10_000, 50_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("uniform_points_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(Region::new(0.0, 0.0, SIZE, SIZE), 8, 10),
                |mut tree| {
                    for p in &points {
                        tree.insert(*p);
                    }
                    black_box(tree.node_count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    let points = gen_clustered_points(16, 1_000, 64.0);
    group.bench_function("clustered_points", |b| {
        b.iter_batched(
            || QuadTree::new(Region::new(0.0, 0.0, SIZE, SIZE), 8, 10),
            |mut tree| {
                for p in &points {
                    tree.insert(*p);
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    let rects = gen_random_rects(5_000, 24.0, 24.0);
    group.bench_function("area_rects", |b| {
        b.iter_batched(
            || QuadTree::new(Region::new(0.0, 0.0, SIZE, SIZE), 8, 10),
            |mut tree| {
                for r in &rects {
                    tree.insert(*r);
                }
                black_box(tree.node_count());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");
    for &n in &[1_000usize, 10_000, 50_000] {
        let tree = filled_tree(&gen_uniform_points(n));
        group.throughput(Throughput::Elements(tree.node_count() as u64));
        group.bench_function(format!("update_uniform_n{}", n), |b| {
            b.iter_batched(
                || filled_tree(&gen_uniform_points(n)),
                |mut tree| {
                    tree.update();
                    black_box(tree.neighbors(tree.root()).len());
                },
                BatchSize::LargeInput,
            )
        });
    }
    let points = gen_clustered_points(16, 1_000, 64.0);
    group.bench_function("update_clustered", |b| {
        b.iter_batched(
            || filled_tree(&points),
            |mut tree| {
                tree.update();
                black_box(tree.node_count());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");
    let points = gen_uniform_points(50_000);
    let tree = filled_tree(&points);
    let probes = gen_uniform_points(1_000);
    group.throughput(Throughput::Elements(probes.len() as u64));
    group.bench_function("get_node_n50000", |b| {
        b.iter(|| {
            let found = probes
                .iter()
                .filter_map(|p| tree.get_node(p.x, p.y))
                .count();
            black_box(found);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_insert, bench_refresh, bench_locate);
criterion_main!(benches);
