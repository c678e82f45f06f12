// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flood fill over rope links.
//!
//! Mark a band of leaves as walls, then breadth-first walk the remaining
//! leaves from one corner using only the cached neighbor links.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_flood_fill`

use std::collections::{HashSet, VecDeque};

use kurbo::{Point, Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{NodeId, QuadTree, Region};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let size = 256.0;
    let mut tree = QuadTree::new(Region::new(0.0, 0.0, size, size), 3, 6);
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    for _ in 0..400 {
        tree.insert(Point::new(rng.next_f64() * size, rng.next_f64() * size));
    }
    tree.update();

    // A vertical wall with a gap near the top.
    let wall = Rect::new(120.0, 0.0, 136.0, 200.0);
    let blocked = |id: NodeId| {
        let r = tree.node(id).region().to_rect();
        r.x0 < wall.x1 && wall.x0 < r.x1 && r.y0 < wall.y1 && wall.y0 < r.y1
    };

    let Some(start) = tree.get_node(1.0, 1.0) else {
        return;
    };
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut reached_area = 0.0;
    while let Some(id) = queue.pop_front() {
        let region = tree.node(id).region();
        reached_area += region.width() * region.height();
        for &next in tree.neighbors(id) {
            if !blocked(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    let total = tree.leaves().count();
    let walls = tree.leaves().filter(|&id| blocked(id)).count();
    info!(
        leaves = total,
        walls,
        reached = seen.len(),
        "flood fill finished, covering {:.1}% of the region",
        100.0 * reached_area / (size * size)
    );
    if let Some(far) = tree.get_node(size - 1.0, 1.0) {
        info!("far corner reached: {}", seen.contains(&far));
    }
}
