// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-node payloads through a factory closure.
//!
//! Every node carries a traversal cost derived from its size and depth. The
//! factory sees the node's context at creation time; costs are then adjusted
//! in place through `data_mut`.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_node_data`

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{NodeContext, QuadTreeGeneric, Region, TreeConfig};

#[derive(Debug)]
struct Cell {
    cost: f64,
    visits: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree: QuadTreeGeneric<Point, Cell, _> = QuadTreeGeneric::with_factory(
        Region::new(0.0, 0.0, 64.0, 64.0),
        TreeConfig::new(2, 4),
        |ctx: &NodeContext| Cell {
            cost: ctx.region.width() / f64::from(ctx.depth + 1),
            visits: 0,
        },
    );
    for (x, y) in [(4.0, 4.0), (6.0, 5.0), (7.0, 7.0), (40.0, 40.0), (50.0, 10.0)] {
        tree.insert(Point::new(x, y));
    }
    tree.update();

    let leaves: Vec<_> = tree.leaves().collect();
    for &leaf in &leaves {
        let crowded = tree.node(leaf).points().len();
        if let Some(cell) = tree.data_mut(leaf) {
            cell.cost += crowded as f64;
            cell.visits += 1;
        }
    }
    for &leaf in &leaves {
        let node = tree.node(leaf);
        info!(
            "leaf {:?} [{}] {:?} neighbors {}",
            leaf,
            node.region(),
            node.data(),
            node.neighbors().len()
        );
    }
    info!(nodes = tree.node_count(), "done");
}
