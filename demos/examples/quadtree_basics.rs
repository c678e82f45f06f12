// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert a handful of points, refresh rope links, and walk the leaves.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`
//! - `RUST_LOG=understory_quadtree=trace cargo run -p understory_demos --example quadtree_basics`

use kurbo::Point;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Direction, QuadTree, Quadrant, Region};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0), 4, 4);
    for (x, y) in [
        (10.0, 10.0),
        (30.0, 10.0),
        (10.0, 30.0),
        (30.0, 30.0),
        (20.0, 20.0),
        (75.0, 80.0),
    ] {
        tree.insert(Point::new(x, y));
    }
    if !tree.insert(Point::new(150.0, 5.0)) {
        info!("dropped a point outside {}", tree.region());
    }
    tree.update();
    info!(?tree, "built");

    for leaf in tree.leaves() {
        let node = tree.node(leaf);
        info!(
            "leaf {:?} depth {} [{}] points {}",
            leaf,
            node.depth(),
            node.region(),
            node.points().len()
        );
        for dir in Direction::ALL {
            let ids = node.neighbors_toward(dir);
            if !ids.is_empty() {
                info!("  {:?}: {:?}", dir, ids);
            }
        }
    }

    let probe = Point::new(10.0, 10.0);
    if let Some(leaf) = tree.get_node_at(probe) {
        let node = tree.node(leaf);
        info!(
            "({}, {}) lives in {:?} quadrant {:?}, open edges {:?}",
            probe.x,
            probe.y,
            leaf,
            node.quadrant(),
            !node.neighbor_edges()
        );
    }

    match tree.get_child(tree.root(), Quadrant::Root) {
        Ok(id) => info!("unexpected child {:?}", id),
        Err(err) => info!("get_child(Root) rejected: {err}"),
    }
}
