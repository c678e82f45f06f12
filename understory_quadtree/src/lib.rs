// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a region quadtree with rope links between adjacent leaves.
//!
//! Understory Quadtree is a building block for local-search work over a 2D
//! domain: flood fills, proximity queries, and mesh stitching.
//!
//! - Stores point-like entities and subdivides leaves adaptively under load.
//! - Keeps, for every node, the set of adjacent leaves across each of its four edges.
//! - Resolves those neighbors from tree topology alone (quadrant labels and parent
//!   links), including across subtrees of different depth.
//!
//! ## Model
//!
//! A [`QuadTree`] covers a [`Region`]. Each node is either a leaf holding a bucket of
//! points or an internal node with exactly four children, one per [`Quadrant`].
//! A leaf splits when its bucket reaches [`TreeConfig::max_points`], unless it
//! sits at [`TreeConfig::max_depth`]. The tree only grows.
//!
//! Stored entities implement [`QuadPoint`], a single region membership test.
//! Insertion offers an entity to every child and lets each child decide, so an
//! area-shaped entity registers in every leaf it touches. Containment is inclusive
//! on all bounds, so a point exactly on a split line lands on both sides.
//!
//! ## Two phases
//!
//! Neighbor caches are not maintained on every insert. Insert a batch, call
//! [`QuadTreeGeneric::update`] to refresh every cache, then read
//! [`Node::neighbors`] or [`Node::neighbors_toward`]. Caches are stale after
//! any insert that splits a leaf, until the next refresh.
//!
//! ## Per-node data
//!
//! [`QuadTreeGeneric::with_factory`] takes a [`NodeFactory`] (any
//! `FnMut(&NodeContext) -> D` works) that builds a payload for every node,
//! readable via [`Node::data`] and writable via [`QuadTreeGeneric::data_mut`].
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use understory_quadtree::{Direction, QuadTree, Quadrant, Region};
//!
//! let mut tree = QuadTree::new(Region::new(0.0, 0.0, 100.0, 100.0), 4, 4);
//! for p in [(10.0, 10.0), (30.0, 10.0), (10.0, 30.0), (30.0, 30.0), (20.0, 20.0)] {
//!     tree.insert(Point::new(p.0, p.1));
//! }
//! tree.update();
//!
//! let leaf = tree.get_node(10.0, 10.0).unwrap();
//! let node = tree.node(leaf);
//! assert_eq!(node.depth(), 2);
//! assert_eq!(node.points(), &[Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
//!
//! // The leaf in the south-west corner has neighbors above and to the right only.
//! assert!(node.neighbors_toward(Direction::Left).is_empty());
//! assert_eq!(node.neighbors_toward(Direction::Right).len(), 1);
//!
//! // Out-of-region points are dropped, not errors.
//! assert!(!tree.insert(Point::new(150.0, 5.0)));
//! assert!(tree.get_child(tree.root(), Quadrant::Root).is_err());
//! ```
//!
//! ### Attaching data to nodes
//!
//! ```
//! use kurbo::Point;
//! use understory_quadtree::{NodeContext, QuadTreeGeneric, Region, TreeConfig};
//!
//! let mut tree: QuadTreeGeneric<Point, f64, _> = QuadTreeGeneric::with_factory(
//!     Region::new(0.0, 0.0, 64.0, 64.0),
//!     TreeConfig::new(2, 3),
//!     |ctx: &NodeContext| ctx.region.width() * ctx.region.height(),
//! );
//! tree.insert(Point::new(1.0, 1.0));
//! tree.insert(Point::new(2.0, 2.0));
//!
//! let leaf = tree.get_node(1.0, 1.0).unwrap();
//! assert_eq!(*tree.node(leaf).data(), 8.0 * 8.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod factory;
mod neighbors;
pub mod node;
pub mod point;
pub mod quadrant;
pub mod region;
pub mod tree;

pub use config::TreeConfig;
pub use error::{QuadtreeError, QuadtreeResult};
pub use factory::{DefaultFactory, NodeFactory};
pub use node::{Node, NodeContext, NodeId};
pub use point::QuadPoint;
pub use quadrant::{Axis, Direction, Edges, Quadrant};
pub use region::Region;
pub use tree::{QuadTree, QuadTreeGeneric};
