// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Neighbor resolution: rope links between adjacent leaves, from topology alone.
//!
//! A node's neighbor across an edge is found without any coordinate math:
//!
//! - If the node sits on the inner side of that edge within its parent, the
//!   neighbor is the sibling across the edge.
//! - Otherwise, climb the ancestors (remembering each quadrant label) until one
//!   sits on the inner side of that edge. Its sibling across the edge borders the
//!   original node. Descend from there replaying the remembered labels mirrored
//!   across the edge, stopping early at a leaf (the neighbor is shallower).
//!   Reaching the root means the node is on the tree's outer boundary.
//! - If the node reached this way is internal (the neighbor subtree is deeper),
//!   collect every leaf along its half facing the original node.

use alloc::vec::Vec;

use tracing::trace;

use crate::node::NodeId;
use crate::quadrant::{Direction, Quadrant};
use crate::tree::QuadTreeGeneric;

impl<P, D, F> QuadTreeGeneric<P, D, F> {
    /// Recompute the neighbor cache of a single node.
    ///
    /// A no-op for the root, which has no neighbors by construction.
    /// [`update`](Self::update) calls this for every node.
    pub fn update_node(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        if node.quadrant().is_root() {
            return;
        }
        let mut found = core::mem::take(&mut self.nodes[id.idx()].neighbors);
        found.clear();
        let mut ends = [0_u32; 4];
        for direction in Direction::ALL {
            self.search_neighbors(id, direction, &mut found);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Neighbor counts are bounded by the 32-bit node arena."
            )]
            let end = found.len() as u32;
            ends[direction.index()] = end;
        }
        trace!(node = id.0, neighbors = found.len(), "resolved neighbors");
        let node = &mut self.nodes[id.idx()];
        node.neighbors = found;
        node.neighbor_ends = ends;
    }

    /// Append the leaves adjacent to `id` across `direction`.
    fn search_neighbors(&self, id: NodeId, direction: Direction, out: &mut Vec<NodeId>) {
        let (q1, q2) = direction.quadrants();
        let axis = direction.axis();
        // Quadrants on the inner side of the edge; their sibling across it is q1/q2.
        let (inner1, inner2) = (q1.flip(axis), q2.flip(axis));

        let node = self.node(id);
        let Some(parent) = node.parent() else {
            return;
        };
        if node.quadrant() == inner1 {
            if let Some(sibling) = self.child_of(parent, q1) {
                self.collect_facing(sibling, inner1, inner2, out);
            }
            return;
        }
        if node.quadrant() == inner2 {
            if let Some(sibling) = self.child_of(parent, q2) {
                self.collect_facing(sibling, inner1, inner2, out);
            }
            return;
        }

        let mut path: Vec<Quadrant> = Vec::with_capacity(node.depth() as usize);
        let mut cur = id;
        let pivot = loop {
            let n = self.node(cur);
            let Some(up) = n.parent() else {
                // Reached the root: nothing lies across this edge.
                return;
            };
            path.push(n.quadrant());
            if n.quadrant() == inner1 || n.quadrant() == inner2 {
                break up;
            }
            cur = up;
        };

        let mut target = pivot;
        while let Some(q) = path.pop() {
            let Some(next) = self.child_of(target, q.flip(axis)) else {
                break;
            };
            target = next;
            if self.node(target).is_leaf() {
                break;
            }
        }
        self.collect_facing(target, inner1, inner2, out);
    }

    /// `id` itself if it is a leaf, otherwise its leaves along the facing half.
    fn collect_facing(&self, id: NodeId, q1: Quadrant, q2: Quadrant, out: &mut Vec<NodeId>) {
        if self.node(id).is_leaf() {
            out.push(id);
        } else {
            self.collect_border_leaves(id, q1, q2, out);
        }
    }

    /// Leaves of internal node `id` reachable only through children `q1` and `q2`.
    fn collect_border_leaves(&self, id: NodeId, q1: Quadrant, q2: Quadrant, out: &mut Vec<NodeId>) {
        for q in [q1, q2] {
            if let Some(child) = self.child_of(id, q) {
                self.collect_facing(child, q1, q2, out);
            }
        }
    }

    #[inline]
    fn child_of(&self, id: NodeId, quadrant: Quadrant) -> Option<NodeId> {
        let slot = quadrant.child_index()?;
        self.node(id).children().map(|c| c[slot])
    }
}
