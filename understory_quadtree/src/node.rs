// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers and the per-node record stored in the tree's arena.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;

use crate::error::{QuadtreeError, QuadtreeResult};
use crate::quadrant::{Direction, Edges, Quadrant};
use crate::region::Region;

/// Identifier for a node in a [`QuadTreeGeneric`](crate::QuadTreeGeneric).
///
/// A small copyable index into the tree's node arena. The tree only grows, so
/// an identifier stays valid for the lifetime of the tree that produced it.
/// Identifiers are ordered by creation: the root is always the smallest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The node arena is addressed with 32-bit indices."
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What a [`NodeFactory`](crate::NodeFactory) sees when a node is created.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeContext {
    /// Identifier the new node will have.
    pub id: NodeId,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Region the new node covers.
    pub region: Region,
    /// Position within the parent.
    pub quadrant: Quadrant,
    /// Depth of the new node (root is `0`).
    pub depth: u32,
}

/// A node of the tree: a region, either a point bucket (leaf) or four children,
/// and the cached rope links to adjacent leaves.
///
/// Nodes are owned by the tree and read through [`QuadTreeGeneric::node`](crate::QuadTreeGeneric::node).
/// Parent, children, and neighbors are plain [`NodeId`]s into the same arena.
#[derive(Clone)]
pub struct Node<P, D = ()> {
    pub(crate) region: Region,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Option<[NodeId; 4]>,
    pub(crate) points: Vec<P>,
    pub(crate) neighbors: Vec<NodeId>,
    // End offset into `neighbors` for each direction, indexed by `Direction::index`.
    pub(crate) neighbor_ends: [u32; 4],
    pub(crate) quadrant: Quadrant,
    pub(crate) depth: u32,
    pub(crate) data: D,
}

impl<P, D> Node<P, D> {
    pub(crate) fn new(ctx: &NodeContext, data: D) -> Self {
        Self {
            region: ctx.region,
            parent: ctx.parent,
            children: None,
            points: Vec::new(),
            neighbors: Vec::new(),
            neighbor_ends: [0; 4],
            quadrant: ctx.quadrant,
            depth: ctx.depth,
            data,
        }
    }

    /// Region covered by this node.
    #[inline]
    pub fn region(&self) -> &Region {
        &self.region
    }

    /// Parent node; `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Position within the parent; [`Quadrant::Root`] for the root.
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Distance from the root (root is `0`).
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether this is the root node.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The four children in [`Quadrant::CHILDREN`] order, or `None` on a leaf.
    #[inline]
    pub fn children(&self) -> Option<&[NodeId; 4]> {
        self.children.as_ref()
    }

    /// The child in `quadrant`.
    ///
    /// Fails with [`QuadtreeError::InvalidQuadrant`] for [`Quadrant::Root`] and
    /// with [`QuadtreeError::NotSubdivided`] when called on a leaf (`self_id`
    /// only names the node in the error).
    pub fn child(&self, self_id: NodeId, quadrant: Quadrant) -> QuadtreeResult<NodeId> {
        let slot = quadrant
            .child_index()
            .ok_or(QuadtreeError::InvalidQuadrant)?;
        let children = self
            .children
            .as_ref()
            .ok_or(QuadtreeError::NotSubdivided(self_id))?;
        Ok(children[slot])
    }

    /// Points stored in this node. Empty on internal nodes.
    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Whether any point is stored here.
    #[inline]
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    /// Adjacent leaves found by the last neighbor refresh, grouped by direction
    /// in [`Direction::ALL`] order.
    ///
    /// Empty until [`QuadTreeGeneric::update`](crate::QuadTreeGeneric::update) runs,
    /// and stale after an insert that subdivides until it runs again.
    #[inline]
    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Adjacent leaves across one edge.
    pub fn neighbors_toward(&self, direction: Direction) -> &[NodeId] {
        let i = direction.index();
        let start = if i == 0 {
            0
        } else {
            self.neighbor_ends[i - 1] as usize
        };
        &self.neighbors[start..self.neighbor_ends[i] as usize]
    }

    /// Edges across which the last refresh found at least one neighbor.
    ///
    /// Nodes on the outer boundary of the tree never report the outward edge.
    pub fn neighbor_edges(&self) -> Edges {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.neighbors_toward(*d).is_empty())
            .fold(Edges::empty(), |acc, d| acc | Edges::from(d))
    }

    /// Whether `position` lies within this node's region (boundary inclusive).
    #[inline]
    pub fn contains(&self, position: Point) -> bool {
        self.region.contains(position)
    }

    /// Per-node payload produced by the tree's [`NodeFactory`](crate::NodeFactory).
    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }
}

impl<P, D: fmt::Debug> fmt::Debug for Node<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("region", &self.region)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("points", &self.points.len())
            .field("neighbors", &self.neighbors)
            .field("quadrant", &self.quadrant)
            .field("depth", &self.depth)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
