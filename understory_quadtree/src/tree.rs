// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: construction, insertion and subdivision, point location.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::error::{QuadtreeError, QuadtreeResult};
use crate::factory::{DefaultFactory, NodeFactory};
use crate::node::{Node, NodeContext, NodeId};
use crate::point::QuadPoint;
use crate::quadrant::Quadrant;
use crate::region::Region;

/// A region quadtree parameterized by a node payload `D` and its factory `F`.
///
/// Nodes live in an arena addressed by [`NodeId`]; each node stores its parent
/// and children as identifiers, so the parent link is a plain back-reference.
/// The tree only grows: there is no removal or merging.
///
/// Writes and neighbor refreshes are separate phases. Run a batch of
/// [`insert`](Self::insert)s, then [`update`](Self::update), then read
/// [`Node::neighbors`].
pub struct QuadTreeGeneric<P, D = (), F = DefaultFactory> {
    pub(crate) nodes: Vec<Node<P, D>>,
    config: TreeConfig,
    factory: F,
}

/// Quadtree without per-node payload.
pub type QuadTree<P> = QuadTreeGeneric<P, (), DefaultFactory>;

impl<P, D: Default> QuadTreeGeneric<P, D, DefaultFactory> {
    /// Create a tree covering `region`.
    ///
    /// Leaves split once they hold `max_points` points (`0` never splits),
    /// and never below `max_depth`.
    pub fn new(region: Region, max_points: usize, max_depth: u32) -> Self {
        Self::with_config(region, TreeConfig::new(max_points, max_depth))
    }

    /// Create a tree covering `region` from a [`TreeConfig`].
    pub fn with_config(region: Region, config: TreeConfig) -> Self {
        Self::with_factory(region, config, DefaultFactory)
    }
}

impl<P, D, F: NodeFactory<D>> QuadTreeGeneric<P, D, F> {
    /// Create a tree whose nodes carry a payload built by `factory`.
    ///
    /// The root is built through the factory too, with no parent,
    /// [`Quadrant::Root`] and depth `0`.
    pub fn with_factory(region: Region, config: TreeConfig, mut factory: F) -> Self {
        let ctx = NodeContext {
            id: NodeId::new(0),
            parent: None,
            region,
            quadrant: Quadrant::Root,
            depth: 0,
        };
        let data = factory.create(&ctx);
        let mut nodes = Vec::new();
        nodes.push(Node::new(&ctx, data));
        Self {
            nodes,
            config,
            factory,
        }
    }

    fn push_node(&mut self, parent: NodeId, region: Region, quadrant: Quadrant, depth: u32) -> NodeId {
        let ctx = NodeContext {
            id: NodeId::new(self.nodes.len()),
            parent: Some(parent),
            region,
            quadrant,
            depth,
        };
        let data = self.factory.create(&ctx);
        self.nodes.push(Node::new(&ctx, data));
        ctx.id
    }

    /// Turn leaf `id` into an internal node with four empty children.
    fn subdivide(&mut self, id: NodeId) -> [NodeId; 4] {
        let (region, depth) = {
            let n = &self.nodes[id.idx()];
            (n.region, n.depth)
        };
        debug!(node = id.0, depth, "subdividing leaf");
        let quarters = region.quarters();
        let mut children = [id; 4];
        for (slot, quadrant) in Quadrant::CHILDREN.into_iter().enumerate() {
            children[slot] = self.push_node(id, quarters[slot], quadrant, depth + 1);
        }
        self.nodes[id.idx()].children = Some(children);
        children
    }
}

impl<P: QuadPoint + Clone, D, F: NodeFactory<D>> QuadTreeGeneric<P, D, F> {
    /// Insert a point.
    ///
    /// The point is offered to every node on its way down and kept in each
    /// leaf whose region it accepts (see [`QuadPoint`]). Returns `false`, without
    /// storing anything, when the root region rejects it.
    ///
    /// A leaf that reaches the configured bucket size below the depth ceiling
    /// splits, hands every buffered point to all four children, and empties
    /// its own bucket. Neighbor caches are stale after a split until
    /// [`update`](Self::update) runs.
    pub fn insert(&mut self, point: P) -> bool {
        let root = self.root();
        if !point.in_region(&self.nodes[root.idx()].region) {
            trace!("dropping point outside the tree region");
            return false;
        }
        self.insert_at(root, &point);
        true
    }

    fn insert_at(&mut self, id: NodeId, point: &P) {
        let node = &mut self.nodes[id.idx()];
        if !point.in_region(&node.region) {
            return;
        }
        let children = node.children;
        match children {
            Some(children) => self.insert_in_children(children, point),
            None => {
                node.points.push(point.clone());
                if self.config.should_subdivide(node.points.len(), node.depth) {
                    let buffered = core::mem::take(&mut node.points);
                    let children = self.subdivide(id);
                    for p in &buffered {
                        self.insert_in_children(children, p);
                    }
                }
            }
        }
    }

    // Every child filters for itself, so an area-shaped point can land in several.
    fn insert_in_children(&mut self, children: [NodeId; 4], point: &P) {
        for child in children {
            self.insert_at(child, point);
        }
    }
}

impl<P, D, F> QuadTreeGeneric<P, D, F> {
    /// The root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Region covered by the whole tree.
    pub fn region(&self) -> &Region {
        &self.nodes[0].region
    }

    /// Subdivision policy.
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// Bucket size that triggers a split; `0` means never.
    pub fn max_points(&self) -> usize {
        self.config.max_points
    }

    /// Depth ceiling.
    pub fn max_depth(&self) -> u32 {
        self.config.max_depth
    }

    /// Number of nodes, leaves and internal nodes alike. Always at least `1`.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Access a node; panics if `id` comes from another tree.
    pub fn node(&self, id: NodeId) -> &Node<P, D> {
        &self.nodes[id.idx()]
    }

    /// Access a node, or `None` if `id` comes from another tree.
    pub fn get(&self, id: NodeId) -> Option<&Node<P, D>> {
        self.nodes.get(id.idx())
    }

    /// Mutable access to a node's payload.
    pub fn data_mut(&mut self, id: NodeId) -> Option<&mut D> {
        self.nodes.get_mut(id.idx()).map(|n| &mut n.data)
    }

    /// Cached neighbors of `id`; see [`Node::neighbors`].
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).neighbors()
    }

    /// The child of `id` in `quadrant`.
    ///
    /// Contract violations are reported as [`QuadtreeError`]s: only internal
    /// nodes of this tree have children, and only for the four cardinal quadrants.
    pub fn get_child(&self, id: NodeId, quadrant: Quadrant) -> QuadtreeResult<NodeId> {
        self.get(id)
            .ok_or(QuadtreeError::UnknownNode(id))?
            .child(id, quadrant)
    }

    /// The leaf containing `(x, y)`, or `None` outside the tree region.
    pub fn get_node(&self, x: f64, y: f64) -> Option<NodeId> {
        self.get_node_at(Point::new(x, y))
    }

    /// The leaf containing `position`, or `None` outside the tree region.
    ///
    /// On a boundary shared by several leaves the first child in
    /// [`Quadrant::CHILDREN`] order wins at each level.
    pub fn get_node_at(&self, position: Point) -> Option<NodeId> {
        self.get_node_from(self.root(), position)
    }

    /// Descend from `start` to the leaf containing `position`.
    ///
    /// Returns `None` when `start` does not contain the position or when no
    /// child does (only possible for positions outside `start`).
    pub fn get_node_from(&self, start: NodeId, position: Point) -> Option<NodeId> {
        let mut id = start;
        loop {
            let node = self.get(id)?;
            if !node.contains(position) {
                return None;
            }
            match node.children {
                None => return Some(id),
                Some(children) => {
                    id = children
                        .into_iter()
                        .find(|c| self.nodes[c.idx()].contains(position))?;
                }
            }
        }
    }

    /// Iterate all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<P, D>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Iterate leaf identifiers in creation order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(|(_, n)| n.is_leaf()).map(|(id, _)| id)
    }

    /// Refresh the neighbor cache of every node, breadth-first from the root.
    ///
    /// Call after a batch of inserts and before reading neighbors. Each node
    /// only reads tree topology, never another node's cache, so the visiting
    /// order does not affect the result.
    pub fn update(&mut self) {
        let mut queue = VecDeque::new();
        queue.push_back(self.root());
        let (mut visited, mut leaves) = (0_usize, 0_usize);
        while let Some(id) = queue.pop_front() {
            self.update_node(id);
            visited += 1;
            match self.nodes[id.idx()].children {
                Some(children) => queue.extend(children),
                None => leaves += 1,
            }
        }
        debug!(nodes = visited, leaves, "refreshed neighbor links");
    }
}

impl<P, D, F> fmt::Debug for QuadTreeGeneric<P, D, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leaves = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let points: usize = self.nodes.iter().map(|n| n.points.len()).sum();
        f.debug_struct("QuadTreeGeneric")
            .field("region", self.region())
            .field("config", &self.config)
            .field("nodes", &self.nodes.len())
            .field("leaves", &leaves)
            .field("stored_points", &points)
            .finish_non_exhaustive()
    }
}
