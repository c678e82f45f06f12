// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node construction policy.
//!
//! Applications that need extra state per node (costs, labels, cached
//! geometry) plug a [`NodeFactory`] into [`QuadTreeGeneric::with_factory`](crate::QuadTreeGeneric::with_factory).
//! The factory produces an opaque payload `D` for each node as it is created,
//! while subdivision and neighbor resolution stay the tree's own.

use crate::node::NodeContext;

/// Produces the payload attached to each new node.
///
/// Any `FnMut(&NodeContext) -> D` closure is a factory.
pub trait NodeFactory<D> {
    /// Build the payload for the node described by `ctx`.
    fn create(&mut self, ctx: &NodeContext) -> D;
}

/// Factory producing `D::default()` for every node.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFactory;

impl<D: Default> NodeFactory<D> for DefaultFactory {
    #[inline]
    fn create(&mut self, _ctx: &NodeContext) -> D {
        D::default()
    }
}

impl<D, F> NodeFactory<D> for F
where
    F: FnMut(&NodeContext) -> D,
{
    #[inline]
    fn create(&mut self, ctx: &NodeContext) -> D {
        self(ctx)
    }
}
