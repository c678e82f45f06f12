// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for contract violations on the tree API.

use crate::node::NodeId;

/// Errors reported by [`QuadTreeGeneric::get_child`](crate::QuadTreeGeneric::get_child)
/// and [`Node::child`](crate::Node::child).
///
/// These are programming errors. Out-of-region inserts and lookups are not
/// errors: inserts are dropped and lookups return `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuadtreeError {
    /// A child was requested for [`Quadrant::Root`](crate::Quadrant::Root).
    #[error("can't use quadrant other than 'SW, SE, NE, NW'")]
    InvalidQuadrant,
    /// A child was requested from a leaf.
    #[error("node {0:?} is a leaf and has no children")]
    NotSubdivided(NodeId),
    /// The identifier does not belong to this tree.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),
}

/// Result alias for fallible tree operations.
pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
