// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree configuration.

/// Subdivision policy shared by every node of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeConfig {
    /// Bucket size at which a leaf subdivides. `0` disables subdivision entirely.
    pub max_points: usize,
    /// Depth ceiling. Leaves at this depth keep accumulating points instead of splitting.
    pub max_depth: u32,
}

impl TreeConfig {
    /// Create a configuration.
    pub const fn new(max_points: usize, max_depth: u32) -> Self {
        Self {
            max_points,
            max_depth,
        }
    }

    /// Whether a leaf holding `len` points at `depth` must split.
    #[inline]
    pub const fn should_subdivide(&self, len: usize, depth: u32) -> bool {
        self.max_points > 0 && len >= self.max_points && depth < self.max_depth
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_points: 8,
            max_depth: 8,
        }
    }
}
