// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant labels, edge directions, and the flips used by neighbor resolution.
//!
//! The `y` axis grows "north": [`Quadrant::NW`] and [`Quadrant::NE`] are the halves
//! of a parent with the larger `y`, and [`Direction::Top`] is the edge they share
//! with the outside of the parent.

/// Position of a node relative to its parent's center.
///
/// Fixed when the node is created and never recomputed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quadrant {
    /// No position: reserved for the root, which has no parent.
    Root,
    /// Lower `x`, lower `y`.
    SW,
    /// Higher `x`, lower `y`.
    SE,
    /// Higher `x`, higher `y`.
    NE,
    /// Lower `x`, higher `y`.
    NW,
}

impl Quadrant {
    /// The four child quadrants, in the order children are created and stored.
    pub const CHILDREN: [Self; 4] = [Self::SW, Self::SE, Self::NE, Self::NW];

    /// Slot of this quadrant in a parent's child array, or `None` for [`Quadrant::Root`].
    #[inline]
    pub const fn child_index(self) -> Option<usize> {
        match self {
            Self::SW => Some(0),
            Self::SE => Some(1),
            Self::NE => Some(2),
            Self::NW => Some(3),
            Self::Root => None,
        }
    }

    /// Whether this is the root label.
    #[inline]
    pub const fn is_root(self) -> bool {
        matches!(self, Self::Root)
    }

    /// Mirror across the vertical axis: swaps west and east, keeps north and south.
    pub const fn flip_horizontal(self) -> Self {
        match self {
            Self::SW => Self::SE,
            Self::SE => Self::SW,
            Self::NE => Self::NW,
            Self::NW => Self::NE,
            Self::Root => Self::Root,
        }
    }

    /// Mirror across the horizontal axis: swaps north and south, keeps west and east.
    pub const fn flip_vertical(self) -> Self {
        match self {
            Self::SW => Self::NW,
            Self::SE => Self::NE,
            Self::NE => Self::SE,
            Self::NW => Self::SW,
            Self::Root => Self::Root,
        }
    }

    /// Flip along `axis`.
    #[inline]
    pub const fn flip(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => self.flip_horizontal(),
            Axis::Vertical => self.flip_vertical(),
        }
    }
}

/// Which flip a neighbor search mirrors its path with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// West/east mirroring, used across the left and right edges.
    Horizontal,
    /// North/south mirroring, used across the top and bottom edges.
    Vertical,
}

/// One of the four edges of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Edge shared by [`Quadrant::NW`] and [`Quadrant::NE`] (larger `y`).
    Top,
    /// Edge shared by [`Quadrant::SW`] and [`Quadrant::SE`] (smaller `y`).
    Bottom,
    /// Edge shared by [`Quadrant::NW`] and [`Quadrant::SW`] (smaller `x`).
    Left,
    /// Edge shared by [`Quadrant::NE`] and [`Quadrant::SE`] (larger `x`).
    Right,
}

impl Direction {
    /// All directions, in the order neighbor caches are filled.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The two quadrants lying along this edge of a parent.
    pub const fn quadrants(self) -> (Quadrant, Quadrant) {
        match self {
            Self::Top => (Quadrant::NW, Quadrant::NE),
            Self::Bottom => (Quadrant::SW, Quadrant::SE),
            Self::Left => (Quadrant::NW, Quadrant::SW),
            Self::Right => (Quadrant::NE, Quadrant::SE),
        }
    }

    /// Flip axis that maps a quadrant to the one across this edge.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Slot of this direction in per-direction tables.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

bitflags::bitflags! {
    /// Set of edges, e.g. the directions in which a node found neighbors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// See [`Direction::Top`].
        const TOP    = 0b0000_0001;
        /// See [`Direction::Bottom`].
        const BOTTOM = 0b0000_0010;
        /// See [`Direction::Left`].
        const LEFT   = 0b0000_0100;
        /// See [`Direction::Right`].
        const RIGHT  = 0b0000_1000;
    }
}

impl From<Direction> for Edges {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Top => Self::TOP,
            Direction::Bottom => Self::BOTTOM,
            Direction::Left => Self::LEFT,
            Direction::Right => Self::RIGHT,
        }
    }
}
