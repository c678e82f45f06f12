// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability every stored entity provides: a region membership test.

use kurbo::{Circle, Point, Rect};

use crate::region::Region;

/// An entity that can be stored in a [`QuadTree`](crate::QuadTree).
///
/// The tree never inspects coordinates itself. Insertion hands the entity to
/// every candidate node and keeps it wherever [`in_region`](Self::in_region)
/// answers `true`, so an entity may land in zero, one, or several leaves.
/// Point-shaped entities usually answer with [`Region::contains`]; area-shaped
/// entities answer with an overlap test and register in every leaf they touch.
pub trait QuadPoint {
    /// Whether this entity belongs to `region`.
    fn in_region(&self, region: &Region) -> bool;
}

impl QuadPoint for Point {
    #[inline]
    fn in_region(&self, region: &Region) -> bool {
        region.contains(*self)
    }
}

impl QuadPoint for Rect {
    fn in_region(&self, region: &Region) -> bool {
        region.intersects_rect(*self)
    }
}

impl QuadPoint for Circle {
    /// Conservative: tests the circle's bounding box.
    fn in_region(&self, region: &Region) -> bool {
        region.intersects_rect(Rect::from_center_size(
            self.center,
            (2.0 * self.radius, 2.0 * self.radius),
        ))
    }
}

impl<T: QuadPoint + ?Sized> QuadPoint for &T {
    #[inline]
    fn in_region(&self, region: &Region) -> bool {
        (**self).in_region(region)
    }
}
