// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned regions covered by quadtree nodes.

use core::fmt;

use kurbo::{Point, Rect};

use crate::quadrant::Quadrant;

/// Axis-aligned rectangle described by its minimum and maximum corners.
///
/// Containment is inclusive on all four bounds: a point lying exactly on the
/// edge shared by two adjacent regions is contained by both of them.
///
/// Regions are immutable once built; subdivision produces new regions through
/// [`Region::quarters`]. Quarters reuse the parent's bounds and its center
/// verbatim, so the children tile the parent exactly, with no rounding gap at
/// the parent's maximum edges.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Smallest `x` covered.
    pub min_x: f64,
    /// Smallest `y` covered.
    pub min_y: f64,
    /// Largest `x` covered.
    pub max_x: f64,
    /// Largest `y` covered.
    pub max_y: f64,
}

impl Region {
    /// Create a region from its minimum corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    /// Create a region from an origin point and size.
    pub const fn from_origin(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// Create a region from its corners.
    pub const fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a region covering a Kurbo rectangle. The rectangle is normalized first.
    pub fn from_rect(rect: Rect) -> Self {
        let r = rect.abs();
        Self::from_corners(r.x0, r.y0, r.x1, r.y1)
    }

    /// The region as a Kurbo rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }

    /// Minimum corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Extent along `x`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Extent along `y`.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Geometric center; subdivision splits at this point on both axes.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether the point lies inside the region or on its boundary.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Whether the rectangle overlaps or touches the region.
    pub fn intersects_rect(&self, rect: Rect) -> bool {
        let r = rect.abs();
        r.x0 <= self.max_x && self.min_x <= r.x1 && r.y0 <= self.max_y && self.min_y <= r.y1
    }

    /// The four quarters of this region, in [`Quadrant::CHILDREN`] order.
    pub fn quarters(&self) -> [Self; 4] {
        let c = self.center();
        [
            Self::from_corners(self.min_x, self.min_y, c.x, c.y),
            Self::from_corners(c.x, self.min_y, self.max_x, c.y),
            Self::from_corners(c.x, c.y, self.max_x, self.max_y),
            Self::from_corners(self.min_x, c.y, c.x, self.max_y),
        ]
    }

    /// The quarter of this region that a child in `quadrant` covers.
    ///
    /// Returns `None` for [`Quadrant::Root`], which has no position.
    pub fn quarter(&self, quadrant: Quadrant) -> Option<Self> {
        quadrant.child_index().map(|i| self.quarters()[i])
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl From<Region> for Rect {
    fn from(region: Region) -> Self {
        region.to_rect()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X : {}, Y : {}, Width : {}, Height : {}",
            self.min_x,
            self.min_y,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn contains_is_inclusive_on_every_bound() {
        let r = Region::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(100.0, 50.0)));
        assert!(r.contains(Point::new(100.0, 0.0)));
        assert!(r.contains(Point::new(42.0, 17.0)));
        assert!(!r.contains(Point::new(100.5, 10.0)));
        assert!(!r.contains(Point::new(10.0, -0.1)));
    }

    #[test]
    fn shared_edge_is_contained_by_both_sides() {
        let parent = Region::new(0.0, 0.0, 100.0, 100.0);
        let sw = parent.quarter(Quadrant::SW).unwrap();
        let se = parent.quarter(Quadrant::SE).unwrap();
        let on_edge = Point::new(50.0, 10.0);
        assert!(sw.contains(on_edge));
        assert!(se.contains(on_edge));
    }

    #[test]
    fn quarters_split_at_center() {
        let r = Region::new(10.0, 20.0, 40.0, 80.0);
        assert_eq!(r.center(), Point::new(30.0, 60.0));
        assert_eq!(r.quarter(Quadrant::SW), Some(Region::new(10.0, 20.0, 20.0, 40.0)));
        assert_eq!(r.quarter(Quadrant::SE), Some(Region::new(30.0, 20.0, 20.0, 40.0)));
        assert_eq!(r.quarter(Quadrant::NE), Some(Region::new(30.0, 60.0, 20.0, 40.0)));
        assert_eq!(r.quarter(Quadrant::NW), Some(Region::new(10.0, 60.0, 20.0, 40.0)));
        assert_eq!(r.quarter(Quadrant::Root), None);
    }

    #[test]
    fn quarters_tile_offset_non_dyadic_regions_exactly() {
        let r = Region::new(-812.2808264515302, 0.0, 28.34747652200631, 10.0);
        let [sw, se, ne, nw] = r.quarters();
        assert_eq!(se.max_x, r.max_x);
        assert_eq!(ne.max_x, r.max_x);
        assert_eq!(ne.max_y, r.max_y);
        assert_eq!(nw.max_y, r.max_y);
        assert_eq!(sw.max_x, se.min_x);
        assert_eq!(sw.max_y, nw.min_y);
        for p in [
            Point::new(r.max_x, 5.0),
            Point::new(r.max_x, r.max_y),
            Point::new(r.min_x, r.max_y),
        ] {
            assert!(r.contains(p));
            assert!(r.quarters().iter().any(|q| q.contains(p)));
        }
    }

    #[test]
    fn rect_conversions_and_touching_overlap() {
        let r = Region::from_rect(Rect::new(30.0, 40.0, 10.0, 20.0));
        assert_eq!(r, Region::new(10.0, 20.0, 20.0, 20.0));
        assert_eq!(Rect::from(r), Rect::new(10.0, 20.0, 30.0, 40.0));
        assert!(r.intersects_rect(Rect::new(30.0, 40.0, 35.0, 45.0)), "corner touch counts");
        assert!(!r.intersects_rect(Rect::new(31.0, 40.0, 35.0, 45.0)));
    }

    #[test]
    fn display_lists_origin_and_size() {
        let r = Region::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.to_string(), "X : 1, Y : 2, Width : 3, Height : 4");
    }
}
