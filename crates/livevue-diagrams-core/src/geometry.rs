//! Geometric primitives for diagram layout.
//!
//! - [`Point`] - a 2D coordinate
//! - [`Size`] - width and height
//! - [`Bounds`] - an axis-aligned rectangle
//! - [`Insets`] - padding for four sides
//!
//! Coordinates follow SVG: origin at the top-left corner, X grows to the
//! right and Y grows downward.

/// A 2D point in diagram space.
///
/// # Examples
///
/// ```
/// # use livevue_diagrams_core::geometry::Point;
/// let p = Point::new(10.0, 20.0).add_point(Point::new(5.0, 5.0));
/// assert_eq!(p.x(), 15.0);
/// assert_eq!(p.midpoint(Point::new(5.0, 5.0)).y(), 15.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    pub fn add_point(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub_point(self, other: Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn midpoint(self, other: Point) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Euclidean distance from the origin.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Grows the size by the given insets.
    pub fn add_padding(self, insets: Insets) -> Self {
        Self::new(
            self.width + insets.horizontal_sum(),
            self.height + insets.vertical_sum(),
        )
    }
}

/// An axis-aligned rectangle stored as min/max corners.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width() / 2.0;
        let half_height = size.height() / 2.0;
        Self {
            min_x: center.x() - half_width,
            min_y: center.y() - half_height,
            max_x: center.x() + half_width,
            max_y: center.y() + half_height,
        }
    }

    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x(),
            min_y: top_left.y(),
            max_x: top_left.x() + size.width(),
            max_y: top_left.y() + size.height(),
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x(),
            min_y: self.min_y + offset.y(),
            max_x: self.max_x + offset.x(),
            max_y: self.max_y + offset.y(),
        }
    }

    /// Whether `other` lies entirely inside `self` (edges may touch).
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Whether the interiors of the two rectangles overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }

    /// Point where the ray from the center towards `external` leaves the
    /// rectangle.
    ///
    /// Returns the center itself when `external` coincides with it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use livevue_diagrams_core::geometry::{Bounds, Point, Size};
    /// let bounds = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(20.0, 10.0));
    /// let exit = bounds.boundary_point_towards(Point::new(100.0, 0.0));
    /// assert_eq!(exit, Point::new(10.0, 0.0));
    /// ```
    pub fn boundary_point_towards(&self, external: Point) -> Point {
        let center = self.center();
        let delta = external.sub_point(center);
        if delta.x() == 0.0 && delta.y() == 0.0 {
            return center;
        }

        let half_width = self.width() / 2.0;
        let half_height = self.height() / 2.0;

        let scale_x = if delta.x() == 0.0 {
            f32::INFINITY
        } else {
            half_width / delta.x().abs()
        };
        let scale_y = if delta.y() == 0.0 {
            f32::INFINITY
        } else {
            half_height / delta.y().abs()
        };
        let scale = scale_x.min(scale_y);

        Point::new(
            center.x() + delta.x() * scale,
            center.y() + delta.y() * scale,
        )
    }
}

/// Padding on the four sides of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates insets in CSS order: top, right, bottom, left.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn left(self) -> f32 {
        self.left
    }

    pub fn with_top(self, top: f32) -> Self {
        Self { top, ..self }
    }

    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_bounds_from_center_and_top_left_agree() {
        let size = Size::new(40.0, 20.0);
        let from_center = Bounds::new_from_center(Point::new(20.0, 10.0), size);
        let from_corner = Bounds::new_from_top_left(Point::new(0.0, 0.0), size);
        assert_eq!(from_center, from_corner);
    }

    #[test]
    fn test_merge_and_contains() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Bounds::new_from_top_left(Point::new(20.0, 5.0), Size::new(10.0, 10.0));
        let merged = a.merge(&b);

        assert!(merged.contains(&a));
        assert!(merged.contains(&b));
        assert_approx_eq!(f32, merged.width(), 30.0);
        assert_approx_eq!(f32, merged.height(), 15.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_bounds_do_not_intersect() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let b = Bounds::new_from_top_left(Point::new(10.0, 0.0), Size::new(10.0, 10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_boundary_point_vertical() {
        let bounds = Bounds::new_from_center(Point::new(0.0, 0.0), Size::new(20.0, 10.0));
        let exit = bounds.boundary_point_towards(Point::new(0.0, -50.0));
        assert_approx_eq!(f32, exit.x(), 0.0);
        assert_approx_eq!(f32, exit.y(), -5.0);
    }

    #[test]
    fn test_boundary_point_same_as_center() {
        let bounds = Bounds::new_from_center(Point::new(3.0, 4.0), Size::new(20.0, 10.0));
        assert_eq!(
            bounds.boundary_point_towards(Point::new(3.0, 4.0)),
            Point::new(3.0, 4.0)
        );
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 10.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(size, Size::new(16.0, 14.0));
    }

    proptest! {
        #[test]
        fn prop_boundary_point_lies_on_border(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            w in 1.0f32..300.0,
            h in 1.0f32..300.0,
            ex in -1000.0f32..1000.0,
            ey in -1000.0f32..1000.0,
        ) {
            let bounds = Bounds::new_from_center(Point::new(cx, cy), Size::new(w, h));
            prop_assume!((ex - cx).abs() > 1.0 || (ey - cy).abs() > 1.0);

            let exit = bounds.boundary_point_towards(Point::new(ex, ey));
            let on_vertical = (exit.x() - bounds.min_x()).abs() < 0.01
                || (exit.x() - bounds.max_x()).abs() < 0.01;
            let on_horizontal = (exit.y() - bounds.min_y()).abs() < 0.01
                || (exit.y() - bounds.max_y()).abs() < 0.01;

            prop_assert!(on_vertical || on_horizontal);
            prop_assert!(exit.x() >= bounds.min_x() - 0.01 && exit.x() <= bounds.max_x() + 0.01);
            prop_assert!(exit.y() >= bounds.min_y() - 0.01 && exit.y() <= bounds.max_y() + 0.01);
        }

        #[test]
        fn prop_merge_contains_both(
            x1 in -100.0f32..100.0, y1 in -100.0f32..100.0,
            x2 in -100.0f32..100.0, y2 in -100.0f32..100.0,
            w in 0.0f32..50.0, h in 0.0f32..50.0,
        ) {
            let a = Bounds::new_from_top_left(Point::new(x1, y1), Size::new(w, h));
            let b = Bounds::new_from_top_left(Point::new(x2, y2), Size::new(h, w));
            let merged = a.merge(&b);
            prop_assert!(merged.contains(&a));
            prop_assert!(merged.contains(&b));
        }
    }
}
