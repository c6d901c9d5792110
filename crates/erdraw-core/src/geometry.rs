//! Basic geometric types used by the layout engine.
//!
//! All coordinates use a top-left origin with `y` growing downward, matching
//! the coordinate system of the draw.io document format.

/// A point in 2D space
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds whose top-left corner is `top_left` and which span `size`.
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Midpoint of the left edge
    pub fn left_mid(self) -> Point {
        Point::new(self.min_x, self.min_y + self.height() / 2.0)
    }

    /// Midpoint of the right edge
    pub fn right_mid(self) -> Point {
        Point::new(self.max_x, self.min_y + self.height() / 2.0)
    }

    /// Moves the bounds by the specified offset
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 4.2);
    }

    #[test]
    fn test_point_add() {
        let result = Point::new(1.0, 2.0).add_point(Point::new(3.0, 4.0));
        assert_eq!(result, Point::new(4.0, 6.0));
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.min_y(), 20.0);
        assert_approx_eq!(f32, bounds.max_x(), 110.0);
        assert_approx_eq!(f32, bounds.max_y(), 70.0);
        assert_approx_eq!(f32, bounds.width(), 100.0);
        assert_approx_eq!(f32, bounds.height(), 50.0);
        assert_eq!(bounds.min_point(), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_bounds_edge_midpoints() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 100.0), Size::new(240.0, 81.0));

        assert_eq!(bounds.left_mid(), Point::new(0.0, 140.5));
        assert_eq!(bounds.right_mid(), Point::new(240.0, 140.5));
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(20.0, 30.0), Size::new(160.0, 80.0))
            .translate(Point::new(270.0, 80.0));

        assert_eq!(bounds.min_point(), Point::new(290.0, 110.0));
        assert_approx_eq!(f32, bounds.width(), 160.0);
        assert_approx_eq!(f32, bounds.max_y(), 190.0);
    }
}
