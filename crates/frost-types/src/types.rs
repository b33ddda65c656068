use serde::{Deserialize, Serialize};

/// A point in global desktop coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle. Used for window frames, capture regions
/// and display bounds, all in the same global coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2,
            y: self.y + self.height / 2,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = (self.x + self.width).max(other.x + other.width);
        let max_y = (self.y + self.height).max(other.y + other.height);
        Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Clamp a point into the rectangle (inclusive of the last pixel).
    pub fn clamp_point(&self, point: Point) -> Point {
        Point {
            x: point.x.clamp(self.x, self.x + self.width - 1),
            y: point.y.clamp(self.y, self.y + self.height - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_window_rect() {
        let rect = Rect::new(100, 50, 800, 600);
        assert_eq!(rect.center(), Point::new(500, 350));
    }

    #[test]
    fn contains_is_exclusive_of_far_edge() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 9)));
        assert!(!rect.contains(Point::new(10, 9)));
        assert!(!rect.contains(Point::new(-1, 5)));
    }

    #[test]
    fn union_spans_multi_monitor_layout() {
        // Secondary display to the left of and above the primary one.
        let primary = Rect::new(0, 0, 2560, 1440);
        let secondary = Rect::new(-1920, -200, 1920, 1080);
        let union = primary.union(secondary);
        assert_eq!(union, Rect::new(-1920, -200, 4480, 1640));
    }

    #[test]
    fn clamp_point_keeps_clicks_on_screen() {
        let bounds = Rect::new(-1920, 0, 4480, 1440);
        assert_eq!(
            bounds.clamp_point(Point::new(5000, -50)),
            Point::new(2559, 0)
        );
        assert_eq!(
            bounds.clamp_point(Point::new(-3000, 2000)),
            Point::new(-1920, 1439)
        );
        // Points already inside are untouched.
        assert_eq!(
            bounds.clamp_point(Point::new(100, 100)),
            Point::new(100, 100)
        );
    }

    #[test]
    fn empty_rects() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
