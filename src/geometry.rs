//! Geometry utilities for canvas placement.
//!
//! Pure functions over canvas-pixel coordinates: point distance, compass
//! directions with their rotation angles and opposites, direction offsets,
//! and perpendicular projection onto a wire segment.

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Compass direction used for axis-aligned element placement.
///
/// The same vocabulary drives direction-based placement and the
/// chain-generation layout walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All four directions, in a fixed presentation order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// The mirrored direction, used when a chain edge is traversed backward.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Rotation angle in degrees for rendering an element along this axis.
    ///
    /// Screen coordinates: y grows downward, so `Down` is +90.
    pub fn rotation_degrees(&self) -> f64 {
        match self {
            Direction::Right => 0.0,
            Direction::Down => 90.0,
            Direction::Left => 180.0,
            Direction::Up => 270.0,
        }
    }

    /// End position reached by moving `span` pixels from `origin` this way.
    pub fn offset(&self, origin: Point, span: f64) -> Point {
        match self {
            Direction::Up => Point::new(origin.x, origin.y - span),
            Direction::Down => Point::new(origin.x, origin.y + span),
            Direction::Left => Point::new(origin.x - span, origin.y),
            Direction::Right => Point::new(origin.x + span, origin.y),
        }
    }

    /// Parse a lowercase direction keyword as used in chain descriptions.
    pub fn from_keyword(keyword: &str) -> Option<Direction> {
        match keyword.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Closest point to `p` on the segment from `a` to `b`.
///
/// Perpendicular projection clamped to the segment; degenerate segments
/// collapse to `a`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len_sq = abx * abx + aby * aby;
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq;
    let t = t.clamp(0.0, 1.0);
    Point::new(a.x + t * abx, a.y + t * aby)
}
