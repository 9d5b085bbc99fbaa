use std::fmt;

/// A 2D point with integer coordinates and an auxiliary value.
///
/// The auxiliary `value` is carried along for display purposes only; the
/// clustering engine never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub value: u32,
}

/// Identity of a point: its coordinate pair.
///
/// Two points with the same coordinates are the same point for every
/// membership and visited check, whatever their `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(pub i64, pub i64);

impl Point {
    pub fn new(x: i64, y: i64, value: u32) -> Self {
        Self { x, y, value }
    }

    pub fn key(&self) -> PointKey {
        PointKey(self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y, 0)
    }
}

impl fmt::Display for PointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;
    (dx * dx + dy * dy).sqrt()
}
