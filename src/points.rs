//! Coordinates and the fixed point set.

/// A position on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    /// Horizontal position.
    pub x: u32,
    /// Vertical position.
    pub y: u32,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Position as chart data. Every `u32` is exact in an `f64`.
    pub fn position(self) -> (f64, f64) {
        (f64::from(self.x), f64::from(self.y))
    }
}

/// Label shown for the coordinate at `index`.
pub fn label(index: usize) -> String {
    format!("Point {}", index)
}

/// The coordinates that get plotted.
pub const COORDINATES: &[Coordinate] = &[
    Coordinate::new(50000, 510000),
    Coordinate::new(320000, 510000),
    Coordinate::new(50000, 440000),
    Coordinate::new(130000, 440000),
    Coordinate::new(220000, 440000),
    Coordinate::new(320000, 440000),
    Coordinate::new(420000, 380000),
    Coordinate::new(320000, 380000),
    Coordinate::new(220000, 380000),
    Coordinate::new(220000, 320000),
    Coordinate::new(130000, 320000),
    Coordinate::new(50000, 320000),
    Coordinate::new(50000, 50000),
    Coordinate::new(130000, 190000),
    Coordinate::new(220000, 190000),
    Coordinate::new(320000, 320000),
    Coordinate::new(320000, 260000),
    Coordinate::new(420000, 320000),
    Coordinate::new(320000, 190000),
    Coordinate::new(320000, 50000),
    Coordinate::new(220000, 50000),
    Coordinate::new(220000, 130000),
    Coordinate::new(130000, 130000),
    Coordinate::new(130000, 50000),
];

/// Ordered, read-only view over a list of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSet<'a> {
    coords: &'a [Coordinate],
}

impl PointSet<'static> {
    /// The hardcoded data set.
    pub fn fixed() -> Self {
        Self::new(COORDINATES)
    }
}

impl<'a> PointSet<'a> {
    /// Wrap a slice of coordinates.
    pub fn new(coords: &'a [Coordinate]) -> Self {
        Self { coords }
    }

    /// Number of coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the set holds no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Iterate coordinates in order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + 'a {
        let coords: &'a [Coordinate] = self.coords;
        coords.iter().copied()
    }

    /// Iterate `(label, coordinate)` pairs in order.
    pub fn labeled(&self) -> impl Iterator<Item = (String, Coordinate)> + 'a {
        self.iter().enumerate().map(|(i, c)| (label(i), c))
    }

    /// Smallest and largest x, or `None` for an empty set.
    pub fn x_extent(&self) -> Option<(u32, u32)> {
        extent(self.iter().map(|c| c.x))
    }

    /// Smallest and largest y, or `None` for an empty set.
    pub fn y_extent(&self) -> Option<(u32, u32)> {
        extent(self.iter().map(|c| c.y))
    }
}

impl Default for PointSet<'static> {
    fn default() -> Self {
        Self::fixed()
    }
}

fn extent(values: impl Iterator<Item = u32>) -> Option<(u32, u32)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
