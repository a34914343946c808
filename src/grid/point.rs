//! Continuous coordinates, rectangular bounds and compass steps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A location on the plane.
///
/// Named after geographic coordinates, but the grid treats them as plain
/// axes: `lat` is the vertical (row, `i`) axis and `lng` the horizontal
/// (column, `j`) axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Offset this point by whole tiles in the given direction.
    pub fn stepped(self, direction: Direction, tile_width: f64) -> Self {
        let (d_lat, d_lng) = direction.delta();
        Self {
            lat: self.lat + d_lat * tile_width,
            lng: self.lng + d_lng * tile_width,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Axis-aligned rectangle spanning `[south_west, north_east)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: Point,
    pub north_east: Point,
}

impl Bounds {
    /// Half-open containment: the south and west edges belong to the
    /// rectangle, the north and east edges belong to the neighbours.
    pub fn contains(&self, point: Point) -> bool {
        point.lat >= self.south_west.lat
            && point.lat < self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng < self.north_east.lng
    }

    pub fn center(&self) -> Point {
        Point {
            lat: (self.south_west.lat + self.north_east.lat) / 2.0,
            lng: (self.south_west.lng + self.north_east.lng) / 2.0,
        }
    }
}

/// One-tile movement of the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Unit offset as `(lat, lng)`.
    pub fn delta(self) -> (f64, f64) {
        match self {
            Direction::North => (1.0, 0.0),
            Direction::South => (-1.0, 0.0),
            Direction::East => (0.0, 1.0),
            Direction::West => (0.0, -1.0),
        }
    }

    pub fn from_char(c: char) -> Option<Direction> {
        match c {
            'n' | 'N' => Some(Direction::North),
            's' | 'S' => Some(Direction::South),
            'e' | 'E' => Some(Direction::East),
            'w' | 'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{name}")
    }
}
