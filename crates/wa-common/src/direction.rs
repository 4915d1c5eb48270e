//! Compass directions.
//!
//! Observations arrive with the 16-point compass codes used by the Turkish
//! forecast source (`K`, `KKD`, ..., `KKB`). English abbreviations (`N`,
//! `NNE`, ...) are accepted as aliases. Anything else maps to
//! [`Direction::Unknown`] instead of failing.

use serde::{Deserialize, Serialize, Serializer};

/// A 16-point compass direction, or the explicit unknown category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Direction {
    North,
    NorthNorthEast,
    NorthEast,
    EastNorthEast,
    East,
    EastSouthEast,
    SouthEast,
    SouthSouthEast,
    South,
    SouthSouthWest,
    SouthWest,
    WestSouthWest,
    West,
    WestNorthWest,
    NorthWest,
    NorthNorthWest,
    Unknown,
}

/// Code, English abbreviation, azimuth in degrees.
static COMPASS: [(Direction, &str, &str, f64); 16] = [
    (Direction::North, "K", "N", 0.0),
    (Direction::NorthNorthEast, "KKD", "NNE", 22.5),
    (Direction::NorthEast, "KD", "NE", 45.0),
    (Direction::EastNorthEast, "DKD", "ENE", 67.5),
    (Direction::East, "D", "E", 90.0),
    (Direction::EastSouthEast, "DGD", "ESE", 112.5),
    (Direction::SouthEast, "GD", "SE", 135.0),
    (Direction::SouthSouthEast, "GGD", "SSE", 157.5),
    (Direction::South, "G", "S", 180.0),
    (Direction::SouthSouthWest, "GGB", "SSW", 202.5),
    (Direction::SouthWest, "GB", "SW", 225.0),
    (Direction::WestSouthWest, "BGB", "WSW", 247.5),
    (Direction::West, "B", "W", 270.0),
    (Direction::WestNorthWest, "BKB", "WNW", 292.5),
    (Direction::NorthWest, "KB", "NW", 315.0),
    (Direction::NorthNorthWest, "KKB", "NNW", 337.5),
];

const UNKNOWN_CODE: &str = "?";

impl Direction {
    /// All known compass points, clockwise from north.
    pub fn all() -> impl Iterator<Item = Direction> {
        COMPASS.iter().map(|(d, ..)| *d)
    }

    /// Parse a source code or English abbreviation (case-insensitive).
    pub fn from_code(code: &str) -> Direction {
        let code = code.trim();
        COMPASS
            .iter()
            .find(|(_, src, en, _)| src.eq_ignore_ascii_case(code) || en.eq_ignore_ascii_case(code))
            .map(|(d, ..)| *d)
            .unwrap_or(Direction::Unknown)
    }

    fn entry(&self) -> Option<&'static (Direction, &'static str, &'static str, f64)> {
        COMPASS.iter().find(|(d, ..)| d == self)
    }

    /// Source compass code (`GGD`), or `?` for unknown.
    pub fn code(&self) -> &'static str {
        self.entry().map(|e| e.1).unwrap_or(UNKNOWN_CODE)
    }

    /// English abbreviation (`SSE`), or `?` for unknown.
    pub fn abbreviation(&self) -> &'static str {
        self.entry().map(|e| e.2).unwrap_or(UNKNOWN_CODE)
    }

    /// Azimuth in degrees clockwise from north.
    pub fn degrees(&self) -> Option<f64> {
        self.entry().map(|e| e.3)
    }
}

impl From<&str> for Direction {
    fn from(code: &str) -> Self {
        Direction::from_code(code)
    }
}

impl From<String> for Direction {
    fn from(code: String) -> Self {
        Direction::from_code(&code)
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
