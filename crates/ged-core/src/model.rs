//! Value types shared by the canvas and its callers.
//!
//! Coordinates are 1-based `(column, row)` pairs. Colors come from a fixed
//! 26-letter alphabet; `O` is the background every fresh canvas starts with.

use crate::error::CanvasError;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ─── Colors ──────────────────────────────────────────────────────────────────

/// A canvas color: one uppercase ASCII letter `A`..=`Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(u8);

impl Color {
    /// Background color used to initialize and clear the canvas.
    pub const BACKGROUND: Color = Color(b'O');

    /// The whole alphabet, in order.
    pub const ALL: [Color; 26] = {
        let mut all = [Color(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            all[i] = Color(b'A' + i as u8);
            i += 1;
        }
        all
    };

    /// Returns `None` for anything outside `A`..=`Z` (lowercase included).
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Color(c as u8))
        } else {
            None
        }
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

impl TryFrom<char> for Color {
    type Error = CanvasError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Color::from_char(c).ok_or_else(|| CanvasError::InvalidColor(c.to_string()))
    }
}

impl FromStr for Color {
    type Err = CanvasError;

    /// Parse a color token. The token must be exactly one letter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Color::from_char(c).ok_or_else(|| CanvasError::InvalidColor(s.to_string()))
            }
            _ => Err(CanvasError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// A 1-based pixel coordinate: `x` is the column, `y` the row.
///
/// Pixels order row-major (by `y`, then `x`) so a sorted pixel store
/// iterates in the same order the canvas is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
}

impl Pixel {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The four axis-aligned neighbors: left, right, up, down.
    ///
    /// Neighbors that would fall on column or row 0 (or overflow) are
    /// omitted; callers still check them against the canvas bounds.
    pub fn neighbors(self) -> SmallVec<[Pixel; 4]> {
        let mut out = SmallVec::new();
        if self.x > 1 {
            out.push(Pixel::new(self.x - 1, self.y));
        }
        if let Some(x) = self.x.checked_add(1) {
            out.push(Pixel::new(x, self.y));
        }
        if self.y > 1 {
            out.push(Pixel::new(self.x, self.y - 1));
        }
        if let Some(y) = self.y.checked_add(1) {
            out.push(Pixel::new(self.x, y));
        }
        out
    }
}

impl Ord for Pixel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Pixel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ─── Bounds ──────────────────────────────────────────────────────────────────

/// The rectangular extent the canvas currently recognizes:
/// columns `1..=width`, rows `1..=height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        (1..=self.width).contains(&pixel.x) && (1..=self.height).contains(&pixel.y)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
