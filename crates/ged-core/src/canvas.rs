//! The sparse pixel canvas.
//!
//! Pixels live in an ordered map keyed by coordinate. A key exists only
//! once something painted it (allocation counts), so an empty map means
//! "never allocated".
//!
//! Bounds are a cached derived value: computed from the largest column and
//! row in the key set the first time they are needed after an allocation,
//! then reused as-is until the next allocation. Every painting operation is
//! validated against that cache, so the key set never grows past it.

use crate::error::CanvasError;
use crate::model::{Bounds, Color, Pixel};
use crate::render::Rows;
use std::cell::OnceCell;
use std::collections::{BTreeMap, BTreeSet};

/// Largest accepted canvas height.
pub const MAX_HEIGHT: u32 = 250;

/// Largest accepted canvas area, in pixels. Allocation stores one entry
/// per pixel, so this caps the memory a single `allocate` can claim.
pub const MAX_AREA: u64 = 1 << 24;

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    pixels: BTreeMap<Pixel, Color>,
    /// Derived from `pixels`; reset only by `allocate`.
    bounds: OnceCell<Bounds>,
}

impl Canvas {
    /// Create an empty, unallocated canvas.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Discard everything and create a `width × height` canvas filled with
    /// the background color.
    ///
    /// Cost is proportional to `width × height`: every pixel gets a key.
    ///
    /// # Errors
    /// `InvalidDimension` if `width` is 0, `height` is outside
    /// `1..=MAX_HEIGHT`, or the area exceeds `MAX_AREA`. The canvas is
    /// left as it was.
    pub fn allocate(&mut self, width: u32, height: u32) -> Result<(), CanvasError> {
        let bounds = Bounds::new(width, height);
        if width < 1 || !(1..=MAX_HEIGHT).contains(&height) || bounds.area() > MAX_AREA {
            return Err(CanvasError::InvalidDimension { width, height });
        }

        self.pixels.clear();
        self.bounds = OnceCell::new();
        for y in 1..=height {
            for x in 1..=width {
                self.pixels.insert(Pixel::new(x, y), Color::BACKGROUND);
            }
        }

        log::debug!("allocated {bounds} canvas ({} pixels)", bounds.area());
        Ok(())
    }

    /// Reset every painted pixel to the background color.
    /// Keys and bounds are kept.
    pub fn clear(&mut self) {
        for color in self.pixels.values_mut() {
            *color = Color::BACKGROUND;
        }
        log::debug!("cleared {} pixels", self.pixels.len());
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// The cached bounds, or `None` while the canvas is unallocated.
    pub fn bounds(&self) -> Option<Bounds> {
        if let Some(bounds) = self.bounds.get() {
            return Some(*bounds);
        }

        let width = self.pixels.keys().map(|p| p.x).max()?;
        // Keys sort row-major, so the last key sits on the largest row.
        let height = self.pixels.keys().next_back()?.y;
        Some(*self.bounds.get_or_init(|| Bounds::new(width, height)))
    }

    pub fn is_allocated(&self) -> bool {
        !self.pixels.is_empty()
    }

    /// Number of keyed pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Color at `(x, y)`, or `None` outside the bounds.
    /// In-bounds coordinates that were never painted read as background.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        let pixel = Pixel::new(x, y);
        self.bounds()
            .filter(|b| b.contains(pixel))
            .map(|_| self.stored(pixel))
    }

    /// Keyed pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (Pixel, Color)> + '_ {
        self.pixels.iter().map(|(p, c)| (*p, *c))
    }

    /// Text rows `1..=height`, one color letter per column.
    /// Yields nothing for an unallocated canvas.
    pub fn render(&self) -> Rows<'_> {
        Rows::new(self)
    }

    pub(crate) fn stored(&self, pixel: Pixel) -> Color {
        self.pixels
            .get(&pixel)
            .copied()
            .unwrap_or(Color::BACKGROUND)
    }

    fn check(&self, pixel: Pixel) -> Result<Bounds, CanvasError> {
        match self.bounds() {
            Some(bounds) if bounds.contains(pixel) => Ok(bounds),
            bounds => Err(CanvasError::OutOfBounds { pixel, bounds }),
        }
    }

    // ─── Drawing ─────────────────────────────────────────────────────────

    /// Paint a single pixel.
    ///
    /// # Errors
    /// `OutOfBounds` if `(x, y)` lies outside the current bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), CanvasError> {
        let pixel = Pixel::new(x, y);
        self.check(pixel)?;
        self.pixels.insert(pixel, color);
        Ok(())
    }

    /// Paint row `y` from column `x1` to column `x2`, inclusive.
    /// The endpoints may come in either order.
    ///
    /// # Errors
    /// `OutOfBounds` if either endpoint lies outside the current bounds;
    /// nothing is painted in that case.
    pub fn draw_horizontal(
        &mut self,
        x1: u32,
        x2: u32,
        y: u32,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.check(Pixel::new(x1, y))?;
        self.check(Pixel::new(x2, y))?;
        for x in x1.min(x2)..=x1.max(x2) {
            self.pixels.insert(Pixel::new(x, y), color);
        }
        Ok(())
    }

    /// Paint column `x` from row `y1` to row `y2`, inclusive.
    /// The endpoints may come in either order.
    ///
    /// # Errors
    /// `OutOfBounds` if either endpoint lies outside the current bounds;
    /// nothing is painted in that case.
    pub fn draw_vertical(
        &mut self,
        x: u32,
        y1: u32,
        y2: u32,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.check(Pixel::new(x, y1))?;
        self.check(Pixel::new(x, y2))?;
        for y in y1.min(y2)..=y1.max(y2) {
            self.pixels.insert(Pixel::new(x, y), color);
        }
        Ok(())
    }

    /// Recolor the 4-connected region of same-colored pixels around `(x, y)`.
    ///
    /// Grows in waves: each wave paints its whole frontier, then collects the
    /// in-bounds neighbors that still carry the origin color as the next
    /// frontier. A painted pixel never matches the origin again, so no pixel
    /// is visited twice. Filling with the origin color changes nothing and
    /// returns immediately.
    ///
    /// # Errors
    /// `OutOfBounds` if the seed lies outside the current bounds.
    pub fn flood_fill(&mut self, x: u32, y: u32, color: Color) -> Result<(), CanvasError> {
        let seed = Pixel::new(x, y);
        let bounds = self.check(seed)?;
        let origin = self.stored(seed);
        if origin == color {
            log::debug!("fill at {seed} skipped: region already {color}");
            return Ok(());
        }

        let mut frontier = BTreeSet::from([seed]);
        let mut waves = 0usize;
        let mut painted = 0usize;

        while !frontier.is_empty() {
            for &pixel in &frontier {
                self.pixels.insert(pixel, color);
            }
            painted += frontier.len();

            let mut next = BTreeSet::new();
            for pixel in &frontier {
                for neighbor in pixel.neighbors() {
                    if bounds.contains(neighbor) && self.stored(neighbor) == origin {
                        next.insert(neighbor);
                    }
                }
            }

            frontier = next;
            waves += 1;
        }

        log::debug!("fill at {seed}: {origin} -> {color}, {painted} pixels in {waves} waves");
        Ok(())
    }
}
