//! Canvas → text rows.

use crate::canvas::Canvas;
use crate::model::{Bounds, Pixel};
use std::iter::FusedIterator;

/// Lazy row iterator returned by [`Canvas::render`].
///
/// Bounds are captured once on creation; each `next` builds one row.
/// Calling `render` again starts over, since rows are a pure function of
/// the canvas state.
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    canvas: &'a Canvas,
    bounds: Option<Bounds>,
    row: u32,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            bounds: canvas.bounds(),
            row: 1,
        }
    }

    fn remaining(&self) -> usize {
        self.bounds
            .map(|b| (b.height + 1).saturating_sub(self.row) as usize)
            .unwrap_or(0)
    }
}

impl Iterator for Rows<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bounds = self.bounds?;
        if self.row > bounds.height {
            return None;
        }
        let y = self.row;
        self.row += 1;
        Some(
            (1..=bounds.width)
                .map(|x| self.canvas.stored(Pixel::new(x, y)).as_char())
                .collect(),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}

#[cfg(test)]
mod tests {
    use crate::canvas::Canvas;

    #[test]
    fn rows_are_exact_size_and_restartable() {
        let mut canvas = Canvas::new();
        canvas.allocate(3, 2).unwrap();

        let mut rows = canvas.render();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows.next().as_deref(), Some("OOO"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.next().as_deref(), Some("OOO"));
        assert_eq!(rows.next(), None);
        assert_eq!(rows.next(), None);

        assert_eq!(canvas.render().count(), 2);
    }
}
