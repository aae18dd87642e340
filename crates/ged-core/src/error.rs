use crate::canvas::{MAX_AREA, MAX_HEIGHT};
use crate::model::{Bounds, Pixel};

/// Validation failures raised by canvas operations.
///
/// All of them are recoverable: the operation that raised one left the
/// canvas untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error(
        "invalid dimensions {width}x{height}: width must be at least 1 and height between 1 and {max} (at most {area} pixels)",
        max = MAX_HEIGHT,
        area = MAX_AREA
    )]
    InvalidDimension { width: u32, height: u32 },

    #[error("invalid color '{0}': choose one of A-Z")]
    InvalidColor(String),

    #[error("{}", out_of_bounds(.pixel, .bounds))]
    OutOfBounds {
        pixel: Pixel,
        bounds: Option<Bounds>,
    },
}

fn out_of_bounds(pixel: &Pixel, bounds: &Option<Bounds>) -> String {
    match bounds {
        Some(b) => format!(
            "pixel {pixel} is out of bounds: x must be between 1 and {} and y between 1 and {}",
            b.width, b.height
        ),
        None => format!("pixel {pixel} is out of bounds: no canvas allocated"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_valid_range() {
        let err = CanvasError::InvalidDimension {
            width: 0,
            height: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimensions 0x3: width must be at least 1 and height between 1 and 250 (at most 16777216 pixels)"
        );

        let err = CanvasError::OutOfBounds {
            pixel: Pixel::new(6, 1),
            bounds: Some(Bounds::new(5, 3)),
        };
        assert_eq!(
            err.to_string(),
            "pixel (6, 1) is out of bounds: x must be between 1 and 5 and y between 1 and 3"
        );

        let err = CanvasError::OutOfBounds {
            pixel: Pixel::new(1, 1),
            bounds: None,
        };
        assert!(err.to_string().ends_with("no canvas allocated"));
    }
}
