pub mod canvas;
pub mod error;
pub mod model;
pub mod render;

pub use canvas::{Canvas, MAX_AREA, MAX_HEIGHT};
pub use error::CanvasError;
pub use model::*;
pub use render::Rows;
