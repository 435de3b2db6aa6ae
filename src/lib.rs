// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library.
// The transform math lives in `mat3`; everything else is the demo around it.

pub mod config;
pub mod error;
pub mod im;
pub mod mat3;
pub mod raster;
pub mod render_state;
pub mod scene;
pub mod slider;
pub mod slider_ui;

pub use error::{Error, Result};
pub use mat3::Mat3;
pub use render_state::{Axis, RenderState};

#[cfg(test)]
pub mod test_helpers;
