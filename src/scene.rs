use crate::error::{Error, Result};
use crate::im::RGBAIm;
use crate::raster::{self, Viewport};
use crate::render_state::RenderState;

/// The demo geometry in pixels, relative to the translated origin.
pub const TRIANGLE_POSITIONS: [f32; 6] = [0.0, -100.0, 150.0, 125.0, -175.0, 100.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub clear_color: [u8; 4],
}

impl Scene {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            clear_color: [0, 0, 0, 255],
        })
    }

    pub fn with_clear_color(mut self, rgba: [u8; 4]) -> Self {
        self.clear_color = rgba;
        self
    }

    /// Renders one frame into a fresh image.
    pub fn render(&self, state: &RenderState) -> RGBAIm {
        let mut im = RGBAIm::new(self.width as usize, self.height as usize);
        self.render_into(state, &mut im);
        im
    }

    /// Viewport, clear, compute the matrix, draw. `im` must match the scene size.
    pub fn render_into(&self, state: &RenderState, im: &mut RGBAIm) {
        debug_assert_eq!(im.w, self.width as usize);
        debug_assert_eq!(im.h, self.height as usize);

        let viewport = Viewport::new(0, 0, self.width, self.height);
        log::debug!("viewport {}x{}", self.width, self.height);

        raster::clear(im, self.clear_color);

        let matrix = state.matrix(self.width, self.height);
        log::trace!("u_matrix = {:?}", matrix.as_array());

        let n = raster::draw_triangles(im, &viewport, &TRIANGLE_POSITIONS, &matrix);
        log::debug!("drew {n} pixels for {state:?}");
    }
}
