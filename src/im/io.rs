use super::core::Im;
use crate::error::Result;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Im<u8, 4> {
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage> {
        let mut packed = Vec::with_capacity(self.w * self.h * 4);
        for y in 0..self.h {
            let row = y * self.s;
            packed.extend_from_slice(&self.arr[row..row + self.w * 4]);
        }
        let img = image::RgbaImage::from_raw(self.w as u32, self.h as u32, packed)
            .ok_or_else(dim_mismatch_err)?;
        Ok(img)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }

    pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = image::open(path)?.into_rgba8();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();

        if arr.len() != w * h * 4 {
            return Err(dim_mismatch_err().into());
        }
        Ok(Self { w, h, s: w * 4, arr })
    }
}

// Tests
// -----------------------------------------------------------------------------
