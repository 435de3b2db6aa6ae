#[derive(Debug, Clone)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// Sets every pixel to `px`.
    pub fn fill(&mut self, px: [T; N_CH]) {
        for y in 0..self.h {
            let row = y * self.s;
            for chunk in self.arr[row..row + self.w * N_CH].chunks_exact_mut(N_CH) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<[T; N_CH]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let base = y * self.s + x * N_CH;
        let mut out = [self.arr[base]; N_CH];
        out.copy_from_slice(&self.arr[base..base + N_CH]);
        Some(out)
    }
}

pub type RGBAIm = Im<u8, 4>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_sets_every_pixel() {
        let mut im = RGBAIm::new(4, 2);
        im.fill([1, 2, 3, 255]);

        assert_eq!(im.get(0, 0), Some([1, 2, 3, 255]));
        assert_eq!(im.get(3, 1), Some([1, 2, 3, 255]));
        assert!(im.arr.chunks_exact(4).all(|px| px == [1, 2, 3, 255]));
    }

    #[test]
    fn get_outside_is_none() {
        let im = RGBAIm::new(2, 2);
        assert_eq!(im.get(1, 1), Some([0, 0, 0, 0]));
        assert_eq!(im.get(2, 0), None);
        assert_eq!(im.get(0, 2), None);
    }
}
