use crate::im::RGBAIm;
use crate::mat3::Mat3;

pub fn assert_mat3_near(got: &Mat3, want: &Mat3, eps: f32) {
    assert!(
        got.approx_eq(want, eps),
        "matrices differ by more than {eps}:\n got: {:?}\nwant: {:?}",
        got.as_array(),
        want.as_array()
    );
}

/// Renders an RGBA image as ASCII: `.` where the pixel equals `bg`, `#` elsewhere.
pub fn rgba_to_ascii(im: &RGBAIm, bg: [u8; 4]) -> String {
    let mut out = String::new();
    for y in 0..im.h {
        for x in 0..im.w {
            let base = y * im.s + x * 4;
            let px = &im.arr[base..base + 4];
            out.push(if px == bg { '.' } else { '#' });
        }
        out.push('\n');
    }
    out
}

pub fn count_non_bg(im: &RGBAIm, bg: [u8; 4]) -> usize {
    im.arr.chunks_exact(4).filter(|px| *px != bg).count()
}
