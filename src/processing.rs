use image::{Rgb, RgbImage};

pub fn invert(buf: &mut RgbImage) {
    for pixel in buf.pixels_mut() {
        pixel.0[0] = u8::MAX - pixel.0[0];
        pixel.0[1] = u8::MAX - pixel.0[1];
        pixel.0[2] = u8::MAX - pixel.0[2];
    }
}

/// Replaces every pixel exactly equal to `from` with `to`, returns the number
/// of replaced pixels.
pub fn replace_color(buf: &mut RgbImage, from: Rgb<u8>, to: Rgb<u8>, width: u32, height: u32) -> u64 {
    debug_assert_eq!(buf.dimensions(), (width, height));
    let mut replaced = 0;
    for x in 0..width {
        for y in 0..height {
            let px = buf.get_pixel_mut(x, y);
            if *px == from {
                *px = to;
                replaced += 1;
            }
        }
    }
    replaced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| if (x + y) % 2 == 0 { Rgb([255, 0, 0]) } else { Rgb([10, 20, 30]) })
    }

    #[test]
    fn invert_pixels() {
        let mut buf = checker();
        invert(&mut buf);
        assert_eq!(*buf.get_pixel(0, 0), Rgb([0, 255, 255]));
        assert_eq!(*buf.get_pixel(1, 0), Rgb([245, 235, 225]));
    }

    #[test]
    fn invert_twice_is_identity() {
        let mut buf = checker();
        invert(&mut buf);
        invert(&mut buf);
        assert_eq!(buf, checker());
    }

    #[test]
    fn replace_only_exact_matches() {
        let mut buf = checker();
        let replaced = replace_color(&mut buf, Rgb([255, 0, 0]), Rgb([0, 0, 255]), 4, 3);
        assert_eq!(replaced, 6);
        for (x, y, px) in buf.enumerate_pixels() {
            let expected = if (x + y) % 2 == 0 { Rgb([0, 0, 255]) } else { Rgb([10, 20, 30]) };
            assert_eq!(*px, expected);
        }
    }

    #[test]
    fn replace_is_idempotent() {
        let mut once = checker();
        replace_color(&mut once, Rgb([255, 0, 0]), Rgb([0, 0, 255]), 4, 3);
        let mut twice = once.clone();
        assert_eq!(replace_color(&mut twice, Rgb([255, 0, 0]), Rgb([0, 0, 255]), 4, 3), 0);
        assert_eq!(once, twice);
    }

    #[test]
    fn replace_absent_color_is_noop() {
        let mut buf = checker();
        assert_eq!(replace_color(&mut buf, Rgb([254, 0, 0]), Rgb([0, 0, 0]), 4, 3), 0);
        assert_eq!(buf, checker());
    }
}
