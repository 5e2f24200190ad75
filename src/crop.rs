use image::{DynamicImage, GrayImage, Luma, Rgb, Rgba};
use imageproc::map::map_colors;
use itertools::{Itertools, MinMaxResult};
use crate::error::{PicassoError, Result};

/// Crops `image` to the rows and columns whose mean intensity lies above
/// half the brightest pixel's intensity.
pub fn crop(image: &DynamicImage) -> Result<DynamicImage> {
    let intensity = intensity(image)?;
    let (width, height) = intensity.dimensions();
    // floor of half the brightest intensity
    let threshold = (intensity.pixels().map(|px| px.0[0]).max().unwrap_or(0) / 2) as f64;

    let mut row_sums = vec![0_u64; height as usize];
    let mut column_sums = vec![0_u64; width as usize];
    for (x, y, px) in intensity.enumerate_pixels() {
        row_sums[y as usize] += px.0[0] as u64;
        column_sums[x as usize] += px.0[0] as u64;
    }
    let rows = above_threshold(&row_sums, width, threshold);
    let columns = above_threshold(&column_sums, height, threshold);

    match (rows.iter().minmax(), columns.iter().minmax()) {
        (MinMaxResult::MinMax(&top, &bottom), MinMaxResult::MinMax(&left, &right)) => {
            Ok(image.crop_imm(left, top, right - left + 1, bottom - top + 1))
        }
        _ => Err(PicassoError::CropThresholdTooHigh { rows: rows.len(), columns: columns.len() }),
    }
}

/// Per-pixel maximum over the first three channels.
fn intensity(image: &DynamicImage) -> Result<GrayImage> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(map_colors(rgb, |Rgb([r, g, b]): Rgb<u8>| Luma([r.max(g).max(b)]))),
        DynamicImage::ImageRgba8(rgba) => Ok(map_colors(rgba, |Rgba([r, g, b, _]): Rgba<u8>| Luma([r.max(g).max(b)]))),
        other => Err(PicassoError::UnsupportedImageMode(other.color())),
    }
}

fn above_threshold(sums: &[u64], count: u32, threshold: f64) -> Vec<u32> {
    sums.iter()
        .enumerate()
        .filter(|&(_, &sum)| count > 0 && sum as f64 / count as f64 > threshold)
        .map(|(idx, _)| idx as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbImage, RgbaImage};

    fn framed(border: u32, inner: u32) -> RgbImage {
        let size = inner + 2 * border;
        RgbImage::from_fn(size, size, |x, y| {
            let inside = (border..border + inner).contains(&x) && (border..border + inner).contains(&y);
            if inside { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) }
        })
    }

    #[test]
    fn removes_dark_border() {
        let cropped = crop(&DynamicImage::ImageRgb8(framed(2, 6))).unwrap();
        assert_eq!(cropped.dimensions(), (6, 6));
        assert!(cropped.to_rgb8().pixels().all(|px| *px == Rgb([255, 255, 255])));
    }

    #[test]
    fn border_width_is_removed_exactly() {
        for border in 1..4 {
            let cropped = crop(&DynamicImage::ImageRgb8(framed(border, 8))).unwrap();
            assert_eq!(cropped.dimensions(), (8, 8), "border {border}");
        }
    }

    #[test]
    fn keeps_alpha_channel() {
        let rgba = RgbaImage::from_fn(6, 6, |x, y| {
            if (1..5).contains(&x) && (1..5).contains(&y) { Rgba([0, 200, 0, 17]) } else { Rgba([0, 0, 0, 255]) }
        });
        let cropped = crop(&DynamicImage::ImageRgba8(rgba)).unwrap();
        let cropped = cropped.as_rgba8().unwrap();
        assert_eq!(cropped.dimensions(), (4, 4));
        assert!(cropped.pixels().all(|px| *px == Rgba([0, 200, 0, 17])));
    }

    #[test]
    fn intensity_uses_channel_maximum() {
        // a pure blue subject counts as fully bright
        let rgb = RgbImage::from_fn(4, 4, |x, y| {
            if (1..3).contains(&x) && (1..3).contains(&y) { Rgb([0, 0, 255]) } else { Rgb([0, 0, 0]) }
        });
        let cropped = crop(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert_eq!(cropped.dimensions(), (2, 2));
    }

    #[test]
    fn uniform_black_is_too_dark() {
        let black = DynamicImage::ImageRgb8(RgbImage::new(8, 8));
        assert!(matches!(crop(&black), Err(PicassoError::CropThresholdTooHigh { rows: 0, columns: 0 })));
    }

    #[test]
    fn single_bright_pixel_is_degenerate() {
        let mut rgb = RgbImage::new(10, 10);
        rgb.put_pixel(3, 3, Rgb([255, 255, 255]));
        assert!(matches!(
            crop(&DynamicImage::ImageRgb8(rgb)),
            Err(PicassoError::CropThresholdTooHigh { .. })
        ));
    }

    #[test]
    fn single_bright_row_is_degenerate() {
        let rgb = RgbImage::from_fn(6, 6, |_, y| if y == 2 { Rgb([255, 255, 255]) } else { Rgb([0, 0, 0]) });
        assert!(matches!(
            crop(&DynamicImage::ImageRgb8(rgb)),
            Err(PicassoError::CropThresholdTooHigh { rows: 1, columns: 0 })
        ));
    }

    #[test]
    fn uniform_gray_keeps_everything() {
        let gray = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 4, Rgb([128, 128, 128])));
        assert_eq!(crop(&gray).unwrap().dimensions(), (5, 4));
    }
}
