use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, Rgba};
use imageproc::map::map_colors;
use crate::error::{PicassoError, Result};

/// An image taken apart into its color plane and optional alpha plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Channels {
    pub rgb: RgbImage,
    /// only present if the source was RGBA, same size as `rgb`
    pub alpha: Option<GrayImage>,
}

pub fn split(image: DynamicImage) -> Result<Channels> {
    match image {
        DynamicImage::ImageRgba8(rgba) => {
            let rgb = map_colors(&rgba, |Rgba([r, g, b, _]): Rgba<u8>| Rgb([r, g, b]));
            let alpha = map_colors(&rgba, |Rgba([_, _, _, a]): Rgba<u8>| Luma([a]));
            Ok(Channels { rgb, alpha: Some(alpha) })
        }
        DynamicImage::ImageRgb8(rgb) => Ok(Channels { rgb, alpha: None }),
        other => Err(PicassoError::UnsupportedImageMode(other.color())),
    }
}

pub fn merge(channels: Channels) -> DynamicImage {
    let Channels { rgb, alpha } = channels;
    match alpha {
        Some(alpha) => {
            let merged = ImageBuffer::from_fn(rgb.width(), rgb.height(), |x, y| {
                let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
                let Luma([a]) = *alpha.get_pixel(x, y);
                Rgba([r, g, b, a])
            });
            DynamicImage::ImageRgba8(merged)
        }
        None => DynamicImage::ImageRgb8(rgb),
    }
}
