use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use picasso::{channels, processing};
use proptest::prelude::*;

fn rgba_image() -> impl Strategy<Value = RgbaImage> {
    (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
        prop::collection::vec(any::<u8>(), (w * h * 4) as usize)
            .prop_map(move |data| RgbaImage::from_raw(w, h, data).unwrap())
    })
}

fn rgb_image() -> impl Strategy<Value = RgbImage> {
    (1u32..8, 1u32..8).prop_flat_map(|(w, h)| {
        prop::collection::vec(0u8..4, (w * h * 3) as usize)
            .prop_map(move |data| RgbImage::from_raw(w, h, data).unwrap())
    })
}

proptest! {
    #[test]
    fn split_merge_roundtrip(img in rgba_image()) {
        let channels = channels::split(DynamicImage::ImageRgba8(img.clone())).unwrap();
        let merged = channels::merge(channels);
        prop_assert_eq!(merged.as_rgba8(), Some(&img));
    }

    #[test]
    fn invert_is_involution(img in rgb_image()) {
        let mut buf = img.clone();
        processing::invert(&mut buf);
        processing::invert(&mut buf);
        prop_assert_eq!(buf, img);
    }

    #[test]
    fn replace_is_idempotent(img in rgb_image(), from in prop::array::uniform3(0u8..4), to in prop::array::uniform3(0u8..4)) {
        let (w, h) = img.dimensions();
        let mut once = img.clone();
        processing::replace_color(&mut once, Rgb(from), Rgb(to), w, h);
        let mut twice = once.clone();
        processing::replace_color(&mut twice, Rgb(from), Rgb(to), w, h);
        prop_assert_eq!(&once, &twice);
        if from != to {
            prop_assert!(once.pixels().all(|px| *px != Rgb(from)));
        }
    }

    #[test]
    fn replace_absent_color_changes_nothing(img in rgb_image(), to in prop::array::uniform3(any::<u8>())) {
        // generated channels stay below 4, so 200 never occurs
        let (w, h) = img.dimensions();
        let mut buf = img.clone();
        prop_assert_eq!(processing::replace_color(&mut buf, Rgb([200, 200, 200]), Rgb(to), w, h), 0);
        prop_assert_eq!(buf, img);
    }
}
