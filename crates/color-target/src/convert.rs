//! Conversions from `image` crate buffers (feature `image`).

use color_target_core::{hsv_from_rgb8, HsvImage, RgbFrame};

/// Convert an RGB image to the interleaved full-range HSV layout used
/// by calibration and masking.
pub fn hsv_from_rgb_image(img: &image::RgbImage) -> HsvImage {
    let (width, height) = (img.width() as usize, img.height() as usize);
    let mut data = Vec::with_capacity(width * height * 3);
    for px in img.pixels() {
        data.extend_from_slice(&hsv_from_rgb8(px.0[0], px.0[1], px.0[2]));
    }
    HsvImage {
        width,
        height,
        data,
    }
}

/// Copy an RGB image into a mutable visualization frame.
pub fn frame_from_rgb_image(img: &image::RgbImage) -> RgbFrame {
    RgbFrame {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_dimensions_and_hue() {
        let mut rgb = image::RgbImage::new(4, 2);
        for px in rgb.pixels_mut() {
            *px = image::Rgb([0, 255, 0]);
        }
        let hsv = hsv_from_rgb_image(&rgb);
        assert_eq!((hsv.width, hsv.height), (4, 2));
        assert_eq!(hsv.view().pixel(3, 1), [85, 255, 255]);
    }
}
