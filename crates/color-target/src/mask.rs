//! In-range thresholding of an HSV image against a color range.

use color_target_core::{BinaryMask, HsvImageView};

use crate::calibrate::ColorRange;

/// Binary mask of the pixels whose channels all lie within `range`
/// (inclusive on both bounds).
pub fn in_range(img: &HsvImageView<'_>, range: &ColorRange) -> BinaryMask {
    let mut mask = BinaryMask::zeros(img.width, img.height);
    for (i, px) in img.data.chunks_exact(3).enumerate() {
        if range.contains([px[0], px[1], px[2]]) {
            mask.data[i] = 255;
        }
    }
    mask
}
