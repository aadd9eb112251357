//! Image and mask containers.
//!
//! Pixels are stored row-major and interleaved: three bytes per pixel
//! for HSV/RGB buffers, one byte per pixel (0 or 255) for binary masks.
//! Hue uses the full 0..=255 range so every channel maps onto 256
//! histogram buckets.

/// Borrowed view over an interleaved HSV pixel grid.
#[derive(Clone, Copy, Debug)]
pub struct HsvImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major, len = w*h*3
}

impl<'a> HsvImageView<'a> {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Owned interleaved HSV pixel grid.
#[derive(Clone, Debug)]
pub struct HsvImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl HsvImage {
    /// Image of the given size with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(width * height * 3);
        for _ in 0..width * height {
            data.extend_from_slice(&fill);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, px: [u8; 3]) {
        let i = (y * self.width + x) * 3;
        self.data[i..i + 3].copy_from_slice(&px);
    }

    pub fn view(&self) -> HsvImageView<'_> {
        HsvImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

/// Binary in-range mask; 255 marks an in-range pixel.
#[derive(Clone, Debug)]
pub struct BinaryMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl BinaryMask {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        self.data[y as usize * self.width + x as usize] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 255;
    }

    pub fn count_in_range(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }
}

/// Owned interleaved RGB frame used as a visualization canvas.
#[derive(Clone, Debug)]
pub struct RgbFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = w*h*3
}

impl RgbFrame {
    pub fn black(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * 3],
        }
    }

    /// Write a pixel, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = (y as usize * self.width + x as usize) * 3;
        self.data[i..i + 3].copy_from_slice(&rgb);
    }
}

/// Convert one RGB pixel to full-range HSV.
///
/// Saturation and value follow the usual cone model; hue is scaled from
/// degrees onto 0..=255 instead of OpenCV's half-degree 0..=179 bytes.
pub fn hsv_from_rgb8(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;
    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let h_deg = if delta <= f32::EPSILON {
        0.0
    } else if max == rf {
        let mut h = 60.0 * (gf - bf) / delta;
        if h < 0.0 {
            h += 360.0;
        }
        h
    } else if max == gf {
        60.0 * (bf - rf) / delta + 120.0
    } else {
        60.0 * (rf - gf) / delta + 240.0
    };

    let s = if max <= f32::EPSILON { 0.0 } else { delta / max };

    [
        (h_deg / 360.0 * 255.0).round() as u8,
        (s * 255.0).round() as u8,
        (max * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_convert_to_expected_hsv() {
        assert_eq!(hsv_from_rgb8(0, 0, 0), [0, 0, 0]);
        assert_eq!(hsv_from_rgb8(255, 255, 255), [0, 0, 255]);
        assert_eq!(hsv_from_rgb8(255, 0, 0), [0, 255, 255]);
        assert_eq!(hsv_from_rgb8(0, 255, 0), [85, 255, 255]);
        assert_eq!(hsv_from_rgb8(0, 0, 255), [170, 255, 255]);
    }

    #[test]
    fn mask_get_is_false_outside_bounds() {
        let mut mask = BinaryMask::zeros(4, 3);
        mask.set(1, 2);
        assert!(mask.get(1, 2));
        assert!(!mask.get(-1, 0));
        assert!(!mask.get(4, 0));
        assert!(!mask.get(0, 3));
        assert_eq!(mask.count_in_range(), 1);
    }

    #[test]
    fn hsv_image_round_trips_pixels() {
        let mut img = HsvImage::filled(3, 2, [10, 20, 30]);
        img.set_pixel(2, 1, [1, 2, 3]);
        let view = img.view();
        assert_eq!(view.pixel(0, 0), [10, 20, 30]);
        assert_eq!(view.pixel(2, 1), [1, 2, 3]);
    }
}
