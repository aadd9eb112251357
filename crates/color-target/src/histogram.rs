//! Per-channel frequency histograms of an HSV image.

use color_target_core::HsvImageView;

/// Number of buckets per 8-bit channel.
pub const BUCKETS: usize = 256;

/// One 256-bucket frequency histogram per HSV channel, in channel order.
///
/// Bucket `i` holds the number of pixels whose channel value is `i`.
pub fn channel_histograms(img: &HsvImageView<'_>) -> [Vec<f64>; 3] {
    let mut hists = [
        vec![0.0; BUCKETS],
        vec![0.0; BUCKETS],
        vec![0.0; BUCKETS],
    ];
    for px in img.data.chunks_exact(3) {
        for (c, &v) in px.iter().enumerate() {
            hists[c][v as usize] += 1.0;
        }
    }
    hists
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_target_core::HsvImage;

    #[test]
    fn uniform_image_yields_single_bucket_per_channel() {
        let img = HsvImage::filled(8, 4, [10, 20, 30]);
        let hists = channel_histograms(&img.view());
        for (c, bucket) in [(0usize, 10usize), (1, 20), (2, 30)] {
            assert_eq!(hists[c][bucket], 32.0);
            let total: f64 = hists[c].iter().sum();
            assert_eq!(total, 32.0);
        }
    }

    #[test]
    fn histogram_counts_each_pixel_once() {
        let mut img = HsvImage::filled(2, 2, [0, 0, 0]);
        img.set_pixel(1, 1, [255, 128, 7]);
        let hists = channel_histograms(&img.view());
        assert_eq!(hists[0][0], 3.0);
        assert_eq!(hists[0][255], 1.0);
        assert_eq!(hists[1][128], 1.0);
        assert_eq!(hists[2][7], 1.0);
    }
}
