//! Color-range calibration from a single frame.
//!
//! Builds one histogram per HSV channel, smooths it, extracts the bell
//! around the dominant peak and assembles the per-channel lower/upper
//! bounds. The bell indices are read in the padded coordinate system of
//! the smoothed signal; downstream lookups rely on that, so no
//! re-alignment happens here.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use color_target_core::{smooth, top_bell, HsvImageView, PeakError, SmoothError, WindowKind};

use crate::histogram::channel_histograms;

/// Errors produced by [`color_range`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalibrationError {
    #[error("cannot calibrate on an empty image")]
    EmptyImage,
    #[error(transparent)]
    Smooth(#[from] SmoothError),
    #[error(transparent)]
    Peak(#[from] PeakError),
}

/// Errors while persisting or loading a [`ColorRange`].
#[derive(thiserror::Error, Debug)]
pub enum RangeIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn default_window_len() -> usize {
    11
}

/// Parameters for color-range calibration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalibrationParams {
    /// Smoothing window length applied to each channel histogram.
    #[serde(default = "default_window_len")]
    pub window_len: usize,
    /// Smoothing window kind.
    #[serde(default)]
    pub window: WindowKind,
    /// Symmetric widening of each channel's bell bounds, in channel
    /// units, to absorb lighting drift. Clamped to the valid 0..=255
    /// channel range.
    #[serde(default)]
    pub margin: u8,
}

impl Default for CalibrationParams {
    fn default() -> Self {
        Self {
            window_len: default_window_len(),
            window: WindowKind::default(),
            margin: 0,
        }
    }
}

/// Per-channel lower/upper color bounds, in HSV channel order.
///
/// Produced by calibration, persisted as `{"lower": [h,s,v],
/// "upper": [h,s,v]}`, consumed by masking. `lower[i] <= upper[i]`
/// holds for every channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ColorRange {
    /// Whether `px` lies within the bounds on all three channels.
    #[inline]
    pub fn contains(&self, px: [u8; 3]) -> bool {
        px.iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(&v, (&lo, &hi))| lo <= v && v <= hi)
    }

    /// Load a JSON range document from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, RangeIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this range to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), RangeIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Calibrate the color range of the dominant blob in `img`.
///
/// For each HSV channel: histogram, smooth, take the bell around the
/// dominant peak, widen by `params.margin` and clamp to 0..=255.
pub fn color_range(
    img: &HsvImageView<'_>,
    params: &CalibrationParams,
) -> Result<ColorRange, CalibrationError> {
    if img.width == 0 || img.height == 0 {
        return Err(CalibrationError::EmptyImage);
    }

    let margin = params.margin as i64;
    let mut lower = [0u8; 3];
    let mut upper = [0u8; 3];

    for (c, hist) in channel_histograms(img).iter().enumerate() {
        let smoothed = smooth(hist, params.window_len, params.window)?;
        let (lo, hi) = top_bell(&smoothed.values)?;
        debug!("channel {c}: bell [{lo}, {hi}] in padded coordinates");
        lower[c] = (lo as i64 - margin).clamp(0, 255) as u8;
        upper[c] = (hi as i64 + margin).clamp(0, 255) as u8;
    }

    Ok(ColorRange { lower, upper })
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_target_core::HsvImage;

    fn speckled_image(dominant: [u8; 3]) -> HsvImage {
        let mut img = HsvImage::filled(40, 30, dominant);
        // scatter a handful of off-color pixels so the histograms are
        // not pure deltas
        for (i, px) in [[3u8, 250, 9], [200, 17, 60], [90, 90, 90]]
            .iter()
            .enumerate()
        {
            img.set_pixel(i * 7, i * 5 + 1, *px);
        }
        img
    }

    #[test]
    fn range_brackets_the_dominant_color() {
        let img = speckled_image([100, 150, 200]);
        let range = color_range(&img.view(), &CalibrationParams::default()).unwrap();
        for (c, &v) in [100u8, 150, 200].iter().enumerate() {
            assert!(range.lower[c] <= v, "channel {c}: {:?}", range);
            assert!(range.upper[c] >= v, "channel {c}: {:?}", range);
        }
    }

    #[test]
    fn lower_never_exceeds_upper_even_with_margin() {
        let img = speckled_image([2, 250, 128]);
        for margin in [0u8, 25, 50, 255] {
            let params = CalibrationParams {
                margin,
                ..CalibrationParams::default()
            };
            let range = color_range(&img.view(), &params).unwrap();
            for c in 0..3 {
                assert!(range.lower[c] <= range.upper[c], "margin {margin}: {range:?}");
            }
        }
    }

    #[test]
    fn empty_image_is_rejected() {
        let img = HsvImage::filled(0, 0, [0, 0, 0]);
        let err = color_range(&img.view(), &CalibrationParams::default()).unwrap_err();
        assert_eq!(err, CalibrationError::EmptyImage);
    }

    #[test]
    fn contains_is_inclusive_and_conjunctive() {
        let range = ColorRange {
            lower: [10, 20, 30],
            upper: [20, 30, 40],
        };
        assert!(range.contains([10, 20, 30]));
        assert!(range.contains([20, 30, 40]));
        assert!(range.contains([15, 25, 35]));
        assert!(!range.contains([9, 25, 35]));
        assert!(!range.contains([15, 31, 35]));
        assert!(!range.contains([15, 25, 41]));
    }

    #[test]
    fn json_round_trip_is_exact() {
        let range = ColorRange {
            lower: [0, 113, 255],
            upper: [17, 200, 255],
        };
        let json = serde_json::to_string(&range).unwrap();
        let back: ColorRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
