//! Dominant color blob calibration and tracking.
//!
//! Two independently callable paths share one [`ColorRange`] value:
//!
//! - **calibration** (occasional): [`color_range`] builds per-channel
//!   histograms of a frame, smooths each one, extracts the bell around
//!   the dominant peak and assembles lower/upper HSV bounds;
//! - **tracking** (every frame): [`in_range`] thresholds a frame against
//!   the bounds and [`single_target`] reduces the resulting mask to the
//!   largest blob's centroid, size, bounding box, orientation and
//!   offset from the frame center.
//!
//! ## Quickstart
//!
//! ```
//! use color_target::{color_range, in_range, single_target, CalibrationParams};
//! use color_target_core::HsvImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // frame dominated by the target color, with an off-color corner
//! let mut frame = HsvImage::filled(64, 48, [100, 150, 200]);
//! for y in 0..8 {
//!     for x in 0..10 {
//!         frame.set_pixel(x, y, [10, 220, 60]);
//!     }
//! }
//!
//! let range = color_range(&frame.view(), &CalibrationParams::default())?;
//! let mask = in_range(&frame.view(), &range);
//! let target = single_target(&mask, None);
//! println!("detected: {}", target.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`calibrate`]: color-range calibration and JSON persistence.
//! - [`histogram`]: per-channel frequency histograms.
//! - [`mask`]: in-range thresholding.
//! - [`contour`]: external contour extraction.
//! - [`geometry`]: hull, enclosing circle, centroid and offsets.
//! - [`convert`] (feature `image`): conversions from `image` buffers.

pub mod calibrate;
pub mod contour;
pub mod geometry;
pub mod histogram;
pub mod mask;
mod overlay;

#[cfg(feature = "image")]
pub mod convert;

pub use calibrate::{
    color_range, CalibrationError, CalibrationParams, ColorRange, RangeIoError,
};
pub use contour::{external_contours, Contour};
pub use geometry::{
    single_target, HorizontalSide, Orientation, PixelCenter, TargetGeometry, VerticalSide,
};
pub use histogram::channel_histograms;
pub use mask::in_range;

pub use color_target_core as core;
pub use color_target_core::{smooth, SmoothError, Smoothed, WindowKind};
