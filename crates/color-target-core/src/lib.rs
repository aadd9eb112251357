//! Core numeric building blocks for color target tracking.
//!
//! This crate is intentionally small and purely computational. It holds
//! the 1-D signal machinery (windowed smoothing, local extrema, dominant
//! peak extraction) and the raw image containers; it does *not* depend
//! on any image decoding or camera layer.

mod image;
mod logger;
mod peaks;
mod smoothing;

pub use image::{hsv_from_rgb8, BinaryMask, HsvImage, HsvImageView, RgbFrame};
pub use logger::init_with_level;
pub use peaks::{local_extrema, top_bell, PeakError};
pub use smoothing::{smooth, SmoothError, Smoothed, WindowKind};
