//! Windowed smoothing of 1-D frequency signals.
//!
//! The signal is extended on both ends with reflected copies of itself
//! (mirror padding, boundary sample excluded) before a valid-mode
//! convolution with a normalized window, so the transient parts at the
//! edges of the output are minimized. The output is therefore longer
//! than the input; [`Smoothed`] carries the trim offsets callers need to
//! recover input-aligned samples.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// Errors produced when smoothing a signal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SmoothError {
    #[error("signal of length {len} is shorter than the window ({window_len})")]
    InsufficientLength { len: usize, window_len: usize },
    #[error("unknown window kind: {0:?}")]
    UnknownWindowKind(String),
}

/// Shape of the smoothing window.
///
/// `Flat` is a plain moving average; the rest are the standard symmetric
/// tapers of the same names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    Flat,
    #[default]
    Hanning,
    Hamming,
    Bartlett,
    Blackman,
}

impl FromStr for WindowKind {
    type Err = SmoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(Self::Flat),
            "hanning" => Ok(Self::Hanning),
            "hamming" => Ok(Self::Hamming),
            "bartlett" => Ok(Self::Bartlett),
            "blackman" => Ok(Self::Blackman),
            other => Err(SmoothError::UnknownWindowKind(other.to_string())),
        }
    }
}

impl WindowKind {
    /// Window weights of length `len`, normalized to sum to 1.
    pub fn kernel(self, len: usize) -> Vec<f64> {
        if len < 3 {
            // the tapers vanish at the ends for len 2; use a uniform window
            return vec![1.0 / len.max(1) as f64; len];
        }
        let m = (len - 1) as f64;
        let mut w: Vec<f64> = (0..len)
            .map(|n| {
                let t = n as f64 / m;
                match self {
                    Self::Flat => 1.0,
                    Self::Hanning => 0.5 - 0.5 * (2.0 * PI * t).cos(),
                    Self::Hamming => 0.54 - 0.46 * (2.0 * PI * t).cos(),
                    Self::Bartlett => 1.0 - (2.0 * t - 1.0).abs(),
                    Self::Blackman => {
                        0.42 - 0.5 * (2.0 * PI * t).cos() + 0.08 * (4.0 * PI * t).cos()
                    }
                }
            })
            .collect();
        let sum: f64 = w.iter().sum();
        for v in &mut w {
            *v /= sum;
        }
        w
    }
}

/// Result of [`smooth`].
///
/// `values` lives in the padded coordinate system: it is
/// `input.len() + window_len - 1` samples long, with trim offsets of
/// `window_len / 2 - 1` at the front and `window_len / 2` at the back.
/// [`Smoothed::aligned`] applies both trims; note that for odd window
/// lengths the trimmed view is one sample longer than the input.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothed {
    pub values: Vec<f64>,
    pub trim_front: usize,
    pub trim_back: usize,
}

impl Smoothed {
    /// View of the smoothed samples with both trim offsets applied.
    pub fn aligned(&self) -> &[f64] {
        &self.values[self.trim_front..self.values.len() - self.trim_back]
    }
}

/// Smooth `signal` with a normalized window of the given kind and length.
///
/// With `window_len < 3` the input is returned unchanged (zero trims).
/// Fails if the signal is shorter than the window.
pub fn smooth(
    signal: &[f64],
    window_len: usize,
    kind: WindowKind,
) -> Result<Smoothed, SmoothError> {
    if signal.len() < window_len {
        return Err(SmoothError::InsufficientLength {
            len: signal.len(),
            window_len,
        });
    }
    if window_len < 3 {
        return Ok(Smoothed {
            values: signal.to_vec(),
            trim_front: 0,
            trim_back: 0,
        });
    }

    let n = signal.len();
    // Mirror padding, boundary sample excluded: window_len - 1 samples per side.
    let mut padded = Vec::with_capacity(n + 2 * (window_len - 1));
    padded.extend((1..window_len).rev().map(|i| signal[i]));
    padded.extend_from_slice(signal);
    padded.extend((n - window_len..=n - 2).rev().map(|i| signal[i]));

    let kernel = kind.kernel(window_len);
    let out_len = padded.len() - window_len + 1;
    let mut values = Vec::with_capacity(out_len);
    for k in 0..out_len {
        let mut acc = 0.0;
        for (j, &w) in kernel.iter().enumerate() {
            acc += w * padded[k + window_len - 1 - j];
        }
        values.push(acc);
    }

    Ok(Smoothed {
        values,
        trim_front: window_len / 2 - 1,
        trim_back: window_len / 2,
    })
}
