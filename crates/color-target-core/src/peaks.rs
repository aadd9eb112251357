//! Local extrema and dominant-peak extraction on 1-D signals.

/// Errors produced while extracting the dominant peak.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PeakError {
    /// The global maximum touches a data boundary with no local minimum
    /// on the other side (monotonic or otherwise degenerate signal).
    #[error("no bracketing local minimum around peak at index {argmax}")]
    NoBracketingMinimum { argmax: usize },
}

fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// Indices of the local minima and maxima of `signal`.
///
/// Extrema are detected from sign changes of the discrete second
/// difference. Index 0 and the last index are always included as minima
/// candidates so a peak touching either edge still resolves to a
/// bracketing bound.
pub fn local_extrema(signal: &[f64]) -> (Vec<usize>, Vec<usize>) {
    let mut minima = Vec::new();
    let mut maxima = Vec::new();
    if signal.is_empty() {
        return (minima, maxima);
    }

    minima.push(0);
    if signal.len() >= 3 {
        let diff_signs: Vec<i8> = signal.windows(2).map(|w| sign(w[1] - w[0])).collect();
        for (i, pair) in diff_signs.windows(2).enumerate() {
            match pair[1] - pair[0] {
                d if d > 0 => minima.push(i + 1),
                d if d < 0 => maxima.push(i + 1),
                _ => {}
            }
        }
    }
    minima.push(signal.len() - 1);

    (minima, maxima)
}

/// Indices of the local minima bracketing the global maximum of `signal`.
///
/// Ties in the maximum break toward the lowest index. Returns the
/// closest minimum strictly below the peak and the closest strictly
/// above it; fails when either side has none.
pub fn top_bell(signal: &[f64]) -> Result<(usize, usize), PeakError> {
    if signal.is_empty() {
        return Err(PeakError::NoBracketingMinimum { argmax: 0 });
    }
    let argmax = signal
        .iter()
        .enumerate()
        .fold(0usize, |best, (i, &v)| if v > signal[best] { i } else { best });

    let (minima, _) = local_extrema(signal);
    let below = minima.iter().copied().filter(|&i| i < argmax).max();
    let above = minima.iter().copied().filter(|&i| i > argmax).min();

    match (below, above) {
        (Some(lo), Some(hi)) => Ok((lo, hi)),
        _ => Err(PeakError::NoBracketingMinimum { argmax }),
    }
}
