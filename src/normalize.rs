//! Channel combination, 8-bit normalization, and histogram construction.
//!
//! Pass 1 merges the two response channels with a per-pixel max, reusing the
//! first channel's storage in place, and tracks the global peak with a floor
//! of 1 so the divisor is never zero. Pass 2 rescales every pixel to
//! `[0, 255]` with truncating integer division and records the intensity
//! histogram in the same sweep, avoiding a third traversal of the grid.
use crate::histogram::IntensityHistogram;

/// Result of the combine/normalize pass.
pub struct NormalizeOutcome {
    /// Peak combined response, floored at 1.
    pub global_max: i32,
    /// Histogram over the normalized intensities written to the output.
    pub histogram: IntensityHistogram,
}

/// Combine `h_response`/`v_response` into `h_response` and write normalized
/// 8-bit intensities to `out`.
pub fn combine_and_normalize(
    h_response: &mut [i32],
    v_response: &[i32],
    out: &mut [u8],
) -> NormalizeOutcome {
    debug_assert_eq!(h_response.len(), v_response.len());
    debug_assert_eq!(h_response.len(), out.len());

    let mut global_max = 1i32;
    for (h, &v) in h_response.iter_mut().zip(v_response.iter()) {
        if v > *h {
            *h = v;
        }
        if *h > global_max {
            global_max = *h;
        }
    }

    // The product can exceed i32 for large responses, hence the i64 widening.
    let mut histogram = IntensityHistogram::new();
    for (&combined, px) in h_response.iter().zip(out.iter_mut()) {
        let normalized = (combined as i64 * 255 / global_max as i64).clamp(0, 255) as u8;
        *px = normalized;
        histogram.record(normalized);
    }

    NormalizeOutcome {
        global_max,
        histogram,
    }
}
