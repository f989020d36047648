//! Directional response accumulation across tilt angles.
//!
//! For every angle the stage convolves two 1-D sampling patterns over each
//! interior pixel and keeps a running per-pixel maximum across angles,
//! separately for the two gradient channels. Angle geometry is pre-baked into
//! the offset tables, so the same tight loop runs for every angle instead of
//! rotating the image.
//!
//! Pixels inside the margins are never visited and keep their initial value.
//! With the `rayon` feature the per-angle row loop runs in parallel; each row
//! writes a disjoint slice of both response buffers, so results are identical
//! to the scalar path.
use crate::offsets::OffsetTable;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Accumulate per-pixel maximum directional responses into `h_response` and
/// `v_response`.
///
/// `gy` feeds the horizontal-edge channel through `h_offsets`; `gx` feeds the
/// vertical-edge channel through `v_offsets`. Both response buffers are
/// updated with `max(existing, tap_sum)` per pixel, so callers pass them
/// zero-initialized. Samples are widened to `i32` before summing, which keeps
/// the sum exact for kernels up to tens of taps at 8-bit depth.
pub fn accumulate_responses(
    gy: &[u8],
    gx: &[u8],
    rows: usize,
    cols: usize,
    h_offsets: &OffsetTable,
    v_offsets: &OffsetTable,
    margin_y: usize,
    margin_x: usize,
    h_response: &mut [i32],
    v_response: &mut [i32],
) {
    debug_assert_eq!(gy.len(), rows * cols);
    debug_assert_eq!(gx.len(), rows * cols);
    debug_assert_eq!(h_response.len(), rows * cols);
    debug_assert_eq!(v_response.len(), rows * cols);
    debug_assert_eq!(h_offsets.num_angles(), v_offsets.num_angles());
    debug_assert_eq!(h_offsets.kernel_length(), v_offsets.kernel_length());

    let y_end = rows.saturating_sub(margin_y);
    let x_end = cols.saturating_sub(margin_x);
    if margin_y >= y_end || margin_x >= x_end {
        // Margins swallow the whole image; nothing to visit.
        return;
    }

    for a in 0..h_offsets.num_angles() {
        accumulate_angle(
            gy,
            gx,
            cols,
            margin_y,
            y_end,
            margin_x,
            x_end,
            h_offsets.angle(a),
            v_offsets.angle(a),
            h_response,
            v_response,
        );
    }
}

#[cfg(not(feature = "rayon"))]
#[allow(clippy::too_many_arguments)]
fn accumulate_angle(
    gy: &[u8],
    gx: &[u8],
    cols: usize,
    y_start: usize,
    y_end: usize,
    x_start: usize,
    x_end: usize,
    h_off: &[i32],
    v_off: &[i32],
    h_response: &mut [i32],
    v_response: &mut [i32],
) {
    for y in y_start..y_end {
        let row_base = y * cols;
        let h_row = &mut h_response[row_base..row_base + cols];
        let v_row = &mut v_response[row_base..row_base + cols];
        accumulate_row(gy, gx, row_base, x_start, x_end, h_off, v_off, h_row, v_row);
    }
}

#[cfg(feature = "rayon")]
#[allow(clippy::too_many_arguments)]
fn accumulate_angle(
    gy: &[u8],
    gx: &[u8],
    cols: usize,
    y_start: usize,
    y_end: usize,
    x_start: usize,
    x_end: usize,
    h_off: &[i32],
    v_off: &[i32],
    h_response: &mut [i32],
    v_response: &mut [i32],
) {
    h_response
        .par_chunks_exact_mut(cols)
        .zip(v_response.par_chunks_exact_mut(cols))
        .enumerate()
        .for_each(|(y, (h_row, v_row))| {
            if y < y_start || y >= y_end {
                return;
            }
            let row_base = y * cols;
            accumulate_row(gy, gx, row_base, x_start, x_end, h_off, v_off, h_row, v_row);
        });
}

/// Tap sums for one image row; `h_row`/`v_row` are the row slices of the
/// response buffers, indexed by `x`.
#[inline]
#[allow(clippy::too_many_arguments)]
fn accumulate_row(
    gy: &[u8],
    gx: &[u8],
    row_base: usize,
    x_start: usize,
    x_end: usize,
    h_off: &[i32],
    v_off: &[i32],
    h_row: &mut [i32],
    v_row: &mut [i32],
) {
    for x in x_start..x_end {
        let base = (row_base + x) as isize;
        let mut sum_h = 0i32;
        let mut sum_v = 0i32;
        for (&dh, &dv) in h_off.iter().zip(v_off.iter()) {
            sum_h += gy[(base + dh as isize) as usize] as i32;
            sum_v += gx[(base + dv as isize) as usize] as i32;
        }
        if sum_h > h_row[x] {
            h_row[x] = sum_h;
        }
        if sum_v > v_row[x] {
            v_row[x] = sum_v;
        }
    }
}
