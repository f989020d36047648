//! Ink-map pipeline driving the four stages end-to-end.
//!
//! The [`InkMapper`] exposes a simple API: feed two gradient-magnitude views
//! and a pre-allocated output buffer, and get the binary ink map plus a small
//! report with the selected threshold and per-stage timings.
//!
//! Typical usage:
//! ```no_run
//! use ink_mapper::image::ImageU8;
//! use ink_mapper::{InkMapParams, InkMapper, OffsetTable};
//!
//! # fn example(gy: ImageU8, gx: ImageU8, taps: Vec<i32>) {
//! let mapper = InkMapper::new(
//!     InkMapParams::default(),
//!     OffsetTable::new(5, 21, taps.clone()),
//!     OffsetTable::new(5, 21, taps),
//! );
//! let mut out = vec![0u8; gy.w * gy.h];
//! let report = mapper.process(gy.clone(), gx, &mut out);
//! println!("threshold={} in {:.3} ms", report.threshold, report.accumulate_ms);
//! # }
//! ```
//!
//! The call either completes with a full binary image or, if the two working
//! buffers cannot be allocated, returns normally with the output zero-filled.
//! Callers rely on the all-zero degradation signal, so the failure is never
//! upgraded to a panic or an error value.
use crate::accumulate::accumulate_responses;
use crate::binarize::apply_binary_threshold;
use crate::image::{ImageU8, ImageView};
use crate::normalize::combine_and_normalize;
use crate::offsets::OffsetTable;
use log::debug;
use serde::Deserialize;
use std::time::Instant;

/// Parameters shared by every invocation of the pipeline.
///
/// Margins must be wide enough that every table displacement stays in bounds
/// for all visited pixels; the kernel does not re-check this. The defaults
/// match the canonical 21-tap, 90th-percentile configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct InkMapParams {
    /// Rows skipped at the top and bottom of the image.
    pub margin_y: usize,
    /// Columns skipped at the left and right of the image.
    pub margin_x: usize,
    /// Fraction of pixels that should fall at or below the binarization
    /// threshold, expected in `[0, 1]`.
    pub threshold_percentile: f32,
}

impl Default for InkMapParams {
    fn default() -> Self {
        Self {
            margin_y: 10,
            margin_x: 10,
            threshold_percentile: 0.90,
        }
    }
}

/// Diagnostics for one pipeline invocation.
///
/// The binary output buffer remains the contractual result; the report only
/// describes how it was produced.
#[derive(Clone, Debug)]
pub struct InkMapReport {
    /// Selected binarization threshold (0 when degraded).
    pub threshold: u8,
    /// Peak combined response, floored at 1 (0 when degraded).
    pub global_max: i32,
    /// True when working storage was unavailable and the output was zeroed.
    pub degraded: bool,
    /// Time spent accumulating directional responses (milliseconds).
    pub accumulate_ms: f64,
    /// Time spent combining, normalizing, and building the histogram.
    pub normalize_ms: f64,
    /// Time spent on threshold selection and binarization.
    pub binarize_ms: f64,
}

/// One-shot ink-map extractor bundling parameters with the two offset tables.
///
/// The struct holds no mutable state: `process` is reentrant and concurrent
/// invocations over disjoint buffers are safe.
pub struct InkMapper {
    params: InkMapParams,
    h_offsets: OffsetTable,
    v_offsets: OffsetTable,
}

impl InkMapper {
    /// Create a mapper from parameters and the per-channel offset tables.
    ///
    /// Both tables must describe the same angle set and kernel length.
    pub fn new(params: InkMapParams, h_offsets: OffsetTable, v_offsets: OffsetTable) -> Self {
        assert_eq!(
            h_offsets.num_angles(),
            v_offsets.num_angles(),
            "offset tables must cover the same angles"
        );
        assert_eq!(
            h_offsets.kernel_length(),
            v_offsets.kernel_length(),
            "offset tables must use the same kernel length"
        );
        Self {
            params,
            h_offsets,
            v_offsets,
        }
    }

    pub fn params(&self) -> &InkMapParams {
        &self.params
    }

    /// Run the pipeline over two gradient views, writing the binary map into
    /// `out` (`rows * cols` bytes, caller-allocated).
    pub fn process(&self, gy: ImageU8, gx: ImageU8, out: &mut [u8]) -> InkMapReport {
        let gy_data = gy.as_slice().expect("gradient images must be contiguous");
        let gx_data = gx.as_slice().expect("gradient images must be contiguous");
        compute_ink_map(
            gy_data,
            gx_data,
            gy.h,
            gy.w,
            &self.h_offsets,
            &self.v_offsets,
            self.params.margin_y,
            self.params.margin_x,
            self.params.threshold_percentile,
            out,
        )
    }
}

/// Raw-slice entry point: accumulate, normalize, select a threshold, and
/// binarize into `out`.
///
/// `gy`/`gx` are row-major `rows * cols` gradient-magnitude buffers. On
/// working-storage exhaustion the output is fully zeroed and the call still
/// returns a (degraded) report; no other buffer is modified.
#[allow(clippy::too_many_arguments)]
pub fn compute_ink_map(
    gy: &[u8],
    gx: &[u8],
    rows: usize,
    cols: usize,
    h_offsets: &OffsetTable,
    v_offsets: &OffsetTable,
    margin_y: usize,
    margin_x: usize,
    threshold_percentile: f32,
    out: &mut [u8],
) -> InkMapReport {
    let total_pixels = rows * cols;
    debug_assert_eq!(gy.len(), total_pixels);
    debug_assert_eq!(gx.len(), total_pixels);
    debug_assert_eq!(out.len(), total_pixels);

    debug!(
        "compute_ink_map start rows={} cols={} angles={} taps={} percentile={:.2}",
        rows,
        cols,
        h_offsets.num_angles(),
        h_offsets.kernel_length(),
        threshold_percentile
    );

    let (mut h_response, mut v_response) =
        match (try_zeroed_i32(total_pixels), try_zeroed_i32(total_pixels)) {
            (Some(h), Some(v)) => (h, v),
            _ => {
                debug!("compute_ink_map degraded: working storage unavailable, zeroing output");
                out.fill(0);
                return InkMapReport {
                    threshold: 0,
                    global_max: 0,
                    degraded: true,
                    accumulate_ms: 0.0,
                    normalize_ms: 0.0,
                    binarize_ms: 0.0,
                };
            }
        };

    let acc_start = Instant::now();
    accumulate_responses(
        gy,
        gx,
        rows,
        cols,
        h_offsets,
        v_offsets,
        margin_y,
        margin_x,
        &mut h_response,
        &mut v_response,
    );
    let accumulate_ms = acc_start.elapsed().as_secs_f64() * 1000.0;

    let norm_start = Instant::now();
    let outcome = combine_and_normalize(&mut h_response, &v_response, out);
    let normalize_ms = norm_start.elapsed().as_secs_f64() * 1000.0;

    let bin_start = Instant::now();
    let threshold = outcome
        .histogram
        .percentile_threshold(total_pixels, threshold_percentile);
    apply_binary_threshold(out, threshold);
    let binarize_ms = bin_start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "compute_ink_map done threshold={} global_max={}",
        threshold, outcome.global_max
    );

    InkMapReport {
        threshold,
        global_max: outcome.global_max,
        degraded: false,
        accumulate_ms,
        normalize_ms,
        binarize_ms,
    }
}

/// Fallible zero-initialized working buffer.
///
/// `None` feeds the all-zero degradation contract instead of aborting, so the
/// caller keeps a defined output even under memory pressure.
fn try_zeroed_i32(len: usize) -> Option<Vec<i32>> {
    let mut buf: Vec<i32> = Vec::new();
    buf.try_reserve_exact(len).ok()?;
    buf.resize(len, 0);
    Some(buf)
}
