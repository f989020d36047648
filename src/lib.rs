#![doc = include_str!("../README.md")]

// Pipeline stages in execution order.
pub mod accumulate;
pub mod normalize;
pub mod histogram;
pub mod binarize;

// Supporting types and tooling.
pub mod image;
pub mod offsets;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::offsets::OffsetTable;
pub use crate::pipeline::{compute_ink_map, InkMapParams, InkMapReport, InkMapper};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use ink_mapper::prelude::*;
///
/// # fn main() {
/// let (w, h) = (16usize, 12usize);
/// let gy = vec![0u8; w * h];
/// let gx = vec![0u8; w * h];
/// let mut out = vec![0u8; w * h];
///
/// let mapper = InkMapper::new(
///     InkMapParams { margin_y: 1, margin_x: 1, threshold_percentile: 0.9 },
///     OffsetTable::new(1, 1, vec![0]),
///     OffsetTable::new(1, 1, vec![0]),
/// );
/// let gy_view = ImageU8 { w, h, stride: w, data: &gy };
/// let gx_view = ImageU8 { w, h, stride: w, data: &gx };
/// let report = mapper.process(gy_view, gx_view, &mut out);
/// assert!(!report.degraded);
/// assert!(out.iter().all(|&px| px == 0));
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{compute_ink_map, InkMapParams, InkMapReport, InkMapper, OffsetTable};
}
