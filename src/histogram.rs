//! Fixed 256-bin intensity histogram with percentile threshold selection.

/// Number of intensity bins, one per 8-bit level.
pub const NUM_BINS: usize = 256;

/// Count table over normalized 8-bit intensities.
#[derive(Clone, Debug)]
pub struct IntensityHistogram {
    counts: [u32; NUM_BINS],
}

impl Default for IntensityHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl IntensityHistogram {
    pub fn new() -> Self {
        IntensityHistogram {
            counts: [0; NUM_BINS],
        }
    }

    /// Count one pixel at the given intensity.
    #[inline]
    pub fn record(&mut self, value: u8) {
        self.counts[value as usize] += 1;
    }

    #[cfg(test)]
    pub(crate) fn count(&self, bin: u8) -> u32 {
        self.counts[bin as usize]
    }

    /// Inverse-CDF lookup: the smallest intensity level such that at least
    /// `percentile` of `total_pixels` fall at or below it.
    ///
    /// `target = floor(total_pixels * percentile)` is computed in `f64`, so
    /// `percentile = 1.0` is exact for any realistic pixel count and the
    /// cumulative walk reaches it at the last populated bin. The fallback of
    /// 255 (nothing passes a later strict-`>` test) therefore triggers only
    /// when the target exceeds the recorded total, i.e. `percentile > 1`.
    pub fn percentile_threshold(&self, total_pixels: usize, percentile: f32) -> u8 {
        let target = (total_pixels as f64 * percentile as f64) as u64;
        let mut cum_sum = 0u64;
        for (bin, &count) in self.counts.iter().enumerate() {
            cum_sum += count as u64;
            if cum_sum >= target {
                return bin as u8;
            }
        }
        255
    }
}
