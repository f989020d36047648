//! Angle-indexed sampling tables encoding per-angle 1-D kernel geometry.
//!
//! Each tilt angle is represented by `kernel_length` signed pixel-linear
//! displacements. Adding a displacement to a pixel's linear index fetches one
//! sample of a 1-D kernel oriented at that angle, so the accumulation loop
//! stays orientation-agnostic and new angle sets need no code changes.

/// Flat `[angle][tap]` table of signed pixel-linear displacements.
///
/// The table only fixes its own shape. Keeping every displacement in bounds
/// for all pixels outside the configured margins is the caller's
/// responsibility; the hot loops do not re-check it.
#[derive(Clone, Debug)]
pub struct OffsetTable {
    num_angles: usize,
    kernel_length: usize,
    offsets: Vec<i32>,
}

impl OffsetTable {
    /// Wrap a flat displacement buffer of length `num_angles * kernel_length`.
    pub fn new(num_angles: usize, kernel_length: usize, offsets: Vec<i32>) -> Self {
        assert_eq!(
            offsets.len(),
            num_angles * kernel_length,
            "offset table must hold num_angles * kernel_length displacements"
        );
        OffsetTable {
            num_angles,
            kernel_length,
            offsets,
        }
    }

    /// Number of tilt angles covered by the table.
    #[inline]
    pub fn num_angles(&self) -> usize {
        self.num_angles
    }

    /// Taps per angle.
    #[inline]
    pub fn kernel_length(&self) -> usize {
        self.kernel_length
    }

    /// Displacements for one angle.
    #[inline]
    pub fn angle(&self, a: usize) -> &[i32] {
        let start = a * self.kernel_length;
        &self.offsets[start..start + self.kernel_length]
    }
}

#[cfg(test)]
mod tests {
    use super::OffsetTable;

    #[test]
    fn angle_slices_follow_table_shape() {
        let table = OffsetTable::new(2, 3, vec![-1, 0, 1, -10, 0, 10]);
        assert_eq!(table.num_angles(), 2);
        assert_eq!(table.kernel_length(), 3);
        assert_eq!(table.angle(0), &[-1, 0, 1]);
        assert_eq!(table.angle(1), &[-10, 0, 10]);
    }

    #[test]
    fn empty_table_is_allowed() {
        let table = OffsetTable::new(0, 21, Vec::new());
        assert_eq!(table.num_angles(), 0);
    }

    #[test]
    #[should_panic(expected = "num_angles * kernel_length")]
    fn mismatched_length_panics() {
        OffsetTable::new(2, 3, vec![0; 5]);
    }
}
