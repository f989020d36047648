//! In-place binary thresholding of the normalized map.

/// Value written for ink/edge pixels.
pub const INK: u8 = 255;

/// Map every pixel to [`INK`] or 0 using a strict greater-than test.
///
/// Pixels exactly at `threshold` are classified as background.
pub fn apply_binary_threshold(normalized: &mut [u8], threshold: u8) {
    for px in normalized.iter_mut() {
        *px = if *px > threshold { INK } else { 0 };
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_binary_threshold, INK};

    #[test]
    fn strictly_above_threshold_becomes_ink() {
        let mut buf = vec![0u8, 99, 100, 101, 255];
        apply_binary_threshold(&mut buf, 100);
        assert_eq!(buf, vec![0, 0, 0, INK, INK]);
    }

    #[test]
    fn threshold_255_suppresses_everything() {
        let mut buf = vec![0u8, 128, 255];
        apply_binary_threshold(&mut buf, 255);
        assert_eq!(buf, vec![0, 0, 0]);
    }

    #[test]
    fn threshold_zero_keeps_any_nonzero_pixel() {
        let mut buf = vec![0u8, 1, 254];
        apply_binary_threshold(&mut buf, 0);
        assert_eq!(buf, vec![0, INK, INK]);
    }
}
