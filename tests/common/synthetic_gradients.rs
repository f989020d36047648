use ink_mapper::OffsetTable;

/// Generates a cols×rows gradient image that is zero except for one hotspot.
pub fn hotspot_u8(cols: usize, rows: usize, x: usize, y: usize, value: u8) -> Vec<u8> {
    assert!(cols > 0 && rows > 0, "image dimensions must be positive");
    assert!(x < cols && y < rows, "hotspot must lie inside the image");

    let mut img = vec![0u8; cols * rows];
    img[y * cols + x] = value;
    img
}

/// Generates a cols×rows gradient image with a repeating intensity ramp.
pub fn ramp_u8(cols: usize, rows: usize) -> Vec<u8> {
    assert!(cols > 0 && rows > 0, "image dimensions must be positive");

    let mut img = vec![0u8; cols * rows];
    for y in 0..rows {
        for x in 0..cols {
            img[y * cols + x] = ((x * 7 + y * 13) % 256) as u8;
        }
    }
    img
}

/// Single-angle, single-tap table sampling the pixel itself.
pub fn identity_table() -> OffsetTable {
    OffsetTable::new(1, 1, vec![0])
}
