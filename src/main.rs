use ink_mapper::image::ImageU8;
use ink_mapper::{InkMapParams, InkMapper, OffsetTable};

fn main() {
    // Demo stub: synthetic gradient pair with one bright vertical band
    let w = 400usize;
    let h = 300usize;
    let mut gy = vec![0u8; w * h];
    let gx = vec![0u8; w * h];
    for y in 0..h {
        for x in 180..220 {
            gy[y * w + x] = 180;
        }
    }

    // One angle per channel: 3 taps along x for gy, 3 taps along y for gx.
    let h_taps = vec![-1, 0, 1];
    let v_taps = vec![-(w as i32), 0, w as i32];
    let mapper = InkMapper::new(
        InkMapParams {
            margin_y: 1,
            margin_x: 1,
            threshold_percentile: 0.9,
        },
        OffsetTable::new(1, 3, h_taps),
        OffsetTable::new(1, 3, v_taps),
    );

    let gy_view = ImageU8 {
        w,
        h,
        stride: w,
        data: &gy,
    };
    let gx_view = ImageU8 {
        w,
        h,
        stride: w,
        data: &gx,
    };
    let mut out = vec![0u8; w * h];
    let report = mapper.process(gy_view, gx_view, &mut out);

    let ink_pixels = out.iter().filter(|&&px| px == 255).count();
    println!(
        "threshold={} global_max={} ink_pixels={} accumulate_ms={:.3}",
        report.threshold, report.global_max, ink_pixels, report.accumulate_ms
    );
}
