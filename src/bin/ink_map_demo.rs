use ink_mapper::image::io::{load_grayscale_image, save_grayscale_u8, write_json_file};
use ink_mapper::image::ImageU8;
use ink_mapper::{InkMapParams, InkMapper, OffsetTable};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct InkMapToolConfig {
    /// Precomputed |Gy| gradient-magnitude image.
    pub gradient_y: PathBuf,
    /// Precomputed |Gx| gradient-magnitude image.
    pub gradient_x: PathBuf,
    #[serde(default)]
    pub params: InkMapParams,
    pub offsets: OffsetTableConfig,
    pub output: InkMapOutputConfig,
}

/// Offset tables carried as data so angle sets stay a caller concern.
#[derive(Debug, Deserialize)]
pub struct OffsetTableConfig {
    pub num_angles: usize,
    pub kernel_length: usize,
    pub h_offsets: Vec<i32>,
    pub v_offsets: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct InkMapOutputConfig {
    pub binary_image: PathBuf,
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<InkMapToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gy = load_grayscale_image(&config.gradient_y)?;
    let gx = load_grayscale_image(&config.gradient_x)?;
    if gy.width() != gx.width() || gy.height() != gx.height() {
        return Err(format!(
            "Gradient images disagree on size: {}x{} vs {}x{}",
            gy.width(),
            gy.height(),
            gx.width(),
            gx.height()
        ));
    }

    let OffsetTableConfig {
        num_angles,
        kernel_length,
        h_offsets,
        v_offsets,
    } = config.offsets;
    let mapper = InkMapper::new(
        config.params.clone(),
        OffsetTable::new(num_angles, kernel_length, h_offsets),
        OffsetTable::new(num_angles, kernel_length, v_offsets),
    );

    let (width, height) = (gy.width(), gy.height());
    let mut out = vec![0u8; width * height];
    let report = mapper.process(gy.as_view(), gx.as_view(), &mut out);
    let ink_pixels = out.iter().filter(|&&px| px == 255).count();

    let summary = InkMapSummary {
        width,
        height,
        num_angles,
        kernel_length,
        threshold: report.threshold,
        global_max: report.global_max,
        degraded: report.degraded,
        ink_pixels,
        accumulate_ms: report.accumulate_ms,
        normalize_ms: report.normalize_ms,
        binarize_ms: report.binarize_ms,
    };

    let out_view = ImageU8 {
        w: width,
        h: height,
        stride: width,
        data: &out,
    };
    save_grayscale_u8(out_view, &config.output.binary_image)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved binary ink map to {} ({} ink pixels, threshold {})",
        config.output.binary_image.display(),
        ink_pixels,
        report.threshold
    );
    println!("Saved summary to {}", config.output.summary_json.display());

    Ok(())
}

fn usage() -> String {
    "Usage: ink_map_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InkMapSummary {
    width: usize,
    height: usize,
    num_angles: usize,
    kernel_length: usize,
    threshold: u8,
    global_max: i32,
    degraded: bool,
    ink_pixels: usize,
    accumulate_ms: f64,
    normalize_ms: f64,
    binarize_ms: f64,
}
