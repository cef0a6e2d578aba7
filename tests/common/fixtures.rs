//! Test fixtures: PNG and config files in temporary directories.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Brand colors used across the integration tests
pub mod colors {
    pub const VIOLET: [u8; 3] = [139, 92, 246];
    pub const EMERALD: [u8; 3] = [16, 185, 129];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
}

/// Write an 8-bit PNG with the given color type and raw pixel data.
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color: png::ColorType,
    data: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).expect("create png");
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
    path
}

/// RGBA image whose top `split` rows are `top` and the rest `bottom`.
pub fn two_tone_rgba(width: u32, height: u32, split: u32, top: [u8; 3], bottom: [u8; 3]) -> Vec<u8> {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let [r, g, b] = if y < split { top } else { bottom };
        for _ in 0..width {
            data.extend_from_slice(&[r, g, b, 255]);
        }
    }
    data
}

/// Write `yaml` to `chromakit.yaml` in a fresh temporary directory.
///
/// The directory is returned so it outlives the test body.
pub fn write_config(yaml: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("chromakit.yaml");
    std::fs::write(&path, yaml).expect("write config");
    (dir, path)
}
