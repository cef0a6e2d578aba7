use std::env;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// WCAG 2.x gamma decode: sRGB to linear.
///
/// WCAG quotes 0.03928 as the breakpoint where IEC 61966-2-1 uses 0.04045.
/// No 8-bit value falls between the two (10/255 = 0.0392, 11/255 = 0.0431),
/// so the table is identical under either constant.
fn srgb_to_linear_exact(srgb: f64) -> f64 {
    if srgb <= 0.03928 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("gamma_lut.rs");
    let mut file = File::create(&dest_path).unwrap();

    // One entry per 8-bit channel value
    writeln!(file, "/// Lookup table for 8-bit sRGB to linear conversion").unwrap();
    writeln!(file, "/// Index: 8-bit channel value, Value: linear value").unwrap();
    writeln!(file, "pub static SRGB8_TO_LINEAR: [f64; 256] = [").unwrap();
    for i in 0..256 {
        let srgb = i as f64 / 255.0;
        let linear = srgb_to_linear_exact(srgb);
        if i > 0 && i % 4 == 0 {
            writeln!(file).unwrap();
        }
        write!(file, "    {:e},", linear).unwrap();
    }
    writeln!(file, "\n];").unwrap();

    println!("cargo::rerun-if-changed=build.rs");
}
