#![allow(clippy::excessive_precision)]

//! color-core: Color science for palette tools
//!
//! Pure, synchronous building blocks behind a color-design toolkit: model
//! conversion, palette generation, WCAG contrast evaluation, color-vision
//! deficiency simulation and dominant-color extraction. Nothing here does
//! I/O or keeps state between calls.
//!
//! # Quick Start
//!
//! ```
//! use color_core::{contrast_ratio, wcag_level, Rgb};
//!
//! let fg: Rgb = "#8B5CF6".parse().unwrap();
//! let bg = Rgb::WHITE;
//!
//! let ratio = contrast_ratio(fg, bg);
//! let level = wcag_level(ratio);
//! assert!(level.aa_large);
//! assert!(!level.aaa);
//! ```
//!
//! # Randomness
//!
//! Palette generation and k-means seeding take a [`rand::Rng`] argument.
//! Pass a seeded [`rand::rngs::StdRng`] for reproducible output:
//!
//! ```
//! use color_core::generate::{generate_smart_palette, Mood};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let a = generate_smart_palette(&mut StdRng::seed_from_u64(42), 5, Some(Mood::Ocean), &[]);
//! let b = generate_smart_palette(&mut StdRng::seed_from_u64(42), 5, Some(Mood::Ocean), &[]);
//! assert_eq!(a, b);
//! ```
//!
//! # Color Spaces
//!
//! | Space | Used For |
//! |-------|----------|
//! | **sRGB** ([`Rgb`]) | Interchange: hex strings, pixel buffers |
//! | **Linear RGB** ([`LinearRgb`]) | Relative luminance, dichromacy matrices |
//! | **Oklch** ([`Oklch`]) | Random and mood palettes |
//! | **HSL** ([`Hsl`]) | Harmonies, shades, mixing, adjustments |
//!
//! Luminance and the sRGB transfer curve are implemented once in
//! [`color`] and shared by contrast evaluation and the achromatopsia
//! simulation.
//!
//! # Failure Model
//!
//! Numeric operations are total and clamp their outputs. Only parsing
//! (hex strings, enum names) and pixel buffer construction return errors;
//! see [`ColorError`]. Degenerate requests fall back to well-defined
//! values: random palettes for unusable moods, black or white for
//! unreachable contrast targets, and gray ramps for images with too few
//! usable pixels.

pub mod color;
pub mod contrast;
pub mod error;
pub mod extract;
pub mod generate;
pub mod simulate;


pub use color::{
    is_valid_hex, normalize_hue, relative_luminance, Cmyk, Hsb, Hsl, Hwb, LinearRgb, Oklab, Oklch,
    ParseColorError, Rgb,
};
pub use contrast::{
    contrast_ratio, readable_text_color, suggest_accessible_color,
    suggest_nearest_accessible_color, wcag_level, WcagLevel,
};
pub use error::{ColorError, ParseVariantError, PixelBufferError};
pub use extract::{extract, extract_clusters, Cluster, ClusterOrder, ExtractOptions, PixelBuffer, PixelSource};
pub use generate::{Gradient, GradientStop, Harmony, Mood};
pub use simulate::{simulate_color_blind, simulate_palette, Deficiency};
