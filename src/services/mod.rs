pub mod png_source;

pub use png_source::{decode_png, load_png};
