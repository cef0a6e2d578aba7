//! PNG decoding into engine pixel buffers

use std::io::Read;
use std::path::Path;

use color_core::PixelBuffer;

use crate::error::CliError;

/// Decode a PNG stream into an RGB or RGBA [`PixelBuffer`].
///
/// Palette, low bit depth and 16-bit images are normalized to 8-bit
/// channels; grayscale is widened to RGB.
pub fn decode_png<R: Read>(reader: R) -> Result<PixelBuffer, CliError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let (width, height) = (info.width as usize, info.height as usize);
    match info.color_type {
        png::ColorType::Rgb => Ok(PixelBuffer::from_rgb(width, height, buf)?),
        png::ColorType::Rgba => Ok(PixelBuffer::from_rgba(width, height, buf)?),
        png::ColorType::Grayscale => {
            let rgb = buf.iter().flat_map(|&v| [v, v, v]).collect();
            Ok(PixelBuffer::from_rgb(width, height, rgb)?)
        }
        png::ColorType::GrayscaleAlpha => {
            let rgba = buf
                .chunks_exact(2)
                .flat_map(|px| [px[0], px[0], px[0], px[1]])
                .collect();
            Ok(PixelBuffer::from_rgba(width, height, rgba)?)
        }
        other => Err(CliError::UnsupportedPng(other)),
    }
}

/// Open and decode a PNG file.
pub fn load_png(path: &Path) -> Result<PixelBuffer, CliError> {
    let file = std::fs::File::open(path)?;
    let image = decode_png(std::io::BufReader::new(file))?;
    tracing::debug!(path = %path.display(), "Decoded PNG");
    Ok(image)
}
