//! Pixel sources: decoded images as seen by the extractor

use crate::error::PixelBufferError;

/// Read-only access to a decoded image.
///
/// The extractor only needs dimensions and per-pixel RGBA, so any decoder
/// can feed it without the core knowing about file formats.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> usize;
    /// Height in pixels.
    fn height(&self) -> usize;
    /// Bytes stored per pixel in the underlying data (3 or 4 for [`PixelBuffer`]).
    fn bytes_per_pixel(&self) -> usize;
    /// RGBA at `(x, y)`. Sources without alpha report 255.
    fn pixel(&self, x: usize, y: usize) -> [u8; 4];
}

/// Owned, row-major RGB or RGBA bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` image with `channels` bytes per pixel.
    ///
    /// # Errors
    ///
    /// - [`PixelBufferError::UnsupportedChannels`] unless `channels` is 3 or 4
    /// - [`PixelBufferError::LengthMismatch`] if `data` is not exactly
    ///   `width * height * channels` bytes
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, PixelBufferError> {
        if channels != 3 && channels != 4 {
            return Err(PixelBufferError::UnsupportedChannels(channels));
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(PixelBufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    #[inline]
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        Self::new(width, height, 4, data)
    }

    #[inline]
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self, PixelBufferError> {
        Self::new(width, height, 3, data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn bytes_per_pixel(&self) -> usize {
        self.channels
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the image.
    fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * self.channels;
        let px = &self.data[i..i + self.channels];
        [px[0], px[1], px[2], if self.channels == 4 { px[3] } else { 255 }]
    }
}

/// Nearest-neighbour view of a source whose longest side is at most
/// `max_dimension`. Smaller sources are passed through at full size.
pub(crate) struct Downsampled<'a, S: PixelSource + ?Sized> {
    source: &'a S,
    width: usize,
    height: usize,
}

impl<'a, S: PixelSource + ?Sized> Downsampled<'a, S> {
    pub(crate) fn new(source: &'a S, max_dimension: usize) -> Self {
        let (w, h) = (source.width(), source.height());
        let longest = w.max(h);
        if longest <= max_dimension || w == 0 || h == 0 {
            return Self {
                source,
                width: w,
                height: h,
            };
        }
        let scale = max_dimension as f64 / longest as f64;
        let fit = |n: usize| ((n as f64 * scale).round() as usize).max(1);
        Self {
            source,
            width: fit(w),
            height: fit(h),
        }
    }

    pub(crate) fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixels of the view.
    pub(crate) fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        let (src_w, src_h) = (self.source.width(), self.source.height());
        (0..self.height).flat_map(move |y| {
            let sy = y * src_h / self.height;
            (0..self.width).map(move |x| self.source.pixel(x * src_w / self.width, sy))
        })
    }
}
