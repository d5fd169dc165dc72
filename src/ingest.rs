//! Image file ingestion
//!
//! Reads an uploaded file, checks size and format, and decodes it into an
//! owned RGB8 buffer the engine can borrow as a [`PixelBuffer`].

use std::path::Path;

use image::ImageFormat;
use tone_stats::PixelBuffer;

use crate::error::{AnalysisError, IngestError};

/// Largest accepted upload, in bytes
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Decoded image, RGB order, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl DecodedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow as a pixel buffer for analysis
    pub fn as_buffer(&self) -> Result<PixelBuffer<'_>, AnalysisError> {
        PixelBuffer::rgb(&self.samples, self.width, self.height)
            .map_err(|kind| AnalysisError::InvalidInput(kind.to_string()))
    }
}

/// Read and decode an image file
pub fn load_image(path: &Path) -> Result<DecodedImage, IngestError> {
    let size = std::fs::metadata(path)?.len();
    if size > MAX_UPLOAD_BYTES {
        return Err(IngestError::FileTooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }

    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), size, "Read image file");
    decode_image(&bytes)
}

/// Decode JPEG or PNG bytes; the format is sniffed from the content, not the file name
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, IngestError> {
    if bytes.len() as u64 > MAX_UPLOAD_BYTES {
        return Err(IngestError::FileTooLarge {
            size: bytes.len() as u64,
            max: MAX_UPLOAD_BYTES,
        });
    }

    let format = image::guess_format(bytes).map_err(|_| IngestError::UnsupportedFormat)?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(IngestError::UnsupportedFormat);
    }

    let rgb = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| IngestError::Decode(e.to_string()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(DecodedImage {
        width,
        height,
        samples: rgb.into_raw(),
    })
}
