// In: src/pipeline/encoder.rs

//! The scanline encoder: turns a complete, rectangular YCbCr frame back into
//! a compressed JPEG buffer at a fixed high quality.
//!
//! The frame is consumed as-is: pixels are already in the codec's YCbCr
//! layout, so encoding performs no color transform, and 1x1 sampling keeps
//! the output's chroma resolution equal to the decoded representation.

use jpeg_encoder::{ColorType, Encoder, SamplingFactor};

use crate::config::EncodeConfig;
use crate::error::DelaceError;
use crate::types::Frame;

pub struct ScanlineEncoder {
    config: EncodeConfig,
}

impl ScanlineEncoder {
    pub fn new() -> Self {
        Self::with_config(EncodeConfig::default())
    }

    pub fn with_config(config: EncodeConfig) -> Self {
        Self { config }
    }

    /// Encodes the frame into a freshly allocated JPEG buffer.
    ///
    /// Width is taken from the last row, height from the row count, so the
    /// precondition is a non-empty rectangular frame; anything else is a
    /// structural-contract violation. Codec-level rejection (dimensions
    /// beyond the 16-bit header fields, sink failure) surfaces as `Encode`.
    pub fn encode(&self, frame: &Frame) -> Result<Vec<u8>, DelaceError> {
        let width = frame.width();
        let height = frame.height();
        if width == 0 || height == 0 {
            return Err(DelaceError::StructuralViolation(format!(
                "refusing to encode a degenerate {}x{} frame",
                width, height
            )));
        }
        if frame.rows().iter().any(|row| row.len() != width) {
            return Err(DelaceError::StructuralViolation(
                "refusing to encode a non-rectangular frame".into(),
            ));
        }
        if width > u16::MAX as usize || height > u16::MAX as usize {
            return Err(DelaceError::Encode(format!(
                "{}x{} exceeds the codec's 16-bit dimension fields",
                width, height
            )));
        }

        log::debug!(
            "encoding {}x{} frame at quality {}",
            width,
            height,
            self.config.quality
        );

        let mut output = Vec::new();
        let mut encoder = Encoder::new(&mut output, self.config.quality.clamp(1, 100));
        encoder.set_sampling_factor(SamplingFactor::F_1_1);
        encoder.encode(
            &frame.interleaved_bytes(),
            width as u16,
            height as u16,
            ColorType::Ycbcr,
        )?;

        Ok(output)
    }
}

impl Default for ScanlineEncoder {
    fn default() -> Self {
        Self::new()
    }
}
