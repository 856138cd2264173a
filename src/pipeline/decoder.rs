// In: src/pipeline/decoder.rs

//! The scanline decoder: wraps a compressed JPEG buffer and emits one row of
//! YCbCr pixel triples at a time through a caller-supplied handler.
//!
//! The output color representation is fixed before any row is produced. A
//! source that cannot be delivered as 3-component YCbCr (grayscale, CMYK)
//! fails fast as a structural precondition, not per row. Any failure aborts
//! the whole decode; no partial rows are ever delivered alongside an error.

use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::config::DecodeConfig;
use crate::error::DelaceError;
use crate::types::{Row, Ycbcr};

/// Progressive scanline access over one compressed input buffer.
///
/// The input buffer is borrowed read-only for the decoder's whole lifetime;
/// each produced `Row` is an owned value handed to the caller.
pub struct ScanlineDecoder<'a> {
    data: &'a [u8],
    config: DecodeConfig,
}

impl<'a> ScanlineDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_config(data, DecodeConfig::default())
    }

    pub fn with_config(data: &'a [u8], config: DecodeConfig) -> Self {
        Self { data, config }
    }

    /// Decodes the full bitstream and invokes `on_row` synchronously, in
    /// strictly increasing row order, exactly once per scanline.
    ///
    /// Returns `Ok` only after the image is fully drained. An error from the
    /// codec or from `on_row` aborts the whole decode.
    pub fn read_rows<F>(&self, mut on_row: F) -> Result<(), DelaceError>
    where
        F: FnMut(Row) -> Result<(), DelaceError>,
    {
        let options = DecoderOptions::default()
            .jpeg_set_out_colorspace(ColorSpace::YCbCr)
            .set_max_width(self.config.max_width)
            .set_max_height(self.config.max_height);
        let mut decoder = JpegDecoder::new_with_options(self.data, options);

        decoder
            .decode_headers()
            .map_err(|e| DelaceError::Format(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .ok_or_else(|| DelaceError::Format("header carries no dimensions".into()))?;
        if width == 0 || height == 0 {
            return Err(DelaceError::Format(format!(
                "degenerate image dimensions {}x{}",
                width, height
            )));
        }

        // Structural precondition: the source must carry exactly 3 components.
        // Checked before producing any row, so a grayscale or CMYK source
        // never reaches the filter.
        if let Some(input) = decoder.get_input_colorspace() {
            if input.num_components() != 3 {
                return Err(DelaceError::UnsupportedColorMode(format!(
                    "source colorspace {:?} has {} component(s)",
                    input,
                    input.num_components()
                )));
            }
        }

        log::debug!("decoding {}x{} JPEG to YCbCr scanlines", width, height);

        // zune-jpeg decodes the whole bitstream in one call; the per-row
        // handler contract is preserved by walking the interleaved output in
        // raster order.
        let pixels = decoder
            .decode()
            .map_err(|e| DelaceError::Format(e.to_string()))?;

        if decoder.get_output_colorspace() != Some(ColorSpace::YCbCr)
            || pixels.len() != width * height * 3
        {
            return Err(DelaceError::UnsupportedColorMode(
                "codec did not deliver 3-component YCbCr rows".into(),
            ));
        }

        for line in pixels.chunks_exact(width * 3) {
            let row: Row = bytemuck::cast_slice::<u8, Ycbcr>(line).to_vec();
            on_row(row)?;
        }

        Ok(())
    }

    /// Parses only the header and returns the image dimensions.
    pub fn dimensions(&self) -> Result<(usize, usize), DelaceError> {
        let mut decoder = JpegDecoder::new(self.data);
        decoder
            .decode_headers()
            .map_err(|e| DelaceError::Format(e.to_string()))?;
        decoder
            .dimensions()
            .ok_or_else(|| DelaceError::Format("header carries no dimensions".into()))
    }
}
