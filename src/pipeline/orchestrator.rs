// In: src/pipeline/orchestrator.rs

//! The top-level orchestrator for a single image-transform request.
//!
//! It acts as a pure coordinator: construct the decoder over the input
//! buffer, run the filter and frame accumulation inline inside row delivery,
//! then hand the completed frame to the encoder. One logical thread of
//! control per request; the first error in any stage aborts the request with
//! no partial output.

use crate::config::{DecodeConfig, EncodeConfig};
use crate::error::DelaceError;
use crate::pipeline::decoder::ScanlineDecoder;
use crate::pipeline::encoder::ScanlineEncoder;
use crate::pipeline::filter::DeinterlaceFilter;
use crate::types::Frame;

/// Deinterlaces one compressed JPEG buffer with default settings.
///
/// This is the crate's main entry point: compressed bytes in, compressed
/// bytes out, same dimensions, YCbCr representation, quality 100.
pub fn deinterlace(jpeg: &[u8]) -> Result<Vec<u8>, DelaceError> {
    deinterlace_with_config(jpeg, &DecodeConfig::default(), &EncodeConfig::default())
}

/// Deinterlaces one compressed JPEG buffer with explicit stage configs.
pub fn deinterlace_with_config(
    jpeg: &[u8],
    decode_config: &DecodeConfig,
    encode_config: &EncodeConfig,
) -> Result<Vec<u8>, DelaceError> {
    // 1. Construct the decoder over the (read-only) input buffer.
    let decoder = ScanlineDecoder::with_config(jpeg, *decode_config);

    // 2. Drain the row stream. Filtering and frame accumulation run inline
    //    inside the decoder's row delivery, so no row is ever decoded ahead
    //    of its filter/accumulate step.
    let mut filter = DeinterlaceFilter::new();
    let mut frame = Frame::new();
    decoder.read_rows(|row| {
        let blended = filter.apply(row)?;
        frame.push_row(blended)
    })?;

    log::debug!(
        "decode complete, re-encoding {}x{} blended frame",
        frame.width(),
        frame.height()
    );

    // 3. The frame is fully materialized; the encoder requires the complete
    //    rectangular grid up front, so there is no streaming encode.
    ScanlineEncoder::with_config(*encode_config).encode(&frame)
}
