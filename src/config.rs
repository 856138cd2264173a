// In: src/config.rs

//! Configuration values for the two codec-facing stages of the pipeline.
//!
//! The decode side and the encode side each get their own independent,
//! non-aliased value. Nothing here is shared mutable state: each stage is
//! handed its own config at construction and never touches the other side's
//! settings.

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Decode-Side Configuration
//==================================================================================

/// Settings applied when opening a compressed buffer for scanline decoding.
///
/// The output color representation is not configurable: the pipeline always
/// decodes to 3-component YCbCr rows with no subsampling at the row-buffer
/// level. The only knobs are guard rails against absurd header dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DecodeConfig {
    /// The widest image the decoder will accept, in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_width: usize,

    /// The tallest image the decoder will accept, in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_height: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_dimension(),
            max_height: default_max_dimension(),
        }
    }
}

/// Helper for `serde` to default the dimension guard rails.
/// JPEG dimensions are 16-bit, so this is the codec's own ceiling.
fn default_max_dimension() -> usize {
    1 << 16
}

//==================================================================================
// II. Encode-Side Configuration
//==================================================================================

/// Settings applied when re-encoding the blended frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct EncodeConfig {
    /// JPEG quality on the codec's 1-100 scale. The pipeline's contract is a
    /// fixed high quality, so the default is the scale's maximum.
    #[serde(default = "default_quality")]
    pub quality: u8,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
        }
    }
}

/// Helper for `serde` to default the encode quality.
fn default_quality() -> u8 {
    100
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_independent_values() {
        let decode = DecodeConfig::default();
        let encode = EncodeConfig::default();

        assert_eq!(decode.max_width, 1 << 16);
        assert_eq!(decode.max_height, 1 << 16);
        assert_eq!(encode.quality, 100);
    }
}
