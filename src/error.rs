// In: src/error.rs

//! This module defines the single, unified error type for the entire delace library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelaceError {
    // =========================================================================
    // === Input-Caused Errors (bad bytes or bad source material)
    // =========================================================================
    /// The compressed buffer's header is unreadable or is not a recognized
    /// JPEG bitstream.
    #[error("Cannot read JPEG header: {0}")]
    Format(String),

    /// The source cannot be delivered as 3-component YCbCr scanlines
    /// (e.g. a grayscale-only or CMYK source).
    #[error("Unsupported color mode, expected a 3-component YCbCr source: {0}")]
    UnsupportedColorMode(String),

    /// The encoder rejected the output parameters or failed to produce a buffer.
    #[error("JPEG encoding failed: {0}")]
    Encode(String),

    // =========================================================================
    // === Structural-Contract Violations (pipeline bugs, not bad input)
    // =========================================================================
    /// An internal invariant was broken, such as a non-rectangular frame or a
    /// row-length mismatch between stages.
    #[error("Structural contract violation (this is a bug): {0}")]
    StructuralViolation(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// The input path does not resolve to an existing file. Surfaced by the
    /// file shim before the core pipeline ever runs.
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

// The encoder's error type covers both parameter rejection and sink failures;
// all of them terminate the request the same way.
impl From<jpeg_encoder::EncodingError> for DelaceError {
    fn from(err: jpeg_encoder::EncodingError) -> Self {
        DelaceError::Encode(err.to_string())
    }
}
