//! This file is the root of the `delace` Rust crate.
//!
//! `delace` reduces visible interlacing artifacts in a JPEG still by blending
//! each scanline with its predecessor, then re-encoding the result at a fixed
//! high quality. The whole transform is a single-pass, byte-buffer-in /
//! byte-buffer-out pipeline; see [`deinterlace`] for the main entry point.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod config;
pub mod pipeline;
pub mod shim;
pub mod types;

mod error;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use config::{DecodeConfig, EncodeConfig};
pub use error::DelaceError;
pub use pipeline::orchestrator::{deinterlace, deinterlace_with_config};
