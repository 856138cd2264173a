// In: src/pipeline/mod.rs

//! The scanline-streaming pipeline: decoder, filter, encoder, and the
//! orchestrator that wires them together for one request.

pub mod decoder;
pub mod encoder;
pub mod filter;
pub mod orchestrator;
