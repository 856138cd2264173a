// In: src/types.rs

//! The core value types flowing through the pipeline: a pixel, a scanline,
//! and the accumulated frame.

use bytemuck::{Pod, Zeroable};

use crate::error::DelaceError;

/// One pixel in chroma-triple form: luma plus the two chroma differences,
/// one byte each, no subsampling at the row-buffer level.
///
/// `#[repr(C)]` with three `u8` fields has no padding, so a `&[Ycbcr]` row
/// casts to the interleaved `&[u8]` layout the encoder consumes without a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
#[repr(C)]
pub struct Ycbcr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

/// One scanline, in raster order. Length equals the image width.
pub type Row = Vec<Ycbcr>;

/// The complete pixel grid handed to the encoder: an ordered sequence of
/// equal-length rows, built incrementally as the decoder produces scanlines.
///
/// The first pushed row fixes the frame's width; any later row of a different
/// length is a structural-contract violation, because the decoder guarantees
/// uniform row lengths and a mismatch means a pipeline bug upstream.
#[derive(Debug, Default, Clone)]
pub struct Frame {
    rows: Vec<Row>,
}

impl Frame {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Appends a row, taking ownership. Enforces the rectangularity invariant.
    pub fn push_row(&mut self, row: Row) -> Result<(), DelaceError> {
        if let Some(first) = self.rows.first() {
            if row.len() != first.len() {
                return Err(DelaceError::StructuralViolation(format!(
                    "frame row {} has length {}, expected {}",
                    self.rows.len(),
                    row.len(),
                    first.len()
                )));
            }
        }
        self.rows.push(row);
        Ok(())
    }

    /// The image width, taken from the last row. Zero for an empty frame.
    pub fn width(&self) -> usize {
        self.rows.last().map_or(0, |row| row.len())
    }

    /// The image height: the number of accumulated rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Flattens the frame into one interleaved Y/Cb/Cr byte buffer in raster
    /// order, the shape the encoder's scanline writer expects.
    pub fn interleaved_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.width() * self.height() * 3);
        for row in &self.rows {
            bytes.extend_from_slice(bytemuck::cast_slice(row));
        }
        bytes
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn solid_row(width: usize, value: u8) -> Row {
        vec![
            Ycbcr {
                y: value,
                cb: value,
                cr: value
            };
            width
        ]
    }

    #[test]
    fn test_push_row_accepts_uniform_lengths() {
        let mut frame = Frame::new();
        frame.push_row(solid_row(4, 10)).unwrap();
        frame.push_row(solid_row(4, 20)).unwrap();

        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
    }

    #[test]
    fn test_push_row_rejects_length_mismatch() {
        let mut frame = Frame::new();
        frame.push_row(solid_row(4, 10)).unwrap();

        let result = frame.push_row(solid_row(3, 20));
        assert!(matches!(result, Err(DelaceError::StructuralViolation(_))));
        // The bad row must not have been appended.
        assert_eq!(frame.height(), 1);
    }

    #[test]
    fn test_interleaved_bytes_layout() {
        let mut frame = Frame::new();
        frame
            .push_row(vec![
                Ycbcr { y: 1, cb: 2, cr: 3 },
                Ycbcr { y: 4, cb: 5, cr: 6 },
            ])
            .unwrap();
        frame
            .push_row(vec![
                Ycbcr { y: 7, cb: 8, cr: 9 },
                Ycbcr {
                    y: 10,
                    cb: 11,
                    cr: 12,
                },
            ])
            .unwrap();

        assert_eq!(
            frame.interleaved_bytes(),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
        );
    }

    #[test]
    fn test_empty_frame_dimensions() {
        let frame = Frame::new();
        assert_eq!(frame.width(), 0);
        assert_eq!(frame.height(), 0);
        assert!(frame.is_empty());
        assert!(frame.interleaved_bytes().is_empty());
    }
}
