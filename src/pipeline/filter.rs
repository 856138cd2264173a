// In: src/pipeline/filter.rs

//! The deinterlacing filter: a pure, order-dependent transform over the row
//! stream with exactly one unit of retained state.
//!
//! The retained row is always the most recently *received* original, never the
//! blended output. Blending against the blended previous row would compound
//! the smoothing down the image; blending against the original keeps each
//! output row a function of exactly two source rows.

use crate::error::DelaceError;
use crate::types::{Row, Ycbcr};

/// Per-channel floor average. Widening to u16 keeps the sum exact; the
/// division truncates, matching the observed behavior of the transform this
/// reproduces (odd sums round down, never to nearest).
#[inline]
fn blend_channel(prev: u8, cur: u8) -> u8 {
    ((prev as u16 + cur as u16) / 2) as u8
}

/// Stateful scanline blender. Feed rows in raster order via [`apply`].
///
/// [`apply`]: DeinterlaceFilter::apply
#[derive(Debug, Default)]
pub struct DeinterlaceFilter {
    prev_original: Option<Row>,
}

impl DeinterlaceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the next original row and emits the transformed row.
    ///
    /// Row 0 passes through verbatim. Every later row is blended per pixel,
    /// per channel, against the retained pre-blend previous row. A row whose
    /// length differs from the first row's is a structural-contract violation:
    /// the decoder guarantees uniform widths, so a mismatch is a pipeline bug.
    pub fn apply(&mut self, row: Row) -> Result<Row, DelaceError> {
        let prev = match self.prev_original.take() {
            None => {
                self.prev_original = Some(row.clone());
                return Ok(row);
            }
            Some(prev) => prev,
        };

        if prev.len() != row.len() {
            return Err(DelaceError::StructuralViolation(format!(
                "row length changed mid-stream: expected {}, got {}",
                prev.len(),
                row.len()
            )));
        }

        let blended: Row = row
            .iter()
            .zip(prev.iter())
            .map(|(cur, prev)| Ycbcr {
                y: blend_channel(prev.y, cur.y),
                cb: blend_channel(prev.cb, cur.cb),
                cr: blend_channel(prev.cr, cur.cr),
            })
            .collect();

        // The unblended input becomes the new reference row.
        self.prev_original = Some(row);
        Ok(blended)
    }
}
