//! Rasterization of codewords into printable marker images.

use crate::codec;
use crate::error::{DictionaryError, Result};
use crate::Dictionary;

/// An 8-bit grayscale raster, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>, // row-major, len = width * height
}

impl Dictionary {
    /// Draw the rotation-0 grid of codeword `id` as a square raster.
    ///
    /// A set bit is drawn white (255), a clear bit black (0), and the grid is
    /// surrounded by a solid black border `border_bits` cells wide. Every
    /// logical cell maps to an equal square pixel block, so `side_pixels`
    /// must be a positive multiple of `marker_size + 2 * border_bits`.
    pub fn render(&self, id: u32, side_pixels: usize, border_bits: usize) -> Result<GrayImage> {
        let word = self.word(id)?;
        let cells = self.marker_size() + 2 * border_bits;
        if side_pixels == 0 || side_pixels % cells != 0 {
            return Err(DictionaryError::InvalidArgument(format!(
                "side_pixels {side_pixels} is not a positive multiple of {cells} cells"
            )));
        }
        let cell_px = side_pixels / cells;
        let grid = codec::unpack(&word.rotations[0], self.marker_size())?;

        let mut data = vec![0u8; side_pixels * side_pixels];
        for row in 0..self.marker_size() {
            for col in 0..self.marker_size() {
                if !grid.get(row, col) {
                    continue;
                }
                let y0 = (border_bits + row) * cell_px;
                let x0 = (border_bits + col) * cell_px;
                for y in y0..y0 + cell_px {
                    let line = &mut data[y * side_pixels + x0..y * side_pixels + x0 + cell_px];
                    line.fill(255);
                }
            }
        }
        Ok(GrayImage {
            width: side_pixels,
            height: side_pixels,
            data,
        })
    }
}
