//! The 47-tile blob layout.
//!
//! Tiles are laid out 8 wide and 6 tall in ascending order of their folded
//! mask. Slot 47, the last tile of the bottom row, is never addressed.

use super::mask::AdjacencyMask;

pub const BLOB_COLS: u32 = 8;
pub const BLOB_ROWS: u32 = 6;

/// Every mask that survives the corner-implies-edge fold, in tile order.
///
/// Bits: 0x01 top, 0x02 top-right, 0x04 right, 0x08 bottom-right,
/// 0x10 bottom, 0x20 bottom-left, 0x40 left, 0x80 top-left.
pub const BLOB_MASKS: [u8; 47] = [
    0x00, 0x01, 0x04, 0x05, 0x07, 0x10, 0x11, 0x14, //
    0x15, 0x17, 0x1C, 0x1D, 0x1F, 0x40, 0x41, 0x44, //
    0x45, 0x47, 0x50, 0x51, 0x54, 0x55, 0x57, 0x5C, //
    0x5D, 0x5F, 0x70, 0x71, 0x74, 0x75, 0x77, 0x7C, //
    0x7D, 0x7F, 0xC1, 0xC5, 0xC7, 0xD1, 0xD5, 0xD7, //
    0xDD, 0xDF, 0xF1, 0xF5, 0xF7, 0xFD, 0xFF,
];

/// Tile index for every raw mask, built at compile time from [`BLOB_MASKS`].
pub static BLOB_INDEX: [u8; 256] = build_index();

const fn build_index() -> [u8; 256] {
    let mut index = [0u8; 256];
    let mut raw = 0;
    while raw < 256 {
        let folded = AdjacencyMask::from_bits(raw as u8).fold().bits();
        let mut i = 0;
        while i < BLOB_MASKS.len() {
            if BLOB_MASKS[i] == folded {
                index[raw] = i as u8;
            }
            i += 1;
        }
        raw += 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exactly_the_folded_masks() {
        let folded: Vec<u8> = (0..=255u8)
            .filter(|&b| AdjacencyMask::from_bits(b).is_folded())
            .collect();
        assert_eq!(folded, BLOB_MASKS.to_vec());
    }

    #[test]
    fn test_table_fits_grid_with_one_spare() {
        assert_eq!(BLOB_MASKS.len() as u32 + 1, BLOB_COLS * BLOB_ROWS);
    }

    #[test]
    fn test_index_points_back_to_folded_mask() {
        for raw in 0..=255u8 {
            let tile = BLOB_INDEX[raw as usize] as usize;
            assert_eq!(BLOB_MASKS[tile], AdjacencyMask::from_bits(raw).fold().bits());
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(BLOB_INDEX[0x00], 0);
        assert_eq!(BLOB_INDEX[0xFF], 46);
        assert_eq!(BLOB_INDEX[0x55], 21);
    }
}
