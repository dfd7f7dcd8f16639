//! A sprite subdivided into a grid of addressable tiles.

use super::{AtlasRegion, TextureData};
use crate::error::{CtmError, Result};
use serde::{Deserialize, Serialize};

/// Column and row of a tile inside a submap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: u32,
    pub row: u32,
}

impl TileCoord {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One sprite of the atlas viewed as `cols` x `rows` equally sized tiles.
///
/// The submap never touches pixel data; it only divides the sprite's UV
/// region. Tiles are addressed left-to-right, top-to-bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasSubmap {
    sprite: String,
    region: AtlasRegion,
    rows: u32,
    cols: u32,
}

impl AtlasSubmap {
    /// Create a submap covering the whole sprite image.
    pub fn new(sprite: impl Into<String>, rows: u32, cols: u32) -> Result<Self> {
        Self::with_region(sprite, AtlasRegion::FULL, rows, cols)
    }

    /// Create a submap over the part of a stitched atlas where the sprite lives.
    pub fn with_region(
        sprite: impl Into<String>,
        region: AtlasRegion,
        rows: u32,
        cols: u32,
    ) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(CtmError::InvalidGrid { rows, cols });
        }
        Ok(Self {
            sprite: sprite.into(),
            region,
            rows,
            cols,
        })
    }

    /// The backing sprite's location.
    pub fn sprite(&self) -> &str {
        &self.sprite
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The UV region of the whole sprite.
    pub fn region(&self) -> AtlasRegion {
        self.region
    }

    /// Check whether a coordinate addresses a tile of this grid.
    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.col < self.cols && coord.row < self.rows
    }

    /// Get the UV region of the tile at `(col, row)`.
    ///
    /// Panics if the coordinate is outside the grid: that means a connection
    /// method was paired with a submap of the wrong size.
    pub fn tile(&self, col: u32, row: u32) -> AtlasRegion {
        match self.get_tile(col, row) {
            Some(region) => region,
            None => panic!(
                "tile ({}, {}) outside {}x{} submap {}",
                col, row, self.cols, self.rows, self.sprite
            ),
        }
    }

    /// Get the UV region of a tile, or `None` outside the grid.
    pub fn get_tile(&self, col: u32, row: u32) -> Option<AtlasRegion> {
        if !self.contains(TileCoord::new(col, row)) {
            return None;
        }
        let tile_w = self.region.width() / self.cols as f32;
        let tile_h = self.region.height() / self.rows as f32;
        let u_min = self.region.u_min + col as f32 * tile_w;
        let v_min = self.region.v_min + row as f32 * tile_h;
        Some(AtlasRegion::new(u_min, v_min, u_min + tile_w, v_min + tile_h))
    }

    /// Get the UV region for a tile coordinate.
    pub fn tile_at(&self, coord: TileCoord) -> AtlasRegion {
        self.tile(coord.col, coord.row)
    }

    /// Copy the pixels of one tile out of the texture the region refers to.
    pub fn tile_pixels(&self, texture: &TextureData, coord: TileCoord) -> TextureData {
        let tile = self.tile_at(coord);
        let x0 = (tile.u_min * texture.width as f32).round() as u32;
        let y0 = (tile.v_min * texture.height as f32).round() as u32;
        let x1 = (tile.u_max * texture.width as f32).round() as u32;
        let y1 = (tile.v_max * texture.height as f32).round() as u32;
        texture.crop(x0, y0, x1 - x0, y1 - y0)
    }
}
