//! A connected texture: one submap drawn with one connection method.

use super::adjacency::AdjacencyMapper;
use super::mask::AdjacencyMask;
use super::method::ConnectionMethod;
use super::predicate::ConnectionPredicate;
use crate::atlas::{AtlasRegion, AtlasSubmap, TileCoord, TileTransform};
use crate::error::{CtmError, Result};
use crate::types::{BlockPosition, Facing, WorldQuery};

/// The outcome of resolving one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedTile {
    /// The adjacency mask the tile was picked from.
    pub mask: AdjacencyMask,
    /// The tile inside the submap.
    pub coord: TileCoord,
    /// The tile's UV region in the atlas.
    pub region: AtlasRegion,
    /// Orientation to apply when mapping the tile onto the face quad.
    pub transform: TileTransform,
}

impl ResolvedTile {
    /// Corner UVs for the face quad: top-left, top-right, bottom-right, bottom-left.
    pub fn uvs(&self) -> [[f32; 2]; 4] {
        self.region.transformed_corners(self.transform)
    }
}

/// Everything needed to pick a tile for a face at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct CtmTexture {
    submap: AtlasSubmap,
    method: ConnectionMethod,
    mapper: AdjacencyMapper,
    transform: TileTransform,
}

impl CtmTexture {
    /// Pair a submap with a method, checking the submap is large enough for
    /// every tile the method can produce.
    pub fn new(submap: AtlasSubmap, method: ConnectionMethod) -> Result<Self> {
        let (need_cols, need_rows) = method.grid();
        if submap.cols() < need_cols || submap.rows() < need_rows {
            return Err(CtmError::SubmapTooSmall {
                sprite: submap.sprite().to_string(),
                cols: submap.cols(),
                rows: submap.rows(),
                method: method.to_string(),
                need_cols,
                need_rows,
            });
        }
        Ok(Self {
            submap,
            method,
            mapper: AdjacencyMapper::default(),
            transform: TileTransform::IDENTITY,
        })
    }

    /// A 2x2 simple texture. Simple textures skip the obscured-face check.
    pub fn simple(submap: AtlasSubmap) -> Result<Self> {
        Ok(Self::new(submap, ConnectionMethod::Simple)?.with_mapper(AdjacencyMapper::without_obscured_check()))
    }

    pub fn with_mapper(mut self, mapper: AdjacencyMapper) -> Self {
        self.mapper = mapper;
        self
    }

    pub fn with_transform(mut self, transform: TileTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn submap(&self) -> &AtlasSubmap {
        &self.submap
    }

    pub fn method(&self) -> ConnectionMethod {
        self.method
    }

    pub fn mapper(&self) -> AdjacencyMapper {
        self.mapper
    }

    /// Tile for a mask that was computed elsewhere.
    pub fn tile_for_mask(&self, mask: AdjacencyMask) -> ResolvedTile {
        let coord = self.method.resolve(mask);
        ResolvedTile {
            mask,
            coord,
            region: self.submap.tile_at(coord),
            transform: self.transform,
        }
    }

    /// Tile shown when there is no world to look at, e.g. in an inventory.
    pub fn default_tile(&self) -> ResolvedTile {
        self.tile_for_mask(AdjacencyMask::EMPTY)
    }

    /// Look at the neighbors of `facing` on the block at `pos` and pick its tile.
    pub fn resolve<W, P>(&self, world: &W, pos: BlockPosition, facing: Facing, predicate: &P) -> ResolvedTile
    where
        W: WorldQuery + ?Sized,
        P: ConnectionPredicate + ?Sized,
    {
        let mask = self.mapper.map(world, pos, facing, predicate);
        self.tile_for_mask(mask)
    }
}
