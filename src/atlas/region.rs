//! UV rectangles inside a texture atlas.

use serde::{Deserialize, Serialize};

/// A region within the texture atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// U coordinate of the left edge (0-1).
    pub u_min: f32,
    /// V coordinate of the top edge (0-1).
    pub v_min: f32,
    /// U coordinate of the right edge (0-1).
    pub u_max: f32,
    /// V coordinate of the bottom edge (0-1).
    pub v_max: f32,
}

impl AtlasRegion {
    /// The whole image.
    pub const FULL: AtlasRegion = AtlasRegion {
        u_min: 0.0,
        v_min: 0.0,
        u_max: 1.0,
        v_max: 1.0,
    };

    pub fn new(u_min: f32, v_min: f32, u_max: f32, v_max: f32) -> Self {
        Self {
            u_min,
            v_min,
            u_max,
            v_max,
        }
    }

    /// Get the width of this region in UV space.
    pub fn width(&self) -> f32 {
        self.u_max - self.u_min
    }

    /// Get the height of this region in UV space.
    pub fn height(&self) -> f32 {
        self.v_max - self.v_min
    }

    /// Corner UVs in quad order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [[f32; 2]; 4] {
        [
            [self.u_min, self.v_min],
            [self.u_max, self.v_min],
            [self.u_max, self.v_max],
            [self.u_min, self.v_max],
        ]
    }

    /// Corner UVs after applying a tile transform.
    ///
    /// The mirror is applied before the rotation, so a quad drawn with these
    /// UVs shows the tile flipped left-to-right and then turned clockwise.
    pub fn transformed_corners(&self, transform: TileTransform) -> [[f32; 2]; 4] {
        let mut corners = self.corners();
        if transform.mirror {
            corners = [corners[1], corners[0], corners[3], corners[2]];
        }
        let steps = (transform.rotation % 4) as usize;
        std::array::from_fn(|i| corners[(i + 4 - steps) % 4])
    }
}

/// Orientation applied to a tile when it is mapped onto a quad.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileTransform {
    /// Clockwise quarter turns (taken modulo 4).
    #[serde(default)]
    pub rotation: u8,
    /// Flip left-to-right before rotating.
    #[serde(default)]
    pub mirror: bool,
}

impl TileTransform {
    pub const IDENTITY: TileTransform = TileTransform {
        rotation: 0,
        mirror: false,
    };

    pub fn rotated(quarter_turns: u8) -> Self {
        Self {
            rotation: quarter_turns % 4,
            mirror: false,
        }
    }

    pub fn mirrored() -> Self {
        Self {
            rotation: 0,
            mirror: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_size() {
        let region = AtlasRegion::new(0.25, 0.5, 0.5, 0.75);
        assert!((region.width() - 0.25).abs() < 0.001);
        assert!((region.height() - 0.25).abs() < 0.001);
        assert_eq!(region.corners()[2], [0.5, 0.75]);
    }

    #[test]
    fn test_identity_transform_keeps_corners() {
        let region = AtlasRegion::new(0.0, 0.0, 0.5, 0.5);
        assert_eq!(region.transformed_corners(TileTransform::IDENTITY), region.corners());
        assert_eq!(region.transformed_corners(TileTransform::rotated(4)), region.corners());
    }

    #[test]
    fn test_quarter_turn_moves_bottom_left_to_top_left() {
        let region = AtlasRegion::new(0.0, 0.0, 1.0, 1.0);
        let rotated = region.transformed_corners(TileTransform::rotated(1));
        assert_eq!(rotated[0], [0.0, 1.0]);
        assert_eq!(rotated[1], [0.0, 0.0]);
        assert_eq!(rotated[2], [1.0, 0.0]);
        assert_eq!(rotated[3], [1.0, 1.0]);
    }

    #[test]
    fn test_mirror_swaps_left_and_right() {
        let region = AtlasRegion::new(0.0, 0.0, 1.0, 1.0);
        let mirrored = region.transformed_corners(TileTransform::mirrored());
        assert_eq!(mirrored[0], [1.0, 0.0]);
        assert_eq!(mirrored[1], [0.0, 0.0]);
        assert_eq!(mirrored[2], [0.0, 1.0]);
        assert_eq!(mirrored[3], [1.0, 1.0]);

        // mirroring twice through two transforms is the identity
        let twice = AtlasRegion {
            u_min: mirrored[0][0],
            v_min: 0.0,
            u_max: mirrored[1][0],
            v_max: 1.0,
        };
        assert_eq!(twice.transformed_corners(TileTransform::mirrored()), region.corners());
    }
}
