//! Connection methods: how an adjacency mask picks a tile.

use super::blob::{BLOB_COLS, BLOB_INDEX, BLOB_ROWS};
use super::mask::{AdjacencyMask, Dir};
use crate::atlas::TileCoord;
use serde::{Deserialize, Serialize};

/// Tile drawn when nothing qualifying connects.
pub const TILE_DISCONNECTED: TileCoord = TileCoord::new(0, 0);
/// Tile drawn when only left and right connect.
pub const TILE_HORIZONTAL: TileCoord = TileCoord::new(1, 0);
/// Tile drawn when only top and bottom connect.
pub const TILE_VERTICAL: TileCoord = TileCoord::new(0, 1);
/// Tile drawn when all four cardinals connect.
pub const TILE_CONNECTED: TileCoord = TileCoord::new(1, 1);

/// The policy a textured face uses to turn its adjacency mask into a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionMethod {
    /// 2x2 submap driven by the four cardinals only.
    Simple,
    /// 8x6 submap of the 47 blob tiles, corners included.
    Full,
    /// 2x2 submap driven by the top/bottom and left/right pairs.
    HorizontalVertical,
}

impl ConnectionMethod {
    pub const ALL: [ConnectionMethod; 3] = [
        ConnectionMethod::Simple,
        ConnectionMethod::Full,
        ConnectionMethod::HorizontalVertical,
    ];

    /// Columns and rows the submap must have at least.
    pub fn grid(self) -> (u32, u32) {
        match self {
            ConnectionMethod::Simple | ConnectionMethod::HorizontalVertical => (2, 2),
            ConnectionMethod::Full => (BLOB_COLS, BLOB_ROWS),
        }
    }

    /// Pick the tile for a mask. Total over all 256 masks and deterministic.
    pub fn resolve(self, mask: AdjacencyMask) -> TileCoord {
        match self {
            ConnectionMethod::Simple => resolve_simple(mask),
            ConnectionMethod::Full => resolve_full(mask),
            ConnectionMethod::HorizontalVertical => resolve_pairs(mask),
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "sctm" => Some(ConnectionMethod::Simple),
            "full" | "ctm" | "blob" => Some(ConnectionMethod::Full),
            "horizontal_vertical" | "hv" => Some(ConnectionMethod::HorizontalVertical),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConnectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionMethod::Simple => write!(f, "simple"),
            ConnectionMethod::Full => write!(f, "full"),
            ConnectionMethod::HorizontalVertical => write!(f, "horizontal_vertical"),
        }
    }
}

/// Resolve a mask to a tile coordinate under a method.
///
/// Pure and reentrant; equivalent to [`ConnectionMethod::resolve`].
pub fn resolve(mask: AdjacencyMask, method: ConnectionMethod) -> TileCoord {
    method.resolve(mask)
}

fn resolve_simple(mask: AdjacencyMask) -> TileCoord {
    if mask.connected_and(&Dir::CARDINALS) {
        TILE_CONNECTED
    } else if mask.connected_and(&[Dir::Top, Dir::Bottom]) {
        TILE_VERTICAL
    } else if mask.connected_and(&[Dir::Left, Dir::Right]) {
        TILE_HORIZONTAL
    } else {
        TILE_DISCONNECTED
    }
}

fn resolve_pairs(mask: AdjacencyMask) -> TileCoord {
    let vertical = mask.connected_and(&[Dir::Top, Dir::Bottom]);
    let horizontal = mask.connected_and(&[Dir::Left, Dir::Right]);
    match (vertical, horizontal) {
        (true, true) => TILE_CONNECTED,
        (true, false) => TILE_VERTICAL,
        (false, true) => TILE_HORIZONTAL,
        (false, false) => TILE_DISCONNECTED,
    }
}

fn resolve_full(mask: AdjacencyMask) -> TileCoord {
    let index = BLOB_INDEX[mask.bits() as usize] as u32;
    TileCoord::new(index % BLOB_COLS, index / BLOB_COLS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_mask_resolves_in_grid() {
        for method in ConnectionMethod::ALL {
            let (cols, rows) = method.grid();
            for bits in 0..=255u8 {
                let tile = method.resolve(AdjacencyMask::from_bits(bits));
                assert!(tile.col < cols && tile.row < rows, "{method} {bits:#04x} -> {tile}");
                assert_eq!(tile, method.resolve(AdjacencyMask::from_bits(bits)));
            }
        }
    }

    #[test]
    fn test_simple_vertical() {
        let mask = AdjacencyMask::of(&[Dir::Top, Dir::Bottom]);
        let tile = ConnectionMethod::Simple.resolve(mask);
        assert_eq!(tile, TILE_VERTICAL);
        assert_ne!(tile, TILE_HORIZONTAL);
        assert_ne!(tile, TILE_CONNECTED);
    }

    #[test]
    fn test_simple_thresholds() {
        let simple = ConnectionMethod::Simple;
        assert_eq!(simple.resolve(AdjacencyMask::of(&Dir::CARDINALS)), TILE_CONNECTED);
        assert_eq!(simple.resolve(AdjacencyMask::of(&[Dir::Left, Dir::Right])), TILE_HORIZONTAL);
        // partial connectivity falls through to the default tile
        assert_eq!(simple.resolve(AdjacencyMask::of(&[Dir::Top])), TILE_DISCONNECTED);
        assert_eq!(
            simple.resolve(AdjacencyMask::of(&[Dir::Top, Dir::Left, Dir::TopLeft])),
            TILE_DISCONNECTED
        );
        // three cardinals with a full pair still reads as that pair
        assert_eq!(
            simple.resolve(AdjacencyMask::of(&[Dir::Top, Dir::Bottom, Dir::Left])),
            TILE_VERTICAL
        );
    }

    #[test]
    fn test_simple_ignores_corners() {
        for bits in 0..=255u8 {
            let mask = AdjacencyMask::from_bits(bits);
            assert_eq!(
                ConnectionMethod::Simple.resolve(mask),
                ConnectionMethod::Simple.resolve(mask.cardinals())
            );
        }
    }

    #[test]
    fn test_pairs_ignore_corners() {
        let hv = ConnectionMethod::HorizontalVertical;
        for bits in 0..=255u8 {
            let mask = AdjacencyMask::from_bits(bits);
            assert_eq!(hv.resolve(mask), hv.resolve(mask.cardinals()));
        }
        assert_eq!(hv.resolve(AdjacencyMask::of(&[Dir::Top, Dir::Bottom])), TILE_VERTICAL);
        assert_eq!(hv.resolve(AdjacencyMask::of(&[Dir::Left, Dir::Right, Dir::Top])), TILE_HORIZONTAL);
        assert_eq!(hv.resolve(AdjacencyMask::of(&[Dir::Right])), TILE_DISCONNECTED);
    }

    #[test]
    fn test_full_has_47_outcomes() {
        let tiles: HashSet<_> = (0..=255u8)
            .map(|b| ConnectionMethod::Full.resolve(AdjacencyMask::from_bits(b)))
            .collect();
        assert_eq!(tiles.len(), 47);
        assert!(!tiles.contains(&TileCoord::new(7, 5)));
    }

    #[test]
    fn test_full_edges_without_corners() {
        let full = ConnectionMethod::Full;
        let edges = full.resolve(AdjacencyMask::of(&Dir::CARDINALS));
        let everything = full.resolve(AdjacencyMask::ALL);
        let nothing = full.resolve(AdjacencyMask::EMPTY);

        assert_eq!(edges, TileCoord::new(5, 2));
        assert_eq!(everything, TileCoord::new(6, 5));
        assert_eq!(nothing, TileCoord::new(0, 0));
        assert_ne!(edges, everything);
    }

    #[test]
    fn test_full_corners_need_both_edges() {
        let full = ConnectionMethod::Full;
        // corners next to a single edge change nothing
        assert_eq!(
            full.resolve(AdjacencyMask::of(&[Dir::Top, Dir::TopLeft, Dir::TopRight])),
            full.resolve(AdjacencyMask::of(&[Dir::Top]))
        );
        // a supported corner does
        assert_ne!(
            full.resolve(AdjacencyMask::of(&[Dir::Top, Dir::Right, Dir::TopRight])),
            full.resolve(AdjacencyMask::of(&[Dir::Top, Dir::Right]))
        );
    }

    #[test]
    fn test_grid_sizes() {
        assert_eq!(ConnectionMethod::Simple.grid(), (2, 2));
        assert_eq!(ConnectionMethod::HorizontalVertical.grid(), (2, 2));
        assert_eq!(ConnectionMethod::Full.grid(), (8, 6));
        assert_eq!(resolve(AdjacencyMask::ALL, ConnectionMethod::Simple), TILE_CONNECTED);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(ConnectionMethod::from_str("SCTM"), Some(ConnectionMethod::Simple));
        assert_eq!(ConnectionMethod::from_str("full"), Some(ConnectionMethod::Full));
        assert_eq!(ConnectionMethod::from_str("hv"), Some(ConnectionMethod::HorizontalVertical));
        assert_eq!(ConnectionMethod::from_str("pillar"), None);
    }
}
