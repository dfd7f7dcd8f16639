//! Block faces and the local basis used to look at a face head-on.

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// The six faces of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Facing {
    /// All six faces in order.
    pub const ALL: [Facing; 6] = [
        Facing::Down,
        Facing::Up,
        Facing::North,
        Facing::South,
        Facing::West,
        Facing::East,
    ];

    /// Get the outward normal of this face.
    pub fn normal(&self) -> IVec3 {
        match self {
            Facing::Down => IVec3::NEG_Y,
            Facing::Up => IVec3::Y,
            Facing::North => IVec3::NEG_Z,
            Facing::South => IVec3::Z,
            Facing::West => IVec3::NEG_X,
            Facing::East => IVec3::X,
        }
    }

    /// Get the opposite face.
    pub fn opposite(&self) -> Facing {
        match self {
            Facing::Down => Facing::Up,
            Facing::Up => Facing::Down,
            Facing::North => Facing::South,
            Facing::South => Facing::North,
            Facing::West => Facing::East,
            Facing::East => Facing::West,
        }
    }

    /// The "up" tangent of the face as seen by a viewer looking at it from outside.
    ///
    /// Side faces keep world up. The top face has north at its top edge and the
    /// bottom face has south, so both read like a map viewed from their side.
    pub fn up(&self) -> IVec3 {
        match self {
            Facing::Up => IVec3::NEG_Z,
            Facing::Down => IVec3::Z,
            _ => IVec3::Y,
        }
    }

    /// The "right" tangent of the face as seen by a viewer looking at it from outside.
    pub fn right(&self) -> IVec3 {
        match self {
            Facing::Up | Facing::Down => IVec3::X,
            Facing::South => IVec3::X,
            Facing::North => IVec3::NEG_X,
            Facing::East => IVec3::NEG_Z,
            Facing::West => IVec3::Z,
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "down" => Some(Facing::Down),
            "up" => Some(Facing::Up),
            "north" => Some(Facing::North),
            "south" => Some(Facing::South),
            "west" => Some(Facing::West),
            "east" => Some(Facing::East),
            _ => None,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Down => write!(f, "down"),
            Facing::Up => write!(f, "up"),
            Facing::North => write!(f, "north"),
            Facing::South => write!(f, "south"),
            Facing::West => write!(f, "west"),
            Facing::East => write!(f, "east"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_is_orthogonal_to_normal() {
        for facing in Facing::ALL {
            let n = facing.normal();
            assert_eq!(n.dot(facing.up()), 0, "{facing}");
            assert_eq!(n.dot(facing.right()), 0, "{facing}");
            assert_eq!(facing.up().dot(facing.right()), 0, "{facing}");
        }
    }

    #[test]
    fn test_basis_is_right_handed_from_outside() {
        // right x up points out of the face, towards the viewer
        for facing in Facing::ALL {
            assert_eq!(facing.right().cross(facing.up()), facing.normal(), "{facing}");
        }
    }

    #[test]
    fn test_opposite() {
        for facing in Facing::ALL {
            assert_eq!(facing.opposite().opposite(), facing);
            assert_eq!(facing.opposite().normal(), -facing.normal());
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Facing::from_str("NORTH"), Some(Facing::North));
        assert_eq!(Facing::from_str("up"), Some(Facing::Up));
        assert_eq!(Facing::from_str("sideways"), None);
    }
}
