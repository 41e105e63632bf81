//! Tiles and the edges they expose to their neighbours

use crate::world::direction::{Direction, Rotation};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier shared by road edges belonging to the same network
///
/// Carried through placement untouched; only whether an edge is a road at
/// all participates in matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RoadId(u32);

impl RoadId {
    /// Create a road identifier
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw identifier value
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Zone classification of a non-road tile side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    /// Residential frontage
    Suburban,
    /// Business frontage
    Commercial,
}

/// One side of a tile as seen by its neighbour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// A road meeting the side at the tile boundary
    Road {
        /// Network the road belongs to
        id: RoadId,
        /// Development level, currently inert
        level: u8,
    },
    /// Residential zone frontage
    Suburban {
        /// Development level, currently inert
        level: u8,
    },
    /// Commercial zone frontage
    Commercial {
        /// Development level, currently inert
        level: u8,
    },
    /// Nothing built against the side
    Empty,
}

impl Edge {
    /// A road edge on the given network
    pub const fn road(id: u32, level: u8) -> Self {
        Self::Road {
            id: RoadId::new(id),
            level,
        }
    }

    /// A residential edge at the given level
    pub const fn suburban(level: u8) -> Self {
        Self::Suburban { level }
    }

    /// A commercial edge at the given level
    pub const fn commercial(level: u8) -> Self {
        Self::Commercial { level }
    }

    /// Whether the edge carries a road
    pub const fn is_road(self) -> bool {
        matches!(self, Self::Road { .. })
    }

    /// Zone classification, if the edge is zoned
    pub const fn zone_kind(self) -> Option<ZoneKind> {
        match self {
            Self::Suburban { .. } => Some(ZoneKind::Suburban),
            Self::Commercial { .. } => Some(ZoneKind::Commercial),
            Self::Road { .. } | Self::Empty => None,
        }
    }
}

static NEXT_TILE_ID: AtomicU64 = AtomicU64::new(0);

/// Identifier minted once per tile and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileId(u64);

impl TileId {
    fn mint() -> Self {
        Self(NEXT_TILE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw counter value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile{}", self.0)
    }
}

/// A city tile: four edges in local side order
///
/// Sides are fixed at construction; orientation is supplied at placement
/// time, never stored on the tile.
#[derive(Clone, Debug)]
pub struct Tile {
    id: TileId,
    sides: [Edge; 4],
}

impl Tile {
    /// Create a tile from local sides ordered north, east, south, west
    pub fn new(sides: [Edge; 4]) -> Self {
        Self {
            id: TileId::mint(),
            sides,
        }
    }

    /// Unique tile identifier
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// All four local sides in side order
    pub const fn sides(&self) -> &[Edge; 4] {
        &self.sides
    }

    /// Local side for the given direction
    pub const fn side(&self, direction: Direction) -> Edge {
        match direction {
            Direction::North => self.sides[0],
            Direction::East => self.sides[1],
            Direction::South => self.sides[2],
            Direction::West => self.sides[3],
        }
    }

    /// Side facing the given world direction once rotated
    pub const fn world_side(&self, facing: Direction, rotation: Rotation) -> Edge {
        self.side(facing.unrotated_by(rotation))
    }
}
