//! Zone footprint classification
//!
//! A zone side's usable area depends on the roads flanking it: a road on
//! either neighbouring side claims the shared corner, and the decoration
//! sets are authored against the footprint that remains.

use crate::catalog::asset::ZoneSize;
use crate::world::tile::Edge;

/// Which way a zone side's decoration set faces
///
/// Sets are authored with their road access toward the west flank of the
/// side; `Left` mirrors the set across x so the access lands on the east
/// flank instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Laid out as authored
    Right,
    /// Mirrored across x, reversing triangle winding
    Left,
}

/// Footprint a zone side's decoration set has to fit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideFootprint {
    /// How much of the tile edge the zone may occupy
    pub size: ZoneSize,
    /// Which way the decoration set faces
    pub orientation: Orientation,
}

impl SideFootprint {
    /// Whether the decoration set gets mirrored across x
    #[must_use]
    pub const fn mirrored(&self) -> bool {
        matches!(self.orientation, Orientation::Left)
    }
}

/// Whether the side at `index`, wrapped into range, carries a road
#[must_use]
pub fn side_is_road(sides: &[Edge; 4], index: usize) -> bool {
    sides
        .get(index % sides.len())
        .copied()
        .is_some_and(Edge::is_road)
}

/// Classify the footprint available to the zone side at `side`
///
/// Roads on both flanks leave a large strip along the edge, a road on
/// one flank leaves a medium strip oriented away from it, and no
/// flanking roads leave only the small centre strip.
#[must_use]
pub fn classify_side(sides: &[Edge; 4], side: usize) -> SideFootprint {
    let left = side_is_road(sides, side + 3);
    let right = side_is_road(sides, side + 1);
    let (size, orientation) = match (left, right) {
        (true, true) => (ZoneSize::Large, Orientation::Right),
        (true, false) => (ZoneSize::Medium, Orientation::Right),
        (false, true) => (ZoneSize::Medium, Orientation::Left),
        (false, false) => (ZoneSize::Small, Orientation::Right),
    };
    SideFootprint { size, orientation }
}
