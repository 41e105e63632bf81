//! Resolution of placed tiles into concrete asset placements
//!
//! Pure mapping from a tile's sides to the catalog assets that dress it.
//! Road sides lay straight segments, zone sides draw a decoration set
//! sized by their flanking roads, and tiles with two or more roads get a
//! centre piece whose shape and turn follow the road arrangement.

use crate::catalog::asset::{AssetId, AssetLibrary};
use crate::layout::footprint::{classify_side, side_is_road};
use crate::math::transform::{Placement, mirror_x, quarter_turn, yaw};
use crate::world::direction::Rotation;
use crate::world::tile::{Edge, Tile};
use cgmath::{Matrix4, Vector3};
use rand::Rng;
use std::f32::consts::FRAC_PI_2;

/// One asset instance the renderer should draw for a tile
#[derive(Clone, Debug)]
pub struct AssetPlacement {
    /// Catalog asset to instance
    pub asset: AssetId,
    /// Transform relative to the tile centre, grid rotation included
    pub transform: Matrix4<f32>,
    /// Whether a mirror is baked in, reversing triangle winding
    pub mirrored: bool,
}

/// Count the road sides of a tile
#[must_use]
pub fn road_count(sides: &[Edge; 4]) -> usize {
    sides.iter().filter(|side| side.is_road()).count()
}

/// Whether two road sides face each other across the tile
#[must_use]
pub fn has_opposite_roads(sides: &[Edge; 4]) -> bool {
    (side_is_road(sides, 0) && side_is_road(sides, 2))
        || (side_is_road(sides, 1) && side_is_road(sides, 3))
}

/// Index of the side ending the wrapping run of roads found last in side order
///
/// Scans from west back toward north for a road, then follows its run
/// clockwise, wrapping past west, and reports where the run stops.
/// Centre pieces are authored against that side, so their turn count is
/// derived from it. Returns zero when no side or every side is a road.
#[must_use]
pub fn last_road(sides: &[Edge; 4]) -> usize {
    let roads = road_count(sides);
    if roads == 0 || roads == sides.len() {
        return 0;
    }
    for index in (0..sides.len()).rev() {
        if side_is_road(sides, index) {
            let mut end = index + 1;
            while side_is_road(sides, end) {
                end += 1;
            }
            return (end - 1) % sides.len();
        }
    }
    0
}

// Straight segments span one tile edge and sit against it
fn straight_side_placement() -> Matrix4<f32> {
    Placement {
        position: Vector3::new(-0.375, 0.0, 0.625),
        rotation: yaw(FRAC_PI_2),
        scale: Vector3::new(0.75, 0.5, 0.5),
    }
    .to_matrix()
}

// Centre pieces are authored oversized and off-centre toward their open face
fn centre_placement() -> Matrix4<f32> {
    Placement {
        position: Vector3::new(0.0, 0.0, -0.375),
        scale: Vector3::new(0.5, 0.5, 0.5),
        ..Placement::identity()
    }
    .to_matrix()
}

/// Resolve the asset placements dressing one placed tile
///
/// Transforms are local to the tile centre with the grid rotation
/// already applied; the caller only translates them to the tile's world
/// position. Zone sides with sets available draw exactly one from the
/// supplied generator; zone sides whose bucket is empty, and empty
/// sides, contribute nothing.
#[must_use]
pub fn resolve_tile<R: Rng>(
    library: &AssetLibrary,
    tile: &Tile,
    rotation: Rotation,
    rng: &mut R,
) -> Vec<AssetPlacement> {
    let orient = quarter_turn(rotation.turns());
    let sides = tile.sides();
    let mut placements = Vec::new();

    for (index, side) in sides.iter().enumerate() {
        let frame = orient * quarter_turn(index as u8);
        if side.is_road() {
            placements.push(AssetPlacement {
                asset: library.roads().straight,
                transform: frame * straight_side_placement(),
                mirrored: false,
            });
        } else if let Some(kind) = side.zone_kind() {
            let footprint = classify_side(sides, index);
            let sets = library.decorations(kind, footprint.size);
            if sets.is_empty() {
                continue;
            }
            let Some(set) = sets.get(rng.random_range(0..sets.len())) else {
                continue;
            };
            let mirrored = footprint.mirrored();
            let frame = if mirrored { frame * mirror_x() } else { frame };
            for item in &set.items {
                placements.push(AssetPlacement {
                    asset: item.asset,
                    transform: frame * item.placement.to_matrix(),
                    mirrored,
                });
            }
        }
    }

    if let Some((asset, turn)) = centre_piece(library, sides) {
        placements.push(AssetPlacement {
            asset,
            transform: orient * quarter_turn(turn) * centre_placement(),
            mirrored: false,
        });
    }

    placements
}

// Two roads pick between a through road and a corner, three and four
// roads take the matching intersection
fn centre_piece(library: &AssetLibrary, sides: &[Edge; 4]) -> Option<(AssetId, u8)> {
    let roads = library.roads();
    let turn = (last_road(sides) + 1) as u8;
    match road_count(sides) {
        2 if has_opposite_roads(sides) => Some((roads.straight, turn)),
        2 => Some((roads.bend_sidewalk, turn)),
        3 => Some((roads.intersection3, turn)),
        4 => Some((roads.intersection4, 0)),
        _ => None,
    }
}
