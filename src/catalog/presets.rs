//! Built-in catalog for the demo city asset pack
//!
//! Part bakes and bounds mirror the authored geometry of the pack; the
//! decoration sets lay the pieces out exactly as the pack intends them.

use crate::catalog::asset::{
    AssetDefinition, AssetId, AssetLibrary, Color, DecorationItem, DecorationLookup,
    DecorationSet, LibraryBuilder, MeshPart, RoadAssets,
};
use crate::math::aabb::Aabb;
use crate::math::transform::{Placement, yaw};
use cgmath::{Matrix4, SquareMatrix, Vector3};
use std::f32::consts::PI;

const ASPHALT: Color = Color::new(0.25, 0.25, 0.25);
const PAVING: Color = Color::new(0.62, 0.62, 0.6);
const SLAB: Color = Color::new(0.78, 0.8, 0.78);
const FACADE: Color = Color::new(0.7, 0.72, 0.75);
const TRIM: Color = Color::new(0.35, 0.35, 0.38);

const BLACK_ROOF: Color = Color::new(0.15, 0.15, 0.15);
const BRICK: Color = Color::new(0.8, 0.44, 0.25);
const WHITE_WALLS: Color = Color::new(0.97, 0.97, 0.97);
const YELLOW_WALLS: Color = Color::new(0.99, 0.84, 0.22);
const BLUE_WALLS: Color = Color::new(0.0, 0.1, 0.6);
const GRAY_WALLS: Color = Color::new(0.67, 0.65, 0.63);

/// Wall and roof colours drawn by house instances
const HOUSE_PALETTE: [Color; 6] = [
    BLACK_ROOF,
    BRICK,
    WHITE_WALLS,
    YELLOW_WALLS,
    BLUE_WALLS,
    GRAY_WALLS,
];

/// Trunk and foliage colours drawn by tree instances
const TREE_PALETTE: [Color; 9] = [
    Color::new(0.25, 0.2, 0.02),
    Color::new(0.7, 0.51, 0.34),
    Color::new(0.55, 0.5, 0.45),
    Color::new(0.64, 0.69, 0.52),
    Color::new(0.51, 0.67, 0.37),
    Color::new(0.64, 0.88, 0.22),
    Color::new(0.38, 0.77, 0.19),
    Color::new(0.44, 0.68, 0.08),
    Color::new(0.62, 0.82, 0.11),
];

fn bounds(min_x: f32, min_y: f32, min_z: f32, max_x: f32, max_y: f32, max_z: f32) -> Aabb {
    Aabb::new(
        Vector3::new(min_x, min_y, min_z),
        Vector3::new(max_x, max_y, max_z),
    )
}

fn part(name: &str, bake: Matrix4<f32>, color: Color, extent: Aabb) -> MeshPart {
    MeshPart {
        name: name.to_owned(),
        bake,
        default_color: color,
        bounds: extent,
    }
}

// Authored parts stack vertically, so their bakes are plain lifts
fn lift(height: f32) -> Matrix4<f32> {
    Matrix4::from_translation(Vector3::new(0.0, height, 0.0))
}

fn road_piece(name: &str, trim: &str) -> AssetDefinition {
    AssetDefinition {
        name: name.to_owned(),
        parts: vec![
            part(
                "surface",
                Matrix4::identity(),
                ASPHALT,
                bounds(-1.0, 0.0, -1.0, 1.0, 0.04, 1.0),
            ),
            part(
                trim,
                lift(0.04),
                PAVING,
                bounds(-1.0, 0.0, -1.0, 1.0, 0.04, 1.0),
            ),
        ],
        palette: Vec::new(),
    }
}

fn house(name: &str, height: f32, half_width: f32, half_depth: f32) -> AssetDefinition {
    AssetDefinition {
        name: name.to_owned(),
        parts: vec![
            part(
                "walls",
                Matrix4::identity(),
                WHITE_WALLS,
                bounds(-half_width, 0.0, -half_depth, half_width, height, half_depth),
            ),
            part(
                "roof",
                lift(height),
                BLACK_ROOF,
                bounds(
                    -half_width - 0.04,
                    0.0,
                    -half_depth - 0.04,
                    half_width + 0.04,
                    0.2,
                    half_depth + 0.04,
                ),
            ),
        ],
        palette: HOUSE_PALETTE.to_vec(),
    }
}

fn tree(name: &str, trunk_height: f32, canopy_radius: f32, canopy_height: f32) -> AssetDefinition {
    let girth = canopy_radius * 0.2;
    AssetDefinition {
        name: name.to_owned(),
        parts: vec![
            part(
                "trunk",
                Matrix4::identity(),
                Color::new(0.25, 0.2, 0.02),
                bounds(-girth, 0.0, -girth, girth, trunk_height, girth),
            ),
            part(
                "leaves",
                lift(trunk_height),
                Color::new(0.51, 0.67, 0.37),
                bounds(
                    -canopy_radius,
                    0.0,
                    -canopy_radius,
                    canopy_radius,
                    canopy_height,
                    canopy_radius,
                ),
            ),
        ],
        palette: TREE_PALETTE.to_vec(),
    }
}

fn building(name: &str, height: f32) -> AssetDefinition {
    AssetDefinition {
        name: name.to_owned(),
        parts: vec![
            part(
                "facade",
                Matrix4::identity(),
                FACADE,
                bounds(-0.45, 0.0, -0.45, 0.45, height, 0.45),
            ),
            part(
                "roof",
                lift(height),
                TRIM,
                bounds(-0.48, 0.0, -0.48, 0.48, 0.08, 0.48),
            ),
        ],
        palette: Vec::new(),
    }
}

fn strip(name: &str, half_width: f32) -> AssetDefinition {
    AssetDefinition {
        name: name.to_owned(),
        parts: vec![part(
            "paving",
            Matrix4::identity(),
            PAVING,
            bounds(-half_width, 0.0, -0.25, half_width, 0.01, 0.25),
        )],
        palette: Vec::new(),
    }
}

fn at(x: f32, y: f32, z: f32) -> Placement {
    Placement::from(Vector3::new(x, y, z))
}

fn item(asset: AssetId, placement: Placement) -> DecorationItem {
    DecorationItem { asset, placement }
}

/// Assemble the built-in city asset library
///
/// Registers the full pack (roads, houses, trees, commercial buildings)
/// with their palettes, then wires the decoration buckets the way the
/// pack lays zones out: one suburban garden set and five single-building
/// commercial sets, shared between the medium and large footprints.
/// Small footprints carry no sets and stay undecorated.
pub fn default_library() -> AssetLibrary {
    let mut builder = LibraryBuilder::new();

    let base = builder.register(AssetDefinition {
        name: "tile_base".to_owned(),
        parts: vec![part(
            "slab",
            Matrix4::identity(),
            SLAB,
            bounds(-1.0, -0.1, -1.0, 1.0, 0.0, 1.0),
        )],
        palette: Vec::new(),
    });

    let roads = RoadAssets {
        straight: builder.register(road_piece("road_straight", "curb")),
        bend: builder.register(road_piece("road_bend", "curb")),
        bend_sidewalk: builder.register(road_piece("road_bend_sidewalk", "sidewalk")),
        intersection3: builder.register(road_piece("road_intersection", "sidewalk")),
        intersection4: builder.register(road_piece("road_crossroad", "sidewalk")),
    };

    let house01 = builder.register(house("house_type01", 0.35, 0.3, 0.22));
    builder.register(house("house_type02", 0.3, 0.32, 0.2));
    builder.register(house("house_type05", 0.4, 0.28, 0.24));
    let tree_large = builder.register(tree("tree_large", 0.5, 0.25, 0.45));
    let tree_small = builder.register(tree("tree_small", 0.3, 0.16, 0.28));
    let driveway = builder.register(strip("driveway_short", 0.1));
    let path = builder.register(strip("path_short", 0.06));

    let building_a = builder.register(building("small_building_a", 0.7));
    let building_b = builder.register(building("small_building_b", 0.8));
    let building_c = builder.register(building("small_building_c", 0.75));
    let building_d = builder.register(building("small_building_d", 0.85));
    let building_e = builder.register(building("small_building_e", 0.9));
    builder.register(building("small_building_f", 0.8));
    builder.register(building("skyscraper_f", 1.8));

    let mut garden_items = vec![
        item(
            house01,
            Placement {
                rotation: yaw(PI),
                ..at(-0.5, 0.0, 0.4)
            },
        ),
        item(
            driveway,
            Placement {
                scale: Vector3::new(1.0, 1.0, 2.0),
                ..at(-0.7, 0.0, 0.45)
            },
        ),
        item(
            path,
            Placement {
                scale: Vector3::new(1.0, 1.0, 2.0),
                ..at(-0.175, 0.0, 0.45)
            },
        ),
        item(tree_large, at(-0.81, 0.0, 0.76)),
        item(tree_small, at(-0.6, 0.0, 0.7)),
    ];
    garden_items.extend([
        item(tree_large, at(0.25, 0.0, 0.7)),
        item(tree_large, at(0.55, 0.0, 0.8)),
        item(tree_large, at(0.42, 0.0, 0.5)),
        item(tree_small, at(0.28, 0.0, 0.55)),
    ]);
    let garden = DecorationSet {
        items: garden_items,
    };

    let suburban = DecorationLookup {
        small: Vec::new(),
        medium: vec![garden.clone()],
        large: vec![garden],
    };

    let storefront = |asset: AssetId| DecorationSet {
        items: vec![item(
            asset,
            Placement {
                rotation: yaw(PI),
                ..at(0.5, 0.0, 0.5)
            },
        )],
    };
    let storefronts = vec![
        storefront(building_c),
        storefront(building_a),
        storefront(building_b),
        storefront(building_d),
        storefront(building_e),
    ];
    let commercial = DecorationLookup {
        small: Vec::new(),
        medium: storefronts.clone(),
        large: storefronts,
    };

    builder.finish(base, roads, suburban, commercial)
}
