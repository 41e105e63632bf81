//! Top-down city map export as PNG

use crate::io::error::{CityError, Result, invalid_parameter};
use crate::layout::resolver::road_count;
use crate::world::World;
use crate::world::direction::Direction;
use crate::world::grid::PlacedTile;
use crate::world::tile::Edge;
use image::{Rgb, RgbImage};
use std::path::Path;

// Map palette, matched to the zone outline materials
const GROUND: Rgb<u8> = Rgb([210, 217, 210]);
const ROAD: Rgb<u8> = Rgb([64, 64, 64]);
const SUBURBAN: Rgb<u8> = Rgb([115, 212, 99]);
const COMMERCIAL: Rgb<u8> = Rgb([115, 99, 212]);

#[derive(Debug)]
struct BoundingBox {
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

// Finds the minimal rectangle containing all placed tiles
fn calculate_bounding_box<B>(world: &World<B>) -> Option<BoundingBox> {
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    let mut found_tiles = false;

    for placed in world.tiles() {
        found_tiles = true;
        min_x = min_x.min(placed.position.x);
        max_x = max_x.max(placed.position.x);
        min_y = min_y.min(placed.position.y);
        max_y = max_y.max(placed.position.y);
    }

    found_tiles.then_some(BoundingBox {
        min_x,
        max_x,
        min_y,
        max_y,
    })
}

/// Export the placed tiles as a top-down PNG map
///
/// Each tile cell paints its four world-facing edges in the colour of
/// the road or zone behind them, plus a road block in the centre when
/// the tile connects two or more roads. North is up.
///
/// # Errors
///
/// Returns an error if:
/// - `pixels_per_tile` is zero
/// - No tiles have been placed in the world
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_city_map<B>(
    world: &World<B>,
    output_path: &Path,
    pixels_per_tile: u32,
) -> Result<()> {
    if pixels_per_tile == 0 {
        return Err(invalid_parameter(
            "pixels_per_tile",
            &pixels_per_tile,
            &"the map needs at least one pixel per tile",
        ));
    }
    let bbox = calculate_bounding_box(world).ok_or(CityError::EmptyGrid)?;

    let px = pixels_per_tile;
    let width = (bbox.max_x - bbox.min_x + 1) as u32 * px;
    let height = (bbox.max_y - bbox.min_y + 1) as u32 * px;
    let mut img = RgbImage::from_pixel(width, height, GROUND);

    for placed in world.tiles() {
        let cell_x = (placed.position.x - bbox.min_x) as u32 * px;
        let cell_y = (bbox.max_y - placed.position.y) as u32 * px;
        draw_tile_cell(&mut img, cell_x, cell_y, px, placed);
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CityError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| CityError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    log::info!("map saved to '{}'", output_path.display());
    Ok(())
}

fn draw_tile_cell(img: &mut RgbImage, cell_x: u32, cell_y: u32, px: u32, placed: &PlacedTile) {
    let thickness = (px / 4).max(1);

    for facing in Direction::ALL {
        let Some(color) = edge_color(placed.tile.world_side(facing, placed.rotation)) else {
            continue;
        };
        let (x, y, w, h) = match facing {
            Direction::North => (cell_x, cell_y, px, thickness),
            Direction::South => (cell_x, cell_y + px - thickness, px, thickness),
            Direction::East => (cell_x + px - thickness, cell_y, thickness, px),
            Direction::West => (cell_x, cell_y, thickness, px),
        };
        fill_rect(img, x, y, w, h, color);
    }

    if road_count(placed.tile.sides()) >= 2 {
        let inner = px.saturating_sub(thickness * 2);
        if inner > 0 {
            fill_rect(
                img,
                cell_x + thickness,
                cell_y + thickness,
                inner,
                inner,
                ROAD,
            );
        }
    }
}

const fn edge_color(edge: Edge) -> Option<Rgb<u8>> {
    match edge {
        Edge::Road { .. } => Some(ROAD),
        Edge::Suburban { .. } => Some(SUBURBAN),
        Edge::Commercial { .. } => Some(COMMERCIAL),
        Edge::Empty => None,
    }
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, width: u32, height: u32, color: Rgb<u8>) {
    for y in y0..y0.saturating_add(height) {
        for x in x0..x0.saturating_add(width) {
            if x < img.width() && y < img.height() {
                img.put_pixel(x, y, color);
            }
        }
    }
}
