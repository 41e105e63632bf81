//! Sparse tile grid: placement rules, the road frontier, and the renderer seam

use crate::io::configuration::TILE_SPACING;
use crate::io::error::Result;
use crate::world::direction::{Direction, Rotation};
use crate::world::tile::Tile;
use cgmath::Vector3;
use std::collections::HashMap;
use std::fmt;

/// Integer cell coordinates on the unbounded tile grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    /// East-west coordinate, growing eastward
    pub x: i32,
    /// North-south coordinate, growing northward
    pub y: i32,
}

impl GridPosition {
    /// The cell at the grid origin
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a position from cell coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in the given direction
    pub const fn neighbour(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// World-space position of the cell centre on the ground plane
    pub const fn to_world(self) -> Vector3<f32> {
        Vector3::new(
            self.x as f32 * TILE_SPACING,
            0.0,
            self.y as f32 * TILE_SPACING,
        )
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of an instance batch owned by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchId(usize);

impl BatchId {
    /// Create a batch id from its dense index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Dense index of the batch
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Location of one rendered instance inside a batch
///
/// Instances of a multi-part asset share one index across every part of
/// their batch, so a single handle addresses the whole placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstanceHandle {
    /// Batch holding the instance
    pub batch: BatchId,
    /// Instance index within the batch
    pub index: usize,
}

/// Renderer seam fed by the grid as tiles are committed
///
/// The grid owns the returned handles but never dereferences them; only the
/// renderer knows what stands behind a [`BatchId`].
pub trait TileBatcher {
    /// Ingest one placed tile at the given world position and orientation
    ///
    /// Returns one handle per instance the tile produced.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer cannot ingest the tile
    fn add_tile(
        &mut self,
        tile: &Tile,
        world_position: Vector3<f32>,
        rotation: Rotation,
    ) -> Result<Vec<InstanceHandle>>;

    /// Flush pending instances into renderable form
    fn build(&mut self);
}

/// A tile committed to the grid together with its render bookkeeping
#[derive(Clone, Debug)]
pub struct PlacedTile {
    /// The committed tile
    pub tile: Tile,
    /// Cell the tile occupies
    pub position: GridPosition,
    /// Clockwise quarter turns applied at placement
    pub rotation: Rotation,
    /// Handles for every instance the renderer created for this tile
    pub render_handles: Vec<InstanceHandle>,
}

/// The city grid: committed tiles, the road frontier, and the renderer
///
/// The frontier lists empty cells faced by at least one committed road
/// edge. A cell reachable from several roads appears once per road, which
/// biases random growth toward well connected spots.
pub struct World<B> {
    tiles: HashMap<GridPosition, PlacedTile>,
    frontier: Vec<GridPosition>,
    renderer: B,
}

impl<B> World<B> {
    /// Create an empty grid draining into the given renderer
    pub fn new(renderer: B) -> Self {
        Self {
            tiles: HashMap::new(),
            frontier: Vec::new(),
            renderer,
        }
    }

    /// Whether the tile may be committed at the position unforced
    ///
    /// Requires the cell to be empty, every road edge facing an occupied
    /// neighbour to meet a road edge and vice versa, and at least one such
    /// road pairing to exist. Mismatched zone kinds never block a placement.
    /// With no occupied neighbour at all there is nothing to connect to, so
    /// the answer is always false.
    pub fn can_place(&self, tile: &Tile, position: GridPosition, rotation: Rotation) -> bool {
        if self.tiles.contains_key(&position) {
            return false;
        }

        let mut road_link = false;
        for facing in Direction::ALL {
            let Some(neighbour) = self.tiles.get(&position.neighbour(facing)) else {
                continue;
            };
            let own = tile.world_side(facing, rotation);
            let theirs = neighbour
                .tile
                .world_side(facing.opposite(), neighbour.rotation);
            match (own.is_road(), theirs.is_road()) {
                (true, true) => road_link = true,
                (true, false) | (false, true) => return false,
                (false, false) => {}
            }
        }
        road_link
    }

    /// Empty cells faced by committed road edges
    ///
    /// Borrows the live frontier; commit another tile and the previous
    /// slice is gone, which is exactly how stale it would have been.
    pub fn unconnected_roads(&self) -> &[GridPosition] {
        &self.frontier
    }

    /// Tile occupying the given cell, if any
    pub fn tile_at(&self, position: GridPosition) -> Option<&PlacedTile> {
        self.tiles.get(&position)
    }

    /// Iterate over every committed tile in arbitrary order
    pub fn tiles(&self) -> impl Iterator<Item = &PlacedTile> {
        self.tiles.values()
    }

    /// Number of committed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been committed yet
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The attached renderer
    pub const fn renderer(&self) -> &B {
        &self.renderer
    }

    /// Mutable access to the attached renderer
    pub const fn renderer_mut(&mut self) -> &mut B {
        &mut self.renderer
    }
}

impl<B: TileBatcher> World<B> {
    /// Commit a tile to the grid
    ///
    /// Returns `Ok(false)` when the placement is rejected: the cell is
    /// occupied (forced or not), or the placement fails [`Self::can_place`]
    /// unforced. On success the renderer ingests the tile first, then the
    /// filled cell leaves the frontier and the cells beyond the tile's
    /// road edges join it.
    ///
    /// # Errors
    ///
    /// Returns an error if the renderer fails to ingest the tile; the grid
    /// is left untouched in that case.
    pub fn place(
        &mut self,
        tile: &Tile,
        position: GridPosition,
        rotation: Rotation,
        force: bool,
    ) -> Result<bool> {
        if self.tiles.contains_key(&position) {
            return Ok(false);
        }
        if !force && !self.can_place(tile, position, rotation) {
            return Ok(false);
        }

        let render_handles = self
            .renderer
            .add_tile(tile, position.to_world(), rotation)?;

        self.frontier.retain(|cell| *cell != position);
        for facing in Direction::ALL {
            let ahead = position.neighbour(facing);
            if tile.world_side(facing, rotation).is_road() && !self.tiles.contains_key(&ahead) {
                self.frontier.push(ahead);
            }
        }

        self.tiles.insert(
            position,
            PlacedTile {
                tile: tile.clone(),
                position,
                rotation,
                render_handles,
            },
        );
        Ok(true)
    }
}
