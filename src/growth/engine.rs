//! Frontier-driven growth loop

use crate::growth::generator::random_tile;
use crate::io::configuration::{DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_SEED, DEFAULT_TILE_COUNT};
use crate::io::error::{CityError, ErrorContext, Result, WithContext, invalid_parameter};
use crate::world::World;
use crate::world::direction::Rotation;
use crate::world::grid::{GridPosition, TileBatcher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tuning for a growth run
#[derive(Clone, Copy, Debug)]
pub struct GrowthConfig {
    /// Seed driving tile drawing and frontier selection
    pub seed: u64,
    /// Number of tiles the run tries to reach, seed tile included
    pub target_tiles: usize,
    /// Candidate placements tried per iteration before giving up
    pub max_placement_attempts: usize,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            target_tiles: DEFAULT_TILE_COUNT,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

/// Incremental city growth over a tile world
///
/// Each iteration draws a random tile, aims it at a random frontier
/// cell, and tries all four rotations before drawing again. The run
/// fails once an iteration exhausts its candidate budget.
pub struct GrowthEngine<B> {
    world: World<B>,
    config: GrowthConfig,
    rng: StdRng,
    iteration: usize,
}

impl<B: TileBatcher> GrowthEngine<B> {
    /// Wrap a world for growing under the given configuration
    pub fn new(world: World<B>, config: GrowthConfig) -> Self {
        Self {
            world,
            config,
            rng: StdRng::seed_from_u64(config.seed),
            iteration: 0,
        }
    }

    /// Force the first tile onto the origin of an empty world
    ///
    /// # Errors
    ///
    /// Returns an error when the world already holds tiles, or when the
    /// renderer rejects the seed tile.
    pub fn place_seed_tile(&mut self) -> Result<GridPosition> {
        if !self.world.is_empty() {
            return Err(invalid_parameter(
                "world",
                &self.world.len(),
                &"seed tile requires an empty world",
            ));
        }
        let tile = random_tile(&mut self.rng);
        self.world
            .place(&tile, GridPosition::ORIGIN, Rotation::NONE, true)?;
        log::debug!("seed tile placed at {}", GridPosition::ORIGIN);
        Ok(GridPosition::ORIGIN)
    }

    /// Grow the city by one tile
    ///
    /// # Errors
    ///
    /// Returns [`CityError::NoViablePlacement`] when the candidate
    /// budget runs out or the frontier is empty, and propagates renderer
    /// failures from accepted placements.
    pub fn run_iteration(&mut self) -> Result<GridPosition> {
        self.iteration += 1;
        let mut attempts = 0;

        while attempts < self.config.max_placement_attempts {
            let frontier = self.world.unconnected_roads();
            if frontier.is_empty() {
                break;
            }
            let pick = self.rng.random_range(0..frontier.len());
            let Some(position) = frontier.get(pick).copied() else {
                break;
            };
            attempts += 1;

            let tile = random_tile(&mut self.rng);
            for rotation in Rotation::ALL {
                let placed = self
                    .world
                    .place(&tile, position, rotation, false)
                    .with_context(ErrorContext {
                        iteration: Some(self.iteration),
                        position: Some([position.x, position.y]),
                        ..Default::default()
                    })?;
                if placed {
                    log::debug!("iteration {}: placed tile at {position}", self.iteration);
                    return Ok(position);
                }
            }
        }

        Err(CityError::NoViablePlacement {
            iteration: self.iteration,
            attempts,
        })
    }

    /// Run until the world holds the configured number of tiles
    ///
    /// Seeds the world first when it is empty. Returns the tile count
    /// reached.
    ///
    /// # Errors
    ///
    /// Propagates the first seeding or iteration failure.
    pub fn grow(&mut self) -> Result<usize> {
        if self.world.is_empty() {
            self.place_seed_tile()?;
        }
        while self.world.len() < self.config.target_tiles {
            self.run_iteration()?;
        }
        Ok(self.world.len())
    }

    /// The world being grown
    pub const fn world(&self) -> &World<B> {
        &self.world
    }

    /// Mutable access to the world being grown
    pub const fn world_mut(&mut self) -> &mut World<B> {
        &mut self.world
    }

    /// Give the world back, consuming the engine
    pub fn into_world(self) -> World<B> {
        self.world
    }

    /// Growth iterations attempted so far
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    /// Configuration the engine runs under
    pub const fn config(&self) -> GrowthConfig {
        self.config
    }
}
