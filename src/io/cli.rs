//! Command-line interface for growing a city and exporting its map

use crate::catalog::presets::default_library;
use crate::growth::{GrowthConfig, GrowthEngine};
use crate::io::configuration::{
    DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_OUTPUT_PATH, DEFAULT_SEED, DEFAULT_TILE_COUNT,
    MAP_PIXELS_PER_TILE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_city_map;
use crate::io::progress::ProgressManager;
use crate::render::Chunk;
use crate::world::World;
use crate::world::grid::TileBatcher;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gridtown")]
#[command(
    author,
    version,
    about = "Grow a procedural city from edge-matched tiles"
)]
/// Command-line arguments for the city growth tool
pub struct Cli {
    /// Output PNG file for the city map
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of tiles to grow, seed tile included
    #[arg(short, long, default_value_t = DEFAULT_TILE_COUNT)]
    pub tiles: usize,

    /// Candidate placements tried per iteration before giving up
    #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_PLACEMENT_ATTEMPTS)]
    pub attempts: usize,

    /// Edge length in pixels of one tile cell on the map
    #[arg(short = 'p', long, default_value_t = MAP_PIXELS_PER_TILE)]
    pub pixels_per_tile: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output file if it exists
    #[arg(short, long)]
    pub overwrite: bool,
}

impl Cli {
    /// Check if an existing output file should be kept
    pub const fn skip_existing(&self) -> bool {
        !self.overwrite
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a growth run from CLI arguments to exported map
pub struct CityBuilder {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CityBuilder {
    /// Create a new builder with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.tiles));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Grow the city and export its map
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails, growth jams before
    /// reaching the target, or the map cannot be written
    pub fn process(&mut self) -> Result<()> {
        if self.cli.tiles == 0 {
            return Err(invalid_parameter(
                "tiles",
                &self.cli.tiles,
                &"at least the seed tile is required",
            ));
        }

        if !self.should_write_output() {
            return Ok(());
        }

        let start_time = Instant::now();
        let chunk = Chunk::new(default_library(), self.cli.seed);
        let world = World::new(chunk);
        let config = GrowthConfig {
            seed: self.cli.seed,
            target_tiles: self.cli.tiles,
            max_placement_attempts: self.cli.attempts,
        };
        let mut engine = GrowthEngine::new(world, config);

        engine.place_seed_tile()?;
        engine.world_mut().renderer_mut().build();
        self.report_progress(&engine);

        while engine.world().len() < self.cli.tiles {
            engine.run_iteration()?;
            engine.world_mut().renderer_mut().build();
            self.report_progress(&engine);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let world = engine.into_world();
        export_city_map(&world, &self.cli.output, self.cli.pixels_per_tile)?;

        log::info!(
            "grew {} tiles into {} batches in {:.2?}",
            world.len(),
            world.renderer().batches().len(),
            start_time.elapsed()
        );

        Ok(())
    }

    fn report_progress(&self, engine: &GrowthEngine<Chunk>) {
        if let Some(ref pm) = self.progress_manager {
            pm.update(
                engine.world().len(),
                engine.world().unconnected_roads().len(),
            );
        }
    }

    fn should_write_output(&self) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if self.cli.output.exists() {
            // Allow print for user feedback when skipping work
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", self.cli.output.display());
            }
            false
        } else {
            true
        }
    }
}
