//! Growth constants and runtime configuration defaults

// Grid geometry shared by placement and rendering
/// World-space distance between neighbouring tile centres
pub const TILE_SPACING: f32 = 2.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default number of tiles a run grows, seed tile included
pub const DEFAULT_TILE_COUNT: usize = 100;

// Keeps a jammed frontier from spinning forever
/// Candidate placements tried per growth iteration before giving up
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 64;

// Map export settings
/// Edge length in pixels of one tile cell on the exported map
pub const MAP_PIXELS_PER_TILE: u32 = 8;

/// Default path for the exported map image
pub const DEFAULT_OUTPUT_PATH: &str = "city.png";

/// Width of the growth progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
