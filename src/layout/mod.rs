//! Tile dressing, from edge descriptions to concrete asset placements

/// Zone footprint classification from flanking roads
pub mod footprint;
/// Resolution of placed tiles into asset placements
pub mod resolver;
