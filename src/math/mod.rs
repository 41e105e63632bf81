//! Geometric primitives shared by the resolver and renderer

/// Axis-aligned bounding boxes for batch extents
pub mod aabb;
/// Placement lowering, quarter-turn rotations, and mirroring
pub mod transform;
