//! Instanced geometry batches
//!
//! Mirrors the shape instanced GPU drawing wants: one batch per asset
//! and winding order, one raw-instance list per mesh part, with pending
//! entries packed into draw-ready buffers when the scene is built.

use crate::catalog::asset::{AssetDefinition, AssetId, Color, MeshPart};
use crate::io::error::{Result, computation_error};
use crate::math::aabb::Aabb;
use cgmath::{Matrix4, SquareMatrix};
use rand::Rng;

/// Triangle winding order a batch draws its instances with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    /// Faces as authored
    Standard,
    /// Faces flipped, for instances with a mirror baked in
    Reversed,
}

/// Identity of one instance batch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BatchKey {
    /// Catalog asset the batch instances
    pub asset: AssetId,
    /// Winding order of the batch's shared material
    pub winding: Winding,
}

/// Lifecycle of a batch's instance data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchState {
    /// Created but no instance accepted yet
    Uninitialized,
    /// Holds instances that have not been packed yet
    Populated,
    /// Every accepted instance is packed and the bounds are current
    Flushed,
}

/// One instance record as the draw buffer stores it
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
pub struct RawInstance {
    /// Column-major model matrix, part bake conjugation applied
    pub model: [[f32; 4]; 4],
    /// Linear RGBA colour uniform for the part
    pub color: [f32; 4],
}

/// Per-part instance data within a batch
///
/// Every instance of the batch lands in every part at the same index,
/// so one handle addresses the whole asset.
#[derive(Clone, Debug)]
pub struct InstancedPart {
    part: MeshPart,
    bake_inverse: Matrix4<f32>,
    pending: Vec<RawInstance>,
    buffer: Vec<RawInstance>,
}

impl InstancedPart {
    fn push(&mut self, placement: Matrix4<f32>, color: Color) {
        // Conjugate by the bake so the stored matrix moves baked-space
        // vertices straight to the world
        let model = self.bake_inverse * placement * self.part.bake;
        self.pending.push(RawInstance {
            model: model.into(),
            color: color.to_array(),
        });
    }

    fn flush(&mut self) {
        self.buffer.append(&mut self.pending);
    }

    /// Catalog part this list instances
    pub const fn part(&self) -> &MeshPart {
        &self.part
    }

    /// Packed entries from previous builds
    pub fn buffer(&self) -> &[RawInstance] {
        &self.buffer
    }

    /// Entries accepted since the last build
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// World-space extent of the packed entries
    pub fn extent(&self) -> Aabb {
        let mut total = Aabb::empty();
        for raw in &self.buffer {
            let model = Matrix4::from(raw.model);
            let world = self.part.bake * model;
            total = total.union(&self.part.bounds.transformed(&world));
        }
        total
    }
}

/// All instances of one asset drawn with one material
#[derive(Clone, Debug)]
pub struct InstanceBatch {
    key: BatchKey,
    palette: Vec<Color>,
    parts: Vec<InstancedPart>,
    state: BatchState,
    bounds: Aabb,
    count: usize,
}

impl InstanceBatch {
    /// Create an empty batch for the given asset definition
    ///
    /// # Errors
    ///
    /// Returns [`crate::io::error::CityError::Computation`] when a mesh
    /// part's bake transform has no inverse.
    pub fn for_asset(key: BatchKey, definition: &AssetDefinition) -> Result<Self> {
        let mut parts = Vec::with_capacity(definition.parts.len());
        for part in &definition.parts {
            let bake_inverse = part.bake.invert().ok_or_else(|| {
                computation_error(
                    "bake inversion",
                    &format!(
                        "mesh part '{}' of asset '{}' has a singular bake transform",
                        part.name, definition.name
                    ),
                )
            })?;
            parts.push(InstancedPart {
                part: part.clone(),
                bake_inverse,
                pending: Vec::new(),
                buffer: Vec::new(),
            });
        }
        Ok(Self {
            key,
            palette: definition.palette.clone(),
            parts,
            state: BatchState::Uninitialized,
            bounds: Aabb::empty(),
            count: 0,
        })
    }

    /// Accept one instance at the given world placement
    ///
    /// Adds an entry to every part, colouring each with a fresh palette
    /// draw when the asset has a palette and the part default otherwise.
    /// Returns the instance's index within the batch.
    pub fn push_instance<R: Rng>(&mut self, placement: Matrix4<f32>, rng: &mut R) -> usize {
        let index = self.count;
        for list in &mut self.parts {
            let color = pick_color(&self.palette, list.part.default_color, rng);
            list.push(placement, color);
        }
        self.count += 1;
        self.state = BatchState::Populated;
        index
    }

    /// Pack pending entries and refresh the batch bounds
    ///
    /// A batch that never accepted an instance stays uninitialized.
    pub fn build(&mut self) {
        if self.state == BatchState::Uninitialized {
            return;
        }
        let mut bounds = Aabb::empty();
        for part in &mut self.parts {
            part.flush();
            bounds = bounds.union(&part.extent());
        }
        self.bounds = bounds;
        self.state = BatchState::Flushed;
    }

    /// Identity of the batch
    pub const fn key(&self) -> BatchKey {
        self.key
    }

    /// Where the batch sits in its lifecycle
    pub const fn state(&self) -> BatchState {
        self.state
    }

    /// Whether entries are waiting to be packed
    pub const fn is_dirty(&self) -> bool {
        matches!(self.state, BatchState::Populated)
    }

    /// World-space extent as of the last build
    pub const fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Instances accepted so far, packed or pending
    pub const fn instance_count(&self) -> usize {
        self.count
    }

    /// Per-part instance lists
    pub fn parts(&self) -> &[InstancedPart] {
        &self.parts
    }
}

fn pick_color<R: Rng>(palette: &[Color], fallback: Color, rng: &mut R) -> Color {
    if palette.is_empty() {
        return fallback;
    }
    palette
        .get(rng.random_range(0..palette.len()))
        .copied()
        .unwrap_or(fallback)
}
