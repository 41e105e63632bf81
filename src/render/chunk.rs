//! Scene chunk collecting tile geometry into instance batches

use crate::catalog::asset::AssetLibrary;
use crate::io::error::{CityError, Result, computation_error};
use crate::layout::resolver::resolve_tile;
use crate::math::aabb::Aabb;
use crate::math::transform::quarter_turn;
use crate::render::batch::{BatchKey, InstanceBatch, Winding};
use crate::world::direction::Rotation;
use crate::world::grid::{BatchId, InstanceHandle, TileBatcher};
use crate::world::tile::Tile;
use cgmath::{Matrix4, Vector3};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Batch store for one stretch of city
///
/// Owns every instance batch the placed tiles have produced. Batches
/// are created the first time an asset and winding pair is seen and
/// live for the life of the chunk; tiles only ever append instances.
#[derive(Debug)]
pub struct Chunk {
    library: AssetLibrary,
    batches: Vec<InstanceBatch>,
    index: HashMap<BatchKey, BatchId>,
    rng: StdRng,
}

impl Chunk {
    /// Create an empty chunk drawing from the given catalog
    ///
    /// The seed drives decoration set selection and palette draws, so
    /// equal seeds dress equal tile sequences identically.
    #[must_use]
    pub fn new(library: AssetLibrary, seed: u64) -> Self {
        Self {
            library,
            batches: Vec::new(),
            index: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn batch_for(&mut self, key: BatchKey) -> Result<BatchId> {
        if let Some(id) = self.index.get(&key) {
            return Ok(*id);
        }
        let definition = self
            .library
            .asset(key.asset)
            .ok_or(CityError::UnknownAsset {
                index: key.asset.index(),
                catalog_size: self.library.len(),
            })?;
        log::debug!(
            "new batch for asset '{}' with {:?} winding",
            definition.name,
            key.winding
        );
        let id = BatchId::new(self.batches.len());
        self.batches.push(InstanceBatch::for_asset(key, definition)?);
        self.index.insert(key, id);
        Ok(id)
    }

    fn push(&mut self, key: BatchKey, placement: Matrix4<f32>) -> Result<InstanceHandle> {
        let batch_id = self.batch_for(key)?;
        let Some(batch) = self.batches.get_mut(batch_id.index()) else {
            return Err(computation_error(
                "batch lookup",
                &"batch table out of step with its index",
            ));
        };
        let index = batch.push_instance(placement, &mut self.rng);
        Ok(InstanceHandle {
            batch: batch_id,
            index,
        })
    }

    /// Every batch the chunk has created, in creation order
    pub fn batches(&self) -> &[InstanceBatch] {
        &self.batches
    }

    /// The batch behind a handle's batch id, if it exists
    pub fn batch(&self, id: BatchId) -> Option<&InstanceBatch> {
        self.batches.get(id.index())
    }

    /// Look up the batch id for an asset and winding pair
    pub fn batch_id(&self, key: BatchKey) -> Option<BatchId> {
        self.index.get(&key).copied()
    }

    /// Catalog the chunk draws from
    pub const fn library(&self) -> &AssetLibrary {
        &self.library
    }

    /// Union of every batch's extent as of the last build
    pub fn bounds(&self) -> Aabb {
        self.batches
            .iter()
            .fold(Aabb::empty(), |total, batch| total.union(&batch.bounds()))
    }
}

impl TileBatcher for Chunk {
    fn add_tile(
        &mut self,
        tile: &Tile,
        world_position: Vector3<f32>,
        rotation: Rotation,
    ) -> Result<Vec<InstanceHandle>> {
        let world = Matrix4::from_translation(world_position);
        let mut handles = Vec::new();

        // Shared ground slab under every tile, carrying the grid rotation
        let base = BatchKey {
            asset: self.library.base(),
            winding: Winding::Standard,
        };
        handles.push(self.push(base, world * quarter_turn(rotation.turns()))?);

        // Resolver output already carries the grid rotation
        let placements = resolve_tile(&self.library, tile, rotation, &mut self.rng);
        for placement in placements {
            let winding = if placement.mirrored {
                Winding::Reversed
            } else {
                Winding::Standard
            };
            let key = BatchKey {
                asset: placement.asset,
                winding,
            };
            handles.push(self.push(key, world * placement.transform)?);
        }
        Ok(handles)
    }

    fn build(&mut self) {
        for batch in &mut self.batches {
            if batch.is_dirty() {
                batch.build();
            }
        }
    }
}
