//! Asset registry data model: parts, palettes, roads, and decoration sets

use crate::math::aabb::Aabb;
use crate::math::transform::Placement;
use crate::world::tile::ZoneKind;
use cgmath::Matrix4;

/// Linear RGB colour applied to instanced geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel, 0 through 1
    pub r: f32,
    /// Green channel, 0 through 1
    pub g: f32,
    /// Blue channel, 0 through 1
    pub b: f32,
}

impl Color {
    /// Create a colour from linear channel values
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// The colour as an RGBA array at full opacity
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Dense index of an asset inside its library
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(usize);

impl AssetId {
    /// Create an asset id from its dense index
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Dense index of the asset
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One mesh of a multi-part asset
///
/// The bake matrix is the local transform the authoring pipeline burned
/// into the part; instancing must account for it or the offset applies
/// twice.
#[derive(Clone, Debug)]
pub struct MeshPart {
    /// Part name, unique within the asset
    pub name: String,
    /// Local transform baked into the part geometry
    pub bake: Matrix4<f32>,
    /// Colour used when the owning asset has no palette
    pub default_color: Color,
    /// Bounds of the part geometry in part-local space
    pub bounds: Aabb,
}

/// A renderable asset: its mesh parts plus an optional colour palette
#[derive(Clone, Debug)]
pub struct AssetDefinition {
    /// Asset name, unique within the library
    pub name: String,
    /// Parts instanced together for every placement
    pub parts: Vec<MeshPart>,
    /// Colours drawn per part per instance; empty falls back to part defaults
    pub palette: Vec<Color>,
}

/// Road assets keyed by the tile role they fill
#[derive(Clone, Copy, Debug)]
pub struct RoadAssets {
    /// Straight segment, used along sides and for through-centres
    pub straight: AssetId,
    /// Plain corner piece
    pub bend: AssetId,
    /// Corner piece with sidewalk trim, used for corner centres
    pub bend_sidewalk: AssetId,
    /// Three-way intersection centre
    pub intersection3: AssetId,
    /// Four-way intersection centre
    pub intersection4: AssetId,
}

/// Ground footprint available to a zone side
///
/// Classified from the two sides flanking the zone within its own tile:
/// road access on both flanks leaves the largest developable lot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneSize {
    /// No road on either flanking side
    Small,
    /// Road on exactly one flanking side
    Medium,
    /// Roads on both flanking sides
    Large,
}

/// One asset placed inside a decoration set
#[derive(Clone, Debug)]
pub struct DecorationItem {
    /// Asset to instance
    pub asset: AssetId,
    /// Placement within the side-local frame
    pub placement: Placement,
}

/// A group of assets laid out together on one zone side
#[derive(Clone, Debug, Default)]
pub struct DecorationSet {
    /// Items instanced when the set is chosen
    pub items: Vec<DecorationItem>,
}

/// Decoration sets bucketed by available footprint
///
/// Buckets may be empty; a side whose bucket holds no sets simply stays
/// undecorated.
#[derive(Clone, Debug, Default)]
pub struct DecorationLookup {
    /// Sets for sides without road access
    pub small: Vec<DecorationSet>,
    /// Sets for sides with road access on one flank
    pub medium: Vec<DecorationSet>,
    /// Sets for sides with road access on both flanks
    pub large: Vec<DecorationSet>,
}

impl DecorationLookup {
    /// Sets available for the given footprint
    pub fn get(&self, size: ZoneSize) -> &[DecorationSet] {
        match size {
            ZoneSize::Small => &self.small,
            ZoneSize::Medium => &self.medium,
            ZoneSize::Large => &self.large,
        }
    }
}

/// Issues asset ids and assembles an [`AssetLibrary`]
#[derive(Debug, Default)]
pub struct LibraryBuilder {
    assets: Vec<AssetDefinition>,
}

impl LibraryBuilder {
    /// Create an empty builder
    pub const fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Register an asset and return its id
    pub fn register(&mut self, asset: AssetDefinition) -> AssetId {
        let id = AssetId::new(self.assets.len());
        self.assets.push(asset);
        id
    }

    /// Bind registered assets to their roles and finish the library
    pub fn finish(
        self,
        base: AssetId,
        roads: RoadAssets,
        suburban: DecorationLookup,
        commercial: DecorationLookup,
    ) -> AssetLibrary {
        AssetLibrary {
            assets: self.assets,
            base,
            roads,
            suburban,
            commercial,
        }
    }
}

/// Immutable asset library consulted by the resolver and renderer
#[derive(Clone, Debug)]
pub struct AssetLibrary {
    assets: Vec<AssetDefinition>,
    base: AssetId,
    roads: RoadAssets,
    suburban: DecorationLookup,
    commercial: DecorationLookup,
}

impl AssetLibrary {
    /// Definition behind an asset id
    pub fn asset(&self, id: AssetId) -> Option<&AssetDefinition> {
        self.assets.get(id.index())
    }

    /// Look an asset up by name
    pub fn find(&self, name: &str) -> Option<AssetId> {
        self.assets
            .iter()
            .position(|asset| asset.name == name)
            .map(AssetId::new)
    }

    /// Ground slab asset shared by every tile
    pub const fn base(&self) -> AssetId {
        self.base
    }

    /// Road assets by tile role
    pub const fn roads(&self) -> RoadAssets {
        self.roads
    }

    /// Decoration sets for a zone kind and footprint
    pub fn decorations(&self, kind: ZoneKind, size: ZoneSize) -> &[DecorationSet] {
        match kind {
            ZoneKind::Suburban => self.suburban.get(size),
            ZoneKind::Commercial => self.commercial.get(size),
        }
    }

    /// Number of registered assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether the library holds no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
