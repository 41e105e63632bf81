//! Tests for asset registration, lookup, and decoration bucket routing

#[cfg(test)]
mod tests {
    use gridtown::catalog::asset::{
        AssetDefinition, AssetId, Color, DecorationItem, DecorationLookup, DecorationSet,
        LibraryBuilder, RoadAssets, ZoneSize,
    };
    use gridtown::math::transform::Placement;
    use gridtown::world::tile::ZoneKind;

    fn named(name: &str) -> AssetDefinition {
        AssetDefinition {
            name: name.to_owned(),
            parts: Vec::new(),
            palette: Vec::new(),
        }
    }

    fn single_item_set(asset: AssetId) -> DecorationSet {
        DecorationSet {
            items: vec![DecorationItem {
                asset,
                placement: Placement::identity(),
            }],
        }
    }

    // Tests dense id issue order during registration
    // Verified by issuing ids from the wrong end
    #[test]
    fn test_register_issues_sequential_ids() {
        let mut builder = LibraryBuilder::new();

        let first = builder.register(named("slab"));
        let second = builder.register(named("kiosk"));

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert!(first < second);
    }

    // Tests lookup by id and by name once finished
    // Verified by matching on name prefixes
    #[test]
    fn test_lookup_by_id_and_name() {
        let mut builder = LibraryBuilder::new();
        let slab = builder.register(named("slab"));
        let kiosk = builder.register(named("kiosk"));

        let roads = RoadAssets {
            straight: slab,
            bend: slab,
            bend_sidewalk: slab,
            intersection3: slab,
            intersection4: slab,
        };
        let library = builder.finish(
            slab,
            roads,
            DecorationLookup::default(),
            DecorationLookup::default(),
        );

        assert_eq!(library.len(), 2);
        assert!(!library.is_empty());
        assert_eq!(library.asset(kiosk).map(|a| a.name.as_str()), Some("kiosk"));
        assert!(library.asset(AssetId::new(9)).is_none());
        assert_eq!(library.find("kiosk"), Some(kiosk));
        assert_eq!(library.find("fountain"), None);
        assert_eq!(library.base(), slab);
        assert_eq!(library.roads().straight, slab);
    }

    // Tests footprint bucket selection per zone kind
    // Verified by crossing the suburban and commercial tables
    #[test]
    fn test_decorations_route_by_kind_and_size() {
        let mut builder = LibraryBuilder::new();
        let slab = builder.register(named("slab"));
        let house = builder.register(named("house"));
        let shop = builder.register(named("shop"));

        let roads = RoadAssets {
            straight: slab,
            bend: slab,
            bend_sidewalk: slab,
            intersection3: slab,
            intersection4: slab,
        };
        let suburban = DecorationLookup {
            small: Vec::new(),
            medium: vec![single_item_set(house)],
            large: vec![single_item_set(house), single_item_set(house)],
        };
        let commercial = DecorationLookup {
            small: Vec::new(),
            medium: vec![single_item_set(shop)],
            large: Vec::new(),
        };
        let library = builder.finish(slab, roads, suburban, commercial);

        assert!(library.decorations(ZoneKind::Suburban, ZoneSize::Small).is_empty());
        assert_eq!(
            library.decorations(ZoneKind::Suburban, ZoneSize::Medium).len(),
            1
        );
        assert_eq!(
            library.decorations(ZoneKind::Suburban, ZoneSize::Large).len(),
            2
        );
        assert_eq!(
            library.decorations(ZoneKind::Commercial, ZoneSize::Medium).len(),
            1
        );
        assert!(library.decorations(ZoneKind::Commercial, ZoneSize::Large).is_empty());

        let set = library
            .decorations(ZoneKind::Commercial, ZoneSize::Medium)
            .first()
            .unwrap();
        assert_eq!(set.items.first().map(|item| item.asset), Some(shop));
    }

    // Tests the direct bucket accessor on the lookup table
    // Verified by merging the medium and large buckets
    #[test]
    fn test_lookup_get_matches_buckets() {
        let lookup = DecorationLookup {
            small: Vec::new(),
            medium: vec![DecorationSet::default()],
            large: vec![DecorationSet::default(), DecorationSet::default()],
        };

        assert!(lookup.get(ZoneSize::Small).is_empty());
        assert_eq!(lookup.get(ZoneSize::Medium).len(), 1);
        assert_eq!(lookup.get(ZoneSize::Large).len(), 2);
    }

    // Tests colour channel packing at full opacity
    // Verified by dropping the alpha channel
    #[test]
    fn test_color_packs_with_full_alpha() {
        let color = Color::new(0.1, 0.2, 0.3);
        let array = color.to_array();

        assert!((array[0] - 0.1).abs() < f32::EPSILON);
        assert!((array[1] - 0.2).abs() < f32::EPSILON);
        assert!((array[2] - 0.3).abs() < f32::EPSILON);
        assert!((array[3] - 1.0).abs() < f32::EPSILON);
    }
}
