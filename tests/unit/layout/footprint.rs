//! Tests for zone footprint classification from flanking roads

#[cfg(test)]
mod tests {
    use gridtown::catalog::asset::ZoneSize;
    use gridtown::layout::footprint::{Orientation, classify_side, side_is_road};
    use gridtown::world::tile::Edge;

    const ROAD: Edge = Edge::road(0, 0);
    const ZONE: Edge = Edge::suburban(0);

    // Tests the four flanking-road combinations for one side
    // Verified by swapping the left and right flank lookups
    #[test]
    fn test_classify_side_covers_all_flank_combinations() {
        // Roads on both flanks of the north side
        let both = classify_side(&[ZONE, ROAD, ZONE, ROAD], 0);
        assert_eq!(both.size, ZoneSize::Large);
        assert_eq!(both.orientation, Orientation::Right);

        // Road on the left flank only
        let left_only = classify_side(&[ZONE, ZONE, ZONE, ROAD], 0);
        assert_eq!(left_only.size, ZoneSize::Medium);
        assert_eq!(left_only.orientation, Orientation::Right);

        // Road on the right flank only mirrors the layout
        let right_only = classify_side(&[ZONE, ROAD, ZONE, ZONE], 0);
        assert_eq!(right_only.size, ZoneSize::Medium);
        assert_eq!(right_only.orientation, Orientation::Left);

        // No flanking road at all
        let neither = classify_side(&[ZONE, ZONE, ROAD, ZONE], 0);
        assert_eq!(neither.size, ZoneSize::Small);
        assert_eq!(neither.orientation, Orientation::Right);
    }

    // Tests classification of a side other than north
    // Verified by dropping the wrap in the flank indices
    #[test]
    fn test_classify_side_wraps_around_the_tile() {
        // For the west side the left flank is south and the right flank north
        let north_access = classify_side(&[ROAD, ZONE, ZONE, ZONE], 3);
        assert_eq!(north_access.size, ZoneSize::Medium);
        assert_eq!(north_access.orientation, Orientation::Left);

        let south_access = classify_side(&[ZONE, ZONE, ROAD, ZONE], 3);
        assert_eq!(south_access.size, ZoneSize::Medium);
        assert_eq!(south_access.orientation, Orientation::Right);
    }

    // Tests the mirrored flag derivation
    // Verified by mirroring right-facing layouts
    #[test]
    fn test_only_left_layouts_mirror() {
        let left = classify_side(&[ZONE, ROAD, ZONE, ZONE], 0);
        assert!(left.mirrored());

        let right = classify_side(&[ZONE, ZONE, ZONE, ROAD], 0);
        assert!(!right.mirrored());
    }

    // Tests the wrapping road lookup
    // Verified by letting out-of-range indices read the first side
    #[test]
    fn test_side_is_road_wraps_modulo_four() {
        let sides = [ROAD, ZONE, ZONE, ZONE];

        assert!(side_is_road(&sides, 0));
        assert!(side_is_road(&sides, 4));
        assert!(!side_is_road(&sides, 1));
        assert!(!side_is_road(&sides, 5));
    }
}
