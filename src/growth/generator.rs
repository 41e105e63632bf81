//! Random tile generation

use crate::world::tile::{Edge, Tile};
use rand::Rng;

/// Draw a random tile
///
/// Half the tiles carry two roads and half carry three, dealt onto
/// distinct sides by rejection. Every remaining side becomes suburban
/// or commercial with equal probability, so a drawn tile never has an
/// empty side.
pub fn random_tile<R: Rng>(rng: &mut R) -> Tile {
    let roads = if rng.random::<f64>() <= 0.5 { 2 } else { 3 };
    let mut sides = [Edge::Empty; 4];

    for _ in 0..roads {
        let mut slot = rng.random_range(0..sides.len());
        while sides.get(slot).copied().is_some_and(Edge::is_road) {
            slot = rng.random_range(0..sides.len());
        }
        if let Some(side) = sides.get_mut(slot) {
            *side = Edge::road(0, 0);
        }
    }

    for side in &mut sides {
        if matches!(side, Edge::Empty) {
            *side = if rng.random::<f64>() <= 0.5 {
                Edge::suburban(0)
            } else {
                Edge::commercial(0)
            };
        }
    }

    Tile::new(sides)
}
