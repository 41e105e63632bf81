//! Cardinal directions and quarter-turn rotations on the tile grid

/// The four cardinal directions in tile side order
///
/// Side order is north, east, south, west. North faces +z and east faces +x,
/// so grid coordinates grow eastward in `x` and northward in `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward +z, side index 0
    North,
    /// Toward +x, side index 1
    East,
    /// Toward -z, side index 2
    South,
    /// Toward -x, side index 3
    West,
}

impl Direction {
    /// Every direction in side order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Side index of this direction
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Direction for a side index, wrapping modulo four
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::North,
            1 => Self::East,
            2 => Self::South,
            _ => Self::West,
        }
    }

    /// The direction pointing the opposite way
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Grid offset of the adjacent cell in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::East => (1, 0),
            Self::South => (0, -1),
            Self::West => (-1, 0),
        }
    }

    /// Where this local side faces once the tile is rotated
    pub const fn rotated_by(self, rotation: Rotation) -> Self {
        Self::from_index(self.index() + rotation.turns() as usize)
    }

    /// Which local side faces this world direction once the tile is rotated
    pub const fn unrotated_by(self, rotation: Rotation) -> Self {
        Self::from_index(self.index() + 4 - rotation.turns() as usize)
    }
}

/// Tile orientation as clockwise quarter turns, viewed from above
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    /// The unrotated orientation
    pub const NONE: Self = Self(0);

    /// Every orientation in increasing turn order
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Create a rotation from a quarter-turn count, wrapping modulo four
    pub const fn new(turns: u8) -> Self {
        Self(turns % 4)
    }

    /// Number of clockwise quarter turns, 0 through 3
    pub const fn turns(self) -> u8 {
        self.0
    }
}
