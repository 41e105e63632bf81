//! Transform primitives: placements, quarter-turn rotations, and mirroring

use cgmath::{Matrix4, One, Quaternion, Rad, Rotation3, Vector3};

/// A local transform as position, rotation, and scale
///
/// Lowered to a matrix in translate-rotate-scale order, matching the node
/// composition of the asset authoring pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Translation applied last
    pub position: Vector3<f32>,
    /// Rotation applied after scaling
    pub rotation: Quaternion<f32>,
    /// Per-axis scale applied first
    pub scale: Vector3<f32>,
}

impl Placement {
    /// The identity placement: no translation, rotation, or scaling
    pub fn identity() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::one(),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Lower the placement to a column-vector transform matrix
    #[must_use]
    pub fn to_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(self.position)
            * Matrix4::from(self.rotation)
            * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z)
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Vector3<f32>> for Placement {
    fn from(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }
}

/// Rotation about the vertical axis by the given angle in radians
pub fn yaw(radians: f32) -> Quaternion<f32> {
    Quaternion::from_angle_y(Rad(radians))
}

/// Exact rotation matrix for a number of clockwise quarter turns about +y
///
/// The matrices are integer-valued, so four composed quarter turns return
/// exactly to the identity and edge geometry lands exactly on tile
/// boundaries. One turn carries the north edge (+z) onto the east edge (+x).
#[must_use]
pub const fn quarter_turn(turns: u8) -> Matrix4<f32> {
    match turns % 4 {
        1 => Matrix4::new(
            0.0, 0.0, -1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
        2 => Matrix4::new(
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
        3 => Matrix4::new(
            0.0, 0.0, 1.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
        _ => Matrix4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ),
    }
}

/// Reflection across the yz plane, used for left-handed zone layouts
#[must_use]
pub fn mirror_x() -> Matrix4<f32> {
    Matrix4::from_nonuniform_scale(-1.0, 1.0, 1.0)
}
