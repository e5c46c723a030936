// Scene-graph nodes and their local transforms.

use std::fmt;

use crate::types::{Mat4, Quat, Vec3, MAT4_IDENTITY};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Node {
    pub transform: Transform,
    /// Child node indices.
    pub children: Vec<usize>,
    pub camera: Option<usize>,
    pub skin: Option<usize>,
    pub mesh: Option<usize>,
    pub name: Option<String>,
}

/// Local transform of a node.
///
/// glTF allows either a whole matrix or a decomposed
/// translation/rotation/scale triple on a node, never both. A node that
/// declares neither carries the identity matrix.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Column-major transform matrix.
    Matrix(Mat4),
    /// Decomposed transform, applied as scale, then rotation, then
    /// translation.
    Decomposed {
        translation: Vec3,
        rotation: Quat,
        scale: Vec3,
    },
}

impl Transform {
    /// Default for an omitted `translation` field.
    pub const DEFAULT_TRANSLATION: Vec3 = [0.0, 0.0, 0.0];

    /// Default for an omitted `rotation` field (identity quaternion).
    pub const DEFAULT_ROTATION: Quat = [0.0, 0.0, 0.0, 1.0];

    /// Default for an omitted `scale` field.
    pub const DEFAULT_SCALE: Vec3 = [1.0, 1.0, 1.0];

    /// Composes the transform into a single column-major matrix
    /// (`T * R * S` for the decomposed form).
    pub fn to_matrix(&self) -> Mat4 {
        match self {
            Transform::Matrix(m) => *m,
            Transform::Decomposed {
                translation,
                rotation,
                scale,
            } => {
                let [x, y, z, w] = *rotation;
                let [sx, sy, sz] = *scale;
                let (x2, y2, z2) = (x + x, y + y, z + z);
                let (xx, yy, zz) = (x * x2, y * y2, z * z2);
                let (xy, xz, yz) = (x * y2, x * z2, y * z2);
                let (wx, wy, wz) = (w * x2, w * y2, w * z2);
                [
                    (1.0 - (yy + zz)) * sx,
                    (xy + wz) * sx,
                    (xz - wy) * sx,
                    0.0,
                    (xy - wz) * sy,
                    (1.0 - (xx + zz)) * sy,
                    (yz + wx) * sy,
                    0.0,
                    (xz + wy) * sz,
                    (yz - wx) * sz,
                    (1.0 - (xx + yy)) * sz,
                    0.0,
                    translation[0],
                    translation[1],
                    translation[2],
                    1.0,
                ]
            }
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::Matrix(MAT4_IDENTITY)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Matrix(m) => write!(f, "matrix {m:?}"),
            Transform::Decomposed {
                translation,
                rotation,
                scale,
            } => write!(
                f,
                "translation {translation:?}, rotation {rotation:?}, scale {scale:?}"
            ),
        }
    }
}
