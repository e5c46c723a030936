// Math type aliases shared across the document model.
//
// glTF transfers all geometry numerics as IEEE-754 floats; the model keeps
// them in fixed-size arrays instead of pulling in a linear algebra crate.
// Matrices are column-major, as on the wire.

/// Three-component vector (x, y, z).
pub type Vec3 = [f32; 3];

/// Four-component vector (x, y, z, w).
pub type Vec4 = [f32; 4];

/// Rotation quaternion (x, y, z, w).
pub type Quat = [f32; 4];

/// 4x4 matrix in column-major order.
pub type Mat4 = [f32; 16];

/// Column-major 4x4 identity matrix.
pub const MAT4_IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];
