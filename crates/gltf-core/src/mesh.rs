// Meshes, primitives and their attribute maps.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub primitives: Vec<Primitive>,
    /// Morph target weights, loaded verbatim. Targets themselves are not
    /// resolved.
    pub weights: Vec<f32>,
    pub name: Option<String>,
}

/// One drawable part of a mesh.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Primitive {
    /// Semantic name (`POSITION`, `NORMAL`, `TEXCOORD_0`, ...) to accessor
    /// index.
    pub attributes: HashMap<String, usize>,
    /// Accessor holding vertex indices, `None` for non-indexed geometry.
    pub indices: Option<usize>,
    pub material: Option<usize>,
    pub mode: PrimitiveMode,
}

/// Primitive topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
    /// Mode code outside the glTF 2.0 set, preserved as read.
    Unknown(u32),
}

impl PrimitiveMode {
    pub fn from_gl(code: u32) -> Self {
        match code {
            0 => PrimitiveMode::Points,
            1 => PrimitiveMode::Lines,
            2 => PrimitiveMode::LineLoop,
            3 => PrimitiveMode::LineStrip,
            4 => PrimitiveMode::Triangles,
            5 => PrimitiveMode::TriangleStrip,
            6 => PrimitiveMode::TriangleFan,
            other => PrimitiveMode::Unknown(other),
        }
    }
}

impl Default for PrimitiveMode {
    fn default() -> Self {
        PrimitiveMode::Triangles
    }
}

impl fmt::Display for PrimitiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveMode::Points => f.write_str("Points"),
            PrimitiveMode::Lines => f.write_str("Lines"),
            PrimitiveMode::LineLoop => f.write_str("Line Loop"),
            PrimitiveMode::LineStrip => f.write_str("Line Strip"),
            PrimitiveMode::Triangles => f.write_str("Triangles"),
            PrimitiveMode::TriangleStrip => f.write_str("Triangle Strip"),
            PrimitiveMode::TriangleFan => f.write_str("Triangle Fan"),
            PrimitiveMode::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}
