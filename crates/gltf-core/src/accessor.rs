// Accessors describe typed element runs inside buffer views.

use std::fmt;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Accessor {
    /// View supplying the bytes. `None` reads as all zeros.
    pub buffer_view: Option<usize>,
    /// Offset into the view, in bytes.
    pub byte_offset: usize,
    /// Number of elements (not bytes, not components).
    pub count: usize,
    pub component_type: ComponentType,
    /// Element shape (JSON key `type`).
    pub element_type: AccessorType,
    pub normalized: bool,
    /// Declared per-component minima. Length is not validated against the
    /// element shape.
    pub min: Vec<f32>,
    /// Declared per-component maxima.
    pub max: Vec<f32>,
    pub name: Option<String>,
}

impl Accessor {
    /// Size of one whole element in bytes, `None` when the component type
    /// is not a known glTF 2.0 code.
    pub fn element_byte_length(&self) -> Option<usize> {
        Some(self.component_type.byte_length()? * self.element_type.component_count())
    }
}

/// Numeric type of one component, from the GL wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Int8,    // 5120
    Uint8,   // 5121
    Int16,   // 5122
    Uint16,  // 5123
    Uint32,  // 5125
    Float32, // 5126
    /// Code outside the glTF 2.0 set, preserved as read. Accessors with an
    /// unknown component type load fine but cannot supply data.
    Unknown(u32),
}

impl ComponentType {
    pub fn from_gl(code: u32) -> Self {
        match code {
            5120 => ComponentType::Int8,
            5121 => ComponentType::Uint8,
            5122 => ComponentType::Int16,
            5123 => ComponentType::Uint16,
            5125 => ComponentType::Uint32,
            5126 => ComponentType::Float32,
            other => ComponentType::Unknown(other),
        }
    }

    /// Size of one component in bytes, `None` for unknown codes.
    pub fn byte_length(&self) -> Option<usize> {
        match self {
            ComponentType::Int8 | ComponentType::Uint8 => Some(1),
            ComponentType::Int16 | ComponentType::Uint16 => Some(2),
            ComponentType::Uint32 | ComponentType::Float32 => Some(4),
            ComponentType::Unknown(_) => None,
        }
    }
}

impl Default for ComponentType {
    fn default() -> Self {
        ComponentType::Float32
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Int8 => f.write_str("Byte"),
            ComponentType::Uint8 => f.write_str("Unsigned Byte"),
            ComponentType::Int16 => f.write_str("Short"),
            ComponentType::Uint16 => f.write_str("Unsigned Short"),
            ComponentType::Uint32 => f.write_str("Unsigned Int"),
            ComponentType::Float32 => f.write_str("Float"),
            ComponentType::Unknown(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Element shape of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl AccessorType {
    /// Parses the JSON `type` tag. Anything outside the seven glTF 2.0
    /// tags is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "SCALAR" => Some(AccessorType::Scalar),
            "VEC2" => Some(AccessorType::Vec2),
            "VEC3" => Some(AccessorType::Vec3),
            "VEC4" => Some(AccessorType::Vec4),
            "MAT2" => Some(AccessorType::Mat2),
            "MAT3" => Some(AccessorType::Mat3),
            "MAT4" => Some(AccessorType::Mat4),
            _ => None,
        }
    }

    /// Number of components in one element.
    pub fn component_count(&self) -> usize {
        match self {
            AccessorType::Scalar => 1,
            AccessorType::Vec2 => 2,
            AccessorType::Vec3 => 3,
            AccessorType::Vec4 => 4,
            AccessorType::Mat2 => 4,
            AccessorType::Mat3 => 9,
            AccessorType::Mat4 => 16,
        }
    }
}

impl Default for AccessorType {
    fn default() -> Self {
        AccessorType::Scalar
    }
}

impl fmt::Display for AccessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessorType::Scalar => f.write_str("Scalar"),
            AccessorType::Vec2 => f.write_str("Vec2"),
            AccessorType::Vec3 => f.write_str("Vec3"),
            AccessorType::Vec4 => f.write_str("Vec4"),
            AccessorType::Mat2 => f.write_str("Mat2"),
            AccessorType::Mat3 => f.write_str("Mat3"),
            AccessorType::Mat4 => f.write_str("Mat4"),
        }
    }
}
