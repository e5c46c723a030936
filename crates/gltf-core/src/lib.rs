//! glTF 2.0 document model.
//!
//! Plain-data types for every entity of a glTF asset, plus typed,
//! bounds-checked access to the binary data behind accessors. Loading
//! lives in the `gltf-io` crate; nothing here performs I/O.

pub mod accessor;
pub mod buffer;
pub mod data;
pub mod document;
pub mod error;
pub mod material;
pub mod mesh;
pub mod node;
pub mod texture;
pub mod types;

// Re-export main types for convenience
pub use accessor::{Accessor, AccessorType, ComponentType};
pub use buffer::{Buffer, BufferView, BufferViewTarget};
pub use document::{Asset, Document, Scene};
pub use error::AccessError;
pub use material::{
    AlphaMode, Material, NormalTextureInfo, OcclusionTextureInfo, PbrMetallicRoughness,
    TextureInfo,
};
pub use mesh::{Mesh, Primitive, PrimitiveMode};
pub use node::{Node, Transform};
pub use texture::{Image, ImageSource, MagFilter, MinFilter, Sampler, Texture, WrapMode};
pub use types::{Mat4, Quat, Vec3, Vec4, MAT4_IDENTITY};
