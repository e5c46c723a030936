// Root of the loaded document model.

use crate::accessor::Accessor;
use crate::buffer::{Buffer, BufferView};
use crate::material::Material;
use crate::mesh::Mesh;
use crate::node::Node;
use crate::texture::{Image, Sampler, Texture};

/// A fully loaded glTF asset.
///
/// Entities reference each other by index into the flat vectors below,
/// never by pointer. After a successful load every [`Buffer`] carries its
/// resolved payload; the document is plain owned data and moves freely
/// across threads.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    pub asset: Asset,
    /// Scene to display first (root-level `scene` key).
    pub default_scene: Option<usize>,
    pub scenes: Vec<Scene>,
    pub nodes: Vec<Node>,
    pub meshes: Vec<Mesh>,
    pub accessors: Vec<Accessor>,
    pub buffer_views: Vec<BufferView>,
    pub buffers: Vec<Buffer>,
    pub materials: Vec<Material>,
    pub textures: Vec<Texture>,
    pub images: Vec<Image>,
    pub samplers: Vec<Sampler>,
}

/// Metadata block, the only section every document must carry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Asset {
    /// Target glTF version, e.g. `"2.0"`.
    pub version: String,
    pub generator: Option<String>,
    pub min_version: Option<String>,
    pub copyright: Option<String>,
}

/// An entry point into the node graph.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Scene {
    /// Root node indices, in declaration order.
    pub nodes: Vec<usize>,
    pub name: Option<String>,
}
