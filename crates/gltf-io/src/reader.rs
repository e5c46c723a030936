// Section readers, one per top-level glTF key.
//
// Reading is strict about required fields and permissive about optional
// ones: an absent optional section is an empty collection, a present
// section must have the declared shape. Semantic rule violations carry
// the entity index in the message.

use std::collections::HashMap;

use serde_json::Value;

use gltf_core::accessor::{Accessor, AccessorType, ComponentType};
use gltf_core::buffer::{Buffer, BufferView, BufferViewTarget};
use gltf_core::document::{Asset, Document, Scene};
use gltf_core::material::{
    AlphaMode, Material, NormalTextureInfo, OcclusionTextureInfo, PbrMetallicRoughness,
    TextureInfo,
};
use gltf_core::mesh::{Mesh, Primitive, PrimitiveMode};
use gltf_core::node::{Node, Transform};
use gltf_core::texture::{Image, ImageSource, MagFilter, MinFilter, Sampler, Texture, WrapMode};

use crate::error::{GltfError, Result};
use crate::extract::{self, JsonObject};

/// Parses a glTF JSON tree into a document. Buffers come back with their
/// declared sizes but no payload; resolution happens in the loader.
pub(crate) fn parse_document(root: &Value) -> Result<Document> {
    let root = root
        .as_object()
        .ok_or_else(|| GltfError::InvalidDocument("document root is not an object".into()))?;
    Ok(Document {
        asset: read_asset(root)?,
        default_scene: extract::optional(root, "scene")?,
        scenes: read_scenes(root)?,
        nodes: read_nodes(root)?,
        meshes: read_meshes(root)?,
        accessors: read_accessors(root)?,
        buffer_views: read_buffer_views(root)?,
        buffers: read_buffers(root)?,
        materials: read_materials(root)?,
        textures: read_textures(root)?,
        images: read_images(root)?,
        samplers: read_samplers(root)?,
    })
}

// Runs `read` over every element of an optional section. An absent or
// non-array section reads as empty.
fn read_section<T>(
    root: &JsonObject,
    key: &'static str,
    read: impl Fn(usize, &JsonObject) -> Result<T>,
) -> Result<Vec<T>> {
    let Some(items) = extract::section(root, key) else {
        return Ok(Vec::new());
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let object = item
            .as_object()
            .ok_or_else(|| GltfError::InvalidDocument(format!("{key}[{index}] is not an object")))?;
        out.push(read(index, object)?);
    }
    Ok(out)
}

fn read_asset(root: &JsonObject) -> Result<Asset> {
    let asset = extract::required_object(root, "asset")?;
    Ok(Asset {
        version: extract::required(asset, "version")?,
        generator: extract::optional(asset, "generator")?,
        min_version: extract::optional(asset, "minVersion")?,
        copyright: extract::optional(asset, "copyright")?,
    })
}

fn read_scenes(root: &JsonObject) -> Result<Vec<Scene>> {
    read_section(root, "scenes", |_, scene| {
        Ok(Scene {
            nodes: extract::list(scene, "nodes")?.unwrap_or_default(),
            name: extract::optional(scene, "name")?,
        })
    })
}

fn read_nodes(root: &JsonObject) -> Result<Vec<Node>> {
    read_section(root, "nodes", |index, node| {
        Ok(Node {
            transform: read_transform(index, node)?,
            children: extract::list(node, "children")?.unwrap_or_default(),
            camera: extract::optional(node, "camera")?,
            skin: extract::optional(node, "skin")?,
            mesh: extract::optional(node, "mesh")?,
            name: extract::optional(node, "name")?,
        })
    })
}

fn read_transform(index: usize, node: &JsonObject) -> Result<Transform> {
    let matrix = extract::fixed_array::<f32, 16>(node, "matrix")?;
    let translation = extract::fixed_array::<f32, 3>(node, "translation")?;
    let rotation = extract::fixed_array::<f32, 4>(node, "rotation")?;
    let scale = extract::fixed_array::<f32, 3>(node, "scale")?;

    let has_trs = translation.is_some() || rotation.is_some() || scale.is_some();
    if matrix.is_some() && has_trs {
        return Err(GltfError::InvalidDocument(format!(
            "node {index} declares both a matrix and a decomposed transform"
        )));
    }
    Ok(if let Some(matrix) = matrix {
        Transform::Matrix(matrix)
    } else if has_trs {
        Transform::Decomposed {
            translation: translation.unwrap_or(Transform::DEFAULT_TRANSLATION),
            rotation: rotation.unwrap_or(Transform::DEFAULT_ROTATION),
            scale: scale.unwrap_or(Transform::DEFAULT_SCALE),
        }
    } else {
        Transform::default()
    })
}

fn read_meshes(root: &JsonObject) -> Result<Vec<Mesh>> {
    read_section(root, "meshes", |index, mesh| {
        let items = extract::required_array(mesh, "primitives")?;
        let mut primitives = Vec::with_capacity(items.len());
        for (primitive_index, item) in items.iter().enumerate() {
            let object = item.as_object().ok_or_else(|| {
                GltfError::InvalidDocument(format!(
                    "mesh {index}: primitives[{primitive_index}] is not an object"
                ))
            })?;
            primitives.push(read_primitive(object)?);
        }
        Ok(Mesh {
            primitives,
            weights: extract::list(mesh, "weights")?.unwrap_or_default(),
            name: extract::optional(mesh, "name")?,
        })
    })
}

fn read_primitive(primitive: &JsonObject) -> Result<Primitive> {
    let items = extract::required_object(primitive, "attributes")?;
    let mut attributes = HashMap::with_capacity(items.len());
    for (semantic, value) in items {
        let accessor = value
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or(GltfError::InvalidField {
                field: "attributes",
                expected: "accessor indices",
            })?;
        attributes.insert(semantic.clone(), accessor);
    }
    Ok(Primitive {
        attributes,
        indices: extract::optional(primitive, "indices")?,
        material: extract::optional(primitive, "material")?,
        mode: extract::optional(primitive, "mode")?
            .map(PrimitiveMode::from_gl)
            .unwrap_or_default(),
    })
}

fn read_accessors(root: &JsonObject) -> Result<Vec<Accessor>> {
    read_section(root, "accessors", |index, accessor| {
        let element_type = extract::required_parsed(accessor, "type", |tag: String| {
            AccessorType::from_tag(&tag).ok_or_else(|| {
                GltfError::InvalidDocument(format!("accessor {index}: unknown type tag `{tag}`"))
            })
        })?;
        Ok(Accessor {
            buffer_view: extract::optional(accessor, "bufferView")?,
            byte_offset: extract::optional(accessor, "byteOffset")?.unwrap_or(0),
            count: extract::required(accessor, "count")?,
            component_type: extract::required(accessor, "componentType")
                .map(ComponentType::from_gl)?,
            element_type,
            normalized: extract::optional(accessor, "normalized")?.unwrap_or(false),
            min: extract::list(accessor, "min")?.unwrap_or_default(),
            max: extract::list(accessor, "max")?.unwrap_or_default(),
            name: extract::optional(accessor, "name")?,
        })
    })
}

fn read_buffer_views(root: &JsonObject) -> Result<Vec<BufferView>> {
    read_section(root, "bufferViews", |_, view| {
        Ok(BufferView {
            buffer: extract::required(view, "buffer")?,
            byte_length: extract::required(view, "byteLength")?,
            byte_offset: extract::optional(view, "byteOffset")?.unwrap_or(0),
            byte_stride: extract::optional(view, "byteStride")?,
            target: extract::optional(view, "target")?.and_then(BufferViewTarget::from_gl),
            name: extract::optional(view, "name")?,
        })
    })
}

fn read_buffers(root: &JsonObject) -> Result<Vec<Buffer>> {
    read_section(root, "buffers", |_, buffer| {
        Ok(Buffer {
            byte_length: extract::required(buffer, "byteLength")?,
            uri: extract::optional(buffer, "uri")?,
            name: extract::optional(buffer, "name")?,
            data: Vec::new(),
        })
    })
}

fn read_materials(root: &JsonObject) -> Result<Vec<Material>> {
    read_section(root, "materials", |_, material| {
        Ok(Material {
            pbr_metallic_roughness: extract::object(material, "pbrMetallicRoughness")
                .map(read_pbr)
                .transpose()?,
            normal_texture: extract::object(material, "normalTexture")
                .map(read_normal_texture)
                .transpose()?,
            occlusion_texture: extract::object(material, "occlusionTexture")
                .map(read_occlusion_texture)
                .transpose()?,
            emissive_texture: extract::object(material, "emissiveTexture")
                .map(read_texture_info)
                .transpose()?,
            emissive_factor: extract::fixed_array(material, "emissiveFactor")?
                .unwrap_or([0.0, 0.0, 0.0]),
            alpha_mode: extract::optional_parsed(material, "alphaMode", |tag: String| {
                AlphaMode::from_tag(&tag).ok_or_else(|| {
                    GltfError::InvalidDocument(format!("unknown alpha mode `{tag}`"))
                })
            })?
            .unwrap_or_default(),
            alpha_cutoff: extract::optional(material, "alphaCutoff")?.unwrap_or(0.5),
            double_sided: extract::optional(material, "doubleSided")?.unwrap_or(false),
            name: extract::optional(material, "name")?,
        })
    })
}

fn read_pbr(pbr: &JsonObject) -> Result<PbrMetallicRoughness> {
    Ok(PbrMetallicRoughness {
        base_color_factor: extract::fixed_array(pbr, "baseColorFactor")?
            .unwrap_or([1.0, 1.0, 1.0, 1.0]),
        base_color_texture: extract::object(pbr, "baseColorTexture")
            .map(read_texture_info)
            .transpose()?,
        metallic_factor: extract::optional(pbr, "metallicFactor")?.unwrap_or(1.0),
        roughness_factor: extract::optional(pbr, "roughnessFactor")?.unwrap_or(1.0),
        metallic_roughness_texture: extract::object(pbr, "metallicRoughnessTexture")
            .map(read_texture_info)
            .transpose()?,
    })
}

fn read_texture_info(info: &JsonObject) -> Result<TextureInfo> {
    Ok(TextureInfo {
        index: extract::required(info, "index")?,
        tex_coord: extract::optional(info, "texCoord")?.unwrap_or(0),
    })
}

fn read_normal_texture(info: &JsonObject) -> Result<NormalTextureInfo> {
    Ok(NormalTextureInfo {
        index: extract::required(info, "index")?,
        tex_coord: extract::optional(info, "texCoord")?.unwrap_or(0),
        scale: extract::optional(info, "scale")?.unwrap_or(1.0),
    })
}

fn read_occlusion_texture(info: &JsonObject) -> Result<OcclusionTextureInfo> {
    Ok(OcclusionTextureInfo {
        index: extract::required(info, "index")?,
        tex_coord: extract::optional(info, "texCoord")?.unwrap_or(0),
        strength: extract::optional(info, "strength")?.unwrap_or(1.0),
    })
}

fn read_textures(root: &JsonObject) -> Result<Vec<Texture>> {
    read_section(root, "textures", |_, texture| {
        Ok(Texture {
            sampler: extract::optional(texture, "sampler")?,
            source: extract::optional(texture, "source")?,
            name: extract::optional(texture, "name")?,
        })
    })
}

fn read_images(root: &JsonObject) -> Result<Vec<Image>> {
    read_section(root, "images", |index, image| {
        let uri: Option<String> = extract::optional(image, "uri")?;
        let buffer_view: Option<usize> = extract::optional(image, "bufferView")?;
        let mime_type: Option<String> = extract::optional(image, "mimeType")?;
        let source = match (uri, buffer_view) {
            (Some(_), Some(_)) => {
                return Err(GltfError::InvalidDocument(format!(
                    "image {index} declares both a uri and a buffer view"
                )))
            }
            (None, None) => {
                return Err(GltfError::InvalidDocument(format!(
                    "image {index} declares neither a uri nor a buffer view"
                )))
            }
            (Some(uri), None) => ImageSource::Uri(uri),
            (None, Some(buffer_view)) => ImageSource::BufferView {
                buffer_view,
                mime_type: mime_type.ok_or_else(|| {
                    GltfError::InvalidDocument(format!(
                        "image {index} references a buffer view without a mime type"
                    ))
                })?,
            },
        };
        Ok(Image {
            source,
            name: extract::optional(image, "name")?,
        })
    })
}

fn read_samplers(root: &JsonObject) -> Result<Vec<Sampler>> {
    read_section(root, "samplers", |_, sampler| {
        Ok(Sampler {
            mag_filter: extract::optional(sampler, "magFilter")?.and_then(MagFilter::from_gl),
            min_filter: extract::optional(sampler, "minFilter")?.and_then(MinFilter::from_gl),
            wrap_s: extract::optional(sampler, "wrapS")?
                .and_then(WrapMode::from_gl)
                .unwrap_or_default(),
            wrap_t: extract::optional(sampler, "wrapT")?
                .and_then(WrapMode::from_gl)
                .unwrap_or_default(),
            name: extract::optional(sampler, "name")?,
        })
    })
}
