// PBR metallic-roughness materials.

use std::fmt;

use crate::types::{Vec3, Vec4};

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    pub normal_texture: Option<NormalTextureInfo>,
    pub occlusion_texture: Option<OcclusionTextureInfo>,
    pub emissive_texture: Option<TextureInfo>,
    pub emissive_factor: Vec3,
    pub alpha_mode: AlphaMode,
    /// Cutoff used when `alpha_mode` is [`AlphaMode::Mask`].
    pub alpha_cutoff: f32,
    pub double_sided: bool,
    pub name: Option<String>,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            pbr_metallic_roughness: None,
            normal_texture: None,
            occlusion_texture: None,
            emissive_texture: None,
            emissive_factor: [0.0, 0.0, 0.0],
            alpha_mode: AlphaMode::Opaque,
            alpha_cutoff: 0.5,
            double_sided: false,
            name: None,
        }
    }
}

/// The metallic-roughness parameter block.
#[derive(Debug, Clone, PartialEq)]
pub struct PbrMetallicRoughness {
    pub base_color_factor: Vec4,
    pub base_color_texture: Option<TextureInfo>,
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    pub metallic_roughness_texture: Option<TextureInfo>,
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        PbrMetallicRoughness {
            base_color_factor: [1.0, 1.0, 1.0, 1.0],
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

/// Reference from a material to a texture.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureInfo {
    pub index: usize,
    /// Which `TEXCOORD_<n>` attribute supplies the coordinates.
    pub tex_coord: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalTextureInfo {
    pub index: usize,
    pub tex_coord: usize,
    /// Multiplier applied to the sampled normal's x and y.
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OcclusionTextureInfo {
    pub index: usize,
    pub tex_coord: usize,
    /// Occlusion strength in `[0, 1]`.
    pub strength: f32,
}

/// How the base color alpha channel is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    /// Parses the JSON `alphaMode` tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "OPAQUE" => Some(AlphaMode::Opaque),
            "MASK" => Some(AlphaMode::Mask),
            "BLEND" => Some(AlphaMode::Blend),
            _ => None,
        }
    }
}

impl Default for AlphaMode {
    fn default() -> Self {
        AlphaMode::Opaque
    }
}

impl fmt::Display for AlphaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphaMode::Opaque => f.write_str("Opaque"),
            AlphaMode::Mask => f.write_str("Mask"),
            AlphaMode::Blend => f.write_str("Blend"),
        }
    }
}
