//! Command-line inspector for glTF 2.0 assets.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gltf_core::{Buffer, Document, Material};

#[derive(Parser)]
#[command(name = "gltf-tools")]
#[command(about = "Inspect glTF 2.0 assets")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print asset metadata and section counts
    Info {
        /// A .gltf or .glb file
        path: PathBuf,
    },
    /// Print every section of the document
    Dump {
        /// A .gltf or .glb file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Info { path } => print_info(&load(&path)?),
        Command::Dump { path } => print_dump(&load(&path)?),
    }
    Ok(())
}

fn load(path: &Path) -> Result<Document> {
    gltf_io::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn opt<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

fn seq<T: Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(T::to_string).collect();
    format!("[ {} ]", items.join(", "))
}

fn buffer_uri(buffer: &Buffer) -> String {
    match &buffer.uri {
        Some(uri) if uri.starts_with("data:") => "<data uri>".to_string(),
        Some(uri) => uri.clone(),
        None => "-".to_string(),
    }
}

fn print_asset(document: &Document) {
    println!("Asset:");
    println!("\tVersion:     \t{}", document.asset.version);
    println!("\tGenerator:   \t{}", opt(&document.asset.generator));
    println!("\tMin Version: \t{}", opt(&document.asset.min_version));
    println!("\tCopyright:   \t{}", opt(&document.asset.copyright));
}

fn print_info(document: &Document) {
    print_asset(document);
    println!();
    println!("Scenes:       \t{}", document.scenes.len());
    println!("Nodes:        \t{}", document.nodes.len());
    println!("Meshes:       \t{}", document.meshes.len());
    println!("Accessors:    \t{}", document.accessors.len());
    println!("Buffer Views: \t{}", document.buffer_views.len());
    println!("Buffers:      \t{}", document.buffers.len());
    println!("Materials:    \t{}", document.materials.len());
    println!("Textures:     \t{}", document.textures.len());
    println!("Images:       \t{}", document.images.len());
    println!("Samplers:     \t{}", document.samplers.len());
}

fn print_dump(document: &Document) {
    print_asset(document);
    if let Some(scene) = document.default_scene {
        println!("\nDefault Scene: \t{scene}");
    }
    println!("\nScenes:");
    for scene in &document.scenes {
        println!("\tName:  \t{}", opt(&scene.name));
        println!("\tNodes: \t{}", seq(&scene.nodes));
        println!();
    }
    println!("Nodes:");
    for node in &document.nodes {
        println!("\tName:     \t{}", opt(&node.name));
        println!("\tChildren: \t{}", seq(&node.children));
        println!("\tMesh:     \t{}", opt(&node.mesh));
        println!("\tCamera:   \t{}", opt(&node.camera));
        println!("\tSkin:     \t{}", opt(&node.skin));
        println!("\tTransform:\t{}", node.transform);
        println!();
    }
    println!("Meshes:");
    for mesh in &document.meshes {
        println!("\tName: \t{}", opt(&mesh.name));
        println!("\tPrimitives:");
        for primitive in &mesh.primitives {
            println!("\t\tIndices:  \t{}", opt(&primitive.indices));
            println!("\t\tMaterial: \t{}", opt(&primitive.material));
            println!("\t\tMode:     \t{}", primitive.mode);
            println!("\t\tAttributes:");
            let mut attributes: Vec<_> = primitive.attributes.iter().collect();
            attributes.sort();
            for (semantic, accessor) in attributes {
                println!("\t\t\t{semantic}: \t{accessor}");
            }
        }
        println!();
    }
    println!("Accessors:");
    for accessor in &document.accessors {
        println!("\tName:          \t{}", opt(&accessor.name));
        println!("\tBuffer View:   \t{}", opt(&accessor.buffer_view));
        println!("\tByte Offset:   \t{}", accessor.byte_offset);
        println!("\tNormalized:    \t{}", accessor.normalized);
        println!("\tComponent Type:\t{}", accessor.component_type);
        println!("\tCount:         \t{}", accessor.count);
        println!("\tType:          \t{}", accessor.element_type);
        println!("\tMax:           \t{}", seq(&accessor.max));
        println!("\tMin:           \t{}", seq(&accessor.min));
        println!();
    }
    println!("Buffer Views:");
    for view in &document.buffer_views {
        println!("\tName:       \t{}", opt(&view.name));
        println!("\tBuffer:     \t{}", view.buffer);
        println!("\tByte Offset:\t{}", view.byte_offset);
        println!("\tByte Length:\t{}", view.byte_length);
        println!("\tByte Stride:\t{}", opt(&view.byte_stride));
        println!("\tTarget:     \t{}", opt(&view.target));
        println!();
    }
    println!("Buffers:");
    for buffer in &document.buffers {
        println!("\tName:       \t{}", opt(&buffer.name));
        println!("\tByte Length:\t{}", buffer.byte_length);
        println!("\tURI:        \t{}", buffer_uri(buffer));
        println!();
    }
    println!("Materials:");
    for material in &document.materials {
        print_material(material);
    }
    println!("Textures:");
    for texture in &document.textures {
        println!("\tName:    \t{}", opt(&texture.name));
        println!("\tSampler: \t{}", opt(&texture.sampler));
        println!("\tSource:  \t{}", opt(&texture.source));
        println!();
    }
    println!("Images:");
    for image in &document.images {
        println!("\tName:   \t{}", opt(&image.name));
        println!("\tSource: \t{}", image.source);
        println!();
    }
    println!("Samplers:");
    for sampler in &document.samplers {
        println!("\tName:       \t{}", opt(&sampler.name));
        println!("\tMag Filter: \t{}", opt(&sampler.mag_filter));
        println!("\tMin Filter: \t{}", opt(&sampler.min_filter));
        println!("\tWrap S:     \t{}", sampler.wrap_s);
        println!("\tWrap T:     \t{}", sampler.wrap_t);
        println!();
    }
}

fn print_material(material: &Material) {
    println!("\tName:           \t{}", opt(&material.name));
    println!("\tAlpha Mode:     \t{}", material.alpha_mode);
    println!("\tAlpha Cutoff:   \t{}", material.alpha_cutoff);
    println!("\tDouble Sided:   \t{}", material.double_sided);
    println!("\tEmissive Factor:\t{}", seq(&material.emissive_factor));
    if let Some(pbr) = &material.pbr_metallic_roughness {
        println!("\tPBR Metallic Roughness:");
        println!("\t\tBase Color Factor:\t{}", seq(&pbr.base_color_factor));
        println!("\t\tMetallic Factor:  \t{}", pbr.metallic_factor);
        println!("\t\tRoughness Factor: \t{}", pbr.roughness_factor);
        if let Some(texture) = &pbr.base_color_texture {
            println!(
                "\t\tBase Color Texture:\ttexture {} (uv {})",
                texture.index, texture.tex_coord
            );
        }
        if let Some(texture) = &pbr.metallic_roughness_texture {
            println!(
                "\t\tMetallic Roughness Texture:\ttexture {} (uv {})",
                texture.index, texture.tex_coord
            );
        }
    }
    if let Some(texture) = &material.normal_texture {
        println!(
            "\tNormal Texture:   \ttexture {} (uv {}, scale {})",
            texture.index, texture.tex_coord, texture.scale
        );
    }
    if let Some(texture) = &material.occlusion_texture {
        println!(
            "\tOcclusion Texture:\ttexture {} (uv {}, strength {})",
            texture.index, texture.tex_coord, texture.strength
        );
    }
    if let Some(texture) = &material.emissive_texture {
        println!(
            "\tEmissive Texture: \ttexture {} (uv {})",
            texture.index, texture.tex_coord
        );
    }
    println!();
}
