// Loading entry points for text and binary glTF.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::Value;

use gltf_core::buffer::Buffer;
use gltf_core::document::Document;

use crate::error::{GltfError, Result};
use crate::glb::GlbReader;
use crate::{reader, scheme};

/// Loads a glTF asset from disk, picking the container format from the
/// file extension (`.gltf` for text, `.glb` for binary).
///
/// # Errors
///
/// Fails on unrecognized extensions, unreadable files, malformed
/// documents and unresolvable buffers.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    debug!("loading {}", path.display());
    match extension {
        "gltf" => from_gltf(&fs::read(path)?, path.parent()),
        "glb" => from_glb(&fs::read(path)?, path.parent()),
        other => Err(GltfError::UnsupportedExtension(other.to_string())),
    }
}

/// Parses a text-form glTF document and resolves every buffer. External
/// uris are read relative to `base_dir`.
///
/// # Errors
///
/// Fails on malformed JSON, schema violations and buffers that cannot
/// be resolved to at least their declared length.
pub fn from_gltf(data: &[u8], base_dir: Option<&Path>) -> Result<Document> {
    let root: Value = serde_json::from_slice(data)?;
    let mut document = reader::parse_document(&root)?;
    for (index, buffer) in document.buffers.iter_mut().enumerate() {
        let Some(uri) = &buffer.uri else {
            return Err(GltfError::InvalidDocument(format!(
                "buffer {index} has no uri outside a binary container"
            )));
        };
        let data = scheme::resolve_uri(uri, base_dir)?;
        fill_buffer(buffer, index, data)?;
    }
    Ok(document)
}

/// Parses a binary glTF (GLB) container. Buffers without a uri consume
/// the container's BIN chunks in order; buffers with a uri resolve the
/// same way as in text documents.
///
/// # Errors
///
/// Fails on malformed containers, malformed embedded JSON and buffers
/// that cannot be resolved to at least their declared length.
pub fn from_glb(data: &[u8], base_dir: Option<&Path>) -> Result<Document> {
    let mut container = GlbReader::new(data)?;
    let root: Value = serde_json::from_slice(container.json_chunk()?)?;
    let mut document = reader::parse_document(&root)?;
    for (index, buffer) in document.buffers.iter_mut().enumerate() {
        let data = match &buffer.uri {
            Some(uri) => scheme::resolve_uri(uri, base_dir)?,
            None => container.bin_chunk()?.to_vec(),
        };
        fill_buffer(buffer, index, data)?;
    }
    Ok(document)
}

// Payloads may be padded past the declared length; coming up short is
// fatal.
fn fill_buffer(buffer: &mut Buffer, index: usize, data: Vec<u8>) -> Result<()> {
    if data.len() < buffer.byte_length {
        return Err(GltfError::InvalidDocument(format!(
            "buffer {index} resolved to {} bytes, shorter than the declared {}",
            data.len(),
            buffer.byte_length
        )));
    }
    debug!("buffer {index}: {} bytes", data.len());
    buffer.data = data;
    Ok(())
}
