//! Reading glTF 2.0 assets.
//!
//! Supports the text form (`.gltf`), the binary container (`.glb`) and
//! hybrids of the two: a binary container whose extra buffers live in
//! external files or `data:` uris. The usual entry point is [`load`]:
//!
//! ```ignore
//! let document = gltf_io::load("models/helmet.glb")?;
//! for mesh in &document.meshes {
//!     println!("{} primitives", mesh.primitives.len());
//! }
//! ```
//!
//! [`from_gltf`] and [`from_glb`] parse in-memory bytes instead, with
//! an optional base directory for resolving external uris.

pub mod base64;
pub mod error;
mod extract;
mod glb;
mod loader;
mod reader;
mod scheme;

// Re-export main types for convenience
pub use error::{GltfError, Result};
pub use glb::{GLB_CHUNK_BIN, GLB_CHUNK_JSON, GLB_MAGIC, GLB_VERSION};
pub use loader::{from_glb, from_gltf, load};
