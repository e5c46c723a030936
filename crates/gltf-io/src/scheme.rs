// URI resolution for buffer and image payloads.

use std::fs;
use std::path::Path;

use log::debug;

use crate::base64;
use crate::error::{GltfError, Result};

const BASE64_MARKER: &str = "base64,";

/// Resolves a glTF uri to its bytes. `data:` uris decode their inline
/// base64 payload; anything else is read from disk relative to
/// `base_dir`.
pub(crate) fn resolve_uri(uri: &str, base_dir: Option<&Path>) -> Result<Vec<u8>> {
    if let Some(rest) = uri.strip_prefix("data:") {
        let Some(marker) = rest.find(BASE64_MARKER) else {
            return Err(GltfError::InvalidDocument(
                "data uri carries no base64 payload".to_string(),
            ));
        };
        return Ok(base64::decode(&rest[marker + BASE64_MARKER.len()..]));
    }
    let path = match base_dir {
        Some(base) => base.join(uri),
        None => Path::new(uri).to_path_buf(),
    };
    debug!("reading {}", path.display());
    Ok(fs::read(path)?)
}
