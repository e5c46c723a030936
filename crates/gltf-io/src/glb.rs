// GLB binary container reading.
//
// Layout: a 12-byte header (magic, version, total length) followed by
// chunks, each an 8-byte header (length, type) plus payload. The first
// chunk must be JSON; binary chunks are consumed strictly in order by
// buffers that carry no URI.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::{GltfError, Result};

/// Magic number at offset 0, "glTF" in little-endian.
pub const GLB_MAGIC: u32 = 0x4654_6C67;

/// Lowest container version this loader accepts.
pub const GLB_VERSION: u32 = 2;

/// Chunk type "JSON".
pub const GLB_CHUNK_JSON: u32 = 0x4E4F_534A;

/// Chunk type "BIN\0".
pub const GLB_CHUNK_BIN: u32 = 0x004E_4942;

const GLB_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Sequential reader over the chunks of a GLB container.
pub(crate) struct GlbReader<'a> {
    cursor: Cursor<&'a [u8]>,
    /// Declared total length of the container.
    length: usize,
}

impl<'a> GlbReader<'a> {
    /// Validates the container header and positions the reader at the
    /// first chunk.
    pub(crate) fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() < GLB_HEADER_LEN {
            return Err(GltfError::InvalidContainer(
                "too small for a GLB header".into(),
            ));
        }
        let mut cursor = Cursor::new(data);
        let magic = cursor.read_u32::<LittleEndian>()?;
        let version = cursor.read_u32::<LittleEndian>()?;
        let length = cursor.read_u32::<LittleEndian>()? as usize;
        if magic != GLB_MAGIC {
            return Err(GltfError::InvalidContainer("bad magic number".into()));
        }
        if version < GLB_VERSION {
            return Err(GltfError::InvalidContainer(format!(
                "unsupported version {version}"
            )));
        }
        if length < GLB_HEADER_LEN {
            return Err(GltfError::InvalidContainer(format!(
                "declared length {length} is shorter than the header"
            )));
        }
        if length > data.len() {
            return Err(GltfError::InvalidContainer("container truncated".into()));
        }
        Ok(GlbReader { cursor, length })
    }

    /// Returns the next chunk as a (type, payload) pair, or `None` once
    /// the declared length is exhausted.
    pub(crate) fn next_chunk(&mut self) -> Result<Option<(u32, &'a [u8])>> {
        let offset = self.cursor.position() as usize;
        if offset + CHUNK_HEADER_LEN > self.length {
            return Ok(None);
        }
        let chunk_length = self.cursor.read_u32::<LittleEndian>()? as usize;
        let chunk_type = self.cursor.read_u32::<LittleEndian>()?;
        let start = self.cursor.position() as usize;
        let end = start.saturating_add(chunk_length);
        if end > self.length {
            return Err(GltfError::InvalidContainer(
                "chunk extends past the declared length".into(),
            ));
        }
        let data: &'a [u8] = self.cursor.get_ref();
        self.cursor.set_position(end as u64);
        Ok(Some((chunk_type, &data[start..end])))
    }

    /// Reads the opening chunk, which the container format requires to be
    /// JSON.
    pub(crate) fn json_chunk(&mut self) -> Result<&'a [u8]> {
        match self.next_chunk()? {
            Some((GLB_CHUNK_JSON, payload)) => Ok(payload),
            Some((other, _)) => Err(GltfError::InvalidContainer(format!(
                "first chunk has type {other:#010X}, expected JSON"
            ))),
            None => Err(GltfError::InvalidContainer("no JSON chunk".into())),
        }
    }

    /// Consumes the next chunk for a buffer without a URI. It must exist
    /// and be a binary chunk.
    pub(crate) fn bin_chunk(&mut self) -> Result<&'a [u8]> {
        match self.next_chunk()? {
            Some((GLB_CHUNK_BIN, payload)) => Ok(payload),
            Some((other, _)) => Err(GltfError::InvalidContainer(format!(
                "expected a BIN chunk, found type {other:#010X}"
            ))),
            None => Err(GltfError::InvalidContainer(
                "buffer without uri but no binary chunk left".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Assembles a container; chunk payloads are padded to four bytes as
    // writers do.
    fn build_glb(chunks: &[(u32, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();
        for &(chunk_type, payload) in chunks {
            let padded = payload.len() + (4 - payload.len() % 4) % 4;
            body.extend_from_slice(&(padded as u32).to_le_bytes());
            body.extend_from_slice(&chunk_type.to_le_bytes());
            body.extend_from_slice(payload);
            let pad = if chunk_type == GLB_CHUNK_JSON { b' ' } else { 0 };
            body.resize(body.len() + padded - payload.len(), pad);
        }
        let mut out = Vec::with_capacity(12 + body.len());
        out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&((12 + body.len()) as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    #[test]
    fn test_rejects_short_header() {
        assert!(matches!(
            GlbReader::new(b"glTF"),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_rejects_bad_magic() {
        let mut data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        data[0] = b'x';
        assert!(matches!(
            GlbReader::new(&data),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_rejects_old_version() {
        let mut data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        data[4..8].copy_from_slice(&1u32.to_le_bytes());
        assert!(matches!(
            GlbReader::new(&data),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_accepts_newer_version() {
        let mut data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        data[4..8].copy_from_slice(&3u32.to_le_bytes());
        assert!(GlbReader::new(&data).is_ok());
    }

    #[test]
    fn test_rejects_truncated_container() {
        let mut data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        data.truncate(data.len() - 4);
        assert!(matches!(
            GlbReader::new(&data),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_reads_json_then_bin() {
        let data = build_glb(&[(GLB_CHUNK_JSON, b"{\"a\":1}"), (GLB_CHUNK_BIN, &[1, 2, 3, 4])]);
        let mut reader = GlbReader::new(&data).unwrap();
        let json = reader.json_chunk().unwrap();
        assert!(json.starts_with(b"{\"a\":1}"));
        assert_eq!(reader.bin_chunk().unwrap(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_first_chunk_must_be_json() {
        let data = build_glb(&[(GLB_CHUNK_BIN, &[0, 0, 0, 0])]);
        let mut reader = GlbReader::new(&data).unwrap();
        assert!(matches!(
            reader.json_chunk(),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_no_bin_chunk_left() {
        let data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        let mut reader = GlbReader::new(&data).unwrap();
        reader.json_chunk().unwrap();
        assert!(matches!(
            reader.bin_chunk(),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_wrong_chunk_type_for_buffer() {
        let data = build_glb(&[
            (GLB_CHUNK_JSON, b"{}"),
            (GLB_CHUNK_JSON, b"{}"),
        ]);
        let mut reader = GlbReader::new(&data).unwrap();
        reader.json_chunk().unwrap();
        assert!(matches!(
            reader.bin_chunk(),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_chunk_extending_past_length_fails() {
        let mut data = build_glb(&[(GLB_CHUNK_JSON, b"{}")]);
        // Inflate the first chunk's declared length past the container.
        data[12..16].copy_from_slice(&100u32.to_le_bytes());
        let mut reader = GlbReader::new(&data).unwrap();
        assert!(matches!(
            reader.next_chunk(),
            Err(GltfError::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_trailing_chunks_are_ignored() {
        let data = build_glb(&[
            (GLB_CHUNK_JSON, b"{}"),
            (GLB_CHUNK_BIN, &[9, 9, 9, 9]),
            (0x12345678, &[1, 1, 1, 1]),
        ]);
        let mut reader = GlbReader::new(&data).unwrap();
        reader.json_chunk().unwrap();
        reader.bin_chunk().unwrap();
        // The unknown trailing chunk is simply never consumed.
    }
}
