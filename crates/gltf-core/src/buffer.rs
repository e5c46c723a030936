// Buffers hold raw bytes; buffer views carve typed regions out of them.

use std::fmt;

/// A contiguous blob of binary data.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Buffer {
    /// Declared payload size in bytes. The resolved payload may be longer
    /// (padding), never shorter.
    pub byte_length: usize,
    /// Source of the bytes: a `data:` URI or a path relative to the
    /// document. `None` only for the buffer fed by a GLB binary chunk.
    pub uri: Option<String>,
    pub name: Option<String>,
    /// Resolved payload. Always populated after a successful load.
    pub data: Vec<u8>,
}

/// A slice of a buffer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BufferView {
    pub buffer: usize,
    pub byte_length: usize,
    pub byte_offset: usize,
    /// Distance between elements for interleaved vertex data.
    pub byte_stride: Option<usize>,
    pub target: Option<BufferViewTarget>,
    pub name: Option<String>,
}

/// Intended GL binding point of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferViewTarget {
    ArrayBuffer,        // 34962
    ElementArrayBuffer, // 34963
}

impl BufferViewTarget {
    /// Maps a wire code to a target. Codes outside the set are `None` and
    /// the field is treated as absent.
    pub fn from_gl(code: u32) -> Option<Self> {
        match code {
            34962 => Some(BufferViewTarget::ArrayBuffer),
            34963 => Some(BufferViewTarget::ElementArrayBuffer),
            _ => None,
        }
    }
}

impl fmt::Display for BufferViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferViewTarget::ArrayBuffer => f.write_str("Array Buffer"),
            BufferViewTarget::ElementArrayBuffer => f.write_str("Element Array Buffer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_gl() {
        assert_eq!(
            BufferViewTarget::from_gl(34962),
            Some(BufferViewTarget::ArrayBuffer)
        );
        assert_eq!(
            BufferViewTarget::from_gl(34963),
            Some(BufferViewTarget::ElementArrayBuffer)
        );
        assert_eq!(BufferViewTarget::from_gl(0), None);
        assert_eq!(BufferViewTarget::from_gl(34964), None);
    }
}
