// Errors raised by typed accessor data reads.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("accessor index {index} out of bounds ({len} accessors)")]
    AccessorOutOfBounds { index: usize, len: usize },

    #[error("buffer view index {index} out of bounds ({len} buffer views)")]
    BufferViewOutOfBounds { index: usize, len: usize },

    #[error("buffer index {index} out of bounds ({len} buffers)")]
    BufferOutOfBounds { index: usize, len: usize },

    #[error("accessor data {start}..{end} exceeds buffer of {len} bytes")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("component type code {0} is not part of glTF 2.0")]
    UnknownComponentType(u32),

    #[error("output type is {output} bytes but accessor elements are {element} bytes")]
    ElementSizeMismatch { output: usize, element: usize },

    #[error("value at element {index} cannot be represented in the requested type")]
    Unrepresentable { index: usize },
}
