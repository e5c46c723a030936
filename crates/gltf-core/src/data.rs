// Typed reads of accessor data out of a loaded document.
//
// Addressing follows the wire layout: a run of values starts at
// view byte offset + accessor byte offset inside the buffer payload and is
// tightly packed. Byte stride is not applied here.

use bytemuck::Pod;
use num_traits::{NumCast, ToPrimitive, Zero};

use crate::accessor::{Accessor, ComponentType};
use crate::document::Document;
use crate::error::AccessError;

/// Reads `count` values of the accessor's component type, converting each
/// one to `T`.
///
/// This is the flexible path: every component goes through a numeric cast,
/// so `u16` indices can come out as `u32` and `i8` normals as `f32`. Note
/// that `count` counts components here, exactly as many values as the run
/// holds. An accessor without a buffer view yields `count` zeros.
///
/// # Errors
///
/// Fails on an out-of-range accessor, view or buffer index, on a byte run
/// extending past the buffer payload, on a component type outside glTF 2.0
/// and on a value that cannot be represented in `T`.
pub fn read_as<T>(document: &Document, accessor_index: usize) -> Result<Vec<T>, AccessError>
where
    T: NumCast + Zero + Copy,
{
    let accessor = lookup_accessor(document, accessor_index)?;
    let width = component_length(accessor.component_type)?;
    let Some(view_index) = accessor.buffer_view else {
        return Ok(vec![T::zero(); accessor.count]);
    };
    let bytes = accessor_bytes(
        document,
        view_index,
        accessor.byte_offset,
        accessor.count.saturating_mul(width),
    )?;
    match accessor.component_type {
        ComponentType::Int8 => convert_run::<T, i8>(bytes, accessor.count),
        ComponentType::Uint8 => convert_run::<T, u8>(bytes, accessor.count),
        ComponentType::Int16 => convert_run::<T, i16>(bytes, accessor.count),
        ComponentType::Uint16 => convert_run::<T, u16>(bytes, accessor.count),
        ComponentType::Uint32 => convert_run::<T, u32>(bytes, accessor.count),
        ComponentType::Float32 => convert_run::<T, f32>(bytes, accessor.count),
        ComponentType::Unknown(code) => Err(AccessError::UnknownComponentType(code)),
    }
}

/// Copies `count` whole elements of an accessor verbatim.
///
/// The fast path for bulk reads: `T` must match the accessor's element
/// byte size exactly, e.g. `[f32; 3]` for a float `VEC3` accessor or `u16`
/// for scalar unsigned-short indices. Bytes are reinterpreted as
/// little-endian `T` without conversion. An accessor without a buffer view
/// yields `count` zeroed elements.
///
/// # Errors
///
/// Fails on the same index and range violations as [`read_as`] and when
/// `size_of::<T>()` differs from the accessor's element size.
pub fn read_raw<T>(document: &Document, accessor_index: usize) -> Result<Vec<T>, AccessError>
where
    T: Pod,
{
    let accessor = lookup_accessor(document, accessor_index)?;
    let element_len =
        component_length(accessor.component_type)? * accessor.element_type.component_count();
    if std::mem::size_of::<T>() != element_len {
        return Err(AccessError::ElementSizeMismatch {
            output: std::mem::size_of::<T>(),
            element: element_len,
        });
    }
    let Some(view_index) = accessor.buffer_view else {
        return Ok(vec![T::zeroed(); accessor.count]);
    };
    let bytes = accessor_bytes(
        document,
        view_index,
        accessor.byte_offset,
        accessor.count.saturating_mul(element_len),
    )?;
    let mut out = Vec::with_capacity(accessor.count);
    for index in 0..accessor.count {
        let chunk = &bytes[index * element_len..(index + 1) * element_len];
        out.push(bytemuck::pod_read_unaligned(chunk));
    }
    Ok(out)
}

fn convert_run<T, C>(bytes: &[u8], count: usize) -> Result<Vec<T>, AccessError>
where
    T: NumCast,
    C: Pod + ToPrimitive,
{
    let width = std::mem::size_of::<C>();
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let value: C = bytemuck::pod_read_unaligned(&bytes[index * width..(index + 1) * width]);
        out.push(T::from(value).ok_or(AccessError::Unrepresentable { index })?);
    }
    Ok(out)
}

fn lookup_accessor(document: &Document, index: usize) -> Result<&Accessor, AccessError> {
    document
        .accessors
        .get(index)
        .ok_or(AccessError::AccessorOutOfBounds {
            index,
            len: document.accessors.len(),
        })
}

fn component_length(component: ComponentType) -> Result<usize, AccessError> {
    match component {
        ComponentType::Int8 | ComponentType::Uint8 => Ok(1),
        ComponentType::Int16 | ComponentType::Uint16 => Ok(2),
        ComponentType::Uint32 | ComponentType::Float32 => Ok(4),
        ComponentType::Unknown(code) => Err(AccessError::UnknownComponentType(code)),
    }
}

// Resolves and bounds-checks the byte run backing an accessor. Saturating
// arithmetic turns offset overflow from hostile documents into a plain
// range error.
fn accessor_bytes<'a>(
    document: &'a Document,
    view_index: usize,
    accessor_offset: usize,
    len: usize,
) -> Result<&'a [u8], AccessError> {
    let view =
        document
            .buffer_views
            .get(view_index)
            .ok_or(AccessError::BufferViewOutOfBounds {
                index: view_index,
                len: document.buffer_views.len(),
            })?;
    let buffer = document
        .buffers
        .get(view.buffer)
        .ok_or(AccessError::BufferOutOfBounds {
            index: view.buffer,
            len: document.buffers.len(),
        })?;
    let start = view.byte_offset.saturating_add(accessor_offset);
    let end = start.saturating_add(len);
    if end > buffer.data.len() {
        return Err(AccessError::RangeOutOfBounds {
            start,
            end,
            len: buffer.data.len(),
        });
    }
    Ok(&buffer.data[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::AccessorType;
    use crate::buffer::{Buffer, BufferView};
    use proptest::prelude::*;

    fn document_with(
        data: Vec<u8>,
        count: usize,
        component_type: ComponentType,
        element_type: AccessorType,
    ) -> Document {
        Document {
            accessors: vec![Accessor {
                buffer_view: Some(0),
                count,
                component_type,
                element_type,
                ..Accessor::default()
            }],
            buffer_views: vec![BufferView {
                buffer: 0,
                byte_length: data.len(),
                ..BufferView::default()
            }],
            buffers: vec![Buffer {
                byte_length: data.len(),
                data,
                ..Buffer::default()
            }],
            ..Document::default()
        }
    }

    #[test]
    fn test_u16_reads_as_f32() {
        let document = document_with(
            vec![1, 0, 2, 0, 3, 0],
            3,
            ComponentType::Uint16,
            AccessorType::Scalar,
        );
        let values: Vec<f32> = read_as(&document, 0).unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_i8_widens_signed() {
        let document = document_with(
            vec![0xFF, 0x7F],
            2,
            ComponentType::Int8,
            AccessorType::Scalar,
        );
        let values: Vec<f32> = read_as(&document, 0).unwrap();
        assert_eq!(values, vec![-1.0, 127.0]);
    }

    #[test]
    fn test_f32_reads_back() {
        let mut data = Vec::new();
        data.extend_from_slice(&1.5f32.to_le_bytes());
        data.extend_from_slice(&(-0.25f32).to_le_bytes());
        let document = document_with(data, 2, ComponentType::Float32, AccessorType::Scalar);
        let values: Vec<f32> = read_as(&document, 0).unwrap();
        assert_eq!(values, vec![1.5, -0.25]);
    }

    #[test]
    fn test_viewless_accessor_reads_zeros() {
        let mut document = document_with(vec![], 0, ComponentType::Uint32, AccessorType::Scalar);
        document.accessors[0].buffer_view = None;
        document.accessors[0].count = 4;
        let converted: Vec<u32> = read_as(&document, 0).unwrap();
        assert_eq!(converted, vec![0, 0, 0, 0]);
        let raw: Vec<u32> = read_raw(&document, 0).unwrap();
        assert_eq!(raw, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_unknown_component_type_fails() {
        let document = document_with(
            vec![0, 0, 0, 0],
            1,
            ComponentType::Unknown(5124),
            AccessorType::Scalar,
        );
        assert_eq!(
            read_as::<f32>(&document, 0),
            Err(AccessError::UnknownComponentType(5124))
        );
        assert_eq!(
            read_raw::<u32>(&document, 0),
            Err(AccessError::UnknownComponentType(5124))
        );
    }

    #[test]
    fn test_unrepresentable_value_fails() {
        let document = document_with(
            70000u32.to_le_bytes().to_vec(),
            1,
            ComponentType::Uint32,
            AccessorType::Scalar,
        );
        assert_eq!(
            read_as::<u16>(&document, 0),
            Err(AccessError::Unrepresentable { index: 0 })
        );
    }

    #[test]
    fn test_run_past_buffer_end_fails() {
        let document = document_with(
            vec![1, 0, 2, 0, 3, 0],
            4,
            ComponentType::Uint16,
            AccessorType::Scalar,
        );
        assert_eq!(
            read_as::<u32>(&document, 0),
            Err(AccessError::RangeOutOfBounds {
                start: 0,
                end: 8,
                len: 6
            })
        );
    }

    #[test]
    fn test_offsets_add_up() {
        // Two bytes of view offset plus two of accessor offset skip the
        // first two u16 values.
        let mut document = document_with(
            vec![9, 9, 8, 8, 5, 0, 6, 0],
            2,
            ComponentType::Uint16,
            AccessorType::Scalar,
        );
        document.buffer_views[0].byte_offset = 2;
        document.accessors[0].byte_offset = 2;
        let values: Vec<u32> = read_as(&document, 0).unwrap();
        assert_eq!(values, vec![5, 6]);
    }

    #[test]
    fn test_read_raw_vec3() {
        let mut data = Vec::new();
        for value in [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        let document = document_with(data, 2, ComponentType::Float32, AccessorType::Vec3);
        let positions: Vec<[f32; 3]> = read_raw(&document, 0).unwrap();
        assert_eq!(positions, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_read_raw_rejects_wrong_width() {
        let document = document_with(
            vec![1, 0, 2, 0],
            2,
            ComponentType::Uint16,
            AccessorType::Scalar,
        );
        assert_eq!(
            read_raw::<u32>(&document, 0),
            Err(AccessError::ElementSizeMismatch {
                output: 4,
                element: 2
            })
        );
    }

    #[test]
    fn test_indices_out_of_bounds() {
        let document = Document::default();
        assert_eq!(
            read_as::<f32>(&document, 3),
            Err(AccessError::AccessorOutOfBounds { index: 3, len: 0 })
        );

        let mut document = document_with(vec![0], 1, ComponentType::Uint8, AccessorType::Scalar);
        document.accessors[0].buffer_view = Some(7);
        assert_eq!(
            read_as::<u8>(&document, 0),
            Err(AccessError::BufferViewOutOfBounds { index: 7, len: 1 })
        );

        let mut document = document_with(vec![0], 1, ComponentType::Uint8, AccessorType::Scalar);
        document.buffer_views[0].buffer = 2;
        assert_eq!(
            read_as::<u8>(&document, 0),
            Err(AccessError::BufferOutOfBounds { index: 2, len: 1 })
        );
    }

    #[test]
    fn test_hostile_offset_does_not_panic() {
        let mut document = document_with(
            vec![1, 0],
            1,
            ComponentType::Uint16,
            AccessorType::Scalar,
        );
        document.accessors[0].byte_offset = usize::MAX;
        assert!(matches!(
            read_as::<u16>(&document, 0),
            Err(AccessError::RangeOutOfBounds { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_u16_values_survive_widening(values in proptest::collection::vec(any::<u16>(), 0..64)) {
            let mut data = Vec::with_capacity(values.len() * 2);
            for value in &values {
                data.extend_from_slice(&value.to_le_bytes());
            }
            let document = document_with(
                data,
                values.len(),
                ComponentType::Uint16,
                AccessorType::Scalar,
            );
            let widened: Vec<u32> = read_as(&document, 0).unwrap();
            prop_assert_eq!(widened, values.iter().map(|&v| v as u32).collect::<Vec<_>>());
        }
    }
}
