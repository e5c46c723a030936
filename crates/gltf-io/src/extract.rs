// Typed reads over the untyped JSON tree.
//
// glTF sections are full of optional fields with defaults. These helpers
// give every reader the same three-way semantics: an absent key is `None`
// (or a `MissingField` error for required reads), a present key of the
// wrong shape is an `InvalidField` error, and a valid key yields its
// value.

use serde_json::{Map, Value};

use crate::error::{GltfError, Result};

pub(crate) type JsonObject = Map<String, Value>;

/// Conversion out of a JSON value, with the shape name used in errors.
pub(crate) trait FromValue: Sized {
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromValue for usize {
    const EXPECTED: &'static str = "an unsigned integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|v| usize::try_from(v).ok())
    }
}

impl FromValue for u32 {
    const EXPECTED: &'static str = "an unsigned integer";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|v| u32::try_from(v).ok())
    }
}

impl FromValue for f32 {
    const EXPECTED: &'static str = "a number";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|v| v as f32)
    }
}

/// Reads a required field.
pub(crate) fn required<T: FromValue>(object: &JsonObject, key: &'static str) -> Result<T> {
    match object.get(key) {
        None => Err(GltfError::MissingField(key)),
        Some(value) => T::from_value(value).ok_or(GltfError::InvalidField {
            field: key,
            expected: T::EXPECTED,
        }),
    }
}

/// Reads an optional field. An absent key is `Ok(None)`; a present key of
/// the wrong shape is an error.
pub(crate) fn optional<T: FromValue>(object: &JsonObject, key: &'static str) -> Result<Option<T>> {
    match object.get(key) {
        None => Ok(None),
        Some(value) => T::from_value(value)
            .map(Some)
            .ok_or(GltfError::InvalidField {
                field: key,
                expected: T::EXPECTED,
            }),
    }
}

/// Reads a required field, then applies a fallible parse to it.
pub(crate) fn required_parsed<T, U, F>(
    object: &JsonObject,
    key: &'static str,
    parse: F,
) -> Result<U>
where
    T: FromValue,
    F: FnOnce(T) -> Result<U>,
{
    parse(required(object, key)?)
}

/// Reads an optional field, then applies a fallible parse to it. The
/// default only applies to an absent key; a present value that fails the
/// parse is an error.
pub(crate) fn optional_parsed<T, U, F>(
    object: &JsonObject,
    key: &'static str,
    parse: F,
) -> Result<Option<U>>
where
    T: FromValue,
    F: FnOnce(T) -> Result<U>,
{
    match optional(object, key)? {
        None => Ok(None),
        Some(value) => parse(value).map(Some),
    }
}

/// Reads a homogeneous array. An absent key or a non-array value reads as
/// "not found" (`Ok(None)`), distinct from a present empty array; an
/// element of the wrong shape is an error.
pub(crate) fn list<T: FromValue>(object: &JsonObject, key: &'static str) -> Result<Option<Vec<T>>> {
    let Some(Value::Array(items)) = object.get(key) else {
        return Ok(None);
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(T::from_value(item).ok_or(GltfError::InvalidField {
            field: key,
            expected: T::EXPECTED,
        })?);
    }
    Ok(Some(out))
}

/// Reads a fixed-size array. An absent key, a non-array value or an array
/// of the wrong length all read as absent; an element of the wrong shape
/// is an error.
pub(crate) fn fixed_array<T, const N: usize>(
    object: &JsonObject,
    key: &'static str,
) -> Result<Option<[T; N]>>
where
    T: FromValue + Copy + Default,
{
    let Some(Value::Array(items)) = object.get(key) else {
        return Ok(None);
    };
    if items.len() != N {
        return Ok(None);
    }
    let mut out = [T::default(); N];
    for (slot, item) in out.iter_mut().zip(items) {
        *slot = T::from_value(item).ok_or(GltfError::InvalidField {
            field: key,
            expected: T::EXPECTED,
        })?;
    }
    Ok(Some(out))
}

/// Looks up a sub-object. An absent or non-object key is `None`.
pub(crate) fn object<'a>(object: &'a JsonObject, key: &str) -> Option<&'a JsonObject> {
    object.get(key).and_then(Value::as_object)
}

/// Looks up a required sub-object.
pub(crate) fn required_object<'a>(
    object: &'a JsonObject,
    key: &'static str,
) -> Result<&'a JsonObject> {
    match object.get(key) {
        None => Err(GltfError::MissingField(key)),
        Some(value) => value.as_object().ok_or(GltfError::InvalidField {
            field: key,
            expected: "an object",
        }),
    }
}

/// Looks up a required array.
pub(crate) fn required_array<'a>(
    object: &'a JsonObject,
    key: &'static str,
) -> Result<&'a Vec<Value>> {
    match object.get(key) {
        None => Err(GltfError::MissingField(key)),
        Some(value) => value.as_array().ok_or(GltfError::InvalidField {
            field: key,
            expected: "an array",
        }),
    }
}

/// Looks up a top-level entity array. An absent or non-array key is
/// `None` and the section reads as empty.
pub(crate) fn section<'a>(root: &'a JsonObject, key: &str) -> Option<&'a Vec<Value>> {
    root.get(key).and_then(Value::as_array)
}
