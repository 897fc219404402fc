//! Checked, typed extraction of fields from wire values.
//!
//! Every read of the generic tree goes through these helpers, so a value of
//! the wrong shape always surfaces as a [`DecodeError`] naming the key.

use crate::coerce::to_long;
use crate::error::{DecodeError, FieldKind, WireKind};
use crate::wire::{kind_of, WireMap, WireValue};

/// A scalar type that can be read from a single wire value.
pub trait FromWire: Sized {
    const KIND: FieldKind;

    fn from_wire(value: &WireValue) -> Option<Self>;
}

impl FromWire for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromWire for String {
    const KIND: FieldKind = FieldKind::String;

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_str().map(|s| s.to_string())
    }
}

impl FromWire for i16 {
    const KIND: FieldKind = FieldKind::Short;

    fn from_wire(value: &WireValue) -> Option<Self> {
        integral(value).and_then(|n| i16::try_from(n).ok())
    }
}

impl FromWire for i32 {
    const KIND: FieldKind = FieldKind::Int;

    fn from_wire(value: &WireValue) -> Option<Self> {
        integral(value).and_then(|n| i32::try_from(n).ok())
    }
}

/// Longs cross the wire as doubles; see [`crate::coerce`].
impl FromWire for i64 {
    const KIND: FieldKind = FieldKind::Long;

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_f64().map(to_long)
    }
}

impl FromWire for f32 {
    const KIND: FieldKind = FieldKind::Float;

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_f64().map(|f| f as f32)
    }
}

impl FromWire for f64 {
    const KIND: FieldKind = FieldKind::Double;

    fn from_wire(value: &WireValue) -> Option<Self> {
        value.as_f64()
    }
}

/// A number with no fractional part, whether written as `3` or `3.0`.
fn integral(value: &WireValue) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
        .map(|f| f as i64)
}

pub(crate) fn mismatch(key: &str, expected: FieldKind, actual: WireKind) -> DecodeError {
    DecodeError::TypeMismatch {
        key: key.to_string(),
        expected,
        actual,
    }
}

/// Read `value` as `T`, reporting failures against `key`.
pub fn expect<T: FromWire>(value: &WireValue, key: &str) -> Result<T, DecodeError> {
    T::from_wire(value).ok_or_else(|| mismatch(key, T::KIND, kind_of(value)))
}

/// Read a required field.
pub fn field<T: FromWire>(map: &WireMap, key: &str) -> Result<T, DecodeError> {
    match map.get(key) {
        Some(value) => expect(value, key),
        None => Err(mismatch(key, T::KIND, WireKind::Absent)),
    }
}

/// Read an optional field. Absent and `null` both decode to `None`.
pub fn optional_field<T: FromWire>(map: &WireMap, key: &str) -> Result<Option<T>, DecodeError> {
    match map.get(key) {
        None | Some(WireValue::Null) => Ok(None),
        Some(value) => expect(value, key).map(Some),
    }
}

/// Read an array field. With `default_empty`, an absent key yields an empty
/// slice; an explicit `null` is still a mismatch.
pub fn list_field<'a>(
    map: &'a WireMap,
    key: &str,
    default_empty: bool,
) -> Result<&'a [WireValue], DecodeError> {
    match map.get(key) {
        Some(WireValue::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(mismatch(key, FieldKind::Array, kind_of(other))),
        None if default_empty => Ok(&[]),
        None => Err(mismatch(key, FieldKind::Array, WireKind::Absent)),
    }
}

/// Read a required nested record.
pub fn map_field<'a>(map: &'a WireMap, key: &str) -> Result<&'a WireMap, DecodeError> {
    match map.get(key) {
        Some(value) => as_map(value, key),
        None => Err(mismatch(key, FieldKind::Map, WireKind::Absent)),
    }
}

pub fn as_map<'a>(value: &'a WireValue, key: &str) -> Result<&'a WireMap, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| mismatch(key, FieldKind::Map, kind_of(value)))
}

pub fn as_array<'a>(value: &'a WireValue, key: &str) -> Result<&'a [WireValue], DecodeError> {
    value
        .as_array()
        .map(|items| items.as_slice())
        .ok_or_else(|| mismatch(key, FieldKind::Array, kind_of(value)))
}

/// Element `index` of a `[tag, content]` style array. `sum_type` names the
/// value in the arity error.
pub fn positional<'a>(
    items: &'a [WireValue],
    index: usize,
    sum_type: &'static str,
) -> Result<&'a WireValue, DecodeError> {
    items.get(index).ok_or(DecodeError::Arity {
        sum_type,
        path: String::new(),
        expected: index + 1,
        actual: items.len(),
    })
}

/// Decode each element of a list, locating failures at `key[i]`.
pub fn decode_list<T>(
    items: &[WireValue],
    key: &str,
    mut decode: impl FnMut(&WireValue) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let value = decode(item).map_err(|e| e.within(&format!("{}[{}]", key, i)))?;
        out.push(value);
    }
    Ok(out)
}

/// Decode the nested record under `key`.
pub fn record_field<T>(
    map: &WireMap,
    key: &str,
    decode: impl FnOnce(&WireMap) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    let inner = map_field(map, key)?;
    decode(inner).map_err(|e| e.within(key))
}

/// Decode the list of records under `key`.
pub fn record_list<T>(
    map: &WireMap,
    key: &str,
    default_empty: bool,
    decode: impl Fn(&WireMap) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    let items = list_field(map, key, default_empty)?;
    decode_list(items, key, |item| decode(as_map(item, "")?))
}

/// Decode a list of scalars such as a transform matrix.
pub fn scalar_list<T: FromWire>(items: &[WireValue], key: &str) -> Result<Vec<T>, DecodeError> {
    decode_list(items, key, |item| expect(item, ""))
}
