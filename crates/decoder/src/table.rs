//! Tag dispatch tables for sum types and letter tables for string enums.

use std::collections::HashMap;

use crate::access::{as_array, as_map, decode_list, list_field, mismatch, positional};
use crate::error::{DecodeError, FieldKind, WireKind};
use crate::wire::{kind_of, WireMap, WireValue};

/// Decodes the content map of one variant.
pub type DecodeFn<T> = fn(&WireMap) -> Result<T, DecodeError>;

/// Immutable mapping from tag to variant decoder for one sum type.
///
/// Tables are built once behind a `OnceLock` and only read afterwards, so
/// they can be shared freely between threads.
pub struct TagTable<T> {
    sum_type: &'static str,
    entries: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> TagTable<T> {
    pub fn new(sum_type: &'static str, entries: &[(&'static str, DecodeFn<T>)]) -> Self {
        TagTable {
            sum_type,
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn sum_type(&self) -> &'static str {
        self.sum_type
    }

    /// Tags in this table, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Look up the decoder for `tag`. Matching is exact and case-sensitive.
    pub fn resolve(&self, tag: &str) -> Result<DecodeFn<T>, DecodeError> {
        self.entries
            .get(tag)
            .copied()
            .ok_or_else(|| DecodeError::UnsupportedTag {
                sum_type: self.sum_type,
                tag: tag.to_string(),
                path: String::new(),
            })
    }

    /// Decode a `[tag, content]` pair.
    pub fn decode(&self, value: &WireValue) -> Result<T, DecodeError> {
        let (tag, content) = split_pair(value, self.sum_type)?;
        tracing::trace!(sum_type = self.sum_type, tag, "dispatching variant");
        let decode = self.resolve(tag)?;
        decode(content)
    }

    /// Decode the pair stored under `key`.
    pub fn field(&self, map: &WireMap, key: &str) -> Result<T, DecodeError> {
        match map.get(key) {
            Some(value) => self.decode(value).map_err(|e| e.within(key)),
            None => Err(mismatch(key, FieldKind::Array, WireKind::Absent)),
        }
    }

    /// Like [`TagTable::field`], with absent and `null` meaning `None`.
    pub fn optional_field(&self, map: &WireMap, key: &str) -> Result<Option<T>, DecodeError> {
        match map.get(key) {
            None | Some(WireValue::Null) => Ok(None),
            Some(value) => self.decode(value).map(Some).map_err(|e| e.within(key)),
        }
    }

    /// Decode the list of pairs stored under `key`.
    pub fn list_field(
        &self,
        map: &WireMap,
        key: &str,
        default_empty: bool,
    ) -> Result<Vec<T>, DecodeError> {
        let items = list_field(map, key, default_empty)?;
        decode_list(items, key, |item| self.decode(item))
    }
}

/// Split a `[tag, content]` pair into a string tag and a content map.
pub fn split_pair<'a>(
    value: &'a WireValue,
    sum_type: &'static str,
) -> Result<(&'a str, &'a WireMap), DecodeError> {
    let items = as_array(value, "")?;
    if items.len() != 2 {
        return Err(DecodeError::Arity {
            sum_type,
            path: String::new(),
            expected: 2,
            actual: items.len(),
        });
    }
    let tag_value = positional(items, 0, sum_type)?;
    let tag = tag_value
        .as_str()
        .ok_or_else(|| mismatch("[0]", FieldKind::String, kind_of(tag_value)))?;
    let content = as_map(positional(items, 1, sum_type)?, "[1]")?;
    Ok((tag, content))
}

/// Letter-to-value table of a string enum such as `PaintType`.
pub struct LetterTable<T: 'static> {
    pub name: &'static str,
    pub entries: &'static [(&'static str, T)],
}

impl<T: Copy> LetterTable<T> {
    pub fn resolve(&self, letter: &str) -> Result<T, DecodeError> {
        self.entries
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, value)| *value)
            .ok_or_else(|| DecodeError::UnsupportedTag {
                sum_type: self.name,
                tag: letter.to_string(),
                path: String::new(),
            })
    }

    /// Read the enum stored as a string under `key`.
    pub fn field(&self, map: &WireMap, key: &str) -> Result<T, DecodeError> {
        let letter: String = crate::access::field(map, key)?;
        self.resolve(&letter).map_err(|e| e.within(key))
    }

    /// Like [`LetterTable::field`], with absent and `null` meaning `None`.
    pub fn optional_field(&self, map: &WireMap, key: &str) -> Result<Option<T>, DecodeError> {
        let letter: Option<String> = crate::access::optional_field(map, key)?;
        letter
            .map(|l| self.resolve(&l).map_err(|e| e.within(key)))
            .transpose()
    }
}
