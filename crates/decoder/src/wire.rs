//! Generic value tree the decoder walks, and its parser.

use serde::Deserialize;

use crate::error::{DecodeError, WireKind};

/// Untyped structural value produced by [`parse`].
pub type WireValue = serde_json::Value;

/// String-keyed map of a record's content.
pub type WireMap = serde_json::Map<String, WireValue>;

/// Parse raw text into a [`WireValue`] without any protocol knowledge.
///
/// Nesting depth is bounded only by the input. Deep values grow the stack
/// on the heap instead of overflowing it.
pub fn parse(text: &str) -> Result<WireValue, DecodeError> {
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = WireValue::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(syntax)?;
    de.end().map_err(syntax)?;
    Ok(value)
}

fn syntax(e: serde_json::Error) -> DecodeError {
    DecodeError::Syntax {
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    }
}

/// Classify a value for diagnostics.
pub fn kind_of(value: &WireValue) -> WireKind {
    match value {
        WireValue::Null => WireKind::Null,
        WireValue::Bool(_) => WireKind::Bool,
        WireValue::Number(_) => WireKind::Number,
        WireValue::String(_) => WireKind::String,
        WireValue::Array(_) => WireKind::Array,
        WireValue::Object(_) => WireKind::Map,
    }
}
