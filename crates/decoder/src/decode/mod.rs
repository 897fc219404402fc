//! Recursive decoding of an event batch.
//!
//! A batch is a JSON array of `[tag, content]` pairs of the [`Event`] sum
//! type. Each pair is resolved through the event tag table; variant decoders
//! read record fields by letter key and recurse into nested sum types
//! through their own tables.

mod data;
mod event;
mod window_event;

use projector_protocol::Event;

use crate::access::{as_array, decode_list};
use crate::error::DecodeError;
use crate::wire::{parse, WireValue};

/// Turns raw wire text into typed events.
pub trait Decoder {
    /// Decode a whole batch. Fails on the first malformed event; no partial
    /// result is returned.
    fn decode(&self, text: &str) -> Result<Vec<Event>, DecodeError>;
}

/// The table-driven decoder. Stateless; the tag tables it consults are
/// process-wide and immutable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableDecoder;

impl Decoder for TableDecoder {
    fn decode(&self, text: &str) -> Result<Vec<Event>, DecodeError> {
        decode(text)
    }
}

/// Parse and decode a batch of events, preserving input order.
pub fn decode(text: &str) -> Result<Vec<Event>, DecodeError> {
    let value = parse(text)?;
    decode_value(&value)
}

/// Decode an already-parsed batch.
pub fn decode_value(value: &WireValue) -> Result<Vec<Event>, DecodeError> {
    let pairs = as_array(value, "$")?;
    let table = event::events();
    let result = decode_list(pairs, "$", |pair| table.decode(pair));
    match &result {
        Ok(events) => tracing::debug!(events = events.len(), "decoded batch"),
        Err(e) => tracing::debug!(error = %e, "batch rejected"),
    }
    result
}
