//! projector-decoder: decoding of the compact remote-UI wire format.
//!
//! The server writes each event as a `[tag, content]` pair whose content is
//! a map keyed by single letters in field declaration order. This crate
//! parses the text into a generic value tree ([`wire`]) and rebuilds typed
//! [`projector_protocol::Event`] values by dispatching every tag through an
//! immutable per-sum-type table ([`table`]), reading fields through checked
//! accessors ([`access`]).
//!
//! ```
//! let events = projector_decoder::decode(r#"[["c", {"a": "hello"}]]"#).unwrap();
//! assert_eq!(events[0].kind_name(), "Clipboard");
//! ```

pub mod access;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod table;
pub mod wire;

pub use decode::{decode, decode_value, Decoder, TableDecoder};
pub use error::{DecodeError, FieldKind, WireKind};
pub use wire::{parse, WireMap, WireValue};
