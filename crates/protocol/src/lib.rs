//! projector-protocol: typed data model of the remote-UI server event stream.
//!
//! Every value the server sends is one [`Event`]. Events carry drawing
//! commands ([`WindowEvent`]), window lifecycle data, caret metadata, image
//! transfers and markdown-panel control. All types are plain immutable
//! values compared structurally.
//!
//! On the wire each sum type is a `[tag, content]` pair and each record
//! field is keyed by a single letter assigned in declaration order (`a`,
//! `b`, ...). The field order of the structs in this crate is therefore part
//! of the wire contract: reordering, inserting or removing a field changes
//! the key scheme. Decoding lives in `projector-decoder`.

pub mod data;
pub mod event;
pub mod window_event;

pub use data::*;
pub use event::*;
pub use window_event::*;
