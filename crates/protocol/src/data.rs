//! Leaf records and small sum types shared across events.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

// ── Geometry ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommonRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommonIntSize {
    pub width: i32,
    pub height: i32,
}

/// Position of a single caret inside its editor window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CaretInfo {
    pub location_in_window: Point,
}

// ── Windows ─────────────────────────────────────────────────────────

/// Snapshot of one server-side window, sent as part of a window set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowData {
    pub id: i32,
    pub title: Option<String>,
    pub icon_ids: Vec<ImageId>,
    pub focused: bool,
    /// Stacking order; higher values are drawn on top.
    pub order: i32,
    pub bounds: CommonRectangle,
    pub cursor_type: Option<CursorType>,
    pub always_on_top: bool,
    pub no_title: bool,
    pub fullscreen: bool,
    pub window_type: WindowType,
    pub parent_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindowType {
    Window,
    Popup,
    IdeaWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CursorType {
    Default,
    Crosshair,
    Text,
    Wait,
    SwResize,
    SeResize,
    NwResize,
    NeResize,
    NResize,
    SResize,
    WResize,
    EResize,
    Hand,
    Move,
}

// ── Images ──────────────────────────────────────────────────────────

/// Identity of an image the client caches between draw commands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum ImageId {
    BufferedImageId { identity_hash: i32, state_hash: i32 },
    /// Offscreen surface id. Carried on the wire as a double, so values
    /// above 2^53 in magnitude may not survive decoding exactly.
    PVolatileImageId { id: i64 },
    Unknown { class_name: String },
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageId::BufferedImageId {
                identity_hash,
                state_hash,
            } => write!(f, "buffered-{}-{}", identity_hash, state_hash),
            ImageId::PVolatileImageId { id } => write!(f, "volatile-{}", id),
            ImageId::Unknown { class_name } => write!(f, "unknown-{}", class_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ImageData {
    PngBase64 { png_base64: String },
    Empty,
}

impl ImageData {
    /// Decode the PNG payload. Returns `None` for [`ImageData::Empty`].
    pub fn png_bytes(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        match self {
            ImageData::PngBase64 { png_base64 } => Some(BASE64.decode(png_base64)),
            ImageData::Empty => None,
        }
    }
}

// ── Paint ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PaintType {
    Draw,
    Fill,
}

/// A solid colour packed as ARGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    pub argb: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PaintValue {
    Color(Color),
    Gradient {
        p1: Point,
        p2: Point,
        argb1: i32,
        argb2: i32,
    },
    Unknown {
        info: String,
    },
}
