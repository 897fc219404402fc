//! Top-level server events.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{
    CaretInfo, Color, CommonIntSize, CommonRectangle, ImageData, ImageId, Point, WindowData,
};
use crate::window_event::WindowEvent;

/// A single event of the server stream, dispatched by wire tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Event {
    ImageDataReply(ImageDataReply),
    PingReply(PingReply),
    Clipboard(Clipboard),
    WindowSetChanged(WindowSetChanged),
    DrawCommands(DrawCommands),
    CaretInfoChanged(CaretInfoChanged),
    Markdown(MarkdownEvent),
    WindowColors(WindowColors),
}

impl Event {
    /// Variant name, stable across releases. Markdown events report their
    /// own sub-kind (e.g. `MarkdownSetHtml`).
    pub fn kind_name(&self) -> &'static str {
        match self {
            Event::ImageDataReply(_) => "ImageDataReply",
            Event::PingReply(_) => "PingReply",
            Event::Clipboard(_) => "Clipboard",
            Event::WindowSetChanged(_) => "WindowSetChanged",
            Event::DrawCommands(_) => "DrawCommands",
            Event::CaretInfoChanged(_) => "CaretInfoChanged",
            Event::Markdown(md) => md.kind_name(),
            Event::WindowColors(_) => "WindowColors",
        }
    }
}

// ── Images ──────────────────────────────────────────────────────────

/// Answer to a client request for image pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageDataReply {
    pub image_id: ImageId,
    pub image_data: ImageData,
}

// ── Connection ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingReply {
    /// Milliseconds since the connection was opened.
    pub client_time_stamp: i32,
    /// Milliseconds since the connection was opened.
    pub server_read_event_time_stamp: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clipboard {
    pub string_content: String,
}

// ── Windows and drawing ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSetChanged {
    pub window_data_list: Vec<WindowData>,
}

/// A batch of drawing commands for one surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawCommands {
    pub target: Target,
    pub draw_events: Vec<WindowEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Target {
    Onscreen {
        window_id: i32,
    },
    Offscreen {
        p_volatile_image_id: i64,
        width: i32,
        height: i32,
    },
}

/// Mapping of colour names to values.
///
/// The wire decoding of this map is not implemented; decoded events always
/// carry an empty map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WindowColors {
    pub colors: BTreeMap<String, Color>,
}

// ── Carets ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaretInfoChanged {
    pub data: CaretInfoChange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CaretInfoChange {
    NoCarets,
    Carets(Carets),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Carets {
    pub caret_info_list: Vec<CaretInfo>,
    pub font_id: Option<i16>,
    pub font_size: i32,
    pub nominal_line_height: i32,
    pub plain_space_width: f32,
    pub editor_window_id: i32,
    pub editor_metrics: CommonRectangle,
}

// ── Markdown panels ─────────────────────────────────────────────────

/// Control of an embedded markdown preview panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MarkdownEvent {
    Show { panel_id: i32, show: bool },
    Resize { panel_id: i32, size: CommonIntSize },
    Move { panel_id: i32, point: Point },
    Dispose { panel_id: i32 },
    PlaceToWindow { panel_id: i32, window_id: i32 },
    SetHtml { panel_id: i32, html: String },
    SetCss { panel_id: i32, css: String },
    Scroll { panel_id: i32, scroll_offset: i32 },
    BrowseUri { link: String },
}

impl MarkdownEvent {
    pub fn kind_name(&self) -> &'static str {
        match self {
            MarkdownEvent::Show { .. } => "MarkdownShow",
            MarkdownEvent::Resize { .. } => "MarkdownResize",
            MarkdownEvent::Move { .. } => "MarkdownMove",
            MarkdownEvent::Dispose { .. } => "MarkdownDispose",
            MarkdownEvent::PlaceToWindow { .. } => "MarkdownPlaceToWindow",
            MarkdownEvent::SetHtml { .. } => "MarkdownSetHtml",
            MarkdownEvent::SetCss { .. } => "MarkdownSetCss",
            MarkdownEvent::Scroll { .. } => "MarkdownScroll",
            MarkdownEvent::BrowseUri { .. } => "MarkdownBrowseUri",
        }
    }

    /// Panel this event addresses. `BrowseUri` is not tied to a panel.
    pub fn panel_id(&self) -> Option<i32> {
        match self {
            MarkdownEvent::Show { panel_id, .. }
            | MarkdownEvent::Resize { panel_id, .. }
            | MarkdownEvent::Move { panel_id, .. }
            | MarkdownEvent::Dispose { panel_id }
            | MarkdownEvent::PlaceToWindow { panel_id, .. }
            | MarkdownEvent::SetHtml { panel_id, .. }
            | MarkdownEvent::SetCss { panel_id, .. }
            | MarkdownEvent::Scroll { panel_id, .. } => Some(*panel_id),
            MarkdownEvent::BrowseUri { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_kind_name_is_reported_by_event() {
        let event = Event::Markdown(MarkdownEvent::SetHtml {
            panel_id: 1,
            html: "<p/>".to_string(),
        });
        assert_eq!(event.kind_name(), "MarkdownSetHtml");
    }

    #[test]
    fn test_markdown_panel_id() {
        assert_eq!(MarkdownEvent::Dispose { panel_id: 4 }.panel_id(), Some(4));
        let browse = MarkdownEvent::BrowseUri {
            link: "https://example.com".to_string(),
        };
        assert_eq!(browse.panel_id(), None);
    }

    #[test]
    fn test_serialize_event_is_externally_tagged() {
        let event = Event::PingReply(PingReply {
            client_time_stamp: 10,
            server_read_event_time_stamp: 20,
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["PingReply"]["client_time_stamp"], 10);
        assert_eq!(json["PingReply"]["server_read_event_time_stamp"], 20);
    }
}
