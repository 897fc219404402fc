//! Leaf records, shared sum types and string enums.

use std::sync::OnceLock;

use projector_protocol::{
    CaretInfo, Color, CommonIntSize, CommonRectangle, CursorType, ImageData, ImageId, PaintType,
    PaintValue, Point, WindowData, WindowType,
};

use crate::access::{field, optional_field, record_field};
use crate::error::DecodeError;
use crate::table::{LetterTable, TagTable};
use crate::wire::WireMap;

// ── Records ─────────────────────────────────────────────────────────

pub(crate) fn point(c: &WireMap) -> Result<Point, DecodeError> {
    Ok(Point {
        x: field(c, "a")?,
        y: field(c, "b")?,
    })
}

pub(crate) fn rectangle(c: &WireMap) -> Result<CommonRectangle, DecodeError> {
    Ok(CommonRectangle {
        x: field(c, "a")?,
        y: field(c, "b")?,
        width: field(c, "c")?,
        height: field(c, "d")?,
    })
}

pub(crate) fn int_size(c: &WireMap) -> Result<CommonIntSize, DecodeError> {
    Ok(CommonIntSize {
        width: field(c, "a")?,
        height: field(c, "b")?,
    })
}

pub(crate) fn caret_info(c: &WireMap) -> Result<CaretInfo, DecodeError> {
    Ok(CaretInfo {
        location_in_window: record_field(c, "a", point)?,
    })
}

pub(crate) fn window_data(c: &WireMap) -> Result<WindowData, DecodeError> {
    Ok(WindowData {
        id: field(c, "a")?,
        title: optional_field(c, "b")?,
        icon_ids: image_ids().list_field(c, "c", false)?,
        focused: field(c, "d")?,
        order: field(c, "e")?,
        bounds: record_field(c, "f", rectangle)?,
        cursor_type: CURSOR_TYPES.optional_field(c, "g")?,
        always_on_top: field(c, "h")?,
        no_title: field(c, "i")?,
        fullscreen: field(c, "j")?,
        window_type: WINDOW_TYPES.field(c, "k")?,
        parent_id: optional_field(c, "l")?,
    })
}

// ── Sum types ───────────────────────────────────────────────────────

pub(crate) fn image_ids() -> &'static TagTable<ImageId> {
    static TABLE: OnceLock<TagTable<ImageId>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "ImageId",
            &[
                ("a", |c| {
                    Ok(ImageId::BufferedImageId {
                        identity_hash: field(c, "a")?,
                        state_hash: field(c, "b")?,
                    })
                }),
                ("b", |c| Ok(ImageId::PVolatileImageId { id: field(c, "a")? })),
                ("c", |c| {
                    Ok(ImageId::Unknown {
                        class_name: field(c, "a")?,
                    })
                }),
            ],
        )
    })
}

pub(crate) fn image_data() -> &'static TagTable<ImageData> {
    static TABLE: OnceLock<TagTable<ImageData>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "ImageData",
            &[
                ("a", |c| {
                    Ok(ImageData::PngBase64 {
                        png_base64: field(c, "a")?,
                    })
                }),
                ("b", |_| Ok(ImageData::Empty)),
            ],
        )
    })
}

pub(crate) fn color(c: &WireMap) -> Result<Color, DecodeError> {
    Ok(Color {
        argb: field(c, "a")?,
    })
}

pub(crate) fn paint_values() -> &'static TagTable<PaintValue> {
    static TABLE: OnceLock<TagTable<PaintValue>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "PaintValue",
            &[
                ("a", |c| Ok(PaintValue::Color(color(c)?))),
                ("b", |c| {
                    Ok(PaintValue::Gradient {
                        p1: record_field(c, "a", point)?,
                        p2: record_field(c, "b", point)?,
                        argb1: field(c, "c")?,
                        argb2: field(c, "d")?,
                    })
                }),
                ("c", |c| Ok(PaintValue::Unknown { info: field(c, "a")? })),
            ],
        )
    })
}

// ── String enums ────────────────────────────────────────────────────

pub(crate) static PAINT_TYPES: LetterTable<PaintType> = LetterTable {
    name: "PaintType",
    entries: &[("a", PaintType::Draw), ("b", PaintType::Fill)],
};

pub(crate) static WINDOW_TYPES: LetterTable<WindowType> = LetterTable {
    name: "WindowType",
    entries: &[
        ("a", WindowType::Window),
        ("b", WindowType::Popup),
        ("c", WindowType::IdeaWindow),
    ],
};

pub(crate) static CURSOR_TYPES: LetterTable<CursorType> = LetterTable {
    name: "CursorType",
    entries: &[
        ("a", CursorType::Default),
        ("b", CursorType::Crosshair),
        ("c", CursorType::Text),
        ("d", CursorType::Wait),
        ("e", CursorType::SwResize),
        ("f", CursorType::SeResize),
        ("g", CursorType::NwResize),
        ("h", CursorType::NeResize),
        ("i", CursorType::NResize),
        ("j", CursorType::SResize),
        ("k", CursorType::WResize),
        ("l", CursorType::EResize),
        ("m", CursorType::Hand),
        ("n", CursorType::Move),
    ],
};
