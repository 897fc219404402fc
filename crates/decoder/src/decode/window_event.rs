//! Drawing commands and the shapes, strokes and composites they carry.

use std::sync::OnceLock;

use projector_protocol::{
    AlphaCompositeRule, CapType, CommonComposite, CommonPath, CommonShape, CopyArea, DrawImage,
    DrawLine, DrawPolyline, DrawString, ImageEventInfo, JoinType, PaintArc, PaintOval, PaintPath,
    PaintPolygon, PaintRect, PaintRoundRect, PathSegment, SetClip, SetComposite, SetFont,
    SetPaint, SetStroke, SetTransform, SetUnknownStroke, StrokeData, WindingType, WindowEvent,
};

use crate::access::{field, list_field, optional_field, record_field, record_list, scalar_list};
use crate::decode::data::{image_ids, paint_values, point, rectangle, PAINT_TYPES};
use crate::error::DecodeError;
use crate::table::{LetterTable, TagTable};
use crate::wire::{WireMap, WireValue};

pub(crate) fn window_events() -> &'static TagTable<WindowEvent> {
    static TABLE: OnceLock<TagTable<WindowEvent>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "WindowEvent",
            &[
                ("a", paint_arc),
                ("b", paint_oval),
                ("c", paint_round_rect),
                ("d", paint_rect),
                ("e", draw_line),
                ("f", copy_area),
                ("g", |c| {
                    Ok(WindowEvent::SetFont(SetFont {
                        font_id: optional_field(c, "a")?,
                        font_size: field(c, "b")?,
                    }))
                }),
                ("h", |c| {
                    Ok(WindowEvent::SetClip(SetClip {
                        shape: shapes().optional_field(c, "a")?,
                    }))
                }),
                ("i", |c| {
                    Ok(WindowEvent::SetStroke(SetStroke {
                        stroke_data: strokes().field(c, "a")?,
                    }))
                }),
                ("j", |_| Ok(WindowEvent::DrawRenderedImage)),
                ("k", |_| Ok(WindowEvent::DrawRenderableImage)),
                ("l", |c| {
                    Ok(WindowEvent::DrawImage(DrawImage {
                        image_id: image_ids().field(c, "a")?,
                        image_event_info: image_infos().field(c, "b")?,
                    }))
                }),
                ("m", draw_string),
                ("n", |c| {
                    Ok(WindowEvent::PaintPolygon(PaintPolygon {
                        paint_type: PAINT_TYPES.field(c, "a")?,
                        points: record_list(c, "b", false, point)?,
                    }))
                }),
                ("o", |c| {
                    Ok(WindowEvent::DrawPolyline(DrawPolyline {
                        points: record_list(c, "a", false, point)?,
                    }))
                }),
                ("p", |c| {
                    Ok(WindowEvent::SetTransform(SetTransform {
                        tx: transform(c, "a")?,
                    }))
                }),
                ("q", |c| {
                    Ok(WindowEvent::PaintPath(PaintPath {
                        paint_type: PAINT_TYPES.field(c, "a")?,
                        path: record_field(c, "b", path)?,
                    }))
                }),
                ("r", |c| {
                    Ok(WindowEvent::SetComposite(SetComposite {
                        composite: composites().field(c, "a")?,
                    }))
                }),
                ("s", |c| {
                    Ok(WindowEvent::SetPaint(SetPaint {
                        paint: paint_values().field(c, "a")?,
                    }))
                }),
                ("t", |c| {
                    Ok(WindowEvent::SetUnknownStroke(SetUnknownStroke {
                        class_name: field(c, "a")?,
                    }))
                }),
            ],
        )
    })
}

fn paint_arc(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::PaintArc(PaintArc {
        paint_type: PAINT_TYPES.field(c, "a")?,
        x: field(c, "b")?,
        y: field(c, "c")?,
        width: field(c, "d")?,
        height: field(c, "e")?,
        start_angle: field(c, "f")?,
        arc_angle: field(c, "g")?,
    }))
}

fn paint_oval(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::PaintOval(PaintOval {
        paint_type: PAINT_TYPES.field(c, "a")?,
        x: field(c, "b")?,
        y: field(c, "c")?,
        width: field(c, "d")?,
        height: field(c, "e")?,
    }))
}

fn paint_round_rect(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::PaintRoundRect(PaintRoundRect {
        paint_type: PAINT_TYPES.field(c, "a")?,
        x: field(c, "b")?,
        y: field(c, "c")?,
        width: field(c, "d")?,
        height: field(c, "e")?,
        arc_width: field(c, "f")?,
        arc_height: field(c, "g")?,
    }))
}

fn paint_rect(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::PaintRect(PaintRect {
        paint_type: PAINT_TYPES.field(c, "a")?,
        x: field(c, "b")?,
        y: field(c, "c")?,
        width: field(c, "d")?,
        height: field(c, "e")?,
    }))
}

fn draw_line(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::DrawLine(DrawLine {
        x1: field(c, "a")?,
        y1: field(c, "b")?,
        x2: field(c, "c")?,
        y2: field(c, "d")?,
    }))
}

fn copy_area(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::CopyArea(CopyArea {
        x: field(c, "a")?,
        y: field(c, "b")?,
        width: field(c, "c")?,
        height: field(c, "d")?,
        dx: field(c, "e")?,
        dy: field(c, "f")?,
    }))
}

fn draw_string(c: &WireMap) -> Result<WindowEvent, DecodeError> {
    Ok(WindowEvent::DrawString(DrawString {
        str: field(c, "a")?,
        x: field(c, "b")?,
        y: field(c, "c")?,
        desired_width: field(c, "d")?,
    }))
}

fn transform(c: &WireMap, key: &str) -> Result<Vec<f64>, DecodeError> {
    scalar_list(list_field(c, key, false)?, key)
}

// ── Image placement ─────────────────────────────────────────────────

fn image_infos() -> &'static TagTable<ImageEventInfo> {
    static TABLE: OnceLock<TagTable<ImageEventInfo>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "ImageEventInfo",
            &[
                ("a", |c| {
                    Ok(ImageEventInfo::Xy {
                        x: field(c, "a")?,
                        y: field(c, "b")?,
                        argb_background_color: optional_field(c, "c")?,
                    })
                }),
                ("b", |c| {
                    Ok(ImageEventInfo::XyWh {
                        x: field(c, "a")?,
                        y: field(c, "b")?,
                        width: field(c, "c")?,
                        height: field(c, "d")?,
                        argb_background_color: optional_field(c, "e")?,
                    })
                }),
                ("c", |c| {
                    Ok(ImageEventInfo::Ds {
                        dx1: field(c, "a")?,
                        dy1: field(c, "b")?,
                        dx2: field(c, "c")?,
                        dy2: field(c, "d")?,
                        sx1: field(c, "e")?,
                        sy1: field(c, "f")?,
                        sx2: field(c, "g")?,
                        sy2: field(c, "h")?,
                        argb_background_color: optional_field(c, "i")?,
                    })
                }),
                ("d", |c| {
                    Ok(ImageEventInfo::Transformed {
                        tx: transform(c, "a")?,
                    })
                }),
            ],
        )
    })
}

// ── Strokes and composites ──────────────────────────────────────────

static JOIN_TYPES: LetterTable<JoinType> = LetterTable {
    name: "JoinType",
    entries: &[
        ("a", JoinType::Miter),
        ("b", JoinType::Round),
        ("c", JoinType::Bevel),
    ],
};

static CAP_TYPES: LetterTable<CapType> = LetterTable {
    name: "CapType",
    entries: &[
        ("a", CapType::Butt),
        ("b", CapType::Round),
        ("c", CapType::Square),
    ],
};

fn strokes() -> &'static TagTable<StrokeData> {
    static TABLE: OnceLock<TagTable<StrokeData>> = OnceLock::new();
    TABLE.get_or_init(|| TagTable::new("StrokeData", &[("a", basic_stroke)]))
}

fn basic_stroke(c: &WireMap) -> Result<StrokeData, DecodeError> {
    Ok(StrokeData::Basic {
        line_width: field(c, "a")?,
        join_type: JOIN_TYPES.field(c, "b")?,
        end_cap: CAP_TYPES.field(c, "c")?,
        miter_limit: field(c, "d")?,
        dash_phase: field(c, "e")?,
        dash_array: optional_scalar_list(c, "f")?,
    })
}

fn optional_scalar_list(c: &WireMap, key: &str) -> Result<Option<Vec<f32>>, DecodeError> {
    match c.get(key) {
        None | Some(WireValue::Null) => Ok(None),
        Some(_) => Ok(Some(scalar_list(list_field(c, key, false)?, key)?)),
    }
}

static ALPHA_COMPOSITE_RULES: LetterTable<AlphaCompositeRule> = LetterTable {
    name: "AlphaCompositeRule",
    entries: &[
        ("a", AlphaCompositeRule::SrcOver),
        ("b", AlphaCompositeRule::DstOver),
        ("c", AlphaCompositeRule::SrcIn),
        ("d", AlphaCompositeRule::Clear),
        ("e", AlphaCompositeRule::Src),
        ("f", AlphaCompositeRule::Dst),
        ("g", AlphaCompositeRule::DstIn),
        ("h", AlphaCompositeRule::SrcOut),
        ("i", AlphaCompositeRule::DstOut),
        ("j", AlphaCompositeRule::SrcAtop),
        ("k", AlphaCompositeRule::DstAtop),
        ("l", AlphaCompositeRule::Xor),
    ],
};

fn composites() -> &'static TagTable<CommonComposite> {
    static TABLE: OnceLock<TagTable<CommonComposite>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "CommonComposite",
            &[
                ("a", |c| {
                    Ok(CommonComposite::AlphaComposite {
                        rule: ALPHA_COMPOSITE_RULES.field(c, "a")?,
                        extra_alpha: field(c, "b")?,
                    })
                }),
                ("b", |c| {
                    Ok(CommonComposite::UnknownComposite {
                        message: field(c, "a")?,
                    })
                }),
            ],
        )
    })
}

// ── Shapes and paths ────────────────────────────────────────────────

fn shapes() -> &'static TagTable<CommonShape> {
    static TABLE: OnceLock<TagTable<CommonShape>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "CommonShape",
            &[
                ("a", |c| Ok(CommonShape::Rectangle(rectangle(c)?))),
                ("b", |c| Ok(CommonShape::Path(path(c)?))),
            ],
        )
    })
}

static WINDING_TYPES: LetterTable<WindingType> = LetterTable {
    name: "WindingType",
    entries: &[("a", WindingType::EvenOdd), ("b", WindingType::NonZero)],
};

fn path(c: &WireMap) -> Result<CommonPath, DecodeError> {
    Ok(CommonPath {
        segments: path_segments().list_field(c, "a", false)?,
        winding: WINDING_TYPES.field(c, "b")?,
    })
}

fn path_segments() -> &'static TagTable<PathSegment> {
    static TABLE: OnceLock<TagTable<PathSegment>> = OnceLock::new();
    TABLE.get_or_init(|| {
        TagTable::new(
            "PathSegment",
            &[
                ("a", |c| {
                    Ok(PathSegment::MoveTo {
                        point: record_field(c, "a", point)?,
                    })
                }),
                ("b", |c| {
                    Ok(PathSegment::LineTo {
                        point: record_field(c, "a", point)?,
                    })
                }),
                ("c", |c| {
                    Ok(PathSegment::QuadTo {
                        p1: record_field(c, "a", point)?,
                        p2: record_field(c, "b", point)?,
                    })
                }),
                ("d", |c| {
                    Ok(PathSegment::CubicTo {
                        p1: record_field(c, "a", point)?,
                        p2: record_field(c, "b", point)?,
                        p3: record_field(c, "c", point)?,
                    })
                }),
                ("e", |_| Ok(PathSegment::Close)),
            ],
        )
    })
}
