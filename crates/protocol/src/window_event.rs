//! Drawing commands replayed by the client onto a window or offscreen surface.

use serde::Serialize;

use crate::data::{CommonRectangle, ImageId, PaintType, PaintValue, Point};

/// One drawing command inside a [`crate::DrawCommands`] event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WindowEvent {
    PaintArc(PaintArc),
    PaintOval(PaintOval),
    PaintRoundRect(PaintRoundRect),
    PaintRect(PaintRect),
    DrawLine(DrawLine),
    CopyArea(CopyArea),
    SetFont(SetFont),
    SetClip(SetClip),
    SetStroke(SetStroke),
    DrawRenderedImage,
    DrawRenderableImage,
    DrawImage(DrawImage),
    DrawString(DrawString),
    PaintPolygon(PaintPolygon),
    DrawPolyline(DrawPolyline),
    SetTransform(SetTransform),
    PaintPath(PaintPath),
    SetComposite(SetComposite),
    SetPaint(SetPaint),
    SetUnknownStroke(SetUnknownStroke),
}

impl WindowEvent {
    /// Variant name, stable across releases.
    pub fn kind_name(&self) -> &'static str {
        match self {
            WindowEvent::PaintArc(_) => "PaintArc",
            WindowEvent::PaintOval(_) => "PaintOval",
            WindowEvent::PaintRoundRect(_) => "PaintRoundRect",
            WindowEvent::PaintRect(_) => "PaintRect",
            WindowEvent::DrawLine(_) => "DrawLine",
            WindowEvent::CopyArea(_) => "CopyArea",
            WindowEvent::SetFont(_) => "SetFont",
            WindowEvent::SetClip(_) => "SetClip",
            WindowEvent::SetStroke(_) => "SetStroke",
            WindowEvent::DrawRenderedImage => "DrawRenderedImage",
            WindowEvent::DrawRenderableImage => "DrawRenderableImage",
            WindowEvent::DrawImage(_) => "DrawImage",
            WindowEvent::DrawString(_) => "DrawString",
            WindowEvent::PaintPolygon(_) => "PaintPolygon",
            WindowEvent::DrawPolyline(_) => "DrawPolyline",
            WindowEvent::SetTransform(_) => "SetTransform",
            WindowEvent::PaintPath(_) => "PaintPath",
            WindowEvent::SetComposite(_) => "SetComposite",
            WindowEvent::SetPaint(_) => "SetPaint",
            WindowEvent::SetUnknownStroke(_) => "SetUnknownStroke",
        }
    }
}

// ── Primitive shapes ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintArc {
    pub paint_type: PaintType,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub start_angle: i32,
    pub arc_angle: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintOval {
    pub paint_type: PaintType,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintRoundRect {
    pub paint_type: PaintType,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub arc_width: i32,
    pub arc_height: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintRect {
    pub paint_type: PaintType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawLine {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintPolygon {
    pub paint_type: PaintType,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawPolyline {
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintPath {
    pub paint_type: PaintType,
    pub path: CommonPath,
}

// ── Graphics state ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetFont {
    /// `None` selects the client's default font.
    pub font_id: Option<i16>,
    pub font_size: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetClip {
    /// `None` removes the clip.
    pub shape: Option<CommonShape>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetStroke {
    pub stroke_data: StrokeData,
}

/// 2D affine transform as the six matrix entries `[m00, m10, m01, m11, m02, m12]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetTransform {
    pub tx: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetComposite {
    pub composite: CommonComposite,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetPaint {
    pub paint: PaintValue,
}

/// A stroke implementation the server could not describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetUnknownStroke {
    pub class_name: String,
}

// ── Images and text ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawImage {
    pub image_id: ImageId,
    pub image_event_info: ImageEventInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawString {
    pub str: String,
    pub x: f64,
    pub y: f64,
    pub desired_width: f64,
}

/// Placement of a drawn image, mirroring the `drawImage` overloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageEventInfo {
    Xy {
        x: i32,
        y: i32,
        argb_background_color: Option<i32>,
    },
    XyWh {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        argb_background_color: Option<i32>,
    },
    Ds {
        dx1: i32,
        dy1: i32,
        dx2: i32,
        dy2: i32,
        sx1: i32,
        sy1: i32,
        sx2: i32,
        sy2: i32,
        argb_background_color: Option<i32>,
    },
    Transformed {
        tx: Vec<f64>,
    },
}

// ── Strokes and composites ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StrokeData {
    Basic {
        line_width: f32,
        join_type: JoinType,
        end_cap: CapType,
        miter_limit: f32,
        dash_phase: f32,
        dash_array: Option<Vec<f32>>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JoinType {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CapType {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommonComposite {
    AlphaComposite {
        rule: AlphaCompositeRule,
        extra_alpha: f32,
    },
    UnknownComposite {
        message: String,
    },
}

/// Porter-Duff compositing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlphaCompositeRule {
    SrcOver,
    DstOver,
    SrcIn,
    Clear,
    Src,
    Dst,
    DstIn,
    SrcOut,
    DstOut,
    SrcAtop,
    DstAtop,
    Xor,
}

// ── Shapes and paths ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CommonShape {
    Rectangle(CommonRectangle),
    Path(CommonPath),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommonPath {
    pub segments: Vec<PathSegment>,
    pub winding: WindingType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathSegment {
    MoveTo { point: Point },
    LineTo { point: Point },
    QuadTo { p1: Point, p2: Point },
    CubicTo { p1: Point, p2: Point, p3: Point },
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindingType {
    EvenOdd,
    NonZero,
}
