//! Shape (content) layer commands: stroke and fill styling, creation and
//! corner editing.

use crate::shape::{
    self, fill_contents, fill_enabled_style, stroke_enabled_style, CornerRadii, FillContent,
    PatternName, Rgb, Rgba, ShapeGeometry,
};
use crate::{targeted, Keyword};
use descriptor::{
    unit, Command, Descriptor, Domain, EnumValue, Object, Reference, References, Result, Value,
};
use strum_macros::{Display, EnumIter, EnumString};

pub const REFERENCE_BY: References = References::new(Domain::CONTENT_LAYER);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum StrokeAlignment {
    Outside,
    Center,
    Inside,
}

impl StrokeAlignment {
    pub const ENUM_TYPE: &'static str = "strokeStyleLineAlignment";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Outside => "strokeStyleAlignOutside",
            Self::Center => "strokeStyleAlignCenter",
            Self::Inside => "strokeStyleAlignInside",
        }
    }
}

impl Keyword for StrokeAlignment {
    const TABLE: &'static str = "stroke alignment";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum StrokeCap {
    Square,
    Round,
    Butt,
}

impl StrokeCap {
    pub const ENUM_TYPE: &'static str = "strokeStyleLineCapType";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Square => "strokeStyleSquareCap",
            Self::Round => "strokeStyleRoundCap",
            Self::Butt => "strokeStyleButtCap",
        }
    }
}

impl Keyword for StrokeCap {
    const TABLE: &'static str = "stroke cap";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum StrokeCorner {
    Miter,
    Round,
    Bevel,
}

impl StrokeCorner {
    pub const ENUM_TYPE: &'static str = "strokeStyleLineJoinType";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Miter => "strokeStyleMiterJoin",
            Self::Round => "strokeStyleRoundJoin",
            Self::Bevel => "strokeStyleBevelJoin",
        }
    }
}

impl Keyword for StrokeCorner {
    const TABLE: &'static str = "stroke corner";
}

/// How a path was originally drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum OriginType {
    Undefined,
    None,
    Rect,
    RoundedRect,
    Polygon,
    Line,
    Ellipse,
    Custom,
}

impl OriginType {
    pub fn code(self) -> i32 {
        match self {
            Self::Undefined => -1,
            Self::None => 0,
            Self::Rect => 1,
            Self::RoundedRect => 2,
            Self::Polygon => 3,
            Self::Line => 4,
            Self::Ellipse => 5,
            Self::Custom => 6,
        }
    }
}

impl Keyword for OriginType {
    const TABLE: &'static str = "origin type";
}

/// Everything needed to draw a new shape layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeSettings {
    pub fill_enabled: bool,
    pub fill: FillContent,
    pub stroke_enabled: bool,
    pub stroke: FillContent,
    pub alignment: StrokeAlignment,
    pub cap: StrokeCap,
    pub corner: StrokeCorner,
    /// Stroke width in points.
    pub stroke_width: f64,
    pub geometry: ShapeGeometry,
}

fn set_shape_style(
    operation: &'static str,
    reference: Reference,
    style: Object,
) -> Result<Command> {
    let descriptor = targeted(operation, reference, &Domain::CONTENT_LAYER)?
        .with("to", Object::new("shapeStyle").with("strokeStyle", style));
    Command::new("set", descriptor)
}

/// A stroke style with the stroke on and one extra property set.
fn stroke_with(key: &str, value: impl Into<Value>) -> Object {
    Object::new("strokeStyle")
        .with("strokeEnabled", true)
        .with(key, value)
        .with("strokeStyleVersion", 2)
}

pub fn set_stroke_alignment(reference: Reference, alignment: StrokeAlignment) -> Result<Command> {
    let style = stroke_with(
        StrokeAlignment::ENUM_TYPE,
        EnumValue::new(StrokeAlignment::ENUM_TYPE, alignment.symbol()),
    );
    set_shape_style("set_stroke_alignment", reference, style)
}

pub fn set_stroke_cap(reference: Reference, cap: StrokeCap) -> Result<Command> {
    let style = stroke_with(
        StrokeCap::ENUM_TYPE,
        EnumValue::new(StrokeCap::ENUM_TYPE, cap.symbol()),
    );
    set_shape_style("set_stroke_cap", reference, style)
}

pub fn set_stroke_corner(reference: Reference, corner: StrokeCorner) -> Result<Command> {
    let style = stroke_with(
        StrokeCorner::ENUM_TYPE,
        EnumValue::new(StrokeCorner::ENUM_TYPE, corner.symbol()),
    );
    set_shape_style("set_stroke_corner", reference, style)
}

/// Stroke opacity, in percent.
pub fn set_stroke_opacity(reference: Reference, opacity: f64) -> Result<Command> {
    let style = stroke_with("strokeStyleOpacity", unit::percent(opacity)?);
    set_shape_style("set_stroke_opacity", reference, style)
}

/// Fill the shape with `color`, or turn the fill off when `None`.
pub fn set_shape_fill_solid_color(reference: Reference, color: Option<Rgb>) -> Result<Command> {
    let operation = "set_shape_fill_solid_color";
    let Some(color) = color else {
        return set_shape_style(operation, reference, fill_enabled_style(false));
    };
    let descriptor = targeted(operation, reference, &Domain::CONTENT_LAYER)?.with(
        "to",
        Object::new("shapeStyle")
            .with("fillContents", fill_contents(&FillContent::SolidColor(color))?)
            .with("strokeStyle", fill_enabled_style(true)),
    );
    Command::new("set", descriptor)
}

/// Stroke with `color`, or turn the stroke off when `None`. An alpha becomes
/// the stroke opacity.
pub fn set_stroke_fill_solid_color(reference: Reference, color: Option<Rgba>) -> Result<Command> {
    let operation = "set_stroke_fill_solid_color";
    let Some(color) = color else {
        return set_shape_style(operation, reference, stroke_enabled_style(false));
    };
    let mut style = stroke_with(
        "strokeStyleContent",
        fill_contents(&FillContent::SolidColor(color.rgb))?,
    );
    if let Some(alpha) = color.alpha {
        style = style.with("strokeStyleOpacity", unit::percent(alpha * 100.0)?);
    }
    set_shape_style(operation, reference, style)
}

/// Stroke width, in pixels.
pub fn set_shape_stroke_width(reference: Reference, width: f64) -> Result<Command> {
    let style = stroke_with("strokeStyleLineWidth", unit::pixels(width)?);
    set_shape_style("set_shape_stroke_width", reference, style)
}

/// Stroke with a preset pattern scaled by `scale` percent.
pub fn set_stroke_fill_pattern(
    reference: Reference,
    pattern: PatternName,
    scale: f64,
) -> Result<Command> {
    let content = FillContent::Pattern {
        name: pattern,
        scale: Some(scale),
    };
    let style = stroke_with("strokeStyleContent", fill_contents(&content)?);
    set_shape_style("set_stroke_fill_pattern", reference, style)
}

/// Fill with a preset pattern scaled by `scale` percent.
pub fn set_shape_fill_pattern(
    reference: Reference,
    pattern: PatternName,
    scale: f64,
) -> Result<Command> {
    let content = FillContent::Pattern {
        name: pattern,
        scale: Some(scale),
    };
    let descriptor = targeted("set_shape_fill_pattern", reference, &Domain::CONTENT_LAYER)?.with(
        "to",
        Object::new("shapeStyle")
            .with("fillContents", fill_contents(&content)?)
            .with("strokeStyle", fill_enabled_style(true)),
    );
    Command::new("set", descriptor)
}

pub fn delete_shape_style(reference: Reference) -> Result<Command> {
    let descriptor = targeted("delete_shape_style", reference, &Domain::CONTENT_LAYER)?
        .with("to", Object::new("deleteShapeStyle"));
    Command::new("set", descriptor)
}

/// Offset the shape by a distance on each axis.
pub fn move_shape(reference: Reference, horizontal: f64, vertical: f64) -> Result<Command> {
    let descriptor = targeted("move_shape", reference, &Domain::CONTENT_LAYER)?.with(
        "to",
        Object::new("offset")
            .with("horizontal", unit::distance(horizontal)?)
            .with("vertical", unit::distance(vertical)?),
    );
    Command::new("set", descriptor)
}

/// Draw a new shape layer.
///
/// `reference` is normally the content layer class, e.g.
/// `REFERENCE_BY.class()`.
pub fn create_shape(reference: Reference, settings: &ShapeSettings) -> Result<Command> {
    let stroke = Object::new("strokeStyle")
        .with("fillEnabled", settings.fill_enabled)
        .with("strokeEnabled", settings.stroke_enabled)
        .with("strokeStyleBlendMode", EnumValue::new("blendMode", "normal"))
        .with("strokeStyleContent", fill_contents(&settings.stroke)?)
        .with(
            StrokeAlignment::ENUM_TYPE,
            EnumValue::new(StrokeAlignment::ENUM_TYPE, settings.alignment.symbol()),
        )
        .with(
            StrokeCap::ENUM_TYPE,
            EnumValue::new(StrokeCap::ENUM_TYPE, settings.cap.symbol()),
        )
        .with("strokeStyleLineDashOffset", unit::points(0.0)?)
        .with("strokeStyleLineDashSet", Vec::<Value>::new())
        .with(
            StrokeCorner::ENUM_TYPE,
            EnumValue::new(StrokeCorner::ENUM_TYPE, settings.corner.symbol()),
        )
        .with("strokeStyleLineWidth", unit::points(settings.stroke_width)?)
        .with("strokeStyleMiterLimit", 100)
        .with("strokeStyleOpacity", unit::percent(100.0)?)
        .with("strokeStyleResolution", 72)
        .with("strokeStyleScaleLock", false)
        .with("strokeStyleStrokeAdjust", false)
        .with("strokeStyleVersion", 2);
    let layer = Object::new("contentLayer")
        .with("shape", shape::geometry(&settings.geometry)?)
        .with("strokeStyle", stroke)
        .with("type", fill_contents(&settings.fill)?);
    let descriptor =
        targeted("create_shape", reference, &Domain::CONTENT_LAYER)?.with("using", layer);
    Command::new("make", descriptor)
}

/// Change the corner radii of the selected rectangle. Absent corners take
/// `top_left`.
pub fn set_radius(
    top_left: f64,
    top_right: Option<f64>,
    bottom_right: Option<f64>,
    bottom_left: Option<f64>,
) -> Result<Command> {
    let radii = CornerRadii {
        top_left,
        top_right: top_right.unwrap_or(top_left),
        bottom_left: bottom_left.unwrap_or(top_left),
        bottom_right: bottom_right.unwrap_or(top_left),
    };
    Command::new(
        "changePathDetails",
        Descriptor::new()
            .with("keyActionChangeAllCorners", true)
            .with("keyOriginRRectRadii", radii.to_object()?)
            .with("keyOriginType", OriginType::Rect.code()),
    )
}
