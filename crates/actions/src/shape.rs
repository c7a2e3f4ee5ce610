//! Building blocks shared by the shape and artboard commands: colors, fill
//! contents, stroke style toggles and geometry.

use crate::Keyword;
use descriptor::{unit, Descriptor, Object, Result, UnitValue};
use strum_macros::{Display, EnumIter, EnumString};

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn to_object(self) -> Object {
        // The host spells the green channel "grain".
        Object::new("RGBColor")
            .with("red", self.red)
            .with("grain", self.green)
            .with("blue", self.blue)
    }
}

/// An RGB color with an optional alpha in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: Option<f64>,
}

/// Pattern presets shipped with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum PatternName {
    #[strum(serialize = "pBubbles")]
    Bubbles,
    #[strum(serialize = "pTieDye")]
    TieDye,
    #[strum(serialize = "pLaidhorizontal")]
    LaidHorizontal,
    #[strum(serialize = "pFineGrain")]
    FineGrain,
    #[strum(serialize = "pGrayGranite")]
    GrayGranite,
}

impl PatternName {
    pub fn id(self) -> &'static str {
        match self {
            Self::Bubbles => "b7334da0-122f-11d4-8bb5-e27e45023b5f",
            Self::TieDye => "1b29876b-58b7-11d4-b895-a898787104c1",
            Self::LaidHorizontal => "52a93427-f5d6-1172-a989-8dc82a43aa51",
            Self::FineGrain => "c02fddff-f05a-1172-9a0f-f7bad69dd4b0",
            Self::GrayGranite => "f293c3d4-57f7-1177-b70c-a0459fa92660",
        }
    }

    /// Localization key and fallback name.
    pub fn localized_name(self) -> &'static str {
        match self {
            Self::Bubbles => "$$$/Presets/Patterns/Patterns_pat/Bubbles=Bubbles",
            Self::TieDye => "$$$/Presets/Patterns/Patterns_pat/TieDye=Tie Dye",
            Self::LaidHorizontal => {
                "$$$/Presets/Patterns/Patterns_pat/Laidhorizontal=Laid-horizontal"
            }
            Self::FineGrain => "$$$/Presets/Patterns/Patterns_pat/FineGrain=Fine Grain",
            Self::GrayGranite => "$$$/Presets/Patterns/Patterns_pat/GrayGranite=Gray Granite",
        }
    }

    pub fn to_object(self) -> Object {
        Object::new("pattern")
            .with("ID", self.id())
            .with("name", self.localized_name())
    }
}

impl Keyword for PatternName {
    const TABLE: &'static str = "pattern";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ContentType {
    SolidColor,
    Gradient,
    Pattern,
}

impl ContentType {
    /// Class of the fill layer holding this kind of content.
    pub fn layer_class(self) -> &'static str {
        match self {
            Self::SolidColor => "solidColorLayer",
            Self::Gradient => "gradientLayer",
            Self::Pattern => "patternLayer",
        }
    }
}

impl Keyword for ContentType {
    const TABLE: &'static str = "content type";
}

/// What a shape is filled or stroked with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FillContent {
    SolidColor(Rgb),
    Pattern { name: PatternName, scale: Option<f64> },
}

impl FillContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::SolidColor(_) => ContentType::SolidColor,
            Self::Pattern { .. } => ContentType::Pattern,
        }
    }
}

/// The fill layer object for `content`.
pub fn fill_contents(content: &FillContent) -> Result<Object> {
    let class = content.content_type().layer_class();
    let object = match content {
        FillContent::SolidColor(rgb) => Object::new(class).with("color", rgb.to_object()),
        FillContent::Pattern { name, scale } => {
            let object = Object::new(class)
                .with("align", true)
                .with("pattern", name.to_object())
                .with(
                    "phase",
                    Object::new("paint")
                        .with("horizontal", 0)
                        .with("vertical", 0),
                );
            match scale {
                Some(scale) => object.with("scale", unit::percent(*scale)?),
                None => object,
            }
        }
    };
    Ok(object)
}

/// A stroke style that only toggles the fill.
pub fn fill_enabled_style(enabled: bool) -> Object {
    Object::new("strokeStyle")
        .with("fillEnabled", enabled)
        .with("strokeStyleVersion", 2)
}

/// A stroke style that only toggles the stroke.
pub fn stroke_enabled_style(enabled: bool) -> Object {
    Object::new("strokeStyle")
        .with("strokeEnabled", enabled)
        .with("strokeStyleVersion", 2)
}

/// Edges of a box, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Bounds {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Edges wrapped as pixel units.
    pub fn to_pixels(self) -> Result<Descriptor> {
        Ok(Descriptor::new()
            .with("top", unit::pixels(self.top)?)
            .with("bottom", unit::pixels(self.bottom)?)
            .with("left", unit::pixels(self.left)?)
            .with("right", unit::pixels(self.right)?))
    }

    /// Edges as a raw float rectangle, the way artboards take them.
    pub fn to_float_rect(self) -> Object {
        Object::new("classFloatRect")
            .with("top", self.top)
            .with("bottom", self.bottom)
            .with("left", self.left)
            .with("right", self.right)
    }
}

/// Corner radii of a rounded rectangle, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CornerRadii {
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    fn entries(self) -> Result<[(&'static str, UnitValue); 4]> {
        Ok([
            ("topLeft", unit::pixels(self.top_left)?),
            ("topRight", unit::pixels(self.top_right)?),
            ("bottomLeft", unit::pixels(self.bottom_left)?),
            ("bottomRight", unit::pixels(self.bottom_right)?),
        ])
    }

    /// The `radii` object used when editing an existing rectangle.
    pub fn to_object(self) -> Result<Object> {
        let descriptor: Descriptor = self.entries()?.into_iter().collect();
        Ok(Object::from_descriptor("radii", descriptor).with("unitValueQuadVersion", 1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeGeometry {
    Rectangle {
        bounds: Bounds,
        radii: Option<CornerRadii>,
    },
    Ellipse {
        bounds: Bounds,
    },
}

/// The `shape` object for a new content layer.
pub fn geometry(shape: &ShapeGeometry) -> Result<Object> {
    let object = match shape {
        ShapeGeometry::Rectangle { bounds, radii } => {
            let mut descriptor = bounds.to_pixels()?;
            if let Some(radii) = radii {
                for (key, value) in radii.entries()? {
                    descriptor.insert(key, value);
                }
            }
            Object::from_descriptor("rectangle", descriptor)
        }
        ShapeGeometry::Ellipse { bounds } => Object::from_descriptor("ellipse", bounds.to_pixels()?),
    };
    Ok(object.with("unitValueQuadVersion", 1))
}
