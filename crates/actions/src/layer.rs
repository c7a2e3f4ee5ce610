//! Layer commands.

use crate::{on_target, targeted, Keyword};
use descriptor::{
    unit, Command, Descriptor, Domain, EnumValue, Object, Reference, References, Result,
    UnitValue, Value, TARGET_KEY,
};
use strum_macros::{Display, EnumIter, EnumString};

pub const REFERENCE_BY: References = References::new(Domain::LAYER);

/// Kind codes the host reports for a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum LayerKind {
    Any,
    Pixel,
    Adjustment,
    Text,
    Vector,
    SmartObject,
    Video,
    Group,
    #[strum(serialize = "3d")]
    ThreeD,
    Gradient,
    Pattern,
    SolidColor,
    Background,
    GroupEnd,
}

impl LayerKind {
    pub fn code(self) -> u32 {
        match self {
            Self::Any => 0,
            Self::Pixel => 1,
            Self::Adjustment => 2,
            Self::Text => 3,
            Self::Vector => 4,
            Self::SmartObject => 5,
            Self::Video => 6,
            Self::Group => 7,
            Self::ThreeD => 8,
            Self::Gradient => 9,
            Self::Pattern => 10,
            Self::SolidColor => 11,
            Self::Background => 12,
            Self::GroupEnd => 13,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|kind| kind.code() == code)
    }
}

impl Keyword for LayerKind {
    const TABLE: &'static str = "layer kind";
}

/// Edge or center to align or distribute on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Alignment {
    Left,
    Right,
    #[strum(to_string = "center", serialize = "horizontally", serialize = "hCenter")]
    Center,
    #[strum(to_string = "middle", serialize = "vertically", serialize = "vCenter")]
    Middle,
    Top,
    Bottom,
}

impl Alignment {
    pub const ENUM_TYPE: &'static str = "alignDistributeSelector";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Left => "ADSLefts",
            Self::Right => "ADSRights",
            Self::Center => "ADSCentersH",
            Self::Middle => "ADSCentersV",
            Self::Top => "ADSTops",
            Self::Bottom => "ADSBottoms",
        }
    }
}

impl Keyword for Alignment {
    const TABLE: &'static str = "alignment";
}

/// How a selection combines with the layers already selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SelectionModifier {
    #[default]
    Select,
    Deselect,
    Add,
    AddUpTo,
}

impl SelectionModifier {
    pub const ENUM_TYPE: &'static str = "selectionModifierType";

    pub fn symbol(self) -> &'static str {
        match self {
            // The host reads a plain select as the zero modifier.
            Self::Select => "0",
            Self::Deselect => "removeFromSelection",
            Self::Add => "addToSelection",
            Self::AddUpTo => "addToSelectionContinuous",
        }
    }
}

impl Keyword for SelectionModifier {
    const TABLE: &'static str = "selection modifier";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const ENUM_TYPE: &'static str = "orientation";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl Keyword for Orientation {
    const TABLE: &'static str = "orientation";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum BlendMode {
    Normal,
    Dissolve,
    Darken,
    Multiply,
    ColorBurn,
    LinearBurn,
    DarkerColor,
    Lighten,
    Screen,
    ColorDodge,
    LinearDodge,
    LighterColor,
    Overlay,
    SoftLight,
    HardLight,
    VividLight,
    LinearLight,
    PinLight,
    HardMix,
    Difference,
    Exclusion,
    Subtract,
    Divide,
    Hue,
    Saturation,
    Color,
    Luminosity,
    PassThrough,
}

impl BlendMode {
    pub const ENUM_TYPE: &'static str = "blendMode";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Dissolve => "dissolve",
            Self::Darken => "darken",
            Self::Multiply => "multiply",
            Self::ColorBurn => "colorBurn",
            Self::LinearBurn => "linearBurn",
            Self::DarkerColor => "darkerColor",
            Self::Lighten => "lighten",
            Self::Screen => "screen",
            Self::ColorDodge => "colorDodge",
            Self::LinearDodge => "linearDodge",
            Self::LighterColor => "lighterColor",
            Self::Overlay => "overlay",
            Self::SoftLight => "softLight",
            Self::HardLight => "hardLight",
            Self::VividLight => "vividLight",
            Self::LinearLight => "linearLight",
            Self::PinLight => "pinLight",
            Self::HardMix => "hardMix",
            Self::Difference => "difference",
            Self::Exclusion => "exclusion",
            Self::Subtract => "blendSubtraction",
            Self::Divide => "blendDivide",
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Color => "color",
            Self::Luminosity => "luminosity",
            Self::PassThrough => "passThrough",
        }
    }
}

impl Keyword for BlendMode {
    const TABLE: &'static str = "blend mode";
}

/// Move `source` to the position named by `to`.
pub fn reorder(source: Reference, to: Reference) -> Result<Command> {
    let descriptor = targeted("reorder", source, &Domain::LAYER)?
        .with("adjustment", false)
        .with("to", to)
        .with("version", 5);
    Command::new("move", descriptor)
}

pub fn align(reference: Reference, alignment: Alignment) -> Result<Command> {
    let descriptor = targeted("align", reference, &Domain::LAYER)?.with(
        "using",
        EnumValue::new(Alignment::ENUM_TYPE, alignment.symbol()),
    );
    Command::new("align", descriptor)
}

pub fn distribute(reference: Reference, alignment: Alignment) -> Result<Command> {
    let descriptor = targeted("distribute", reference, &Domain::LAYER)?.with(
        "using",
        EnumValue::new(Alignment::ENUM_TYPE, alignment.symbol()),
    );
    Command::new("distribute", descriptor)
}

/// Select `reference`; `make_visible` defaults to false and `modifier` to a
/// plain select.
pub fn select(
    reference: Reference,
    make_visible: Option<bool>,
    modifier: Option<SelectionModifier>,
) -> Result<Command> {
    let modifier = modifier.unwrap_or_default();
    let descriptor = targeted("select", reference, &Domain::LAYER)?
        .with("makeVisible", make_visible.unwrap_or(false))
        .with(
            "selectionModifier",
            EnumValue::new(SelectionModifier::ENUM_TYPE, modifier.symbol()),
        );
    Command::new("select", descriptor)
}

pub fn deselect_all() -> Result<Command> {
    Command::new(
        "selectNoLayers",
        Descriptor::new().with(TARGET_KEY, REFERENCE_BY.target()),
    )
}

pub fn hide(reference: Reference) -> Result<Command> {
    on_target("hide", reference, &Domain::LAYER)
}

pub fn show(reference: Reference) -> Result<Command> {
    on_target("show", reference, &Domain::LAYER)
}

/// Duplicate `reference`, naming the copy when `name` is given.
pub fn duplicate(reference: Reference, name: Option<&str>) -> Result<Command> {
    let mut descriptor = targeted("duplicate", reference, &Domain::LAYER)?;
    if let Some(name) = name {
        descriptor.insert("name", name);
    }
    Command::new("duplicate", descriptor)
}

pub fn flip(reference: Reference, orientation: Orientation) -> Result<Command> {
    let descriptor = targeted("flip", reference, &Domain::LAYER)?.with(
        "axis",
        EnumValue::new(Orientation::ENUM_TYPE, orientation.symbol()),
    );
    Command::new("flip", descriptor)
}

/// Resize `reference`; an absent dimension is left to the host.
pub fn set_size(
    reference: Reference,
    width: Option<UnitValue>,
    height: Option<UnitValue>,
) -> Result<Command> {
    let mut descriptor = targeted("set_size", reference, &Domain::LAYER)?;
    if let Some(width) = width {
        descriptor.insert("width", width);
    }
    if let Some(height) = height {
        descriptor.insert("height", height);
    }
    Command::new("transform", descriptor)
}

/// Rotate `reference` by `angle` degrees.
pub fn rotate(reference: Reference, angle: f64) -> Result<Command> {
    let descriptor =
        targeted("rotate", reference, &Domain::LAYER)?.with("angle", unit::angle(angle)?);
    Command::new("transform", descriptor)
}

fn set_layer_property(
    operation: &'static str,
    reference: Reference,
    key: &str,
    value: impl Into<Value>,
) -> Result<Command> {
    let descriptor = targeted(operation, reference, &Domain::LAYER)?
        .with("to", Object::new("layer").with(key, value));
    Command::new("set", descriptor)
}

/// Set layer opacity, in percent.
pub fn set_opacity(reference: Reference, opacity: f64) -> Result<Command> {
    set_layer_property("set_opacity", reference, "opacity", unit::percent(opacity)?)
}

/// Set layer fill opacity, in percent.
pub fn set_fill_opacity(reference: Reference, opacity: f64) -> Result<Command> {
    set_layer_property(
        "set_fill_opacity",
        reference,
        "fillOpacity",
        unit::percent(opacity)?,
    )
}

pub fn set_blend_mode(reference: Reference, mode: BlendMode) -> Result<Command> {
    set_layer_property(
        "set_blend_mode",
        reference,
        "mode",
        EnumValue::new(BlendMode::ENUM_TYPE, mode.symbol()),
    )
}

pub fn delete(reference: Reference) -> Result<Command> {
    on_target("delete", reference, &Domain::LAYER)
}

pub fn rename(reference: Reference, name: &str) -> Result<Command> {
    set_layer_property("rename", reference, "name", name)
}

/// Group the target layers into a new layer section.
pub fn group_selected() -> Result<Command> {
    Command::new(
        "make",
        Descriptor::new()
            .with(TARGET_KEY, References::new(Domain::LAYER_SECTION).class())
            .with("from", REFERENCE_BY.target()),
    )
}

/// Lock everything on `reference`, or clear all locks.
pub fn set_locking(reference: Reference, lock: bool) -> Result<Command> {
    let locking = if lock {
        Object::new("layerLocking")
            .with("protectTransparency", true)
            .with("protectComposite", true)
    } else {
        Object::new("layerLocking").with("protectNone", true)
    };
    let descriptor = targeted("set_locking", reference, &Domain::LAYER)?
        .with("group", true)
        .with("layerLocking", locking);
    Command::new("applyLocking", descriptor)
}

/// Offset `reference`; an absent axis moves by zero pixels.
pub fn translate(
    reference: Reference,
    x: Option<UnitValue>,
    y: Option<UnitValue>,
) -> Result<Command> {
    let x = match x {
        Some(x) => x,
        None => unit::pixels(0.0)?,
    };
    let y = match y {
        Some(y) => y,
        None => unit::pixels(0.0)?,
    };
    let descriptor = targeted("translate", reference, &Domain::LAYER)?.with(
        "position",
        Object::new("position")
            .with("horizontal", x)
            .with("vertical", y),
    );
    Command::new("transform", descriptor)
}
