//! Document commands: open, save, close, create, canvas size, guides and
//! per-document extension data.

use crate::{on_target, Keyword};
use descriptor::reference::{
    bare_property, by_class, by_index, by_property, chain, class_tag, require_domain,
};
use descriptor::{
    unit, Command, Descriptor, DescriptorError, Domain, EnumValue, Object, Reference, References,
    Result, UnitValue, Value, TARGET_KEY,
};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

pub const REFERENCE_BY: References = References::new(Domain::DOCUMENT);

/// Which part of a PDF-like file to import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum PdfSelection {
    #[default]
    Page,
    Image,
}

impl PdfSelection {
    pub const ENUM_TYPE: &'static str = "pdfSelection";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Image => "image",
        }
    }
}

impl Keyword for PdfSelection {
    const TABLE: &'static str = "pdf selection";
}

/// Box a PDF page is cropped to on import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum CropTo {
    #[default]
    Bounding,
    Media,
    Crop,
    Bleed,
    Trim,
    Art,
}

impl CropTo {
    pub const ENUM_TYPE: &'static str = "cropTo";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bounding => "boundingBox",
            Self::Media => "mediaBox",
            Self::Crop => "cropBox",
            Self::Bleed => "bleedBox",
            Self::Trim => "trimBox",
            Self::Art => "artBox",
        }
    }
}

impl Keyword for CropTo {
    const TABLE: &'static str = "crop box";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ColorMode {
    #[default]
    Rgb,
    Gray,
    Cmyk,
    Lab,
    Bitmap,
}

impl ColorMode {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Rgb => "RGBColorMode",
            Self::Gray => "grayscaleMode",
            Self::Cmyk => "CMYKColorMode",
            Self::Lab => "labColorMode",
            Self::Bitmap => "bitmapMode",
        }
    }
}

impl Keyword for ColorMode {
    const TABLE: &'static str = "color mode";
}

/// Initial contents of a new document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum DocumentFill {
    #[default]
    White,
    Background,
    Transparent,
}

impl DocumentFill {
    pub const ENUM_TYPE: &'static str = "fill";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Background => "backgroundColor",
            Self::Transparent => "transparency",
        }
    }
}

impl Keyword for DocumentFill {
    const TABLE: &'static str = "document fill";
}

/// Answer to the save prompt when closing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum SaveChoice {
    Yes,
    No,
}

impl SaveChoice {
    pub const ENUM_TYPE: &'static str = "yesNo";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl Keyword for SaveChoice {
    const TABLE: &'static str = "save choice";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum GifColorPalette {
    #[default]
    Exact,
    Mac,
    Window,
    Web,
    LocalPerceptual,
    LocalSelective,
    LocalAdaptive,
    Previous,
}

impl GifColorPalette {
    pub const ENUM_TYPE: &'static str = "colorPalette";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Mac => "macintoshSystem",
            Self::Window => "windowsSystem",
            Self::Web => "web",
            Self::LocalPerceptual => "perceptual",
            Self::LocalSelective => "selective",
            Self::LocalAdaptive => "adaptive",
            Self::Previous => "previous",
        }
    }
}

impl Keyword for GifColorPalette {
    const TABLE: &'static str = "gif color palette";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum GifRowOrder {
    #[default]
    Normal,
    Interlaced,
}

impl GifRowOrder {
    /// The host stores row order as a flag.
    pub fn is_interlaced(self) -> bool {
        matches!(self, Self::Interlaced)
    }
}

impl Keyword for GifRowOrder {
    const TABLE: &'static str = "gif row order";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum GifForcedColors {
    None,
    #[default]
    BlackAndWhite,
    Primaries,
    Web,
}

impl GifForcedColors {
    pub const ENUM_TYPE: &'static str = "forcedColors";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::BlackAndWhite => "blackAndWhite",
            Self::Primaries => "primaries",
            Self::Web => "web",
        }
    }
}

impl Keyword for GifForcedColors {
    const TABLE: &'static str = "gif forced colors";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum PngCompression {
    #[default]
    None,
    Smallest,
}

impl PngCompression {
    pub fn level(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Smallest => 9,
        }
    }
}

impl Keyword for PngCompression {
    const TABLE: &'static str = "png compression";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum PngInterlace {
    #[default]
    None,
    Interlaced,
}

impl PngInterlace {
    pub const ENUM_TYPE: &'static str = "PNGInterlaceType";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::None => "PNGInterlaceNone",
            Self::Interlaced => "PNGInterlaceAdam7",
        }
    }
}

impl Keyword for PngInterlace {
    const TABLE: &'static str = "png interlace";
}

/// Where existing pixels sit horizontally after a canvas resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum HorizontalLocation {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalLocation {
    pub const ENUM_TYPE: &'static str = "horizontalLocation";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl Keyword for HorizontalLocation {
    const TABLE: &'static str = "horizontal location";
}

/// Where existing pixels sit vertically after a canvas resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum VerticalLocation {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalLocation {
    pub const ENUM_TYPE: &'static str = "verticalLocation";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl Keyword for VerticalLocation {
    const TABLE: &'static str = "vertical location";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum GuideOrientation {
    Horizontal,
    Vertical,
}

impl GuideOrientation {
    pub const ENUM_TYPE: &'static str = "orientation";

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl Keyword for GuideOrientation {
    const TABLE: &'static str = "guide orientation";
}

/// File formats `save` knows how to describe, picked by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase", ascii_case_insensitive)]
pub enum SaveFormat {
    Gif,
    Psd,
    #[strum(to_string = "jpg", serialize = "jpeg")]
    Jpeg,
    Png,
}

impl SaveFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = extension_of(path).unwrap_or_default();
        Self::parse_keyword(extension)
    }
}

impl Keyword for SaveFormat {
    const TABLE: &'static str = "save format";
}

fn extension_of(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|extension| extension.to_str())
}

/// Import options for `open`. Every field is optional; absent fields take
/// the host's usual defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenSettings {
    pub pdf_selection: Option<PdfSelection>,
    /// 1-based page to import.
    pub page_number: Option<u32>,
    pub suppress_warnings: Option<bool>,
    pub name: Option<String>,
    pub bit_depth: Option<u32>,
    pub crop_to: Option<CropTo>,
    pub anti_alias: Option<bool>,
    pub constrain_proportions: Option<bool>,
    /// Pixels.
    pub width: Option<f64>,
    /// Pixels.
    pub height: Option<f64>,
    pub color_mode: Option<ColorMode>,
    /// Pixels per inch.
    pub resolution: Option<f64>,
}

/// Open the file at `path`.
///
/// Illustrator files (`.ai`) carry PDF import options; when a page is
/// imported the rasterization options are sent too.
pub fn open(path: &str, settings: &OpenSettings) -> Result<Command> {
    let mut descriptor = Descriptor::new().with(TARGET_KEY, Value::path(path));
    let is_ai = extension_of(path).is_some_and(|extension| extension.eq_ignore_ascii_case("ai"));
    if is_ai {
        descriptor.insert("as", pdf_import_options(settings)?);
    }
    Command::new("open", descriptor)
}

fn pdf_import_options(settings: &OpenSettings) -> Result<Object> {
    let selection = settings.pdf_selection.unwrap_or_default();
    let mut options = Object::new("PDFGenericFormat")
        .with(
            "selection",
            EnumValue::new(PdfSelection::ENUM_TYPE, selection.symbol()),
        )
        .with("suppressWarnings", settings.suppress_warnings.unwrap_or(false))
        .with("pageNumber", settings.page_number.unwrap_or(1));
    if selection != PdfSelection::Page {
        return Ok(options);
    }
    let crop = settings.crop_to.unwrap_or_default();
    let mode = settings.color_mode.unwrap_or_default();
    options = options
        .with("antiAlias", settings.anti_alias.unwrap_or(true))
        .with(
            "constrainProportions",
            settings.constrain_proportions.unwrap_or(true),
        )
        .with("crop", EnumValue::new(CropTo::ENUM_TYPE, crop.symbol()))
        .with("depth", settings.bit_depth.unwrap_or(8))
        .with("mode", EnumValue::new("colorSpace", mode.symbol()));
    if let Some(width) = settings.width {
        options = options.with("width", unit::pixels(width)?);
    }
    if let Some(height) = settings.height {
        options = options.with("height", unit::pixels(height)?);
    }
    if let Some(name) = &settings.name {
        options = options.with("name", name.as_str());
    }
    if let Some(resolution) = settings.resolution {
        options = options.with("resolution", unit::density(resolution)?);
    }
    Ok(options)
}

/// Close document `document_id`, answering the save prompt when `save` is
/// given.
pub fn close(document_id: u32, save: Option<SaveChoice>) -> Result<Command> {
    let mut descriptor = Descriptor::new().with("documentID", document_id);
    if let Some(save) = save {
        descriptor.insert("saving", EnumValue::new(SaveChoice::ENUM_TYPE, save.symbol()));
    }
    Command::new("close", descriptor)
}

/// Options for `save`; only those matching the target format are used.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SaveSettings {
    pub gif_color_palette: Option<GifColorPalette>,
    pub gif_row_order: Option<GifRowOrder>,
    pub gif_forced_colors: Option<GifForcedColors>,
    pub gif_transparency: Option<bool>,
    /// JPEG quality, 0 to 12.
    pub jpg_quality: Option<u32>,
    pub png_compression: Option<PngCompression>,
    pub png_interlace: Option<PngInterlace>,
    pub embed_profiles: Option<bool>,
}

/// Save the active document to `path`, in the format its extension names.
pub fn save(path: &str, settings: &SaveSettings) -> Result<Command> {
    let format = SaveFormat::from_path(path)?;
    let format_options = match format {
        SaveFormat::Gif => Object::new("GIFFormat").with(
            "interfaceIconFrameDimmed",
            settings.gif_row_order.unwrap_or_default().is_interlaced(),
        ),
        SaveFormat::Psd => Object::new("photoshop35Format"),
        SaveFormat::Jpeg => Object::new("JPEG")
            .with("extendedQuality", settings.jpg_quality.unwrap_or(8))
            .with("matteColor", EnumValue::new("matteColor", "none")),
        SaveFormat::Png => Object::new("PNGFormat")
            .with(
                "PNGInterlaceType",
                EnumValue::new(
                    PngInterlace::ENUM_TYPE,
                    settings.png_interlace.unwrap_or_default().symbol(),
                ),
            )
            .with(
                "compression",
                settings.png_compression.unwrap_or_default().level(),
            ),
    };
    let mut descriptor = Descriptor::new()
        .with("as", format_options)
        .with("in", Value::path(path));
    if format == SaveFormat::Gif {
        let palette = settings.gif_color_palette.unwrap_or_default();
        let forced = settings.gif_forced_colors.unwrap_or_default();
        descriptor.insert(
            "to",
            Object::new("indexedColorMode")
                .with(
                    "palette",
                    EnumValue::new(GifColorPalette::ENUM_TYPE, palette.symbol()),
                )
                .with(
                    "forcedColors",
                    EnumValue::new(GifForcedColors::ENUM_TYPE, forced.symbol()),
                )
                .with("transparency", settings.gif_transparency.unwrap_or(true)),
        );
        descriptor.insert("copy", true);
    } else {
        descriptor.insert("embedProfiles", settings.embed_profiles.unwrap_or(false));
    }
    Command::new("save", descriptor)
}

pub fn select(reference: Reference) -> Result<Command> {
    on_target("select", reference, &Domain::DOCUMENT)
}

/// Settings for a new blank document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateSettings {
    /// Inches. Defaults to 7.
    pub width: Option<f64>,
    /// Inches. Defaults to 5.
    pub height: Option<f64>,
    /// Pixels per inch. Defaults to 72.
    pub resolution: Option<f64>,
    pub fill: Option<DocumentFill>,
    pub color_mode: Option<ColorMode>,
    /// Bits per channel. Defaults to 8.
    pub depth: Option<u32>,
    /// Color profile name. Defaults to `none`.
    pub color_profile: Option<String>,
    pub pixel_aspect_ratio: Option<f64>,
}

pub fn create(settings: &CreateSettings) -> Result<Command> {
    let fill = settings.fill.unwrap_or_default();
    let mode = settings.color_mode.unwrap_or_default();
    let document = Object::new("document")
        .with("width", unit::distance(settings.width.unwrap_or(7.0))?)
        .with("height", unit::distance(settings.height.unwrap_or(5.0))?)
        .with("resolution", unit::density(settings.resolution.unwrap_or(72.0))?)
        .with("fill", EnumValue::new(DocumentFill::ENUM_TYPE, fill.symbol()))
        .with("mode", Value::class(mode.symbol()))
        .with("depth", settings.depth.unwrap_or(8))
        .with("profile", settings.color_profile.as_deref().unwrap_or("none"))
        .with("pixelScaleFactor", settings.pixel_aspect_ratio.unwrap_or(1.0));
    Command::new("make", Descriptor::new().with("new", document))
}

/// Create a document from the named preset.
pub fn create_with_preset(preset: &str) -> Result<Command> {
    Command::new(
        "make",
        Descriptor::new().with("new", Object::new("document").with("preset", preset)),
    )
}

/// Resize the canvas of the active document, anchoring existing pixels at
/// the given location (centered by default).
pub fn resize(
    width: UnitValue,
    height: UnitValue,
    horizontal: Option<HorizontalLocation>,
    vertical: Option<VerticalLocation>,
) -> Result<Command> {
    let horizontal = horizontal.unwrap_or_default();
    let vertical = vertical.unwrap_or_default();
    Command::new(
        "canvasSize",
        Descriptor::new()
            .with(
                "canvasExtensionColorType",
                EnumValue::new("canvasExtensionColorType", "backgroundColor"),
            )
            .with("height", height)
            .with("width", width)
            .with(
                "horizontal",
                EnumValue::new(HorizontalLocation::ENUM_TYPE, horizontal.symbol()),
            )
            .with(
                "vertical",
                EnumValue::new(VerticalLocation::ENUM_TYPE, vertical.symbol()),
            ),
    )
}

/// Set a property of the document named by `reference`.
fn set_document_property(
    operation: &'static str,
    reference: Reference,
    property: &str,
    to: impl Into<Value>,
) -> Result<Command> {
    require_domain(operation, &reference, &Domain::DOCUMENT)?;
    Command::new(
        "set",
        Descriptor::new()
            .with(TARGET_KEY, by_property(property).within(reference))
            .with("to", to),
    )
}

pub fn set_target_path_visible(reference: Reference, visible: bool) -> Result<Command> {
    set_document_property(
        "set_target_path_visible",
        reference,
        "targetPathVisibility",
        visible,
    )
}

/// Add a guide at `position` pixels, on the document or on the selected
/// artboard.
pub fn insert_guide(
    reference: Reference,
    orientation: GuideOrientation,
    position: f64,
    artboard_guide: bool,
) -> Result<Command> {
    require_domain("insert_guide", &reference, &Domain::DOCUMENT)?;
    let guide = Object::new("guide")
        .with(TARGET_KEY, chain([reference, class_tag(Domain::GUIDE)])?)
        .with(
            "orientation",
            EnumValue::new(GuideOrientation::ENUM_TYPE, orientation.symbol()),
        )
        .with("position", unit::pixels(position)?);
    let target = if artboard_guide {
        "guideTargetSelectedArtboard"
    } else {
        "guideTargetDocument"
    };
    Command::new(
        "newGuide",
        Descriptor::new()
            .with(TARGET_KEY, by_class(Domain::GUIDE))
            .with("new", guide)
            .with("guideTarget", EnumValue::new("guideTarget", target)),
    )
}

/// Remove the guide at 1-based `index`.
pub fn remove_guide(reference: Reference, index: u32) -> Result<Command> {
    require_domain("remove_guide", &reference, &Domain::DOCUMENT)?;
    Command::new(
        "delete",
        Descriptor::new().with(TARGET_KEY, by_index(Domain::GUIDE, index).within(reference)),
    )
}

/// Artboard automation switches; absent switches are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArtboardAutoAttributes {
    pub auto_nest: Option<bool>,
    pub auto_position: Option<bool>,
    pub auto_expand: Option<bool>,
}

impl ArtboardAutoAttributes {
    fn to_descriptor(self) -> Descriptor {
        [
            ("autoNestEnabled", self.auto_nest),
            ("autoPositionEnabled", self.auto_position),
            ("autoExpandEnabled", self.auto_expand),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|value| (key, value)))
        .collect()
    }
}

/// Fails with [`DescriptorError::MalformedPayload`] when no attribute is set.
pub fn set_artboard_auto_attributes(
    reference: Reference,
    attributes: ArtboardAutoAttributes,
) -> Result<Command> {
    let operation = "set_artboard_auto_attributes";
    require_domain(operation, &reference, &Domain::DOCUMENT)?;
    let to = attributes.to_descriptor();
    if to.is_empty() {
        return Err(DescriptorError::MalformedPayload(format!(
            "{operation} requires at least one attribute"
        )));
    }
    set_document_property(operation, reference, "artboards", to)
}

const GUIDES_VISIBILITY: &str = "guidesVisibility";
const SMART_GUIDES_VISIBILITY: &str = "smartGuidesVisibility";

fn guides_reference(property: &str) -> Reference {
    by_property(property).within(REFERENCE_BY.target())
}

pub fn get_guides_visibility() -> Result<Command> {
    Command::new(
        "get",
        Descriptor::new().with(TARGET_KEY, guides_reference(GUIDES_VISIBILITY)),
    )
}

pub fn get_smart_guides_visibility() -> Result<Command> {
    Command::new(
        "get",
        Descriptor::new().with(TARGET_KEY, guides_reference(SMART_GUIDES_VISIBILITY)),
    )
}

pub fn set_guides_visibility(visible: bool) -> Result<Command> {
    set_document_property(
        "set_guides_visibility",
        REFERENCE_BY.target(),
        GUIDES_VISIBILITY,
        visible,
    )
}

pub fn set_smart_guides_visibility(visible: bool) -> Result<Command> {
    set_document_property(
        "set_smart_guides_visibility",
        REFERENCE_BY.target(),
        SMART_GUIDES_VISIBILITY,
        visible,
    )
}

/// A document named either by id or by any document reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentRef {
    Id(u32),
    Reference(Reference),
}

impl From<u32> for DocumentRef {
    fn from(id: u32) -> Self {
        Self::Id(id)
    }
}

impl From<Reference> for DocumentRef {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

fn extension_data_reference(
    operation: &'static str,
    document: DocumentRef,
    namespace: &str,
) -> Result<Reference> {
    let document = match document {
        DocumentRef::Id(id) => REFERENCE_BY.id(id),
        DocumentRef::Reference(reference) => {
            require_domain(operation, &reference, &Domain::DOCUMENT)?;
            reference
        }
    };
    chain([
        bare_property(namespace),
        bare_property("documentExtensionData"),
        document,
    ])
}

/// Read the extension data stored under `namespace`.
pub fn get_extension_data(document: impl Into<DocumentRef>, namespace: &str) -> Result<Command> {
    let reference = extension_data_reference("get_extension_data", document.into(), namespace)?;
    Command::new("get", Descriptor::new().with(TARGET_KEY, reference))
}

/// Store `value` under `key` in the extension data of `namespace`.
pub fn set_extension_data(
    document: impl Into<DocumentRef>,
    namespace: &str,
    key: &str,
    value: impl Into<Value>,
) -> Result<Command> {
    let reference = extension_data_reference("set_extension_data", document.into(), namespace)?;
    Command::new(
        "set",
        Descriptor::new()
            .with(TARGET_KEY, reference)
            .with("to", Descriptor::new().with(key, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn plain_files_open_without_import_options() {
        let command = open("/tmp/photo.png", &OpenSettings::default()).unwrap();
        assert_eq!(
            command.to_json(),
            json!({"command": "open", "descriptor": {"null": {"_path": "/tmp/photo.png"}}})
        );
    }

    #[test]
    fn ai_page_import_fills_in_defaults() {
        let settings = OpenSettings {
            width: Some(800.0),
            ..OpenSettings::default()
        };
        let command = open("/tmp/logo.ai", &settings).unwrap();
        let json = command.to_json();
        let options = &json["descriptor"]["as"];
        assert_eq!(options["_obj"], "PDFGenericFormat");
        assert_eq!(
            options["_value"]["selection"],
            json!({"_enum": "pdfSelection", "_value": "page"})
        );
        assert_eq!(options["_value"]["pageNumber"], 1);
        assert_eq!(options["_value"]["antiAlias"], true);
        assert_eq!(options["_value"]["crop"]["_value"], "boundingBox");
        assert_eq!(options["_value"]["mode"]["_value"], "RGBColorMode");
        assert_eq!(
            options["_value"]["width"],
            json!({"_unit": "pixelsUnit", "_value": 800.0})
        );
        assert!(options["_value"].get("height").is_none());
    }

    #[test]
    fn ai_image_import_skips_page_options() {
        let settings = OpenSettings {
            pdf_selection: Some(PdfSelection::Image),
            anti_alias: Some(false),
            ..OpenSettings::default()
        };
        let command = open("/tmp/logo.AI", &settings).unwrap();
        let json = command.to_json();
        let options = &json["descriptor"]["as"]["_value"];
        assert_eq!(options["selection"]["_value"], "image");
        assert!(options.get("antiAlias").is_none());
    }

    #[test]
    fn explicit_false_anti_alias_is_kept() {
        let settings = OpenSettings {
            anti_alias: Some(false),
            ..OpenSettings::default()
        };
        let command = open("a.ai", &settings).unwrap();
        assert_eq!(command.to_json()["descriptor"]["as"]["_value"]["antiAlias"], false);
    }

    #[test]
    fn close_answers_the_prompt_only_when_asked() {
        let command = close(4, Some(SaveChoice::No)).unwrap();
        assert_eq!(
            command.to_json()["descriptor"],
            json!({"documentID": 4, "saving": {"_enum": "yesNo", "_value": "no"}})
        );
        let silent = close(4, None).unwrap();
        assert!(!silent.descriptor().contains_key("saving"));
    }

    #[test]
    fn save_gif_converts_to_indexed_color() {
        let command = save("/tmp/out.gif", &SaveSettings::default()).unwrap();
        assert_eq!(command.verb(), "save");
        assert_eq!(
            command.to_json()["descriptor"],
            json!({
                "as": {"_obj": "GIFFormat", "_value": {"interfaceIconFrameDimmed": false}},
                "in": {"_path": "/tmp/out.gif"},
                "to": {
                    "_obj": "indexedColorMode",
                    "_value": {
                        "palette": {"_enum": "colorPalette", "_value": "exact"},
                        "forcedColors": {"_enum": "forcedColors", "_value": "blackAndWhite"},
                        "transparency": true
                    }
                },
                "copy": true
            })
        );
    }

    #[test]
    fn save_png_and_jpeg() {
        let settings = SaveSettings {
            png_compression: Some(PngCompression::Smallest),
            png_interlace: Some(PngInterlace::Interlaced),
            jpg_quality: Some(0),
            ..SaveSettings::default()
        };
        let png = save("out.png", &settings).unwrap().to_json();
        assert_eq!(png["descriptor"]["as"]["_value"]["compression"], 9);
        assert_eq!(
            png["descriptor"]["as"]["_value"]["PNGInterlaceType"]["_value"],
            "PNGInterlaceAdam7"
        );
        assert_eq!(png["descriptor"]["embedProfiles"], false);

        let jpeg = save("out.JPEG", &settings).unwrap().to_json();
        assert_eq!(jpeg["descriptor"]["as"]["_obj"], "JPEG");
        assert_eq!(jpeg["descriptor"]["as"]["_value"]["extendedQuality"], 0);
    }

    #[test]
    fn save_psd_has_empty_format_options() {
        let json = save("out.psd", &SaveSettings::default()).unwrap().to_json();
        assert_eq!(
            json["descriptor"]["as"],
            json!({"_obj": "photoshop35Format", "_value": {}})
        );
    }

    #[test]
    fn save_rejects_unknown_extensions() {
        for path in ["out.tiff", "no_extension"] {
            let err = save(path, &SaveSettings::default()).unwrap_err();
            assert!(matches!(
                err,
                DescriptorError::UnknownKeyword { table: "save format", .. }
            ));
        }
    }

    #[test]
    fn select_requires_a_document() {
        assert!(select(REFERENCE_BY.id(2)).is_ok());
        assert!(select(layer::REFERENCE_BY.id(2)).is_err());
    }

    #[test]
    fn create_defaults() {
        let command = create(&CreateSettings::default()).unwrap();
        assert_eq!(
            command.to_json()["descriptor"]["new"],
            json!({
                "_obj": "document",
                "_value": {
                    "width": {"_unit": "distanceUnit", "_value": 7.0},
                    "height": {"_unit": "distanceUnit", "_value": 5.0},
                    "resolution": {"_unit": "densityUnit", "_value": 72.0},
                    "fill": {"_enum": "fill", "_value": "white"},
                    "mode": {"_class": "RGBColorMode"},
                    "depth": 8,
                    "profile": "none",
                    "pixelScaleFactor": 1.0
                }
            })
        );
    }

    #[test]
    fn create_keeps_height_separate_from_width() {
        let settings = CreateSettings {
            width: Some(10.0),
            height: Some(3.0),
            ..CreateSettings::default()
        };
        let json = create(&settings).unwrap().to_json();
        assert_eq!(json["descriptor"]["new"]["_value"]["height"]["_value"], 3.0);
    }

    #[test]
    fn resize_centers_by_default() {
        let command = resize(
            unit::pixels(100.0).unwrap(),
            unit::pixels(50.0).unwrap(),
            None,
            Some(VerticalLocation::Top),
        )
        .unwrap();
        let json = command.to_json();
        assert_eq!(json["descriptor"]["horizontal"]["_value"], "center");
        assert_eq!(json["descriptor"]["vertical"]["_value"], "top");
    }

    #[test]
    fn target_path_visibility_chains_the_property() {
        let command = set_target_path_visible(REFERENCE_BY.id(3), true).unwrap();
        assert_eq!(
            command.to_json()["descriptor"],
            json!({
                "null": {"_ref": [
                    {"_ref": "property", "_property": "targetPathVisibility"},
                    {"_ref": "document", "_id": 3}
                ]},
                "to": true
            })
        );
    }

    #[test]
    fn insert_guide_payload() {
        let command =
            insert_guide(REFERENCE_BY.target(), GuideOrientation::Vertical, 120.0, false).unwrap();
        assert_eq!(
            command.to_json()["descriptor"],
            json!({
                "null": {"_ref": "guide"},
                "new": {
                    "_obj": "guide",
                    "_value": {
                        "null": {"_ref": [
                            {"_ref": "document", "_enum": "ordinal", "_value": "targetEnum"},
                            {"_class": "guide"}
                        ]},
                        "orientation": {"_enum": "orientation", "_value": "vertical"},
                        "position": {"_unit": "pixelsUnit", "_value": 120.0}
                    }
                },
                "guideTarget": {"_enum": "guideTarget", "_value": "guideTargetDocument"}
            })
        );
    }

    #[test]
    fn new_guide_reads_back_from_the_wire() {
        let command =
            insert_guide(REFERENCE_BY.id(5), GuideOrientation::Horizontal, 40.0, true).unwrap();
        let parsed = Command::from_wire(&command.to_json()).unwrap();
        assert_eq!(parsed, command);
    }

    #[test]
    fn reference_builders_reject_other_domains() {
        let builders: Vec<(&str, fn(Reference) -> Result<Command>)> = vec![
            ("select", select),
            ("set_target_path_visible", |r| set_target_path_visible(r, true)),
            ("insert_guide", |r| {
                insert_guide(r, GuideOrientation::Vertical, 10.0, false)
            }),
            ("remove_guide", |r| remove_guide(r, 1)),
            ("set_artboard_auto_attributes", |r| {
                let attributes = ArtboardAutoAttributes {
                    auto_nest: Some(true),
                    ..ArtboardAutoAttributes::default()
                };
                set_artboard_auto_attributes(r, attributes)
            }),
        ];
        for (operation, build) in builders {
            assert!(build(REFERENCE_BY.target()).is_ok(), "{operation}");
            let err = build(layer::REFERENCE_BY.id(2)).unwrap_err();
            assert_eq!(
                err,
                DescriptorError::InvalidReferenceKind {
                    operation,
                    expected: Domain::DOCUMENT,
                    found: Some(Domain::LAYER),
                }
            );
        }
    }

    #[test]
    fn remove_guide_indexes_within_the_document() {
        let command = remove_guide(REFERENCE_BY.target(), 2).unwrap();
        let target = command.target().unwrap();
        assert_eq!(target.len(), 2);
        assert_eq!(target.domain(), Some(&Domain::DOCUMENT));
    }

    #[test]
    fn artboard_attributes_need_at_least_one_switch() {
        let err = set_artboard_auto_attributes(
            REFERENCE_BY.target(),
            ArtboardAutoAttributes::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPayload(_)));

        let attributes = ArtboardAutoAttributes {
            auto_expand: Some(false),
            ..ArtboardAutoAttributes::default()
        };
        let command = set_artboard_auto_attributes(REFERENCE_BY.target(), attributes).unwrap();
        assert_eq!(
            command.to_json()["descriptor"]["to"],
            json!({"autoExpandEnabled": false})
        );
    }

    #[test]
    fn guides_visibility_get_and_set_share_a_target() {
        let get = get_smart_guides_visibility().unwrap();
        let set = set_smart_guides_visibility(false).unwrap();
        assert_eq!(get.target(), set.target());
        assert_eq!(set.to_json()["descriptor"]["to"], false);
        assert_ne!(get_guides_visibility().unwrap().target(), get.target());
        assert!(set_guides_visibility(true).is_ok());
    }

    #[test]
    fn extension_data_by_id_or_reference() {
        let by_id = get_extension_data(7u32, "com.example.panel").unwrap();
        let by_ref = get_extension_data(REFERENCE_BY.id(7), "com.example.panel").unwrap();
        assert_eq!(by_id, by_ref);
        assert_eq!(
            by_id.to_json()["descriptor"]["null"],
            json!({"_ref": [
                {"_ref": null, "_property": "com.example.panel"},
                {"_ref": null, "_property": "documentExtensionData"},
                {"_ref": "document", "_id": 7}
            ]})
        );
    }

    #[test]
    fn set_extension_data_nests_the_key() {
        let command = set_extension_data(1u32, "ns", "zoom", 2.5).unwrap();
        assert_eq!(command.to_json()["descriptor"]["to"], json!({"zoom": 2.5}));
        let err = set_extension_data(layer::REFERENCE_BY.id(1), "ns", "zoom", 2.5).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidReferenceKind { .. }));
    }
}
