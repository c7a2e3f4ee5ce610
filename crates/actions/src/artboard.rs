//! Artboard commands.

use crate::shape::Bounds;
use crate::{layer, targeted};
use descriptor::reference::require_domain;
use descriptor::{
    Command, Descriptor, Domain, EnumValue, Object, Reference, References, Result, TARGET_KEY,
};

/// Make an artboard spanning `bounds` from `layers`, or from the target
/// layers when `None`.
pub fn make(layers: Option<Reference>, bounds: Bounds) -> Result<Command> {
    let layers = match layers {
        Some(layers) => {
            require_domain("make_artboard", &layers, &Domain::LAYER)?;
            layers
        }
        None => layer::REFERENCE_BY.target(),
    };
    Command::new(
        "make",
        Descriptor::new()
            .with(TARGET_KEY, References::new(Domain::LAYER_SECTION).class())
            .with("from", layers)
            .with("artboardRect", bounds.to_float_rect()),
    )
}

/// Move or resize the artboard `reference` to `bounds`, growing the canvas
/// if needed.
pub fn transform(reference: Reference, bounds: Bounds) -> Result<Command> {
    let artboard = Object::new("artboard")
        .with(
            "artboardCanvasResize",
            EnumValue::new("artboardCanvasResize", "artboardCanvasResizeExpand"),
        )
        .with("artboardEnabled", true)
        .with("artboardRect", bounds.to_float_rect());
    let descriptor =
        targeted("transform_artboard", reference, &Domain::LAYER)?.with("artboard", artboard);
    Command::new("editArtboardEvent", descriptor)
}
