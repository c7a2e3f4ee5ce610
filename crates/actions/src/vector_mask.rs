//! Vector mask and work path commands. All of them act on the target layer.

use crate::{layer, shape::Bounds};
use descriptor::reference::{by_enum, by_ordinal, by_property, chain, property_in, require_domain};
use descriptor::{
    Command, Descriptor, Domain, EnumValue, Object, Ordinal, Reference, References, Result,
    TARGET_KEY,
};

fn mask_node() -> Reference {
    by_enum(Domain::PATH, "path", "vectorMask")
}

fn work_path() -> Result<Reference> {
    chain([property_in(Domain::PATH, "workPath")])
}

fn target_layer() -> Result<Reference> {
    chain([layer::REFERENCE_BY.target()])
}

/// The vector mask of `layer`.
pub fn vector_mask_of(layer: Reference) -> Result<Reference> {
    require_domain("vector_mask_of", &layer, &Domain::LAYER)?;
    chain([mask_node(), layer])
}

/// Replace the work path with a rectangle spanning `bounds`.
pub fn make_bounds_work_path(bounds: Bounds) -> Result<Command> {
    Command::new(
        "set",
        Descriptor::new()
            .with(TARGET_KEY, work_path()?)
            .with("to", Object::from_descriptor("rectangle", bounds.to_pixels()?)),
    )
}

/// Turn the work path into the target layer's vector mask.
pub fn make_vector_mask_from_work_path() -> Result<Command> {
    Command::new(
        "make",
        Descriptor::new()
            .with(TARGET_KEY, chain([References::new(Domain::PATH).class()])?)
            .with("at", chain([mask_node()])?)
            .with(
                "using",
                chain([by_ordinal(Domain::PATH, Ordinal::Target)])?,
            ),
    )
}

pub fn delete_work_path() -> Result<Command> {
    Command::new("delete", Descriptor::new().with(TARGET_KEY, work_path()?))
}

pub fn delete_vector_mask() -> Result<Command> {
    let mask = vector_mask_of(layer::REFERENCE_BY.target())?;
    Command::new("delete", Descriptor::new().with(TARGET_KEY, mask))
}

pub fn select_vector_mask() -> Result<Command> {
    let mask = vector_mask_of(layer::REFERENCE_BY.target())?;
    Command::new("select", Descriptor::new().with(TARGET_KEY, mask))
}

pub fn activate_vector_mask_editing() -> Result<Command> {
    Command::new(
        "activateVectorMaskEditing",
        Descriptor::new().with(TARGET_KEY, target_layer()?),
    )
}

/// Free-transform the whole path of the target layer.
pub fn enter_free_transform_path_mode() -> Result<Command> {
    let property = "freeTransformWholePath";
    Command::new(
        "set",
        Descriptor::new()
            .with(
                TARGET_KEY,
                by_property(property).within(layer::REFERENCE_BY.target()),
            )
            .with("_property", property)
            .with("suppressPlayLevelIncrease", true),
    )
}

/// Add a vector mask that reveals the whole layer.
pub fn create_reveal_all_mask() -> Result<Command> {
    Command::new(
        "make",
        Descriptor::new()
            .with(TARGET_KEY, chain([References::new(Domain::PATH).class()])?)
            .with("at", chain([mask_node()])?)
            .with("using", EnumValue::new("vectorMaskEnabled", "revealAll")),
    )
}
