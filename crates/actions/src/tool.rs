//! Tool selection and tool options.

use descriptor::reference::{bare_property, by_class, by_property, chain};
use descriptor::{Command, Descriptor, Domain, Object, References, Result, TARGET_KEY};

const APPLICATION: References = References::new(Domain::APPLICATION);

/// Make `tool` (a host tool class such as `moveTool`) the active tool.
pub fn set_tool(tool: &str) -> Result<Command> {
    Command::new(
        "select",
        Descriptor::new().with(TARGET_KEY, by_class(Domain::new(tool))),
    )
}

/// Replace the current options of `tool`.
pub fn set_tool_options(tool: &str, options: Descriptor) -> Result<Command> {
    Command::new(
        "set",
        Descriptor::new()
            .with(TARGET_KEY, by_class(Domain::new(tool)))
            .with("to", Object::from_descriptor("currentToolOptions", options)),
    )
}

/// Whether direct selection picks paths on every layer or only the
/// selected ones.
pub fn set_direct_select_option_for_all_layers(all_layers: bool) -> Result<Command> {
    Command::new(
        "set",
        Descriptor::new()
            .with(
                TARGET_KEY,
                by_property("generalPreferences").within(APPLICATION.target()),
            )
            .with(
                "to",
                Object::new("generalPreferences")
                    .with("legacyPathDrag", true)
                    .with("vectorSelectionModifiesLayerSelection", all_layers),
            ),
    )
}

/// Put the shape tools back into their default mode.
pub fn reset_shape_tool() -> Result<Command> {
    Command::new(
        "reset",
        Descriptor::new().with(
            TARGET_KEY,
            chain([bare_property("vectorToolMode"), APPLICATION.target()])?,
        ),
    )
}
