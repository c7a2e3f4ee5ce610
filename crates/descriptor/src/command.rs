//! The command envelope: a verb plus the descriptor it applies.
//!
//! Commands are plain data:
//! - Built once by a domain builder, never mutated afterwards
//! - Compared structurally, so independently built commands can be
//!   deduplicated or asserted on in tests
//! - Serialized to the wire form the transport hands to the host

use crate::reference::Reference;
use crate::value::{Descriptor, Value};
use crate::{wire, DescriptorError, Result};

/// Key under which a descriptor conventionally holds its primary target.
pub const TARGET_KEY: &str = "null";

/// A verb and its descriptor.
///
/// Two commands are equal when their verbs match and their descriptor trees
/// are deeply equal. Map key order is ignored, list order is not.
#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    verb: String,
    descriptor: Descriptor,
}

// Floats are checked finite in `Command::new`, so equality is total.
impl Eq for Command {}

impl Command {
    /// Pair `verb` with `descriptor`.
    ///
    /// The descriptor's shape is the builder's business; only an empty verb
    /// or a non-finite number is rejected here.
    pub fn new(verb: impl Into<String>, descriptor: Descriptor) -> Result<Self> {
        let verb = verb.into();
        if verb.trim().is_empty() {
            return Err(DescriptorError::MalformedPayload(
                "command verb must not be empty".into(),
            ));
        }
        if let Some(path) = descriptor.non_finite_path() {
            return Err(DescriptorError::MalformedPayload(format!(
                "`{path}` of `{verb}` is not a finite number"
            )));
        }
        tracing::trace!(verb = %verb, keys = descriptor.len(), "built command");
        Ok(Self { verb, descriptor })
    }

    /// Read a command from its wire form.
    pub fn from_wire(json: &serde_json::Value) -> Result<Self> {
        wire::parse_command(json)
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// The reference stored under [`TARGET_KEY`], if any.
    pub fn target(&self) -> Option<&Reference> {
        self.descriptor.get(TARGET_KEY).and_then(Value::as_reference)
    }

    pub fn into_parts(self) -> (String, Descriptor) {
        (self.verb, self.descriptor)
    }

    /// Wire form as a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        // Every variant maps to JSON and floats are finite, so this cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
