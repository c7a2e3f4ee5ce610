//! Actions - command builders for each host object domain.
//!
//! Every builder is a pure function that checks the domain of the reference
//! it is handed, fills in defaults for absent options, and returns a
//! [`Command`] ready for the transport.
//!
//! ```
//! use actions::layer;
//!
//! let command = layer::rotate(layer::REFERENCE_BY.index(3), 45.0)?;
//! assert_eq!(command.verb(), "transform");
//! # Ok::<(), descriptor::DescriptorError>(())
//! ```

pub mod artboard;
pub mod brush;
pub mod content_layer;
pub mod document;
pub mod layer;
pub mod shape;
pub mod tool;
pub mod vector_mask;

use descriptor::reference::require_domain;
use descriptor::{Command, Descriptor, DescriptorError, Domain, Reference, Result, TARGET_KEY};
use std::str::FromStr;

/// A closed table of caller keywords, each mapping to host data.
pub trait Keyword: FromStr + Copy {
    /// Table name reported when a keyword is not found.
    const TABLE: &'static str;

    /// Look up `keyword`, failing with [`DescriptorError::UnknownKeyword`].
    fn parse_keyword(keyword: &str) -> Result<Self> {
        keyword.parse().map_err(|_| {
            tracing::debug!(table = Self::TABLE, keyword, "unknown keyword");
            DescriptorError::UnknownKeyword {
                table: Self::TABLE,
                keyword: keyword.to_string(),
            }
        })
    }
}

/// Check `reference` against `domain` and start a descriptor targeting it.
pub(crate) fn targeted(
    operation: &'static str,
    reference: Reference,
    domain: &Domain,
) -> Result<Descriptor> {
    require_domain(operation, &reference, domain)?;
    Ok(Descriptor::new().with(TARGET_KEY, reference))
}

/// A command whose descriptor is only the checked target.
pub(crate) fn on_target(
    verb: &'static str,
    reference: Reference,
    domain: &Domain,
) -> Result<Command> {
    Command::new(verb, targeted(verb, reference, domain)?)
}
