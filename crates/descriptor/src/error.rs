use crate::reference::Domain;
use crate::unit::UnitKind;
use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DescriptorError>;

/// Errors raised while constructing or parsing descriptors.
///
/// Every variant is a programming error on the caller's side. None of them is
/// transient, so nothing in this workspace retries.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DescriptorError {
    /// A builder received a reference that resolves to the wrong domain.
    #[error("{operation} expects a `{expected}` reference, got {}", describe_domain(.found.as_ref()))]
    InvalidReferenceKind {
        /// Builder operation that rejected the reference.
        operation: &'static str,
        /// Domain the operation works on.
        expected: Domain,
        /// Domain the reference actually resolved to.
        found: Option<Domain>,
    },

    /// A unit constructor received a value that is not a finite number.
    #[error("{kind} value must be a finite number, got {value}")]
    InvalidUnitInput {
        /// Unit the caller tried to build.
        kind: UnitKind,
        /// Offending raw value.
        value: f64,
    },

    /// The verb or descriptor of a command is unusable.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A reference chain was built from zero nodes.
    #[error("a reference chain needs at least one node")]
    EmptyReference,

    /// A caller keyword is not part of a keyword table.
    #[error("unknown {table} keyword `{keyword}`")]
    UnknownKeyword {
        /// Name of the table that was searched.
        table: &'static str,
        /// Keyword as given by the caller.
        keyword: String,
    },

    /// A wire value could not be read back into the descriptor tree.
    #[error("malformed wire value: {0}")]
    MalformedWire(String),

    /// The host plugin is older than the minimum this library speaks to.
    #[error("plugin version {found} is incompatible with the minimum required version, {required}")]
    IncompatiblePlugin {
        /// Version reported by the host plugin.
        found: String,
        /// Minimum supported version.
        required: String,
    },
}

fn describe_domain(domain: Option<&Domain>) -> String {
    match domain {
        Some(domain) => format!("`{domain}`"),
        None => "a reference without a domain".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_reference_kind_names_both_domains() {
        let err = DescriptorError::InvalidReferenceKind {
            operation: "hide",
            expected: Domain::LAYER,
            found: Some(Domain::DOCUMENT),
        };
        assert_eq!(
            err.to_string(),
            "hide expects a `layer` reference, got `document`"
        );
    }

    #[test]
    fn invalid_reference_kind_without_domain() {
        let err = DescriptorError::InvalidReferenceKind {
            operation: "select",
            expected: Domain::DOCUMENT,
            found: None,
        };
        assert!(err.to_string().ends_with("got a reference without a domain"));
    }
}
