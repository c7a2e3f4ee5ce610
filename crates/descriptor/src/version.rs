//! Host plugin version gate.
//!
//! The host side of the transport reports its plugin version. Commands built
//! by this library assume at least [`MINIMUM_PLUGIN_VERSION`].

use crate::{DescriptorError, Result};
use std::fmt;
use std::str::FromStr;

/// Oldest plugin this library builds commands for.
pub const MINIMUM_PLUGIN_VERSION: MinimumVersion = MinimumVersion {
    major: Some(1),
    minor: Some(0),
    patch: Some(0),
};

/// A concrete `major.minor.patch` version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PluginVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }
}

impl fmt::Display for PluginVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for PluginVersion {
    type Err = DescriptorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DescriptorError::MalformedWire(format!("invalid plugin version `{s}`"));
        let mut parts = s.trim().split('.').map(|part| part.parse::<u32>());
        let mut next = || -> Result<u32> { parts.next().ok_or_else(invalid)?.map_err(|_| invalid()) };
        let version = PluginVersion::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(version)
    }
}

/// A minimum version; absent components are not checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinimumVersion {
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
}

impl MinimumVersion {
    /// Whether `found` is at least this version.
    ///
    /// Components compare lexicographically, so `2.0.0` satisfies `1.5.0`.
    pub fn is_satisfied_by(&self, found: &PluginVersion) -> bool {
        let pairs = [
            (self.major, found.major),
            (self.minor, found.minor),
            (self.patch, found.patch),
        ];
        for (required, found) in pairs {
            let Some(required) = required else {
                continue;
            };
            if found != required {
                return found > required;
            }
        }
        true
    }
}

impl fmt::Display for MinimumVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0)
        )
    }
}

/// Fail with [`DescriptorError::IncompatiblePlugin`] if `found` is older than
/// [`MINIMUM_PLUGIN_VERSION`].
pub fn check_compatible(found: &PluginVersion) -> Result<()> {
    check_against(&MINIMUM_PLUGIN_VERSION, found)
}

pub fn check_against(required: &MinimumVersion, found: &PluginVersion) -> Result<()> {
    if required.is_satisfied_by(found) {
        return Ok(());
    }
    tracing::warn!(found = %found, required = %required, "incompatible plugin version");
    Err(DescriptorError::IncompatiblePlugin {
        found: found.to_string(),
        required: required.to_string(),
    })
}
