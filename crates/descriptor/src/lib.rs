//! Descriptor - typed action descriptors for a host image editor.
//!
//! This crate is the substrate every command builder sits on:
//! - [`unit`] wraps raw numbers with the unit the host expects
//! - [`reference`] names host objects (by id, index, name, ordinal, property
//!   or class) and reports which domain a reference resolves to
//! - [`Descriptor`] / [`Value`] form the nested property tree
//! - [`Command`] pairs a verb with a descriptor and compares structurally
//! - [`wire`] maps all of the above to and from the JSON shape the host reads
//!
//! # Example
//! ```
//! use descriptor::{reference, unit, Command, Descriptor, TARGET_KEY};
//!
//! let layer = reference::by_index("layer", 3);
//! let rotate = Command::new(
//!     "transform",
//!     Descriptor::new()
//!         .with(TARGET_KEY, layer)
//!         .with("angle", unit::angle(45.0)?),
//! )?;
//! assert_eq!(rotate.verb(), "transform");
//! # Ok::<(), descriptor::DescriptorError>(())
//! ```

mod command;
mod error;
pub mod reference;
pub mod unit;
mod value;
pub mod version;
pub mod wire;

pub use command::{Command, TARGET_KEY};
pub use error::{DescriptorError, Result};
pub use reference::{Domain, Ordinal, RefNode, Reference, References, Selector};
pub use unit::{UnitKind, UnitValue};
pub use value::{Descriptor, EnumValue, Object, Value};
