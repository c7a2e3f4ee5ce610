//! Unit-tagged numbers.
//!
//! A width is pixels or distance, an opacity is percent, a rotation is an
//! angle. There is deliberately no conversion between kinds: callers pick the
//! constructor that matches the quantity they mean.

use crate::{DescriptorError, Result};
use strum_macros::{Display, EnumIter, EnumString};

/// The unit a [`UnitValue`] is measured in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum UnitKind {
    Pixels,
    Percent,
    Angle,
    Points,
    Density,
    Distance,
    None,
}

impl UnitKind {
    /// Unit name understood by the host.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pixels => "pixelsUnit",
            Self::Percent => "percentUnit",
            Self::Angle => "angleUnit",
            Self::Points => "pointsUnit",
            Self::Density => "densityUnit",
            Self::Distance => "distanceUnit",
            Self::None => "noneUnit",
        }
    }

    /// Inverse of [`UnitKind::symbol`].
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let kind = match symbol {
            "pixelsUnit" => Self::Pixels,
            "percentUnit" => Self::Percent,
            "angleUnit" => Self::Angle,
            "pointsUnit" => Self::Points,
            "densityUnit" => Self::Density,
            "distanceUnit" => Self::Distance,
            "noneUnit" => Self::None,
            _ => return None,
        };
        Some(kind)
    }
}

/// A finite number tagged with its unit. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitValue {
    kind: UnitKind,
    value: f64,
}

impl UnitValue {
    /// Wrap `value` in `kind`, rejecting NaN and infinities.
    pub fn new(kind: UnitKind, value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(DescriptorError::InvalidUnitInput { kind, value });
        }
        Ok(Self { kind, value })
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

pub fn pixels(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Pixels, value)
}

pub fn percent(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Percent, value)
}

pub fn angle(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Angle, value)
}

pub fn points(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Points, value)
}

pub fn density(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Density, value)
}

pub fn distance(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::Distance, value)
}

pub fn none(value: f64) -> Result<UnitValue> {
    UnitValue::new(UnitKind::None, value)
}
