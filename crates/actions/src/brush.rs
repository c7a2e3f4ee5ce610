//! Brush tip commands.

use descriptor::{unit, Command, Descriptor, Domain, Object, References, Result, TARGET_KEY};

pub const REFERENCE_BY: References = References::new(Domain::BRUSHES);

/// Shape of the current brush tip. Absent fields take the host defaults:
/// 100% hardness, 0° angle, 100% roundness and 1% spacing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrushTip {
    /// Pixels.
    pub diameter: f64,
    pub hardness: Option<f64>,
    pub angle: Option<f64>,
    pub roundness: Option<f64>,
    pub spacing: Option<f64>,
}

impl BrushTip {
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            ..Self::default()
        }
    }

    fn to_object(self) -> Result<Object> {
        Ok(Object::new("computedBrush")
            .with("diameter", unit::pixels(self.diameter)?)
            .with("hardness", unit::percent(self.hardness.unwrap_or(100.0))?)
            .with("angle", unit::angle(self.angle.unwrap_or(0.0))?)
            .with("roundness", unit::percent(self.roundness.unwrap_or(100.0))?)
            .with("spacing", unit::percent(self.spacing.unwrap_or(1.0))?))
    }
}

/// Set the tip of the current brush.
pub fn set_brush_tip(tip: BrushTip) -> Result<Command> {
    Command::new(
        "set",
        Descriptor::new()
            .with(TARGET_KEY, REFERENCE_BY.current())
            .with("to", tip.to_object()?),
    )
}
