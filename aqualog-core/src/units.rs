use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Milliliters per fluid ounce.
pub const OZ_TO_ML: f64 = 29.574;

/// The user-selected display unit. Fluid ounces are the base unit every
/// amount is stored and computed in; milliliters exist only at the
/// presentation/input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FluidUnit {
    #[default]
    #[serde(rename = "oz")]
    Oz,
    #[serde(rename = "ml")]
    Ml,
}

impl FluidUnit {
    /// Suffix used when printing amounts, e.g. "45 oz".
    pub fn suffix(&self) -> &'static str {
        match self {
            FluidUnit::Oz => "oz",
            FluidUnit::Ml => "ml",
        }
    }
}

impl fmt::Display for FluidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Error returned when a unit name is neither "oz" nor "ml".
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownFluidUnit(pub String);

impl fmt::Display for UnknownFluidUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fluid unit: {}", self.0)
    }
}

impl std::error::Error for UnknownFluidUnit {}

impl FromStr for FluidUnit {
    type Err = UnknownFluidUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oz" => Ok(FluidUnit::Oz),
            "ml" => Ok(FluidUnit::Ml),
            other => Err(UnknownFluidUnit(other.to_string())),
        }
    }
}

/// Clamp an amount to a finite, non-negative value. Slider-driven inputs
/// can surface NaN or infinities; those become zero rather than poisoning
/// every downstream sum.
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// Convert a base-unit (oz) amount to the display unit.
pub fn to_display(amount_oz: f64, unit: FluidUnit) -> f64 {
    let amount = sanitize_amount(amount_oz);
    match unit {
        FluidUnit::Oz => amount,
        FluidUnit::Ml => amount * OZ_TO_ML,
    }
}

/// Convert a display-unit amount back to the base unit (oz).
pub fn to_base(amount: f64, unit: FluidUnit) -> f64 {
    let amount = sanitize_amount(amount);
    match unit {
        FluidUnit::Oz => amount,
        FluidUnit::Ml => amount / OZ_TO_ML,
    }
}
