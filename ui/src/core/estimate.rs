//! Instant price estimate shown next to the order form.
//!
//! ```text
//! total = base
//! if quantity > 100: total += (quantity - 100) * (base * 0.1)
//! if material == Luxury: total *= 1.5
//! ```
//!
//! The result is rounded to cents. Pure and cheap: the form recomputes it on
//! every keystroke.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::catalog::Service;

/// Units included in the base price.
pub const INCLUDED_UNITS: i64 = 100;
/// Surcharge per unit above [`INCLUDED_UNITS`], as a fraction of the base price.
pub const EXTRA_UNIT_RATE: f64 = 0.1;
pub const LUXURY_MULTIPLIER: f64 = 1.5;

/// Material tier of a print order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// The standard tier.
    #[default]
    Premium,
    Luxury,
    Eco,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Premium, Material::Luxury, Material::Eco];

    /// Stable identifier (stored in orders and sent in notifications).
    pub fn as_str(self) -> &'static str {
        match self {
            Material::Premium => "Premium",
            Material::Luxury => "Luxury",
            Material::Eco => "Eco",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Material::Premium => "material-premium",
            Material::Luxury => "material-luxury",
            Material::Eco => "material-eco",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EstimateError {
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),
    #[error("base price must be a positive amount, got {0}")]
    InvalidBasePrice(f64),
}

/// Price for `quantity` units of a service priced at `base_price`.
pub fn estimate(base_price: f64, quantity: i64, material: Material) -> Result<f64, EstimateError> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(EstimateError::InvalidBasePrice(base_price));
    }
    if quantity <= 0 {
        return Err(EstimateError::NonPositiveQuantity(quantity));
    }

    let mut total = base_price;
    if quantity > INCLUDED_UNITS {
        total += (quantity - INCLUDED_UNITS) as f64 * (base_price * EXTRA_UNIT_RATE);
    }
    if material == Material::Luxury {
        total *= LUXURY_MULTIPLIER;
    }
    Ok(round_cents(total))
}

/// Estimate for the currently selected service; nothing selected is free.
pub fn estimate_for(
    service: Option<&Service>,
    quantity: i64,
    material: Material,
) -> Result<f64, EstimateError> {
    match service {
        Some(service) => estimate(service.base_price, quantity, material),
        None => Ok(0.0),
    }
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
