//! Packages, weights and dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Weight units accepted by the carrier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WeightUnits {
    #[default]
    #[serde(rename = "LB")]
    Lb,
    #[serde(rename = "KG")]
    Kg,
}

impl fmt::Display for WeightUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lb => f.write_str("LB"),
            Self::Kg => f.write_str("KG"),
        }
    }
}

/// Linear units for package dimensions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LinearUnits {
    #[default]
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "CM")]
    Cm,
}

impl fmt::Display for LinearUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.write_str("IN"),
            Self::Cm => f.write_str("CM"),
        }
    }
}

/// A weight with its units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Weight {
    pub units: WeightUnits,
    pub value: f64,
}

impl Weight {
    /// Creates a weight in pounds.
    #[must_use]
    pub const fn lb(value: f64) -> Self {
        Self {
            units: WeightUnits::Lb,
            value,
        }
    }

    /// Creates a weight in kilograms.
    #[must_use]
    pub const fn kg(value: f64) -> Self {
        Self {
            units: WeightUnits::Kg,
            value,
        }
    }
}

/// Package dimensions. Whole units only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub length: u32,
    pub width: u32,
    pub height: u32,
    pub units: LinearUnits,
}

/// A single physical package.
///
/// # Example
///
/// ```rust
/// use fedex_api::models::{Dimensions, LinearUnits, Package, Weight};
///
/// let package = Package {
///     dimensions: Some(Dimensions {
///         length: 12,
///         width: 8,
///         height: 4,
///         units: LinearUnits::In,
///     }),
///     declared_value: Some(150.0),
///     reference: Some("PO-1234".to_string()),
///     ..Package::new(Weight::lb(10.0))
/// };
///
/// assert_eq!(package.pieces(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Package {
    pub weight: Weight,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Declared value in USD, sent as insured value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_value: Option<f64>,

    /// Customer reference, also used as the freight purchase order number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Number of pieces on a freight line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,

    /// Freight line item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Package {
    /// Creates a package with only a weight.
    #[must_use]
    pub fn new(weight: Weight) -> Self {
        Self {
            weight,
            ..Default::default()
        }
    }

    /// Returns the piece count, defaulting to 1.
    #[must_use]
    pub fn pieces(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }
}
