//! Ship types and the fuel model keyed on them.
//!
//! Fuel burn is linear in distance with a per-type efficiency coefficient
//! expressed in tons of fuel per kilometre.
//!
//! # Examples
//! ```
//! use tidewater_core::{ShipType, fuel_tons};
//!
//! assert_eq!(ShipType::Tanker.as_str(), "tanker");
//! assert_eq!(fuel_tons(100.0, ShipType::Cargo), 7.0);
//! assert_eq!(ShipType::resolve("hovercraft"), ShipType::Standard);
//! ```

use thiserror::Error;

/// Recognised ship types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ShipType {
    /// General-purpose vessel; also the fallback for unknown labels.
    #[default]
    Standard,
    /// Bulk and container cargo carriers.
    Cargo,
    /// Liquid cargo tankers.
    Tanker,
    /// Passenger ships and ferries.
    Passenger,
}

/// Error returned when strictly parsing an unknown ship type label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown ship type '{0}'")]
pub struct UnknownShipType(pub String);

impl ShipType {
    /// Every recognised ship type.
    pub const ALL: [Self; 4] = [Self::Standard, Self::Cargo, Self::Tanker, Self::Passenger];

    /// Return the ship type as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Cargo => "cargo",
            Self::Tanker => "tanker",
            Self::Passenger => "passenger",
        }
    }

    /// Tons of fuel burned per kilometre.
    pub const fn efficiency(self) -> f64 {
        match self {
            Self::Standard => 0.05,
            Self::Cargo => 0.07,
            Self::Tanker => 0.09,
            Self::Passenger => 0.04,
        }
    }

    /// Map a free-text label onto a ship type.
    ///
    /// Matching ignores case and surrounding whitespace. Any label that is
    /// not recognised resolves to [`ShipType::Standard`].
    ///
    /// # Examples
    /// ```
    /// use tidewater_core::ShipType;
    ///
    /// assert_eq!(ShipType::resolve(" Cargo "), ShipType::Cargo);
    /// assert_eq!(ShipType::resolve(""), ShipType::Standard);
    /// ```
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_else(|err: UnknownShipType| {
            log::debug!("{err}; falling back to {}", Self::Standard);
            Self::Standard
        })
    }
}

impl std::fmt::Display for ShipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShipType {
    type Err = UnknownShipType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|ship_type| ship_type.as_str() == label)
            .ok_or_else(|| UnknownShipType(s.to_owned()))
    }
}

/// Fuel in tons needed to cover `distance_km`, rounded to two decimals.
///
/// Negative or non-finite distances burn no fuel.
pub fn fuel_tons(distance_km: f64, ship_type: ShipType) -> f64 {
    let distance = if distance_km.is_finite() {
        distance_km.max(0.0)
    } else {
        0.0
    };
    round_to_cents(distance * ship_type.efficiency())
}

/// Round to two decimal places.
///
/// Rounding works on the exact decimal expansion of `value`, with ties to
/// even, so `3699.4449999999997` becomes `3699.44` rather than being pushed
/// over the half by a scaled intermediate.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
