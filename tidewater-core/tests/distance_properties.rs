//! Property-based tests for the distance and fuel models.
//!
//! # Invariants tested
//!
//! - **Symmetry:** `distance_km(a, b) == distance_km(b, a)` bitwise.
//! - **Identity:** `distance_km(a, a) == 0`.
//! - **Bounds:** distances are finite, non-negative and never exceed half the
//!   equator.
//! - **Fuel fallback:** unknown ship type labels burn fuel like `standard`.

use geo::Coord;
use proptest::prelude::*;
use tidewater_core::{ShipType, distance_km, fuel_tons};

/// Longest geodesic on WGS84 (half the equator) in kilometres, with slack.
const MAX_GEODESIC_KM: f64 = 20_040.0;

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (-90.0_f64..=90.0_f64, -180.0_f64..=180.0_f64).prop_map(|(y, x)| Coord { x, y })
}

fn unknown_label_strategy() -> impl Strategy<Value = String> {
    "[a-z ]{0,12}".prop_filter("label must not name a known ship type", |label| {
        label.parse::<ShipType>().is_err()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn distance_is_symmetric(a in coord_strategy(), b in coord_strategy()) {
        prop_assert_eq!(distance_km(a, b), distance_km(b, a));
    }

    #[test]
    fn distance_to_self_is_zero(a in coord_strategy()) {
        prop_assert_eq!(distance_km(a, a), 0.0);
    }

    #[test]
    fn distance_is_bounded(a in coord_strategy(), b in coord_strategy()) {
        let km = distance_km(a, b);
        prop_assert!(km.is_finite());
        prop_assert!(km >= 0.0);
        prop_assert!(km <= MAX_GEODESIC_KM, "distance {} too long", km);
    }

    #[test]
    fn unknown_ship_types_fall_back_to_standard(
        distance in 0.0_f64..50_000.0,
        label in unknown_label_strategy(),
    ) {
        let resolved = ShipType::resolve(&label);
        prop_assert_eq!(resolved, ShipType::Standard);
        prop_assert_eq!(fuel_tons(distance, resolved), fuel_tons(distance, ShipType::Standard));
    }

    #[test]
    fn fuel_is_never_negative(distance in -1_000.0_f64..50_000.0) {
        for ship_type in ShipType::ALL {
            prop_assert!(fuel_tons(distance, ship_type) >= 0.0);
        }
    }
}
