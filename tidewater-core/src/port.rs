use geo::Coord;
use thiserror::Error;

/// A port that a voyage can call at.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The name
/// is the port's identity and compares case-insensitively; `region` carries
/// the region or country label used by region listings.
///
/// # Examples
/// ```
/// use tidewater_core::Port;
///
/// let port = Port::from_lat_lon("Rotterdam", "Netherlands", 51.95, 4.14);
///
/// assert_eq!(port.location.y, 51.95);
/// assert!(port.matches_name("ROTTERDAM"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Port {
    /// Display name as stored by the registry.
    pub name: String,
    /// Region or country label.
    pub region: String,
    /// Geospatial position.
    pub location: Coord<f64>,
}

/// Reasons a port location is rejected by [`Port::validate_location`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PortLocationError {
    /// Latitude or longitude was NaN or infinite.
    #[error("coordinates must be finite")]
    NonFinite,
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl Port {
    /// Construct a port from a WGS84 coordinate.
    pub fn new(name: impl Into<String>, region: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            location,
        }
    }

    /// Construct a port from latitude and longitude in degrees.
    ///
    /// # Examples
    /// ```
    /// use tidewater_core::Port;
    ///
    /// let port = Port::from_lat_lon("Singapore", "Singapore", 1.26, 103.84);
    /// assert_eq!(port.location.x, 103.84);
    /// ```
    pub fn from_lat_lon(
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::new(
            name,
            region,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in degrees.
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Whether `name` identifies this port, ignoring case and surrounding
    /// whitespace.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    /// Check that the location is a usable WGS84 coordinate.
    pub fn validate_location(&self) -> Result<(), PortLocationError> {
        let Coord { x: lon, y: lat } = self.location;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(PortLocationError::NonFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(PortLocationError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(PortLocationError::LongitudeOutOfRange(lon));
        }
        Ok(())
    }
}
