// CourtScout - app/location.rs
//
// Reference-location acquisition. Desktop systems have no standard
// geolocation API, so the provider is the position supplied on the command
// line or in config.toml; a missing position behaves like an unsupported
// platform.

use crate::core::model::GeoPoint;
use crate::util::error::LocationError;

/// Source of the user's current position.
pub trait LocationProvider {
    fn current_location(&mut self) -> Result<GeoPoint, LocationError>;
}

/// Provider returning a fixed, configured position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredLocation {
    position: Option<GeoPoint>,
}

impl ConfiguredLocation {
    pub fn new(position: Option<GeoPoint>) -> Self {
        Self { position }
    }
}

impl LocationProvider for ConfiguredLocation {
    fn current_location(&mut self) -> Result<GeoPoint, LocationError> {
        let position = self.position.ok_or(LocationError::Unsupported)?;
        if !position.in_range() {
            return Err(LocationError::OutOfRange {
                latitude: position.lat,
                longitude: position.lng,
            });
        }
        Ok(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_position() {
        let mut provider = ConfiguredLocation::new(Some(GeoPoint::new(45.5, -122.7)));
        assert_eq!(provider.current_location(), Ok(GeoPoint::new(45.5, -122.7)));
    }

    #[test]
    fn test_missing_position_is_unsupported() {
        let mut provider = ConfiguredLocation::default();
        assert_eq!(provider.current_location(), Err(LocationError::Unsupported));
    }

    #[test]
    fn test_out_of_range_position() {
        let mut provider = ConfiguredLocation::new(Some(GeoPoint::new(95.0, 0.0)));
        assert!(matches!(
            provider.current_location(),
            Err(LocationError::OutOfRange { .. })
        ));
    }
}
