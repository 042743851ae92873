// CourtScout - core/geo.rs
//
// Great-circle distance on a spherical Earth.

use crate::core::model::GeoPoint;
use crate::util::constants::EARTH_RADIUS_KM;

/// Haversine distance between two points in kilometres.
///
/// Defined for finite coordinates only; callers gate invalid geometry first.
/// The intermediate term is clamped so rounding can never push it outside
/// `[0, 1]` near identical or antipodal points.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
