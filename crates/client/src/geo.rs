use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// WGS-84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Great-circle distance by the haversine formula.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` a hair above 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(distance_km(38.7223, -9.1393, 38.7223, -9.1393), 0.0);
        assert_eq!(distance_km(-90.0, 180.0, -90.0, 180.0), 0.0);
    }

    #[test]
    fn symmetric_and_non_negative() {
        let pairs = [
            (38.7223, -9.1393, 41.1579, -8.6291),
            (0.0, 0.0, 0.0, 179.9),
            (-33.9, 151.2, 51.5, -0.12),
            (89.9, 10.0, -89.9, -170.0),
        ];
        for (a, b, c, d) in pairs {
            let there = distance_km(a, b, c, d);
            let back = distance_km(c, d, a, b);
            assert!(there >= 0.0);
            assert!((there - back).abs() < 1e-9, "{there} vs {back}");
        }
    }

    #[test]
    fn known_distances() {
        // Lisbon to Porto is roughly 274 km along the great circle
        let lisbon = Coordinates::new(38.7223, -9.1393);
        let porto = Coordinates::new(41.1579, -8.6291);
        let d = lisbon.distance_km(&porto);
        assert!((d - 274.0).abs() < 2.0, "{d}");

        // one degree of latitude along a meridian
        let d = distance_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - EARTH_RADIUS_KM.to_radians()).abs() < 1e-9);

        // antipodes are half the circumference
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
