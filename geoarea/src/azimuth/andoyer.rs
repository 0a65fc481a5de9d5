//! Azimuts d'Andoyer-Lambert
//!
//! Azimut du grand cercle corrigé au premier ordre en aplatissement.
//! Moins coûteux que Vincenty (pas d'itération), précis à ~1e-5 rad.

use std::f64::consts::PI;

use super::{normalize_azimuth, AzimuthResult, AzimuthStrategy};
use crate::spheroid::Spheroid;

const EPSILON: f64 = 1e-15;

#[derive(Debug, Clone, Copy, Default)]
pub struct AndoyerAzimuth;

impl AzimuthStrategy for AndoyerAzimuth {
    fn apply(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
        spheroid: &Spheroid,
    ) -> AzimuthResult {
        let f = spheroid.f();

        AzimuthResult {
            azimuth: forward_azimuth(lon1, lat1, lon2, lat2, f),
            reverse_azimuth: normalize_azimuth(forward_azimuth(lon2, lat2, lon1, lat1, f) + PI),
        }
    }
}

/// Azimut de départ en P1 vers P2
fn forward_azimuth(lon1: f64, lat1: f64, lon2: f64, lat2: f64, f: f64) -> f64 {
    let dlon = lon2 - lon1;
    let (sin_dlon, cos_dlon) = dlon.sin_cos();
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();

    // Distance angulaire sphérique, bornée contre les dépassements d'arrondi
    let cos_d = (sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon).clamp(-1.0, 1.0);
    let d = cos_d.acos();
    let sin_d = d.sin();

    // Points confondus ou antipodaux : azimut indéterminé
    if sin_d.abs() < EPSILON {
        return if lat1 <= lat2 { 0.0 } else { PI };
    }

    let mut a = 0.0;
    let mut u = 0.0;
    if cos_lat2.abs() < EPSILON {
        if sin_lat2 < 0.0 {
            u = PI;
        }
    } else {
        let m = cos_lat1 * (sin_lat2 / cos_lat2) - sin_lat1 * cos_dlon;
        a = sin_dlon.atan2(m);
        u = (f / 2.0) * cos_lat1 * cos_lat1 * (2.0 * a).sin();
    }

    let mut v = 0.0;
    if cos_lat1.abs() < EPSILON {
        if sin_lat1 < 0.0 {
            v = PI;
        }
    } else {
        let n = cos_lat2 * (sin_lat1 / cos_lat1) - sin_lat2 * cos_dlon;
        let b = sin_dlon.atan2(n);
        v = (f / 2.0) * cos_lat2 * cos_lat2 * (2.0 * b).sin();
    }

    let t = d / sin_d;
    normalize_azimuth(a - (v * t - u))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_matches_great_circle() {
        use crate::azimuth::SphericalAzimuth;

        let sphere = Spheroid::sphere(1.0).unwrap();
        let (lon1, lat1, lon2, lat2) = (0.1, -0.4, 1.2, 0.7);
        let a = AndoyerAzimuth.apply(lon1, lat1, lon2, lat2, &sphere);
        let s = SphericalAzimuth.apply(lon1, lat1, lon2, lat2, &sphere);

        assert!((a.azimuth - s.azimuth).abs() < 1e-12, "{:?} vs {:?}", a, s);
        assert!((a.reverse_azimuth - s.reverse_azimuth).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points() {
        let r = AndoyerAzimuth.apply(0.5, 0.5, 0.5, 0.5, &Spheroid::WGS84);
        assert_eq!(r.azimuth, 0.0);
        assert!(r.azimuth.is_finite() && r.reverse_azimuth.is_finite());
    }
}
