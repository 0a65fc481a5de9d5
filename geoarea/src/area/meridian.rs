//! Suivi des franchissements du méridien de Greenwich
//!
//! Les longitudes sont ramenées dans [0, 2π). Un segment dont les deux
//! extrémités sont de part et d'autre de π avec un écart supérieur à π
//! passe par la longitude 0 (méridien origine). Seule la parité du
//! compteur en fin de ring est utilisée : impaire, le ring entoure un pôle.

use std::f64::consts::{PI, TAU};

use crate::Geographic;

/// Compteur de franchissements, propre à un seul parcours de ring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeridianCrossingTracker {
    crossings: usize,
}

impl MeridianCrossingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre le segment P1 → P2 et retourne le compteur mis à jour
    pub fn apply(&mut self, p1: Geographic, p2: Geographic) -> usize {
        if crosses_prime_meridian(p1, p2) {
            self.crossings += 1;
        }
        self.crossings
    }

    pub fn crossings(&self) -> usize {
        self.crossings
    }

    /// Remise à zéro au début d'un nouveau ring
    pub fn reset(&mut self) {
        self.crossings = 0;
    }
}

/// Test à seuil sur les longitudes normalisées dans [0, 2π)
pub fn crosses_prime_meridian(p1: Geographic, p2: Geographic) -> bool {
    let lon1 = normalize_longitude(p1.lon);
    let lon2 = normalize_longitude(p2.lon);

    let max_lon = lon1.max(lon2);
    let min_lon = lon1.min(lon2);

    max_lon > PI && min_lon < PI && max_lon - min_lon > PI
}

fn normalize_longitude(lon: f64) -> f64 {
    lon - (lon / TAU).floor() * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(lon: f64, lat: f64) -> Geographic {
        Geographic::from_degrees(lon, lat)
    }

    #[test]
    fn test_prime_meridian_crossing_increments_once() {
        let mut tracker = MeridianCrossingTracker::new();
        assert_eq!(tracker.apply(deg(-5.0, 0.0), deg(5.0, 0.0)), 1);
    }

    #[test]
    fn test_antimeridian_segment_not_counted() {
        let mut tracker = MeridianCrossingTracker::new();
        assert_eq!(tracker.apply(deg(10.0, 0.0), deg(20.0, 0.0)), 0);
        // 179° et 181° normalisés : écart de 2°, pas de passage par 0°
        assert_eq!(tracker.apply(deg(179.0, 0.0), deg(-179.0, 0.0)), 0);
        assert_eq!(tracker.crossings(), 0);
    }

    #[test]
    fn test_monotonic_and_reset() {
        let mut tracker = MeridianCrossingTracker::new();
        tracker.apply(deg(-10.0, 10.0), deg(10.0, 10.0));
        tracker.apply(deg(170.0, 0.0), deg(-170.0, 0.0));
        tracker.apply(deg(20.0, 20.0), deg(-20.0, 20.0));
        assert_eq!(tracker.crossings(), 2);

        tracker.reset();
        assert_eq!(tracker.crossings(), 0);
    }

    #[test]
    fn test_endpoint_at_pi_does_not_count() {
        // 180° normalisé vaut exactement π : les inégalités strictes l'excluent
        assert!(!crosses_prime_meridian(deg(180.0, 80.0), deg(-90.0, 80.0)));
        // -90° → 0° : 3π/2 et 0, passage par le méridien origine
        assert!(crosses_prime_meridian(deg(-90.0, 80.0), deg(0.0, 80.0)));
    }

    #[test]
    fn test_normalize_longitude() {
        assert!((normalize_longitude(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-15);
        assert_eq!(normalize_longitude(0.5), 0.5);
        assert!((normalize_longitude(5.0 * PI) - PI).abs() < 1e-14);
    }
}
