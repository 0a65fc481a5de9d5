//! Stratégies de calcul d'azimut géodésique
//!
//! Trois solveurs interchangeables, du moins coûteux au plus précis :
//! - `SphericalAzimuth` : grand cercle, ignore l'aplatissement
//! - `AndoyerAzimuth` : correction d'Andoyer-Lambert au premier ordre en f
//! - `VincentyAzimuth` : problème inverse de Vincenty (itératif)
//!
//! Le choix se fait à la configuration via `AzimuthBackend`, ou en
//! implémentant `AzimuthStrategy` pour un solveur externe.

mod andoyer;
mod spherical;
mod vincenty;

pub use andoyer::AndoyerAzimuth;
pub use spherical::SphericalAzimuth;
pub use vincenty::VincentyAzimuth;

use std::f64::consts::PI;

use crate::spheroid::Spheroid;

/// Azimuts d'une géodésique entre deux points (radians, depuis le nord, sens horaire)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AzimuthResult {
    /// Azimut de départ en P1
    pub azimuth: f64,
    /// Azimut d'arrivée en P2, dans le sens de parcours P1 → P2
    pub reverse_azimuth: f64,
}

/// Solveur du problème géodésique inverse, réduit aux azimuts
pub trait AzimuthStrategy {
    fn apply(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64, spheroid: &Spheroid)
        -> AzimuthResult;
}

/// Ensemble fermé des solveurs fournis
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AzimuthBackend {
    Spherical,
    Andoyer,
    #[default]
    Vincenty,
}

impl AzimuthStrategy for AzimuthBackend {
    fn apply(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
        spheroid: &Spheroid,
    ) -> AzimuthResult {
        match self {
            Self::Spherical => SphericalAzimuth.apply(lon1, lat1, lon2, lat2, spheroid),
            Self::Andoyer => AndoyerAzimuth.apply(lon1, lat1, lon2, lat2, spheroid),
            Self::Vincenty => VincentyAzimuth::default().apply(lon1, lat1, lon2, lat2, spheroid),
        }
    }
}

/// Ramène un angle dans (-π, π]
pub(crate) fn normalize_azimuth(angle: f64) -> f64 {
    let mut a = angle % (2.0 * PI);
    if a <= -PI {
        a += 2.0 * PI;
    } else if a > PI {
        a -= 2.0 * PI;
    }
    a
}
