//! Azimuts sur la sphère (grand cercle)

use super::{AzimuthResult, AzimuthStrategy};
use crate::spheroid::Spheroid;

/// Azimuts du grand cercle, l'aplatissement est ignoré
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalAzimuth;

impl AzimuthStrategy for SphericalAzimuth {
    fn apply(&self, lon1: f64, lat1: f64, lon2: f64, lat2: f64, _: &Spheroid) -> AzimuthResult {
        let dlon = lon2 - lon1;
        let (sin_dlon, cos_dlon) = dlon.sin_cos();
        let (sin_lat1, cos_lat1) = lat1.sin_cos();
        let (sin_lat2, cos_lat2) = lat2.sin_cos();

        let azimuth = (sin_dlon * cos_lat2)
            .atan2(cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon);

        // Azimut en P2 dans le sens de parcours (azimut P2 → P1 + π)
        let reverse_azimuth = (sin_dlon * cos_lat1)
            .atan2(-sin_lat1 * cos_lat2 + cos_lat1 * sin_lat2 * cos_dlon);

        AzimuthResult {
            azimuth,
            reverse_azimuth,
        }
    }
}
