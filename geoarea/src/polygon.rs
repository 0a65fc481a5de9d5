//! Aire des géométries `geo` (coordonnées en degrés, x = longitude)
//!
//! L'orientation des rings est celle fournie : les trous doivent être
//! orientés à l'inverse de l'extérieur pour que leur aire se soustraie.

use geo::{LineString, MultiPolygon, Polygon};
use rayon::prelude::*;
use tracing::warn;

use crate::area::AreaAccumulator;
use crate::azimuth::AzimuthStrategy;
use crate::{AreaError, Geographic};

/// Aire géographique d'une géométrie surfacique
pub trait GeographicArea {
    /// Aire signée en unités de a² (m² pour les ellipsoïdes prédéfinis)
    fn geographic_area_signed<A>(&self, accumulator: &AreaAccumulator<A>) -> Result<f64, AreaError>
    where
        A: AzimuthStrategy + Sync;

    fn geographic_area_unsigned<A>(
        &self,
        accumulator: &AreaAccumulator<A>,
    ) -> Result<f64, AreaError>
    where
        A: AzimuthStrategy + Sync,
    {
        Ok(self.geographic_area_signed(accumulator)?.abs())
    }
}

impl GeographicArea for LineString<f64> {
    fn geographic_area_signed<A>(&self, accumulator: &AreaAccumulator<A>) -> Result<f64, AreaError>
    where
        A: AzimuthStrategy + Sync,
    {
        if !self.0.is_empty() && !self.is_closed() {
            warn!(points = self.0.len(), "Auto-closing unclosed ring");
        }
        accumulator.ring_area(self.coords().map(|c| Geographic::from(*c)))
    }
}

impl GeographicArea for Polygon<f64> {
    fn geographic_area_signed<A>(&self, accumulator: &AreaAccumulator<A>) -> Result<f64, AreaError>
    where
        A: AzimuthStrategy + Sync,
    {
        let mut area = self.exterior().geographic_area_signed(accumulator)?;
        for interior in self.interiors() {
            area += interior.geographic_area_signed(accumulator)?;
        }
        Ok(area)
    }
}

/// Les polygones sont traités en parallèle, chacun avec son propre état
impl GeographicArea for MultiPolygon<f64> {
    fn geographic_area_signed<A>(&self, accumulator: &AreaAccumulator<A>) -> Result<f64, AreaError>
    where
        A: AzimuthStrategy + Sync,
    {
        let areas = self
            .0
            .par_iter()
            .map(|polygon| polygon.geographic_area_signed(accumulator))
            .collect::<Result<Vec<f64>, AreaError>>()?;

        Ok(areas.into_iter().sum())
    }
}
