//! Accumulation des contributions d'un ring
//!
//! Pour chaque segment : excès sphérique, correction ellipsoïdale (mode
//! ellipsoïdal uniquement) et suivi du méridien origine. En fin de ring,
//! la somme est mise à l'échelle (c² et a²) puis corrigée si le ring
//! entoure un pôle.
//!
//! Convention de signe : un ring parcouru dans le sens horaire (vu de
//! l'extérieur de la sphère) a une aire positive.

use std::f64::consts::PI;

use tracing::{debug, trace};

use super::correction::{EllipsoidalCorrection, SeriesOrder};
use super::excess::{ExcessMode, SphericalExcess};
use super::meridian::MeridianCrossingTracker;
use crate::azimuth::{AzimuthBackend, AzimuthStrategy};
use crate::ring::Segments;
use crate::spheroid::{Spheroid, SpheroidConstants};
use crate::types::AreaModel;
use crate::{AreaError, Geographic};

/// État mutable d'un parcours de ring
///
/// Créé au début du ring, jamais partagé entre deux calculs.
#[derive(Debug, Clone, Default)]
pub struct AreaState {
    /// Somme des excès sphériques (sphère unité)
    pub excess_sum: f64,
    /// Somme des corrections ellipsoïdales (unités de a²)
    pub correction_sum: f64,
    /// Franchissements du méridien origine
    pub crossings: MeridianCrossingTracker,
    /// Segments effectivement pris en compte
    pub segments: usize,
}

/// Calculateur d'aire signée d'un ring géographique
///
/// Immuable une fois construit : peut être partagé entre threads.
#[derive(Debug, Clone)]
pub struct AreaAccumulator<A = AzimuthBackend> {
    model: AreaModel,
    constants: SpheroidConstants,
    excess: SphericalExcess,
    correction: EllipsoidalCorrection,
    azimuth: A,
}

impl AreaAccumulator<AzimuthBackend> {
    /// Modèle sphérique de rayon donné
    pub fn spherical(radius: f64) -> Result<Self, AreaError> {
        Ok(Self::new(
            AreaModel::Spherical,
            Spheroid::sphere(radius)?,
            AzimuthBackend::Spherical,
            SeriesOrder::default(),
        ))
    }

    /// WGS84, azimuts de Vincenty, série d'ordre 2
    pub fn wgs84() -> Self {
        Self::ellipsoidal(Spheroid::WGS84, AzimuthBackend::Vincenty, SeriesOrder::Second)
    }
}

impl<A: AzimuthStrategy> AreaAccumulator<A> {
    /// Modèle ellipsoïdal avec un solveur d'azimut quelconque
    pub fn ellipsoidal(spheroid: Spheroid, azimuth: A, order: SeriesOrder) -> Self {
        Self::new(AreaModel::Ellipsoidal, spheroid, azimuth, order)
    }

    /// Sur un ellipsoïde, le modèle sphérique utilise la sphère authalique
    pub fn new(model: AreaModel, spheroid: Spheroid, azimuth: A, order: SeriesOrder) -> Self {
        Self {
            model,
            constants: SpheroidConstants::new(spheroid),
            excess: SphericalExcess::default(),
            correction: EllipsoidalCorrection::new(order),
            azimuth,
        }
    }

    /// # Errors
    ///
    /// `AreaError::UnsupportedConfiguration` pour `ExcessMode::LongSegment`.
    pub fn with_excess_mode(mut self, mode: ExcessMode) -> Result<Self, AreaError> {
        self.excess = SphericalExcess::new(mode)?;
        Ok(self)
    }

    pub fn model(&self) -> AreaModel {
        self.model
    }

    pub fn constants(&self) -> &SpheroidConstants {
        &self.constants
    }

    pub fn series_order(&self) -> SeriesOrder {
        self.correction.order()
    }

    pub fn azimuth(&self) -> &A {
        &self.azimuth
    }

    /// Ajoute la contribution du segment P1 → P2 à l'état du ring
    pub fn segment(
        &self,
        p1: Geographic,
        p2: Geographic,
        state: &mut AreaState,
    ) -> Result<(), AreaError> {
        // Segment méridien : pas de trapèze, pas de franchissement
        if p1.lon == p2.lon {
            return Ok(());
        }

        let excess = self.excess.apply(p1, p2)?;
        state.excess_sum += excess;

        if self.model == AreaModel::Ellipsoidal {
            let correction = self
                .correction
                .apply(p1, p2, &self.azimuth, &self.constants);
            state.correction_sum += correction;
            trace!(excess, correction, "segment");
        } else {
            trace!(excess, "segment");
        }

        state.crossings.apply(p1, p2);
        state.segments += 1;

        Ok(())
    }

    /// Aire signée du ring à partir de l'état accumulé
    pub fn result(&self, state: &AreaState) -> f64 {
        let c2 = self.constants.c2;

        let sum = match self.model {
            AreaModel::Spherical => c2 * state.excess_sum,
            AreaModel::Ellipsoidal => {
                c2 * state.excess_sum + self.constants.a2 * state.correction_sum
            }
        };

        let crossings = state.crossings.crossings();

        // Nombre impair de franchissements : le ring entoure un pôle
        if crossings % 2 == 1 {
            let times = (1 + crossings / 2) as f64;
            let area = 2.0 * PI * c2 * times - sum.abs();
            if sum > 0.0 {
                -area
            } else {
                area
            }
        } else {
            sum
        }
    }

    /// Aire signée d'un ring (fermeture implicite ou explicite)
    ///
    /// Un ring de moins de 3 sommets distincts a une aire nulle.
    pub fn ring_area<R>(&self, ring: R) -> Result<f64, AreaError>
    where
        R: IntoIterator<Item = Geographic>,
    {
        let mut state = AreaState::default();
        let mut segments = Segments::new(ring);

        for (p1, p2) in segments.by_ref() {
            self.segment(p1, p2, &mut state)?;
        }

        if segments.distinct_vertices() < 3 {
            debug!(
                distinct = segments.distinct_vertices(),
                "Degenerate ring, area is zero"
            );
            return Ok(0.0);
        }

        let area = self.result(&state);

        debug!(
            model = ?self.model,
            segments = state.segments,
            crossings = state.crossings.crossings(),
            excess_sum = state.excess_sum,
            correction_sum = state.correction_sum,
            area,
            "Ring area"
        );

        Ok(area)
    }
}
