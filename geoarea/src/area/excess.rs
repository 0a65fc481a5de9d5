//! Excès sphérique par segment (formule trapézoïdale)
//!
//! Pour un segment P1 → P2, calcule le double de l'excès sphérique du
//! trapèze borné par le segment, les méridiens de ses extrémités et
//! l'équateur :
//!
//! E = 2·atan( (tan(φ1/2) + tan(φ2/2)) / (1 + tan(φ1/2)·tan(φ2/2)) · tan((λ2 - λ1)/2) )

use std::f64::consts::FRAC_PI_2;

use crate::{AreaError, Geographic};

/// Distance au pôle en dessous de laquelle une latitude est considérée polaire
const POLE_EPSILON: f64 = 1e-12;

/// Variante de la formule d'excès
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ExcessMode {
    /// Formule trapézoïdale, segments de moins d'un hémisphère en longitude
    #[default]
    Trapezoidal,
    /// Segments couvrant plus d'un hémisphère : non implémenté, refusé
    LongSegment,
}

/// Excès sphérique signé d'un segment, sur la sphère unité
#[derive(Debug, Clone, Copy, Default)]
pub struct SphericalExcess {
    mode: ExcessMode,
}

impl SphericalExcess {
    /// # Errors
    ///
    /// `AreaError::UnsupportedConfiguration` pour `ExcessMode::LongSegment`.
    pub fn new(mode: ExcessMode) -> Result<Self, AreaError> {
        Self::check_mode(mode)?;
        Ok(Self { mode })
    }

    pub fn mode(&self) -> ExcessMode {
        self.mode
    }

    fn check_mode(mode: ExcessMode) -> Result<(), AreaError> {
        match mode {
            ExcessMode::Trapezoidal => Ok(()),
            ExcessMode::LongSegment => Err(AreaError::unsupported(
                "long-segment spherical excess (segment spanning more than a hemisphere in longitude) is not implemented",
            )),
        }
    }

    /// Contribution signée du segment P1 → P2, sur la sphère unité
    pub fn apply(&self, p1: Geographic, p2: Geographic) -> Result<f64, AreaError> {
        Self::check_mode(self.mode)?;

        let factor = match (pole_sign(p1.lat), pole_sign(p2.lat)) {
            // Segment pôle à pôle : le trapèze est dégénéré
            (Some(s1), Some(s2)) if s1 != s2 => return Ok(0.0),
            // Limite exacte du facteur de latitude quand une extrémité est au pôle
            (Some(s), _) | (_, Some(s)) => s,
            (None, None) => {
                let tan_lat1 = (p1.lat / 2.0).tan();
                let tan_lat2 = (p2.lat / 2.0).tan();
                (tan_lat1 + tan_lat2) / (1.0 + tan_lat1 * tan_lat2)
            }
        };

        Ok(2.0 * (factor * ((p2.lon - p1.lon) / 2.0).tan()).atan())
    }
}

/// +1 au pôle nord, -1 au pôle sud, `None` ailleurs
fn pole_sign(lat: f64) -> Option<f64> {
    if (FRAC_PI_2 - lat.abs()).abs() < POLE_EPSILON {
        Some(lat.signum())
    } else {
        None
    }
}
