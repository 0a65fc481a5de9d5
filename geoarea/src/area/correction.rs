//! Correction ellipsoïdale par segment
//!
//! Développement en série de l'intégrale d'aire de Karney
//! (Algorithms for geodesics, 2011, https://arxiv.org/pdf/1109.4448.pdf),
//! tronqué à l'ordre 1 ou 2 en e'².
//!
//! La latitude réduite β est approchée par la latitude géodésique
//! (cos β ≈ cos φ).

use crate::azimuth::AzimuthStrategy;
use crate::spheroid::SpheroidConstants;
use crate::{AreaError, Geographic};

/// Ordre de troncature de la série
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeriesOrder {
    /// c40, c41
    First,
    /// c40, c41, c42 avec les termes en e'⁴ et k⁴
    #[default]
    Second,
}

impl TryFrom<u8> for SeriesOrder {
    type Error = AreaError;

    fn try_from(order: u8) -> Result<Self, Self::Error> {
        match order {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            other => Err(AreaError::InvalidSeriesOrder(other)),
        }
    }
}

impl From<SeriesOrder> for u8 {
    fn from(order: SeriesOrder) -> Self {
        match order {
            SeriesOrder::First => 1,
            SeriesOrder::Second => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EllipsoidalCorrection {
    order: SeriesOrder,
}

impl EllipsoidalCorrection {
    pub fn new(order: SeriesOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    /// Terme correctif du segment P1 → P2, en unités de a².
    ///
    /// Le résultat inclut le facteur e², il est donc nul sur une sphère.
    pub fn apply<A: AzimuthStrategy + ?Sized>(
        &self,
        p1: Geographic,
        p2: Geographic,
        azimuth: &A,
        constants: &SpheroidConstants,
    ) -> f64 {
        let azimuths = azimuth.apply(p1.lon, p1.lat, p2.lon, p2.lat, &constants.spheroid);
        let alp1 = azimuths.azimuth;
        let alp2 = azimuths.reverse_azimuth;

        let ep = constants.ep;
        let ep2 = constants.ep2;

        let cos_bet1 = p1.lat.cos();
        let cos_bet2 = p2.lat.cos();

        let (sin_alp1, cos_alp1) = alp1.sin_cos();
        let cos_alp2 = alp2.cos();

        // Clairaut : azimut au passage de l'équateur
        let sin_alp0 = sin_alp1 * cos_bet1;
        let cos_alp0 = (1.0 - sin_alp0 * sin_alp0).sqrt();

        let cos_sig1 = cos_alp1 * cos_bet1;
        let cos_sig2 = cos_alp2 * cos_bet2;

        let cos3_sig1 = cos_triple(cos_sig1);
        let cos3_sig2 = cos_triple(cos_sig2);

        let k2 = (ep * cos_alp0).powi(2);

        let i12 = match self.order {
            SeriesOrder::First => {
                let c40 = ((2.0 / 3.0) - (1.0 / 15.0) * ep2) - ((1.0 / 20.0) - (1.0 / 35.0) * ep2) * k2;
                let c41 = ((1.0 / 180.0) - (1.0 / 315.0) * ep2) * k2;

                c40 * (cos_sig2 - cos_sig1) + c41 * (cos3_sig2 - cos3_sig1)
            }
            SeriesOrder::Second => {
                let ep4 = ep2 * ep2;
                let k4 = k2 * k2;

                let c40 = ((2.0 / 3.0) - (1.0 / 15.0) * ep2 + (4.0 / 105.0) * ep4)
                    - ((1.0 / 20.0) - (1.0 / 35.0) * ep2 + (2.0 / 105.0) * ep4) * k2
                    + ((1.0 / 42.0) - (1.0 / 63.0) * ep2 + (8.0 / 693.0) * ep4) * k4;

                let c41 = ((1.0 / 180.0) - (1.0 / 315.0) * ep2 + (2.0 / 945.0) * ep4) * k2
                    - ((1.0 / 252.0) - (1.0 / 378.0) * ep2 + (4.0 / 2079.0) * ep4) * k4;

                let c42 = ((1.0 / 2100.0) - (1.0 / 3150.0) * ep2 + (4.0 / 17325.0) * ep4) * k4;

                let cos5_sig1 = cos_quintuple(cos_sig1);
                let cos5_sig2 = cos_quintuple(cos_sig2);

                c40 * (cos_sig2 - cos_sig1)
                    + c41 * (cos3_sig2 - cos3_sig1)
                    + c42 * (cos5_sig2 - cos5_sig1)
            }
        };

        constants.e2 * cos_alp0 * sin_alp0 * i12
    }
}

/// cos(3x) = 4cos³(x) - 3cos(x)
fn cos_triple(c: f64) -> f64 {
    4.0 * c.powi(3) - 3.0 * c
}

/// cos(5x) = 16cos⁵(x) - 20cos³(x) + 5cos(x)
fn cos_quintuple(c: f64) -> f64 {
    16.0 * c.powi(5) - 20.0 * c.powi(3) + 5.0 * c
}
