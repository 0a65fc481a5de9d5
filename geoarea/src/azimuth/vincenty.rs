//! Problème géodésique inverse de Vincenty (1975)
//!
//! Itération sur la longitude auxiliaire λ, latitudes réduites
//! tan(U) = (1 - f)·tan(φ).

use tracing::warn;

use super::{AzimuthResult, AzimuthStrategy};
use crate::spheroid::Spheroid;

#[derive(Debug, Clone, Copy)]
pub struct VincentyAzimuth {
    /// Seuil de convergence sur λ (radians)
    pub tolerance: f64,
    /// Nombre maximal d'itérations
    pub max_iterations: usize,
}

impl Default for VincentyAzimuth {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 1000,
        }
    }
}

impl AzimuthStrategy for VincentyAzimuth {
    fn apply(
        &self,
        lon1: f64,
        lat1: f64,
        lon2: f64,
        lat2: f64,
        spheroid: &Spheroid,
    ) -> AzimuthResult {
        let f = spheroid.f();
        let one_minus_f = 1.0 - f;

        let l = lon2 - lon1;
        let u1 = (one_minus_f * lat1.tan()).atan();
        let u2 = (one_minus_f * lat2.tan()).atan();
        let (sin_u1, cos_u1) = u1.sin_cos();
        let (sin_u2, cos_u2) = u2.sin_cos();

        let mut lambda = l;
        let mut converged = false;

        for _ in 0..self.max_iterations {
            let (sin_lambda, cos_lambda) = lambda.sin_cos();

            let sin_sigma = (cos_u2 * sin_lambda)
                .hypot(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);

            // Points confondus
            if sin_sigma == 0.0 {
                return AzimuthResult {
                    azimuth: 0.0,
                    reverse_azimuth: 0.0,
                };
            }

            let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
            let sigma = sin_sigma.atan2(cos_sigma);
            let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
            let cos2_alpha = 1.0 - sin_alpha * sin_alpha;

            // Géodésique équatoriale : cos(2σm) n'est pas défini
            let cos_2sigma_m = if cos2_alpha != 0.0 {
                cos_sigma - 2.0 * sin_u1 * sin_u2 / cos2_alpha
            } else {
                0.0
            };

            let c = f / 16.0 * cos2_alpha * (4.0 + f * (4.0 - 3.0 * cos2_alpha));
            let previous = lambda;
            lambda = l
                + (1.0 - c)
                    * f
                    * sin_alpha
                    * (sigma
                        + c * sin_sigma
                            * (cos_2sigma_m
                                + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

            if (lambda - previous).abs() < self.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                lon1,
                lat1,
                lon2,
                lat2,
                iterations = self.max_iterations,
                "Vincenty inverse did not converge (nearly antipodal points)"
            );
        }

        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        AzimuthResult {
            azimuth: (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda),
            reverse_azimuth: (cos_u1 * sin_lambda)
                .atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda),
        }
    }
}
