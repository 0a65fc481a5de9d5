//! Calcul d'aire par segment et accumulation par ring
//!
//! - `excess` : excès sphérique du trapèze segment/méridiens/équateur
//! - `correction` : correction ellipsoïdale (série de Karney)
//! - `meridian` : suivi des franchissements du méridien origine (parité)
//! - `accumulator` : parcours d'un ring et mise à l'échelle

pub mod accumulator;
pub mod correction;
pub mod excess;
pub mod meridian;

pub use accumulator::{AreaAccumulator, AreaState};
pub use correction::{EllipsoidalCorrection, SeriesOrder};
pub use excess::{ExcessMode, SphericalExcess};
pub use meridian::{crosses_prime_meridian, MeridianCrossingTracker};
