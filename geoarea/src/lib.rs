//! # geoarea
//!
//! Aire signée de polygones géographiques (longitude/latitude) sur une
//! sphère ou un ellipsoïde de révolution (WGS84, GRS80...).
//!
//! ## Features
//!
//! - Excès sphérique par segment (formule trapézoïdale)
//! - Correction ellipsoïdale par développement en série (Karney, 2011)
//! - Gestion des rings traversant l'antiméridien ou entourant un pôle
//! - Trois solveurs d'azimut : sphérique, Andoyer, Vincenty
//! - Types `geo` pour l'interopérabilité avec l'écosystème Rust géospatial
//!
//! ## Usage
//!
//! ```rust
//! use geo::polygon;
//! use geoarea::{AreaAccumulator, GeographicArea};
//!
//! let parcel = polygon![
//!     (x: 2.0, y: 48.0),
//!     (x: 2.0, y: 48.1),
//!     (x: 2.1, y: 48.1),
//!     (x: 2.1, y: 48.0),
//! ];
//!
//! let area = parcel.geographic_area_unsigned(&AreaAccumulator::wgs84())?;
//! assert!(area > 8.0e7 && area < 8.5e7);
//! # Ok::<(), geoarea::AreaError>(())
//! ```
//!
//! Les sommets sont en degrés pour les types `geo`, en radians pour
//! `AreaAccumulator::ring_area` (voir `Geographic`).

pub mod area;
pub mod azimuth;
pub mod config;
pub mod error;
pub mod polygon;
pub mod ring;
pub mod spheroid;
pub mod types;

pub use area::{AreaAccumulator, AreaState, ExcessMode, SeriesOrder};
pub use azimuth::{AzimuthBackend, AzimuthResult, AzimuthStrategy};
pub use config::AreaConfig;
pub use error::AreaError;
pub use polygon::GeographicArea;
pub use spheroid::{Spheroid, SpheroidConstants};
pub use types::{AreaModel, Geographic};
