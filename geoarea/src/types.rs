//! Types de données partagés

use geo::Coord;

/// Point en coordonnées géographiques (radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geographic {
    /// Longitude en radians
    pub lon: f64,
    /// Latitude en radians
    pub lat: f64,
}

impl Geographic {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Crée depuis des degrés
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            lon: lon_deg.to_radians(),
            lat: lat_deg.to_radians(),
        }
    }

    /// Convertit en degrés
    pub fn to_degrees(self) -> (f64, f64) {
        (self.lon.to_degrees(), self.lat.to_degrees())
    }
}

/// Les coordonnées `geo` sont en degrés (x = longitude, y = latitude)
impl From<Coord<f64>> for Geographic {
    fn from(c: Coord<f64>) -> Self {
        Self::from_degrees(c.x, c.y)
    }
}

/// Modèle de surface utilisé pour le calcul d'aire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaModel {
    /// Sphère parfaite de rayon `a`
    Spherical,
    /// Ellipsoïde de révolution (correction de Karney)
    #[default]
    Ellipsoidal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_roundtrip() {
        let p = Geographic::from_degrees(-179.5, 45.0);
        let (lon, lat) = p.to_degrees();
        assert!((lon + 179.5).abs() < 1e-12);
        assert!((lat - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_geo_coord() {
        let p: Geographic = Coord { x: 90.0, y: 0.0 }.into();
        assert!((p.lon - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert_eq!(p.lat, 0.0);
    }

    #[test]
    fn test_model_serde_names() {
        let m: AreaModel = serde_json::from_str("\"spherical\"").unwrap();
        assert_eq!(m, AreaModel::Spherical);
        assert_eq!(AreaModel::default(), AreaModel::Ellipsoidal);
    }
}
