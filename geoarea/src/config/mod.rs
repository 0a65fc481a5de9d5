//! Configuration du calcul d'aire

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::area::{AreaAccumulator, ExcessMode, SeriesOrder};
use crate::azimuth::AzimuthBackend;
use crate::spheroid::Spheroid;
use crate::types::AreaModel;
use crate::AreaError;

/// Configuration principale
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AreaConfig {
    /// Sphère ou ellipsoïde
    #[serde(default)]
    pub model: AreaModel,

    /// Ellipsoïde nommé ou paramètres explicites
    #[serde(default)]
    pub spheroid: SpheroidConfig,

    /// Solveur d'azimut (ignoré en mode sphérique)
    #[serde(default)]
    pub azimuth: AzimuthBackend,

    /// Ordre de la série de correction (1 ou 2)
    #[serde(default)]
    pub series_order: SeriesOrder,

    /// Formule d'excès sphérique
    #[serde(default)]
    pub excess_mode: ExcessMode,
}

/// Ellipsoïde : nom ("WGS84", "GRS80", "sphere") ou `{ "a": .., "f": .. }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SpheroidConfig {
    Named(String),
    Custom { a: f64, f: f64 },
}

impl Default for SpheroidConfig {
    fn default() -> Self {
        Self::Named("WGS84".to_string())
    }
}

impl SpheroidConfig {
    pub fn resolve(&self) -> Result<Spheroid, AreaError> {
        match self {
            Self::Named(name) => Spheroid::named(name),
            Self::Custom { a, f } => Spheroid::new(*a, *f),
        }
    }
}

impl AreaConfig {
    /// Charge une configuration depuis un fichier JSON
    pub fn load(path: &Path) -> Result<Self, AreaError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AreaError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, AreaError> {
        serde_json::from_str(json)
            .map_err(|e| AreaError::config(format!("Failed to parse config JSON: {}", e)))
    }

    /// Charge une configuration depuis un preset embarqué
    pub fn from_preset(preset: &str) -> Result<Self, AreaError> {
        match preset {
            "wgs84" => Self::from_json(include_str!("presets/wgs84.json")),
            "grs80" => Self::from_json(include_str!("presets/grs80.json")),
            "sphere" => Self::from_json(include_str!("presets/sphere.json")),
            "wgs84-fast" => Self::from_json(include_str!("presets/wgs84-fast.json")),
            _ => Err(AreaError::UnknownPreset(preset.to_string())),
        }
    }

    /// Construit le calculateur, en refusant les configurations non supportées
    pub fn build(&self) -> Result<AreaAccumulator<AzimuthBackend>, AreaError> {
        let spheroid = self.spheroid.resolve()?;

        AreaAccumulator::new(self.model, spheroid, self.azimuth, self.series_order)
            .with_excess_mode(self.excess_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AreaConfig::from_json("{}").unwrap();
        assert_eq!(config.model, AreaModel::Ellipsoidal);
        assert_eq!(config.spheroid, SpheroidConfig::Named("WGS84".to_string()));
        assert_eq!(config.azimuth, AzimuthBackend::Vincenty);
        assert_eq!(config.series_order, SeriesOrder::Second);
        assert_eq!(config.excess_mode, ExcessMode::Trapezoidal);
    }

    #[test]
    fn test_presets() {
        for preset in ["wgs84", "grs80", "sphere", "wgs84-fast"] {
            let config = AreaConfig::from_preset(preset).unwrap();
            assert!(config.build().is_ok(), "preset {}", preset);
        }

        let fast = AreaConfig::from_preset("wgs84-fast").unwrap();
        assert_eq!(fast.azimuth, AzimuthBackend::Andoyer);
        assert_eq!(fast.series_order, SeriesOrder::First);

        let sphere = AreaConfig::from_preset("sphere").unwrap().build().unwrap();
        assert_eq!(sphere.model(), AreaModel::Spherical);
        assert_eq!(sphere.constants().e2, 0.0);

        assert!(matches!(
            AreaConfig::from_preset("mars"),
            Err(AreaError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_custom_spheroid() {
        let config =
            AreaConfig::from_json(r#"{ "spheroid": { "a": 6378388.0, "f": 0.003367003367 } }"#)
                .unwrap();
        let acc = config.build().unwrap();
        assert_eq!(acc.constants().spheroid.a(), 6378388.0);

        let invalid = AreaConfig::from_json(r#"{ "spheroid": { "a": -1.0, "f": 0.0 } }"#).unwrap();
        assert!(matches!(
            invalid.build(),
            Err(AreaError::InvalidSpheroid { .. })
        ));
    }

    #[test]
    fn test_rejected_configurations() {
        let long = AreaConfig::from_json(r#"{ "excess_mode": "long_segment" }"#).unwrap();
        assert!(matches!(
            long.build(),
            Err(AreaError::UnsupportedConfiguration(_))
        ));

        assert!(matches!(
            AreaConfig::from_json(r#"{ "series_order": 3 }"#),
            Err(AreaError::Config { .. })
        ));
        assert!(AreaConfig::load(Path::new("/nonexistent/geoarea.json")).is_err());
    }
}
