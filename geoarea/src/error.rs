//! Types d'erreurs pour le crate geoarea

use thiserror::Error;

/// Erreurs pouvant survenir lors de la configuration ou du calcul d'aire
///
/// Les dégénérescences numériques (pôles, géodésiques méridiennes, points
/// antipodaux) ne sont pas des erreurs : elles se propagent en NaN/Inf.
#[derive(Debug, Error)]
pub enum AreaError {
    /// Combinaison de stratégies non supportée (ex: mode "long segment")
    #[error("Unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Paramètres d'ellipsoïde invalides
    #[error("Invalid spheroid (a={a}, f={f}): {reason}")]
    InvalidSpheroid { a: f64, f: f64, reason: String },

    /// Ordre de série autre que 1 ou 2
    #[error("Invalid series order: {0} (expected 1 or 2)")]
    InvalidSeriesOrder(u8),

    /// Nom d'ellipsoïde inconnu
    #[error("Unknown spheroid: {0}. Use: WGS84, GRS80, sphere")]
    UnknownSpheroid(String),

    /// Preset de configuration inconnu
    #[error("Unknown preset: {0}. Use: wgs84, grs80, sphere, wgs84-fast")]
    UnknownPreset(String),

    /// Fichier de configuration illisible ou invalide
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

impl AreaError {
    /// Crée une erreur de configuration non supportée
    pub fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedConfiguration(reason.into())
    }

    /// Crée une erreur d'ellipsoïde invalide
    pub fn invalid_spheroid(a: f64, f: f64, reason: impl Into<String>) -> Self {
        Self::InvalidSpheroid {
            a,
            f,
            reason: reason.into(),
        }
    }

    /// Crée une erreur de configuration avec contexte
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
