//! Définitions des ellipsoïdes et constantes dérivées

use crate::AreaError;

/// Ellipsoïde de révolution défini par son demi-grand axe et son aplatissement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spheroid {
    /// Demi-grand axe (rayon équatorial) en mètres
    a: f64,
    /// Aplatissement
    f: f64,
}

impl Spheroid {
    /// Ellipsoïde WGS84
    pub const WGS84: Spheroid = Spheroid {
        a: 6378137.0,
        f: 1.0 / 298.257223563,
    };

    /// Ellipsoïde GRS80
    /// Note: Quasi identique à WGS84, différence < 0.1mm
    pub const GRS80: Spheroid = Spheroid {
        a: 6378137.0,
        f: 1.0 / 298.257222101,
    };

    /// Rayon moyen de la Terre (IUGG) en mètres
    pub const MEAN_EARTH_RADIUS: f64 = 6371008.8;

    /// Ellipsoïde quelconque
    ///
    /// # Errors
    ///
    /// `AreaError::InvalidSpheroid` si `a` n'est pas strictement positif et fini,
    /// ou si `f` sort de `[0, 1)` (ce qui garantit `0 <= e² < 1`).
    pub fn new(a: f64, f: f64) -> Result<Self, AreaError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(AreaError::invalid_spheroid(
                a,
                f,
                "semi-major axis must be positive and finite",
            ));
        }
        if !(0.0..1.0).contains(&f) {
            return Err(AreaError::invalid_spheroid(
                a,
                f,
                "flattening must lie in [0, 1)",
            ));
        }
        Ok(Self { a, f })
    }

    /// Sphère de rayon donné (aplatissement nul)
    pub fn sphere(radius: f64) -> Result<Self, AreaError> {
        Self::new(radius, 0.0)
    }

    /// Ellipsoïde prédéfini par son nom (insensible à la casse)
    pub fn named(name: &str) -> Result<Self, AreaError> {
        match name.to_ascii_uppercase().as_str() {
            "WGS84" => Ok(Self::WGS84),
            "GRS80" => Ok(Self::GRS80),
            "SPHERE" => Self::sphere(Self::MEAN_EARTH_RADIUS),
            _ => Err(AreaError::UnknownSpheroid(name.to_string())),
        }
    }

    /// Demi-grand axe
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Aplatissement
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Demi-petit axe (rayon polaire)
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// Première excentricité au carré
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }

    /// Deuxième excentricité au carré
    pub fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }
}

/// Constantes dérivées d'un ellipsoïde, partagées en lecture seule
/// par tous les segments d'un calcul.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpheroidConstants {
    /// Ellipsoïde source, transmis aux stratégies d'azimut
    pub spheroid: Spheroid,
    /// a²
    pub a2: f64,
    /// Première excentricité au carré
    pub e2: f64,
    /// Deuxième excentricité au carré
    pub ep2: f64,
    /// Deuxième excentricité
    pub ep: f64,
    /// Rayon authalique au carré
    pub c2: f64,
}

impl SpheroidConstants {
    pub fn new(spheroid: Spheroid) -> Self {
        let a2 = spheroid.a() * spheroid.a();
        let e2 = spheroid.e2();
        let ep2 = e2 / (1.0 - e2);

        Self {
            spheroid,
            a2,
            e2,
            ep2,
            ep: ep2.sqrt(),
            c2: authalic_radius_sqr(a2, e2),
        }
    }
}

impl From<Spheroid> for SpheroidConstants {
    fn from(spheroid: Spheroid) -> Self {
        Self::new(spheroid)
    }
}

/// c² = a²/2 + b²·atanh(e) / (2e)
fn authalic_radius_sqr(a2: f64, e2: f64) -> f64 {
    if e2 == 0.0 {
        return a2;
    }
    let e = e2.sqrt();
    let b2 = a2 * (1.0 - e2);
    a2 / 2.0 + b2 * e.atanh() / (2.0 * e)
}
