//! Idealized one-dimensional geometries for conduction and freezing models.

/// The idealized shape of a food body.
///
/// Each geometry fixes the meaning of the characteristic dimension: the
/// half-thickness for a slab heated from both faces, and the radius for a
/// cylinder or sphere. The same tag selects the Plank shape factors and the
/// one-term spatial position factor, so geometry-dependent behavior lives in
/// one place instead of in string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// An infinite plate; characteristic dimension is the half-thickness.
    Slab,
    /// An infinite cylinder; characteristic dimension is the radius.
    Cylinder,
    /// A sphere; characteristic dimension is the radius.
    Sphere,
}

/// Plank shape factors (P, R) for a geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlankCoefficients {
    pub p: f64,
    pub r: f64,
}

impl Geometry {
    /// All supported geometries.
    pub const ALL: [Self; 3] = [Self::Slab, Self::Cylinder, Self::Sphere];

    /// Returns the Plank freezing-time shape factors for this geometry.
    #[must_use]
    pub fn plank_coefficients(self) -> PlankCoefficients {
        match self {
            Self::Slab => PlankCoefficients {
                p: 1.0 / 2.0,
                r: 1.0 / 8.0,
            },
            Self::Cylinder => PlankCoefficients {
                p: 1.0 / 4.0,
                r: 1.0 / 16.0,
            },
            Self::Sphere => PlankCoefficients {
                p: 1.0 / 6.0,
                r: 1.0 / 24.0,
            },
        }
    }

    /// Evaluates the one-term spatial position factor at `argument = λ₁·x/Lc`.
    ///
    /// Slab: `cos`, cylinder: `J₀` (Bessel function of the first kind, order
    /// zero), sphere: `sin(x)/x` with the value 1 at the center.
    #[must_use]
    pub fn position_factor(self, argument: f64) -> f64 {
        match self {
            Self::Slab => argument.cos(),
            Self::Cylinder => libm::j0(argument),
            Self::Sphere => {
                if argument == 0.0 {
                    1.0
                } else {
                    argument.sin() / argument
                }
            }
        }
    }
}
