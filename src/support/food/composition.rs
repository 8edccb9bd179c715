use thiserror::Error;
use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, ConstraintError, UnitInterval};

use super::Component;

/// Allowed deviation of the six percentages from a 100% sum.
pub const COMPOSITION_SUM_TOLERANCE: f64 = 0.01;

/// Proximal composition of a food, as mass percentages.
///
/// This is the raw analysis as a caller reports it. Convert it into a
/// [`Composition`] before computing properties; the conversion is where the
/// percentages are validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proximate {
    pub water: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrate: f64,
    pub fiber: f64,
    pub ash: f64,
}

/// Errors that can occur while validating a [`Proximate`] analysis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CompositionError {
    /// A component percentage lies outside [0, 100] or is not a number.
    #[error("invalid {component:?} percentage: {source}")]
    Percentage {
        component: Component,
        source: ConstraintError,
    },

    /// The six percentages do not sum to 100 within tolerance.
    #[error("composition must sum to 100%, got {total_percent}%")]
    Sum { total_percent: f64 },
}

/// A validated six-component composition, stored as mass fractions.
///
/// Construction enforces that every percentage lies in [0, 100] and that the
/// six sum to 100 ± [`COMPOSITION_SUM_TOLERANCE`]. A sum violation is a hard
/// error, not a normalization: the correlations are meaningless for a
/// non-normalized composition, so the caller must fix its inputs.
///
/// # Example
///
/// ```
/// use twine_food::support::food::{Component, Composition, Proximate};
///
/// let composition = Composition::new(Proximate {
///     water: 75.0,
///     protein: 15.0,
///     fat: 5.0,
///     carbohydrate: 4.0,
///     fiber: 0.5,
///     ash: 0.5,
/// })
/// .unwrap();
///
/// assert_eq!(composition.fraction(Component::Water).value, 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition {
    fractions: [Constrained<Ratio, UnitInterval>; 6],
}

impl Composition {
    /// Validates a proximal analysis and stores it as mass fractions.
    ///
    /// # Errors
    ///
    /// Returns a [`CompositionError`] if any percentage is outside [0, 100]
    /// or the sum deviates from 100% by more than the tolerance.
    pub fn new(proximate: Proximate) -> Result<Self, CompositionError> {
        let percents = [
            (Component::Water, proximate.water),
            (Component::Protein, proximate.protein),
            (Component::Fat, proximate.fat),
            (Component::Carbohydrate, proximate.carbohydrate),
            (Component::Fiber, proximate.fiber),
            (Component::Ash, proximate.ash),
        ];

        let mut fractions = [UnitInterval::new(Ratio::new::<ratio>(0.0))
            .expect("zero is within the unit interval"); 6];
        for (component, percent) in percents {
            fractions[component.index()] =
                UnitInterval::new(Ratio::new::<ratio>(percent / 100.0)).map_err(|source| {
                    CompositionError::Percentage { component, source }
                })?;
        }

        let total_percent: f64 = percents.iter().map(|(_, p)| p).sum();
        if (total_percent - 100.0).abs() > COMPOSITION_SUM_TOLERANCE {
            return Err(CompositionError::Sum { total_percent });
        }

        Ok(Self { fractions })
    }

    /// Returns the mass fraction of the given constituent.
    #[must_use]
    pub fn fraction(&self, component: Component) -> Ratio {
        self.fractions[component.index()].into_inner()
    }

    /// Returns the initial (total) water mass fraction.
    #[must_use]
    pub fn water_fraction(&self) -> Ratio {
        self.fraction(Component::Water)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn lean_meat() -> Proximate {
        Proximate {
            water: 75.0,
            protein: 15.0,
            fat: 5.0,
            carbohydrate: 4.0,
            fiber: 0.5,
            ash: 0.5,
        }
    }

    #[test]
    fn valid_composition() {
        let composition = Composition::new(lean_meat()).unwrap();

        assert_relative_eq!(composition.water_fraction().value, 0.75);
        assert_relative_eq!(composition.fraction(Component::Protein).value, 0.15);
        assert_relative_eq!(composition.fraction(Component::Ash).value, 0.005);

        let total: f64 = Component::ALL
            .iter()
            .map(|&c| composition.fraction(c).value)
            .sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sum_within_tolerance_is_accepted() {
        let mut proximate = lean_meat();
        proximate.ash += 0.009;
        assert!(Composition::new(proximate).is_ok());
    }

    #[test]
    fn sum_violation_is_rejected() {
        let mut proximate = lean_meat();
        proximate.water = 80.0;
        let err = Composition::new(proximate).unwrap_err();
        assert_eq!(err, CompositionError::Sum { total_percent: 105.0 });
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let mut proximate = lean_meat();
        proximate.protein = -1.0;
        assert!(matches!(
            Composition::new(proximate).unwrap_err(),
            CompositionError::Percentage {
                component: Component::Protein,
                ..
            }
        ));

        proximate = lean_meat();
        proximate.fat = 101.0;
        assert!(matches!(
            Composition::new(proximate).unwrap_err(),
            CompositionError::Percentage {
                component: Component::Fat,
                ..
            }
        ));
    }

    #[test]
    fn nan_percentage_is_rejected() {
        let mut proximate = lean_meat();
        proximate.carbohydrate = f64::NAN;
        assert!(matches!(
            Composition::new(proximate).unwrap_err(),
            CompositionError::Percentage {
                component: Component::Carbohydrate,
                ..
            }
        ));
    }
}
