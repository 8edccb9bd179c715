use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types used in the closed unit interval [0, 1].
///
/// Implement this trait for your type `T` if you want to use it with
/// `Constrained<T, UnitInterval>`.
/// Implementations should ensure that `zero() ≤ one()` under the type's
/// `PartialOrd` so the closed interval is well-formed.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Marker type enforcing that a value lies in the closed interval `[0, 1]`.
///
/// Mass fractions are the primary consumer: a component's share of a food's
/// mass is meaningless outside the unit interval.
///
/// # Examples
///
/// ```
/// use twine_food::support::constraint::UnitInterval;
///
/// let fraction = UnitInterval::new(0.75).unwrap();
/// assert_eq!(fraction.into_inner(), 0.75);
///
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(-0.1).is_err());
/// assert!(UnitInterval::new(1.1).is_err());
/// assert!(UnitInterval::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<T, UnitInterval>`] if the value lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside the interval or not a number (`NaN`).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::<T, UnitInterval>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value != value {
            return Err(ConstraintError::NotANumber);
        }
        if *value < T::zero() {
            return Err(ConstraintError::BelowMinimum);
        }
        if *value > T::one() {
            return Err(ConstraintError::AboveMaximum);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mass_fractions() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(0.5).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert!(UnitInterval::new(-0.01).is_err());
        assert!(UnitInterval::new(1.01).is_err());
    }

    #[test]
    fn ratios() {
        assert!(UnitInterval::new(Ratio::new::<ratio>(0.75)).is_ok());
        assert!(UnitInterval::new(Ratio::new::<ratio>(1.5)).is_err());
        assert!(UnitInterval::new(Ratio::new::<ratio>(f64::NAN)).is_err());
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            UnitInterval::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
