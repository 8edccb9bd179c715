use thiserror::Error;
use uom::si::f64::{Length, ThermalConductivity, ThermodynamicTemperature, Time};

use crate::support::units::{HeatTransferCoefficient, ThermalDiffusivity};

/// Errors that can occur while evaluating the one-term transient solution.
///
/// Every variant is a precondition failure surfaced before any result is
/// produced; a short Fourier number is advisory and reported through
/// [`Evaluation::one_term_valid`](super::Evaluation::one_term_valid) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransientError {
    /// The characteristic dimension must be strictly positive.
    #[error("characteristic dimension must be positive: {value:?}")]
    NonPositiveDimension { value: Length },

    /// The body's thermal conductivity must be strictly positive.
    #[error("thermal conductivity must be positive: {value:?}")]
    NonPositiveConductivity { value: ThermalConductivity },

    /// The body's thermal diffusivity must be strictly positive.
    #[error("thermal diffusivity must be positive: {value:?}")]
    NonPositiveDiffusivity { value: ThermalDiffusivity },

    /// The convective coefficient must be strictly positive.
    #[error("convective coefficient must be positive: {value:?}")]
    NonPositiveConvection { value: HeatTransferCoefficient },

    /// Elapsed time must not be negative.
    #[error("elapsed time must not be negative: {value:?}")]
    NegativeTime { value: Time },

    /// The position must lie between the center and the surface.
    #[error("position {position:?} lies outside the body")]
    PositionOutsideBody {
        position: Length,
        characteristic_dimension: Length,
    },

    /// The initial and medium temperatures coincide, so the temperature
    /// ratio that the inverse solve divides by is undefined.
    #[error("initial and medium temperatures are equal: {value:?}")]
    EqualTemperatures { value: ThermodynamicTemperature },

    /// The requested target temperature cannot be reached.
    ///
    /// The center temperature moves monotonically from the initial
    /// temperature toward the medium temperature, so any target outside
    /// that interval (or one requiring a temperature ratio at or above the
    /// series coefficient A₁) is physically invalid for the one-term
    /// approximation.
    #[error("target temperature {target:?} is not reachable from {initial:?} toward {medium:?}")]
    UnreachableTarget {
        target: ThermodynamicTemperature,
        initial: ThermodynamicTemperature,
        medium: ThermodynamicTemperature,
    },
}
