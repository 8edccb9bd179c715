//! Plank freezing-time estimation.
//!
//! Plank's semi-empirical equation balances the effective latent heat
//! released during freezing against convective and conductive resistances:
//!
//! `t = [Le / (Tf − Ta)] · [P·a/h + R·a²/k_f]`
//!
//! with geometry shape factors (P, R), the effective latent heat
//! `Le = L0 · x_water`, and the frozen food's conductivity `k_f`. Sensible
//! heat above the freezing point and subcooling below it are neglected; the
//! estimate covers the phase change alone.

use thiserror::Error;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Time},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    food::{Composition, IceModel, LATENT_HEAT_OF_FUSION, properties},
    geometry::Geometry,
    units::HeatTransferCoefficient,
};

/// Inputs for a Plank freezing-time estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreezingInput {
    pub composition: Composition,

    /// Temperature of the food entering the freezer.
    ///
    /// Unused by the basic Plank form, which neglects sensible heat above
    /// the freezing point; carried so callers describe the full process.
    pub initial_temperature: ThermodynamicTemperature,

    /// Temperature of the freezing medium.
    pub medium_temperature: ThermodynamicTemperature,

    /// Temperature at which ice begins to form in this food.
    pub initial_freezing_point: ThermodynamicTemperature,

    pub convective_coefficient: HeatTransferCoefficient,

    pub geometry: Geometry,

    /// Half-thickness (slab) or radius (cylinder, sphere).
    pub characteristic_dimension: Length,
}

/// Errors that can occur while estimating a freezing time.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FreezingError {
    /// Freezing requires the medium to be colder than the initial freezing
    /// point.
    #[error("medium temperature {medium:?} is above the initial freezing point {freezing_point:?}")]
    MediumAboveFreezingPoint {
        medium: ThermodynamicTemperature,
        freezing_point: ThermodynamicTemperature,
    },

    /// The convective coefficient must be strictly positive.
    #[error("convective coefficient must be positive: {value:?}")]
    NonPositiveConvection { value: HeatTransferCoefficient },

    /// The characteristic dimension must be strictly positive.
    #[error("characteristic dimension must be positive: {value:?}")]
    NonPositiveDimension { value: Length },
}

/// Offset below the initial freezing point for the frozen-property
/// reference temperature, °C.
const FROZEN_REFERENCE_OFFSET: f64 = 5.0;

/// Estimates the freezing time by Plank's equation.
///
/// The frozen conductivity is evaluated at `max(Ta, Tf − 5 °C)`, which lies
/// below the freezing point whenever the preconditions hold. A medium
/// exactly at the freezing point yields `+∞` (no driving force, freezing
/// never completes) rather than a division error.
///
/// # Errors
///
/// Returns [`FreezingError`] if the medium is warmer than the initial
/// freezing point, or the convective coefficient or characteristic
/// dimension is not strictly positive.
pub fn freezing_time(input: &FreezingInput, ice_model: IceModel) -> Result<Time, FreezingError> {
    if StrictlyPositive::check(&input.convective_coefficient.value).is_err() {
        return Err(FreezingError::NonPositiveConvection {
            value: input.convective_coefficient,
        });
    }
    if StrictlyPositive::check(&input.characteristic_dimension.value).is_err() {
        return Err(FreezingError::NonPositiveDimension {
            value: input.characteristic_dimension,
        });
    }

    let ta = input.medium_temperature.get::<degree_celsius>();
    let tf = input.initial_freezing_point.get::<degree_celsius>();
    if ta > tf {
        return Err(FreezingError::MediumAboveFreezingPoint {
            medium: input.medium_temperature,
            freezing_point: input.initial_freezing_point,
        });
    }
    if ta == tf {
        return Ok(Time::new::<second>(f64::INFINITY));
    }

    let reference = ta.max(tf - FROZEN_REFERENCE_OFFSET);
    let frozen = properties::evaluate(
        ThermodynamicTemperature::new::<degree_celsius>(reference),
        &input.composition,
        input.initial_freezing_point,
        ice_model,
    );
    let conductivity = frozen.thermal_conductivity.value;

    let latent = LATENT_HEAT_OF_FUSION * input.composition.water_fraction().get::<ratio>();
    let h = input.convective_coefficient.value;
    let a = input.characteristic_dimension.get::<meter>();
    let shape = input.geometry.plank_coefficients();

    let seconds = latent / (tf - ta) * (shape.p * a / h + shape.r * a * a / conductivity);
    Ok(Time::new::<second>(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{food::Proximate, units::convective_coefficient};

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn lean_meat_slab() -> FreezingInput {
        FreezingInput {
            composition: Composition::new(Proximate {
                water: 75.0,
                protein: 15.0,
                fat: 5.0,
                carbohydrate: 4.0,
                fiber: 0.5,
                ash: 0.5,
            })
            .unwrap(),
            initial_temperature: celsius(20.0),
            medium_temperature: celsius(-20.0),
            initial_freezing_point: celsius(-1.8),
            convective_coefficient: convective_coefficient(15.0),
            geometry: Geometry::Slab,
            characteristic_dimension: Length::new::<meter>(0.05),
        }
    }

    #[test]
    fn slab_estimate_is_positive_and_pinned() {
        let time = freezing_time(&lean_meat_slab(), IceModel::MolarActivity).unwrap();
        assert!(time.get::<second>() > 0.0);
        // Frozen conductivity evaluated at max(-20, -6.8) = -6.8 °C.
        assert_relative_eq!(time.get::<second>(), 30.75664292355558, max_relative = 1e-9);
    }

    #[test]
    fn colder_media_freeze_faster() {
        let mild = freezing_time(&lean_meat_slab(), IceModel::MolarActivity).unwrap();

        let mut input = lean_meat_slab();
        input.medium_temperature = celsius(-40.0);
        let harsh = freezing_time(&input, IceModel::MolarActivity).unwrap();

        assert!(harsh < mild);
    }

    #[test]
    fn shape_factors_order_the_geometries() {
        // At equal dimensions a slab holds the most heat per exposed area,
        // a sphere the least.
        let slab = freezing_time(&lean_meat_slab(), IceModel::MolarActivity).unwrap();

        let mut input = lean_meat_slab();
        input.geometry = Geometry::Cylinder;
        let cylinder = freezing_time(&input, IceModel::MolarActivity).unwrap();

        input.geometry = Geometry::Sphere;
        let sphere = freezing_time(&input, IceModel::MolarActivity).unwrap();

        assert!(slab > cylinder);
        assert!(cylinder > sphere);
    }

    #[test]
    fn medium_at_freezing_point_yields_infinity() {
        let mut input = lean_meat_slab();
        input.medium_temperature = celsius(-1.8);
        let time = freezing_time(&input, IceModel::MolarActivity).unwrap();
        assert!(time.get::<second>().is_infinite());
        assert!(time.get::<second>() > 0.0);
    }

    #[test]
    fn warm_medium_is_rejected() {
        let mut input = lean_meat_slab();
        input.medium_temperature = celsius(0.0);
        assert!(matches!(
            freezing_time(&input, IceModel::MolarActivity).unwrap_err(),
            FreezingError::MediumAboveFreezingPoint { .. }
        ));
    }

    #[test]
    fn non_physical_inputs_are_rejected() {
        let mut input = lean_meat_slab();
        input.convective_coefficient = convective_coefficient(0.0);
        assert!(matches!(
            freezing_time(&input, IceModel::MolarActivity).unwrap_err(),
            FreezingError::NonPositiveConvection { .. }
        ));

        let mut input = lean_meat_slab();
        input.characteristic_dimension = Length::new::<meter>(-0.05);
        assert!(matches!(
            freezing_time(&input, IceModel::MolarActivity).unwrap_err(),
            FreezingError::NonPositiveDimension { .. }
        ));
    }
}
