//! One-term transient conduction models for heating and cooling foods.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! classical blanching-style problem: a food body at a uniform initial
//! temperature suddenly exposed to a convective medium. Three adapters share
//! the internal [`core`] solver:
//!
//! - [`CenterTemperature`]: center temperature after an elapsed time.
//! - [`TimeToTemperature`]: time for the center to reach a target.
//! - [`TemperatureAtPosition`]: temperature at a radial/depth position.
//!
//! Each call resolves the food's properties once, at the mean of the initial
//! and medium temperatures (optionally clamped to the initial freezing
//! point), and reports the Fourier-number advisory through
//! [`Evaluation::one_term_valid`].

mod core;

pub use core::{
    Body, Evaluation, Exposure, ONE_TERM_FOURIER_MIN, OneTerm, TemperatureResponse, TimeResponse,
    TransientError,
};

use twine_core::Model;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Time},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    food::{Composition, IceModel, properties},
    geometry::Geometry,
};

/// Shared configuration for the transient conduction adapters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientConfig {
    /// Ice-fraction formulation used when properties are evaluated below
    /// the initial freezing point.
    pub ice_model: IceModel,

    /// Clamp the property-averaging temperature up to the initial freezing
    /// point when the mean of the initial and medium temperatures falls
    /// inside the frozen zone.
    ///
    /// Heating problems never hit the clamp. For cooling toward a frozen
    /// medium, enabling it keeps the one-term properties on the unfrozen
    /// branch; disabling it uses genuinely frozen-phase properties.
    pub clamp_mean_to_freezing_point: bool,
}

impl Default for TransientConfig {
    fn default() -> Self {
        Self {
            ice_model: IceModel::default(),
            clamp_mean_to_freezing_point: true,
        }
    }
}

/// The food body undergoing transient heating or cooling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specimen {
    pub composition: Composition,
    pub initial_freezing_point: ThermodynamicTemperature,
    pub geometry: Geometry,
    /// Half-thickness (slab) or radius (cylinder, sphere).
    pub characteristic_dimension: Length,
}

fn resolve_body(specimen: &Specimen, exposure: &Exposure, config: TransientConfig) -> Body {
    let initial = exposure.initial_temperature.get::<degree_celsius>();
    let medium = exposure.medium_temperature.get::<degree_celsius>();
    let tf = specimen.initial_freezing_point.get::<degree_celsius>();

    let mut mean = 0.5 * (initial + medium);
    if config.clamp_mean_to_freezing_point && mean < tf {
        mean = tf;
    }

    let props = properties::evaluate(
        ThermodynamicTemperature::new::<degree_celsius>(mean),
        &specimen.composition,
        specimen.initial_freezing_point,
        config.ice_model,
    );

    Body {
        geometry: specimen.geometry,
        characteristic_dimension: specimen.characteristic_dimension,
        thermal_conductivity: props.thermal_conductivity,
        thermal_diffusivity: props.thermal_diffusivity,
    }
}

/// Model computing the center temperature after an elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CenterTemperature {
    pub config: TransientConfig,
}

/// Input for [`CenterTemperature`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterTemperatureInput {
    pub specimen: Specimen,
    pub exposure: Exposure,
    pub elapsed: Time,
}

impl Model for CenterTemperature {
    type Input = CenterTemperatureInput;
    type Output = TemperatureResponse;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let body = resolve_body(&input.specimen, &input.exposure, self.config);
        core::center_temperature(&body, &input.exposure, input.elapsed)
    }
}

/// Model solving for the time at which the center reaches a target
/// temperature.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeToTemperature {
    pub config: TransientConfig,
}

/// Input for [`TimeToTemperature`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeToTemperatureInput {
    pub specimen: Specimen,
    pub exposure: Exposure,
    pub target: ThermodynamicTemperature,
}

impl Model for TimeToTemperature {
    type Input = TimeToTemperatureInput;
    type Output = TimeResponse;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let body = resolve_body(&input.specimen, &input.exposure, self.config);
        core::time_to_center_temperature(&body, &input.exposure, input.target)
    }
}

/// Model computing the temperature at a position inside the body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TemperatureAtPosition {
    pub config: TransientConfig,
}

/// Input for [`TemperatureAtPosition`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAtPositionInput {
    pub specimen: Specimen,
    pub exposure: Exposure,
    /// Distance from the center, in `[0, characteristic dimension]`.
    pub position: Length,
    pub elapsed: Time,
}

impl Model for TemperatureAtPosition {
    type Input = TemperatureAtPositionInput;
    type Output = TemperatureResponse;
    type Error = TransientError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let body = resolve_body(&input.specimen, &input.exposure, self.config);
        core::temperature_at(&body, &input.exposure, input.position, input.elapsed)
    }
}
