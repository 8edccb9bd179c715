//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, density,
//! thermal conductivity). This module provides extensions that are useful for
//! modeling but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_food::support::units::TemperatureDifference;
//!
//! let medium = ThermodynamicTemperature::new::<degree_celsius>(95.0);
//! let initial = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let delta_t = medium.minus(initial);
//! // delta_t is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.
//!
//! ## Quantity aliases
//!
//! [`ThermalDiffusivity`] and [`HeatTransferCoefficient`] name quantities
//! that [`uom`] does not define, built from `ISQ` dimension parameters.

mod quantities;
mod temperature_difference;

pub use quantities::{
    HeatTransferCoefficient, ThermalDiffusivity, convective_coefficient, thermal_diffusivity,
};
pub use temperature_difference::TemperatureDifference;
