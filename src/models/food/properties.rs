//! Choi–Okos thermophysical property model.
//!
//! A thin [`twine_core::Model`] adapter over
//! [`support::food::properties`](crate::support::food::properties). The
//! composition is validated when it is constructed, so evaluating the model
//! can never fail.

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::ThermodynamicTemperature;

use crate::support::food::{Composition, FoodProperties, IceModel, properties};

/// Component-additive food property model (Choi and Okos, 1986).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChoiOkos {
    /// Ice-fraction formulation used below the initial freezing point.
    pub ice_model: IceModel,
}

/// Input for [`ChoiOkos`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertyInput {
    /// Temperature at which to evaluate the properties.
    pub temperature: ThermodynamicTemperature,

    pub composition: Composition,

    /// Temperature at which ice begins to form in this food.
    ///
    /// Around −1.8 °C for many high-moisture foods. Always at or below
    /// 0 °C; the caller supplies it rather than the model deriving it.
    pub initial_freezing_point: ThermodynamicTemperature,
}

impl Model for ChoiOkos {
    type Input = PropertyInput;
    type Output = FoodProperties;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(properties::evaluate(
            input.temperature,
            &input.composition,
            input.initial_freezing_point,
            self.ice_model,
        ))
    }
}
