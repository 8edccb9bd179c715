//! Plank freezing-time model.
//!
//! This module provides the [`twine_core::Model`] adapter for estimating how
//! long a food takes to freeze once its surface is exposed to a medium
//! colder than its initial freezing point. The computation lives in the
//! internal [`core`] module.

mod core;

pub use core::{FreezingError, FreezingInput};

use twine_core::Model;
use uom::si::f64::Time;

use crate::support::food::IceModel;

/// Plank's freezing-time equation for slabs, cylinders, and spheres.
///
/// The estimate covers the phase change alone: the effective latent heat is
/// `L0 · x_water`, and sensible heat above or below the freezing point is
/// neglected. A medium exactly at the freezing point yields `+∞`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlankFreezingTime {
    /// Ice-fraction formulation used when evaluating frozen-phase
    /// conductivity.
    pub ice_model: IceModel,
}

impl Model for PlankFreezingTime {
    type Input = FreezingInput;
    type Output = Time;
    type Error = FreezingError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        core::freezing_time(input, self.ice_model)
    }
}
