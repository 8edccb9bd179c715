//! Food composition and thermophysical property correlations.
//!
//! The correlations are the Choi–Okos (1986) component-additive fits: each
//! constituent of a food carries its own polynomial for density, specific
//! heat, and thermal conductivity as a function of temperature, and the
//! food-level property is the mass-fraction-weighted combination. Below the
//! initial freezing point, part of the water mass is ice and the water term
//! splits accordingly.

mod component;
mod composition;
mod ice;

pub mod properties;

pub use component::{Component, Ice, LiquidWater};
pub use composition::{COMPOSITION_SUM_TOLERANCE, Composition, CompositionError, Proximate};
pub use ice::{IceFractions, IceModel};
pub use properties::FoodProperties;

pub(crate) use ice::{LATENT_HEAT_OF_FUSION, WATER_MOLAR_MASS, molar_activity};
