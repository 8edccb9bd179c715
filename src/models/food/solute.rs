//! Apparent solute molar mass from freezing-point depression.
//!
//! An ideal dilute solution depresses the freezing point in proportion to
//! the solute's molar amount. Running that relation backwards, a food's
//! measured initial freezing point and water content yield an effective
//! molar mass for its combined non-aqueous solids.

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{MolarMass, Ratio, ThermodynamicTemperature},
    molar_mass::gram_per_mole,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::food::{WATER_MOLAR_MASS, molar_activity};

/// Errors that can occur while estimating an apparent solute molar mass.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SoluteError {
    /// The depression relation characterizes freezing below pure water's
    /// 0 °C; a freezing point above that contradicts the model's premise.
    #[error("initial freezing point {value:?} is above 0 °C")]
    FreezingPointAboveZero { value: ThermodynamicTemperature },

    /// A food with no water has no freezing-point depression to invert.
    #[error("composition contains no water")]
    NoWater,

    /// A food with no solids has no solute to characterize.
    #[error("composition contains no solids")]
    NoSolids,
}

/// Input for [`ApparentMolarMass`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoluteInput {
    /// Measured initial freezing point of the food, at or below 0 °C.
    pub initial_freezing_point: ThermodynamicTemperature,

    /// Initial (total) water mass fraction, in (0, 1).
    pub water_fraction: Ratio,
}

/// Apparent molar mass of a food's non-aqueous solids.
///
/// Inverts the ideal-solution freezing-point-depression relation: the molar
/// activity of water at the measured freezing point fixes the solute's molar
/// amount, and the known solids mass then fixes its molar mass. As the food
/// approaches pure water (activity → 1) the apparent molar mass diverges;
/// the model returns `+∞` explicitly in that limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApparentMolarMass;

impl Model for ApparentMolarMass {
    type Input = SoluteInput;
    type Output = MolarMass;
    type Error = SoluteError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let tf = input.initial_freezing_point.get::<degree_celsius>();
        if tf > 0.0 {
            return Err(SoluteError::FreezingPointAboveZero {
                value: input.initial_freezing_point,
            });
        }

        let water = input.water_fraction.get::<ratio>();
        if water <= 0.0 {
            return Err(SoluteError::NoWater);
        }
        let solids = 1.0 - water;
        if solids <= 0.0 {
            return Err(SoluteError::NoSolids);
        }

        let activity = molar_activity(tf);
        if activity >= 1.0 {
            return Ok(MolarMass::new::<gram_per_mole>(f64::INFINITY));
        }

        let molar_mass = activity * solids * WATER_MOLAR_MASS / (water * (1.0 - activity));
        Ok(MolarMass::new::<gram_per_mole>(molar_mass))
    }
}
