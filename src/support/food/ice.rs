use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Latent heat of fusion of water at 0 °C, J/kg.
pub(crate) const LATENT_HEAT_OF_FUSION: f64 = 333.6e3;

/// Molar mass of water, g/mol.
pub(crate) const WATER_MOLAR_MASS: f64 = 18.015;

/// Reference specific heat of liquid water, J/(kg·K).
///
/// The heat-balance formulation uses this fixed value rather than
/// re-evaluating the water correlation at temperature.
const LIQUID_WATER_CP_REF: f64 = 4186.0;

/// Molar latent heat of fusion of water, J/mol.
const MOLAR_LATENT_HEAT: f64 = 6010.0;

/// Universal gas constant, J/(mol·K).
const GAS_CONSTANT: f64 = 8.314;

/// Freezing point of pure water, K.
const PURE_WATER_FREEZING_K: f64 = 273.15;

/// How the frozen water mass splits between ice and unfrozen water.
///
/// `ice + unfrozen` always equals the food's initial water fraction, and
/// both parts lie in `[0, initial water fraction]`. At or above the initial
/// freezing point the ice fraction is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IceFractions {
    /// Mass of ice per unit mass of food.
    pub ice: Ratio,
    /// Mass of unfrozen (liquid) water per unit mass of food.
    pub unfrozen: Ratio,
}

/// The ice-fraction formulation to use below the initial freezing point.
///
/// Two formulations are in circulation for this family of models. They give
/// materially different ice fractions for the same inputs, so the choice is
/// explicit rather than hidden:
///
/// - [`MolarActivity`](Self::MolarActivity) (default): the unfrozen water is
///   the fraction whose ideal-solution molar activity matches the
///   Clausius–Clapeyron depression at the given temperature. The ice
///   fraction grows monotonically as temperature falls.
/// - [`HeatBalance`](Self::HeatBalance): a sensible-heat balance against the
///   latent heat of fusion, `Xi = L0 / (Cp,w · (Tf − T)) · Xw`, clamped to
///   the available water. Saturates at full ice just below the freezing
///   point and decreases with falling temperature; retained for parity with
///   the historical formulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IceModel {
    HeatBalance,
    #[default]
    MolarActivity,
}

impl IceModel {
    /// Splits the initial water fraction into ice and unfrozen water.
    ///
    /// `water_fraction` is the food's initial (total) water mass fraction.
    /// Above or at the initial freezing point no ice exists. Degenerate
    /// inputs (zero temperature depression, non-positive absolute
    /// temperature) yield zero ice rather than a division error, and the
    /// split is always clamped into `[0, water_fraction]`.
    #[must_use]
    pub fn fractions(
        self,
        temperature: ThermodynamicTemperature,
        initial_freezing_point: ThermodynamicTemperature,
        water_fraction: Ratio,
    ) -> IceFractions {
        let t = temperature.get::<degree_celsius>();
        let tf = initial_freezing_point.get::<degree_celsius>();
        let xw = water_fraction.get::<ratio>();

        let ice = if t >= tf {
            0.0
        } else {
            match self {
                Self::HeatBalance => heat_balance_ice(t, tf, xw),
                Self::MolarActivity => (1.0 - molar_activity(t)) * xw,
            }
        };

        let ice = ice.clamp(0.0, xw);
        IceFractions {
            ice: Ratio::new::<ratio>(ice),
            unfrozen: Ratio::new::<ratio>(xw - ice),
        }
    }
}

/// Sensible-heat-balance ice fraction, `L0 / (Cp,w · (Tf − t)) · Xw`.
fn heat_balance_ice(t: f64, tf: f64, xw: f64) -> f64 {
    let depression = tf - t;
    if depression <= 0.0 {
        return 0.0;
    }
    let frozen_share = LATENT_HEAT_OF_FUSION / (LIQUID_WATER_CP_REF * depression);
    frozen_share.clamp(0.0, 1.0) * xw
}

/// Molar fraction of water that remains unfrozen at `t` (°C).
///
/// `XA = exp[(λ/R)·(1/T0 − 1/T)]` with T absolute, clamped into `[0, 1]` so
/// overflow or a non-positive absolute temperature can never propagate a
/// NaN or infinity.
pub(crate) fn molar_activity(t: f64) -> f64 {
    let t_abs = t + PURE_WATER_FREEZING_K;
    if t_abs <= 0.0 {
        return 1.0;
    }
    let exponent = (MOLAR_LATENT_HEAT / GAS_CONSTANT) * (1.0 / PURE_WATER_FREEZING_K - 1.0 / t_abs);
    let activity = exponent.exp();
    if activity.is_nan() {
        return 1.0;
    }
    activity.clamp(0.0, 1.0)
}
