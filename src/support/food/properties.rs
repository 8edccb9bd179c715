//! Choi–Okos composition-weighted food properties.
//!
//! Density combines by a harmonic mass-fraction mean, specific heat and
//! thermal conductivity by arithmetic weighted sums. Below the initial
//! freezing point the water term splits into an unfrozen part (liquid-branch
//! correlations) and an ice part (ice-branch correlations), with the split
//! supplied by an [`IceModel`]. Thermal diffusivity is always derived as
//! `k / (ρ·Cp)`, never an input.

use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{ThermalDiffusivity, thermal_diffusivity};

use super::{Component, Composition, Ice, IceModel, LiquidWater};

/// Aggregate thermophysical properties of a food at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodProperties {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub thermal_conductivity: ThermalConductivity,
    pub thermal_diffusivity: ThermalDiffusivity,
}

/// Evaluates the food's properties at the given temperature.
///
/// The composition is validated at construction, so evaluation is total:
/// every `(temperature, composition, freezing point)` triple yields the same
/// properties on every call. At or above the initial freezing point the
/// result is exactly the unfrozen-phase combination; below it the water term
/// splits per the chosen [`IceModel`]. A degenerate `ρ·Cp` of zero yields a
/// zero diffusivity rather than a division error.
#[must_use]
pub fn evaluate(
    temperature: ThermodynamicTemperature,
    composition: &Composition,
    initial_freezing_point: ThermodynamicTemperature,
    ice_model: IceModel,
) -> FoodProperties {
    let t = temperature.get::<degree_celsius>();
    let tf = initial_freezing_point.get::<degree_celsius>();

    let mut inverse_density = 0.0;
    let mut specific_heat = 0.0;
    let mut conductivity = 0.0;

    let mut add = |fraction: f64, density: f64, cp: f64, k: f64| {
        inverse_density += fraction / density;
        specific_heat += fraction * cp;
        conductivity += fraction * k;
    };

    if t < tf {
        let split = ice_model.fractions(temperature, initial_freezing_point, composition.water_fraction());
        add(
            split.unfrozen.get::<ratio>(),
            LiquidWater::density_si(t),
            LiquidWater::specific_heat_si(t),
            LiquidWater::conductivity_si(t),
        );
        add(
            split.ice.get::<ratio>(),
            Ice::density_si(t),
            Ice::specific_heat_si(t),
            Ice::conductivity_si(t),
        );
    } else {
        let xw = composition.water_fraction().get::<ratio>();
        add(
            xw,
            Component::Water.density_si(t),
            Component::Water.specific_heat_si(t),
            Component::Water.conductivity_si(t),
        );
    }

    for component in [
        Component::Protein,
        Component::Fat,
        Component::Carbohydrate,
        Component::Fiber,
        Component::Ash,
    ] {
        add(
            composition.fraction(component).get::<ratio>(),
            component.density_si(t),
            component.specific_heat_si(t),
            component.conductivity_si(t),
        );
    }

    let density = if inverse_density == 0.0 {
        0.0
    } else {
        1.0 / inverse_density
    };

    let volumetric_heat = density * specific_heat;
    let diffusivity = if volumetric_heat == 0.0 {
        0.0
    } else {
        conductivity / volumetric_heat
    };

    FoodProperties {
        density: MassDensity::new::<kilogram_per_cubic_meter>(density),
        specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
        thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
        thermal_diffusivity: thermal_diffusivity(diffusivity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::food::Proximate;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn lean_meat() -> Composition {
        Composition::new(Proximate {
            water: 75.0,
            protein: 15.0,
            fat: 5.0,
            carbohydrate: 4.0,
            fiber: 0.5,
            ash: 0.5,
        })
        .unwrap()
    }

    #[test]
    fn unfrozen_scenario_at_room_temperature() {
        let props = evaluate(
            celsius(25.0),
            &lean_meat(),
            celsius(-1.8),
            IceModel::default(),
        );

        // Pinned against the correlation tables.
        assert_relative_eq!(props.density.value, 1048.8587592562144, max_relative = 1e-9);
        assert_relative_eq!(
            props.specific_heat.value,
            3618.4511943750003,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            props.thermal_conductivity.value,
            0.5101704571875,
            max_relative = 1e-9
        );

        // Representative ranges for a high-moisture food.
        assert!(props.density.value > 1000.0 && props.density.value < 1050.0);
        assert!(props.specific_heat.value > 3600.0 && props.specific_heat.value < 3900.0);
    }

    #[test]
    fn diffusivity_is_derived() {
        let props = evaluate(
            celsius(25.0),
            &lean_meat(),
            celsius(-1.8),
            IceModel::default(),
        );
        assert_relative_eq!(
            props.thermal_diffusivity.value,
            props.thermal_conductivity.value / (props.density.value * props.specific_heat.value),
            max_relative = 1e-12
        );
    }

    #[test]
    fn at_the_freezing_point_the_unfrozen_formula_applies() {
        // T = Tf must take the unfrozen branch exactly: no ice terms.
        let tf = celsius(-1.8);
        let props = evaluate(tf, &lean_meat(), tf, IceModel::default());

        let t = -1.8;
        let composition = lean_meat();
        let mut inverse_density = 0.0;
        let mut cp = 0.0;
        for component in Component::ALL {
            let x = composition.fraction(component).value;
            inverse_density += x / component.density_si(t);
            cp += x * component.specific_heat_si(t);
        }
        assert_relative_eq!(props.density.value, 1.0 / inverse_density);
        assert_relative_eq!(props.specific_heat.value, cp);
    }

    #[test]
    fn frozen_branch_splits_the_water_term() {
        let props = evaluate(
            celsius(-10.0),
            &lean_meat(),
            celsius(-1.8),
            IceModel::MolarActivity,
        );

        // Pinned against the correlation tables with XA(-10 °C) = 0.90432.
        assert_relative_eq!(props.density.value, 1046.521879837748, max_relative = 1e-9);
        assert_relative_eq!(
            props.specific_heat.value,
            3450.580984605341,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            props.thermal_conductivity.value,
            0.5834869458533027,
            max_relative = 1e-9
        );

        // Ice conducts better than liquid water, so the frozen food does too.
        let unfrozen = evaluate(celsius(-1.8), &lean_meat(), celsius(-1.8), IceModel::MolarActivity);
        assert!(props.thermal_conductivity > unfrozen.thermal_conductivity);
    }
}
