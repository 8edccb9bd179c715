use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

/// A quadratic correlation in Celsius temperature, `c0 + c1·t + c2·t²`.
#[derive(Debug, Clone, Copy)]
struct Quadratic {
    c0: f64,
    c1: f64,
    c2: f64,
}

impl Quadratic {
    fn at(self, t: f64) -> f64 {
        self.c0 + self.c1 * t + self.c2 * t * t
    }
}

/// Choi–Okos correlation set for one constituent.
///
/// Density in kg/m³, specific heat in J/(kg·K), conductivity in W/(m·K),
/// all as functions of temperature in °C. The fits cover roughly −40 °C to
/// 150 °C; evaluation outside that range extrapolates without checks.
#[derive(Debug, Clone, Copy)]
struct Correlations {
    density: Quadratic,
    specific_heat: Quadratic,
    conductivity: Quadratic,
}

const LIQUID_WATER: Correlations = Correlations {
    density: Quadratic {
        c0: 997.18,
        c1: 3.1439e-3,
        c2: -3.7574e-3,
    },
    specific_heat: Quadratic {
        c0: 4176.2,
        c1: -9.0864e-2,
        c2: 5.4731e-3,
    },
    conductivity: Quadratic {
        c0: 0.57109,
        c1: 1.7625e-3,
        c2: -6.7036e-6,
    },
};

const ICE: Correlations = Correlations {
    density: Quadratic {
        c0: 916.89,
        c1: -0.13071,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 2062.3,
        c1: 6.0769,
        c2: 0.0,
    },
    conductivity: Quadratic {
        c0: 2.2196,
        c1: -6.2489e-3,
        c2: 1.0154e-4,
    },
};

const PROTEIN: Correlations = Correlations {
    density: Quadratic {
        c0: 1329.9,
        c1: -0.5184,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 2008.2,
        c1: 1.2089,
        c2: -1.3129e-3,
    },
    conductivity: Quadratic {
        c0: 0.17881,
        c1: 1.1958e-3,
        c2: -2.7178e-6,
    },
};

const FAT: Correlations = Correlations {
    density: Quadratic {
        c0: 925.59,
        c1: -0.41757,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 1984.2,
        c1: 1.4733,
        c2: -4.8008e-3,
    },
    conductivity: Quadratic {
        c0: 0.18071,
        c1: -2.7604e-4,
        c2: -1.7749e-7,
    },
};

const CARBOHYDRATE: Correlations = Correlations {
    density: Quadratic {
        c0: 1599.1,
        c1: -0.31046,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 1548.8,
        c1: 1.9625,
        c2: -5.9399e-3,
    },
    conductivity: Quadratic {
        c0: 0.20141,
        c1: 1.3874e-3,
        c2: -4.3312e-6,
    },
};

const FIBER: Correlations = Correlations {
    density: Quadratic {
        c0: 1311.5,
        c1: -0.36589,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 1845.9,
        c1: 1.8306,
        c2: -4.6509e-3,
    },
    conductivity: Quadratic {
        c0: 0.18331,
        c1: 1.2497e-3,
        c2: -3.1683e-6,
    },
};

const ASH: Correlations = Correlations {
    density: Quadratic {
        c0: 2423.8,
        c1: -0.28063,
        c2: 0.0,
    },
    specific_heat: Quadratic {
        c0: 1092.6,
        c1: 1.8896,
        c2: -3.6817e-3,
    },
    conductivity: Quadratic {
        c0: 0.32962,
        c1: 1.4011e-3,
        c2: -2.9069e-6,
    },
};

/// A constituent of a food's proximal composition.
///
/// Water dispatches between liquid and ice correlation constants on the sign
/// of the Celsius temperature. The 0 °C branch point is a property of the
/// correlations, not of any particular food: it does not move with the
/// food's initial freezing point. Use [`LiquidWater`] or [`Ice`] to evaluate
/// a specific water phase regardless of temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Water,
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
    Ash,
}

impl Component {
    /// All six constituents, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Water,
        Self::Protein,
        Self::Fat,
        Self::Carbohydrate,
        Self::Fiber,
        Self::Ash,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn correlations(self, t: f64) -> Correlations {
        match self {
            Self::Water => {
                if t >= 0.0 {
                    LIQUID_WATER
                } else {
                    ICE
                }
            }
            Self::Protein => PROTEIN,
            Self::Fat => FAT,
            Self::Carbohydrate => CARBOHYDRATE,
            Self::Fiber => FIBER,
            Self::Ash => ASH,
        }
    }

    pub(crate) fn density_si(self, t: f64) -> f64 {
        self.correlations(t).density.at(t)
    }

    pub(crate) fn specific_heat_si(self, t: f64) -> f64 {
        self.correlations(t).specific_heat.at(t)
    }

    pub(crate) fn conductivity_si(self, t: f64) -> f64 {
        self.correlations(t).conductivity.at(t)
    }

    /// Returns the constituent's density at the given temperature.
    #[must_use]
    pub fn density(self, temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(
            self.density_si(temperature.get::<degree_celsius>()),
        )
    }

    /// Returns the constituent's specific heat at the given temperature.
    #[must_use]
    pub fn specific_heat(self, temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
            self.specific_heat_si(temperature.get::<degree_celsius>()),
        )
    }

    /// Returns the constituent's thermal conductivity at the given temperature.
    #[must_use]
    pub fn thermal_conductivity(self, temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(
            self.conductivity_si(temperature.get::<degree_celsius>()),
        )
    }
}

/// The liquid branch of the water correlations, at any temperature.
///
/// Below the initial freezing point the unfrozen water fraction stays
/// liquid, so its properties come from this branch even at sub-zero
/// temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LiquidWater;

/// The ice branch of the water correlations, at any temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ice;

impl LiquidWater {
    pub(crate) fn density_si(t: f64) -> f64 {
        LIQUID_WATER.density.at(t)
    }

    pub(crate) fn specific_heat_si(t: f64) -> f64 {
        LIQUID_WATER.specific_heat.at(t)
    }

    pub(crate) fn conductivity_si(t: f64) -> f64 {
        LIQUID_WATER.conductivity.at(t)
    }

    /// Returns liquid water's density at the given temperature.
    #[must_use]
    pub fn density(temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(Self::density_si(
            temperature.get::<degree_celsius>(),
        ))
    }

    /// Returns liquid water's specific heat at the given temperature.
    #[must_use]
    pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(Self::specific_heat_si(
            temperature.get::<degree_celsius>(),
        ))
    }

    /// Returns liquid water's thermal conductivity at the given temperature.
    #[must_use]
    pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(Self::conductivity_si(
            temperature.get::<degree_celsius>(),
        ))
    }
}

impl Ice {
    pub(crate) fn density_si(t: f64) -> f64 {
        ICE.density.at(t)
    }

    pub(crate) fn specific_heat_si(t: f64) -> f64 {
        ICE.specific_heat.at(t)
    }

    pub(crate) fn conductivity_si(t: f64) -> f64 {
        ICE.conductivity.at(t)
    }

    /// Returns ice's density at the given temperature.
    #[must_use]
    pub fn density(temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(Self::density_si(
            temperature.get::<degree_celsius>(),
        ))
    }

    /// Returns ice's specific heat at the given temperature.
    #[must_use]
    pub fn specific_heat(temperature: ThermodynamicTemperature) -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(Self::specific_heat_si(
            temperature.get::<degree_celsius>(),
        ))
    }

    /// Returns ice's thermal conductivity at the given temperature.
    #[must_use]
    pub fn thermal_conductivity(temperature: ThermodynamicTemperature) -> ThermalConductivity {
        ThermalConductivity::new::<watt_per_meter_kelvin>(Self::conductivity_si(
            temperature.get::<degree_celsius>(),
        ))
    }
}
