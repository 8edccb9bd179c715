use uom::{
    si::{
        ISQ, Quantity, SI,
        area::square_meter,
        f64::{Area, Power, TemperatureInterval, Time},
        power::watt,
        temperature_interval::kelvin,
        time::second,
    },
    typenum::{N1, N3, P1, P2, Z0},
};

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Convective heat transfer coefficient, W/(m²·K) in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`ThermalDiffusivity`] from its SI value in m²/s.
#[must_use]
pub fn thermal_diffusivity(square_meters_per_second: f64) -> ThermalDiffusivity {
    Area::new::<square_meter>(square_meters_per_second) / Time::new::<second>(1.0)
}

/// Builds a [`HeatTransferCoefficient`] from its SI value in W/(m²·K).
#[must_use]
pub fn convective_coefficient(watts_per_square_meter_kelvin: f64) -> HeatTransferCoefficient {
    Power::new::<watt>(watts_per_square_meter_kelvin)
        / (Area::new::<square_meter>(1.0) * TemperatureInterval::new::<kelvin>(1.0))
}
