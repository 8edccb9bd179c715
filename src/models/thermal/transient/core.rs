//! One-term transient conduction for a convectively cooled or heated body.
//!
//! The computation sequence is fixed: Biot number from `h·Lc/k`, coefficient
//! lookup for `(λ₁, A₁)`, Fourier number from `α·t/Lc²`, then the one-term
//! center-temperature relation `θ₀ = A₁·exp(−λ₁²·Fo)` evaluated forward, or
//! inverted in closed form to solve for time, or scaled by the geometry's
//! position factor for off-center temperatures.
//!
//! Properties are resolved once per call at a representative temperature;
//! there is no property re-evaluation during the time march.

mod error;
mod one_term;

pub use error::TransientError;
pub use one_term::OneTerm;

use uom::si::{
    f64::{Length, Ratio, ThermalConductivity, ThermodynamicTemperature, Time},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::{
    constraint::{Constraint, NonNegative, StrictlyPositive},
    geometry::Geometry,
    units::{HeatTransferCoefficient, ThermalDiffusivity},
};

/// The one-term series loses accuracy below this Fourier number.
pub const ONE_TERM_FOURIER_MIN: f64 = 0.2;

/// A body with resolved transport properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub geometry: Geometry,
    /// Half-thickness (slab) or radius (cylinder, sphere).
    pub characteristic_dimension: Length,
    pub thermal_conductivity: ThermalConductivity,
    pub thermal_diffusivity: ThermalDiffusivity,
}

/// Boundary conditions shared by every transient operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exposure {
    pub initial_temperature: ThermodynamicTemperature,
    pub medium_temperature: ThermodynamicTemperature,
    pub convective_coefficient: HeatTransferCoefficient,
}

/// Dimensionless diagnostics of a one-term evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub biot: Ratio,
    pub fourier: Ratio,
    pub coefficients: OneTerm,
}

impl Evaluation {
    /// Whether the Fourier number is large enough for the one-term
    /// truncation to be accurate.
    ///
    /// This is advisory: results are returned either way, but below
    /// [`ONE_TERM_FOURIER_MIN`] the neglected series terms matter.
    #[must_use]
    pub fn one_term_valid(&self) -> bool {
        self.fourier.get::<ratio>() >= ONE_TERM_FOURIER_MIN
    }
}

/// A temperature result with its evaluation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureResponse {
    pub temperature: ThermodynamicTemperature,
    pub evaluation: Evaluation,
}

/// A solved time with its evaluation diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeResponse {
    pub elapsed: Time,
    pub evaluation: Evaluation,
}

/// Center temperature after `elapsed` exposure to the medium.
///
/// # Errors
///
/// Returns [`TransientError`] for non-physical inputs (non-positive
/// dimension, conductivity, diffusivity, or convective coefficient) or a
/// negative elapsed time.
pub fn center_temperature(
    body: &Body,
    exposure: &Exposure,
    elapsed: Time,
) -> Result<TemperatureResponse, TransientError> {
    let evaluation = evaluate(body, exposure, elapsed)?;
    let theta0 = theta_center(&evaluation);

    Ok(TemperatureResponse {
        temperature: blend(exposure, theta0),
        evaluation,
    })
}

/// Temperature at distance `position` from the center after `elapsed`.
///
/// # Errors
///
/// Returns [`TransientError`] for the same conditions as
/// [`center_temperature`], or if the position lies outside the body.
pub fn temperature_at(
    body: &Body,
    exposure: &Exposure,
    position: Length,
    elapsed: Time,
) -> Result<TemperatureResponse, TransientError> {
    let evaluation = evaluate(body, exposure, elapsed)?;

    let dimension = body.characteristic_dimension.get::<meter>();
    let x = position.get::<meter>();
    if !(0.0..=dimension).contains(&x) {
        return Err(TransientError::PositionOutsideBody {
            position,
            characteristic_dimension: body.characteristic_dimension,
        });
    }

    let theta0 = theta_center(&evaluation);
    let factor = body
        .geometry
        .position_factor(evaluation.coefficients.lambda1 * x / dimension);

    Ok(TemperatureResponse {
        temperature: blend(exposure, theta0 * factor),
        evaluation,
    })
}

/// Time for the center to reach `target`, by closed-form inversion of the
/// one-term relation.
///
/// # Errors
///
/// Returns [`TransientError::EqualTemperatures`] when the initial and medium
/// temperatures coincide, [`TransientError::UnreachableTarget`] when the
/// required temperature ratio falls outside `(0, A₁)`, and the same
/// precondition errors as [`center_temperature`].
pub fn time_to_center_temperature(
    body: &Body,
    exposure: &Exposure,
    target: ThermodynamicTemperature,
) -> Result<TimeResponse, TransientError> {
    validate(body, exposure)?;

    let initial = exposure.initial_temperature.get::<degree_celsius>();
    let medium = exposure.medium_temperature.get::<degree_celsius>();
    if initial == medium {
        return Err(TransientError::EqualTemperatures {
            value: exposure.initial_temperature,
        });
    }

    let biot = biot(body, exposure);
    let coefficients = one_term::coefficients(body.geometry, biot);

    let theta_target = (target.get::<degree_celsius>() - medium) / (initial - medium);
    if theta_target <= 0.0 || theta_target >= coefficients.a1 {
        return Err(TransientError::UnreachableTarget {
            target,
            initial: exposure.initial_temperature,
            medium: exposure.medium_temperature,
        });
    }

    let lambda1 = coefficients.lambda1;
    let fourier = -(theta_target / coefficients.a1).ln() / (lambda1 * lambda1);

    let dimension = body.characteristic_dimension.get::<meter>();
    let alpha = body.thermal_diffusivity.value;
    let elapsed = fourier * dimension * dimension / alpha;

    Ok(TimeResponse {
        elapsed: Time::new::<second>(elapsed),
        evaluation: Evaluation {
            biot: Ratio::new::<ratio>(biot),
            fourier: Ratio::new::<ratio>(fourier),
            coefficients,
        },
    })
}

fn validate(body: &Body, exposure: &Exposure) -> Result<(), TransientError> {
    if StrictlyPositive::check(&body.characteristic_dimension.value).is_err() {
        return Err(TransientError::NonPositiveDimension {
            value: body.characteristic_dimension,
        });
    }
    if StrictlyPositive::check(&body.thermal_conductivity.value).is_err() {
        return Err(TransientError::NonPositiveConductivity {
            value: body.thermal_conductivity,
        });
    }
    if StrictlyPositive::check(&body.thermal_diffusivity.value).is_err() {
        return Err(TransientError::NonPositiveDiffusivity {
            value: body.thermal_diffusivity,
        });
    }
    if StrictlyPositive::check(&exposure.convective_coefficient.value).is_err() {
        return Err(TransientError::NonPositiveConvection {
            value: exposure.convective_coefficient,
        });
    }
    Ok(())
}

fn biot(body: &Body, exposure: &Exposure) -> f64 {
    exposure.convective_coefficient.value * body.characteristic_dimension.get::<meter>()
        / body.thermal_conductivity.value
}

fn evaluate(
    body: &Body,
    exposure: &Exposure,
    elapsed: Time,
) -> Result<Evaluation, TransientError> {
    validate(body, exposure)?;
    if NonNegative::check(&elapsed.value).is_err() {
        return Err(TransientError::NegativeTime { value: elapsed });
    }

    let biot = biot(body, exposure);
    let coefficients = one_term::coefficients(body.geometry, biot);

    let dimension = body.characteristic_dimension.get::<meter>();
    let fourier = body.thermal_diffusivity.value * elapsed.get::<second>() / (dimension * dimension);

    Ok(Evaluation {
        biot: Ratio::new::<ratio>(biot),
        fourier: Ratio::new::<ratio>(fourier),
        coefficients,
    })
}

/// Dimensionless center temperature, `θ₀ = A₁·exp(−λ₁²·Fo)`.
fn theta_center(evaluation: &Evaluation) -> f64 {
    let OneTerm { lambda1, a1 } = evaluation.coefficients;
    a1 * (-lambda1 * lambda1 * evaluation.fourier.get::<ratio>()).exp()
}

/// Maps a dimensionless temperature back to `T = T∞ + θ·(Ti − T∞)`.
fn blend(exposure: &Exposure, theta: f64) -> ThermodynamicTemperature {
    let initial = exposure.initial_temperature.get::<degree_celsius>();
    let medium = exposure.medium_temperature.get::<degree_celsius>();
    ThermodynamicTemperature::new::<degree_celsius>(medium + theta * (initial - medium))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::units::{convective_coefficient, thermal_diffusivity};
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn slab_body() -> Body {
        Body {
            geometry: Geometry::Slab,
            characteristic_dimension: Length::new::<meter>(0.01),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(0.5),
            thermal_diffusivity: thermal_diffusivity(1.5e-7),
        }
    }

    fn blanching() -> Exposure {
        Exposure {
            initial_temperature: celsius(20.0),
            medium_temperature: celsius(80.0),
            // Bi = 50·0.01/0.5 = 1, an exact table breakpoint.
            convective_coefficient: convective_coefficient(50.0),
        }
    }

    #[test]
    fn center_temperature_forward() {
        let response =
            center_temperature(&slab_body(), &blanching(), Time::new::<second>(600.0)).unwrap();

        // Fo = 1.5e-7·600/0.01² = 0.9; θ₀ = 1.1191·exp(−0.8603²·0.9).
        assert_relative_eq!(response.evaluation.biot.value, 1.0, epsilon = 1e-12);
        assert_relative_eq!(response.evaluation.fourier.value, 0.9, epsilon = 1e-12);
        assert_relative_eq!(
            response.temperature.get::<degree_celsius>(),
            45.506707940873916,
            epsilon = 1e-9
        );
        assert!(response.evaluation.one_term_valid());
    }

    #[test]
    fn forward_and_inverse_round_trip() {
        let body = slab_body();
        let exposure = blanching();
        let elapsed = Time::new::<second>(600.0);

        let forward = center_temperature(&body, &exposure, elapsed).unwrap();
        let inverse = time_to_center_temperature(&body, &exposure, forward.temperature).unwrap();

        assert_relative_eq!(
            inverse.elapsed.get::<second>(),
            600.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn round_trip_off_breakpoint() {
        // An interpolated Biot value must round-trip just as exactly.
        let mut body = slab_body();
        body.geometry = Geometry::Sphere;
        let exposure = Exposure {
            convective_coefficient: convective_coefficient(72.5),
            ..blanching()
        };
        let elapsed = Time::new::<second>(900.0);

        let forward = center_temperature(&body, &exposure, elapsed).unwrap();
        let inverse = time_to_center_temperature(&body, &exposure, forward.temperature).unwrap();

        assert_relative_eq!(
            inverse.elapsed.get::<second>(),
            900.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn short_times_are_flagged() {
        let response =
            center_temperature(&slab_body(), &blanching(), Time::new::<second>(60.0)).unwrap();
        assert!(response.evaluation.fourier.value < ONE_TERM_FOURIER_MIN);
        assert!(!response.evaluation.one_term_valid());
    }

    #[test]
    fn cooler_target_than_initial_is_unreachable_when_heating() {
        let err =
            time_to_center_temperature(&slab_body(), &blanching(), celsius(10.0)).unwrap_err();
        assert!(matches!(err, TransientError::UnreachableTarget { .. }));
    }

    #[test]
    fn target_beyond_medium_is_unreachable() {
        let err =
            time_to_center_temperature(&slab_body(), &blanching(), celsius(85.0)).unwrap_err();
        assert!(matches!(err, TransientError::UnreachableTarget { .. }));
    }

    #[test]
    fn equal_boundary_temperatures_are_degenerate() {
        let exposure = Exposure {
            initial_temperature: celsius(80.0),
            ..blanching()
        };
        let err = time_to_center_temperature(&slab_body(), &exposure, celsius(50.0)).unwrap_err();
        assert!(matches!(err, TransientError::EqualTemperatures { .. }));
    }

    #[test]
    fn off_center_profile() {
        let body = slab_body();
        let exposure = blanching();
        let elapsed = Time::new::<second>(600.0);

        let center = center_temperature(&body, &exposure, elapsed).unwrap();
        let at_center =
            temperature_at(&body, &exposure, Length::new::<meter>(0.0), elapsed).unwrap();
        assert_relative_eq!(
            at_center.temperature.get::<degree_celsius>(),
            center.temperature.get::<degree_celsius>()
        );

        // During heating, points toward the surface lead the center.
        let near_surface =
            temperature_at(&body, &exposure, Length::new::<meter>(0.009), elapsed).unwrap();
        assert!(near_surface.temperature > center.temperature);
        assert!(near_surface.temperature < exposure.medium_temperature);
    }

    #[test]
    fn position_outside_the_body_is_rejected() {
        let err = temperature_at(
            &slab_body(),
            &blanching(),
            Length::new::<meter>(0.02),
            Time::new::<second>(600.0),
        )
        .unwrap_err();
        assert!(matches!(err, TransientError::PositionOutsideBody { .. }));
    }

    #[test]
    fn non_physical_inputs_are_rejected() {
        let mut body = slab_body();
        body.characteristic_dimension = Length::new::<meter>(0.0);
        assert!(matches!(
            center_temperature(&body, &blanching(), Time::new::<second>(1.0)).unwrap_err(),
            TransientError::NonPositiveDimension { .. }
        ));

        let mut body = slab_body();
        body.thermal_conductivity = ThermalConductivity::new::<watt_per_meter_kelvin>(0.0);
        assert!(matches!(
            center_temperature(&body, &blanching(), Time::new::<second>(1.0)).unwrap_err(),
            TransientError::NonPositiveConductivity { .. }
        ));

        let mut body = slab_body();
        body.thermal_diffusivity = thermal_diffusivity(0.0);
        assert!(matches!(
            center_temperature(&body, &blanching(), Time::new::<second>(1.0)).unwrap_err(),
            TransientError::NonPositiveDiffusivity { .. }
        ));

        let exposure = Exposure {
            convective_coefficient: convective_coefficient(0.0),
            ..blanching()
        };
        assert!(matches!(
            center_temperature(&slab_body(), &exposure, Time::new::<second>(1.0)).unwrap_err(),
            TransientError::NonPositiveConvection { .. }
        ));

        assert!(matches!(
            center_temperature(&slab_body(), &blanching(), Time::new::<second>(-1.0)).unwrap_err(),
            TransientError::NegativeTime { .. }
        ));
    }
}
