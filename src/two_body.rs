//! # Unperturbed Kepler motion
//!
//! Alternative to the SGP4 kernel for users who want exact conic motion: the mean anomaly
//! grows linearly with time, Kepler's equation is solved with Newton–Raphson
//! ([`roots::find_root_newton_raphson`]) and the perifocal state is rotated into the
//! inertial frame with `Rz(Ω)·Rx(i)·Rz(ω)`.
//!
//! The model shares the error taxonomy of [`crate::error_code`]: a radius below the
//! equatorial radius of the gravity model is reported as decayed (`6`), with the state
//! still returned.

use std::f64::consts::PI;

use nalgebra::{Rotation3, Vector3};
use roots::{find_root_newton_raphson, SimpleConvergency};

use crate::{
    constants::{Kilometer, Minute, Radian, DPI, SECONDS_PER_MINUTE},
    error_code::ErrorCode,
    gravity::GravConst,
    orbit_errors::OrbitError,
};

/// Conic orbit parameterized by its epoch elements.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoBodyModel {
    mu: f64,
    radius_earth_km: Kilometer,
    semimajor_axis: Kilometer,
    eccentricity: f64,
    mean_anomaly: Radian,
    /// Mean motion (rad/s)
    mean_motion: f64,
    orientation: Rotation3<f64>,
}

impl TwoBodyModel {
    /// Build the model.
    ///
    /// Arguments
    /// -----------------
    /// * `gc`: gravity constants, only `μ` and the equatorial radius are used.
    /// * `semimajor_axis`: km.
    /// * `eccentricity`: slightly negative values are clamped to `0`.
    /// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: radians.
    pub fn new(
        gc: &GravConst,
        semimajor_axis: Kilometer,
        eccentricity: f64,
        inclination: Radian,
        right_ascension: Radian,
        argument_of_perigee: Radian,
        mean_anomaly: Radian,
    ) -> Self {
        let orientation = Rotation3::from_axis_angle(&Vector3::z_axis(), right_ascension)
            * Rotation3::from_axis_angle(&Vector3::x_axis(), inclination)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), argument_of_perigee);

        TwoBodyModel {
            mu: gc.mu,
            radius_earth_km: gc.radius_earth_km,
            semimajor_axis,
            eccentricity: eccentricity.max(0.0),
            mean_anomaly,
            mean_motion: (gc.mu / semimajor_axis.powi(3)).sqrt(),
            orientation,
        }
    }

    /// Solve `E - e sin E = M` for the eccentric anomaly.
    fn solve_kepler_equation(&self, mean_anomaly: Radian) -> Result<Radian, OrbitError> {
        let e = self.eccentricity;
        let f = |ecc_anom: f64| -> f64 { ecc_anom - e * ecc_anom.sin() - mean_anomaly };
        let df = |ecc_anom: f64| -> f64 { 1.0 - e * ecc_anom.cos() };

        let x0 = if e < 0.8 { mean_anomaly } else { PI };

        let mut tol = SimpleConvergency {
            eps: f64::EPSILON * 1e2,
            max_iter: 50,
        };

        Ok(find_root_newton_raphson(x0, &f, &df, &mut tol)?)
    }

    /// State `tsince` minutes after the epoch.
    ///
    /// Return
    /// ----------
    /// * `(position, velocity, code)` in km and km/s, or an error when Kepler's equation
    ///   does not converge.
    pub fn propagate(
        &self,
        tsince: Minute,
    ) -> Result<(Vector3<f64>, Vector3<f64>, ErrorCode), OrbitError> {
        let a = self.semimajor_axis;
        let e = self.eccentricity;

        let mean_anomaly =
            (self.mean_anomaly + self.mean_motion * tsince * SECONDS_PER_MINUTE).rem_euclid(DPI);
        let ecc_anom = self.solve_kepler_equation(mean_anomaly)?;
        let (sin_e, cos_e) = ecc_anom.sin_cos();

        let beta = (1.0 - e * e).sqrt();
        let radius = a * (1.0 - e * cos_e);

        let position_pf = Vector3::new(a * (cos_e - e), a * beta * sin_e, 0.0);
        let velocity_pf = Vector3::new(-sin_e, beta * cos_e, 0.0) * ((self.mu * a).sqrt() / radius);

        let position = self.orientation * position_pf;
        let velocity = self.orientation * velocity_pf;

        let code = if position.norm() < self.radius_earth_km {
            ErrorCode::Decayed
        } else {
            ErrorCode::Healthy
        };
        Ok((position, velocity, code))
    }
}
