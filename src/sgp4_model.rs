//! # SGP4 propagation
//!
//! Analytical propagation of mean elements with the [`sgp4`] crate. Near-earth orbits get the
//! secular and periodic `J2`, `J3` and `J4` terms; orbits with a period of 225 minutes or
//! more switch to the deep-space equations (lunar and solar perturbations, 12 h and 24 h
//! resonances) inside the crate.
//!
//! The element set built from the editor has no drag (`B* = 0`). Its mean motion is taken
//! as a Kozai mean motion, the convention of published element sets.
//!
//! ## Units
//!
//! Inputs are radians and rad/min; outputs are km and km/s in the TEME frame.
//!
//! ## Error codes
//!
//! | crate error | code |
//! |-------------|------|
//! | epoch or propagated eccentricity out of `[0, 1)` | `1` |
//! | negative Kozai or Brouwer mean motion | `2` |
//! | perturbed eccentricity out of range | `3` |
//! | negative semi-latus rectum | `4` |
//!
//! A radius below the equatorial radius is reported as `6`, with the state still returned.
//! For the other codes the vectors are filled with `NaN`.

use hifitime::Epoch;
use nalgebra::Vector3;
use sgp4::{Constants, KozaiElementsError, MinutesSinceEpoch, Orbit, OutOfRangeEpochEccentricity};

use crate::{
    constants::{Kilometer, Minute, Radian, XP_DOT_P},
    error_code::ErrorCode,
    gravity::GravConst,
    time::julian_years_since_j2000,
};

impl From<KozaiElementsError> for ErrorCode {
    fn from(_: KozaiElementsError) -> Self {
        ErrorCode::NegativeMeanMotion
    }
}

impl From<OutOfRangeEpochEccentricity> for ErrorCode {
    fn from(_: OutOfRangeEpochEccentricity) -> Self {
        ErrorCode::MeanElements
    }
}

impl From<sgp4::Error> for ErrorCode {
    fn from(err: sgp4::Error) -> Self {
        match err {
            sgp4::Error::OutOfRangeEccentricity { .. } => ErrorCode::MeanElements,
            sgp4::Error::OutOfRangePerturbedEccentricity { .. } => ErrorCode::PerturbedEccentricity,
            sgp4::Error::NegativeSemiLatusRectum { .. } => ErrorCode::NegativeSemiLatusRectum,
        }
    }
}

/// Initialized SGP4 propagator of one element set.
#[derive(Debug, Clone, PartialEq)]
pub struct Sgp4Model {
    constants: Constants,
    radius_earth_km: Kilometer,
}

impl Sgp4Model {
    /// Initialize the propagator.
    ///
    /// Arguments
    /// -----------------
    /// * `gc`: gravity constants, their geopotential drives the model.
    /// * `epoch`: epoch of the element set, used for the deep-space sidereal time.
    /// * `eccentricity`: slightly negative values are clamped to `0`.
    /// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: radians.
    /// * `kozai_mean_motion`: rad/min.
    ///
    /// Return
    /// ----------
    /// * The model, or the [`ErrorCode`] of the rejected epoch elements.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        gc: &GravConst,
        epoch: &Epoch,
        eccentricity: f64,
        inclination: Radian,
        right_ascension: Radian,
        argument_of_perigee: Radian,
        mean_anomaly: Radian,
        kozai_mean_motion: f64,
    ) -> Result<Self, ErrorCode> {
        let orbit = Orbit::from_kozai_elements(
            &gc.geopotential,
            inclination,
            right_ascension,
            eccentricity.max(0.0),
            argument_of_perigee,
            mean_anomaly,
            kozai_mean_motion,
        )?;
        let constants = Constants::new(
            gc.geopotential,
            sgp4::iau_epoch_to_sidereal_time,
            julian_years_since_j2000(epoch),
            0.0,
            orbit,
        )?;
        Ok(Sgp4Model {
            constants,
            radius_earth_km: gc.radius_earth_km,
        })
    }

    /// Position (km) and velocity (km/s) `tsince` minutes after the epoch, with the status
    /// of the evaluation.
    pub fn propagate(&self, tsince: Minute) -> (Vector3<f64>, Vector3<f64>, ErrorCode) {
        match self.constants.propagate(MinutesSinceEpoch(tsince)) {
            Ok(prediction) => {
                let position = Vector3::from(prediction.position);
                let velocity = Vector3::from(prediction.velocity);
                let code = if position.norm() < self.radius_earth_km {
                    ErrorCode::Decayed
                } else {
                    ErrorCode::Healthy
                };
                (position, velocity, code)
            }
            Err(err) => (
                Vector3::repeat(f64::NAN),
                Vector3::repeat(f64::NAN),
                ErrorCode::from(err),
            ),
        }
    }
}

/// Kozai mean motion in rad/min from a mean motion in rev/day.
pub fn rev_per_day_to_rad_per_min(rev_per_day: f64) -> f64 {
    rev_per_day / XP_DOT_P
}
