//! # Orbital record
//!
//! An [`OrbitalRecord`] is the immutable, propagator-ready form of an
//! [`OrbitalElements`] set. It is rebuilt wholesale whenever the elements change.
//!
//! ## Construction
//!
//! 1. Resolve the gravity constants of the configured [`GravityModel`].
//! 2. Capture the epoch and keep it with its element-set form (year and fractional
//!    day-of-year) and its UTC Julian date.
//! 3. Convert the semi-major axis into a mean motion (`n = sqrt(μ/a³)`, in rev/day).
//! 4. Convert the angles to radians. The drag term is fixed at `0`.
//! 5. Run the range checks. The first failing check sets the record error code:
//!    * `1`: `e ≥ 1`, `e < -0.001`, or `a < 0.95` equatorial radii (including `a ≤ 0`),
//!    * `2`: mean motion not strictly positive,
//!    * `5`: `a ≤` [`EARTH_RADIUS`].
//! 6. When healthy, initialize the selected propagation model. SGP4 may still reject the
//!    epoch elements (codes `1` or `2`), in which case the record carries that code.
//!
//! Degenerate orbits are *not* Rust errors: they are carried by [`OrbitalRecord::error`].
//! The only failure of [`OrbitalRecord::build`] is an unreadable wall clock.

use std::fmt;

use hifitime::Epoch;
use log::{debug, warn};

use crate::{
    constants::{Kilometer, Radian, DPI, EARTH_RADIUS, RADEG, SECONDS_PER_DAY},
    elements::OrbitalElements,
    error_code::ErrorCode,
    gravity::{GravConst, GravityModel},
    orbit_errors::OrbitError,
    settings::{EpochSource, PropagationModel, PropagatorSettings},
    sgp4_model::{rev_per_day_to_rad_per_min, Sgp4Model},
    time::{epoch_now, julian_date, ElementSetEpoch},
    two_body::TwoBodyModel,
};

/// Initialized propagation model of a healthy record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Kernel {
    Sgp4(Box<Sgp4Model>),
    TwoBody(TwoBodyModel),
}

/// Propagator-ready orbit.
///
/// Units
/// -----
/// * angles: radians
/// * `semimajor_axis`: km
/// * `mean_motion`: revolutions per day
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalRecord {
    pub epoch: Epoch,
    pub element_set_epoch: ElementSetEpoch,
    /// UTC Julian date of `epoch` (days)
    pub julian_date: f64,

    pub semimajor_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub right_ascension: Radian,
    pub argument_of_perigee: Radian,
    pub mean_anomaly: Radian,
    pub mean_motion: f64,
    pub drag_term: f64,

    pub gravity_model: GravityModel,
    pub model: PropagationModel,

    /// Construction status; [`ErrorCode::Healthy`] when the record can be propagated.
    pub error: ErrorCode,

    pub(crate) kernel: Option<Kernel>,
}

/// Mean motion in rev/day of an orbit with semi-major axis `a` (km).
pub fn mean_motion_rev_per_day(mu: f64, semimajor_axis: Kilometer) -> f64 {
    (mu / semimajor_axis.powi(3)).sqrt() * SECONDS_PER_DAY / DPI
}

fn classify(elements: &OrbitalElements, gc: &GravConst, mean_motion: f64) -> ErrorCode {
    let a = elements.semimajor_axis;
    let e = elements.eccentricity;

    if !e.is_finite() || e >= 1.0 || e < -0.001 || a.is_nan() || a < 0.95 * gc.radius_earth_km {
        ErrorCode::MeanElements
    } else if !(mean_motion.is_finite() && mean_motion > 0.0) {
        ErrorCode::NegativeMeanMotion
    } else if a <= EARTH_RADIUS {
        ErrorCode::SubOrbital
    } else {
        ErrorCode::Healthy
    }
}

impl OrbitalRecord {
    /// Build a record, capturing the epoch from `settings.epoch_source`.
    ///
    /// Return
    /// ----------
    /// * The record (possibly carrying a non-zero [`ErrorCode`]), or
    ///   [`OrbitError::ClockUnavailable`] when the wall clock cannot be read.
    pub fn build(
        elements: &OrbitalElements,
        settings: &PropagatorSettings,
    ) -> Result<Self, OrbitError> {
        let epoch = match settings.epoch_source {
            EpochSource::WallClock => epoch_now()?,
            EpochSource::Fixed(epoch) => epoch,
        };
        Ok(Self::build_at(elements, epoch, settings))
    }

    /// Build a record at an explicit epoch. Deterministic.
    pub fn build_at(
        elements: &OrbitalElements,
        epoch: Epoch,
        settings: &PropagatorSettings,
    ) -> Self {
        let gc = settings.gravity_model.constants();
        let element_set_epoch = ElementSetEpoch::from_epoch(&epoch);
        let julian_date = julian_date(&epoch);

        let mean_motion = mean_motion_rev_per_day(gc.mu, elements.semimajor_axis);
        let inclination = elements.inclination * RADEG;
        let right_ascension = elements.right_ascension * RADEG;
        let argument_of_perigee = elements.argument_of_perigee * RADEG;
        let mean_anomaly = elements.mean_anomaly * RADEG;

        let kernel = match classify(elements, &gc, mean_motion) {
            ErrorCode::Healthy => match settings.model {
                PropagationModel::Sgp4 => Sgp4Model::new(
                    &gc,
                    &epoch,
                    elements.eccentricity,
                    inclination,
                    right_ascension,
                    argument_of_perigee,
                    mean_anomaly,
                    rev_per_day_to_rad_per_min(mean_motion),
                )
                .map(|model| Kernel::Sgp4(Box::new(model))),
                PropagationModel::TwoBody => Ok(Kernel::TwoBody(TwoBodyModel::new(
                    &gc,
                    elements.semimajor_axis,
                    elements.eccentricity,
                    inclination,
                    right_ascension,
                    argument_of_perigee,
                    mean_anomaly,
                ))),
            },
            code => Err(code),
        };
        let (kernel, error) = match kernel {
            Ok(kernel) => (Some(kernel), ErrorCode::Healthy),
            Err(code) => (None, code),
        };

        if error.is_healthy() {
            debug!(
                "Built {:?} record at {epoch}: a = {:.3} km, e = {:.6}, n = {:.8} rev/day",
                settings.model, elements.semimajor_axis, elements.eccentricity, mean_motion
            );
        } else {
            warn!("Orbital record rejected at construction: {error}");
        }

        OrbitalRecord {
            epoch,
            element_set_epoch,
            julian_date,
            semimajor_axis: elements.semimajor_axis,
            eccentricity: elements.eccentricity,
            inclination,
            right_ascension,
            argument_of_perigee,
            mean_anomaly,
            mean_motion,
            drag_term: 0.0,
            gravity_model: settings.gravity_model,
            model: settings.model,
            error,
            kernel,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.error.is_healthy()
    }
}

/// Build a record with the default settings and the current wall-clock epoch.
pub fn build_record(elements: &OrbitalElements) -> Result<OrbitalRecord, OrbitError> {
    OrbitalRecord::build(elements, &PropagatorSettings::default())
}

impl fmt::Display for OrbitalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Record ({}, {:?})", self.gravity_model, self.model)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(f, "  epoch        = {}", self.epoch)?;
        writeln!(
            f,
            "  element set  = {:02}/{:.8}",
            self.element_set_epoch.short_year(),
            self.element_set_epoch.days
        )?;
        writeln!(f, "  julian date  = {:.8}", self.julian_date)?;
        writeln!(f, "  mean motion  = {:.8} rev/day", self.mean_motion)?;
        writeln!(f, "  eccentricity = {:.6}", self.eccentricity)?;
        writeln!(f, "  inclination  = {:.6} rad", self.inclination)?;
        writeln!(f, "  status       = {}", self.error)
    }
}
