//! # Propagation
//!
//! [`propagate`] evaluates an [`OrbitalRecord`] at a number of seconds after its epoch and
//! returns a [`StateVector`]: position (km), velocity (km/s) and an [`ErrorCode`].
//!
//! ## Time handling
//!
//! The target instant is `epoch + elapsed`, and the models receive the minutes between the
//! record epoch and that instant. Negative `elapsed` values go through the same path. A
//! non-finite `elapsed` has no instant and yields the generic error (code `0` with `NaN`
//! vectors).
//!
//! ## Validity
//!
//! A state is valid when its code is `0` **and** every component is finite. A non-finite
//! state that carries code `0` is reported as the generic error by [`StateVector::status`].
//!
//! ## See also
//! * [`orbit_track`] – samples one full period, e.g. for drawing the orbit.

use log::warn;
use nalgebra::Vector3;

use crate::{
    constants::{Second, SECONDS_PER_DAY},
    error_code::ErrorCode,
    orbit_errors::OrbitError,
    record::{Kernel, OrbitalRecord},
    time::{minutes_between, offset_epoch},
    vector_math::is_finite_vector,
};

/// Inertial state of the satellite at `elapsed` seconds after the record epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    /// km
    pub position: Vector3<f64>,
    /// km/s
    pub velocity: Vector3<f64>,
    pub error: ErrorCode,
    pub elapsed: Second,
}

impl StateVector {
    fn invalid(code: ErrorCode, elapsed: Second) -> Self {
        StateVector {
            position: Vector3::repeat(f64::NAN),
            velocity: Vector3::repeat(f64::NAN),
            error: code,
            elapsed,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_healthy()
            && is_finite_vector(&self.position)
            && is_finite_vector(&self.velocity)
    }

    /// Effective status: the carried code, or the generic error for non-finite output
    /// tagged as healthy.
    pub fn status(&self) -> ErrorCode {
        if self.error.is_healthy() && !self.is_valid() {
            ErrorCode::Other(0)
        } else {
            self.error
        }
    }

    /// `Ok(self)` when valid, otherwise [`OrbitError::Rejected`] with [`Self::status`].
    pub fn checked(self) -> Result<Self, OrbitError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(OrbitError::Rejected(self.status()))
        }
    }
}

/// Propagate a record to `elapsed` seconds after its epoch.
///
/// Arguments
/// -----------------
/// * `record`: the orbit to evaluate.
/// * `elapsed`: seconds since the record epoch, may be negative.
///
/// Return
/// ----------
/// * The state vector. A record rejected at construction yields `NaN` vectors tagged with its
///   construction code, never zeros.
pub fn propagate(record: &OrbitalRecord, elapsed: Second) -> StateVector {
    let kernel = match (&record.kernel, record.error) {
        (Some(kernel), ErrorCode::Healthy) => kernel,
        (_, code) => return StateVector::invalid(code, elapsed),
    };

    let Some(instant) = offset_epoch(&record.epoch, elapsed) else {
        warn!("Cannot propagate to a non-finite time ({elapsed} s)");
        return StateVector::invalid(ErrorCode::Other(0), elapsed);
    };
    let tsince = minutes_between(&record.epoch, &instant);

    let (position, velocity, error) = match kernel {
        Kernel::Sgp4(sgp4) => sgp4.propagate(tsince),
        Kernel::TwoBody(two_body) => match two_body.propagate(tsince) {
            Ok(state) => state,
            Err(err) => {
                warn!("Kepler solver failed at t = {elapsed} s: {err}");
                return StateVector::invalid(ErrorCode::Healthy, elapsed);
            }
        },
    };

    if !error.is_healthy() {
        warn!("Propagation at t = {elapsed} s reported {error}");
    }

    StateVector {
        position,
        velocity,
        error,
        elapsed,
    }
}

/// Orbital period of a record in seconds, from its mean motion.
pub fn record_period(record: &OrbitalRecord) -> Second {
    SECONDS_PER_DAY / record.mean_motion
}

/// Sample one orbital period of `record` with `samples` equal steps.
///
/// Return
/// ----------
/// * `samples + 1` states from `t = 0` to `t = T` inclusive. Empty when the record is
///   rejected or `samples == 0`.
pub fn orbit_track(record: &OrbitalRecord, samples: usize) -> Vec<StateVector> {
    if !record.is_healthy() || samples == 0 {
        return Vec::new();
    }
    let step = record_period(record) / samples as f64;
    (0..=samples)
        .map(|k| propagate(record, k as f64 * step))
        .collect()
}
