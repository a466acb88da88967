//! # Frame-driven simulation
//!
//! [`Simulation`] ties the pieces together for an interactive front end: it owns the
//! editable [`OrbitalElements`], the active [`OrbitalRecord`], a [`SimulationClock`] and the
//! [`PropagatorSettings`]. Every element edit rebuilds the record wholesale; each rendered
//! frame advances the clock and propagates the record at the accumulated time.
//!
//! The record is shared as an [`Arc`] snapshot, so a frame computed from an older snapshot
//! always sees a consistent record even if an edit has replaced it since.
//!
//! ```rust,no_run
//! use orbiter::{
//!     elements::{OrbitalElements, OrbitalParam},
//!     settings::PropagatorSettings,
//!     simulation::{Frame, Simulation},
//! };
//!
//! let mut sim = Simulation::new(OrbitalElements::default(), PropagatorSettings::default())?;
//! sim.update_param(OrbitalParam::Inclination, "51.6")?;
//!
//! match sim.frame(16.0) {
//!     Frame::State { derived, .. } => println!("{derived}"),
//!     Frame::Error { message, .. } => eprintln!("{message}"),
//! }
//! # Ok::<(), orbiter::orbit_errors::OrbitError>(())
//! ```

use std::sync::Arc;

use log::debug;

use crate::{
    clock::SimulationClock,
    constants::{Kilometer, Second},
    derived::{self, DerivedQuantities},
    elements::{OrbitalElements, OrbitalParam},
    error_code::ErrorCode,
    orbit_errors::OrbitError,
    propagator::{propagate, record_period, StateVector},
    record::OrbitalRecord,
    settings::PropagatorSettings,
};

/// Output of one rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    State {
        elapsed: Second,
        state: StateVector,
        derived: DerivedQuantities,
    },
    /// Only the message is shown while an error is active.
    Error {
        code: ErrorCode,
        message: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Simulation {
    elements: OrbitalElements,
    record: Arc<OrbitalRecord>,
    clock: SimulationClock,
    settings: PropagatorSettings,
}

impl Simulation {
    /// Build the simulation.
    ///
    /// Return
    /// ----------
    /// * [`OrbitError::InvalidSetting`] when `settings` fail the builder's validation (for
    ///   instance settings deserialized with a non-positive rate), or
    ///   [`OrbitError::ClockUnavailable`].
    pub fn new(
        elements: OrbitalElements,
        settings: PropagatorSettings,
    ) -> Result<Self, OrbitError> {
        settings.validate()?;
        let record = Arc::new(OrbitalRecord::build(&elements, &settings)?);
        let clock = SimulationClock::new(settings.rate, settings.first_period_only);
        Ok(Simulation {
            elements,
            record,
            clock,
            settings,
        })
    }

    /// Replace one element from its raw editor text and rebuild the record.
    ///
    /// The text is coerced: unparsable input becomes `0`.
    pub fn update_param(&mut self, param: OrbitalParam, raw: &str) -> Result<(), OrbitError> {
        debug!("Editing {param} = {raw:?}");
        self.set_elements(self.elements.with_raw_param(param, raw))
    }

    /// Replace the whole element set and rebuild the record.
    pub fn set_elements(&mut self, elements: OrbitalElements) -> Result<(), OrbitError> {
        let record = OrbitalRecord::build(&elements, &self.settings)?;
        self.elements = elements;
        self.record = Arc::new(record);
        Ok(())
    }

    /// Advance the clock to `timestamp_ms` and propagate.
    pub fn frame(&mut self, timestamp_ms: f64) -> Frame {
        let step = self.clock.tick(timestamp_ms, self.period());
        let record = Arc::clone(&self.record);
        let state = propagate(&record, step.elapsed);

        match state.status() {
            ErrorCode::Healthy => Frame::State {
                elapsed: step.elapsed,
                state,
                derived: DerivedQuantities::compute(&self.elements, &state),
            },
            code => Frame::Error {
                code,
                message: code.message(),
            },
        }
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Snapshot of the active record.
    pub fn record(&self) -> Arc<OrbitalRecord> {
        Arc::clone(&self.record)
    }

    pub fn settings(&self) -> &PropagatorSettings {
        &self.settings
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn set_rate(&mut self, rate: f64) -> Result<(), OrbitError> {
        self.settings = PropagatorSettings::builder()
            .gravity_model(self.settings.gravity_model)
            .model(self.settings.model)
            .epoch_source(self.settings.epoch_source)
            .first_period_only(self.settings.first_period_only)
            .rate(rate)
            .build()?;
        self.clock.set_rate(rate);
        Ok(())
    }

    /// Period of the active record (s), under its gravity model.
    ///
    /// Falls back to the reference period of the elements when the record is rejected.
    pub fn period(&self) -> Second {
        if self.record.is_healthy() {
            record_period(&self.record)
        } else {
            derived::period(self.elements.semimajor_axis)
        }
    }

    /// Display window of the current elements (km).
    pub fn view_window(&self) -> Kilometer {
        derived::view_window(self.elements.semimajor_axis, self.elements.eccentricity)
    }
}

#[cfg(test)]
mod simulation_test {
    use super::*;
    use crate::settings::PropagationModel;
    use hifitime::Epoch;

    fn settings() -> PropagatorSettings {
        PropagatorSettings::builder()
            .fixed_epoch(Epoch::from_gregorian_utc_hms(2023, 7, 4, 12, 0, 0))
            .model(PropagationModel::TwoBody)
            .build()
            .unwrap()
    }

    #[test]
    fn test_edit_rebuilds_record() {
        let mut sim = Simulation::new(OrbitalElements::default(), settings()).unwrap();
        let before = sim.record();
        sim.update_param(OrbitalParam::Inclination, " 45 ").unwrap();
        let after = sim.record();
        assert_eq!(sim.elements().inclination, 45.0);
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.inclination, 0.0);
    }

    #[test]
    fn test_error_frame() {
        let mut sim = Simulation::new(OrbitalElements::default(), settings()).unwrap();
        sim.update_param(OrbitalParam::Eccentricity, "1.2").unwrap();
        match sim.frame(0.0) {
            Frame::Error { code, message } => {
                assert_eq!(code, ErrorCode::MeanElements);
                assert_eq!(
                    message,
                    "mean elements, ecc >= 1.0 or ecc < -0.001 or a < 0.95 er"
                );
            }
            frame => panic!("expected an error frame, got {frame:?}"),
        }
    }

    #[test]
    fn test_set_rate_validates() {
        let mut sim = Simulation::new(OrbitalElements::default(), settings()).unwrap();
        assert!(sim.set_rate(0.0).is_err());
        sim.set_rate(10.0).unwrap();
        assert_eq!(sim.clock().rate(), 10.0);
        assert_eq!(sim.settings().rate, 10.0);
    }

    #[test]
    fn test_rejects_unvalidated_settings() {
        let mut settings = settings();
        for rate in [-5.0, 0.0, f64::NAN] {
            settings.rate = rate;
            assert!(matches!(
                Simulation::new(OrbitalElements::default(), settings.clone()),
                Err(OrbitError::InvalidSetting(_))
            ));
        }
    }

    #[test]
    fn test_period_follows_gravity_model() {
        let settings = PropagatorSettings::builder()
            .fixed_epoch(Epoch::from_gregorian_utc_hms(2023, 7, 4, 12, 0, 0))
            .gravity_model(crate::gravity::GravityModel::Wgs72)
            .build()
            .unwrap();
        let sim = Simulation::new(OrbitalElements::default(), settings).unwrap();
        let mu = crate::gravity::GravityModel::Wgs72.constants().mu;
        let expected = crate::constants::DPI * (10_000.0_f64.powi(3) / mu).sqrt();
        approx::assert_relative_eq!(sim.period(), expected, max_relative = 1e-12);
        assert_eq!(sim.period(), record_period(&sim.record()));
    }

    #[test]
    fn test_infinite_timestamp_gives_error_frame() {
        let mut sim = Simulation::new(OrbitalElements::default(), settings()).unwrap();
        sim.frame(0.0);
        assert!(matches!(
            sim.frame(f64::INFINITY),
            Frame::Error { code: ErrorCode::Other(0), message: "Error" }
        ));
        assert!(matches!(sim.frame(16.0), Frame::State { .. }));
    }

    #[test]
    fn test_view_window() {
        let sim = Simulation::new(OrbitalElements::default(), settings()).unwrap();
        assert_eq!(sim.view_window(), 28_000.0);
    }
}
