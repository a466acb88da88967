//! # Orbiter
//!
//! Analytical Earth-orbit propagation from classical orbital elements.
//!
//! - [`elements`]: user-facing element set and input coercion
//! - [`record`]: propagator-ready record built from the elements
//! - [`propagator`]: state vectors at a time offset (SGP4/SDP4 or two-body)
//! - [`derived`]: period, apsides, altitude, speed
//! - [`error_code`]: orbit error codes and their messages
//! - [`clock`] and [`simulation`]: frame-driven driver with the first-period loop
//!
//! ```rust
//! use hifitime::Epoch;
//! use orbiter::{elements::OrbitalElements, propagate, record::OrbitalRecord, settings::PropagatorSettings};
//!
//! let elements = OrbitalElements { semimajor_axis: 7000.0, eccentricity: 0.01, ..Default::default() };
//! let epoch = Epoch::from_gregorian_utc_hms(2024, 1, 1, 0, 0, 0);
//! let record = OrbitalRecord::build_at(&elements, epoch, &PropagatorSettings::default());
//!
//! let state = propagate(&record, 600.0);
//! assert!(state.is_valid());
//! ```

pub mod clock;
pub mod constants;
pub mod derived;
pub mod elements;
pub mod error_code;
pub mod gravity;
pub mod orbit_errors;
pub mod propagator;
pub mod record;
pub mod settings;
pub mod sgp4_model;
pub mod simulation;
pub mod time;
pub mod two_body;
pub mod vector_math;

pub use propagator::propagate;
pub use record::build_record;
