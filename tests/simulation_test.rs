mod common;

use approx::assert_relative_eq;
use orbiter::{
    derived::period,
    elements::{OrbitalElements, OrbitalParam},
    error_code::ErrorCode,
    gravity::GravityModel,
    orbit_errors::OrbitError,
    propagator::record_period,
    settings::{PropagationModel, PropagatorSettings},
    simulation::{Frame, Simulation},
};

use common::{elements, fixed_epoch, settings};

fn state_elapsed(frame: &Frame) -> f64 {
    match frame {
        Frame::State { elapsed, .. } => *elapsed,
        Frame::Error { code, message } => panic!("unexpected error frame [{code:?}] {message}"),
    }
}

#[test]
fn frames_follow_the_clock() {
    let mut sim = Simulation::new(elements(7000.0, 0.0), settings(PropagationModel::Sgp4)).unwrap();

    assert_eq!(state_elapsed(&sim.frame(1_000.0)), 0.0);
    // 16 ms of real time at 1000x
    assert_relative_eq!(state_elapsed(&sim.frame(1_016.0)), 16.0, epsilon = 1e-9);
    assert_relative_eq!(state_elapsed(&sim.frame(2_016.0)), 1016.0, epsilon = 1e-9);
}

#[test]
fn first_period_loops() {
    let a = 7000.0;
    let t = period(a);
    let mut sim = Simulation::new(elements(a, 0.0), settings(PropagationModel::TwoBody)).unwrap();

    let mut timestamp = 0.0;
    sim.frame(timestamp);
    for _ in 0..400 {
        // 50 ms frames, 50 s of simulated time each
        timestamp += 50.0;
        let elapsed = state_elapsed(&sim.frame(timestamp));
        assert!((0.0..=t).contains(&elapsed), "elapsed = {elapsed}");
    }
    // 20 000 s simulated, wrapped three times
    assert_relative_eq!(sim.clock().elapsed(), 20_000.0 - 3.0 * t, epsilon = 1e-6);
}

#[test]
fn frame_derived_quantities() {
    let mut sim = Simulation::new(OrbitalElements::default(), settings(PropagationModel::TwoBody)).unwrap();
    match sim.frame(0.0) {
        Frame::State { state, derived, .. } => {
            assert_relative_eq!(derived.altitude, 7000.0 - 6371.0, max_relative = 1e-6);
            assert_relative_eq!(derived.speed, state.velocity.norm());
            assert_eq!(derived.apogee, 8000.0);
            assert_eq!(derived.perigee, 2000.0);
            assert_relative_eq!(derived.period, period(10_000.0));
        }
        frame => panic!("expected a state frame, got {frame:?}"),
    }
}

#[test]
fn edits_switch_between_error_and_state() {
    let mut sim = Simulation::new(OrbitalElements::default(), settings(PropagationModel::Sgp4)).unwrap();
    sim.frame(0.0);

    sim.update_param(OrbitalParam::SemimajorAxis, "5000").unwrap();
    match sim.frame(16.0) {
        Frame::Error { code, message } => {
            assert_eq!(code, ErrorCode::MeanElements);
            assert_eq!(message, code.message());
        }
        frame => panic!("expected an error frame, got {frame:?}"),
    }

    sim.update_param(OrbitalParam::SemimajorAxis, "6371").unwrap();
    assert!(matches!(
        sim.frame(32.0),
        Frame::Error { code: ErrorCode::SubOrbital, message: "epoch elements are sub-orbital" }
    ));

    sim.update_param(OrbitalParam::SemimajorAxis, "12000").unwrap();
    assert!(matches!(sim.frame(48.0), Frame::State { .. }));
}

#[test]
fn decayed_orbit_shows_only_the_message() {
    let mut sim = Simulation::new(elements(10_000.0, 0.95), settings(PropagationModel::Sgp4)).unwrap();
    assert!(sim.record().is_healthy());
    assert!(matches!(
        sim.frame(0.0),
        Frame::Error { code: ErrorCode::Decayed, message: "satellite has decayed" }
    ));
}

#[test]
fn garbage_input_becomes_zero() {
    let mut sim = Simulation::new(OrbitalElements::default(), settings(PropagationModel::Sgp4)).unwrap();
    sim.update_param(OrbitalParam::Eccentricity, "e=0.2").unwrap();
    assert_eq!(sim.elements().eccentricity, 0.0);
    assert!(sim.record().is_healthy());
}

#[test]
fn free_running_clock() {
    let settings = PropagatorSettings::builder()
        .fixed_epoch(fixed_epoch())
        .first_period_only(false)
        .rate(100.0)
        .build()
        .unwrap();
    let mut sim = Simulation::new(elements(7000.0, 0.0), settings).unwrap();
    sim.frame(0.0);
    let elapsed = state_elapsed(&sim.frame(100_000.0));
    assert_relative_eq!(elapsed, 10_000.0, epsilon = 1e-6);
    assert!(elapsed > period(7000.0));
}

#[test]
fn infinite_timestamp_shows_the_generic_error() {
    let mut sim = Simulation::new(elements(7000.0, 0.0), settings(PropagationModel::Sgp4)).unwrap();
    sim.frame(0.0);
    sim.frame(16.0);
    match sim.frame(f64::INFINITY) {
        Frame::Error { code, message } => {
            assert_eq!(code, ErrorCode::Other(0));
            assert_eq!(message, "Error");
        }
        frame => panic!("expected an error frame, got {frame:?}"),
    }
    assert_relative_eq!(state_elapsed(&sim.frame(32.0)), 32.0, epsilon = 1e-9);
}

#[test]
fn deserialized_negative_rate_is_rejected() {
    let json = r#"{"rate": -5.0, "first_period_only": false}"#;
    assert!(serde_json::from_str::<PropagatorSettings>(json).is_err());

    let mut settings = settings(PropagationModel::TwoBody);
    settings.rate = -5.0;
    assert!(matches!(
        Simulation::new(elements(7000.0, 0.0), settings),
        Err(OrbitError::InvalidSetting(_))
    ));
}

#[test]
fn wrap_period_follows_gravity_model() {
    let settings = PropagatorSettings::builder()
        .gravity_model(GravityModel::Wgs72)
        .model(PropagationModel::TwoBody)
        .fixed_epoch(fixed_epoch())
        .build()
        .unwrap();
    let mut sim = Simulation::new(elements(7000.0, 0.0), settings).unwrap();
    let t = record_period(&sim.record());
    assert_eq!(sim.period(), t);

    sim.frame(0.0);
    // At 1000x one real millisecond is one simulated second
    let elapsed = state_elapsed(&sim.frame(t + 100.0));
    assert_relative_eq!(elapsed, 100.0, epsilon = 1e-6);
}
