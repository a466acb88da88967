#![allow(dead_code)]

use approx::assert_relative_eq;
use hifitime::Epoch;
use nalgebra::Vector3;
use orbiter::{
    elements::OrbitalElements,
    record::OrbitalRecord,
    settings::{PropagationModel, PropagatorSettings},
};

pub fn fixed_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2024, 5, 17, 8, 45, 0)
}

pub fn settings(model: PropagationModel) -> PropagatorSettings {
    PropagatorSettings::builder()
        .model(model)
        .fixed_epoch(fixed_epoch())
        .build()
        .unwrap()
}

pub fn elements(a: f64, e: f64) -> OrbitalElements {
    OrbitalElements {
        semimajor_axis: a,
        eccentricity: e,
        inclination: 0.0,
        right_ascension: 0.0,
        argument_of_perigee: 0.0,
        mean_anomaly: 0.0,
    }
}

pub fn build(elements: &OrbitalElements, model: PropagationModel) -> OrbitalRecord {
    OrbitalRecord::build_at(elements, fixed_epoch(), &settings(model))
}

pub fn assert_vector_close(actual: &Vector3<f64>, expected: &Vector3<f64>, max_relative: f64) {
    assert_relative_eq!(actual.x, expected.x, max_relative = max_relative, epsilon = 1e-6);
    assert_relative_eq!(actual.y, expected.y, max_relative = max_relative, epsilon = 1e-6);
    assert_relative_eq!(actual.z, expected.z, max_relative = max_relative, epsilon = 1e-6);
}
