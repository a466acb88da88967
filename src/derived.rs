//! # Derived quantities
//!
//! Closed-form quantities computed from the elements or from a propagated state. All
//! functions are pure and cheap; nothing is cached.
//!
//! The apogee and perigee helpers use the half-axis form `a/2 ± a·e`, which is the value the
//! display has always shown. It is *not* the apsis distance from the Earth's center
//! (`a·(1 ± e)`); see [`apsis_radii`] for that.

use std::fmt;

use nalgebra::Vector3;

use crate::{
    constants::{Kilometer, Second, DPI, EARTH_RADIUS, MU, SECONDS_PER_MINUTE},
    elements::OrbitalElements,
    propagator::StateVector,
    vector_math::magnitude,
};

/// Extra margin of the display window, in km.
const VIEW_MARGIN: Kilometer = 2000.0;

/// Orbital period `2π·sqrt(a³/μ)` in seconds.
pub fn period(semimajor_axis: Kilometer) -> Second {
    DPI * (semimajor_axis.powi(3) / MU).sqrt()
}

/// Distance from the ellipse center to a focus, `a·e`.
pub fn distance_to_foci(semimajor_axis: Kilometer, eccentricity: f64) -> Kilometer {
    semimajor_axis * eccentricity
}

/// Half-axis apogee `a/2 + a·e`.
pub fn apogee(semimajor_axis: Kilometer, eccentricity: f64) -> Kilometer {
    semimajor_axis / 2.0 + distance_to_foci(semimajor_axis, eccentricity)
}

/// Half-axis perigee `a/2 − a·e`. Negative for `e > 0.5`.
pub fn perigee(semimajor_axis: Kilometer, eccentricity: f64) -> Kilometer {
    semimajor_axis / 2.0 - distance_to_foci(semimajor_axis, eccentricity)
}

/// Geocentric apsis radii `(a·(1 − e), a·(1 + e))`.
pub fn apsis_radii(semimajor_axis: Kilometer, eccentricity: f64) -> (Kilometer, Kilometer) {
    (
        semimajor_axis * (1.0 - eccentricity),
        semimajor_axis * (1.0 + eccentricity),
    )
}

/// Height above the mean Earth radius.
pub fn altitude(position: &Vector3<f64>) -> Kilometer {
    magnitude(position) - EARTH_RADIUS
}

pub fn speed(velocity: &Vector3<f64>) -> f64 {
    magnitude(velocity)
}

/// Semi-minor axis `sqrt(a²·(1 − e²))`.
pub fn semiminor_axis(semimajor_axis: Kilometer, eccentricity: f64) -> Kilometer {
    (semimajor_axis.powi(2) * (1.0 - eccentricity.powi(2))).sqrt()
}

/// Side of a square view window that contains the whole orbit: `2·(a·e + a) + 2000` km.
pub fn view_window(semimajor_axis: Kilometer, eccentricity: f64) -> Kilometer {
    2.0 * (distance_to_foci(semimajor_axis, eccentricity) + semimajor_axis) + VIEW_MARGIN
}

/// Everything shown next to one frame of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub altitude: Kilometer,
    pub speed: f64,
    pub apogee: Kilometer,
    pub perigee: Kilometer,
    pub period: Second,
    pub semiminor_axis: Kilometer,
    pub distance_to_foci: Kilometer,
}

impl DerivedQuantities {
    pub fn compute(elements: &OrbitalElements, state: &StateVector) -> Self {
        let a = elements.semimajor_axis;
        let e = elements.eccentricity;
        DerivedQuantities {
            position: state.position,
            velocity: state.velocity,
            altitude: altitude(&state.position),
            speed: speed(&state.velocity),
            apogee: apogee(a, e),
            perigee: perigee(a, e),
            period: period(a),
            semiminor_axis: semiminor_axis(a, e),
            distance_to_foci: distance_to_foci(a, e),
        }
    }
}

impl fmt::Display for DerivedQuantities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.position;
        let v = &self.velocity;
        writeln!(f, "Position: ({:.3}, {:.3}, {:.3}) km", p.x, p.y, p.z)?;
        writeln!(f, "Velocity: ({:.3}, {:.3}, {:.3}) km/s", v.x, v.y, v.z)?;
        writeln!(f, "Altitude: {:.3} km", self.altitude)?;
        writeln!(f, "Speed: {:.3} km/s", self.speed)?;
        writeln!(f, "Apogee: {:.1} km", self.apogee)?;
        writeln!(f, "Perigee: {:.1} km", self.perigee)?;
        write!(
            f,
            "Period: {:.1} min",
            self.period / SECONDS_PER_MINUTE
        )
    }
}
