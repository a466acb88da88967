//! # User-facing orbital elements
//!
//! This module defines [`OrbitalElements`], the element set edited by the user, and the
//! input-boundary helpers that turn loosely typed field values into numbers.
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **degrees** (converted to radians when the record is built)
//!
//! ## Coercion policy
//!
//! Editor fields arrive as text. A value that does not parse as a number (empty string,
//! garbage, `NaN`) silently becomes `0.0` instead of being rejected. This happens here and
//! only here: the propagator never sees anything but `f64`.
//!
//! ## Example
//!
//! ```rust
//! use orbiter::elements::{OrbitalElements, OrbitalParam};
//!
//! let elements = OrbitalElements::default()
//!     .with_raw_param(OrbitalParam::SemimajorAxis, "7000")
//!     .with_raw_param(OrbitalParam::Eccentricity, "not a number");
//!
//! assert_eq!(elements.semimajor_axis, 7000.0);
//! assert_eq!(elements.eccentricity, 0.0);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    constants::{Degree, Kilometer},
    orbit_errors::OrbitError,
};

/// Editor names of the editable parameters, in display order.
pub const PARAM_NAMES: [&str; 6] = [
    "semimajorAxis",
    "inclination",
    "eccentricity",
    "rightAsc",
    "argOfPerigee",
    "meanAnomaly",
];

/// Classical orbital elements as entered by the user.
///
/// Units
/// -----
/// * `semimajor_axis`: km, expected above [`crate::constants::EARTH_RADIUS`].
/// * `eccentricity`: unitless, expected in `[0, 1)`.
/// * `inclination`, `right_ascension`, `argument_of_perigee`, `mean_anomaly`: degrees.
///
/// Notes
/// -----
/// Nothing here is validated. Out-of-range values are reported by the error code of the
/// [`OrbitalRecord`](crate::record::OrbitalRecord) built from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub semimajor_axis: Kilometer,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub eccentricity: f64,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub inclination: Degree,
    #[serde(
        default,
        rename = "rightAsc",
        alias = "rightAscension",
        deserialize_with = "deserialize_lenient"
    )]
    pub right_ascension: Degree,
    #[serde(
        default,
        rename = "argOfPerigee",
        alias = "argumentOfPerigee",
        deserialize_with = "deserialize_lenient"
    )]
    pub argument_of_perigee: Degree,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub mean_anomaly: Degree,
}

impl Default for OrbitalElements {
    /// Initial editor state: a 10 000 km orbit with `e = 0.3`, all angles zero.
    fn default() -> Self {
        OrbitalElements {
            semimajor_axis: 10_000.0,
            eccentricity: 0.3,
            inclination: 0.0,
            right_ascension: 0.0,
            argument_of_perigee: 0.0,
            mean_anomaly: 0.0,
        }
    }
}

/// One editable field of [`OrbitalElements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitalParam {
    SemimajorAxis,
    Eccentricity,
    Inclination,
    RightAscension,
    ArgumentOfPerigee,
    MeanAnomaly,
}

impl OrbitalParam {
    pub const ALL: [OrbitalParam; 6] = [
        OrbitalParam::SemimajorAxis,
        OrbitalParam::Inclination,
        OrbitalParam::Eccentricity,
        OrbitalParam::RightAscension,
        OrbitalParam::ArgumentOfPerigee,
        OrbitalParam::MeanAnomaly,
    ];

    /// Editor name of the field (see [`PARAM_NAMES`]).
    pub fn name(&self) -> &'static str {
        match self {
            OrbitalParam::SemimajorAxis => "semimajorAxis",
            OrbitalParam::Eccentricity => "eccentricity",
            OrbitalParam::Inclination => "inclination",
            OrbitalParam::RightAscension => "rightAsc",
            OrbitalParam::ArgumentOfPerigee => "argOfPerigee",
            OrbitalParam::MeanAnomaly => "meanAnomaly",
        }
    }
}

impl FromStr for OrbitalParam {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "semimajorAxis" => Ok(OrbitalParam::SemimajorAxis),
            "eccentricity" => Ok(OrbitalParam::Eccentricity),
            "inclination" => Ok(OrbitalParam::Inclination),
            "rightAsc" | "rightAscension" => Ok(OrbitalParam::RightAscension),
            "argOfPerigee" | "argumentOfPerigee" => Ok(OrbitalParam::ArgumentOfPerigee),
            "meanAnomaly" => Ok(OrbitalParam::MeanAnomaly),
            _ => Err(OrbitError::UnknownParameter(s.to_string())),
        }
    }
}

impl fmt::Display for OrbitalParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coerce an editor value to a number, falling back to `0.0`.
///
/// Surrounding whitespace is ignored. Empty, unparsable and `NaN` inputs give `0.0`;
/// infinities are kept.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .unwrap_or(0.0)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn deserialize_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawNumber>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawNumber::Number(v)) if !v.is_nan() => v,
        Some(RawNumber::Number(_)) | None => 0.0,
        Some(RawNumber::Text(s)) => coerce_number(&s),
    })
}

impl OrbitalElements {
    /// Value of one field.
    pub fn get(&self, param: OrbitalParam) -> f64 {
        match param {
            OrbitalParam::SemimajorAxis => self.semimajor_axis,
            OrbitalParam::Eccentricity => self.eccentricity,
            OrbitalParam::Inclination => self.inclination,
            OrbitalParam::RightAscension => self.right_ascension,
            OrbitalParam::ArgumentOfPerigee => self.argument_of_perigee,
            OrbitalParam::MeanAnomaly => self.mean_anomaly,
        }
    }

    /// Copy of `self` with one field replaced.
    pub fn with_param(mut self, param: OrbitalParam, value: f64) -> Self {
        let slot = match param {
            OrbitalParam::SemimajorAxis => &mut self.semimajor_axis,
            OrbitalParam::Eccentricity => &mut self.eccentricity,
            OrbitalParam::Inclination => &mut self.inclination,
            OrbitalParam::RightAscension => &mut self.right_ascension,
            OrbitalParam::ArgumentOfPerigee => &mut self.argument_of_perigee,
            OrbitalParam::MeanAnomaly => &mut self.mean_anomaly,
        };
        *slot = value;
        self
    }

    /// Copy of `self` with one field replaced by a coerced editor value.
    pub fn with_raw_param(self, param: OrbitalParam, raw: &str) -> Self {
        self.with_param(param, coerce_number(raw))
    }

    /// Build elements from `(editor name, raw value)` pairs.
    ///
    /// Fields that are not listed are `0.0`. Unknown names are rejected.
    pub fn from_raw_fields<'a, I>(fields: I) -> Result<Self, OrbitError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let zero = OrbitalElements {
            semimajor_axis: 0.0,
            eccentricity: 0.0,
            inclination: 0.0,
            right_ascension: 0.0,
            argument_of_perigee: 0.0,
            mean_anomaly: 0.0,
        };
        fields.into_iter().try_fold(zero, |acc, (name, raw)| {
            let param = name.parse::<OrbitalParam>()?;
            Ok(acc.with_raw_param(param, raw))
        })
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semimajor axis)        = {:.3} km",
            self.semimajor_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.3}°",
            self.inclination
        )?;
        writeln!(
            f,
            "  Ω   (right ascension)       = {:.3}°",
            self.right_ascension
        )?;
        writeln!(
            f,
            "  ω   (argument of perigee)   = {:.3}°",
            self.argument_of_perigee
        )?;
        writeln!(
            f,
            "  M   (mean anomaly)          = {:.3}°",
            self.mean_anomaly
        )
    }
}
