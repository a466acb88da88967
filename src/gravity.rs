//! # Gravity models of the reference body
//!
//! The propagation models are parameterized by an [`sgp4::Geopotential`]. Three historical
//! sets are available; WGS-84 is the default and matches [`crate::constants::MU`].
//!
//! | model | μ (km³/s²) | equatorial radius (km) |
//! |-------|------------|------------------------|
//! | `wgs72old` | 398600.79964 | 6378.135 |
//! | `wgs72` | 398600.8 | 6378.135 |
//! | `wgs84` | 398600.5 | 6378.137 |
//!
//! The gravitational parameter is recovered from the geopotential (`μ = (kₑ/60)² aₑ³`), so
//! the two-body model and the construction checks see the same Earth as SGP4.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use sgp4::Geopotential;

use crate::{constants::SECONDS_PER_MINUTE, orbit_errors::OrbitError};

/// Original WGS-72 set, with `kₑ` truncated as in the historical element-set software.
const WGS72_OLD: Geopotential = Geopotential {
    ae: 6378.135,
    ke: 0.074_366_916_1,
    j2: 0.001_082_616,
    j3: -0.000_002_538_81,
    j4: -0.000_001_655_97,
};

/// Named set of Earth gravity constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GravityModel {
    Wgs72Old,
    Wgs72,
    #[default]
    Wgs84,
}

/// Constants resolved from a [`GravityModel`].
///
/// Units
/// -----
/// * `mu`: km³/s²
/// * `radius_earth_km`: equatorial radius, km
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravConst {
    pub mu: f64,
    pub radius_earth_km: f64,
    pub geopotential: Geopotential,
}

impl From<Geopotential> for GravConst {
    fn from(geopotential: Geopotential) -> Self {
        let ke_per_sec = geopotential.ke / SECONDS_PER_MINUTE;
        GravConst {
            mu: ke_per_sec * ke_per_sec * geopotential.ae.powi(3),
            radius_earth_km: geopotential.ae,
            geopotential,
        }
    }
}

impl GravityModel {
    /// Geopotential handed to the SGP4 propagator.
    pub fn geopotential(&self) -> Geopotential {
        match self {
            GravityModel::Wgs72Old => WGS72_OLD,
            GravityModel::Wgs72 => sgp4::WGS72,
            GravityModel::Wgs84 => sgp4::WGS84,
        }
    }

    /// Resolve the constants of this model.
    pub fn constants(&self) -> GravConst {
        GravConst::from(self.geopotential())
    }

    fn name(&self) -> &'static str {
        match self {
            GravityModel::Wgs72Old => "wgs72old",
            GravityModel::Wgs72 => "wgs72",
            GravityModel::Wgs84 => "wgs84",
        }
    }
}

impl FromStr for GravityModel {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs72old" => Ok(GravityModel::Wgs72Old),
            "wgs72" => Ok(GravityModel::Wgs72),
            "wgs84" => Ok(GravityModel::Wgs84),
            _ => Err(OrbitError::UnknownGravityModel(s.to_string())),
        }
    }
}

impl fmt::Display for GravityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
