//! # Propagator configuration
//!
//! [`PropagatorSettings`] gathers the knobs shared by record construction, propagation and
//! the frame driver. Use [`PropagatorSettings::default`] for the reference behaviour, or the
//! fluent [`PropagatorSettingsBuilder`] for anything else:
//!
//! ```rust
//! use orbiter::settings::{PropagationModel, PropagatorSettings};
//! use orbiter::gravity::GravityModel;
//!
//! let settings = PropagatorSettings::builder()
//!     .gravity_model(GravityModel::Wgs72)
//!     .model(PropagationModel::TwoBody)
//!     .rate(60.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.rate, 60.0);
//! ```

use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use crate::{gravity::GravityModel, orbit_errors::OrbitError};

/// Analytical model used to advance a record through time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationModel {
    /// SGP4, with the deep-space terms past a 225 min period. No drag.
    #[default]
    Sgp4,
    /// Unperturbed Kepler motion.
    TwoBody,
}

/// Where the record epoch comes from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EpochSource {
    /// Read the wall clock each time a record is built.
    #[default]
    WallClock,
    /// Always use this instant, making records reproducible.
    Fixed(Epoch),
}

/// Configuration of the propagation engine and of its frame driver.
///
/// Fields
/// -----------------
/// * `gravity_model` – geopotential constants (default WGS-84).
/// * `model` – propagation model (default SGP4).
/// * `epoch_source` – epoch captured by record construction (default wall clock).
/// * `rate` – simulated seconds per real second (default 1000).
/// * `first_period_only` – loop the first orbital period instead of advancing forever
///   (default `true`).
///
/// The epoch source is not serialized; deserialized settings read the wall clock.
/// Deserialization goes through [`PropagatorSettingsBuilder::build`], so it rejects the same
/// values as the builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerializedSettings")]
pub struct PropagatorSettings {
    pub gravity_model: GravityModel,
    pub model: PropagationModel,
    #[serde(skip)]
    pub epoch_source: EpochSource,
    pub rate: f64,
    pub first_period_only: bool,
}

impl PropagatorSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> PropagatorSettingsBuilder {
        PropagatorSettingsBuilder::new()
    }

    /// Check the settings.
    ///
    /// The rate must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let rate = self.rate;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(OrbitError::InvalidSetting(format!(
                "rate must be finite and > 0 (got {rate})"
            )));
        }
        Ok(())
    }
}

/// Serialized form of [`PropagatorSettings`]; missing fields take their default.
#[derive(Deserialize)]
#[serde(default)]
struct SerializedSettings {
    gravity_model: GravityModel,
    model: PropagationModel,
    rate: f64,
    first_period_only: bool,
}

impl Default for SerializedSettings {
    fn default() -> Self {
        let settings = PropagatorSettings::default();
        SerializedSettings {
            gravity_model: settings.gravity_model,
            model: settings.model,
            rate: settings.rate,
            first_period_only: settings.first_period_only,
        }
    }
}

impl TryFrom<SerializedSettings> for PropagatorSettings {
    type Error = OrbitError;

    fn try_from(raw: SerializedSettings) -> Result<Self, Self::Error> {
        PropagatorSettings::builder()
            .gravity_model(raw.gravity_model)
            .model(raw.model)
            .rate(raw.rate)
            .first_period_only(raw.first_period_only)
            .build()
    }
}

impl Default for PropagatorSettings {
    fn default() -> Self {
        PropagatorSettings {
            gravity_model: GravityModel::Wgs84,
            model: PropagationModel::Sgp4,
            epoch_source: EpochSource::WallClock,
            rate: 1000.0,
            first_period_only: true,
        }
    }
}

/// Builder for [`PropagatorSettings`], with validation.
#[derive(Debug, Clone)]
pub struct PropagatorSettingsBuilder {
    settings: PropagatorSettings,
}

impl Default for PropagatorSettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PropagatorSettingsBuilder {
    pub fn new() -> Self {
        Self {
            settings: PropagatorSettings::default(),
        }
    }

    pub fn gravity_model(mut self, v: GravityModel) -> Self {
        self.settings.gravity_model = v;
        self
    }

    pub fn model(mut self, v: PropagationModel) -> Self {
        self.settings.model = v;
        self
    }

    pub fn epoch_source(mut self, v: EpochSource) -> Self {
        self.settings.epoch_source = v;
        self
    }

    /// Shorthand for `epoch_source(EpochSource::Fixed(epoch))`.
    pub fn fixed_epoch(mut self, epoch: Epoch) -> Self {
        self.settings.epoch_source = EpochSource::Fixed(epoch);
        self
    }

    pub fn rate(mut self, v: f64) -> Self {
        self.settings.rate = v;
        self
    }

    pub fn first_period_only(mut self, v: bool) -> Self {
        self.settings.first_period_only = v;
        self
    }

    /// Validate and return the settings (see [`PropagatorSettings::validate`]).
    pub fn build(self) -> Result<PropagatorSettings, OrbitError> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}

impl fmt::Display for PropagatorSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let epoch = match &self.epoch_source {
            EpochSource::WallClock => "wall clock".to_string(),
            EpochSource::Fixed(epoch) => epoch.to_string(),
        };
        writeln!(f, "Propagator Settings")?;
        writeln!(f, "-------------------")?;
        writeln!(f, "  gravity_model     = {}", self.gravity_model)?;
        writeln!(f, "  model             = {:?}", self.model)?;
        writeln!(f, "  epoch_source      = {epoch}")?;
        writeln!(f, "  rate              = {}×", self.rate)?;
        writeln!(f, "  first_period_only = {}", self.first_period_only)
    }
}

#[cfg(test)]
mod settings_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PropagatorSettings::default();
        assert_eq!(settings.gravity_model, GravityModel::Wgs84);
        assert_eq!(settings.model, PropagationModel::Sgp4);
        assert_eq!(settings.epoch_source, EpochSource::WallClock);
        assert_eq!(settings.rate, 1000.0);
        assert!(settings.first_period_only);
        assert_eq!(PropagatorSettings::builder().build().unwrap(), settings);
    }

    #[test]
    fn test_builder_overrides() {
        let epoch = Epoch::from_gregorian_utc_hms(2024, 6, 1, 0, 0, 0);
        let settings = PropagatorSettings::builder()
            .gravity_model(GravityModel::Wgs72Old)
            .model(PropagationModel::TwoBody)
            .fixed_epoch(epoch)
            .rate(1.0)
            .first_period_only(false)
            .build()
            .unwrap();

        assert_eq!(settings.gravity_model, GravityModel::Wgs72Old);
        assert_eq!(settings.model, PropagationModel::TwoBody);
        assert_eq!(settings.epoch_source, EpochSource::Fixed(epoch));
        assert_eq!(settings.rate, 1.0);
        assert!(!settings.first_period_only);
    }

    #[test]
    fn test_invalid_rate() {
        for rate in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = PropagatorSettings::builder().rate(rate).build();
            assert!(matches!(err, Err(OrbitError::InvalidSetting(_))));
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let settings: PropagatorSettings =
            serde_json::from_str(r#"{"gravity_model": "wgs72", "model": "two_body"}"#).unwrap();
        assert_eq!(settings.gravity_model, GravityModel::Wgs72);
        assert_eq!(settings.model, PropagationModel::TwoBody);
        assert_eq!(settings.rate, 1000.0);
        assert_eq!(settings.epoch_source, EpochSource::WallClock);
    }

    #[test]
    fn test_deserialize_rejects_bad_rate() {
        for json in [
            r#"{"rate": -5.0, "first_period_only": false}"#,
            r#"{"rate": 0.0}"#,
        ] {
            let err = serde_json::from_str::<PropagatorSettings>(json).unwrap_err();
            assert!(err.to_string().contains("rate must be finite and > 0"), "{err}");
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let settings = PropagatorSettings::builder()
            .gravity_model(GravityModel::Wgs72Old)
            .rate(25.0)
            .first_period_only(false)
            .build()
            .unwrap();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("epoch_source"));
        let back: PropagatorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_validate() {
        let mut settings = PropagatorSettings::default();
        assert!(settings.validate().is_ok());
        settings.rate = -1.0;
        assert!(matches!(settings.validate(), Err(OrbitError::InvalidSetting(_))));
    }

    #[test]
    fn test_display() {
        let text = PropagatorSettings::default().to_string();
        assert!(text.contains("gravity_model     = wgs84"));
        assert!(text.contains("epoch_source      = wall clock"));
    }
}
