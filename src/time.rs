//! # Epoch handling
//!
//! Absolute instants are [`hifitime::Epoch`] values in the UTC scale. The record keeps its
//! epoch as is, together with two views of it: the element-set pair (year and fractional
//! day of year) shown to the user, and the UTC Julian date. Propagation times are the
//! minutes between the record epoch and the target instant.

use hifitime::{Epoch, Unit};

use crate::{
    constants::{Minute, Second, DAYS_PER_JULIAN_YEAR, JD_J2000},
    orbit_errors::OrbitError,
};

/// Current wall-clock instant (UTC).
pub fn epoch_now() -> Result<Epoch, OrbitError> {
    Epoch::now().map_err(|e| OrbitError::ClockUnavailable(e.to_string()))
}

/// Element-set epoch: year plus fractional day of year, January 1st at 00:00 being `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSetEpoch {
    pub year: i32,
    pub days: f64,
}

impl ElementSetEpoch {
    pub fn from_epoch(epoch: &Epoch) -> Self {
        let (year, days) = epoch.year_days_of_year();
        ElementSetEpoch { year, days }
    }

    /// Two-digit year, as printed in an element set.
    pub fn short_year(&self) -> i32 {
        self.year.rem_euclid(100)
    }
}

/// UTC Julian date of an epoch, in days.
pub fn julian_date(epoch: &Epoch) -> f64 {
    epoch.to_jde_utc_days()
}

/// Julian years elapsed since J2000 (2000-01-01 12:00 UTC), the epoch unit of SGP4.
pub fn julian_years_since_j2000(epoch: &Epoch) -> f64 {
    (julian_date(epoch) - JD_J2000) / DAYS_PER_JULIAN_YEAR
}

/// Instant `seconds` after (or before, when negative) `epoch`.
///
/// `None` when `seconds` is not finite.
pub fn offset_epoch(epoch: &Epoch, seconds: Second) -> Option<Epoch> {
    seconds
        .is_finite()
        .then(|| *epoch + Unit::Second * seconds)
}

/// Minutes elapsed from `since` to `instant`.
pub fn minutes_between(since: &Epoch, instant: &Epoch) -> Minute {
    (*instant - *since).to_unit(Unit::Minute)
}
