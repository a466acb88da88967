//! # Orbit error codes
//!
//! Degenerate orbits are reported as small integer codes rather than as Rust errors,
//! so that a record or a state vector can carry its own health status. The same
//! taxonomy is shared by record construction ([`crate::record`]) and by propagation
//! ([`crate::propagator`]).
//!
//! | code | meaning |
//! |------|---------|
//! | 1 | mean elements out of range (`e ≥ 1`, `e < -0.001` or `a < 0.95` Earth radii) |
//! | 2 | mean motion not positive |
//! | 3 | perturbed eccentricity out of `[0, 1]` |
//! | 4 | negative semi-latus rectum |
//! | 5 | epoch elements are sub-orbital |
//! | 6 | satellite has decayed |
//!
//! Any other value, including `0` attached to a non-finite state, maps to the generic
//! `"Error"` label.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Health status of an orbital record or of a propagated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    /// No error (`0`).
    #[default]
    Healthy,
    /// Mean elements out of range (`1`).
    MeanElements,
    /// Mean motion below zero (`2`).
    NegativeMeanMotion,
    /// Perturbed eccentricity outside `[0, 1]` (`3`).
    PerturbedEccentricity,
    /// Semi-latus rectum below zero (`4`).
    NegativeSemiLatusRectum,
    /// Epoch elements below the surface (`5`).
    SubOrbital,
    /// Radius fell below one Earth radius (`6`).
    Decayed,
    /// Unrecognized code, or a non-finite state carrying code `0`.
    Other(i32),
}

const MESSAGES: [&str; 6] = [
    "mean elements, ecc >= 1.0 or ecc < -0.001 or a < 0.95 er",
    "mean motion less than 0.0",
    "pert elements, ecc < 0.0 or ecc > 1.0",
    "semi-latus rectum < 0.0",
    "epoch elements are sub-orbital",
    "satellite has decayed",
];

const GENERIC_MESSAGE: &str = "Error";

impl ErrorCode {
    /// Build an [`ErrorCode`] from its integer representation.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ErrorCode::Healthy,
            1 => ErrorCode::MeanElements,
            2 => ErrorCode::NegativeMeanMotion,
            3 => ErrorCode::PerturbedEccentricity,
            4 => ErrorCode::NegativeSemiLatusRectum,
            5 => ErrorCode::SubOrbital,
            6 => ErrorCode::Decayed,
            other => ErrorCode::Other(other),
        }
    }

    /// Integer representation of the code.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::Healthy => 0,
            ErrorCode::MeanElements => 1,
            ErrorCode::NegativeMeanMotion => 2,
            ErrorCode::PerturbedEccentricity => 3,
            ErrorCode::NegativeSemiLatusRectum => 4,
            ErrorCode::SubOrbital => 5,
            ErrorCode::Decayed => 6,
            ErrorCode::Other(code) => *code,
        }
    }

    /// `true` only for [`ErrorCode::Healthy`].
    pub fn is_healthy(&self) -> bool {
        matches!(self, ErrorCode::Healthy)
    }

    /// Human-readable message shown in place of the orbit when this code is active.
    pub fn message(&self) -> &'static str {
        error_message(self.code())
    }
}

/// Map an integer error code to its fixed message.
///
/// Codes `1..=6` have dedicated messages; everything else (including `0`) yields `"Error"`.
pub fn error_message(code: i32) -> &'static str {
    match code {
        1..=6 => MESSAGES[(code - 1) as usize],
        _ => GENERIC_MESSAGE,
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        ErrorCode::from_code(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}
