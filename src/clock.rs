//! # Simulation clock
//!
//! Converts the real-time frame timestamps of a render loop into simulated time.
//!
//! Each call to [`SimulationClock::tick`] advances the accumulated simulated time `t_sum`
//! by `(now − last) · rate`. With `first_period_only` set, the clock loops over the first
//! orbital period: once `t_sum` passes the period `T`, it restarts from the overlap
//! `t_sum − T` (reduced modulo `T` after long pauses), and the reported step is negative.
//!
//! The very first tick only records its timestamp and yields a zero step. A non-finite
//! timestamp leaves the clock untouched and yields a `NaN` step.

use crate::constants::Second;

/// One clock advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockStep {
    /// Change of simulated time since the previous tick (s). Negative after a wrap.
    pub delta: Second,
    /// Accumulated simulated time to propagate to (s).
    pub elapsed: Second,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    last_tick: Option<Second>,
    rate: f64,
    t_sum: Second,
    first_period_only: bool,
}

impl SimulationClock {
    pub fn new(rate: f64, first_period_only: bool) -> Self {
        SimulationClock {
            last_tick: None,
            rate,
            t_sum: 0.0,
            first_period_only,
        }
    }

    /// Advance the clock.
    ///
    /// Arguments
    /// -----------------
    /// * `timestamp_ms`: frame timestamp in milliseconds, monotonic.
    /// * `period`: orbital period of the current orbit (s), used for the wrap.
    pub fn tick(&mut self, timestamp_ms: f64, period: Second) -> ClockStep {
        let now = timestamp_ms / 1000.0;
        if !now.is_finite() {
            return ClockStep {
                delta: f64::NAN,
                elapsed: f64::NAN,
            };
        }
        let delta = match self.last_tick.replace(now) {
            Some(last) => (now - last) * self.rate,
            None => 0.0,
        };

        let previous = self.t_sum;
        self.t_sum += delta;

        if self.first_period_only && period > 0.0 && self.t_sum > period {
            self.t_sum = (self.t_sum - period) % period;
            return ClockStep {
                delta: self.t_sum - previous,
                elapsed: self.t_sum,
            };
        }

        ClockStep {
            delta,
            elapsed: self.t_sum,
        }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn elapsed(&self) -> Second {
        self.t_sum
    }

    /// Back to `t_sum = 0`; the next tick yields a zero step.
    pub fn reset(&mut self) {
        self.last_tick = None;
        self.t_sum = 0.0;
    }
}
