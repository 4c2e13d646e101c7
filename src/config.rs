//! Refresh timing configuration

use crate::constants::{DEFAULT_TICKS_PER_DIGIT, MIN_FLICKER_FREE_HZ, NUM_DIGITS};

/// Scheduler timing.
///
/// `ticks_per_digit` is how many time-source ticks each digit stays lit
/// before the bus moves to the next one. The right value depends on the tick
/// frequency; a value that is too large shows up as visible flicker, which is
/// what [`SchedulerConfig::is_flicker_free`] checks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SchedulerConfig {
    pub ticks_per_digit: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            ticks_per_digit: DEFAULT_TICKS_PER_DIGIT,
        }
    }
}

impl SchedulerConfig {
    pub const fn new(ticks_per_digit: u32) -> Self {
        Self { ticks_per_digit }
    }

    pub const fn with_ticks_per_digit(mut self, ticks_per_digit: u32) -> Self {
        self.ticks_per_digit = ticks_per_digit;
        self
    }

    /// Threshold giving a full three-digit cycle of `full_cycle_hz` at a tick
    /// rate of `tick_hz`. Rounds down to whole ticks, never below one.
    pub fn from_tick_rate(tick_hz: u32, full_cycle_hz: u32) -> Self {
        let ticks_per_cycle = u64::from(full_cycle_hz) * NUM_DIGITS as u64;
        let ticks_per_digit = u64::from(tick_hz)
            .checked_div(ticks_per_cycle)
            .unwrap_or(u64::from(u32::MAX))
            .clamp(1, u64::from(u32::MAX));
        Self::new(ticks_per_digit as u32)
    }

    /// Threshold as the scheduler applies it; zero behaves like one.
    pub const fn effective_ticks_per_digit(&self) -> u32 {
        if self.ticks_per_digit == 0 {
            1
        } else {
            self.ticks_per_digit
        }
    }

    /// How often the bus switches to another digit.
    pub fn phase_rate_hz(&self, tick_hz: u32) -> u32 {
        tick_hz / self.effective_ticks_per_digit()
    }

    /// How often each digit is lit, i.e. the rate of the full cycle.
    pub fn full_cycle_hz(&self, tick_hz: u32) -> u32 {
        let ticks_per_cycle = u64::from(self.effective_ticks_per_digit()) * NUM_DIGITS as u64;
        (u64::from(tick_hz) / ticks_per_cycle) as u32
    }

    pub fn is_flicker_free(&self, tick_hz: u32) -> bool {
        self.full_cycle_hz(tick_hz) >= MIN_FLICKER_FREE_HZ
    }
}
