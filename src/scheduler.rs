//! Time-division multiplexing of the three digits over one segment bus.
//!
//! The scheduler is split in two halves:
//!
//! - transition logic ([`DisplayScheduler::on_tick`], [`DisplayScheduler::on_reset`])
//!   that only mutates [`ScheduleState`];
//! - output logic ([`frame_for`]) that is a pure function of a state and the
//!   latched [`DigitTriple`].
//!
//! Neither half allocates or fails.

use crate::bcd::DigitTriple;
use crate::config::SchedulerConfig;
use crate::constants::{phase, select};
use crate::decoder::{SegmentDecoder, SegmentPattern};

/// Digit position currently driven on the bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Units,
    Tens,
    Hundreds,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Units, Phase::Tens, Phase::Hundreds];

    /// Decodes a phase register; the unused encoding yields `None`.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & phase::MASK {
            phase::UNITS => Some(Phase::Units),
            phase::TENS => Some(Phase::Tens),
            phase::HUNDREDS => Some(Phase::Hundreds),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Phase::Units => phase::UNITS,
            Phase::Tens => phase::TENS,
            Phase::Hundreds => phase::HUNDREDS,
        }
    }

    pub const fn next(self) -> Self {
        match self {
            Phase::Units => Phase::Tens,
            Phase::Tens => Phase::Hundreds,
            Phase::Hundreds => Phase::Units,
        }
    }

    pub const fn select(self) -> DigitSelect {
        match self {
            Phase::Units => DigitSelect(select::UNITS),
            Phase::Tens => DigitSelect(select::TENS),
            Phase::Hundreds => DigitSelect(select::HUNDREDS),
        }
    }
}

/// Logical digit-select lines, set bit = position asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitSelect(u8);

impl DigitSelect {
    pub const NONE: Self = Self(select::NONE);
    pub const ALL: Self = Self(select::ALL);

    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn is_asserted(&self, position: Phase) -> bool {
        self.0 & position.select().0 != 0
    }

    pub const fn asserted_count(&self) -> u32 {
        (self.0 & select::ALL).count_ones()
    }
}

/// Tick counter plus the 2-bit phase register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScheduleState {
    tick_counter: u32,
    phase: u8,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl ScheduleState {
    /// State right after reset.
    pub const INITIAL: Self = Self {
        tick_counter: 0,
        phase: phase::UNITS,
    };

    /// Loads raw register contents. `phase_bits` is truncated to two bits, so
    /// `constants::phase::UNDEFINED` is representable.
    pub const fn from_raw(tick_counter: u32, phase_bits: u8) -> Self {
        Self {
            tick_counter,
            phase: phase_bits & phase::MASK,
        }
    }

    pub const fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub const fn phase_bits(&self) -> u8 {
        self.phase
    }

    pub const fn phase(&self) -> Option<Phase> {
        Phase::from_bits(self.phase)
    }

    /// Counts one tick and returns whether the phase moved on.
    fn tick(&mut self, ticks_per_digit: u32) -> bool {
        self.tick_counter = self.tick_counter.wrapping_add(1);
        if self.tick_counter < ticks_per_digit {
            return false;
        }

        self.tick_counter = 0;
        // an undefined register falls back into the cycle at its start
        let next = match self.phase() {
            Some(current) => current.next(),
            None => Phase::Units,
        };
        self.phase = next.bits();
        true
    }

    fn reset(&mut self) {
        *self = Self::INITIAL;
    }
}

/// What the bus should show for one refresh slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RefreshFrame {
    /// `None` only for the blank fallback.
    pub active_digit: Option<Phase>,
    pub segments: SegmentPattern,
    pub select: DigitSelect,
}

impl RefreshFrame {
    pub fn blank<D>(decoder: &D) -> Self
    where
        D: SegmentDecoder + ?Sized,
    {
        Self {
            active_digit: None,
            segments: decoder.blank(),
            select: DigitSelect::NONE,
        }
    }
}

/// Output function of the scheduler.
///
/// An undefined phase register drives a blank pattern with every select
/// line released, so the bus never shows a stale or wrong digit.
pub fn frame_for<D>(state: &ScheduleState, digits: DigitTriple, decoder: &D) -> RefreshFrame
where
    D: SegmentDecoder + ?Sized,
{
    match state.phase() {
        Some(active) => RefreshFrame {
            active_digit: Some(active),
            segments: decoder.decode(digits.digit(active)),
            select: active.select(),
        },
        None => RefreshFrame::blank(decoder),
    }
}

/// Free-running three phase refresh cycle.
#[derive(Clone, Debug)]
pub struct DisplayScheduler {
    config: SchedulerConfig,
    state: ScheduleState,
}

impl Default for DisplayScheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl DisplayScheduler {
    pub const fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            state: ScheduleState::INITIAL,
        }
    }

    /// Starts from an arbitrary state, e.g. one restored from registers.
    pub const fn with_state(config: SchedulerConfig, state: ScheduleState) -> Self {
        Self { config, state }
    }

    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub const fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub const fn phase(&self) -> Option<Phase> {
        self.state.phase()
    }

    pub const fn tick_counter(&self) -> u32 {
        self.state.tick_counter()
    }

    /// One period of the time source.
    pub fn on_tick(&mut self) {
        if self.state.tick(self.config.effective_ticks_per_digit()) {
            #[cfg(feature = "defmt")]
            defmt::trace!("segmux: phase -> {}", self.state.phase());
        }
    }

    /// Back to `Units` with the counter cleared.
    pub fn on_reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "segmux: reset at tick {} phase {}",
            self.state.tick_counter(),
            self.state.phase_bits()
        );
        self.state.reset();
    }

    /// Evaluates one instant in which reset may be asserted alongside a
    /// tick. Reset wins and the tick is dropped.
    pub fn step(&mut self, reset: bool) {
        if reset {
            self.on_reset();
        } else {
            self.on_tick();
        }
    }

    pub fn current_frame<D>(&self, digits: DigitTriple, decoder: &D) -> RefreshFrame
    where
        D: SegmentDecoder + ?Sized,
    {
        frame_for(&self.state, digits, decoder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_cycle() {
        assert_eq!(Phase::Units.next(), Phase::Tens);
        assert_eq!(Phase::Tens.next(), Phase::Hundreds);
        assert_eq!(Phase::Hundreds.next(), Phase::Units);
    }

    #[test]
    fn test_phase_bits_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::from_bits(phase.bits()), Some(phase));
        }
        assert_eq!(Phase::from_bits(phase::UNDEFINED), None);
    }

    #[test]
    fn test_state_tick_threshold() {
        let mut state = ScheduleState::INITIAL;
        assert!(!state.tick(2));
        assert_eq!(state.tick_counter(), 1);
        assert!(state.tick(2));
        assert_eq!(state.tick_counter(), 0);
        assert_eq!(state.phase(), Some(Phase::Tens));
    }

    #[test]
    fn test_undefined_state_rejoins_cycle() {
        let mut state = ScheduleState::from_raw(0, phase::UNDEFINED);
        assert!(state.tick(1));
        assert_eq!(state.phase(), Some(Phase::Units));
    }

    #[test]
    fn test_from_raw_truncates_phase() {
        let state = ScheduleState::from_raw(7, 0b110);
        assert_eq!(state.phase_bits(), phase::HUNDREDS);
        assert_eq!(state.tick_counter(), 7);
    }
}
