//! Three digit seven-segment display core.
//!
//! - [`extract`] splits an 8-bit value into decimal digits by double dabble.
//! - [`DisplayScheduler`] multiplexes the digits over one segment bus.
//! - [`DigitLatch`] hands the digits from the input side to the refresh side
//!   as one unit.
//! - [`PinBus`] and [`MultiplexedDisplay`] drive `embedded-hal` pins.

#![no_std]
#![deny(unsafe_code)]

mod bcd;
mod bus;
mod config;
mod constants;
mod decoder;
mod driver;
mod latch;
mod scheduler;

pub use bcd::{extract, DigitTriple};
pub use bus::{drive_static, static_frame, DisplayOutput, PinBus, StaticFrame, StaticOutput};
pub use config::SchedulerConfig;
pub use constants::*;
pub use decoder::{Polarity, SegmentDecoder, SegmentPattern, SevenSegmentDecoder};
pub use driver::MultiplexedDisplay;
pub use latch::DigitLatch;
pub use scheduler::{frame_for, DigitSelect, DisplayScheduler, Phase, RefreshFrame, ScheduleState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SegmuxError<E> {
    BusError(E),
    InvalidValue,
}

impl<E> From<E> for SegmuxError<E> {
    fn from(error: E) -> Self {
        SegmuxError::BusError(error)
    }
}
