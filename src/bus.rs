//! Output side: pushing frames to the physical display.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::{OutputPin, PinState};

use crate::bcd::DigitTriple;
use crate::constants::{segment, NUM_DIGITS};
use crate::decoder::{Polarity, SegmentDecoder, SegmentPattern};
use crate::latch::DigitLatch;
use crate::scheduler::{DigitSelect, Phase, RefreshFrame};

/// Shared segment bus with one select line per digit.
pub trait DisplayOutput {
    type Error;

    fn write_frame(&mut self, frame: &RefreshFrame) -> Result<(), Self::Error>;
}

/// All three digits lit at once, one decoder per digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StaticFrame {
    pub hundreds: SegmentPattern,
    pub tens: SegmentPattern,
    pub units: SegmentPattern,
    pub select: DigitSelect,
}

impl StaticFrame {
    pub const fn pattern(&self, position: Phase) -> SegmentPattern {
        match position {
            Phase::Units => self.units,
            Phase::Tens => self.tens,
            Phase::Hundreds => self.hundreds,
        }
    }
}

/// Three independent segment outputs.
pub trait StaticOutput {
    type Error;

    fn write_static(&mut self, frame: &StaticFrame) -> Result<(), Self::Error>;
}

pub fn static_frame<D>(digits: DigitTriple, decoder: &D) -> StaticFrame
where
    D: SegmentDecoder + ?Sized,
{
    StaticFrame {
        hundreds: decoder.decode(digits.hundreds()),
        tens: decoder.decode(digits.tens()),
        units: decoder.decode(digits.units()),
        select: DigitSelect::ALL,
    }
}

/// Decodes whatever is latched and writes it to a static display.
pub fn drive_static<M, D, O>(
    latch: &DigitLatch<M>,
    decoder: &D,
    output: &mut O,
) -> Result<(), O::Error>
where
    M: RawMutex,
    D: SegmentDecoder + ?Sized,
    O: StaticOutput + ?Sized,
{
    output.write_static(&static_frame(latch.load(), decoder))
}

const SEGMENT_ORDER: [u8; 7] = [
    segment::A,
    segment::B,
    segment::C,
    segment::D,
    segment::E,
    segment::F,
    segment::G,
];

/// [`DisplayOutput`] over GPIO: segment lines a..g and select lines for
/// units, tens and hundreds.
pub struct PinBus<SEG, SEL> {
    segments: [SEG; 7],
    selects: [SEL; NUM_DIGITS],
    select_polarity: Polarity,
}

impl<SEG, SEL, E> PinBus<SEG, SEL>
where
    SEG: OutputPin<Error = E>,
    SEL: OutputPin<Error = E>,
{
    pub fn new(segments: [SEG; 7], selects: [SEL; NUM_DIGITS], select_polarity: Polarity) -> Self {
        Self {
            segments,
            selects,
            select_polarity,
        }
    }

    pub fn destroy(self) -> ([SEG; 7], [SEL; NUM_DIGITS]) {
        (self.segments, self.selects)
    }

    fn select_level(&self, asserted: bool) -> PinState {
        match self.select_polarity {
            Polarity::ActiveHigh => PinState::from(asserted),
            Polarity::ActiveLow => PinState::from(!asserted),
        }
    }

    fn release_selects(&mut self) -> Result<(), E> {
        let level = self.select_level(false);
        for pin in self.selects.iter_mut() {
            pin.set_state(level)?;
        }
        Ok(())
    }
}

impl<SEG, SEL, E> DisplayOutput for PinBus<SEG, SEL>
where
    SEG: OutputPin<Error = E>,
    SEL: OutputPin<Error = E>,
{
    type Error = E;

    // selects drop first so the new pattern never flashes on the old digit
    fn write_frame(&mut self, frame: &RefreshFrame) -> Result<(), E> {
        self.release_selects()?;

        for (pin, line) in self.segments.iter_mut().zip(SEGMENT_ORDER) {
            pin.set_state(PinState::from(frame.segments.line_high(line)))?;
        }

        for position in Phase::ALL {
            if frame.select.is_asserted(position) {
                let level = self.select_level(true);
                self.selects[position_index(position)].set_state(level)?;
            }
        }
        Ok(())
    }
}

const fn position_index(position: Phase) -> usize {
    match position {
        Phase::Units => 0,
        Phase::Tens => 1,
        Phase::Hundreds => 2,
    }
}
