//! Digit to segment decoding.

use crate::constants::{NUMBERS, SEGMENT_MASK};

/// Electrical level that lights a segment or selects a digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Line driven low to light (common anode).
    #[default]
    ActiveLow,
    /// Line driven high to light (common cathode).
    ActiveHigh,
}

/// Seven segment levels as driven on the bus, bit0 = a through bit6 = g.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern {
    bits: u8,
    polarity: Polarity,
}

impl SegmentPattern {
    /// Pattern from logical segments, set bit = lit.
    pub const fn from_lit(lit: u8, polarity: Polarity) -> Self {
        let lit = lit & SEGMENT_MASK;
        let bits = match polarity {
            Polarity::ActiveLow => !lit & SEGMENT_MASK,
            Polarity::ActiveHigh => lit,
        };
        Self { bits, polarity }
    }

    /// All segments off.
    pub const fn blank(polarity: Polarity) -> Self {
        Self::from_lit(0, polarity)
    }

    /// Raw line levels, set bit = line high.
    pub const fn bits(&self) -> u8 {
        self.bits
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Logical segments, set bit = lit, regardless of polarity.
    pub const fn lit(&self) -> u8 {
        match self.polarity {
            Polarity::ActiveLow => !self.bits & SEGMENT_MASK,
            Polarity::ActiveHigh => self.bits,
        }
    }

    pub const fn is_blank(&self) -> bool {
        self.lit() == 0
    }

    /// Whether the line for `segment` (one of `constants::segment`) is driven high.
    pub const fn line_high(&self, segment: u8) -> bool {
        self.bits & segment != 0
    }
}

pub trait SegmentDecoder {
    /// Pattern for `digit`; anything outside `0..=9` decodes to blank.
    fn decode(&self, digit: u8) -> SegmentPattern;

    fn blank(&self) -> SegmentPattern;
}

/// Fixed-table decoder for the ten decimal digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SevenSegmentDecoder {
    pub polarity: Polarity,
}

impl SevenSegmentDecoder {
    pub const fn new(polarity: Polarity) -> Self {
        Self { polarity }
    }
}

impl SegmentDecoder for SevenSegmentDecoder {
    fn decode(&self, digit: u8) -> SegmentPattern {
        match NUMBERS.get(digit as usize) {
            Some(&lit) => SegmentPattern::from_lit(lit, self.polarity),
            None => self.blank(),
        }
    }

    fn blank(&self) -> SegmentPattern {
        SegmentPattern::blank(self.polarity)
    }
}

impl<D: SegmentDecoder + ?Sized> SegmentDecoder for &D {
    fn decode(&self, digit: u8) -> SegmentPattern {
        (**self).decode(digit)
    }

    fn blank(&self) -> SegmentPattern {
        (**self).blank()
    }
}
