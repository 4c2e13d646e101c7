//! Binary to decimal digit extraction.
//!
//! Uses the shift-and-correct method (double dabble): a 20-bit scratch
//! register holds the input in its low byte and three BCD fields above it.
//! Every iteration bumps each field that is 5 or more by 3, then shifts the
//! whole register left. After one iteration per input bit the fields hold the
//! decimal digits. The loop never exits early, so every input costs the same.

use num_traits::ToPrimitive;

use crate::constants::{scratch, INPUT_BITS};
use crate::scheduler::Phase;

/// Three decimal digits of an 8-bit value.
///
/// Every field is in `0..=9`. A triple is always replaced as a whole, never
/// patched field by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitTriple {
    hundreds: u8,
    tens: u8,
    units: u8,
}

impl DigitTriple {
    pub const ZERO: Self = Self {
        hundreds: 0,
        tens: 0,
        units: 0,
    };

    /// Builds a triple from explicit digits, rejecting anything above 9.
    pub const fn from_digits(hundreds: u8, tens: u8, units: u8) -> Option<Self> {
        if hundreds > 9 || tens > 9 || units > 9 {
            return None;
        }
        Some(Self {
            hundreds,
            tens,
            units,
        })
    }

    /// Extracts the digits of any primitive number that fits in a `u8`.
    pub fn try_from_number<T>(number: T) -> Option<Self>
    where
        T: ToPrimitive,
    {
        number.to_u8().map(extract)
    }

    pub const fn hundreds(&self) -> u8 {
        self.hundreds
    }

    pub const fn tens(&self) -> u8 {
        self.tens
    }

    pub const fn units(&self) -> u8 {
        self.units
    }

    /// Digit shown while the scheduler is in `phase`.
    pub const fn digit(&self, phase: Phase) -> u8 {
        match phase {
            Phase::Units => self.units,
            Phase::Tens => self.tens,
            Phase::Hundreds => self.hundreds,
        }
    }

    /// Digits ordered most significant first.
    pub const fn to_array(&self) -> [u8; 3] {
        [self.hundreds, self.tens, self.units]
    }

    /// Packed BCD, `0xHTU`.
    pub const fn to_bcd(&self) -> u16 {
        (self.hundreds as u16) << 8 | (self.tens as u16) << 4 | self.units as u16
    }

    pub const fn from_bcd(bcd: u16) -> Option<Self> {
        if bcd > 0xFFF {
            return None;
        }
        Self::from_digits(
            ((bcd >> 8) & 0xF) as u8,
            ((bcd >> 4) & 0xF) as u8,
            (bcd & 0xF) as u8,
        )
    }

    /// The value the digits represent.
    pub const fn value(&self) -> u16 {
        self.hundreds as u16 * 100 + self.tens as u16 * 10 + self.units as u16
    }
}

impl From<u8> for DigitTriple {
    fn from(value: u8) -> Self {
        extract(value)
    }
}

/// Splits `value` into hundreds, tens and units.
pub const fn extract(value: u8) -> DigitTriple {
    let mut register = value as u32;

    let mut i = 0;
    while i < INPUT_BITS {
        register = correct_field(register, scratch::UNITS_SHIFT);
        register = correct_field(register, scratch::TENS_SHIFT);
        register = correct_field(register, scratch::HUNDREDS_SHIFT);
        register = (register << 1) & scratch::WIDTH_MASK;
        i += 1;
    }

    DigitTriple {
        hundreds: field(register, scratch::HUNDREDS_SHIFT),
        tens: field(register, scratch::TENS_SHIFT),
        units: field(register, scratch::UNITS_SHIFT),
    }
}

const fn field(register: u32, shift: u32) -> u8 {
    ((register >> shift) & scratch::FIELD_MASK) as u8
}

// a field of 5..=9 doubles past 9 unless pre-corrected by 3
const fn correct_field(register: u32, shift: u32) -> u32 {
    if field(register, shift) >= 5 {
        register + (3 << shift)
    } else {
        register
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_field_only_touches_large_fields() {
        let register = 0x4_5000;
        let corrected = correct_field(register, scratch::TENS_SHIFT);
        assert_eq!(corrected, 0x4_8000);
        assert_eq!(correct_field(corrected, scratch::HUNDREDS_SHIFT), 0x4_8000);
    }

    #[test]
    fn test_extract_is_const() {
        const MAX: DigitTriple = extract(u8::MAX);
        assert_eq!(MAX.to_array(), [2, 5, 5]);
    }

    #[test]
    fn test_bcd_packing() {
        let digits = extract(173);
        assert_eq!(digits.to_bcd(), 0x173);
        assert_eq!(DigitTriple::from_bcd(0x173), Some(digits));
        assert_eq!(DigitTriple::from_bcd(0x1A3), None);
        assert_eq!(DigitTriple::from_bcd(0x1000), None);
    }
}
