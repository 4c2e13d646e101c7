//! Handoff of the current digits from the input side to the refresh side.
//!
//! The triple lives in a single cell behind an `embassy-sync` blocking mutex.
//! Both [`DigitLatch::store`] and [`DigitLatch::load`] move the whole triple
//! inside one critical section, so the refresh side never sees hundreds from
//! one value next to units from another.
//!
//! ```ignore
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//!
//! static DIGITS: DigitLatch<CriticalSectionRawMutex> =
//!     DigitLatch::new(CriticalSectionRawMutex::new());
//! ```

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::bcd::{extract, DigitTriple};

pub struct DigitLatch<M: RawMutex> {
    digits: Mutex<M, Cell<DigitTriple>>,
}

impl<M: RawMutex> DigitLatch<M> {
    /// Latch holding `000`.
    pub const fn new(raw: M) -> Self {
        Self::with_digits(raw, DigitTriple::ZERO)
    }

    pub const fn with_digits(raw: M, digits: DigitTriple) -> Self {
        Self {
            digits: Mutex::const_new(raw, Cell::new(digits)),
        }
    }

    /// Replaces the latched triple.
    pub fn store(&self, digits: DigitTriple) {
        self.digits.lock(|cell| cell.set(digits));
    }

    /// Extracts the digits of `value` and publishes them.
    pub fn store_value(&self, value: u8) -> DigitTriple {
        let digits = extract(value);
        self.store(digits);
        digits
    }

    /// Most recently stored triple.
    pub fn load(&self) -> DigitTriple {
        self.digits.lock(|cell| cell.get())
    }
}
