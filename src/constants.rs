pub const NUM_DIGITS: usize = 3;
pub const INPUT_BITS: u32 = 8;
pub const DEFAULT_TICKS_PER_DIGIT: u32 = 50_000;
pub const MIN_FLICKER_FREE_HZ: u32 = 100; // full 3-digit cycle

// gfedcba, bit set = segment lit
pub const NUMBERS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
pub const SEGMENT_MASK: u8 = 0x7F;

pub mod segment {
    pub const A: u8 = 0x01; // top
    pub const B: u8 = 0x02; // top right
    pub const C: u8 = 0x04; // bottom right
    pub const D: u8 = 0x08; // bottom
    pub const E: u8 = 0x10; // bottom left
    pub const F: u8 = 0x20; // top left
    pub const G: u8 = 0x40; // middle
}

pub mod select {
    pub const UNITS: u8 = 0x01;
    pub const TENS: u8 = 0x02;
    pub const HUNDREDS: u8 = 0x04;
    pub const NONE: u8 = 0x00;
    pub const ALL: u8 = UNITS | TENS | HUNDREDS;
}

pub mod phase {
    pub const UNITS: u8 = 0b00;
    pub const TENS: u8 = 0b01;
    pub const HUNDREDS: u8 = 0b10;
    pub const UNDEFINED: u8 = 0b11; // never produced by the transition logic
    pub const MASK: u8 = 0b11;
}

pub(crate) mod scratch {
    pub const UNITS_SHIFT: u32 = 8; // bits [11:8]
    pub const TENS_SHIFT: u32 = 12; // bits [15:12]
    pub const HUNDREDS_SHIFT: u32 = 16; // bits [19:16]
    pub const FIELD_MASK: u32 = 0xF;
    pub const WIDTH_MASK: u32 = 0xF_FFFF; // 8 input bits + 3 digit fields
}
