extern crate segmux;

use proptest::prelude::*;
use segmux::{extract, DigitTriple};

#[test]
fn known_value_test() {
    assert_eq!(extract(0).to_array(), [0, 0, 0]);
    assert_eq!(extract(9).to_array(), [0, 0, 9]);
    assert_eq!(extract(99).to_array(), [0, 9, 9]);
    assert_eq!(extract(100).to_array(), [1, 0, 0]);
    assert_eq!(extract(255).to_array(), [2, 5, 5]);
}

#[test]
fn exhaustive_value_test() {
    for value in 0..=u8::MAX {
        let digits = extract(value);
        assert!(digits.to_array().iter().all(|&d| d <= 9), "{value}: {digits:?}");
        assert_eq!(digits.value(), u16::from(value));
        assert_eq!(
            digits.to_array(),
            [value / 100, value / 10 % 10, value % 10],
            "{value}"
        );
    }
}

#[test]
fn number_conversion_test() {
    assert_eq!(DigitTriple::try_from_number(42u32), Some(extract(42)));
    assert_eq!(DigitTriple::try_from_number(255i64), Some(extract(255)));
    assert_eq!(DigitTriple::try_from_number(256u16), None);
    assert_eq!(DigitTriple::try_from_number(-1i8), None);
    assert_eq!(DigitTriple::try_from_number(3.0f32), Some(extract(3)));
}

#[test]
fn explicit_digits_test() {
    assert_eq!(DigitTriple::from_digits(1, 2, 3), Some(extract(123)));
    assert_eq!(DigitTriple::from_digits(0, 10, 0), None);
    assert_eq!(DigitTriple::from(7u8), extract(7));
    assert_eq!(DigitTriple::default(), DigitTriple::ZERO);
}

proptest! {
    #[test]
    fn digits_reconstruct_value(value in any::<u8>()) {
        let digits = extract(value);
        prop_assert!(digits.hundreds() <= 9);
        prop_assert!(digits.tens() <= 9);
        prop_assert!(digits.units() <= 9);
        let rebuilt = u16::from(digits.hundreds()) * 100
            + u16::from(digits.tens()) * 10
            + u16::from(digits.units());
        prop_assert_eq!(rebuilt, u16::from(value));
    }
}
