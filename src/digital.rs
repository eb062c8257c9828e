//! Rule table for the five digital outputs.
//!
//! `None` and `All` are whole-pattern conditions. A discrete position is
//! reported only when its own sensor is the single one seeing the line; any
//! pattern with two to four sensors set is ambiguous and matches nothing.

use crate::types::{DigitalSample, LinePosition};

/// Classifies a pattern, or returns `None` when it is ambiguous.
pub fn classify(sample: DigitalSample) -> Option<LinePosition> {
    match sample.bits() {
        DigitalSample::EMPTY => Some(LinePosition::None),
        DigitalSample::FULL => Some(LinePosition::All),
        0b10000 => Some(LinePosition::FarLeft),
        0b01000 => Some(LinePosition::Left),
        0b00100 => Some(LinePosition::Center),
        0b00010 => Some(LinePosition::Right),
        0b00001 => Some(LinePosition::FarRight),
        _ => None,
    }
}

/// Whether `sample` shows the line at `position`.
pub fn is_on(sample: DigitalSample, position: LinePosition) -> bool {
    classify(sample) == Some(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(l: u8, cl: u8, c: u8, cr: u8, r: u8) -> DigitalSample {
        DigitalSample::from_levels(l == 1, cl == 1, c == 1, cr == 1, r == 1)
    }

    #[test]
    fn single_sensor() {
        assert_eq!(classify(sample(1, 0, 0, 0, 0)), Some(LinePosition::FarLeft));
        assert_eq!(classify(sample(0, 1, 0, 0, 0)), Some(LinePosition::Left));
        assert_eq!(classify(sample(0, 0, 1, 0, 0)), Some(LinePosition::Center));
        assert_eq!(classify(sample(0, 0, 0, 1, 0)), Some(LinePosition::Right));
        assert_eq!(classify(sample(0, 0, 0, 0, 1)), Some(LinePosition::FarRight));
    }

    #[test]
    fn center_only() {
        let s = sample(0, 0, 1, 0, 0);
        assert!(is_on(s, LinePosition::Center));
        assert!(!is_on(s, LinePosition::All));
        assert!(!is_on(s, LinePosition::None));
        assert!(!is_on(s, LinePosition::Left));
    }

    #[test]
    fn empty_and_full() {
        assert!(is_on(sample(0, 0, 0, 0, 0), LinePosition::None));
        assert!(is_on(sample(1, 1, 1, 1, 1), LinePosition::All));
        assert!(!is_on(sample(1, 1, 1, 1, 1), LinePosition::Center));
    }

    #[test]
    fn two_sensors_are_ambiguous() {
        let s = sample(1, 1, 0, 0, 0);
        assert_eq!(classify(s), None);
        for position in LinePosition::ALL {
            assert!(!is_on(s, position), "{position:?}");
        }
    }

    #[test]
    fn every_pattern() {
        for bits in 0u8..32 {
            let s = DigitalSample::new_with_raw_value(bits);
            let matching = LinePosition::ALL.iter().filter(|&&p| is_on(s, p)).count();
            match bits.count_ones() {
                0 | 1 | 5 => assert_eq!(matching, 1, "pattern {bits:05b}"),
                _ => assert_eq!(matching, 0, "pattern {bits:05b}"),
            }
            assert_eq!(is_on(s, LinePosition::None), bits == 0);
            assert_eq!(is_on(s, LinePosition::All), bits == 0b11111);
        }
    }

    #[test]
    fn upper_bits_ignored() {
        let s = DigitalSample::new_with_raw_value(0b1110_0100);
        assert_eq!(classify(s), Some(LinePosition::Center));
    }
}
