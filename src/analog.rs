//! Band table for the analog output.
//!
//! The Maker Line drives its analog output proportionally to where the line
//! sits. The 10-bit reading is cut into seven contiguous bands that cover
//! 0..=1023 with no gap or overlap. Note the edges: the lower three bands are
//! closed below, the upper three are closed above, and Center is closed on
//! both ends.

use core::ops::RangeInclusive;

use crate::types::LinePosition;

/// Highest reading in the 10-bit domain.
pub const MAX: u16 = 1023;

/// Classifies a 10-bit reading. Every value maps to exactly one position;
/// anything above 941 (including out-of-range readings) is `All`.
pub fn classify(value: u16) -> LinePosition {
    match value {
        0..=80 => LinePosition::None,
        81..=265 => LinePosition::FarLeft,
        266..=429 => LinePosition::Left,
        430..=593 => LinePosition::Center,
        594..=757 => LinePosition::Right,
        758..=941 => LinePosition::FarRight,
        _ => LinePosition::All,
    }
}

/// Whether `value` falls in the band of `position`.
pub fn is_on(value: u16, position: LinePosition) -> bool {
    classify(value) == position
}

/// The readings that classify as `position`.
pub fn band(position: LinePosition) -> RangeInclusive<u16> {
    match position {
        LinePosition::None => 0..=80,
        LinePosition::FarLeft => 81..=265,
        LinePosition::Left => 266..=429,
        LinePosition::Center => 430..=593,
        LinePosition::Right => 594..=757,
        LinePosition::FarRight => 758..=941,
        LinePosition::All => 942..=MAX,
    }
}
