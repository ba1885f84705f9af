//! Digit decoding: which segments light up for a value.
//!
//! Digits are indexed from the right (index 0 = units). Decomposition stops
//! once the remaining value is zero, so a leading digit that does not exist
//! (the tens of `7`) stays fully blank rather than showing `0`.

use crate::segments::{DIGIT_COUNT, Segment, SegmentPath, SegmentSet};
use crate::value::ClockValue;

/// Build a set from a list of segments (usable in `const` context).
const fn set_of(segments: &[Segment]) -> SegmentSet {
    let mut bits = 0u8;
    let mut i = 0;
    while i < segments.len() {
        bits |= 1 << segments[i] as u8;
        i += 1;
    }
    SegmentSet::from_bits_retain(bits)
}

use Segment::{A, B, C, D, E, F, G};

/// Seven-segment font for the decimal digits.
pub const DIGIT_FONT: [SegmentSet; 10] = [
    set_of(&[A, B, C, E, F, G]),    // 0
    set_of(&[C, F]),                // 1
    set_of(&[A, C, D, E, G]),       // 2
    set_of(&[A, C, D, F, G]),       // 3
    set_of(&[B, C, D, F]),          // 4
    set_of(&[A, B, D, F, G]),       // 5
    set_of(&[A, B, D, E, F, G]),    // 6
    set_of(&[A, C, F]),             // 7
    set_of(&[A, B, C, D, E, F, G]), // 8
    set_of(&[A, B, C, D, F]),       // 9
];

/// Segments lit for a single decimal digit, `None` above 9.
#[inline]
pub const fn active_segments(digit: u8) -> Option<SegmentSet> {
    if digit < 10 { Some(DIGIT_FONT[digit as usize]) } else { None }
}

/// Lit segments for every digit position of a value.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DecodedValue {
    /// Index 0 = rightmost digit.
    digits: [SegmentSet; DIGIT_COUNT],
}

impl DecodedValue {
    /// Nothing lit.
    pub const BLANK: Self = Self {
        digits: [SegmentSet::empty(); DIGIT_COUNT],
    };

    /// Decompose a displayable value.
    pub fn from_value(value: ClockValue) -> Self {
        let mut digits = [SegmentSet::empty(); DIGIT_COUNT];
        let mut remaining = value.get();
        let mut index = 0;

        loop {
            digits[index] = DIGIT_FONT[usize::from(remaining % 10)];
            remaining /= 10;
            index += 1;
            if remaining == 0 || index == DIGIT_COUNT {
                break;
            }
        }

        Self { digits }
    }

    /// Segments for digit `index`, counted from the right.
    #[inline]
    pub const fn digit(&self, index: usize) -> SegmentSet { self.digits[index] }

    /// Segments for digit `column`, counted from the left (0 = tens).
    #[inline]
    pub const fn column(&self, column: usize) -> SegmentSet { self.digits[DIGIT_COUNT - 1 - column] }

    /// Set `active` on every path to match this value.
    ///
    /// Paths are expected in column-major A..G order as produced by
    /// [`build_segment_paths`](crate::segments::build_segment_paths).
    pub fn apply(
        &self,
        paths: &mut [SegmentPath],
    ) {
        for path in paths.iter_mut() {
            path.active = path.column < DIGIT_COUNT && self.column(path.column).has(path.segment);
        }
    }
}

/// Decode any integer. Values outside `0..=24` are ignored and return `None`;
/// the caller keeps whatever it displayed before.
pub fn decode_value(value: i64) -> Option<DecodedValue> { ClockValue::new(value).map(DecodedValue::from_value) }

// =============================================================================
// Unit Tests
// =============================================================================
