//! The displayed countdown value.

/// Highest value the two-digit shot clock can show.
pub const MAX_CLOCK_VALUE: u8 = 24;

/// A countdown value guaranteed to lie in `0..=24`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct ClockValue(u8);

impl ClockValue {
    /// Zero seconds left.
    pub const ZERO: Self = Self(0);

    /// A full 24-second possession.
    pub const FULL: Self = Self(MAX_CLOCK_VALUE);

    /// Wrap `value` if it is displayable, `None` otherwise.
    pub const fn new(value: i64) -> Option<Self> {
        if value >= 0 && value <= MAX_CLOCK_VALUE as i64 {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> u8 { self.0 }

    #[inline]
    pub const fn is_zero(self) -> bool { self.0 == 0 }

    /// One second less, or `None` at zero.
    #[inline]
    pub const fn decremented(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl From<ClockValue> for i64 {
    fn from(value: ClockValue) -> Self { Self::from(value.0) }
}

impl core::fmt::Display for ClockValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result { write!(f, "{:02}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_value_bounds() {
        assert_eq!(ClockValue::new(0), Some(ClockValue::ZERO));
        assert_eq!(ClockValue::new(24), Some(ClockValue::FULL));
        assert_eq!(ClockValue::new(-1), None, "Negative values are not displayable");
        assert_eq!(ClockValue::new(25), None, "Values above 24 are not displayable");
    }

    #[test]
    fn test_clock_value_decrement() {
        assert_eq!(ClockValue::FULL.decremented().map(ClockValue::get), Some(23));
        assert_eq!(ClockValue::ZERO.decremented(), None, "Zero cannot be decremented");
    }

    #[test]
    fn test_clock_value_display_is_two_digits() {
        assert_eq!(ClockValue::new(7).map(|v| v.to_string()), Some("07".to_string()));
        assert_eq!(ClockValue::FULL.to_string(), "24");
    }
}
