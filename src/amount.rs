use std::fmt;

/// Currency in minor units (e.g. pence, paise), stored as a scaled integer
/// with 2 decimal places at the display boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    pub const ZERO: Amount = Amount(0);

    /// Convert a decimal major-unit value, rounding to the nearest minor unit.
    /// Returns `None` for NaN or infinite input so non-finite values never
    /// reach the ledger.
    pub fn try_from_float(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Amount((value * Self::SCALE as f64).round() as i64))
    }

    pub fn from_minor(value: i64) -> Self {
        Amount(value)
    }

    pub fn as_minor(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let whole = abs / Self::SCALE;
        let frac = abs % Self::SCALE;
        write!(f, "{sign}{whole}.{frac:02}")
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Amount {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_minor_preserves_value() {
        let amount = Amount::from_minor(123456);
        assert_eq!(amount, Amount(123456));
        assert_eq!(amount.as_minor(), 123456);
    }

    #[test]
    fn try_from_float_converts_correctly() {
        assert_eq!(
            Amount::try_from_float(100.0),
            Some(Amount::from_minor(10_000))
        );
        assert_eq!(Amount::try_from_float(1.5), Some(Amount::from_minor(150)));
        assert_eq!(Amount::try_from_float(0.01), Some(Amount::from_minor(1)));
    }

    #[test]
    fn try_from_float_rounds_correctly() {
        assert_eq!(Amount::try_from_float(1.234), Some(Amount::from_minor(123)));
        assert_eq!(Amount::try_from_float(1.235), Some(Amount::from_minor(124)));
    }

    #[test]
    fn try_from_float_rejects_non_finite() {
        assert_eq!(Amount::try_from_float(f64::NAN), None);
        assert_eq!(Amount::try_from_float(f64::INFINITY), None);
        assert_eq!(Amount::try_from_float(f64::NEG_INFINITY), None);
    }

    #[test]
    fn display_formats_minor_units() {
        assert_eq!(Amount::from_minor(10_000).to_string(), "100.00");
        assert_eq!(Amount::from_minor(150).to_string(), "1.50");
        assert_eq!(Amount::from_minor(1).to_string(), "0.01");
        assert_eq!(Amount::from_minor(0).to_string(), "0.00");
    }

    #[test]
    fn display_formats_negative() {
        assert_eq!(Amount::from_minor(-5025).to_string(), "-50.25");
        assert_eq!(Amount::from_minor(-1).to_string(), "-0.01");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_positive() {
        assert!(Amount::from_minor(1).is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::from_minor(-1).is_positive());
    }

    #[test]
    fn add() {
        let a = Amount::from_minor(100);
        let b = Amount::from_minor(50);
        assert_eq!(a + b, Amount::from_minor(150));
    }

    #[test]
    fn add_assign() {
        let mut a = Amount::from_minor(100);
        a += Amount::from_minor(50);
        assert_eq!(a, Amount::from_minor(150));
    }

    #[test]
    fn sub_assign() {
        let mut a = Amount::from_minor(100);
        a -= Amount::from_minor(30);
        assert_eq!(a, Amount::from_minor(70));
    }

    #[test]
    fn ordering() {
        let small = Amount::from_minor(100);
        let large = Amount::from_minor(200);
        assert!(small < large);
        assert!(large > small);
    }
}
