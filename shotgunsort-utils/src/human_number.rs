//! Approximate renderings of large attempt counts, e.g. `1.2 million`.

use std::fmt;

pub const ONE_THOUSAND: u64 = 1_000;
pub const ONE_MILLION: u64 = 1_000_000;
pub const ONE_BILLION: u64 = 1_000_000_000;
pub const ONE_TRILLION: u64 = 1_000_000_000_000;
pub const ONE_QUADRILLION: u64 = 1_000_000_000_000_000;

const WASTING_CPU: &str = "YOU'RE WASTING CPU POWER...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanNumber(u64);

impl HumanNumber {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Unit name and base for the value, or `None` past the trillions.
    fn unit(&self) -> Option<(&'static str, u64)> {
        match self.0 {
            n if n < ONE_MILLION => Some(("thousand", ONE_THOUSAND)),
            n if n < ONE_BILLION => Some(("million", ONE_MILLION)),
            n if n < ONE_TRILLION => Some(("billion", ONE_BILLION)),
            n if n < ONE_QUADRILLION => Some(("trillion", ONE_TRILLION)),
            _ => None,
        }
    }

    /// Single truncated decimal digit of the remainder.
    fn fraction_digit(value: u64, base: u64) -> u64 {
        let tenth = base / 10;
        let remainder = value % base;
        if remainder < tenth {
            0
        } else {
            remainder / tenth
        }
    }

    /// `(~1.2 million)`, or the bare warning in parentheses for huge counts.
    pub fn parenthesized(&self) -> String {
        match self.unit() {
            Some(_) => format!("(~{})", self),
            None => format!("({})", WASTING_CPU),
        }
    }
}

impl fmt::Display for HumanNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit() {
            Some((name, base)) => write!(
                f,
                "{}.{} {}",
                self.0 / base,
                Self::fraction_digit(self.0, base),
                name
            ),
            None => f.write_str(WASTING_CPU),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(HumanNumber::new(1_234_567).to_string(), "1.2 million");
        assert_eq!(HumanNumber::new(999).to_string(), "0.9 thousand");
        assert_eq!(HumanNumber::new(0).to_string(), "0.0 thousand");
        assert_eq!(HumanNumber::new(1_050).to_string(), "1.0 thousand");
        assert_eq!(HumanNumber::new(999_999).to_string(), "999.9 thousand");
        assert_eq!(HumanNumber::new(1_200_000_000).to_string(), "1.2 billion");
        assert_eq!(HumanNumber::new(7_890_000_000_000).to_string(), "7.8 trillion");
        assert_eq!(HumanNumber::new(ONE_QUADRILLION).to_string(), WASTING_CPU);
    }

    #[test]
    fn test_remainder_below_tenth_floors_to_zero() {
        assert_eq!(HumanNumber::new(2_099_999).to_string(), "2.0 million");
        assert_eq!(HumanNumber::new(2_100_000).to_string(), "2.1 million");
        assert_eq!(HumanNumber::new(3_099).to_string(), "3.0 thousand");
    }

    #[test]
    fn test_parenthesized() {
        assert_eq!(HumanNumber::new(1_234_567).parenthesized(), "(~1.2 million)");
        assert_eq!(HumanNumber::new(17).parenthesized(), "(~0.0 thousand)");
        assert_eq!(
            HumanNumber::new(u64::MAX).parenthesized(),
            "(YOU'RE WASTING CPU POWER...)"
        );
    }
}
