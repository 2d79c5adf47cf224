use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, SplitError};

/// Largest supported number of decimal places.
pub const MAX_DECIMALS: u32 = 8;

/// Decimal places used when a request does not say.
pub const DEFAULT_DECIMALS: u32 = 2;

/// Decimal context for one calculation: how many fractional digits are kept
/// and how values are rounded to them.
///
/// Rounding is half-up in the monetary sense: ties go away from zero, so
/// `0.125` becomes `0.13` and `-0.125` becomes `-0.13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    decimals: u32,
}

impl Precision {
    /// Create a precision with `decimals` fractional digits.
    pub fn new(decimals: u32) -> Result<Self> {
        if decimals > MAX_DECIMALS {
            return Err(SplitError::PrecisionOutOfRange {
                decimals,
                max: MAX_DECIMALS,
            });
        }
        Ok(Self { decimals })
    }

    /// Create a precision, clamping `decimals` into `[0, MAX_DECIMALS]`.
    pub fn clamped(decimals: i64) -> Self {
        Self {
            decimals: decimals.clamp(0, i64::from(MAX_DECIMALS)) as u32,
        }
    }

    /// Number of fractional digits.
    pub fn decimals(self) -> u32 {
        self.decimals
    }

    /// The smallest representable step, `10^-decimals`.
    pub fn unit(self) -> Decimal {
        Decimal::new(1, self.decimals)
    }

    /// Round half-up to this precision and carry exactly `decimals`
    /// fractional digits, so `10` at two places reads back as `10.00`.
    ///
    /// Fails with [`SplitError::Overflow`] when the value has too many integer
    /// digits to also hold `decimals` places in 28 significant digits.
    pub fn round(self, value: Decimal) -> Result<Decimal> {
        let mut rounded =
            value.round_dp_with_strategy(self.decimals, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(self.decimals);
        self.exact(rounded, "rounded value")
    }

    /// Check that `value` carries exactly `decimals` places. `rust_decimal`
    /// drops fractional digits instead of failing once a result needs more
    /// than 28 significant digits.
    pub(crate) fn exact(self, value: Decimal, what: &'static str) -> Result<Decimal> {
        if value.scale() == self.decimals {
            Ok(value)
        } else {
            Err(SplitError::Overflow(what))
        }
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Precision::new(9),
            Err(SplitError::PrecisionOutOfRange {
                decimals: 9,
                max: MAX_DECIMALS
            })
        );
        assert!(Precision::new(0).is_ok());
        assert!(Precision::new(8).is_ok());
    }

    #[test]
    fn clamps_into_range() {
        assert_eq!(Precision::clamped(-3).decimals(), 0);
        assert_eq!(Precision::clamped(5).decimals(), 5);
        assert_eq!(Precision::clamped(42).decimals(), MAX_DECIMALS);
        assert_eq!(Precision::clamped(i64::MAX).decimals(), MAX_DECIMALS);
    }

    #[test]
    fn default_is_two_places() {
        assert_eq!(Precision::default().decimals(), 2);
        assert_eq!(Precision::default().unit(), dec("0.01"));
    }

    #[test]
    fn unit_matches_decimals() {
        assert_eq!(Precision::clamped(0).unit(), dec("1"));
        assert_eq!(Precision::clamped(8).unit(), dec("0.00000001"));
    }

    #[test]
    fn ties_round_away_from_zero() {
        let p = Precision::default();
        assert_eq!(p.round(dec("0.125")).unwrap(), dec("0.13"));
        assert_eq!(p.round(dec("-0.125")).unwrap(), dec("-0.13"));
        // Banker's rounding would give 0.02 here.
        assert_eq!(p.round(dec("0.025")).unwrap(), dec("0.03"));
        assert_eq!(p.round(dec("0.0249")).unwrap(), dec("0.02"));
        assert_eq!(Precision::clamped(0).round(dec("2.5")).unwrap(), dec("3"));
    }

    #[test]
    fn round_pads_to_scale() {
        let p = Precision::clamped(4);
        assert_eq!(p.round(dec("10")).unwrap().to_string(), "10.0000");
        assert_eq!(p.round(dec("1.23456")).unwrap().to_string(), "1.2346");
    }

    #[test]
    fn rounding_is_idempotent() {
        for decimals in 0..=MAX_DECIMALS {
            let p = Precision::new(decimals).unwrap();
            for text in ["123.456789123", "-0.5", "0.00000000499", "987654321.987654321"] {
                let once = p.round(dec(text)).unwrap();
                let twice = p.round(once).unwrap();
                assert_eq!(once, twice);
                assert_eq!(once.scale(), twice.scale());
            }
        }
    }

    #[test]
    fn round_fails_when_places_do_not_fit() {
        // 20 integer digits + 8 places is the widest value that always fits.
        let widest = dec("99999999999999999999.1234567");
        assert_eq!(
            Precision::clamped(8).round(widest).unwrap().to_string(),
            "99999999999999999999.12345670"
        );

        let too_wide = dec("1000000000000000000000");
        assert_eq!(
            Precision::clamped(8).round(too_wide),
            Err(SplitError::Overflow("rounded value"))
        );
        assert_eq!(Precision::clamped(0).round(too_wide).unwrap(), too_wide);
    }
}
