//! Relative age expressions, as accepted by `-c/--ctime`.
//!
//! An expression is a run of ASCII digits, optionally followed by exactly one
//! unit suffix. Without a suffix the count is in days.
//!
//! | suffix | unit    |
//! |--------|---------|
//! | `y`    | years   |
//! | `M`    | months  |
//! | `w`    | weeks   |
//! | `d`    | days    |
//! | `h`    | hours   |
//! | `m`    | minutes |
//! | `s`    | seconds |
//!
//! Suffixes are case sensitive. `5m` is five minutes while `5M` is five
//! months, which is an easy typo to make and is not cross-checked.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Days, Months, TimeDelta, Utc};

use crate::error::ConfigError;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum AgeUnit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl AgeUnit {
    /// Map a suffix character to its unit. `m` is minutes, `M` is months.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        Some(match c {
            'y' => Self::Years,
            'M' => Self::Months,
            'w' => Self::Weeks,
            'd' => Self::Days,
            'h' => Self::Hours,
            'm' => Self::Minutes,
            's' => Self::Seconds,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Years => 'y',
            Self::Months => 'M',
            Self::Weeks => 'w',
            Self::Days => 'd',
            Self::Hours => 'h',
            Self::Minutes => 'm',
            Self::Seconds => 's',
        }
    }
}

/// A parsed relative age, e.g. `2w`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Age {
    pub count: u32,
    pub unit: AgeUnit,
}

impl Age {
    /// The instant `self` before `now`.
    ///
    /// Years, months, weeks and days are subtracted on the calendar, clamping
    /// to the last day of a shorter month. Hours, minutes and seconds are
    /// fixed durations.
    ///
    /// Returns `None` if the result is not representable.
    #[must_use]
    pub fn before(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let count = self.count;
        match self.unit {
            AgeUnit::Years => now.checked_sub_months(Months::new(count.checked_mul(12)?)),
            AgeUnit::Months => now.checked_sub_months(Months::new(count)),
            AgeUnit::Weeks => now.checked_sub_days(Days::new(u64::from(count) * 7)),
            AgeUnit::Days => now.checked_sub_days(Days::new(u64::from(count))),
            AgeUnit::Hours => now.checked_sub_signed(TimeDelta::try_hours(i64::from(count))?),
            AgeUnit::Minutes => now.checked_sub_signed(TimeDelta::try_minutes(i64::from(count))?),
            AgeUnit::Seconds => now.checked_sub_signed(TimeDelta::try_seconds(i64::from(count))?),
        }
    }
}

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.unit.suffix())
    }
}

impl FromStr for Age {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidCtime {
            expr: s.to_string(),
        };

        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return Err(invalid());
        }
        let (count, suffix) = s.split_at(digits);

        let mut chars = suffix.chars();
        let unit = match (chars.next(), chars.next()) {
            (None, _) => AgeUnit::Days,
            (Some(c), None) => AgeUnit::from_suffix(c).ok_or_else(invalid)?,
            (Some(_), Some(_)) => return Err(invalid()),
        };

        // Counts are capped at i32::MAX, same as the original tool's integer parsing.
        let count = count
            .parse::<i32>()
            .map_err(|_| ConfigError::CtimeOutOfRange {
                expr: s.to_string(),
            })?
            .unsigned_abs();

        Ok(Self { count, unit })
    }
}

/// Resolve a ctime expression into an absolute cutoff instant relative to `now`.
///
/// # Errors
/// Returns [`ConfigError::InvalidCtime`] if the expression is malformed, or
/// [`ConfigError::CtimeOutOfRange`] if the count or the result does not fit.
pub fn resolve(expr: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ConfigError> {
    let age: Age = expr.parse()?;
    age.before(now).ok_or_else(|| ConfigError::CtimeOutOfRange {
        expr: expr.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Months, TimeDelta, Utc};
    use proptest::prop_assert_eq;
    use rstest::rstest;
    use test_strategy::proptest;

    use crate::error::ConfigError;
    use crate::tests::{at, fixed_now};

    use super::{resolve, Age, AgeUnit};

    fn expected_before(count: u32, unit: AgeUnit, now: DateTime<Utc>) -> DateTime<Utc> {
        let n = i64::from(count);
        match unit {
            AgeUnit::Years => now - Months::new(count * 12),
            AgeUnit::Months => now - Months::new(count),
            AgeUnit::Weeks => now - TimeDelta::days(n * 7),
            AgeUnit::Days => now - TimeDelta::days(n),
            AgeUnit::Hours => now - TimeDelta::hours(n),
            AgeUnit::Minutes => now - TimeDelta::minutes(n),
            AgeUnit::Seconds => now - TimeDelta::seconds(n),
        }
    }

    #[rstest]
    #[case("7", at(2024, 3, 24, 12, 0, 0))]
    #[case("7d", at(2024, 3, 24, 12, 0, 0))]
    #[case("0", at(2024, 3, 31, 12, 0, 0))]
    #[case("007", at(2024, 3, 24, 12, 0, 0))]
    #[case("1y", at(2023, 3, 31, 12, 0, 0))]
    #[case("1M", at(2024, 2, 29, 12, 0, 0))]
    #[case("13M", at(2023, 2, 28, 12, 0, 0))]
    #[case("2w", at(2024, 3, 17, 12, 0, 0))]
    #[case("5h", at(2024, 3, 31, 7, 0, 0))]
    #[case("30m", at(2024, 3, 31, 11, 30, 0))]
    #[case("15s", at(2024, 3, 31, 11, 59, 45))]
    fn must_resolve(#[case] expr: &str, #[case] expected: DateTime<Utc>) {
        assert_eq!(resolve(expr, fixed_now()).expect("resolve"), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("5x")]
    #[case("-3d")]
    #[case("")]
    #[case("d")]
    #[case("5dd")]
    #[case("5D")]
    #[case(" 5")]
    #[case("5 ")]
    #[case("+5")]
    #[case("1.5d")]
    fn must_reject_malformed(#[case] expr: &str) {
        let err = resolve(expr, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidCtime {
                expr: expr.to_string()
            }
        );
        assert!(err.is_invalid_argument());
    }

    #[rstest]
    #[case("2147483648")]
    #[case("99999999999d")]
    #[case("2147483647y")]
    #[case("2147483647d")]
    fn must_reject_out_of_range(#[case] expr: &str) {
        let err = resolve(expr, fixed_now()).unwrap_err();
        assert!(matches!(err, ConfigError::CtimeOutOfRange { .. }), "{err:?}");
        assert!(err.is_invalid_argument());
    }

    // Lowercase `m` and uppercase `M` are a common mix-up. Pin both down.
    #[test]
    fn minutes_and_months_differ() {
        let now = fixed_now();
        assert_eq!(
            resolve("1m", now).expect("minutes"),
            at(2024, 3, 31, 11, 59, 0)
        );
        assert_eq!(
            resolve("1M", now).expect("months"),
            at(2024, 2, 29, 12, 0, 0)
        );
    }

    #[test]
    fn must_display_canonical() {
        let age: Age = "007".parse().expect("parse");
        assert_eq!(age.to_string(), "7d");
        let age: Age = "3M".parse().expect("parse");
        assert_eq!(age.to_string(), "3M");
    }

    #[proptest]
    fn bare_digits_are_days(
        #[strategy(0u32..100_000)] n: u32,
        #[strategy(0i64..4_102_444_800)] now_secs: i64,
    ) {
        let now = DateTime::from_timestamp(now_secs, 0).expect("in range");
        prop_assert_eq!(
            resolve(&n.to_string(), now).expect("resolve"),
            now - TimeDelta::days(i64::from(n))
        );
    }

    #[proptest]
    fn suffix_subtracts_units(
        #[strategy(0u32..5_000)] n: u32,
        unit: AgeUnit,
        #[strategy(0i64..4_102_444_800)] now_secs: i64,
    ) {
        let now = DateTime::from_timestamp(now_secs, 0).expect("in range");
        let expr = format!("{n}{}", unit.suffix());
        prop_assert_eq!(
            resolve(&expr, now).expect("resolve"),
            expected_before(n, unit, now)
        );
    }

    #[proptest]
    fn suffix_roundtrips_unit(unit: AgeUnit) {
        prop_assert_eq!(AgeUnit::from_suffix(unit.suffix()), Some(unit));
    }
}
