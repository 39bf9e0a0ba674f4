use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;
#[cfg(feature = "backend")]
use rusqlite::{
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
    ToSql,
};

/// Base-10 fixed point number with exactly two decimal places, held as a
/// count of hundredths.
///
/// Weights and distances go through this type end to end so sums and
/// products never pick up binary floating point drift. On the wire it is
/// always a string with two decimals (`"1500.00"`); on input it accepts
/// either a string or a JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed2(i128);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFixedError {
    #[error("A valid number is required")]
    Empty,
    #[error("A valid number is required")]
    InvalidDigit,
    #[error("Ensure that there are no more than 2 decimal places")]
    TooManyDecimalPlaces,
    #[error("Number is too large")]
    Overflow,
}

impl Fixed2 {
    pub const ZERO: Fixed2 = Fixed2(0);
    const SCALE: i128 = 100;

    /// Largest value a client may submit: 7 digits, 2 of them after the point
    pub const INPUT_MAX: Fixed2 = Fixed2(9_999_999);

    pub const fn from_hundredths(hundredths: i128) -> Self {
        Self(hundredths)
    }

    pub const fn from_int(value: i128) -> Self {
        Self(value * Self::SCALE)
    }

    pub const fn hundredths(&self) -> i128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Exact multiplication by an integer count
    pub fn mul_int(self, n: u64) -> Self {
        Self(self.0 * n as i128)
    }

    /// Divides by an integer count, rounding half to even at the second
    /// decimal. Returns `None` for a zero divisor or one past `i128::MAX`.
    pub fn div_int(self, n: u128) -> Option<Self> {
        let divisor = i128::try_from(n).ok().filter(|d| *d != 0)?;
        let quotient = self.0.div_euclid(divisor);
        let remainder = self.0.rem_euclid(divisor);

        let round_up = match remainder.cmp(&(divisor - remainder)) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => quotient % 2 != 0,
        };

        Some(Self(if round_up { quotient + 1 } else { quotient }))
    }
}

impl fmt::Display for Fixed2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl FromStr for Fixed2 {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.as_bytes().first() {
            None => return Err(ParseFixedError::Empty),
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            Some(_) => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(ParseFixedError::Empty);
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseFixedError::InvalidDigit);
        }

        // Trailing zeros past the second place don't change the value
        let frac = frac.trim_end_matches('0');
        if frac.len() > 2 {
            return Err(ParseFixedError::TooManyDecimalPlaces);
        }

        let mut value: i128 = 0;
        for b in whole.bytes().chain(frac.bytes()).chain("00"[frac.len()..].bytes()) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as i128))
                .ok_or(ParseFixedError::Overflow)?;
        }

        Ok(Self(if negative { -value } else { value }))
    }
}

impl Add for Fixed2 {
    type Output = Fixed2;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Fixed2 {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Fixed2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Fixed2::ZERO, Add::add)
    }
}

impl Serialize for Fixed2 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Fixed2Visitor;

impl<'de> Visitor<'de> for Fixed2Visitor {
    type Value = Fixed2;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal number with at most 2 decimal places")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Fixed2::from_int(v as i128))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Fixed2::from_int(v as i128))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom(ParseFixedError::InvalidDigit));
        }
        // Display gives the shortest string that round trips, so 50.1 stays "50.1"
        v.to_string().parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Fixed2 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(Fixed2Visitor)
    }
}

// Stored as INTEGER hundredths
#[cfg(feature = "backend")]
impl ToSql for Fixed2 {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        i64::try_from(self.0)
            .map(ToSqlOutput::from)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }
}

#[cfg(feature = "backend")]
impl FromSql for Fixed2 {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(|v| Fixed2(v as i128))
    }
}
