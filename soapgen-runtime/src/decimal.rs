//! Arbitrary-precision decimal values.
//!
//! `xsd:decimal` has no fixed precision, so values are kept as a big-integer
//! mantissa and a power-of-ten exponent instead of a binary float.

use crate::error::XmlDeserializationError;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// Largest exponent magnitude accepted when parsing.
pub const MAX_EXPONENT: i64 = 4096;

/// Decimal number with unbounded precision.
///
/// The value is `mantissa * 10^exponent`. Values are kept normalized (no
/// trailing zero digits in the mantissa, zero has exponent 0) so that equal
/// numbers compare equal regardless of how they were written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct XmlDecimal {
    mantissa: BigInt,
    exponent: i64,
}

impl XmlDecimal {
    /// Creates a decimal value.
    ///
    /// # Arguments
    /// * `mantissa` - The mantissa (significand)
    /// * `exponent` - The exponent (power of 10)
    #[must_use]
    pub fn new(mantissa: impl Into<BigInt>, exponent: i64) -> Self {
        Self::normalized(mantissa.into(), exponent)
    }

    /// Returns zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the normalized mantissa.
    #[must_use]
    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    /// Returns the normalized exponent.
    #[must_use]
    pub const fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Returns true if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    /// Returns true if the value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    /// Converts to the nearest floating point value.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    fn normalized(mut mantissa: BigInt, mut exponent: i64) -> Self {
        if mantissa.is_zero() {
            return Self::default();
        }
        let ten = BigInt::from(10u8);
        while (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            exponent += 1;
        }
        Self { mantissa, exponent }
    }
}

impl From<i64> for XmlDecimal {
    fn from(value: i64) -> Self {
        Self::new(value, 0)
    }
}

impl From<u64> for XmlDecimal {
    fn from(value: u64) -> Self {
        Self::new(value, 0)
    }
}

impl FromStr for XmlDecimal {
    type Err = XmlDeserializationError;

    /// Parses `[+-]? digits? (. digits)? ([eE] [+-]? digits)?` with at least
    /// one mantissa digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (number, exponent_text) = match unsigned.find(['e', 'E']) {
            Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
            None => (unsigned, None),
        };
        let (int_part, frac_part) = number.split_once('.').unwrap_or((number, ""));

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(XmlDeserializationError::CannotDeserialize);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !all_digits(frac_part) {
            return Err(XmlDeserializationError::CannotDeserialize);
        }

        let written_exponent = match exponent_text {
            Some(text) => parse_exponent(text)?,
            None => 0,
        };

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or(XmlDeserializationError::CannotDeserialize)?;
        let mantissa = if negative { -magnitude } else { magnitude };

        let value = Self::normalized(mantissa, written_exponent - frac_part.len() as i64);
        if value.exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
            return Err(XmlDeserializationError::CannotDeserialize);
        }
        Ok(value)
    }
}

fn parse_exponent(text: &str) -> Result<i64, XmlDeserializationError> {
    let exponent: i64 = text
        .parse()
        .map_err(|_| XmlDeserializationError::CannotDeserialize)?;
    if exponent.unsigned_abs() > MAX_EXPONENT.unsigned_abs() {
        return Err(XmlDeserializationError::CannotDeserialize);
    }
    Ok(exponent)
}

impl fmt::Display for XmlDecimal {
    /// Writes plain notation, never an exponent.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let digits = self.mantissa.magnitude().to_string();

        if self.exponent >= 0 {
            let zeros = "0".repeat(self.exponent as usize);
            return write!(f, "{sign}{digits}{zeros}");
        }

        let scale = self.exponent.unsigned_abs() as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}
