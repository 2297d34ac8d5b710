//! # Monetary Amounts
//!
//! Voucher amounts are stored as whole pesos plus centavos. Conversion from a
//! floating point or string input rounds to the nearest centavo and carries a
//! rounded-up `100` centavos into the peso part, so `0.999` becomes `1.00`.
//!
//! ```
//! use cashout::amount::Amount;
//!
//! let amount: Amount = "1234.50".parse()?;
//! assert_eq!(amount.pesos(), 1234);
//! assert_eq!(amount.centavos(), 50);
//! assert_eq!(amount.to_string(), "1234.50");
//!
//! let carried = Amount::from_f64(0.999)?;
//! assert_eq!((carried.pesos(), carried.centavos()), (1, 0));
//! # Ok::<(), cashout::CashoutError>(())
//! ```

pub mod words;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CashoutError;

pub use words::{AmountWords, WordCase, amount_in_words, words_of};

/// A non-negative amount with centavo precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    pesos: u64,
    centavos: u8,
}

impl Amount {
    /// Largest whole-peso value; the word formatter's scale words stop at BILLION.
    pub const MAX_PESOS: u64 = 999_999_999_999;

    pub const ZERO: Self = Self {
        pesos: 0,
        centavos: 0,
    };

    /// Build from already-split parts.
    ///
    /// ## Errors
    ///
    /// `InvalidAmount` when `centavos >= 100` or `pesos` exceeds [`Self::MAX_PESOS`].
    pub fn new(pesos: u64, centavos: u8) -> Result<Self, CashoutError> {
        if centavos >= 100 {
            return Err(CashoutError::InvalidAmount(format!(
                "{centavos} centavos is not below 100"
            )));
        }
        if pesos > Self::MAX_PESOS {
            return Err(CashoutError::InvalidAmount(format!(
                "{pesos} exceeds the maximum of {}",
                Self::MAX_PESOS
            )));
        }
        Ok(Self { pesos, centavos })
    }

    /// Round a float to the nearest centavo.
    ///
    /// ## Errors
    ///
    /// `InvalidAmount` for NaN, infinities, negative values and values above
    /// [`Self::MAX_PESOS`].
    pub fn from_f64(value: f64) -> Result<Self, CashoutError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CashoutError::InvalidAmount(format!(
                "{value} is not a finite non-negative number"
            )));
        }

        let whole = value.floor();
        if whole > Self::MAX_PESOS as f64 {
            return Err(CashoutError::InvalidAmount(format!(
                "{value} exceeds the maximum of {}",
                Self::MAX_PESOS
            )));
        }

        let mut pesos = whole as u64;
        let mut centavos = ((value - whole) * 100.0).round() as u8;
        if centavos >= 100 {
            pesos += 1;
            centavos = 0;
        }
        Self::new(pesos, centavos)
    }

    pub fn pesos(&self) -> u64 {
        self.pesos
    }

    pub fn centavos(&self) -> u8 {
        self.centavos
    }

    /// Spell this amount out (upper case by default).
    pub fn words(self) -> AmountWords {
        AmountWords::new(self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.pesos, self.centavos)
    }
}

impl FromStr for Amount {
    type Err = CashoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| CashoutError::InvalidAmount(format!("'{trimmed}' is not a number")))?;
        Self::from_f64(value)
    }
}

/// Amount as it arrives from a caller: JSON number or numeric string.
///
/// Any other JSON value (`true`, an array, an object) decodes into
/// `Invalid` so it surfaces as `InvalidAmount` rather than as a malformed
/// request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
    Invalid(serde_json::Value),
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl TryFrom<AmountInput> for Amount {
    type Error = CashoutError;

    fn try_from(input: AmountInput) -> Result<Self, Self::Error> {
        match input {
            AmountInput::Number(n) => Amount::from_f64(n),
            AmountInput::Text(s) => s.parse(),
            AmountInput::Invalid(value) => Err(CashoutError::InvalidAmount(format!(
                "{value} is not a number"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_string() {
        let a: Amount = " 1234.5 ".parse().unwrap();
        assert_eq!(a, Amount::new(1234, 50).unwrap());
        assert_eq!(a.to_string(), "1234.50");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(Amount::from_f64(1.01).unwrap(), Amount::new(1, 1).unwrap());
        assert_eq!(Amount::from_f64(2.675).unwrap().pesos(), 2);
        assert_eq!(Amount::from_f64(10.004).unwrap(), Amount::new(10, 0).unwrap());
    }

    #[test]
    fn test_carry_into_pesos() {
        assert_eq!(Amount::from_f64(0.999).unwrap(), Amount::new(1, 0).unwrap());
        assert_eq!(Amount::from_f64(41.996).unwrap(), Amount::new(42, 0).unwrap());
    }

    #[test]
    fn test_rejects_invalid() {
        for bad in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e13] {
            assert!(
                matches!(Amount::from_f64(bad), Err(CashoutError::InvalidAmount(_))),
                "{bad} should be rejected"
            );
        }
        assert!("abc".parse::<Amount>().is_err());
        assert!("".parse::<Amount>().is_err());
        assert!("inf".parse::<Amount>().is_err());
        assert!(Amount::new(1, 100).is_err());
    }

    #[test]
    fn test_input_conversion() {
        let from_number: AmountInput = serde_json::from_str("25.5").unwrap();
        let from_text: AmountInput = serde_json::from_str("\"25.50\"").unwrap();
        assert_eq!(Amount::try_from(from_number).unwrap(), Amount::new(25, 50).unwrap());
        assert_eq!(Amount::try_from(from_text).unwrap(), Amount::new(25, 50).unwrap());
    }
}
