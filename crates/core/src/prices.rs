//! Prices

use std::{fmt, ops::Deref, str::FromStr};

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while constructing or parsing a [`Price`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The value is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),

    /// The text is not a decimal number.
    #[error("invalid price: {0:?}")]
    Invalid(String),
}

/// Represents a non-negative unit price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price {
    value: Decimal,
}

impl Price {
    /// Zero price
    pub const ZERO: Price = Price {
        value: Decimal::ZERO,
    };

    /// Creates a new Price
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `value` is below zero.
    pub fn new(value: Decimal) -> Result<Self, PriceError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(PriceError::Negative(value));
        }

        Ok(Price { value })
    }

    /// Price of `quantity` units, or `None` if the total overflows.
    pub fn times(self, quantity: u32) -> Option<Decimal> {
        self.value.checked_mul(Decimal::from(quantity))
    }
}

impl Deref for Price {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let value = Decimal::from_str(trimmed)
            .or_else(|_err| Decimal::from_scientific(trimmed))
            .map_err(|_err| PriceError::Invalid(s.to_string()))?;

        Price::new(value)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.normalize())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_price() -> TestResult {
        let price = Price::new(Decimal::new(250, 2))?;

        assert_eq!(price.value, Decimal::new(25, 1));

        Ok(())
    }

    #[test]
    fn price_derefs_to_decimal() -> TestResult {
        let price: Price = "1.75".parse()?;

        assert_eq!(*price, Decimal::new(175, 2));

        Ok(())
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative(Decimal::new(-1, 0)))
        );
        assert!(matches!("-0.5".parse::<Price>(), Err(PriceError::Negative(_))));
    }

    #[test]
    fn negative_zero_is_zero() -> TestResult {
        let price: Price = "-0".parse()?;

        assert!(price.is_zero());

        Ok(())
    }

    #[test]
    fn garbage_is_invalid() {
        assert_eq!(
            "two pounds".parse::<Price>(),
            Err(PriceError::Invalid("two pounds".to_string()))
        );
    }

    #[test]
    fn scientific_notation_is_accepted() -> TestResult {
        let price: Price = "1e3".parse()?;

        assert_eq!(price.to_string(), "1000");

        Ok(())
    }

    #[test]
    fn display_drops_trailing_zeros() -> TestResult {
        assert_eq!("2.50".parse::<Price>()?.to_string(), "2.5");
        assert_eq!("40.0".parse::<Price>()?.to_string(), "40");
        assert_eq!(Price::ZERO.to_string(), "0");

        Ok(())
    }

    #[test]
    fn times_multiplies_exactly() -> TestResult {
        let price: Price = "0.1".parse()?;

        assert_eq!(price.times(3), Some(Decimal::new(3, 1)));
        assert_eq!(price.times(0), Some(Decimal::ZERO));

        Ok(())
    }

    #[test]
    fn times_reports_overflow() -> TestResult {
        let price = Price::new(Decimal::MAX)?;

        assert_eq!(price.times(2), None);
        assert_eq!(price.times(1), Some(Decimal::MAX));

        Ok(())
    }
}
