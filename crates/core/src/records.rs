//! Product records
//!
//! The line format used to persist a catalog:
//!
//! ```text
//! ID: <id>, Name: <name>, Price: <price>, Quantity: <quantity>
//! ```
//!
//! The format carries no product kind, so parsed products get [`ProductKind::default`].

use std::num::ParseIntError;

use thiserror::Error;

use crate::{
    prices::PriceError,
    products::{Product, ProductId, ProductKind},
};

const ID_PREFIX: &str = "ID: ";
const NAME_SEPARATOR: &str = ", Name: ";
const PRICE_SEPARATOR: &str = ", Price: ";
const QUANTITY_SEPARATOR: &str = ", Quantity: ";

/// A record line that could not be turned into a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The line is empty or whitespace only.
    #[error("blank line")]
    Blank,

    /// A field label is missing from the line.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// The id is not a non-negative integer.
    #[error("invalid id {text:?}: {source}")]
    InvalidId {
        /// Raw id text
        text: String,

        /// Integer parse failure
        source: ParseIntError,
    },

    /// The price is not a non-negative decimal.
    #[error(transparent)]
    InvalidPrice(#[from] PriceError),

    /// The quantity is not a non-negative integer.
    #[error("invalid quantity {text:?}: {source}")]
    InvalidQuantity {
        /// Raw quantity text
        text: String,

        /// Integer parse failure
        source: ParseIntError,
    },
}

/// Formats a product as a single record line.
pub fn format_record(product: &Product) -> String {
    product.to_string()
}

/// Parses a single record line.
///
/// Price and quantity are located from the end of the line, so names may contain commas.
///
/// # Errors
///
/// Returns a [`RecordError`] describing the first problem found in the line.
pub fn parse_record(line: &str) -> Result<Product, RecordError> {
    let line = line.trim();

    if line.is_empty() {
        return Err(RecordError::Blank);
    }

    let rest = line
        .strip_prefix(ID_PREFIX)
        .ok_or(RecordError::MissingField("ID"))?;

    let (id_text, rest) = rest
        .split_once(NAME_SEPARATOR)
        .ok_or(RecordError::MissingField("Name"))?;

    let (rest, quantity_text) = rest
        .rsplit_once(QUANTITY_SEPARATOR)
        .ok_or(RecordError::MissingField("Quantity"))?;

    let (name, price_text) = rest
        .rsplit_once(PRICE_SEPARATOR)
        .ok_or(RecordError::MissingField("Price"))?;

    let id = id_text
        .parse::<ProductId>()
        .map_err(|source| RecordError::InvalidId {
            text: id_text.to_string(),
            source,
        })?;

    let price = price_text.parse()?;

    let quantity = quantity_text
        .trim()
        .parse::<u32>()
        .map_err(|source| RecordError::InvalidQuantity {
            text: quantity_text.to_string(),
            source,
        })?;

    Ok(Product::new(
        ProductKind::default(),
        id,
        name,
        price,
        quantity,
    ))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_well_formed_line() -> TestResult {
        let product = parse_record("ID: 1, Name: Milk, Price: 2.5, Quantity: 10")?;

        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Milk");
        assert_eq!(product.price, "2.5".parse()?);
        assert_eq!(product.quantity, 10);
        assert_eq!(product.kind, ProductKind::Grocery);

        Ok(())
    }

    #[test]
    fn tolerates_crlf_and_padding() -> TestResult {
        let product = parse_record("  ID: 7, Name: Kettle, Price: 19.99, Quantity: 2\r\n")?;

        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.quantity, 2);

        Ok(())
    }

    #[test]
    fn names_may_contain_commas() -> TestResult {
        let line = "ID: 3, Name: Eggs, free range, Price: 3, Quantity: 12";
        let product = parse_record(line)?;

        assert_eq!(product.name, "Eggs, free range");
        assert_eq!(format_record(&product), line);

        Ok(())
    }

    #[test]
    fn blank_line_is_rejected() {
        assert_eq!(parse_record("   "), Err(RecordError::Blank));
    }

    #[test]
    fn missing_fields_are_reported() {
        assert_eq!(
            parse_record("Milk, 2.5, 10"),
            Err(RecordError::MissingField("ID"))
        );
        assert_eq!(
            parse_record("ID: 1, Price: 2.5, Quantity: 10"),
            Err(RecordError::MissingField("Name"))
        );
        assert_eq!(
            parse_record("ID: 1, Name: Milk, Price: 2.5"),
            Err(RecordError::MissingField("Quantity"))
        );
        assert_eq!(
            parse_record("ID: 1, Name: Milk, Quantity: 10"),
            Err(RecordError::MissingField("Price"))
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            parse_record("ID: -1, Name: Milk, Price: 2.5, Quantity: 10"),
            Err(RecordError::InvalidId { .. })
        ));
        assert!(matches!(
            parse_record("ID: 1, Name: Milk, Price: cheap, Quantity: 10"),
            Err(RecordError::InvalidPrice(PriceError::Invalid(_)))
        ));
        assert!(matches!(
            parse_record("ID: 1, Name: Milk, Price: -2, Quantity: 10"),
            Err(RecordError::InvalidPrice(PriceError::Negative(_)))
        ));
        assert!(matches!(
            parse_record("ID: 1, Name: Milk, Price: 2.5, Quantity: many"),
            Err(RecordError::InvalidQuantity { .. })
        ));
    }
}
