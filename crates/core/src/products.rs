//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::Deserialize;

use crate::prices::Price;

/// Product identifier, chosen by whoever creates the product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product identifier.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Product kind. Only affects how a product is labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Grocery product
    #[default]
    Grocery,

    /// Electronics product
    Electronics,
}

impl ProductKind {
    /// Display label for the kind.
    pub const fn label(self) -> &'static str {
        match self {
            ProductKind::Grocery => "Grocery",
            ProductKind::Electronics => "Electronics",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Price,

    /// Units in stock
    pub quantity: u32,

    /// Product kind
    pub kind: ProductKind,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        kind: ProductKind,
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            kind,
        }
    }

    /// Creates a new grocery product.
    pub fn grocery(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
    ) -> Self {
        Self::new(ProductKind::Grocery, id, name, price, quantity)
    }

    /// Creates a new electronics product.
    pub fn electronics(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        quantity: u32,
    ) -> Self {
        Self::new(ProductKind::Electronics, id, name, price, quantity)
    }

    /// The record line prefixed with the kind label, e.g.
    /// `Grocery Product - ID: 1, Name: Milk, Price: 2.5, Quantity: 10`.
    pub fn display_line(&self) -> String {
        format!("{} Product - {self}", self.kind.label())
    }
}

/// Formats the persisted record: `ID: <id>, Name: <name>, Price: <price>, Quantity: <quantity>`.
///
/// Line breaks in the name are written as spaces so a record is always one line.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Price: {}, Quantity: {}",
            self.id,
            self.name.replace(['\r', '\n'], " "),
            self.price,
            self.quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn kind_labels() {
        assert_eq!(ProductKind::Grocery.label(), "Grocery");
        assert_eq!(ProductKind::Electronics.label(), "Electronics");
        assert_eq!(ProductKind::default(), ProductKind::Grocery);
    }

    #[test]
    fn display_renders_record_format() -> TestResult {
        let milk = Product::grocery(ProductId::new(1), "Milk", "2.50".parse()?, 10);

        assert_eq!(milk.to_string(), "ID: 1, Name: Milk, Price: 2.5, Quantity: 10");

        Ok(())
    }

    #[test]
    fn display_keeps_the_record_on_one_line() -> TestResult {
        let milk = Product::grocery(ProductId::new(1), "Milk\nSemi\r\nSkimmed", "2".parse()?, 1);

        assert_eq!(
            milk.to_string(),
            "ID: 1, Name: Milk Semi  Skimmed, Price: 2, Quantity: 1"
        );

        Ok(())
    }

    #[test]
    fn display_line_uses_kind_label() -> TestResult {
        let radio = Product::electronics(ProductId::new(2), "Radio", "40.0".parse()?, 3);

        assert_eq!(
            radio.display_line(),
            "Electronics Product - ID: 2, Name: Radio, Price: 40, Quantity: 3"
        );

        Ok(())
    }

    #[test]
    fn product_id_parses_trimmed_text() -> TestResult {
        assert_eq!(" 42 ".parse::<ProductId>()?, ProductId::new(42));
        assert!("-1".parse::<ProductId>().is_err());

        Ok(())
    }
}
