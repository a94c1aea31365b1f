//! Fixtures
//!
//! Seed a catalog and ledger from a YAML document:
//!
//! ```yaml
//! products:
//!   - id: 1
//!     name: Milk
//!     kind: grocery
//!     price: "2.50"
//!     quantity: 10
//! orders:
//!   - product_id: 1
//!     quantity: 4
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::Catalog,
    orders::{Ledger, Order},
    prices::{Price, PriceError},
    products::{Product, ProductId, ProductKind},
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Product name spans more than one line
    #[error("Invalid name for product {id}: names cannot contain line breaks")]
    InvalidName {
        /// Product the name belongs to
        id: ProductId,
    },

    /// Invalid price format
    #[error("Invalid price for product {id}: {source}")]
    InvalidPrice {
        /// Product the price belongs to
        id: ProductId,

        /// Price parse failure
        source: PriceError,
    },
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product kind, defaults to grocery
    #[serde(default)]
    pub kind: ProductKind,

    /// Product price (e.g., "2.99")
    pub price: String,

    /// Units in stock
    #[serde(default)]
    pub quantity: u32,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        if fixture.name.contains(['\r', '\n']) {
            return Err(FixtureError::InvalidName { id: fixture.id });
        }

        let price = fixture
            .price
            .parse::<Price>()
            .map_err(|source| FixtureError::InvalidPrice {
                id: fixture.id,
                source,
            })?;

        Ok(Product::new(
            fixture.kind,
            fixture.id,
            fixture.name,
            price,
            fixture.quantity,
        ))
    }
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Referenced product id
    pub product_id: ProductId,

    /// Units ordered
    pub quantity: u32,
}

impl From<OrderFixture> for Order {
    fn from(fixture: OrderFixture) -> Self {
        Order::new(fixture.product_id, fixture.quantity)
    }
}

/// Fixture document
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    /// Products, in catalog order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Orders, in ledger order
    #[serde(default)]
    pub orders: Vec<OrderFixture>,
}

impl Fixture {
    /// Parse a fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Build the catalog and ledger described by this fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if any product name or price is invalid.
    pub fn build(self) -> Result<(Catalog, Ledger), FixtureError> {
        let catalog = self
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Catalog, _>>()?;

        let ledger = self.orders.into_iter().map(Order::from).collect();

        Ok((catalog, ledger))
    }
}
