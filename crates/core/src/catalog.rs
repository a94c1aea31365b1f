//! Catalog

use std::slice;

use tracing::{debug, warn};

use crate::{
    products::{Product, ProductId},
    records::{format_record, parse_record},
};

/// Ordered collection of products.
///
/// Products keep their insertion order and are never removed or changed once added.
/// Identifiers are not checked for uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the end of the catalog.
    pub fn add(&mut self, product: Product) {
        debug!(id = %product.id, kind = %product.kind, "adding product");

        self.products.push(product);
    }

    /// All products, in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over the products in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns the first product added with the given id.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// One record line per product, in insertion order.
    pub fn serialize(&self) -> Vec<String> {
        self.products.iter().map(format_record).collect()
    }

    /// Parse record lines into products, skipping any line that is not a valid record.
    pub fn deserialize<I>(lines: I) -> Vec<Product>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| match parse_record(line.as_ref()) {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!(line = idx + 1, %error, "skipping malformed product record");
                    None
                }
            })
            .collect()
    }

    /// Parse record lines and append the products to this catalog.
    ///
    /// Returns the number of products appended.
    pub fn load<I>(&mut self, lines: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let products = Self::deserialize(lines);
        let count = products.len();

        self.extend(products);

        debug!(count, total = self.len(), "loaded products");

        count
    }
}

impl FromIterator<Product> for Catalog {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}

impl Extend<Product> for Catalog {
    fn extend<I: IntoIterator<Item = Product>>(&mut self, iter: I) {
        self.products.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::products::ProductKind;

    use super::*;

    fn milk() -> TestResult<Product> {
        Ok(Product::grocery(ProductId::new(1), "Milk", "2.5".parse()?, 10))
    }

    fn radio() -> TestResult<Product> {
        Ok(Product::electronics(ProductId::new(2), "Radio", "40.0".parse()?, 3))
    }

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.list().is_empty());
    }

    #[test]
    fn list_preserves_insertion_order() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.add(milk()?);
        catalog.add(radio()?);

        assert_eq!(catalog.list(), [milk()?, radio()?]);
        assert_eq!(catalog.list(), catalog.list());

        Ok(())
    }

    #[test]
    fn find_by_id_returns_first_match() -> TestResult {
        let mut catalog = Catalog::new();

        catalog.add(milk()?);
        catalog.add(Product::electronics(ProductId::new(1), "Toaster", "15".parse()?, 1));

        let found = catalog.find_by_id(ProductId::new(1)).ok_or("expected product")?;

        assert_eq!(found.name, "Milk");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_id(ProductId::new(99)).is_none());

        Ok(())
    }

    #[test]
    fn serialize_writes_one_line_per_product() -> TestResult {
        let catalog: Catalog = [milk()?, radio()?].into_iter().collect();

        assert_eq!(
            catalog.serialize(),
            [
                "ID: 1, Name: Milk, Price: 2.5, Quantity: 10",
                "ID: 2, Name: Radio, Price: 40, Quantity: 3",
            ]
        );

        Ok(())
    }

    #[test]
    fn empty_catalog_serializes_to_nothing() {
        assert!(Catalog::new().serialize().is_empty());
        assert!(Catalog::deserialize(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn deserialize_skips_malformed_lines() {
        let products = Catalog::deserialize([
            "ID: 1, Name: Milk, Price: 2.5, Quantity: 10",
            "",
            "garbage",
            "ID: 2, Name: Radio, Price: 40, Quantity: 3",
        ]);

        let ids: Vec<_> = products.iter().map(|product| product.id.get()).collect();

        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn deserialize_loses_kind() -> TestResult {
        let catalog: Catalog = [radio()?].into_iter().collect();

        let products = Catalog::deserialize(catalog.serialize());
        let product = products.first().ok_or("expected product")?;

        assert_eq!(product.kind, ProductKind::Grocery);
        assert_eq!(product.name, "Radio");

        Ok(())
    }

    #[test]
    fn load_appends_to_existing_products() -> TestResult {
        let mut catalog = Catalog::new();
        catalog.add(milk()?);

        let loaded = catalog.load(["ID: 2, Name: Radio, Price: 40, Quantity: 3", "oops"]);

        assert_eq!(loaded, 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.iter().map(|product| product.name.as_str()).collect::<Vec<_>>(),
            ["Milk", "Radio"]
        );

        Ok(())
    }
}
