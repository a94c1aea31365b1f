//! Orders

use std::slice;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::{
    catalog::Catalog,
    products::{Product, ProductId},
};

/// A customer order for some units of a product.
///
/// The product is referenced by id only and may not exist in any catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    product_id: ProductId,
    quantity: u32,
}

impl Order {
    /// Creates a new order.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// Returns the referenced product id.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the number of units ordered.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Outcome of looking an order's product up in a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The product exists.
    Found {
        /// The first catalog product with the order's id
        product: &'a Product,

        /// Unit price times ordered quantity
        total_price: Decimal,
    },

    /// The product exists but its line total does not fit in a `Decimal`.
    Overflow {
        /// The first catalog product with the order's id
        product: &'a Product,
    },

    /// No product with the order's id exists.
    NotFound,
}

impl Resolution<'_> {
    /// Returns the line total if the product was found and priced.
    pub fn total_price(&self) -> Option<Decimal> {
        match self {
            Resolution::Found { total_price, .. } => Some(*total_price),
            Resolution::Overflow { .. } | Resolution::NotFound => None,
        }
    }
}

/// An order joined against a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedOrder<'a> {
    /// Referenced product id
    pub product_id: ProductId,

    /// Units ordered
    pub quantity: u32,

    /// Lookup result
    pub resolution: Resolution<'a>,
}

/// Append-only list of orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    orders: Vec<Order>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an order. The product id is not checked.
    pub fn add_order(&mut self, product_id: ProductId, quantity: u32) {
        debug!(%product_id, quantity, "adding order");

        self.orders.push(Order::new(product_id, quantity));
    }

    /// All orders, in insertion order.
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    /// Iterate over the orders in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Get the number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Resolve every order against `catalog`, in order.
    pub fn price_orders<'c>(&self, catalog: &'c Catalog) -> Vec<PricedOrder<'c>> {
        self.orders
            .iter()
            .map(|order| {
                let resolution = match catalog.find_by_id(order.product_id) {
                    Some(product) => match product.price.times(order.quantity) {
                        Some(total_price) => Resolution::Found {
                            product,
                            total_price,
                        },
                        None => {
                            warn!(
                                product_id = %order.product_id,
                                quantity = order.quantity,
                                "order total overflowed"
                            );

                            Resolution::Overflow { product }
                        }
                    },
                    None => Resolution::NotFound,
                };

                PricedOrder {
                    product_id: order.product_id,
                    quantity: order.quantity,
                    resolution,
                }
            })
            .collect()
    }

    /// Sum of the line totals of all orders whose product exists in `catalog`.
    ///
    /// Returns `None` if any line total, or the sum itself, overflows.
    pub fn grand_total(&self, catalog: &Catalog) -> Option<Decimal> {
        self.price_orders(catalog)
            .iter()
            .try_fold(Decimal::ZERO, |total, priced| match priced.resolution {
                Resolution::Found { total_price, .. } => total.checked_add(total_price),
                Resolution::Overflow { .. } => None,
                Resolution::NotFound => Some(total),
            })
    }
}

impl FromIterator<Order> for Ledger {
    fn from_iter<I: IntoIterator<Item = Order>>(iter: I) -> Self {
        Self {
            orders: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Order;
    type IntoIter = slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
