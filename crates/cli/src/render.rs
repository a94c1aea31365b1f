//! Product and order listings

use std::io;

use aisle::{
    catalog::Catalog,
    orders::{Ledger, PricedOrder, Resolution},
};
use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::config::OutputStyle;

/// Shown in place of a total that does not fit in a `Decimal`.
const OVERFLOW: &str = "overflow";

/// Writes catalog and ledger listings in the configured style.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    style: OutputStyle,
    currency: &'static Currency,
}

impl Renderer {
    /// Create a new renderer.
    pub fn new(style: OutputStyle, currency: &'static Currency) -> Self {
        Self { style, currency }
    }

    /// List every product in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_products(&self, out: &mut impl io::Write, catalog: &Catalog) -> io::Result<()> {
        if catalog.is_empty() {
            return writeln!(out, "No products.");
        }

        match self.style {
            OutputStyle::Plain => {
                for product in catalog {
                    writeln!(out, "{}", product.display_line())?;
                }

                Ok(())
            }
            OutputStyle::Table => {
                let mut builder = Builder::default();

                builder.push_record(["Kind", "ID", "Name", "Price", "Quantity"]);

                for product in catalog {
                    builder.push_record([
                        product.kind.label().to_string(),
                        product.id.to_string(),
                        product.name.clone(),
                        self.money(*product.price),
                        product.quantity.to_string(),
                    ]);
                }

                let mut table = builder.build();
                table.with(Style::modern_rounded());
                table.modify(Columns::new(3..5), Alignment::right());

                writeln!(out, "{table}")
            }
        }
    }

    /// List every order with its price resolved against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_orders(
        &self,
        out: &mut impl io::Write,
        ledger: &Ledger,
        catalog: &Catalog,
    ) -> io::Result<()> {
        if ledger.is_empty() {
            return writeln!(out, "No orders.");
        }

        let priced = ledger.price_orders(catalog);
        let total = ledger.grand_total(catalog);

        match self.style {
            OutputStyle::Plain => write_plain_orders(out, &priced, total),
            OutputStyle::Table => self.write_order_table(out, &priced, total),
        }
    }

    fn write_order_table(
        &self,
        out: &mut impl io::Write,
        priced: &[PricedOrder<'_>],
        total: Option<Decimal>,
    ) -> io::Result<()> {
        let mut builder = Builder::default();

        builder.push_record(["", "Product ID", "Product", "Quantity", "Unit Price", "Total"]);

        for (idx, line) in priced.iter().enumerate() {
            let (name, unit_price, line_total) = match line.resolution {
                Resolution::Found {
                    product,
                    total_price,
                } => (
                    product.name.clone(),
                    self.money(*product.price),
                    self.money(total_price),
                ),
                Resolution::Overflow { product } => (
                    product.name.clone(),
                    self.money(*product.price),
                    OVERFLOW.to_string(),
                ),
                Resolution::NotFound => ("not found".to_string(), String::new(), String::new()),
            };

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.product_id.to_string(),
                name,
                line.quantity.to_string(),
                unit_price,
                line_total,
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "{table}")?;
        match total {
            Some(total) => writeln!(out, " Total: {}", self.money(total)),
            None => writeln!(out, " Total: {OVERFLOW}"),
        }
    }

    fn money(&self, amount: Decimal) -> String {
        Money::from_decimal(amount, self.currency).to_string()
    }
}

fn write_plain_orders(
    out: &mut impl io::Write,
    priced: &[PricedOrder<'_>],
    total: Option<Decimal>,
) -> io::Result<()> {
    for line in priced {
        match line.resolution {
            Resolution::Found { total_price, .. } => writeln!(
                out,
                "Product ID: {}, Quantity: {}, Total: {}",
                line.product_id,
                line.quantity,
                total_price.normalize()
            )?,
            Resolution::Overflow { .. } => writeln!(
                out,
                "Product ID: {}, Quantity: {}, Total: {OVERFLOW}",
                line.product_id, line.quantity
            )?,
            Resolution::NotFound => writeln!(
                out,
                "Product ID: {}, Quantity: {}, Product not found",
                line.product_id, line.quantity
            )?,
        }
    }

    match total {
        Some(total) => writeln!(out, "Order total: {}", total.normalize()),
        None => writeln!(out, "Order total: {OVERFLOW}"),
    }
}
