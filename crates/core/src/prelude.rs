//! Aisle prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::Catalog,
    fixtures::{Fixture, FixtureError},
    orders::{Ledger, Order, PricedOrder, Resolution},
    prices::{Price, PriceError},
    products::{Product, ProductId, ProductKind},
    records::{RecordError, format_record, parse_record},
    storage::{FsLineStore, LineStore, StorageError},
};
