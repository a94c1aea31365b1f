//! Aisle
//!
//! Product catalog and order ledger for a small supermarket.
//!
//! A [`catalog::Catalog`] owns products in insertion order and converts them to and from
//! record lines. A [`orders::Ledger`] owns customer orders and prices them against a catalog.
//! Files are reached only through a [`storage::LineStore`].

pub mod catalog;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod records;
pub mod storage;
