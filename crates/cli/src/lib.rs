//! Aisle CLI
//!
//! Interactive console front end for the [`aisle`] catalog and ledger.

pub mod app;
pub mod config;
pub mod logging;
pub mod menu;
pub mod prompt;
pub mod render;
pub mod session;
