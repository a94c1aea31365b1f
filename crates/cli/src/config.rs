//! Configuration

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use rusty_money::iso::{self, Currency};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directives (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// How products and orders are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    /// Bordered tables with formatted money.
    Table,

    /// One line per record.
    Plain,
}

/// Currency used when formatting prices in tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CurrencyCode {
    /// Pound sterling
    Gbp,

    /// US dollar
    Usd,

    /// Euro
    Eur,
}

impl CurrencyCode {
    /// The ISO currency definition.
    pub fn currency(self) -> &'static Currency {
        match self {
            CurrencyCode::Gbp => iso::GBP,
            CurrencyCode::Usd => iso::USD,
            CurrencyCode::Eur => iso::EUR,
        }
    }
}

/// Supermarket inventory and order tracker
#[derive(Debug, Parser)]
#[command(name = "aisle", about = "Supermarket inventory and order tracker", long_about = None)]
pub struct Config {
    /// File used by "Save to File" and "Load from File"
    #[arg(short, long, env = "AISLE_PRODUCTS_FILE", default_value = "products.txt")]
    pub file: PathBuf,

    /// Currency for formatted prices
    #[arg(long, env = "AISLE_CURRENCY", value_enum, default_value_t = CurrencyCode::Gbp)]
    pub currency: CurrencyCode,

    /// Output style for product and order listings
    #[arg(long, env = "AISLE_STYLE", value_enum, default_value_t = OutputStyle::Table)]
    pub style: OutputStyle,

    /// YAML fixture to seed products and orders from
    #[arg(long, env = "AISLE_SEED")]
    pub seed: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
