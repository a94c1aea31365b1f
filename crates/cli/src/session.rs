//! Interactive session
//!
//! Drives the main menu: reads a choice, performs it against the catalog and ledger,
//! and repeats until the user exits or input ends.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use aisle::{
    catalog::Catalog,
    orders::Ledger,
    products::ProductKind,
    storage::{FsLineStore, LineStore},
};
use thiserror::Error;
use tracing::{error, info};

use crate::{
    menu::{MenuChoice, write_banner, write_menu},
    prompt::Prompter,
    render::Renderer,
};

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Whether the menu loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Show the menu again.
    Continue,

    /// Leave the menu.
    Exit,
}

/// Catalog, ledger and the collaborators the menu acts through.
#[derive(Debug)]
pub struct Session<S = FsLineStore> {
    catalog: Catalog,
    ledger: Ledger,
    store: S,
    path: PathBuf,
    renderer: Renderer,
}

impl<S: LineStore> Session<S> {
    /// Create a session with an empty catalog and ledger.
    pub fn new(store: S, path: impl Into<PathBuf>, renderer: Renderer) -> Self {
        Self {
            catalog: Catalog::new(),
            ledger: Ledger::new(),
            store,
            path: path.into(),
            renderer,
        }
    }

    /// Replace the starting catalog and ledger.
    #[must_use]
    pub fn with_state(mut self, catalog: Catalog, ledger: Ledger) -> Self {
        self.catalog = catalog;
        self.ledger = ledger;
        self
    }

    /// The current catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<(), SessionError> {
        info!(path = %self.path.display(), "session started");

        write_banner(prompter.output())?;

        loop {
            write_menu(prompter.output())?;

            let Some(answer) = prompter.read_line("Enter your choice: ")? else {
                info!("input closed");
                break;
            };

            let flow = match answer.parse::<MenuChoice>() {
                Ok(choice) => self.handle(choice, prompter)?,
                Err(_err) => {
                    writeln!(prompter.output(), "Invalid choice!")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(
            products = self.catalog.len(),
            orders = self.ledger.len(),
            "session finished"
        );

        Ok(())
    }

    /// Perform a single menu choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be read or written.
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Flow, SessionError> {
        match choice {
            MenuChoice::AddGrocery => self.add_product(ProductKind::Grocery, prompter)?,
            MenuChoice::AddElectronics => self.add_product(ProductKind::Electronics, prompter)?,
            MenuChoice::DisplayProducts => {
                self.renderer
                    .write_products(prompter.output(), &self.catalog)?;
            }
            MenuChoice::SaveToFile => self.save(prompter.output())?,
            MenuChoice::LoadFromFile => self.load(prompter.output())?,
            MenuChoice::AddOrder => {
                if let Some(order) = prompter.read_order()? {
                    self.ledger.add_order(order.product_id(), order.quantity());
                    writeln!(prompter.output(), "Order added successfully!")?;
                }
            }
            MenuChoice::DisplayOrders => {
                self.renderer
                    .write_orders(prompter.output(), &self.ledger, &self.catalog)?;
            }
            MenuChoice::Exit => {
                writeln!(prompter.output(), "Exiting...")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn add_product<R: BufRead, W: Write>(
        &mut self,
        kind: ProductKind,
        prompter: &mut Prompter<R, W>,
    ) -> io::Result<()> {
        if let Some(product) = prompter.read_product(kind)? {
            self.catalog.add(product);
            writeln!(prompter.output(), "Product added successfully!")?;
        }

        Ok(())
    }

    fn save(&self, out: &mut impl Write) -> io::Result<()> {
        match self
            .store
            .write_all_lines(&self.path, &self.catalog.serialize())
        {
            Ok(()) => {
                info!(count = self.catalog.len(), path = %self.path.display(), "saved products");
                writeln!(out, "Products saved to {}!", self.path.display())
            }
            Err(error) => {
                error!(%error, "failed to save products");
                writeln!(out, "Could not save products: {error}")
            }
        }
    }

    fn load(&mut self, out: &mut impl Write) -> io::Result<()> {
        let lines = match self.store.read_all_lines(&self.path) {
            Ok(lines) => lines,
            Err(error) => {
                error!(%error, "failed to load products");
                writeln!(out, "Could not read products: {error}")?;
                Vec::new()
            }
        };

        let count = self.catalog.load(lines);

        info!(count, path = %self.path.display(), "loaded products");

        writeln!(out, "Loaded {count} products from {}!", self.path.display())
    }
}
