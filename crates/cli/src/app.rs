//! Application wiring

use std::io::{BufRead, Write};

use aisle::{
    catalog::Catalog,
    fixtures::{Fixture, FixtureError},
    orders::Ledger,
    storage::FsLineStore,
};
use thiserror::Error;
use tracing::info;

use crate::{
    config::Config,
    prompt::Prompter,
    render::Renderer,
    session::{Session, SessionError},
};

/// Errors that stop the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The seed fixture could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The interactive session failed.
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Build a session from `config` and run it over the given console.
///
/// # Errors
///
/// Returns an error if the seed fixture is invalid or the console fails.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<(), AppError> {
    let (catalog, ledger) = match &config.seed {
        Some(path) => {
            let state = Fixture::from_path(path)?.build()?;

            info!(
                path = %path.display(),
                products = state.0.len(),
                orders = state.1.len(),
                "seeded from fixture"
            );

            state
        }
        None => (Catalog::new(), Ledger::new()),
    };

    let renderer = Renderer::new(config.style, config.currency.currency());

    let mut session = Session::new(FsLineStore, &config.file, renderer).with_state(catalog, ledger);
    let mut prompter = Prompter::new(input, output);

    session.run(&mut prompter)?;

    Ok(())
}
