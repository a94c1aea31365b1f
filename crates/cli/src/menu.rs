//! Main menu

use std::{io, str::FromStr};

use tabled::{
    builder::Builder,
    settings::{Alignment, Padding, Style, object::Rows},
};
use thiserror::Error;

/// The input does not name a menu entry.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid menu choice: {0:?}")]
pub struct InvalidChoice(pub String);

/// A main menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Prompt for a grocery product and add it.
    AddGrocery,

    /// Prompt for an electronics product and add it.
    AddElectronics,

    /// List all products.
    DisplayProducts,

    /// Write all products to the products file.
    SaveToFile,

    /// Append the products in the products file.
    LoadFromFile,

    /// Prompt for an order and add it.
    AddOrder,

    /// List all orders with their prices.
    DisplayOrders,

    /// Leave the menu.
    Exit,
}

impl MenuChoice {
    /// All entries, in menu order.
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddGrocery,
        MenuChoice::AddElectronics,
        MenuChoice::DisplayProducts,
        MenuChoice::SaveToFile,
        MenuChoice::LoadFromFile,
        MenuChoice::AddOrder,
        MenuChoice::DisplayOrders,
        MenuChoice::Exit,
    ];

    /// The number typed to pick this entry.
    pub const fn number(self) -> u8 {
        match self {
            MenuChoice::AddGrocery => 1,
            MenuChoice::AddElectronics => 2,
            MenuChoice::DisplayProducts => 3,
            MenuChoice::SaveToFile => 4,
            MenuChoice::LoadFromFile => 5,
            MenuChoice::AddOrder => 6,
            MenuChoice::DisplayOrders => 7,
            MenuChoice::Exit => 8,
        }
    }

    /// Menu text for this entry.
    pub const fn label(self) -> &'static str {
        match self {
            MenuChoice::AddGrocery => "Add Grocery Product",
            MenuChoice::AddElectronics => "Add Electronics Product",
            MenuChoice::DisplayProducts => "Display Products",
            MenuChoice::SaveToFile => "Save to File",
            MenuChoice::LoadFromFile => "Load from File",
            MenuChoice::AddOrder => "Add Order",
            MenuChoice::DisplayOrders => "Display Orders",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u8>()
            .map_err(|_err| InvalidChoice(s.to_string()))?;

        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

/// Writes the boxed menu title.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_banner(out: &mut impl io::Write) -> io::Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["Supermarket Main Menu"]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Padding::new(30, 30, 1, 1));
    table.modify(Rows::first(), Alignment::center());

    writeln!(out, "{table}\n")
}

/// Writes the numbered menu entries.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_menu(out: &mut impl io::Write) -> io::Result<()> {
    for choice in MenuChoice::ALL {
        writeln!(out, "{}. {}", choice.number(), choice.label())?;
    }

    Ok(())
}
