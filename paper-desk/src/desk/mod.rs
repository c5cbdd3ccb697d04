//! The menu-driven interaction loop.

use crate::error::{DeskError, Result};
use crate::io::console::Console;
use crate::session::Session;
use log::{debug, info};

pub mod menu;

pub use menu::MenuChoice;

const PROMPT_CHOICE: &str = "Choose an option: ";
const PROMPT_SYMBOL: &str = "Enter stock symbol: ";
const INVALID_INTEGER: &str = "Invalid input. Please enter an integer.";
const INVALID_OPTION: &str = "Invalid option. Try again.";

/// Drives one session from a console until the user exits.
pub struct Desk<C: Console> {
    session: Session,
    console: C,
}

impl<C: Console> Desk<C> {
    pub fn new(session: Session, console: C) -> Self {
        Self { session, console }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Runs the menu loop.
    ///
    /// Returns `Ok` once the user picks Exit. Running out of input yields
    /// `DeskError::InputClosed`; malformed input never ends the loop.
    pub fn run(&mut self) -> Result<()> {
        info!("Trading session started");
        loop {
            self.print_menu()?;
            self.console.write(PROMPT_CHOICE)?;
            let code = self.read_int()?;

            match MenuChoice::from_code(code) {
                Some(MenuChoice::Exit) => {
                    self.console.write_line("Exiting...")?;
                    info!("Trading session ended by user");
                    return Ok(());
                }
                Some(choice) => self.handle(choice)?,
                None => {
                    debug!("Unknown menu code {}", code);
                    self.console.write_line(INVALID_OPTION)?;
                }
            }
        }
    }

    /// Performs one menu action. Exit is a no-op here; the loop owns
    /// termination.
    pub fn handle(&mut self, choice: MenuChoice) -> Result<()> {
        debug!("Dispatching {:?}", choice);
        match choice {
            MenuChoice::ViewMarket => self.view_market(),
            MenuChoice::Buy => self.buy(),
            MenuChoice::Sell => self.sell(),
            MenuChoice::ViewPortfolio => self.view_portfolio(),
            MenuChoice::PortfolioValue => self.view_value(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        for choice in MenuChoice::ALL {
            self.console
                .write_line(&format!("{}. {}", choice.code(), choice.label()))?;
        }
        Ok(())
    }

    fn view_market(&mut self) -> Result<()> {
        self.console.write_line("Market Data:")?;
        let lines: Vec<String> = self
            .session
            .catalog()
            .all()
            .map(ToString::to_string)
            .collect();
        for line in lines {
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    fn buy(&mut self) -> Result<()> {
        let (symbol, quantity) = self.read_order("Enter quantity to buy: ")?;
        match self.session.buy(&symbol, quantity) {
            Ok(fill) => self.console.write_line(&format!(
                "Bought {} shares of {}",
                fill.quantity, fill.symbol
            ))?,
            Err(e) => self.console.write_line(&e.to_string())?,
        }
        Ok(())
    }

    fn sell(&mut self) -> Result<()> {
        let (symbol, quantity) = self.read_order("Enter quantity to sell: ")?;
        match self.session.sell(&symbol, quantity) {
            Ok(fill) => self.console.write_line(&format!(
                "Sold {} shares of {}",
                fill.quantity, fill.symbol
            ))?,
            Err(e) => self.console.write_line(&e.to_string())?,
        }
        Ok(())
    }

    fn view_portfolio(&mut self) -> Result<()> {
        let snapshot = self.session.holdings().snapshot();
        if snapshot.is_empty() {
            self.console.write_line("No stocks in portfolio.")?;
            return Ok(());
        }
        self.console.write_line("Current Portfolio:")?;
        for (symbol, quantity) in snapshot {
            self.console
                .write_line(&format!("{}: {} shares", symbol, quantity))?;
        }
        Ok(())
    }

    fn view_value(&mut self) -> Result<()> {
        let value = self.session.portfolio_value();
        self.console
            .write_line(&format!("Current portfolio value: ${:.2}", value))?;
        Ok(())
    }

    fn read_order(&mut self, quantity_prompt: &str) -> Result<(String, i64)> {
        self.console.write(PROMPT_SYMBOL)?;
        let symbol = self.read_line()?;
        self.console.write(quantity_prompt)?;
        let quantity = self.read_int()?;
        Ok((symbol, quantity))
    }

    fn read_line(&mut self) -> Result<String> {
        self.console.read_line()?.ok_or(DeskError::InputClosed)
    }

    /// Reads until a line parses as a 32-bit integer. Larger literals are
    /// treated like any other malformed input.
    fn read_int(&mut self) -> Result<i64> {
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<i32>() {
                Ok(value) => return Ok(i64::from(value)),
                Err(e) => {
                    debug!("Rejected integer input {:?}: {}", line, e);
                    self.console.write_line(INVALID_INTEGER)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
