//! # Session
//!
//! The menu loop: one blocking read, one dispatched action, back to the menu.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main menu ──► "3"                                                      │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  MenuChoice::parse  ── not 1..=7 ──► "Invalid option..." ──► menu       │
//! │                 │                                                       │
//! │                 ▼ Update                                                │
//! │  request_integer(id) ──► id_exists? ── no / store error ──► menu        │
//! │                 │                                                       │
//! │                 ▼ yes                                                   │
//! │  collect_product_fields ──► update_by_id                                │
//! │                 │                                                       │
//! │                 ├── Ok(0)  ──► "No product found with that ID."         │
//! │                 ├── Ok(n)  ──► "Product updated successfully."          │
//! │                 └── Err(e) ──► "Error updating the product: {e}"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store errors are shown and the loop carries on. Only console I/O failures
//! end the session; end of input ends it cleanly.

use std::io::{BufRead, Write};

use inventory_core::validation::parse_non_negative_integer;
use inventory_db::{Database, ProductRepository};
use tracing::{debug, warn};

use crate::config::Theme;
use crate::error::CliResult;
use crate::prompt::Prompter;
use crate::render;

// =============================================================================
// Menu Choices
// =============================================================================

/// A main menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Search,
    Report,
    Quit,
}

impl MenuChoice {
    /// Every entry, in menu order.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::Search,
        MenuChoice::Report,
        MenuChoice::Quit,
    ];

    /// Parses a raw selection; `None` unless it is a whole number in 1..=7.
    pub fn parse(raw: &str) -> Option<Self> {
        let number = parse_non_negative_integer("option", raw).ok()?;
        Self::ALL.into_iter().find(|c| i64::from(c.number()) == number)
    }

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::List => 2,
            MenuChoice::Update => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Search => 5,
            MenuChoice::Report => 6,
            MenuChoice::Quit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add product",
            MenuChoice::List => "Show products",
            MenuChoice::Update => "Update product",
            MenuChoice::Delete => "Delete product",
            MenuChoice::Search => "Search product",
            MenuChoice::Report => "Product report",
            MenuChoice::Quit => "Exit",
        }
    }
}

/// A search sub-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    ById,
    ByName,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::ById, SearchMode::ByName];

    pub fn from_number(number: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|m| i64::from(m.number()) == number)
    }

    pub fn number(self) -> u8 {
        match self {
            SearchMode::ById => 1,
            SearchMode::ByName => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::ById => "Search by ID",
            SearchMode::ByName => "Search by name",
        }
    }
}

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// =============================================================================
// Session
// =============================================================================

/// An interactive session over one database and one console.
pub struct Session<R, W> {
    products: ProductRepository,
    prompter: Prompter<R, W>,
    theme: Theme,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(db: &Database, input: R, output: W, theme: Theme) -> Self {
        Session {
            products: db.products(),
            prompter: Prompter::new(input, output, theme),
            theme,
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Runs the menu loop until Quit or end of input.
    pub async fn run(&mut self) -> CliResult<()> {
        loop {
            match self.step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_input_closed() => {
                    debug!("Input closed, leaving menu loop");
                    self.say_goodbye()?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu, reads one selection and runs it.
    async fn step(&mut self) -> CliResult<Flow> {
        render::main_menu(self.prompter.output(), &self.theme)?;
        let raw = self.prompter.request_line("\nSelect an option: ")?;

        match MenuChoice::parse(&raw) {
            Some(choice) => self.dispatch(choice).await,
            None => {
                self.error("Invalid option. Enter a number from 1 to 7.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Runs one menu action.
    pub async fn dispatch(&mut self, choice: MenuChoice) -> CliResult<Flow> {
        debug!(?choice, "Dispatching menu choice");

        match choice {
            MenuChoice::Add => self.add_product().await?,
            MenuChoice::List => self.list_products().await?,
            MenuChoice::Update => self.update_product().await?,
            MenuChoice::Delete => self.delete_product().await?,
            MenuChoice::Search => self.search_products().await?,
            MenuChoice::Report => self.report_products().await?,
            MenuChoice::Quit => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    // -------------------------------------------------------------------------
    // Actions
    // -------------------------------------------------------------------------

    async fn add_product(&mut self) -> CliResult<()> {
        let fields = self.prompter.collect_product_fields()?;

        match self.products.insert(&fields).await {
            Ok(_) => self.success("Product registered successfully."),
            Err(e) => self.store_error("Error registering the product", &e),
        }
    }

    async fn list_products(&mut self) -> CliResult<()> {
        if !self.ensure_records().await? {
            return Ok(());
        }

        match self.products.list_all().await {
            Ok(products) => self.show(&products),
            Err(e) => self.store_error("Error listing products", &e),
        }
    }

    async fn update_product(&mut self) -> CliResult<()> {
        let id = self
            .prompter
            .request_integer("id", "Enter the ID of the product to update: ")?;

        if !self.ensure_id(id).await? {
            return Ok(());
        }

        let fields = self.prompter.collect_product_fields()?;

        match self.products.update_by_id(id, &fields).await {
            Ok(0) => self.error("No product found with that ID."),
            Ok(_) => self.success("Product updated successfully."),
            Err(e) => self.store_error("Error updating the product", &e),
        }
    }

    async fn delete_product(&mut self) -> CliResult<()> {
        if !self.ensure_records().await? {
            return Ok(());
        }

        let id = self
            .prompter
            .request_integer("id", "Enter the ID of the product to delete: ")?;

        match self.products.delete_by_id(id).await {
            Ok(0) => self.error("No product found with that ID."),
            Ok(_) => self.success(&format!("Product with ID {id} deleted successfully.")),
            Err(e) => self.store_error("Error deleting the product", &e),
        }
    }

    async fn search_products(&mut self) -> CliResult<()> {
        if !self.ensure_records().await? {
            return Ok(());
        }

        let mode = loop {
            render::search_menu(self.prompter.output(), &self.theme)?;
            let number = self
                .prompter
                .request_integer("option", "Select a search option: ")?;

            match SearchMode::from_number(number) {
                Some(mode) => break mode,
                None => self.error("Invalid option. Please choose 1 or 2.")?,
            }
        };

        let result = match mode {
            SearchMode::ById => {
                let id = self
                    .prompter
                    .request_integer("id", "Enter the ID of the product to search for: ")?;
                self.products
                    .find_by_id(id)
                    .await
                    .map(|found| found.into_iter().collect::<Vec<_>>())
            }
            SearchMode::ByName => {
                let text = self.prompter.request_text(
                    "name",
                    "Enter the name of the product to search for: ",
                    false,
                )?;
                self.products.find_by_name_substring(&text).await
            }
        };

        match result {
            Ok(products) => self.show(&products),
            Err(e) => self.store_error("Error searching for the product", &e),
        }
    }

    async fn report_products(&mut self) -> CliResult<()> {
        if !self.ensure_records().await? {
            return Ok(());
        }

        let max_quantity = self
            .prompter
            .request_integer("maximum quantity", "Enter the maximum quantity: ")?;

        match self.products.filter_by_max_quantity(max_quantity).await {
            Ok(products) => self.show(&products),
            Err(e) => self.store_error("Error generating the report", &e),
        }
    }

    // -------------------------------------------------------------------------
    // Pre-checks
    // -------------------------------------------------------------------------

    /// False (after telling the operator why) when the store is empty or
    /// cannot be read.
    async fn ensure_records(&mut self) -> CliResult<bool> {
        match self.products.has_any_records().await {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.error("No products registered.")?;
                Ok(false)
            }
            Err(e) => {
                self.store_error("Error checking products", &e)?;
                Ok(false)
            }
        }
    }

    /// False (after telling the operator why) when the id is unknown or the
    /// lookup failed.
    async fn ensure_id(&mut self, id: i64) -> CliResult<bool> {
        match self.products.id_exists(id).await {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.error("No product found with that ID.")?;
                Ok(false)
            }
            Err(e) => {
                self.store_error("Error looking up the ID", &e)?;
                Ok(false)
            }
        }
    }

    // -------------------------------------------------------------------------
    // Output helpers
    // -------------------------------------------------------------------------

    fn show(&mut self, products: &[inventory_core::Product]) -> CliResult<()> {
        render::products(self.prompter.output(), &self.theme, products)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> CliResult<()> {
        render::success(self.prompter.output(), &self.theme, message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> CliResult<()> {
        render::error(self.prompter.output(), &self.theme, message)?;
        Ok(())
    }

    fn store_error(&mut self, context: &str, err: &inventory_db::DbError) -> CliResult<()> {
        warn!(error = %err, "{context}");
        self.error(&format!("{context}: {err}"))
    }

    fn say_goodbye(&mut self) -> CliResult<()> {
        self.success("\nSee you next time!")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1\n"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Quit));

        for bad in ["0", "8", "-1", "abc", "", "1.0"] {
            assert_eq!(MenuChoice::parse(bad), None, "input {bad:?}");
        }
    }

    #[test]
    fn test_menu_numbers_are_sequential() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(usize::from(choice.number()), i + 1);
        }
    }

    #[test]
    fn test_search_mode_from_number() {
        assert_eq!(SearchMode::from_number(1), Some(SearchMode::ById));
        assert_eq!(SearchMode::from_number(2), Some(SearchMode::ByName));
        assert_eq!(SearchMode::from_number(3), None);
        assert_eq!(SearchMode::from_number(0), None);
    }
}
