//! # Presentation
//!
//! Writes menus, product listings and outcome messages to any `io::Write`.
//!
//! Renderers only format what they are given. They never call the store and
//! never change data.

use std::io::{self, Write};

use inventory_core::Product;

use crate::config::Theme;
use crate::session::{MenuChoice, SearchMode};

const BANNER: &str = "══════════════════════════════════════════════";

/// Writes the main menu.
pub fn main_menu<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.menu(BANNER))?;
    writeln!(out, "{}", theme.menu("                MAIN MENU"))?;
    writeln!(out, "{}", theme.menu(BANNER))?;

    for choice in MenuChoice::ALL {
        writeln!(
            out,
            "{} {}",
            theme.menu(&format!("{})", choice.number())),
            choice.label()
        )?;
    }

    Ok(())
}

/// Writes the search sub-menu.
pub fn search_menu<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out, "{}", theme.title("\n--- Search options ---"))?;

    for mode in SearchMode::ALL {
        writeln!(
            out,
            "{} {}",
            theme.menu(&format!("{})", mode.number())),
            mode.label()
        )?;
    }

    Ok(())
}

/// Writes a product listing, or "No products found." for an empty slice.
pub fn products<W: Write>(out: &mut W, theme: &Theme, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return error(out, theme, "No products found.");
    }

    writeln!(out, "{}", theme.title(&format!("\n{BANNER}")))?;
    writeln!(out, "{}", theme.title("                PRODUCT LIST"))?;
    writeln!(out, "{}", theme.title(BANNER))?;

    for product in products {
        writeln!(out, "{}", product_line(theme, product))?;
    }

    writeln!(out, "{}", theme.title(BANNER))
}

/// Formats one product on a single line.
///
/// The price is rounded to cents for display; the stored value keeps its
/// full precision.
///
/// ```text
/// ID: 1 | Name: widget | Category: tools | Price: $9.99 | Quantity: 5 | Description:
/// ```
pub fn product_line(theme: &Theme, product: &Product) -> String {
    format!(
        "{} {} | {} {} | {} {} | {} ${:.2} | {} {} | {} {}",
        theme.menu("ID:"),
        product.id,
        theme.menu("Name:"),
        product.name,
        theme.menu("Category:"),
        product.category,
        theme.menu("Price:"),
        product.price,
        theme.menu("Quantity:"),
        product.quantity,
        theme.menu("Description:"),
        product.description,
    )
}

/// Writes a section header.
pub fn title<W: Write>(out: &mut W, theme: &Theme, message: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.title(message))
}

/// Writes a success message.
pub fn success<W: Write>(out: &mut W, theme: &Theme, message: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.ok(message))
}

/// Writes an error message.
pub fn error<W: Write>(out: &mut W, theme: &Theme, message: &str) -> io::Result<()> {
    writeln!(out, "{}", theme.err(message))
}
