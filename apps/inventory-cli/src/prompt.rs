//! # Prompter
//!
//! Interactive input validators. Each request writes a prompt, reads one
//! line, and hands it to a parser from `inventory_core::validation`.
//!
//! ## Retry Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop {                                                                 │
//! │      write prompt ──► read line ──► parse                               │
//! │                                       │                                 │
//! │                    Ok(value) ◄────────┤                                 │
//! │                    return             │                                 │
//! │                                       ▼                                 │
//! │                    Err(e) ──► "Error: {e}." ──► next iteration          │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad input never escapes a request. The only way out besides a valid value
//! is an I/O failure, including end of input (`UnexpectedEof`), which would
//! otherwise spin forever.

use std::io::{self, BufRead, Write};

use inventory_core::validation::{parse_non_negative_integer, parse_non_negative_real, parse_text};
use inventory_core::{ProductFields, ValidationResult};

use crate::config::Theme;
use crate::render;

/// Reads validated values from `input`, writing prompts and errors to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Prompter {
            input,
            output,
            theme,
        }
    }

    /// The writer prompts go to; renderers share it.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes the prompt and reads one raw line (newline included).
    ///
    /// ## Errors
    /// `UnexpectedEof` when input is closed.
    pub fn request_line(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", self.theme.info(prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }

        Ok(line)
    }

    /// Asks until `parse` accepts the line.
    fn request_with<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> ValidationResult<T>,
    ) -> io::Result<T> {
        loop {
            let line = self.request_line(prompt)?;

            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => render::error(&mut self.output, &self.theme, &format!("Error: {e}."))?,
            }
        }
    }

    /// Requests lowercased, trimmed text; empty only if `optional`.
    pub fn request_text(&mut self, field: &str, prompt: &str, optional: bool) -> io::Result<String> {
        self.request_with(prompt, |raw| parse_text(field, raw, optional))
    }

    /// Requests a whole number >= 0.
    pub fn request_integer(&mut self, field: &str, prompt: &str) -> io::Result<i64> {
        self.request_with(prompt, |raw| parse_non_negative_integer(field, raw))
    }

    /// Requests a finite decimal number >= 0.
    pub fn request_real(&mut self, field: &str, prompt: &str) -> io::Result<f64> {
        self.request_with(prompt, |raw| parse_non_negative_real(field, raw))
    }

    /// Requests all five product fields, in order.
    ///
    /// ```text
    /// name (required) → description (optional) → quantity → price → category (optional)
    /// ```
    pub fn collect_product_fields(&mut self) -> io::Result<ProductFields> {
        render::title(&mut self.output, &self.theme, "\n--- Enter product details ---")?;

        let name = self.request_text("name", "Enter the product name: ", false)?;
        let description =
            self.request_text("description", "Enter the product description: ", true)?;
        let quantity = self.request_integer("quantity", "Enter the quantity: ")?;
        let price = self.request_real("price", "Enter the price ($): ")?;
        let category = self.request_text("category", "Enter the category: ", true)?;

        ProductFields::new(&name, &description, quantity, price, &category)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
