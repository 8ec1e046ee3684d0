//! # Catalog View
//!
//! Turns a [`SyncState`] into what the user sees. Rendering is pure: the same
//! state always yields the same [`CatalogView`], and its `Display` impl is the
//! text the CLI prints.

use crate::model::{Product, ProductId, SyncState};
use std::fmt::{self, Display, Write as _};

pub const TITLE: &str = "Demo catalog client";
pub const LOADING_MESSAGE: &str = "Loading catalog...";
pub const EMPTY_MESSAGE: &str = "There are no products... yet!";
pub const ERROR_MESSAGE: &str =
    "An error occurred while fetching the catalog. Is the backend running?";
pub const COLUMNS: [&str; 6] = ["ID", "Name", "Price", "UPC", "Inventory", "Image"];

const MISSING: &str = "-";

/// One rendered product, keyed by its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub key: ProductId,
    pub cells: [String; 6],
}

impl ProductRow {
    pub fn render(product: &Product) -> Self {
        Self {
            key: product.id.clone(),
            cells: [
                product.id.to_string(),
                product.name.clone(),
                product.price.to_string(),
                product.upc.to_string(),
                product
                    .inventory
                    .as_ref()
                    .map_or_else(|| MISSING.to_string(), ToString::to_string),
                product.image.clone().unwrap_or_else(|| MISSING.to_string()),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView {
    /// Nothing loaded and no error: a fetch is (or will be) in flight.
    Loading,
    /// Nothing loaded and the last fetch failed.
    Error,
    /// The catalog is empty. `stale` is set when the last refresh failed.
    Empty { stale: bool },
    Table { rows: Vec<ProductRow>, stale: bool },
}

impl CatalogView {
    pub fn from_state(state: &SyncState) -> Self {
        let stale = state.is_error();
        match state.catalog() {
            None if stale => Self::Error,
            None => Self::Loading,
            Some(catalog) if catalog.is_empty() => Self::Empty { stale },
            Some(catalog) => Self::Table {
                rows: catalog.iter().map(ProductRow::render).collect(),
                stale,
            },
        }
    }

    /// Row keys in display order; empty unless a table is shown.
    pub fn row_keys(&self) -> Vec<&ProductId> {
        match self {
            Self::Table { rows, .. } => rows.iter().map(|row| &row.key).collect(),
            _ => Vec::new(),
        }
    }

    fn is_stale(&self) -> bool {
        matches!(
            self,
            Self::Empty { stale: true } | Self::Table { stale: true, .. }
        )
    }
}

impl Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        match self {
            Self::Loading => writeln!(f, "{LOADING_MESSAGE}")?,
            Self::Error => writeln!(f, "{ERROR_MESSAGE}")?,
            Self::Empty { .. } => writeln!(f, "{EMPTY_MESSAGE}")?,
            Self::Table { rows, .. } => f.write_str(&render_table(rows))?,
        }
        if self.is_stale() {
            writeln!(f)?;
            writeln!(f, "{ERROR_MESSAGE}")?;
        }
        Ok(())
    }
}

fn render_table(rows: &[ProductRow]) -> String {
    let mut widths = COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = widths.map(|w| "-".repeat(w));
    let mut out = String::new();
    write_line(&mut out, &COLUMNS, &widths);
    write_line(&mut out, &rule.each_ref().map(String::as_str), &widths);
    for row in rows {
        write_line(&mut out, &row.cells.each_ref().map(String::as_str), &widths);
    }
    out
}

fn write_line(out: &mut String, cells: &[&str; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}
