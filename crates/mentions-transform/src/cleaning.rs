//! Per-source table cleaning.
//!
//! A [`TableCleaner`] is configured once per source with a
//! [`CleanConfig`] and invoked as a single entry point. Operations run
//! in a fixed order: id cleaning, date canonicalization, null-row
//! removal, special-character removal, then text standardization.

use std::collections::BTreeSet;

use tracing::{debug, info};

use mentions_model::{CleanConfig, Result, Table};

use crate::datetime::normalize_date;

/// Applies one source's cleaning configuration to a table.
#[derive(Debug, Clone)]
pub struct TableCleaner {
    config: CleanConfig,
}

impl TableCleaner {
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// Stringify ids, prefix them for cross-source uniqueness, and
    /// drop duplicate ids keeping the first occurrence.
    pub fn clean_ids(&self, table: &mut Table) -> Result<()> {
        let idx = table.require_column(&self.config.id_column, &self.config.id_prefix)?;
        let mut seen = BTreeSet::new();
        let mut kept = Vec::with_capacity(table.rows.len());
        for mut row in table.rows.drain(..) {
            let prefixed = format!("{}_{}", self.config.id_prefix, row[idx]);
            if seen.insert(prefixed.clone()) {
                row[idx] = prefixed;
                kept.push(row);
            }
        }
        table.rows = kept;
        debug!(column = %self.config.id_column, rows = table.row_count(), "cleaned ids");
        Ok(())
    }

    /// Canonicalize one date column to `YYYY-MM-DD`; unparseable
    /// values become empty cells.
    pub fn standardize_dates(&self, table: &mut Table, column: &str) -> Result<()> {
        let idx = table.require_column(column, &self.config.id_prefix)?;
        for row in &mut table.rows {
            row[idx] = normalize_date(&row[idx]).unwrap_or_default();
        }
        debug!(column, "standardized date column");
        Ok(())
    }

    /// Drop rows with an empty cell in the given column.
    pub fn drop_missing(&self, table: &mut Table, column: &str) -> Result<()> {
        let idx = table.require_column(column, &self.config.id_prefix)?;
        let before = table.row_count();
        table.rows.retain(|row| !row[idx].is_empty());
        debug!(column, dropped = before - table.row_count(), "dropped rows with missing values");
        Ok(())
    }

    /// Strip non-ASCII bytes, then anything outside word characters,
    /// whitespace, and hyphens.
    pub fn remove_special_characters(&self, table: &mut Table, column: &str) -> Result<()> {
        let idx = table.require_column(column, &self.config.id_prefix)?;
        for row in &mut table.rows {
            row[idx] = row[idx]
                .chars()
                .filter(|ch| {
                    ch.is_ascii()
                        && (ch.is_ascii_alphanumeric()
                            || *ch == '_'
                            || *ch == '-'
                            || ch.is_ascii_whitespace())
                })
                .collect();
        }
        debug!(column, "removed special characters");
        Ok(())
    }

    /// Lowercase, trim, and collapse inner whitespace runs.
    pub fn standardize_text(&self, table: &mut Table, column: &str) -> Result<()> {
        let idx = table.require_column(column, &self.config.id_prefix)?;
        for row in &mut table.rows {
            let lowered = row[idx].to_lowercase();
            row[idx] = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
        }
        debug!(column, "standardized text");
        Ok(())
    }

    /// Run the full cleaning pipeline in order.
    pub fn clean(&self, mut table: Table) -> Result<Table> {
        let input_rows = table.row_count();
        self.clean_ids(&mut table)?;
        for column in &self.config.date_columns {
            self.standardize_dates(&mut table, column)?;
        }
        for column in &self.config.drop_na_columns {
            self.drop_missing(&mut table, column)?;
        }
        for column in &self.config.text_search_columns {
            self.remove_special_characters(&mut table, column)?;
        }
        for column in &self.config.text_search_columns {
            self.standardize_text(&mut table, column)?;
        }
        info!(
            source = %self.config.id_prefix,
            input_rows,
            output_rows = table.row_count(),
            "table cleaned"
        );
        Ok(table)
    }
}
