//! Remote tabular store access.
//!
//! The spreadsheet is treated as an opaque append-only table reached over an
//! authenticated API. The [`TabularStore`] trait is the seam between the
//! gateway and the concrete Google Sheets client, and is what tests replace
//! with an in-memory fake.

/// Service-account authentication and bearer-token caching
pub mod auth;
/// Google Sheets implementation of the tabular store
pub mod sheets;

use crate::errors::Result;
use async_trait::async_trait;

/// An append-only table of string cells whose first row names the columns.
#[async_trait]
pub trait TabularStore: Send + Sync {
    /// The current header row, in column order. Empty if the table is empty.
    async fn header_row(&self) -> Result<Vec<String>>;

    /// Every row of the table, header row included, top to bottom.
    async fn all_rows(&self) -> Result<Vec<Vec<String>>>;

    /// Appends one row at the end of the table.
    async fn append_row(&self, values: Vec<String>) -> Result<()>;
}
