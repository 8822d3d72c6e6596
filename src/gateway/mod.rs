//! Record gateway - the two operations against the remote spreadsheet.
//!
//! Each operation is one stateless request/response cycle: validate and
//! append, or fetch and zip. No state survives between calls and nothing is
//! retried; remote failures pass through with their original message.

use crate::core::mapping::{self, STORE_TIMEZONE};
use crate::core::record::{Record, RecordInput};
use crate::errors::{Error, Result};
use crate::store::TabularStore;
use chrono::Utc;
use std::sync::Arc;

/// Maps registrations onto spreadsheet rows and back.
#[derive(Clone)]
pub struct RecordGateway {
    store: Arc<dyn TabularStore>,
}

impl RecordGateway {
    /// Builds a gateway over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn TabularStore>) -> Self {
        Self { store }
    }

    /// Validates the input and appends it as one row laid out by the
    /// sheet's current header order.
    ///
    /// The header row is re-read on every append, so reordering or adding
    /// columns in the sheet takes effect immediately. An empty header row is
    /// a remote-store failure: an unconfigured sheet cannot be appended to.
    pub async fn append_record(&self, input: &RecordInput) -> Result<()> {
        input.validate()?;

        let headers = self.store.header_row().await?;
        if headers.is_empty() {
            return Err(Error::RemoteStore {
                message: "spreadsheet has no header row".to_string(),
            });
        }

        let now = Utc::now().with_timezone(&STORE_TIMEZONE);
        let row = mapping::map_row(&headers, input, now);
        self.store.append_row(row).await
    }

    /// Reads every data row back as header-keyed records, in store order.
    pub async fn list_records(&self) -> Result<Vec<Record>> {
        let rows = self.store.all_rows().await?;
        Ok(mapping::rows_to_records(&rows))
    }
}
