//! Shared test utilities.
//!
//! Provides the in-memory fakes the gateway, HTTP, and client tests plug in
//! behind the store and gateway seams, plus fixture builders with sensible
//! defaults.

#![allow(clippy::unwrap_used)]

use crate::client::Gateway;
use crate::core::record::{Record, RecordInput};
use crate::errors::{Error, Result};
use crate::store::TabularStore;
use async_trait::async_trait;
use std::sync::Mutex;

/// A complete, valid registration input.
#[must_use]
pub fn sample_input() -> RecordInput {
    RecordInput {
        nome: "Ana Souza".to_string(),
        endereco: "Rua das Flores, 10".to_string(),
        plano: "Essencial".to_string(),
        carteirinha: "123456".to_string(),
        telefone: "11 98888-7777".to_string(),
    }
}

/// The canonical header row.
#[must_use]
pub fn canonical_headers() -> Vec<String> {
    [
        "Nome",
        "Endereço",
        "Plano",
        "Carteirinha",
        "Telefone",
        "Data e Hora",
        "Status",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

/// Builds a record from string pairs, keeping insertion order.
#[must_use]
pub fn record_of(fields: &[(&str, &str)]) -> Record {
    fields
        .iter()
        .map(|(key, value)| {
            (
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            )
        })
        .collect()
}

/// In-memory [`TabularStore`] seeded with rows. Appends are recorded and
/// every call is counted, so tests can assert the store was never touched.
pub struct FakeStore {
    rows: Mutex<Vec<Vec<String>>>,
    calls: Mutex<usize>,
}

impl FakeStore {
    /// Builds a store holding the given rows, header row first.
    #[must_use]
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: Mutex::new(rows),
            calls: Mutex::new(0),
        }
    }

    /// A sheet with the canonical header row and no data rows.
    #[must_use]
    pub fn with_canonical_header() -> Self {
        Self::new(vec![canonical_headers()])
    }

    /// Number of rows currently held, header included.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// The most recently held row, if any.
    #[must_use]
    pub fn last_row(&self) -> Option<Vec<String>> {
        self.rows.lock().unwrap().last().cloned()
    }

    /// How many store calls were made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn record_call(&self) {
        *self.calls.lock().unwrap() += 1;
    }
}

#[async_trait]
impl TabularStore for FakeStore {
    async fn header_row(&self) -> Result<Vec<String>> {
        self.record_call();
        Ok(self.rows.lock().unwrap().first().cloned().unwrap_or_default())
    }

    async fn all_rows(&self) -> Result<Vec<Vec<String>>> {
        self.record_call();
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        self.record_call();
        self.rows.lock().unwrap().push(values);
        Ok(())
    }
}

/// A store whose every call fails with the given message.
pub struct BrokenStore {
    message: String,
}

impl BrokenStore {
    /// Builds a store that always fails with `message`.
    #[must_use]
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    fn failure(&self) -> Error {
        Error::RemoteStore {
            message: self.message.clone(),
        }
    }
}

#[async_trait]
impl TabularStore for BrokenStore {
    async fn header_row(&self) -> Result<Vec<String>> {
        Err(self.failure())
    }

    async fn all_rows(&self) -> Result<Vec<Vec<String>>> {
        Err(self.failure())
    }

    async fn append_row(&self, _values: Vec<String>) -> Result<()> {
        Err(self.failure())
    }
}

/// Canned [`Gateway`] for form-client tests: serves fixed records, records
/// submissions, and optionally fails every call with a fixed message.
pub struct FakeGateway {
    records: Vec<Record>,
    fail_with: Option<String>,
    submitted: Mutex<Vec<RecordInput>>,
}

impl FakeGateway {
    /// A gateway serving the given records and accepting submissions.
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            fail_with: None,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// A gateway whose every call fails with the given server text.
    #[must_use]
    pub fn failing_with(message: &str) -> Self {
        Self {
            records: Vec::new(),
            fail_with: Some(message.to_string()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Inputs submitted so far.
    #[must_use]
    pub fn submitted(&self) -> Vec<RecordInput> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn append(&self, input: &RecordInput) -> Result<String> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Gateway {
                message: message.clone(),
            });
        }
        self.submitted.lock().unwrap().push(input.clone());
        Ok(crate::http::MSG_CREATED.to_string())
    }

    async fn list(&self) -> Result<Vec<Record>> {
        if let Some(message) = &self.fail_with {
            return Err(Error::Gateway {
                message: message.clone(),
            });
        }
        Ok(self.records.clone())
    }
}
