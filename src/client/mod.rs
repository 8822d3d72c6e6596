//! Form client - a terminal front-end for the record gateway.
//!
//! The client only knows the gateway through the [`Gateway`] trait, so the
//! submit and listing flows can be exercised against a fake. The production
//! implementation speaks the same HTTP contract as the browser form.

/// Text rendering for listings, empty states, and failures
pub mod render;

use crate::core::record::{Record, RecordInput};
use crate::errors::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;

/// The record gateway's request/response contract, as a client sees it.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Submits one registration; returns the server's acknowledgement text.
    async fn append(&self, input: &RecordInput) -> Result<String>;

    /// Fetches every stored record, in store order.
    async fn list(&self) -> Result<Vec<Record>>;
}

/// HTTP implementation of [`Gateway`] against a running record gateway.
pub struct HttpGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Builds a client for the gateway at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn data_url(&self) -> String {
        format!("{}/api/data", self.base_url.trim_end_matches('/'))
    }
}

fn transport_error(e: &reqwest::Error) -> Error {
    Error::Gateway {
        message: format!("falha na comunicação com o servidor: {e}"),
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn append(&self, input: &RecordInput) -> Result<String> {
        let response = self
            .http
            .post(self.data_url())
            .json(input)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| transport_error(&e))?;

        if status.is_success() {
            Ok(body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or(crate::http::MSG_CREATED)
                .to_string())
        } else {
            // Prefer `message`, then `error`, like the browser form did.
            let message = body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(Value::as_str)
                .unwrap_or("erro desconhecido")
                .to_string();
            Err(Error::Gateway { message })
        }
    }

    async fn list(&self) -> Result<Vec<Record>> {
        let response = self
            .http
            .get(self.data_url())
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if !response.status().is_success() {
            return Err(Error::Gateway {
                message: format!("Erro HTTP! status: {}", response.status().as_u16()),
            });
        }

        response.json().await.map_err(|e| transport_error(&e))
    }
}

/// Runs the load step: fetch the listing and render it, or render the
/// failure with the server-provided text.
pub async fn render_listing(gateway: &dyn Gateway) -> String {
    match gateway.list().await {
        Ok(records) => render::listing(&records),
        Err(err) => render::load_error(&err.to_string()),
    }
}

/// Runs the submit flow: append, report the server's message, and re-run
/// the load step so the new record shows up.
pub async fn submit_and_relist(gateway: &dyn Gateway, input: &RecordInput) -> Result<String> {
    let message = gateway.append(input).await?;
    let listing = render_listing(gateway).await;
    Ok(format!("{message}\n{listing}"))
}
