//! Google Sheets implementation of the tabular store.
//!
//! Three calls cover the gateway's needs: fetch the header row, fetch every
//! row, and append one row with `valueInputOption=USER_ENTERED`. Failures of
//! any kind surface as [`Error::RemoteStore`] carrying the API's own message
//! when one is available.

use crate::errors::{Error, Result};
use crate::store::{TabularStore, auth::TokenProvider};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// A block of cell values as the `values` API represents it.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ValueRange {
    /// Absent entirely when the requested range holds no values.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

/// Error envelope of the Google APIs: `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn values_url(spreadsheet_id: &str, range: &str) -> String {
    // Ranges like `Página2!A:Z` need escaping in the URL path.
    format!(
        "{SHEETS_API_BASE}/{spreadsheet_id}/values/{}",
        urlencoding::encode(range)
    )
}

/// Client for one fixed spreadsheet and sheet, shared by all requests.
pub struct SheetsStore {
    http: reqwest::Client,
    auth: Arc<TokenProvider>,
    spreadsheet_id: String,
    sheet_name: String,
}

impl SheetsStore {
    /// Builds a store for the configured spreadsheet and sheet name.
    #[must_use]
    pub const fn new(
        http: reqwest::Client,
        auth: Arc<TokenProvider>,
        spreadsheet_id: String,
        sheet_name: String,
    ) -> Self {
        Self {
            http,
            auth,
            spreadsheet_id,
            sheet_name,
        }
    }

    async fn get_values(&self, range: &str) -> Result<Vec<Vec<String>>> {
        let token = self.auth.bearer_token().await?;
        let response = self
            .http
            .get(values_url(&self.spreadsheet_id, range))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| Error::RemoteStore {
                message: format!("spreadsheet request failed: {e}"),
            })?;

        let body: ValueRange = check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::RemoteStore {
                message: format!("malformed spreadsheet response: {e}"),
            })?;
        Ok(body.values)
    }
}

/// Maps a non-success response to the API's own error message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text).map_or_else(
        |_| format!("spreadsheet API returned {status}: {text}"),
        |body| body.error.message,
    );
    Err(Error::RemoteStore { message })
}

#[async_trait]
impl TabularStore for SheetsStore {
    async fn header_row(&self) -> Result<Vec<String>> {
        let rows = self.get_values(&format!("{}!1:1", self.sheet_name)).await?;
        Ok(rows.into_iter().next().unwrap_or_default())
    }

    async fn all_rows(&self) -> Result<Vec<Vec<String>>> {
        self.get_values(&format!("{}!A:Z", self.sheet_name)).await
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        let token = self.auth.bearer_token().await?;
        let url = format!(
            "{}:append",
            values_url(&self.spreadsheet_id, &format!("{}!A:A", self.sheet_name))
        );

        let response = self
            .http
            .post(url)
            .query(&[("valueInputOption", "USER_ENTERED")])
            .bearer_auth(token)
            .json(&ValueRange {
                values: vec![values],
            })
            .send()
            .await
            .map_err(|e| Error::RemoteStore {
                message: format!("spreadsheet request failed: {e}"),
            })?;

        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_values_url_escapes_the_range() {
        let url = values_url("sheet-id", "Página2!A:Z");
        assert_eq!(
            url,
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/P%C3%A1gina2%21A%3AZ"
        );
    }

    #[test]
    fn test_value_range_with_rows() {
        let body: ValueRange = serde_json::from_str(
            r#"{
                "range": "Página2!A1:C2",
                "majorDimension": "ROWS",
                "values": [["Nome", "Status"], ["Ana", "Pendente"]]
            }"#,
        )
        .unwrap();

        assert_eq!(body.values.len(), 2);
        assert_eq!(body.values[0], vec!["Nome", "Status"]);
    }

    #[test]
    fn test_empty_range_deserializes_without_values_field() {
        // The API omits `values` entirely for an empty range.
        let body: ValueRange =
            serde_json::from_str(r#"{"range": "Página2!1:1", "majorDimension": "ROWS"}"#).unwrap();
        assert!(body.values.is_empty());
    }

    #[test]
    fn test_append_body_shape() {
        let body = ValueRange {
            values: vec![vec!["Ana".to_string(), "Pendente".to_string()]],
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["values"][0][0], "Ana");
    }

    #[test]
    fn test_api_error_body_parses() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{
                "error": {
                    "code": 403,
                    "message": "The caller does not have permission",
                    "status": "PERMISSION_DENIED"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(body.error.message, "The caller does not have permission");
    }
}
