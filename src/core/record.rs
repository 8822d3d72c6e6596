//! Registration record types and input validation.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// One listed record: the sheet's header names zipped with one row's cells.
///
/// Keys keep the sheet's column order. A row shorter than the header leaves
/// its trailing fields absent rather than defaulted.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// The five form fields accepted by `POST /api/data`.
///
/// Wire names are the registration form's Portuguese field names. Missing
/// fields deserialize as empty strings so that the presence check, not the
/// JSON shape, decides the client error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInput {
    /// Patient name.
    #[serde(rename = "Nome", default)]
    pub nome: String,
    /// Street address.
    #[serde(rename = "Endereco", default)]
    pub endereco: String,
    /// Health plan name.
    #[serde(rename = "Plano", default)]
    pub plano: String,
    /// Plan card number.
    #[serde(rename = "Carteirinha", default)]
    pub carteirinha: String,
    /// Contact phone.
    #[serde(rename = "Telefone", default)]
    pub telefone: String,
}

impl RecordInput {
    /// Checks that every field carries a value.
    ///
    /// This is a presence check only; whitespace counts as a value. Returns
    /// the wire name of the first empty field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("Nome", &self.nome),
            ("Endereco", &self.endereco),
            ("Plano", &self.plano),
            ("Carteirinha", &self.carteirinha),
            ("Telefone", &self.telefone),
        ] {
            if value.is_empty() {
                return Err(Error::Validation { field });
            }
        }
        Ok(())
    }
}
