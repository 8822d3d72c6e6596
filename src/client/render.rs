//! Text rendering for the form client.
//!
//! Records arrive keyed by whatever header names the sheet actually uses,
//! so lookups try the canonical spelling first and the legacy alias second.
//! Absent or empty fields render as `N/A`.

use crate::core::record::Record;
use serde_json::Value;

/// Placeholder printed while the listing is being fetched.
pub const LOADING: &str = "Carregando dados...";
/// Shown when the sheet has no data rows yet.
pub const EMPTY: &str = "Nenhum dado cadastrado ainda.";

const MISSING: &str = "N/A";

/// Display labels in canonical order, each with the header spellings to try.
const DISPLAY_FIELDS: &[(&str, &[&str])] = &[
    ("Nome", &["Nome"]),
    ("Endereço", &["Endereço", "Endereco"]),
    ("Plano", &["Plano"]),
    ("Carteirinha", &["Carteirinha"]),
    ("Telefone", &["Telefone"]),
    ("Data/Hora", &["Data e Hora", "Data/Hora"]),
    ("Status", &["Status"]),
];

/// Formats one record as a single display line.
#[must_use]
pub fn record_line(record: &Record) -> String {
    let parts: Vec<String> = DISPLAY_FIELDS
        .iter()
        .map(|(label, keys)| {
            let value = keys
                .iter()
                .find_map(|key| record.get(*key).and_then(Value::as_str))
                .filter(|value| !value.is_empty())
                .unwrap_or(MISSING);
            format!("{label}: {value}")
        })
        .collect();
    parts.join(", ")
}

/// Formats the whole listing: one line per record, or the empty-state text.
#[must_use]
pub fn listing(records: &[Record]) -> String {
    if records.is_empty() {
        return EMPTY.to_string();
    }

    let lines: Vec<String> = records.iter().map(record_line).collect();
    lines.join("\n")
}

/// Load-failure text carrying the server-provided message.
#[must_use]
pub fn load_error(message: &str) -> String {
    format!("Erro ao carregar dados: {message}")
}

/// Submit-failure text carrying the server-provided message.
#[must_use]
pub fn submit_error(message: &str) -> String {
    format!("Erro ao enviar dados: {message}")
}
