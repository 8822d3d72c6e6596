//! Header-driven column mapping.
//!
//! The spreadsheet's own header row is authoritative: for an append, each
//! header cell selects one value through a fixed set of [`ColumnRule`]s, and
//! for a read, header names are zipped with row cells into records. Both
//! directions are pure functions so every mapping property is testable
//! without a remote call.

use crate::core::record::{Record, RecordInput};
use chrono::DateTime;
use chrono_tz::Tz;

/// Status written for every newly appended record. The sheet may be edited
/// out of band to move a record past this state; this system never does.
pub const STATUS_NEW: &str = "Pendente";

/// Timezone used for generated timestamps.
pub const STORE_TIMEZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Format for the generated `Data e Hora` column.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// The five direct form fields a header can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Patient name.
    Nome,
    /// Street address.
    Endereco,
    /// Health plan name.
    Plano,
    /// Plan card number.
    Carteirinha,
    /// Contact phone.
    Telefone,
}

/// How one header column obtains its value in a newly appended row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRule {
    /// Copy one of the form fields verbatim.
    Field(FormField),
    /// Server clock, formatted in the store timezone.
    Timestamp,
    /// The constant status for new records.
    Status,
    /// Unrecognized header; always an empty cell.
    Empty,
}

/// Resolves a header cell to its column rule.
///
/// Canonical headers are `Nome`, `Endereço`, `Plano`, `Carteirinha`,
/// `Telefone`, `Data e Hora` and `Status`; the legacy spellings `Endereco`
/// and `Data/Hora` are accepted as aliases. Matching is exact otherwise.
#[must_use]
pub fn column_rule(header: &str) -> ColumnRule {
    match header {
        "Nome" => ColumnRule::Field(FormField::Nome),
        "Endereço" | "Endereco" => ColumnRule::Field(FormField::Endereco),
        "Plano" => ColumnRule::Field(FormField::Plano),
        "Carteirinha" => ColumnRule::Field(FormField::Carteirinha),
        "Telefone" => ColumnRule::Field(FormField::Telefone),
        "Data e Hora" | "Data/Hora" => ColumnRule::Timestamp,
        "Status" => ColumnRule::Status,
        _ => ColumnRule::Empty,
    }
}

/// Lays out one input as a row following the given header order.
///
/// Produces exactly one value per header, in header order. The caller
/// supplies `now` so the function stays pure; the gateway passes the
/// current time in [`STORE_TIMEZONE`].
#[must_use]
pub fn map_row(headers: &[String], input: &RecordInput, now: DateTime<Tz>) -> Vec<String> {
    headers
        .iter()
        .map(|header| match column_rule(header) {
            ColumnRule::Field(field) => field_value(input, field).to_string(),
            ColumnRule::Timestamp => now.format(TIMESTAMP_FORMAT).to_string(),
            ColumnRule::Status => STATUS_NEW.to_string(),
            ColumnRule::Empty => String::new(),
        })
        .collect()
}

fn field_value(input: &RecordInput, field: FormField) -> &str {
    match field {
        FormField::Nome => &input.nome,
        FormField::Endereco => &input.endereco,
        FormField::Plano => &input.plano,
        FormField::Carteirinha => &input.carteirinha,
        FormField::Telefone => &input.telefone,
    }
}

/// Zips header names with cell values into one record per data row.
///
/// Row 0 is the header row. A table with zero or one row yields no records.
/// Rows shorter than the header leave trailing fields absent; cells beyond
/// the header width are ignored. Row order is preserved.
#[must_use]
pub fn rows_to_records(rows: &[Vec<String>]) -> Vec<Record> {
    let Some((headers, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    data_rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(header, cell)| (header.clone(), serde_json::Value::String(cell.clone())))
                .collect()
        })
        .collect()
}
