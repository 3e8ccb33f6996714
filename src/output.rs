//! Render classification results for the CLI
//!
//! Three formats: a plain bullet list, pretty-printed JSON, and a boxed
//! single-column table. An empty result is a valid outcome, not an error,
//! and renders as a "no fields found" message in every format.

use crate::error::Result;

/// Output format for classification results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    List,
    Json,
    Table,
}

impl OutputFormat {
    /// Parse a CLI format name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "list" => Some(OutputFormat::List),
            "json" => Some(OutputFormat::Json),
            "table" => Some(OutputFormat::Table),
            _ => None,
        }
    }
}

/// Render `fields` in the given format. `category` is the human label of
/// the classification ("required", "nullable", ...), `model` the table or
/// model name the fields belong to.
pub fn format_fields(
    fields: &[String],
    format: OutputFormat,
    category: &str,
    model: &str,
) -> Result<String> {
    if fields.is_empty() {
        return Ok(format!("No {} fields found for {}.", category, model));
    }

    match format {
        OutputFormat::List => Ok(format_list(fields, category, model)),
        OutputFormat::Json => {
            Ok(serde_json::to_string_pretty(fields).map_err(anyhow::Error::from)?)
        }
        OutputFormat::Table => Ok(format_table(fields, category, model)),
    }
}

fn format_list(fields: &[String], category: &str, model: &str) -> String {
    let mut out = format!("{} {} fields:\n", model, category);
    for field in fields {
        out.push_str("  - ");
        out.push_str(field);
        out.push('\n');
    }
    out
}

fn format_table(fields: &[String], category: &str, model: &str) -> String {
    let header = format!("{} {} fields", model, category);
    let width = fields
        .iter()
        .map(|f| f.len())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let border = format!("+-{}-+\n", "-".repeat(width));
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&format!("| {:<width$} |\n", header, width = width));
    out.push_str(&border);
    for field in fields {
        out.push_str(&format!("| {:<width$} |\n", field, width = width));
    }
    out.push_str(&border);
    out
}
