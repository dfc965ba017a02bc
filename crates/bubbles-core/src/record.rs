//! Raw dataset rows, as read from the CSV export.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// One dataset row. Column names follow the published CSV (`nom`, `descr`, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(rename = "nom", default)]
    pub name: String,
    #[serde(rename = "descr", default)]
    pub description: String,
    #[serde(rename = "img", default)]
    pub image: String,
    #[serde(default)]
    pub group: String,
    /// Kept as text so a malformed amount is reported with its row instead of a generic
    /// deserialization error.
    #[serde(default)]
    pub total_amount: Option<String>,
    #[serde(rename = "ministres", default)]
    pub ministry: String,
    #[serde(rename = "soutien", default)]
    pub support: String,
    #[serde(rename = "medias", default)]
    pub media: String,
    #[serde(rename = "politique", default)]
    pub office: String,
}

impl Record {
    /// Parses `total_amount`. `row` is the 1-based data row, used for error reporting.
    pub fn magnitude(&self, row: usize) -> Result<f64> {
        let raw = match self.total_amount.as_deref().map(str::trim) {
            None | Some("") => {
                return Err(Error::MissingMagnitude {
                    row,
                    id: self.id.clone(),
                });
            }
            Some(raw) => raw,
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
            _ => Err(Error::InvalidMagnitude {
                row,
                id: self.id.clone(),
                value: raw.to_string(),
            }),
        }
    }
}

pub fn read_records<R: std::io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let records = read_records(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), records = records.len(), "dataset loaded");
    Ok(records)
}
