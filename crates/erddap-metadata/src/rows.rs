//! Row-level access to the dataset info feed.
//!
//! ERDDAP publishes dataset metadata at `info/{datasetID}/index.csv` as a
//! flat table with one row per attribute, dimension or variable:
//!
//! ```text
//! Row Type,Variable Name,Attribute Name,Data Type,Value
//! attribute,NC_GLOBAL,title,String,Sea Surface Temperature
//! dimension,time,,double,"nValues=8, evenlySpaced=true, averageSpacing=1 day"
//! variable,sst,,float,"time, latitude, longitude"
//! attribute,sst,units,String,degree_C
//! ```
//!
//! This module validates the column schema and normalizes every record into
//! a [`MetadataRow`], with missing cells read as empty strings.

use std::io::Read;

use csv::ByteRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ParseError, ParseResult};

/// Row type of attribute rows.
pub const ROW_TYPE_ATTRIBUTE: &str = "attribute";

/// Row type of dimension identity rows.
pub const ROW_TYPE_DIMENSION: &str = "dimension";

/// Row type of variable identity rows.
pub const ROW_TYPE_VARIABLE: &str = "variable";

/// Variable name carrying dataset-wide (global) attributes.
pub const NC_GLOBAL: &str = "NC_GLOBAL";

/// Normalized column names that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["row_type", "variable_name", "attribute_name", "value"];

/// One row of the dataset info feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRow {
    pub row_type: String,
    pub variable_name: String,
    pub attribute_name: String,
    pub data_type: String,
    pub value: String,
}

impl MetadataRow {
    /// Create a row from its five cells.
    pub fn new(
        row_type: impl Into<String>,
        variable_name: impl Into<String>,
        attribute_name: impl Into<String>,
        data_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            row_type: row_type.into(),
            variable_name: variable_name.into(),
            attribute_name: attribute_name.into(),
            data_type: data_type.into(),
            value: value.into(),
        }
    }

    /// Create an attribute row for `variable_name`.
    pub fn attribute(
        variable_name: impl Into<String>,
        attribute_name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(ROW_TYPE_ATTRIBUTE, variable_name, attribute_name, "String", value)
    }

    /// Create a dimension identity row.
    pub fn dimension(
        name: impl Into<String>,
        data_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(ROW_TYPE_DIMENSION, name, "", data_type, value)
    }

    /// Create a variable identity row.
    pub fn variable(
        name: impl Into<String>,
        data_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(ROW_TYPE_VARIABLE, name, "", data_type, value)
    }

    pub fn is_attribute(&self) -> bool {
        self.row_type == ROW_TYPE_ATTRIBUTE
    }

    pub fn is_global_attribute(&self) -> bool {
        self.is_attribute() && self.variable_name == NC_GLOBAL
    }
}

/// Positions of the metadata fields within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    row_type: usize,
    variable_name: usize,
    attribute_name: usize,
    data_type: Option<usize>,
    value: usize,
}

impl ColumnMap {
    /// Resolve column positions from a header row.
    ///
    /// Header names are compared after normalization, so `Row Type`,
    /// `row type` and `row_type` all name the same column. `data_type` is
    /// optional; every other field is required.
    pub fn from_headers<I, S>(headers: I) -> ParseResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: Vec<String> = headers
            .into_iter()
            .map(|h| normalize_header(h.as_ref()))
            .collect();
        let position = |name: &str| normalized.iter().position(|h| h == name);

        match (
            position("row_type"),
            position("variable_name"),
            position("attribute_name"),
            position("value"),
        ) {
            (Some(row_type), Some(variable_name), Some(attribute_name), Some(value)) => Ok(Self {
                row_type,
                variable_name,
                attribute_name,
                data_type: position("data_type"),
                value,
            }),
            _ => {
                let missing = REQUIRED_COLUMNS
                    .iter()
                    .filter(|column| position(column).is_none())
                    .map(|column| column.to_string())
                    .collect();
                Err(ParseError::MissingColumns(missing))
            }
        }
    }

    /// Build a row from the cells of one record.
    ///
    /// Short records are padded with empty cells. Identifier cells are
    /// trimmed; the free-text value is kept as-is.
    pub fn row_from_cells<'a, I>(&self, cells: I) -> MetadataRow
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cells: Vec<&str> = cells.into_iter().collect();
        let cell = |idx: usize| cells.get(idx).copied().unwrap_or("");

        MetadataRow {
            row_type: cell(self.row_type).trim().to_string(),
            variable_name: cell(self.variable_name).trim().to_string(),
            attribute_name: cell(self.attribute_name).trim().to_string(),
            data_type: self
                .data_type
                .map(|idx| cell(idx).trim().to_string())
                .unwrap_or_default(),
            value: cell(self.value).to_string(),
        }
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Read every row of a CSV dataset info feed.
///
/// Lines starting with `#` are treated as comments and blank lines are
/// skipped. A cell that is not valid UTF-8 is read as empty. Fails only
/// when the header lacks a required column or the input cannot be read.
pub fn read_rows<R: Read>(reader: R) -> ParseResult<Vec<MetadataRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(
        csv_reader
            .byte_headers()?
            .iter()
            .map(String::from_utf8_lossy),
    )?;

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while csv_reader.read_byte_record(&mut record)? {
        rows.push(columns.row_from_cells(record.iter().map(decode_cell)));
    }

    Ok(rows)
}

fn decode_cell(bytes: &[u8]) -> &str {
    std::str::from_utf8(bytes).unwrap_or_else(|e| {
        debug!(error = %e, "Reading undecodable cell as empty");
        ""
    })
}
