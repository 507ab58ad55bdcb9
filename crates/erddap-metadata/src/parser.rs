//! Build a [`DatasetInfo`] from dataset info rows.

use std::collections::{BTreeMap, HashMap};
use std::io::Read;

use tracing::debug;

use crate::error::ParseResult;
use crate::model::{DatasetInfo, Dimension, Variable};
use crate::rows::{read_rows, MetadataRow, ROW_TYPE_DIMENSION, ROW_TYPE_VARIABLE};
use crate::value_tokens::DimensionValue;

/// Per-entity attribute names recognized by the parser.
pub mod attr {
    pub const LONG_NAME: &str = "long_name";
    pub const STANDARD_NAME: &str = "standard_name";
    pub const UNITS: &str = "units";
    pub const COMMENT: &str = "comment";
    pub const ACTUAL_RANGE: &str = "actual_range";
    pub const FLAG_MEANINGS: &str = "flag_meanings";
    pub const FLAG_VALUES: &str = "flag_values";
}

/// Parse a CSV dataset info feed into a [`DatasetInfo`].
///
/// No partial result is returned: a schema error aborts the whole parse.
pub fn parse_info_csv<R: Read>(dataset_id: &str, reader: R) -> ParseResult<DatasetInfo> {
    let rows = read_rows(reader)?;
    Ok(parse_rows(dataset_id, &rows))
}

/// Build a [`DatasetInfo`] from already-normalized rows.
///
/// Dimensions and variables come out in the order their identity rows
/// first appear, independent of where their attribute rows sit.
pub fn parse_rows(dataset_id: &str, rows: &[MetadataRow]) -> DatasetInfo {
    let index = RowIndex::build(rows);

    let dimensions: Vec<Dimension> = index
        .dimension_order
        .iter()
        .map(|name| index.dimension(*name))
        .collect();

    let variables: Vec<Variable> = index
        .variable_order
        .iter()
        .map(|name| index.variable(*name))
        .collect();

    debug!(
        dataset_id = %dataset_id,
        rows = rows.len(),
        global_attrs = index.global_attrs.len(),
        dimensions = dimensions.len(),
        variables = variables.len(),
        "Parsed dataset info"
    );

    DatasetInfo::new(dataset_id, index.global_attrs, dimensions, variables)
}

/// Split `actual_range` text into `(min, max)`.
///
/// The raw text is split on its first whitespace run and each side is
/// stripped of trailing commas. Leading or trailing whitespace counts as
/// that run, so `" 5"` yields an empty `min`. Text without whitespace yields
/// two empty strings: a lone value is not a usable range.
pub fn split_actual_range(raw: &str) -> (String, String) {
    match raw.split_once(char::is_whitespace) {
        Some((min, rest)) => (
            strip_trailing_commas(min).to_string(),
            strip_trailing_commas(rest.trim()).to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

/// Remove any trailing commas from a range bound.
pub fn strip_trailing_commas(text: &str) -> &str {
    text.trim_end_matches(',')
}

/// Rows grouped by entity name in a single pass.
struct RowIndex<'a> {
    global_attrs: BTreeMap<String, String>,
    dimension_order: Vec<&'a str>,
    variable_order: Vec<&'a str>,
    identities: HashMap<(&'a str, &'a str), &'a MetadataRow>,
    attributes: HashMap<&'a str, Vec<&'a MetadataRow>>,
}

impl<'a> RowIndex<'a> {
    fn build(rows: &'a [MetadataRow]) -> Self {
        let mut index = Self {
            global_attrs: BTreeMap::new(),
            dimension_order: Vec::new(),
            variable_order: Vec::new(),
            identities: HashMap::new(),
            attributes: HashMap::new(),
        };

        for row in rows {
            if row.is_global_attribute() {
                index
                    .global_attrs
                    .insert(row.attribute_name.clone(), row.value.clone());
            } else if row.is_attribute() {
                index
                    .attributes
                    .entry(row.variable_name.as_str())
                    .or_default()
                    .push(row);
            } else if row.row_type == ROW_TYPE_DIMENSION || row.row_type == ROW_TYPE_VARIABLE {
                index.record_identity(row);
            }
        }

        index
    }

    fn record_identity(&mut self, row: &'a MetadataRow) {
        let name = row.variable_name.as_str();
        if name.is_empty() {
            debug!(row_type = %row.row_type, "Skipping identity row without a name");
            return;
        }

        let key = (row.row_type.as_str(), name);
        if self.identities.contains_key(&key) {
            return;
        }
        self.identities.insert(key, row);

        if row.row_type == ROW_TYPE_DIMENSION {
            self.dimension_order.push(name);
        } else {
            self.variable_order.push(name);
        }
    }

    /// First value of `attribute` for `name`, or an empty string.
    fn attribute(&self, name: &str, attribute: &str) -> String {
        self.attributes
            .get(name)
            .and_then(|rows| rows.iter().find(|row| row.attribute_name == attribute))
            .map(|row| row.value.clone())
            .unwrap_or_default()
    }

    fn identity(&self, row_type: &'a str, name: &'a str) -> Option<&'a MetadataRow> {
        self.identities.get(&(row_type, name)).copied()
    }

    fn dimension(&self, name: &'a str) -> Dimension {
        let identity = self.identity(ROW_TYPE_DIMENSION, name);
        let tokens = identity
            .map(|row| DimensionValue::parse(&row.value))
            .unwrap_or_default();
        let (min, max) = split_actual_range(&self.attribute(name, attr::ACTUAL_RANGE));

        Dimension {
            name: name.to_string(),
            data_type: identity.map(|row| row.data_type.clone()).unwrap_or_default(),
            nvalues: tokens.n_values(),
            average_spacing: tokens.average_spacing().map(str::to_string),
            min,
            max,
            long_name: self.attribute(name, attr::LONG_NAME),
            standard_name: self.attribute(name, attr::STANDARD_NAME),
            units: self.attribute(name, attr::UNITS),
        }
    }

    fn variable(&self, name: &'a str) -> Variable {
        let identity = self.identity(ROW_TYPE_VARIABLE, name);
        let actual_range = self.attribute(name, attr::ACTUAL_RANGE);
        let (min, max) = split_actual_range(&actual_range);

        Variable {
            name: name.to_string(),
            data_type: identity.map(|row| row.data_type.clone()).unwrap_or_default(),
            units: self.attribute(name, attr::UNITS),
            standard_name: self.attribute(name, attr::STANDARD_NAME),
            long_name: self.attribute(name, attr::LONG_NAME),
            comment: self.attribute(name, attr::COMMENT),
            min,
            max,
            actual_range,
            flag_meanings: self.attribute(name, attr::FLAG_MEANINGS),
            flag_values: self.attribute(name, attr::FLAG_VALUES),
        }
    }
}
