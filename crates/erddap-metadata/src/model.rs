//! Structured dataset model built from the info feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Global attribute names copied into [`DatasetInfo`] convenience fields.
pub mod global {
    pub const TITLE: &str = "title";
    pub const SUMMARY: &str = "summary";
    pub const INSTITUTION: &str = "institution";
    pub const TIME_COVERAGE_START: &str = "time_coverage_start";
    pub const TIME_COVERAGE_END: &str = "time_coverage_end";
    pub const NORTHERNMOST_NORTHING: &str = "Northernmost_Northing";
    pub const EASTERNMOST_EASTING: &str = "Easternmost_Easting";
    pub const SOUTHERNMOST_NORTHING: &str = "Southernmost_Northing";
    pub const WESTERNMOST_EASTING: &str = "Westernmost_Easting";
    pub const CDM_DATA_TYPE: &str = "cdm_data_type";
    pub const DATA_TYPE: &str = "data_type";
}

/// Everything known about one dataset.
///
/// Built once per metadata fetch and never mutated afterwards. Missing
/// metadata shows up as empty strings, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub dataset_id: String,
    pub title: String,
    pub summary: String,
    pub institution: String,
    pub time_coverage_start: String,
    pub time_coverage_end: String,
    pub northernmost_northing: String,
    pub easternmost_easting: String,
    pub southernmost_northing: String,
    pub westernmost_easting: String,
    pub cdm_data_type: String,
    pub data_type: String,
    pub global_attrs: BTreeMap<String, String>,
    /// Dimensions in first-seen order.
    pub dimensions: Vec<Dimension>,
    /// Variables in first-seen order.
    pub variables: Vec<Variable>,
}

impl DatasetInfo {
    /// Build the record, deriving the convenience fields from `global_attrs`.
    pub fn new(
        dataset_id: impl Into<String>,
        global_attrs: BTreeMap<String, String>,
        dimensions: Vec<Dimension>,
        variables: Vec<Variable>,
    ) -> Self {
        let attr = |name: &str| global_attrs.get(name).cloned().unwrap_or_default();

        Self {
            dataset_id: dataset_id.into(),
            title: attr(global::TITLE),
            summary: attr(global::SUMMARY),
            institution: attr(global::INSTITUTION),
            time_coverage_start: attr(global::TIME_COVERAGE_START),
            time_coverage_end: attr(global::TIME_COVERAGE_END),
            northernmost_northing: attr(global::NORTHERNMOST_NORTHING),
            easternmost_easting: attr(global::EASTERNMOST_EASTING),
            southernmost_northing: attr(global::SOUTHERNMOST_NORTHING),
            westernmost_easting: attr(global::WESTERNMOST_EASTING),
            cdm_data_type: attr(global::CDM_DATA_TYPE),
            data_type: attr(global::DATA_TYPE),
            global_attrs,
            dimensions,
            variables,
        }
    }

    /// Global attribute value, or an empty string.
    pub fn global_attr(&self, name: &str) -> &str {
        self.global_attrs.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.name.clone()).collect()
    }

    /// True when `cdm_data_type` declares a gridded dataset.
    pub fn is_grid(&self) -> bool {
        self.cdm_data_type.eq_ignore_ascii_case("grid")
    }
}

/// One axis of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimension {
    pub name: String,
    pub data_type: String,
    /// Number of samples along the axis, when the feed reports it.
    pub nvalues: Option<u64>,
    pub average_spacing: Option<String>,
    pub min: String,
    pub max: String,
    pub long_name: String,
    pub standard_name: String,
    pub units: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_nvalues(mut self, nvalues: u64) -> Self {
        self.nvalues = Some(nvalues);
        self
    }

    pub fn with_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min = min.into();
        self.max = max.into();
        self
    }

    /// Last valid zero-based index, or `None` when the size is unknown or zero.
    pub fn last_index(&self) -> Option<u64> {
        self.nvalues.and_then(|n| n.checked_sub(1))
    }
}

/// Variables standing in for dimensions keep their name, units and range;
/// the sample count is unknown.
impl From<&Variable> for Dimension {
    fn from(var: &Variable) -> Self {
        Self {
            name: var.name.clone(),
            data_type: var.data_type.clone(),
            nvalues: None,
            average_spacing: None,
            min: var.min.clone(),
            max: var.max.clone(),
            long_name: var.long_name.clone(),
            standard_name: var.standard_name.clone(),
            units: var.units.clone(),
        }
    }
}

/// One measured quantity of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub data_type: String,
    pub units: String,
    pub standard_name: String,
    pub long_name: String,
    pub comment: String,
    pub min: String,
    pub max: String,
    /// Raw `actual_range` text, preserved verbatim.
    pub actual_range: String,
    pub flag_meanings: String,
    pub flag_values: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min = min.into();
        self.max = max.into();
        self
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }
}

/// Read access shared by dimensions and variables.
pub trait Entity {
    fn name(&self) -> &str;
    fn units(&self) -> &str;
    fn min(&self) -> &str;
    fn max(&self) -> &str;
}

impl Entity for Dimension {
    fn name(&self) -> &str {
        &self.name
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn min(&self) -> &str {
        &self.min
    }

    fn max(&self) -> &str {
        &self.max
    }
}

impl Entity for Variable {
    fn name(&self) -> &str {
        &self.name
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn min(&self) -> &str {
        &self.min
    }

    fn max(&self) -> &str {
        &self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_fields_from_globals() {
        let mut attrs = BTreeMap::new();
        attrs.insert("title".to_string(), "SST".to_string());
        attrs.insert("Northernmost_Northing".to_string(), "89.5".to_string());
        attrs.insert("cdm_data_type".to_string(), "Grid".to_string());

        let info = DatasetInfo::new("erdSST", attrs, vec![], vec![]);
        assert_eq!(info.title, "SST");
        assert_eq!(info.northernmost_northing, "89.5");
        assert_eq!(info.summary, "");
        assert!(info.is_grid());
        assert_eq!(info.global_attr("missing"), "");
    }

    #[test]
    fn test_last_index() {
        assert_eq!(Dimension::new("time").with_nvalues(100).last_index(), Some(99));
        assert_eq!(Dimension::new("time").with_nvalues(0).last_index(), None);
        assert_eq!(Dimension::new("time").last_index(), None);
    }

    #[test]
    fn test_dimension_from_variable() {
        let var = Variable::new("latitude")
            .with_range("-90", "90")
            .with_units("degrees_north");
        let dim = Dimension::from(&var);
        assert_eq!(dim.name, "latitude");
        assert_eq!(dim.units, "degrees_north");
        assert_eq!((dim.min.as_str(), dim.max.as_str()), ("-90", "90"));
        assert_eq!(dim.nvalues, None);
    }
}
