//! Choose which variables are worth offering as filters.
//!
//! Primary axis variables are always offered. Other variables are offered
//! only when their range is numeric and not degenerate.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::{DatasetInfo, Dimension, Variable};
use crate::parser::strip_trailing_commas;
use crate::range::{resolve_range, ValueRange};

/// Axis names always offered as filter candidates (compared lower-cased).
pub const PRIMARY_AXIS_NAMES: [&str; 7] = [
    "time",
    "depth",
    "altitude",
    "latitude",
    "longitude",
    "lat",
    "lon",
];

/// True when `name` is one of [`PRIMARY_AXIS_NAMES`], ignoring case.
pub fn is_primary_axis(name: &str) -> bool {
    let lower = name.to_lowercase();
    PRIMARY_AXIS_NAMES.contains(&lower.as_str())
}

/// Select filter candidates from `variables`.
///
/// Primary axis variables come first, in list order, whatever their range.
/// The rest follow in list order when both bounds are present, differ, and
/// parse as numbers. Non-numeric bounds exclude a variable silently.
pub fn select_hints(variables: &[Variable]) -> Vec<&Variable> {
    let mut selected: Vec<&Variable> = variables
        .iter()
        .filter(|var| is_primary_axis(&var.name))
        .collect();
    let mut seen: HashSet<String> = selected.iter().map(|var| var.name.to_lowercase()).collect();

    for var in variables {
        let lower = var.name.to_lowercase();
        if seen.contains(&lower) || !has_numeric_range(var) {
            continue;
        }
        seen.insert(lower);
        selected.push(var);
    }

    selected
}

fn has_numeric_range(var: &Variable) -> bool {
    let min = strip_trailing_commas(&var.min);
    let max = strip_trailing_commas(&var.max);

    !min.is_empty() && !max.is_empty() && min != max && is_number(min) && is_number(max)
}

fn is_number(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok()
}

/// Filter hint for one tabledap variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHint {
    pub name: String,
    pub units: String,
    pub range: ValueRange,
}

impl TableHint {
    /// Example constraint clause, e.g. `sst>=0.5&sst<=31.2`.
    pub fn example(&self) -> String {
        format!(
            "{name}>={min}&{name}<={max}",
            name = self.name,
            min = self.range.min,
            max = self.range.max
        )
    }

    /// No spread between the bounds, so constraining is pointless.
    pub fn is_degenerate(&self) -> bool {
        self.range.is_degenerate()
    }
}

/// Filter hints for every selected variable of a tabledap dataset.
pub fn tabledap_hints(info: &DatasetInfo) -> Vec<TableHint> {
    select_hints(&info.variables)
        .into_iter()
        .map(|var| TableHint {
            name: var.name.clone(),
            units: var.units.clone(),
            range: resolve_range(var, info),
        })
        .collect()
}

/// Slicing hint for one griddap dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridHint {
    pub name: String,
    pub average_spacing: Option<String>,
    pub last_index: Option<u64>,
    pub range: ValueRange,
}

impl GridHint {
    /// Index slice covering the whole axis, e.g. `time[0:1:99]`.
    ///
    /// Falls back to the server's `last` keyword when the size is unknown.
    pub fn index_example(&self) -> String {
        match self.last_index {
            Some(last) => format!("{}[0:1:{}]", self.name, last),
            None => format!("{}[0:1:last]", self.name),
        }
    }

    /// Value slice covering the whole axis, e.g. `latitude[(-89.5):1:(89.5)]`.
    pub fn value_example(&self) -> String {
        format!("{}[({}):1:({})]", self.name, self.range.min, self.range.max)
    }
}

/// Slicing hints for every dimension of a griddap dataset.
pub fn griddap_hints(info: &DatasetInfo) -> Vec<GridHint> {
    info.dimensions
        .iter()
        .map(|dim| grid_hint(dim, info))
        .collect()
}

fn grid_hint(dim: &Dimension, info: &DatasetInfo) -> GridHint {
    GridHint {
        name: dim.name.clone(),
        average_spacing: dim.average_spacing.clone(),
        last_index: dim.last_index(),
        range: resolve_range(dim, info),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(vars: &[&Variable]) -> Vec<String> {
        vars.iter().map(|v| v.name.clone()).collect()
    }

    #[test]
    fn test_primary_axis_overrides_degenerate_range() {
        let vars = vec![
            Variable::new("longitude").with_range("1", "1"),
            Variable::new("chlorophyll").with_range("0.1", "5.2"),
        ];
        assert_eq!(names(&select_hints(&vars)), vec!["longitude", "chlorophyll"]);
    }

    #[test]
    fn test_primary_axes_first_then_dataset_order() {
        let vars = vec![
            Variable::new("sst").with_range("0", "30"),
            Variable::new("LAT").with_range("-90", "90"),
            Variable::new("station"),
            Variable::new("salinity").with_range("30", "37"),
            Variable::new("time"),
        ];
        assert_eq!(
            names(&select_hints(&vars)),
            vec!["LAT", "time", "sst", "salinity"]
        );
    }

    #[test]
    fn test_non_numeric_and_degenerate_excluded() {
        let vars = vec![
            Variable::new("platform").with_range("a", "z"),
            Variable::new("flag").with_range("3", "3"),
            Variable::new("partial").with_range("1", ""),
            Variable::new("trailing").with_range("1,", "2"),
        ];
        assert_eq!(names(&select_hints(&vars)), vec!["trailing"]);
    }

    #[test]
    fn test_table_hint_example() {
        let hint = TableHint {
            name: "sst".to_string(),
            units: "degree_C".to_string(),
            range: ValueRange::new("0.5", "31.2"),
        };
        assert_eq!(hint.example(), "sst>=0.5&sst<=31.2");
        assert!(!hint.is_degenerate());
    }

    #[test]
    fn test_grid_hint_examples() {
        let info = DatasetInfo {
            dimensions: vec![
                Dimension::new("latitude").with_nvalues(180).with_range("-89.5", "89.5"),
                Dimension::new("depth"),
            ],
            ..Default::default()
        };
        let hints = griddap_hints(&info);
        assert_eq!(hints[0].index_example(), "latitude[0:1:179]");
        assert_eq!(hints[0].value_example(), "latitude[(-89.5):1:(89.5)]");
        assert_eq!(hints[1].index_example(), "depth[0:1:last]");
    }
}
