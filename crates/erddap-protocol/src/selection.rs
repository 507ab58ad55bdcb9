//! Resolve user selections against a dataset.

use erddap_metadata::{is_primary_axis, DatasetInfo, Dimension, Variable};

use crate::error::{QueryError, QueryResult};

/// Resolve a comma-separated list of zero-based indices into variable names.
///
/// Blank input selects every variable in dataset order. Any token that is
/// not an index, or an index past the end, rejects the whole selection.
pub fn select_variables(variables: &[Variable], input: &str) -> QueryResult<Vec<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(variables.iter().map(|v| v.name.clone()).collect());
    }

    input
        .split(',')
        .map(|token| {
            let token = token.trim();
            let idx: usize = token
                .parse()
                .map_err(|_| QueryError::InvalidSelection(format!("'{}' is not an index", token)))?;
            variables.get(idx).map(|v| v.name.clone()).ok_or_else(|| {
                QueryError::InvalidSelection(format!(
                    "index {} out of range (0..{})",
                    idx,
                    variables.len()
                ))
            })
        })
        .collect()
}

/// Look up a variable by exact name.
pub fn find_variable<'a>(variables: &'a [Variable], name: &str) -> QueryResult<&'a Variable> {
    variables
        .iter()
        .find(|v| v.name == name)
        .ok_or_else(|| QueryError::InvalidSelection(format!("unknown variable '{}'", name)))
}

/// Look up a dimension by exact name.
pub fn find_dimension<'a>(dimensions: &'a [Dimension], name: &str) -> QueryResult<&'a Dimension> {
    dimensions
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| QueryError::InvalidSelection(format!("unknown dimension '{}'", name)))
}

/// Axes available for slicing.
///
/// The dataset's own dimensions when it lists any; otherwise the variables
/// named like primary axes, with unknown sample counts.
pub fn axis_candidates(info: &DatasetInfo) -> Vec<Dimension> {
    if !info.dimensions.is_empty() {
        return info.dimensions.clone();
    }

    info.variables
        .iter()
        .filter(|var| is_primary_axis(&var.name))
        .map(Dimension::from)
        .collect()
}
