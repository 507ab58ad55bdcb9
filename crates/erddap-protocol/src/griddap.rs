//! Griddap query suffixes: variables sharing one combined slice expression.
//!
//! Every variable in a griddap request must carry the same slice, so the
//! per-dimension slices are concatenated once and repeated verbatim:
//!
//! ```text
//! sst[0:1:10][0:1:179][0:1:359],chl[0:1:10][0:1:179][0:1:359]
//! ```

use std::collections::HashMap;

use erddap_metadata::Dimension;

use crate::tabledap::join_names;

/// Server keyword for the last index along an axis.
pub const LAST_INDEX_KEYWORD: &str = "last";

/// User-supplied slice expressions keyed by dimension name.
///
/// Dimensions without an entry, or with a blank one, get the default
/// full-range slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SliceSpec {
    slices: HashMap<String, String>,
}

impl SliceSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the verbatim bracket expression for a dimension, e.g. `[0:1:10]`.
    pub fn set(&mut self, dimension: impl Into<String>, expression: impl Into<String>) {
        self.slices.insert(dimension.into(), expression.into());
    }

    pub fn with(mut self, dimension: impl Into<String>, expression: impl Into<String>) -> Self {
        self.set(dimension, expression);
        self
    }

    /// Non-blank expression supplied for `dimension`.
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.slices
            .get(dimension)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Default slice covering the whole axis: `[0:1:{nvalues-1}]`.
///
/// When the sample count is unknown or zero the stop is the `last` keyword.
pub fn default_slice(dimension: &Dimension) -> String {
    match dimension.last_index() {
        Some(last) => format!("[0:1:{}]", last),
        None => format!("[0:1:{}]", LAST_INDEX_KEYWORD),
    }
}

/// Slice text for one dimension: the supplied expression or the default.
pub fn slice_for(dimension: &Dimension, slices: &SliceSpec) -> String {
    slices
        .get(&dimension.name)
        .map(str::to_string)
        .unwrap_or_else(|| default_slice(dimension))
}

/// Concatenate the slices of every dimension in `dimension_order`.
pub fn combined_slice(dimension_order: &[Dimension], slices: &SliceSpec) -> String {
    dimension_order
        .iter()
        .map(|dim| slice_for(dim, slices))
        .collect()
}

/// Build a griddap query suffix.
///
/// The combined slice is computed once and appended identically to every
/// selected variable; the resulting tokens are comma-joined.
pub fn build_griddap_suffix<S: AsRef<str>>(
    selected_variables: &[S],
    dimension_order: &[Dimension],
    slices: &SliceSpec,
) -> String {
    let slice = combined_slice(dimension_order, slices);

    let sliced: Vec<String> = selected_variables
        .iter()
        .map(|var| format!("{}{}", var.as_ref(), slice))
        .collect();

    join_names(&sliced)
}
