//! Canonical value ranges for dimensions and variables.
//!
//! The feed reports time as a numeric epoch offset, which is not something a
//! user can type back into a query. For time axes the ISO coverage window
//! from the global attributes is returned instead.

use serde::{Deserialize, Serialize};

use crate::model::{DatasetInfo, Entity};
use crate::parser::strip_trailing_commas;

/// A `(min, max)` pair of opaque value texts.
///
/// An empty bound means no usable range; that is the only way a missing
/// range is signaled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: String,
    pub max: String,
}

impl ValueRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Both bounds are present.
    pub fn is_usable(&self) -> bool {
        !self.min.is_empty() && !self.max.is_empty()
    }

    /// Both bounds are present and textually equal.
    pub fn is_degenerate(&self) -> bool {
        self.is_usable() && self.min == self.max
    }
}

/// True when `name` is `time`, ignoring case.
pub fn is_time_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("time")
}

/// Heuristic time-axis check: named `time`, or units of the form `... since ...`.
///
/// The feed does not declare axis types, so this is an approximation.
pub fn is_time_axis(name: &str, units: &str) -> bool {
    is_time_name(name) || units.to_lowercase().contains("since")
}

/// Resolve the displayable range of an entity.
///
/// Entities named `time` report the dataset's time coverage window and
/// ignore their own `actual_range`; everything else reports its derived
/// bounds with trailing commas removed.
pub fn resolve_range<E: Entity + ?Sized>(entity: &E, info: &DatasetInfo) -> ValueRange {
    if is_time_name(entity.name()) {
        return time_coverage(info);
    }
    own_range(entity)
}

/// Resolve the range offered when prompting for a tabledap constraint.
///
/// Same as [`resolve_range`] except that the wider [`is_time_axis`]
/// heuristic decides whether the time coverage window applies.
pub fn resolve_constraint_range<E: Entity + ?Sized>(entity: &E, info: &DatasetInfo) -> ValueRange {
    if is_time_axis(entity.name(), entity.units()) {
        return time_coverage(info);
    }
    own_range(entity)
}

fn time_coverage(info: &DatasetInfo) -> ValueRange {
    ValueRange::new(
        info.time_coverage_start.clone(),
        info.time_coverage_end.clone(),
    )
}

fn own_range<E: Entity + ?Sized>(entity: &E) -> ValueRange {
    ValueRange::new(
        strip_trailing_commas(entity.min()),
        strip_trailing_commas(entity.max()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimension, Variable};
    use std::collections::BTreeMap;

    fn info_with_coverage() -> DatasetInfo {
        let mut attrs = BTreeMap::new();
        attrs.insert("time_coverage_start".to_string(), "2020-01-01T00:00:00Z".to_string());
        attrs.insert("time_coverage_end".to_string(), "2020-12-31T00:00:00Z".to_string());
        DatasetInfo::new("ds", attrs, vec![], vec![])
    }

    #[test]
    fn test_time_uses_coverage_any_case() {
        let info = info_with_coverage();
        for name in ["time", "TIME", "Time"] {
            let var = Variable::new(name).with_range("1.5778368E9", "1.6093728E9");
            let range = resolve_range(&var, &info);
            assert_eq!(range, ValueRange::new("2020-01-01T00:00:00Z", "2020-12-31T00:00:00Z"));
        }
    }

    #[test]
    fn test_other_entities_use_own_bounds() {
        let info = info_with_coverage();
        let dim = Dimension::new("latitude").with_range("-89.5,", "89.5,");
        assert_eq!(resolve_range(&dim, &info), ValueRange::new("-89.5", "89.5"));
    }

    #[test]
    fn test_missing_range_propagates_as_empty() {
        let info = DatasetInfo::default();
        let time = Variable::new("time");
        let sst = Variable::new("sst");
        assert!(!resolve_range(&time, &info).is_usable());
        assert!(!resolve_range(&sst, &info).is_usable());
    }

    #[test]
    fn test_constraint_range_units_heuristic() {
        let info = info_with_coverage();
        let var = Variable::new("obs_time")
            .with_units("seconds since 1970-01-01T00:00:00Z")
            .with_range("0", "100");

        assert_eq!(resolve_range(&var, &info), ValueRange::new("0", "100"));
        assert_eq!(
            resolve_constraint_range(&var, &info),
            ValueRange::new("2020-01-01T00:00:00Z", "2020-12-31T00:00:00Z")
        );
    }

    #[test]
    fn test_degenerate_range() {
        assert!(ValueRange::new("1", "1").is_degenerate());
        assert!(!ValueRange::new("1", "2").is_degenerate());
        assert!(!ValueRange::new("", "").is_degenerate());
    }
}
