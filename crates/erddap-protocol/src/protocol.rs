//! Data access protocol tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// ERDDAP data access protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Row selection by per-variable comparison constraints.
    Tabledap,
    /// Array selection by per-axis index or value slices.
    Griddap,
}

impl Protocol {
    /// Path segment used in data URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tabledap => "tabledap",
            Protocol::Griddap => "griddap",
        }
    }

    /// Protocol suggested by a dataset's `cdm_data_type`.
    ///
    /// `Grid` datasets are served by griddap; every other type by tabledap.
    pub fn suggest(cdm_data_type: &str) -> Self {
        if cdm_data_type.trim().eq_ignore_ascii_case("grid") {
            Protocol::Griddap
        } else {
            Protocol::Tabledap
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tabledap" => Ok(Protocol::Tabledap),
            "griddap" => Ok(Protocol::Griddap),
            _ => Err(QueryError::UnknownProtocol(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_protocol() {
        assert_eq!("tabledap".parse::<Protocol>().unwrap(), Protocol::Tabledap);
        assert_eq!(" GridDAP ".parse::<Protocol>().unwrap(), Protocol::Griddap);
    }

    #[test]
    fn test_unknown_protocol() {
        let err = "wcs".parse::<Protocol>().unwrap_err();
        assert_eq!(err, QueryError::UnknownProtocol("wcs".to_string()));
        assert!("".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_suggest_from_cdm_data_type() {
        assert_eq!(Protocol::suggest("Grid"), Protocol::Griddap);
        assert_eq!(Protocol::suggest("grid"), Protocol::Griddap);
        assert_eq!(Protocol::suggest("TimeSeries"), Protocol::Tabledap);
        assert_eq!(Protocol::suggest(""), Protocol::Tabledap);
    }

    #[test]
    fn test_display() {
        assert_eq!(Protocol::Griddap.to_string(), "griddap");
    }
}
