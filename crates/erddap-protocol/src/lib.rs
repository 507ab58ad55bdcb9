//! ERDDAP data query construction.
//!
//! Builds the query part of tabledap and griddap data URLs from a parsed
//! [`erddap_metadata::DatasetInfo`] and the user's selections. Every builder
//! is a pure function of its inputs; nothing here touches the network.
//!
//! # Example
//!
//! ```rust
//! use erddap_protocol::{build_tabledap_suffix, Constraints, Operator, Protocol};
//!
//! let protocol: Protocol = "tabledap".parse().unwrap();
//! let constraints = Constraints::new()
//!     .with("sst", Operator::Ge, "10")
//!     .with("time", Operator::Le, "2020-01-01");
//!
//! assert_eq!(protocol, Protocol::Tabledap);
//! assert_eq!(
//!     build_tabledap_suffix(&["sst", "time"], &constraints),
//!     "sst,time&sst>=10&time<=2020-01-01"
//! );
//! ```

pub mod error;
pub mod griddap;
pub mod protocol;
pub mod query;
pub mod search;
pub mod selection;
pub mod tabledap;
pub mod urls;

pub use error::{QueryError, QueryResult};
pub use griddap::{build_griddap_suffix, combined_slice, default_slice, SliceSpec};
pub use protocol::Protocol;
pub use query::DataQuery;
pub use search::SearchQuery;
pub use selection::{axis_candidates, find_dimension, find_variable, select_variables};
pub use tabledap::{build_tabledap_suffix, Constraint, Constraints, Operator};
pub use urls::{
    capabilities_url, download_url, encode_comparison_operators, info_url, version_url,
    DEFAULT_FORMAT,
};
