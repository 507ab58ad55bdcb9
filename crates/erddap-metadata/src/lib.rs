//! ERDDAP dataset metadata parser.
//!
//! Turns the flat dataset info feed (`info/{datasetID}/index.csv`) into a
//! [`DatasetInfo`] model and answers the questions query construction asks
//! of it: what range does an axis cover, and which variables are worth
//! filtering on.
//!
//! # Example
//!
//! ```rust
//! use erddap_metadata::{parse_info_csv, resolve_range};
//!
//! let csv = "Row Type,Variable Name,Attribute Name,Data Type,Value\n\
//!            variable,sst,,float,\n\
//!            attribute,sst,actual_range,float,\"-2.0 35.0\"\n";
//!
//! let info = parse_info_csv("erdSST", csv.as_bytes()).unwrap();
//! let range = resolve_range(&info.variables[0], &info);
//! assert_eq!((range.min.as_str(), range.max.as_str()), ("-2.0", "35.0"));
//! ```

pub mod error;
pub mod hints;
pub mod model;
pub mod parser;
pub mod range;
pub mod rows;
pub mod value_tokens;

pub use error::{ParseError, ParseResult};
pub use hints::{
    griddap_hints, is_primary_axis, select_hints, tabledap_hints, GridHint, TableHint,
    PRIMARY_AXIS_NAMES,
};
pub use model::{DatasetInfo, Dimension, Entity, Variable};
pub use parser::{parse_info_csv, parse_rows, split_actual_range};
pub use range::{
    is_time_axis, is_time_name, resolve_constraint_range, resolve_range, ValueRange,
};
pub use rows::{read_rows, ColumnMap, MetadataRow, NC_GLOBAL};
pub use value_tokens::DimensionValue;
