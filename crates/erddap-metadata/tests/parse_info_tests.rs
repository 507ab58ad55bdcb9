//! Parsing tests against captured dataset info feeds.

use erddap_metadata::{
    parse_info_csv, resolve_range, select_hints, tabledap_hints, ParseError, ValueRange,
};
use test_utils::fixtures::*;
use test_utils::InfoCsvBuilder;

// ============================================================================
// Gridded dataset
// ============================================================================

#[test]
fn test_gridded_globals() {
    let info = parse_info_csv(GRIDDED_CHLA_ID, GRIDDED_CHLA_INFO_CSV.as_bytes()).unwrap();

    assert_eq!(info.dataset_id, "erdMH1chla8day");
    assert_eq!(info.cdm_data_type, "Grid");
    assert!(info.is_grid());
    assert_eq!(info.institution, "NASA/GSFC OBPG");
    assert_eq!(info.time_coverage_start, "2003-01-05T00:00:00Z");
    assert_eq!(info.time_coverage_end, "2024-06-30T00:00:00Z");
    assert_eq!(info.northernmost_northing, "89.97916");
    assert_eq!(info.westernmost_easting, "-179.9792");
    assert!(info.summary.starts_with("MODIS Aqua, Level-3"));
}

#[test]
fn test_gridded_dimensions() {
    let info = parse_info_csv(GRIDDED_CHLA_ID, GRIDDED_CHLA_INFO_CSV.as_bytes()).unwrap();

    let names: Vec<&str> = info.dimensions.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["time", "latitude", "longitude"]);

    let time = &info.dimensions[0];
    assert_eq!(time.data_type, "double");
    assert_eq!(time.nvalues, Some(3));
    assert_eq!(time.average_spacing.as_deref(), Some("8 days 0h 0m 0s"));
    assert_eq!(time.units, "seconds since 1970-01-01T00:00:00Z");
    assert_eq!(time.min, "1.0417248E9");
    assert_eq!(time.max, "1.7197056E9");

    let lat = &info.dimensions[1];
    assert_eq!(lat.nvalues, Some(4320));
    assert_eq!(lat.average_spacing.as_deref(), Some("-0.04166667"));
    assert_eq!((lat.min.as_str(), lat.max.as_str()), ("-89.97918", "89.97916"));
    assert_eq!(lat.standard_name, "latitude");
}

#[test]
fn test_gridded_variable_without_range() {
    let info = parse_info_csv(GRIDDED_CHLA_ID, GRIDDED_CHLA_INFO_CSV.as_bytes()).unwrap();

    assert_eq!(info.variables.len(), 1);
    let chla = &info.variables[0];
    assert_eq!(chla.name, "chlorophyll");
    assert_eq!(chla.units, "mg m-3");
    assert_eq!(chla.long_name, "Chlorophyll Concentration, OCI Algorithm");
    assert_eq!(chla.actual_range, "");
    assert_eq!((chla.min.as_str(), chla.max.as_str()), ("", ""));
}

#[test]
fn test_gridded_time_dimension_resolves_to_coverage() {
    let info = parse_info_csv(GRIDDED_CHLA_ID, GRIDDED_CHLA_INFO_CSV.as_bytes()).unwrap();

    let range = resolve_range(&info.dimensions[0], &info);
    assert_eq!(
        range,
        ValueRange::new("2003-01-05T00:00:00Z", "2024-06-30T00:00:00Z")
    );
}

// ============================================================================
// Tabular dataset
// ============================================================================

#[test]
fn test_glider_has_no_dimensions() {
    let info = parse_info_csv(GLIDER_ID, GLIDER_INFO_CSV.as_bytes()).unwrap();

    assert!(info.dimensions.is_empty());
    assert!(!info.is_grid());
    assert_eq!(info.variables.len(), 8);
}

#[test]
fn test_glider_flag_attributes() {
    let info = parse_info_csv(GLIDER_ID, GLIDER_INFO_CSV.as_bytes()).unwrap();

    let flag = info.variable("qartod_flag").unwrap();
    assert_eq!(flag.flag_values, "1, 2, 3, 4, 9");
    assert_eq!(flag.flag_meanings, "pass not_evaluated suspect fail missing");
    assert_eq!(flag.actual_range, "1, 1");
    assert_eq!((flag.min.as_str(), flag.max.as_str()), ("1", "1"));
}

#[test]
fn test_glider_hint_selection() {
    let info = parse_info_csv(GLIDER_ID, GLIDER_INFO_CSV.as_bytes()).unwrap();

    let names: Vec<&str> = select_hints(&info.variables)
        .into_iter()
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(names, vec!["time", "latitude", "longitude", "depth", "temperature"]);
}

#[test]
fn test_glider_table_hints_use_coverage_for_time() {
    let info = parse_info_csv(GLIDER_ID, GLIDER_INFO_CSV.as_bytes()).unwrap();

    let hints = tabledap_hints(&info);
    assert_eq!(
        hints[0].example(),
        "time>=2024-01-01T00:05:00Z&time<=2024-02-14T18:30:00Z"
    );
    assert_eq!(hints[3].example(), "depth>=0.5&depth<=98.2");
}

// ============================================================================
// Ordering and schema
// ============================================================================

#[test]
fn test_interleaved_rows_keep_first_seen_order() {
    let info = parse_info_csv("interleaved", INTERLEAVED_INFO_CSV.as_bytes()).unwrap();

    let dims: Vec<&str> = info.dimensions.iter().map(|d| d.name.as_str()).collect();
    let vars: Vec<&str> = info.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(dims, vec!["depth", "time"]);
    assert_eq!(vars, vec!["salinity", "oxygen"]);

    let salinity = &info.variables[0];
    assert_eq!(salinity.units, "PSU");
    assert_eq!((salinity.min.as_str(), salinity.max.as_str()), ("30.1", "36.4"));
    assert_eq!(info.dimensions[0].units, "m");
}

#[test]
fn test_missing_value_column_is_parse_error() {
    let result = parse_info_csv("broken", MISSING_VALUE_COLUMN_CSV.as_bytes());

    match result {
        Err(ParseError::MissingColumns(missing)) => assert_eq!(missing, vec!["value"]),
        other => panic!("expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_undecodable_value_does_not_abort_parse() {
    let feed: &[u8] = b"Row Type,Variable Name,Attribute Name,Data Type,Value\n\
                        attribute,NC_GLOBAL,institution,String,NOAA\n\
                        variable,sst,,float,\n\
                        attribute,sst,comment,String,bad \xff\xfe bytes\n\
                        attribute,sst,units,String,degree_C\n";

    let info = parse_info_csv("latin1", feed).unwrap();
    assert_eq!(info.institution, "NOAA");

    let sst = info.variable("sst").unwrap();
    assert_eq!(sst.comment, "");
    assert_eq!(sst.units, "degree_C");
    assert_eq!(sst.data_type, "float");
}

#[test]
fn test_single_value_actual_range_is_unusable() {
    let csv = InfoCsvBuilder::new()
        .variable("station_id", "int")
        .attribute("station_id", "actual_range", "5")
        .build();

    let info = parse_info_csv("ds", csv.as_bytes()).unwrap();
    let station = &info.variables[0];
    assert_eq!(station.actual_range, "5");
    assert_eq!((station.min.as_str(), station.max.as_str()), ("", ""));
}

#[test]
fn test_model_serializes_to_json() {
    let info = parse_info_csv(GRIDDED_CHLA_ID, GRIDDED_CHLA_INFO_CSV.as_bytes()).unwrap();

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["dataset_id"], "erdMH1chla8day");
    assert_eq!(json["dimensions"][0]["nvalues"], 3);
    assert_eq!(json["variables"][0]["name"], "chlorophyll");
}
