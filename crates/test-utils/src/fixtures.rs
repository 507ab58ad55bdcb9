//! Dataset info feeds for tests.
//!
//! Each constant mirrors the `info/{datasetID}/index.csv` export of an ERDDAP
//! server, trimmed to the rows the tests care about.

/// Dataset ID of [`GRIDDED_CHLA_INFO_CSV`].
pub const GRIDDED_CHLA_ID: &str = "erdMH1chla8day";

/// Gridded ocean-colour dataset with three dimensions and one variable.
pub const GRIDDED_CHLA_INFO_CSV: &str = r#"Row Type,Variable Name,Attribute Name,Data Type,Value
attribute,NC_GLOBAL,cdm_data_type,String,Grid
attribute,NC_GLOBAL,Easternmost_Easting,double,179.9792
attribute,NC_GLOBAL,institution,String,NASA/GSFC OBPG
attribute,NC_GLOBAL,Northernmost_Northing,double,89.97916
attribute,NC_GLOBAL,Southernmost_Northing,double,-89.97918
attribute,NC_GLOBAL,summary,String,"MODIS Aqua, Level-3 SMI, Global, 4km, Chlorophyll a, 8-day composite"
attribute,NC_GLOBAL,time_coverage_end,String,2024-06-30T00:00:00Z
attribute,NC_GLOBAL,time_coverage_start,String,2003-01-05T00:00:00Z
attribute,NC_GLOBAL,title,String,"Chlorophyll-a, Aqua MODIS, NPP, L3SMI, Global, 4km, Science Quality, 2003-present (8 Day Composite)"
attribute,NC_GLOBAL,Westernmost_Easting,double,-179.9792
dimension,time,,double,"nValues=3, evenlySpaced=true, averageSpacing=8 days 0h 0m 0s"
attribute,time,actual_range,double,"1.0417248E9, 1.7197056E9"
attribute,time,long_name,String,Centered Time
attribute,time,standard_name,String,time
attribute,time,units,String,seconds since 1970-01-01T00:00:00Z
dimension,latitude,,float,"nValues=4320, evenlySpaced=true, averageSpacing=-0.04166667"
attribute,latitude,actual_range,float,"-89.97918, 89.97916"
attribute,latitude,long_name,String,Latitude
attribute,latitude,standard_name,String,latitude
attribute,latitude,units,String,degrees_north
dimension,longitude,,float,"nValues=8640, evenlySpaced=true, averageSpacing=0.04166667"
attribute,longitude,actual_range,float,"-179.9792, 179.9792"
attribute,longitude,long_name,String,Longitude
attribute,longitude,standard_name,String,longitude
attribute,longitude,units,String,degrees_east
variable,chlorophyll,,float,"time, latitude, longitude"
attribute,chlorophyll,colorBarMaximum,double,30.0
attribute,chlorophyll,long_name,String,"Chlorophyll Concentration, OCI Algorithm"
attribute,chlorophyll,standard_name,String,mass_concentration_of_chlorophyll_in_sea_water
attribute,chlorophyll,units,String,mg m-3
"#;

/// Dataset ID of [`GLIDER_INFO_CSV`].
pub const GLIDER_ID: &str = "ru29-20240101T0000";

/// Glider trajectory dataset with no dimension rows, as tabledap datasets are published.
pub const GLIDER_INFO_CSV: &str = r#"Row Type,Variable Name,Attribute Name,Data Type,Value
attribute,NC_GLOBAL,cdm_data_type,String,TrajectoryProfile
attribute,NC_GLOBAL,institution,String,Rutgers University
attribute,NC_GLOBAL,time_coverage_end,String,2024-02-14T18:30:00Z
attribute,NC_GLOBAL,time_coverage_start,String,2024-01-01T00:05:00Z
attribute,NC_GLOBAL,title,String,ru29-20240101T0000 Slocum Glider
variable,trajectory,,String,
attribute,trajectory,cf_role,String,trajectory_id
attribute,trajectory,long_name,String,Trajectory Name
variable,time,,double,
attribute,time,actual_range,double,"1.7040675E9, 1.7079354E9"
attribute,time,units,String,seconds since 1970-01-01T00:00:00Z
variable,latitude,,double,
attribute,latitude,actual_range,double,"38.1042, 39.2517"
attribute,latitude,units,String,degrees_north
variable,longitude,,double,
attribute,longitude,actual_range,double,"-74.5021, -73.9188"
attribute,longitude,units,String,degrees_east
variable,depth,,float,
attribute,depth,actual_range,float,"0.5, 98.2"
attribute,depth,units,String,m
variable,temperature,,double,
attribute,temperature,actual_range,double,"4.1093, 22.7481"
attribute,temperature,long_name,String,Sea Water Temperature
attribute,temperature,units,String,Celsius
variable,platform_meta,,String,
attribute,platform_meta,comment,String,Slocum G3
variable,qartod_flag,,byte,
attribute,qartod_flag,actual_range,byte,"1, 1"
attribute,qartod_flag,flag_meanings,String,pass not_evaluated suspect fail missing
attribute,qartod_flag,flag_values,byte,"1, 2, 3, 4, 9"
"#;

/// Feed whose attribute rows precede the identity rows they describe.
pub const INTERLEAVED_INFO_CSV: &str = r#"Row Type,Variable Name,Attribute Name,Data Type,Value
attribute,salinity,units,String,PSU
attribute,depth,units,String,m
attribute,salinity,actual_range,float,"30.1 36.4"
variable,salinity,,float,
dimension,depth,,float,"nValues=10"
variable,oxygen,,float,
attribute,oxygen,units,String,umol kg-1
dimension,time,,double,"nValues=5"
"#;

/// Feed missing the `Value` column.
pub const MISSING_VALUE_COLUMN_CSV: &str = "Row Type,Variable Name,Attribute Name,Data Type\n\
attribute,NC_GLOBAL,title,String\n";
