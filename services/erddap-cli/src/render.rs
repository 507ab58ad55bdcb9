//! Terminal and structured renderings of dataset metadata and data previews.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use erddap_metadata::{
    griddap_hints, resolve_range, tabledap_hints, DatasetInfo, Dimension, ValueRange, Variable,
};
use erddap_protocol::{DataQuery, Protocol, DEFAULT_FORMAT};
use serde::Serialize;

/// Rows shown when previewing fetched data.
pub const PREVIEW_ROWS: usize = 5;

const NOT_AVAILABLE: &str = "N/A";
const RULE_HEAVY: &str = "==============================";
const RULE_LIGHT: &str = "------------------------------";
const FETCH_NOTE: &str = "NOTE: Use the erddap-cli fetch command to interactively build and optionally fetch/save the output from an URL query.";

/// Part of the dataset description to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    Vars,
    Dims,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// One dimension or variable as shown in the description.
struct Block<'a> {
    name: &'a str,
    long_name: &'a str,
    standard_name: &'a str,
    data_type: &'a str,
    units: &'a str,
    range: ValueRange,
    extras: Vec<(&'static str, String)>,
}

impl<'a> Block<'a> {
    fn dimension(dim: &'a Dimension, info: &DatasetInfo) -> Self {
        let mut extras = Vec::new();
        if let Some(n) = dim.nvalues.filter(|n| *n > 0) {
            extras.push(("nValues:      ", n.to_string()));
        }
        if let Some(spacing) = dim.average_spacing.as_deref().filter(|s| !s.is_empty()) {
            extras.push(("Avg Spacing:  ", spacing.to_string()));
        }

        Self {
            name: &dim.name,
            long_name: &dim.long_name,
            standard_name: &dim.standard_name,
            data_type: &dim.data_type,
            units: &dim.units,
            range: resolve_range(dim, info),
            extras,
        }
    }

    fn variable(var: &'a Variable, info: &DatasetInfo) -> Self {
        let mut extras = Vec::new();
        if !var.flag_values.is_empty() {
            extras.push(("Flag Values:  ", var.flag_values.clone()));
        }
        if !var.flag_meanings.is_empty() {
            let meanings: Vec<&str> = var.flag_meanings.split_whitespace().collect();
            extras.push(("Flag Meanings:", meanings.join(", ")));
        }

        Self {
            name: &var.name,
            long_name: &var.long_name,
            standard_name: &var.standard_name,
            data_type: &var.data_type,
            units: &var.units,
            range: resolve_range(var, info),
            extras,
        }
    }

    fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "- {}", or_na(self.name))?;
        writeln!(out, "    Long Name:     {}", or_na(self.long_name))?;
        writeln!(out, "    Standard Name: {}", or_na(self.standard_name))?;
        writeln!(out, "    Data Type:     {}", or_na(self.data_type))?;
        writeln!(out, "    Units:         {}", or_na(self.units))?;

        let (min, max) = (self.range.min.as_str(), self.range.max.as_str());
        if min.is_empty() && max.is_empty() {
            writeln!(out, "    Value Range:   {}", NOT_AVAILABLE)?;
        } else {
            writeln!(out, "    Value Range:   {} to {}", or_na(min), or_na(max))?;
        }

        for (label, value) in &self.extras {
            writeln!(out, "    {} {}", label, value)?;
        }
        Ok(())
    }
}

/// Human-readable description of a dataset.
///
/// `server` is only used to build the sample download URL.
pub fn write_description(
    out: &mut impl Write,
    info: &DatasetInfo,
    section: Section,
    server: &str,
) -> std::io::Result<()> {
    if section == Section::All {
        write_overview(out, info)?;
    }

    if matches!(section, Section::All | Section::Dims) {
        writeln!(out, "\n[Dimensions]")?;
        if info.dimensions.is_empty() {
            writeln!(out, "No dimensions found.")?;
        }
        for dim in &info.dimensions {
            Block::dimension(dim, info).write_to(out)?;
        }
    }

    if matches!(section, Section::All | Section::Vars) {
        writeln!(out, "\n[Variables]")?;
        if info.variables.is_empty() {
            writeln!(out, "No variables found.")?;
        }
        for var in &info.variables {
            Block::variable(var, info).write_to(out)?;
        }
    }

    if section == Section::All {
        write_data_access(out, info, server)?;
    }
    Ok(())
}

fn write_overview(out: &mut impl Write, info: &DatasetInfo) -> std::io::Result<()> {
    writeln!(out, "\n{}", RULE_HEAVY)?;
    writeln!(
        out,
        "Dataset ID: {} (Data Type: {})",
        info.dataset_id, info.cdm_data_type
    )?;
    writeln!(out, "Title: {}", info.title)?;
    writeln!(out, "Institution: {}", info.institution)?;
    writeln!(
        out,
        "Time Coverage: {} to {}",
        info.time_coverage_start, info.time_coverage_end
    )?;
    writeln!(out, "Summary: {}", info.summary)?;
    writeln!(out, "{}", RULE_LIGHT)?;
    writeln!(out, "North/East/South/West:")?;
    writeln!(out, "  Northernmost: {}", info.northernmost_northing)?;
    writeln!(out, "  Easternmost:  {}", info.easternmost_easting)?;
    writeln!(out, "  Southernmost: {}", info.southernmost_northing)?;
    writeln!(out, "  Westernmost:  {}", info.westernmost_easting)?;
    writeln!(out, "{}", RULE_HEAVY)
}

fn write_data_access(out: &mut impl Write, info: &DatasetInfo, server: &str) -> std::io::Result<()> {
    let protocol = Protocol::suggest(&info.cdm_data_type);

    writeln!(out, "\n{}", RULE_HEAVY)?;
    writeln!(out, "Data Access Facilitation")?;
    writeln!(out, "{}", RULE_LIGHT)?;

    let url = DataQuery::sample(protocol, info).download_url(server, &info.dataset_id, DEFAULT_FORMAT);
    writeln!(
        out,
        "Sample Download URL ({}: All dimensions/variables, no constraints):\n  {}",
        protocol, url
    )?;

    match protocol {
        Protocol::Griddap => write_griddap_hints(out, info)?,
        Protocol::Tabledap => write_tabledap_hints(out, info)?,
    }

    writeln!(out, "\n{}", FETCH_NOTE)
}

fn write_griddap_hints(out: &mut impl Write, info: &DatasetInfo) -> std::io::Result<()> {
    let hints = griddap_hints(info);
    if hints.is_empty() {
        return writeln!(out, "\nWarning: Griddap dataset has no dimensions listed.");
    }

    writeln!(out, "\nConstraint Hints (Griddap Slicing):")?;
    for hint in &hints {
        writeln!(
            out,
            "- {} (Data Spacing: {})",
            hint.name,
            hint.average_spacing.as_deref().unwrap_or(NOT_AVAILABLE)
        )?;
        writeln!(out, "    Index Range Example: {}", hint.index_example())?;
        writeln!(out, "    Value Range Example: {}", hint.value_example())?;
    }
    Ok(())
}

fn write_tabledap_hints(out: &mut impl Write, info: &DatasetInfo) -> std::io::Result<()> {
    let hints = tabledap_hints(info);
    if hints.is_empty() {
        return writeln!(out, "\nNo variables with filterable ranges found.");
    }

    writeln!(out, "\nConstraint Hints (Tabledap Filtering):")?;
    for hint in &hints {
        writeln!(out, "- {} (Units: {})", hint.name, or_na(&hint.units))?;
        writeln!(out, "    Example: {}", hint.example())?;
        if hint.is_degenerate() {
            writeln!(
                out,
                "    NOTE: No min/max delta detected. No constraint specification required."
            )?;
        }
    }
    Ok(())
}

/// Serialize the chosen section as JSON or YAML.
pub fn structured_description(
    info: &DatasetInfo,
    section: Section,
    format: OutputFormat,
) -> Result<String> {
    match section {
        Section::All => serialize(info, format),
        Section::Dims => serialize(&info.dimensions, format),
        Section::Vars => serialize(&info.variables, format),
    }
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize as JSON")
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize as YAML"),
        OutputFormat::Text => anyhow::bail!("text output is not a structured format"),
    }
}

/// Right-aligned table of the header and first `rows` records of a CSV body.
///
/// Returns `None` when the body has no records.
pub fn csv_preview(body: &str, rows: usize) -> Result<Option<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let header: Vec<String> = reader
        .headers()
        .context("Response has no CSV header")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut table = vec![header];
    for record in reader.records().take(rows) {
        let record = record.context("Malformed CSV row in response")?;
        table.push(record.iter().map(str::to_string).collect());
    }
    if table.len() == 1 {
        return Ok(None);
    }

    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            table
                .iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let lines: Vec<String> = table
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = *width))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Ok(Some(lines.join("\n")))
}
