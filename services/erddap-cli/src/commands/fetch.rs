//! `fetch`: interactively build a data query, then optionally fetch and save it.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use erddap_metadata::{resolve_constraint_range, resolve_range, DatasetInfo, Dimension};
use erddap_protocol::{
    axis_candidates, default_slice, select_variables, Constraints, DataQuery, Operator, Protocol,
    QueryError, SliceSpec, DEFAULT_FORMAT,
};
use tracing::{info, warn};

use crate::client::ErddapClient;
use crate::prompt::Prompter;
use crate::render::{csv_preview, PREVIEW_ROWS};

pub async fn run(
    client: &ErddapClient,
    prompter: &mut impl Prompter,
    out: &mut impl Write,
    output: Option<&Path>,
) -> Result<()> {
    writeln!(out, "\n--- ERDDAP Interactive Query Builder ---")?;

    let server = prompter.ask("Enter ERDDAP server URL: ")?;
    let dataset_id = prompter.ask("Enter dataset ID: ")?;

    let info = match client.dataset_info(&server, &dataset_id).await {
        Ok(info) => info,
        Err(e) => {
            writeln!(out, "Failed to fetch dataset info: {:#}", e)?;
            return Ok(());
        }
    };

    let Some(query) = build_query(&info, prompter, out)? else {
        return Ok(());
    };

    let url = query.download_url(&server, &info.dataset_id, DEFAULT_FORMAT);
    writeln!(out, "\nQuery URL:\n{}\n", url)?;

    let answer = prompter.ask("Fetch and preview data? [y/N]: ")?;
    if !answer.eq_ignore_ascii_case("y") {
        writeln!(out, "Fetch cancelled.")?;
        return Ok(());
    }

    match client.fetch_data(&url).await {
        Ok(body) => show_and_save(out, &body, output)?,
        Err(e) => {
            warn!(url = %url, error = %e, "Data request failed");
            writeln!(out, "\n{:#}", e)?;
        }
    }
    Ok(())
}

fn show_and_save(out: &mut impl Write, body: &str, output: Option<&Path>) -> Result<()> {
    let Some(preview) = csv_preview(body, PREVIEW_ROWS)? else {
        writeln!(out, "Your query is valid but produced no matching results.")?;
        return Ok(());
    };

    writeln!(out, "\nData preview (first {} rows):", PREVIEW_ROWS)?;
    writeln!(out, "{}", preview)?;

    if let Some(path) = output {
        std::fs::write(path, body)
            .with_context(|| format!("Failed to write data to {}", path.display()))?;
        info!(path = %path.display(), bytes = body.len(), "Saved fetched data");
        writeln!(out, "\nData successfully saved to {}", path.display())?;
    }
    Ok(())
}

/// Walk the user through protocol, variable and constraint choices.
///
/// Returns `None` when a choice is rejected; the reason has been written to
/// `out`.
pub fn build_query(
    info: &DatasetInfo,
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> Result<Option<DataQuery>> {
    let suggestion = Protocol::suggest(&info.cdm_data_type);
    let cdm_type = if info.cdm_data_type.is_empty() {
        "unknown".to_string()
    } else {
        info.cdm_data_type.to_lowercase()
    };
    writeln!(
        out,
        "\nDetected data type: {}. Suggested protocol: {}",
        cdm_type, suggestion
    )?;

    let answer = prompter.ask(&format!(
        "Select protocol [tabledap/griddap] (default: {}): ",
        suggestion
    ))?;
    let protocol = if answer.is_empty() {
        suggestion
    } else {
        match answer.parse::<Protocol>() {
            Ok(protocol) => protocol,
            Err(QueryError::UnknownProtocol(tag)) => {
                writeln!(
                    out,
                    "Error: Unknown protocol '{}'. Please choose 'tabledap' or 'griddap'.",
                    tag
                )?;
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        }
    };

    writeln!(out, "\nAvailable variables:")?;
    for (idx, var) in info.variables.iter().enumerate() {
        writeln!(out, "  [{}] {}", idx, var.name)?;
    }
    let selection = prompter
        .ask("\nSelect variables by number (comma-separated, or leave blank for all): ")?;
    let variables = match select_variables(&info.variables, &selection) {
        Ok(variables) => variables,
        Err(e) => {
            warn!(error = %e, "Rejected variable selection");
            writeln!(out, "Invalid variable selection.")?;
            return Ok(None);
        }
    };

    let query = match protocol {
        Protocol::Tabledap => DataQuery::Tabledap {
            constraints: prompt_constraints(info, &variables, prompter, out)?,
            variables,
        },
        Protocol::Griddap => {
            let dimensions = axis_candidates(info);
            let slices = prompt_slices(info, &dimensions, prompter, out)?;
            DataQuery::Griddap {
                variables,
                dimensions,
                slices,
            }
        }
    };
    Ok(Some(query))
}

fn prompt_constraints(
    info: &DatasetInfo,
    variables: &[String],
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> Result<Constraints> {
    writeln!(out, "\n--- Specify Tabledap Constraints (min/max) ---")?;
    writeln!(out, "Press Enter to skip any constraint.\n")?;

    let mut constraints = Constraints::new();
    for name in variables {
        let range = info
            .variable(name)
            .map(|var| resolve_constraint_range(var, info))
            .unwrap_or_default();

        if !range.is_usable() || range.is_degenerate() {
            writeln!(out, "- Variable: {}: No constraint range available.", name)?;
            continue;
        }

        writeln!(
            out,
            "- Variable: {} (Value Range: {} to {})",
            name, range.min, range.max
        )?;
        let min = prompter.ask("    Minimum value (>=): ")?;
        if !min.is_empty() {
            constraints.set(name.as_str(), Operator::Ge, min);
        }
        let max = prompter.ask("    Maximum value (<=): ")?;
        if !max.is_empty() {
            constraints.set(name.as_str(), Operator::Le, max);
        }
    }
    Ok(constraints)
}

fn prompt_slices(
    info: &DatasetInfo,
    dimensions: &[Dimension],
    prompter: &mut impl Prompter,
    out: &mut impl Write,
) -> Result<SliceSpec> {
    writeln!(out, "\n--- Specify Griddap Slices for Each Dimension ---")?;
    writeln!(
        out,
        "Use [start:stride:stop] index notation. You can use exact values for start/stop.\n Stride is based on data spacing."
    )?;
    writeln!(out, "Example for Index: [0:1:100]")?;
    writeln!(out, "      Coordinates: [(-70.5):1:(-68.2)]")?;
    writeln!(out, "             Time: [(2021-01-01T00:00:00Z):1:(2021-12-31T00:00:00Z)]\n")?;

    let mut slices = SliceSpec::new();
    for dim in dimensions {
        let full = default_slice(dim);
        let range = resolve_range(dim, info);
        let spacing = dim.average_spacing.as_deref().unwrap_or("N/A");

        let mut prompt = format!("- Dimension: {} (data spacing: {})", dim.name, spacing);
        if range.is_usable() {
            prompt.push_str(&format!(
                "\n    Value Range: [({}):1:({})]\n    Start:Stride:Stop Range: {}\n",
                range.min, range.max, full
            ));
        } else {
            prompt.push('\n');
        }
        prompt.push_str(&format!("    Enter slice for {}: ", dim.name));
        writeln!(out)?;

        let answer = prompter.ask(&prompt)?;
        if answer.is_empty() {
            writeln!(
                out,
                "    -> No input given, using default full range slice: {}",
                full
            )?;
        } else {
            slices.set(dim.name.as_str(), answer);
        }
    }
    Ok(slices)
}
