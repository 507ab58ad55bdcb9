//! `describe`: show dataset metadata, dimensions and variables.

use std::io::Write;

use anyhow::Result;

use crate::client::ErddapClient;
use crate::render::{structured_description, write_description, OutputFormat, Section};

pub async fn run(
    client: &ErddapClient,
    out: &mut impl Write,
    server: &str,
    dataset_id: &str,
    section: Section,
    format: OutputFormat,
) -> Result<()> {
    let info = client.dataset_info(server, dataset_id).await?;

    match format {
        OutputFormat::Text => write_description(out, &info, section, server)?,
        OutputFormat::Json | OutputFormat::Yaml => {
            writeln!(out, "{}", structured_description(&info, section, format)?)?
        }
    }
    Ok(())
}
