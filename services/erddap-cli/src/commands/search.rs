//! `search`: list datasets matching a full-text query.

use std::io::Write;

use anyhow::Result;
use erddap_protocol::SearchQuery;
use tracing::warn;

use crate::client::ErddapClient;

pub async fn run(
    client: &ErddapClient,
    out: &mut impl Write,
    server: &str,
    query: &SearchQuery,
    show_total: bool,
) -> Result<()> {
    if show_total {
        match client.total_count(server, query).await {
            Ok(total) => writeln!(
                out,
                "Found {} datasets (showing page {}, {} items)",
                total, query.page, query.items_per_page
            )?,
            Err(e) => {
                warn!(error = %e, "Total count request failed");
                writeln!(out, "Could not determine total matching datasets.")?;
            }
        }
    }

    writeln!(out, "\nUsing search URL -> {}\n", query.to_url(server))?;
    let hits = client.search(server, query).await?;
    if hits.is_empty() {
        writeln!(out, "No datasets found.")?;
        return Ok(());
    }

    writeln!(
        out,
        "Page {}, {} items:\n(Dataset ID : Title)\n",
        query.page, query.items_per_page
    )?;
    for hit in &hits {
        writeln!(out, "- {}: {}", hit.dataset_id, hit.title)?;
    }
    Ok(())
}
