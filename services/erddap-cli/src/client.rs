//! HTTP transport for ERDDAP servers.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use erddap_metadata::{parse_info_csv, DatasetInfo};
use erddap_protocol::{encode_comparison_operators, info_url, SearchQuery};
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument};

/// Marker of the message line in ERDDAP HTML error pages.
const MESSAGE_MARKER: &str = "<b>Message</b>";

/// One row of a search result listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub dataset_id: String,
    pub title: String,
}

/// Thin wrapper over a configured [`reqwest::Client`].
pub struct ErddapClient {
    client: Client,
}

impl ErddapClient {
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(Duration::from_secs(30))
            .user_agent(concat!("erddap-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    async fn get_text(&self, url: &str, timeout: Option<Duration>) -> Result<(StatusCode, String)> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        debug!(url = %url, status = %status, bytes = body.len(), "Received response");
        Ok((status, body))
    }

    /// Download and parse the info feed of a dataset.
    #[instrument(skip(self))]
    pub async fn dataset_info(&self, server: &str, dataset_id: &str) -> Result<DatasetInfo> {
        let url = info_url(server, dataset_id);
        let (status, body) = self.get_text(&url, None).await?;
        if !status.is_success() {
            bail!("{}", failure_message(status, &body));
        }

        let info = parse_info_csv(dataset_id, body.as_bytes())
            .with_context(|| format!("Failed to parse dataset info CSV from {}", url))?;

        info!(
            dataset_id = %info.dataset_id,
            dimensions = info.dimensions.len(),
            variables = info.variables.len(),
            "Fetched dataset info"
        );
        Ok(info)
    }

    /// One page of search results. A 404 means nothing matched.
    #[instrument(skip(self, query), fields(search_for = %query.query))]
    pub async fn search(&self, server: &str, query: &SearchQuery) -> Result<Vec<SearchHit>> {
        let url = query.to_url(server);
        let (status, body) = self.get_text(&url, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            bail!("{}", failure_message(status, &body));
        }
        parse_search_results(&body)
    }

    /// Number of datasets matching the filters of `query`, over all pages.
    pub async fn total_count(&self, server: &str, query: &SearchQuery) -> Result<usize> {
        Ok(self.search(server, &query.for_total_count()).await?.len())
    }

    /// Fetch a data URL, returning the response body.
    ///
    /// Comparison operators are percent-encoded here; non-success responses
    /// are reduced to the server's own message where one is present.
    #[instrument(skip(self))]
    pub async fn fetch_data(&self, url: &str) -> Result<String> {
        let encoded = encode_comparison_operators(url);
        let (status, body) = self.get_text(&encoded, None).await?;
        if !status.is_success() {
            bail!("{}", failure_message(status, &body));
        }
        Ok(body)
    }

    /// GET `url` with a short timeout and report the status code and body.
    pub async fn probe(&self, url: &str, timeout: Duration) -> Result<(StatusCode, String)> {
        self.get_text(url, Some(timeout)).await
    }
}

fn failure_message(status: StatusCode, body: &str) -> String {
    match server_message(body) {
        Some(message) => format!("Server Error: {}", message),
        None => format!("Error fetching data: HTTP {}", status),
    }
}

/// Extract the human-readable message from an ERDDAP error response.
///
/// Handles both the HTML page (`<b>Message</b>` line) and the plain-text
/// `Error { ... message="..." }` body.
pub fn server_message(body: &str) -> Option<String> {
    body.lines().find_map(|line| {
        let line = line.trim();
        if line.contains(MESSAGE_MARKER) {
            let message = line
                .replace("<p>", "")
                .replace("</p>", "")
                .replace(MESSAGE_MARKER, "");
            return Some(message.trim().to_string());
        }
        line.strip_prefix("message=")
            .map(|m| m.trim_end_matches(';').trim_matches('"').trim().to_string())
    })
}

/// Read the `Dataset ID` and `Title` columns of a search result CSV.
pub fn parse_search_results(body: &str) -> Result<Vec<SearchHit>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers().context("Search results have no header")?.clone();
    let column = |names: [&str; 2]| {
        headers
            .iter()
            .position(|h| names.iter().any(|name| *name == h.trim()))
    };
    let id_col = column(["Dataset ID", "dataset_id"]);
    let title_col = column(["Title", "title"]);

    let mut hits = Vec::new();
    for record in reader.records() {
        let record = record.context("Malformed search result row")?;
        let cell = |col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or("N/A")
                .to_string()
        };
        hits.push(SearchHit {
            dataset_id: cell(id_col),
            title: cell(title_col),
        });
    }
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_error_message() {
        let body = "<html><body>\n<h1>HTTP Status 400</h1>\n\
                    <p><b>Message</b> Query error: Unrecognized variable=\"sst2\".</p>\n</body></html>";
        assert_eq!(
            server_message(body).as_deref(),
            Some("Query error: Unrecognized variable=\"sst2\".")
        );
    }

    #[test]
    fn test_plain_error_message() {
        let body = "Error {\n    code=404;\n    message=\"Not Found: Your query produced no matching results.\";\n}\n";
        assert_eq!(
            server_message(body).as_deref(),
            Some("Not Found: Your query produced no matching results.")
        );
    }

    #[test]
    fn test_failure_message_without_marker() {
        let msg = failure_message(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(msg, "Error fetching data: HTTP 502 Bad Gateway");
    }

    #[test]
    fn test_parse_search_results() {
        let body = "griddap,Subset,tabledap,Make A Graph,wms,Title,Summary,Institution,Dataset ID\n\
                    ,,https://x/tabledap/a,,,\"Buoy, hourly\",s,NDBC,cwwcNDBCMet\n\
                    https://x/griddap/b,,,,,SST,s,NOAA,erdSST\n";
        let hits = parse_search_results(body).unwrap();
        assert_eq!(
            hits,
            vec![
                SearchHit {
                    dataset_id: "cwwcNDBCMet".to_string(),
                    title: "Buoy, hourly".to_string()
                },
                SearchHit {
                    dataset_id: "erdSST".to_string(),
                    title: "SST".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_search_results_missing_columns() {
        let hits = parse_search_results("name\nfoo\n").unwrap();
        assert_eq!(hits[0].dataset_id, "N/A");
        assert_eq!(hits[0].title, "N/A");
    }
}
