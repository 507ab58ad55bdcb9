//! URL assembly around query suffixes.

use crate::protocol::Protocol;

/// Default response format for data requests.
pub const DEFAULT_FORMAT: &str = "csv";

fn base(server: &str) -> &str {
    server.trim().trim_end_matches('/')
}

/// Full data URL: `{server}/{protocol}/{dataset_id}.{format}?{suffix}`.
pub fn download_url(
    server: &str,
    protocol: Protocol,
    dataset_id: &str,
    format: &str,
    suffix: &str,
) -> String {
    format!(
        "{}/{}/{}.{}?{}",
        base(server),
        protocol,
        dataset_id,
        format,
        suffix
    )
}

/// Dataset info feed URL: `{server}/info/{dataset_id}/index.csv`.
pub fn info_url(server: &str, dataset_id: &str) -> String {
    format!("{}/info/{}/index.csv", base(server), dataset_id)
}

/// Server version endpoint.
pub fn version_url(server: &str) -> String {
    format!("{}/version", base(server))
}

/// Server dataset listing page, used as a capabilities probe.
pub fn capabilities_url(server: &str) -> String {
    format!("{}/info/index.html", base(server))
}

/// Percent-encode the comparison operators of tabledap constraints.
///
/// Applied by the transport just before a request is sent; query suffixes
/// themselves stay unescaped.
pub fn encode_comparison_operators(url: &str) -> String {
    url.replace(">=", "%3E=").replace("<=", "%3C=")
}
