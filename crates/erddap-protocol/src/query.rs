//! Protocol-dispatched data queries.

use erddap_metadata::{DatasetInfo, Dimension};
use tracing::debug;

use crate::griddap::{build_griddap_suffix, SliceSpec};
use crate::protocol::Protocol;
use crate::selection::axis_candidates;
use crate::tabledap::{build_tabledap_suffix, Constraints};
use crate::urls::download_url;

/// A fully specified data request for either protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataQuery {
    Tabledap {
        variables: Vec<String>,
        constraints: Constraints,
    },
    Griddap {
        variables: Vec<String>,
        /// Dimensions in the order their slices are written.
        dimensions: Vec<Dimension>,
        slices: SliceSpec,
    },
}

impl DataQuery {
    /// Unconstrained query over `variables` for the given protocol.
    ///
    /// Griddap queries slice every axis candidate of `info` over its full
    /// range.
    pub fn unconstrained(protocol: Protocol, variables: Vec<String>, info: &DatasetInfo) -> Self {
        match protocol {
            Protocol::Tabledap => DataQuery::Tabledap {
                variables,
                constraints: Constraints::new(),
            },
            Protocol::Griddap => DataQuery::Griddap {
                variables,
                dimensions: axis_candidates(info),
                slices: SliceSpec::new(),
            },
        }
    }

    /// Query for every variable of the dataset, with no constraints.
    pub fn sample(protocol: Protocol, info: &DatasetInfo) -> Self {
        Self::unconstrained(protocol, info.variable_names(), info)
    }

    pub fn protocol(&self) -> Protocol {
        match self {
            DataQuery::Tabledap { .. } => Protocol::Tabledap,
            DataQuery::Griddap { .. } => Protocol::Griddap,
        }
    }

    pub fn variables(&self) -> &[String] {
        match self {
            DataQuery::Tabledap { variables, .. } => variables,
            DataQuery::Griddap { variables, .. } => variables,
        }
    }

    /// Query suffix appended after `?` in the data URL.
    pub fn suffix(&self) -> String {
        let suffix = match self {
            DataQuery::Tabledap {
                variables,
                constraints,
            } => build_tabledap_suffix(variables, constraints),
            DataQuery::Griddap {
                variables,
                dimensions,
                slices,
            } => build_griddap_suffix(variables, dimensions, slices),
        };

        debug!(protocol = %self.protocol(), suffix = %suffix, "Built query suffix");
        suffix
    }

    /// Full data URL for this query.
    pub fn download_url(&self, server: &str, dataset_id: &str, format: &str) -> String {
        download_url(server, self.protocol(), dataset_id, format, &self.suffix())
    }
}
