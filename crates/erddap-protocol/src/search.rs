//! Advanced dataset search URLs.
//!
//! Builds `search/advanced.csv` requests. Every facet is left open
//! (`(ANY)`), and absent spatial/temporal bounds are sent as empty values,
//! which the server reads as unbounded.

/// Items per page used when counting all matches in one request.
pub const TOTAL_COUNT_PAGE_SIZE: u32 = 100_000;

/// Facets always sent unconstrained.
const OPEN_FACETS: [&str; 8] = [
    "protocol",
    "cdm_data_type",
    "institution",
    "ioos_category",
    "keywords",
    "long_name",
    "standard_name",
    "variableName",
];

/// Parameters of an advanced search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub page: u32,
    pub items_per_page: u32,
    pub min_lon: Option<f64>,
    pub max_lon: Option<f64>,
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_time: Option<String>,
    pub max_time: Option<String>,
}

impl SearchQuery {
    /// Search for `query` on page 1 with 25 items per page.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            items_per_page: 25,
            min_lon: None,
            max_lon: None,
            min_lat: None,
            max_lat: None,
            min_time: None,
            max_time: None,
        }
    }

    pub fn with_page(mut self, page: u32, items_per_page: u32) -> Self {
        self.page = page;
        self.items_per_page = items_per_page;
        self
    }

    pub fn with_lon_bounds(mut self, min_lon: Option<f64>, max_lon: Option<f64>) -> Self {
        self.min_lon = min_lon;
        self.max_lon = max_lon;
        self
    }

    pub fn with_lat_bounds(mut self, min_lat: Option<f64>, max_lat: Option<f64>) -> Self {
        self.min_lat = min_lat;
        self.max_lat = max_lat;
        self
    }

    pub fn with_time_bounds(mut self, min_time: Option<String>, max_time: Option<String>) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self
    }

    /// Same filters, first page, large enough to hold every match.
    pub fn for_total_count(&self) -> Self {
        Self {
            page: 1,
            items_per_page: TOTAL_COUNT_PAGE_SIZE,
            ..self.clone()
        }
    }

    /// Search URL on `server`.
    pub fn to_url(&self, server: &str) -> String {
        let mut params = vec![
            format!("searchFor={}", self.query),
            format!("page={}", self.page),
            format!("itemsPerPage={}", self.items_per_page),
        ];
        params.extend(OPEN_FACETS.iter().map(|facet| format!("{}=(ANY)", facet)));
        params.push(bound("minLon", self.min_lon));
        params.push(bound("maxLon", self.max_lon));
        params.push(bound("minLat", self.min_lat));
        params.push(bound("maxLat", self.max_lat));
        params.push(bound("minTime", self.min_time.as_deref()));
        params.push(bound("maxTime", self.max_time.as_deref()));

        format!(
            "{}/search/advanced.csv?{}",
            server.trim().trim_end_matches('/'),
            params.join("&")
        )
    }
}

fn bound<T: ToString>(name: &str, value: Option<T>) -> String {
    format!(
        "{}={}",
        name,
        value.map(|v| v.to_string()).unwrap_or_default()
    )
}
