//! Builders for synthetic dataset info feeds.

/// Header row written by ERDDAP for dataset info feeds.
pub const INFO_CSV_HEADER: [&str; 5] = [
    "Row Type",
    "Variable Name",
    "Attribute Name",
    "Data Type",
    "Value",
];

/// Builds an info feed CSV one row at a time.
///
/// # Usage
///
/// ```
/// use test_utils::InfoCsvBuilder;
///
/// let csv = InfoCsvBuilder::new()
///     .global("title", "Test dataset")
///     .dimension("time", "double", "nValues=10")
///     .attribute("time", "units", "seconds since 1970-01-01T00:00:00Z")
///     .build();
/// assert!(csv.starts_with("Row Type,Variable Name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InfoCsvBuilder {
    rows: Vec<[String; 5]>,
}

impl InfoCsvBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw row.
    pub fn row(
        mut self,
        row_type: &str,
        variable_name: &str,
        attribute_name: &str,
        data_type: &str,
        value: &str,
    ) -> Self {
        self.rows.push([
            row_type.to_string(),
            variable_name.to_string(),
            attribute_name.to_string(),
            data_type.to_string(),
            value.to_string(),
        ]);
        self
    }

    /// Append a global (`NC_GLOBAL`) attribute.
    pub fn global(self, name: &str, value: &str) -> Self {
        self.row("attribute", "NC_GLOBAL", name, "String", value)
    }

    pub fn dimension(self, name: &str, data_type: &str, value: &str) -> Self {
        self.row("dimension", name, "", data_type, value)
    }

    pub fn variable(self, name: &str, data_type: &str) -> Self {
        self.row("variable", name, "", data_type, "")
    }

    pub fn attribute(self, variable: &str, name: &str, value: &str) -> Self {
        self.row("attribute", variable, name, "String", value)
    }

    /// Render the feed as CSV text, quoting cells as needed.
    pub fn build(&self) -> String {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(INFO_CSV_HEADER)
            .expect("write header");
        for row in &self.rows {
            writer.write_record(row).expect("write row");
        }
        let bytes = writer.into_inner().expect("flush csv");
        String::from_utf8(bytes).expect("csv output is utf-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_quotes_commas() {
        let csv = InfoCsvBuilder::new()
            .attribute("sst", "actual_range", "1.0, 2.0")
            .build();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "attribute,sst,actual_range,String,\"1.0, 2.0\"");
    }
}
