//! Upload page records and the downloadable CSV templates.
//!
//! Nothing here reads uploaded content. Templates only render their header
//! row so an operator can start filling them in.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processed,
    Processing,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UploadedFile {
    pub name: String,
    pub kind: String,
    pub size_kb: f64,
    pub status: UploadStatus,
    pub upload_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: Vec<&'static str>,
    pub filename: &'static str,
}

impl DataTemplate {
    /// The template's header row as CSV text.
    pub fn header_csv(&self) -> CoreResult<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.fields)
            .map_err(|e| CoreError::Csv(e.to_string()))?;
        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Csv(e.to_string()))
    }
}

/// Find a template by display name or file name.
pub fn find_template<'a>(
    templates: &'a [DataTemplate],
    name: &str,
) -> CoreResult<&'a DataTemplate> {
    let wanted = name.trim();
    templates
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(wanted) || t.filename.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| CoreError::UnknownOption {
            kind: "data template",
            value: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_quoted_where_needed() {
        let t = DataTemplate {
            name: "t",
            description: "",
            fields: vec!["Date", "Cost, Price", "Supplier"],
            filename: "t.csv",
        };
        assert_eq!(t.header_csv().unwrap(), "Date,\"Cost, Price\",Supplier\n");
    }

    #[test]
    fn lookup_by_filename() {
        let templates = vec![DataTemplate {
            name: "Inventory Template",
            description: "",
            fields: vec!["Item"],
            filename: "inventory_template.csv",
        }];
        assert!(find_template(&templates, "inventory_template.csv").is_ok());
        assert!(find_template(&templates, "inventory template").is_ok());
        assert!(find_template(&templates, "payroll").is_err());
    }
}
