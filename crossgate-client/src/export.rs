//! Export helpers
//!
//! Entities with a server export endpoint stream a pre-formatted file from
//! `GET /export/{resource}`; the rest serialize their already-loaded
//! records client-side. Either way, an export failure never disturbs the
//! rendered list.

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;
use serde::Serialize;

/// Server-supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

/// A downloaded export: filename from the Content-Disposition header (or a
/// derived fallback) plus the raw bytes.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// Write the file into `dir`, returning the full path.
    pub fn save_to(&self, dir: &std::path::Path) -> ClientResult<std::path::PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// `/export` surface.
#[derive(Debug, Clone)]
pub struct ExportApi {
    gateway: Gateway,
}

impl ExportApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Download a server-formatted export. The bearer credential travels in
    /// the header as usual, never in the query string.
    pub async fn download(&self, resource: &str, format: ExportFormat) -> ClientResult<ExportFile> {
        let path = format!("/export/{}", resource);
        let response = self
            .gateway
            .get_raw(&path, &[("format", format.as_str())])
            .await?;

        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(filename_from_disposition)
            .unwrap_or_else(|| format!("{}.{}", resource, format.extension()));
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response.bytes().await?;
        Ok(ExportFile {
            filename,
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

/// Serialize already-loaded records to pretty JSON, for entities without a
/// server export endpoint.
pub fn export_records<T: Serialize>(records: &[T]) -> ClientResult<String> {
    serde_json::to_string_pretty(records).map_err(ClientError::from)
}

/// Pull `filename=` out of a Content-Disposition header value.
fn filename_from_disposition(value: &str) -> Option<String> {
    value.split(';').find_map(|part| {
        let part = part.trim();
        let name = part.strip_prefix("filename=")?;
        Some(name.trim_matches('"').to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_parsed_from_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename=data_assets_20260112.csv"#).unwrap(),
            "data_assets_20260112.csv"
        );
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="审计日志.json""#).unwrap(),
            "审计日志.json"
        );
        assert!(filename_from_disposition("inline").is_none());
    }

    #[test]
    fn loaded_records_serialize_to_json() {
        let records = vec![serde_json::json!({"id": 1}), serde_json::json!({"id": 2})];
        let out = export_records(&records).unwrap();
        assert!(out.contains("\"id\": 1"));
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = ExportFile {
            filename: "scenarios.json".into(),
            content_type: Some("application/json".into()),
            bytes: b"[]".to_vec(),
        };
        let path = file.save_to(dir.path()).unwrap();
        assert_eq!(std::fs::read(path).unwrap(), b"[]");
    }
}
