//! Data asset model and lineage graph

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 数据安全级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataLevel {
    /// 涉及国家安全
    #[serde(rename = "核心数据")]
    Core,
    #[serde(rename = "重要数据")]
    Important,
    #[serde(rename = "敏感个人信息")]
    Sensitive,
    #[serde(rename = "个人信息")]
    Personal,
    #[serde(rename = "内部数据")]
    Internal,
    #[serde(rename = "公开数据")]
    Public,
}

/// Data asset entity (catalog entry for one table/file/interface).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataAsset {
    pub id: i64,
    pub asset_name: String,
    pub asset_code: String,
    pub asset_type: Option<String>,
    pub source_system: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: Option<String>,
    pub description: Option<String>,
    pub data_level: DataLevel,
    pub classification_id: Option<i64>,
    pub field_count: Option<i64>,
    pub record_count: Option<i64>,
    pub is_active: bool,
    pub last_scan_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataAssetCreate {
    #[validate(length(min = 1, message = "资产名称不能为空"))]
    pub asset_name: String,
    #[validate(length(min = 1, message = "资产编码不能为空"))]
    pub asset_code: String,
    pub asset_type: Option<String>,
    pub source_system: Option<String>,
    pub schema_name: Option<String>,
    pub table_name: Option<String>,
    pub description: Option<String>,
    pub data_level: DataLevel,
    pub classification_id: Option<i64>,
}

/// Update payload (only mutable fields)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DataAssetUpdate {
    #[validate(length(min = 1, message = "资产名称不能为空"))]
    pub asset_name: Option<String>,
    pub description: Option<String>,
    pub data_level: Option<DataLevel>,
    pub classification_id: Option<i64>,
    /// Toggle-style field: the full new value is sent directly.
    pub is_active: Option<bool>,
}

/// One node of a lineage graph (the asset plus its graph role).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageNode {
    pub id: i64,
    pub asset_name: String,
    pub asset_code: String,
    pub data_level: Option<DataLevel>,
    #[serde(default)]
    pub is_center: bool,
}

/// Directed lineage edge between two assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineageEdge {
    pub source: i64,
    pub target: i64,
    #[serde(rename = "type")]
    pub edge_type: String,
}

/// Lineage graph for one asset. Zero edges is a valid, renderable result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineageGraph {
    #[serde(default)]
    pub nodes: Vec<LineageNode>,
    #[serde(default)]
    pub edges: Vec<LineageEdge>,
}

impl LineageGraph {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn data_level_uses_wire_strings() {
        let level: DataLevel = serde_json::from_str(r#""敏感个人信息""#).unwrap();
        assert_eq!(level, DataLevel::Sensitive);
        assert_eq!(serde_json::to_string(&DataLevel::Core).unwrap(), r#""核心数据""#);
    }

    #[test]
    fn create_requires_name_and_code() {
        let payload = DataAssetCreate {
            asset_name: String::new(),
            asset_code: "DA-001".into(),
            asset_type: None,
            source_system: None,
            schema_name: None,
            table_name: None,
            description: None,
            data_level: DataLevel::Internal,
            classification_id: None,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn empty_lineage_is_valid() {
        let graph: LineageGraph = serde_json::from_str(r#"{"nodes":[],"edges":[]}"#).unwrap();
        assert!(graph.is_empty());
    }
}
