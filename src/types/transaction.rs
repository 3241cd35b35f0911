//! Read-only mirrors of server-managed dataset versioning metadata.
//!
//! This crate never mutates these records; they only arrive in responses.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ids::{DatasetRid, MarkingId, Rid, TransactionRid};
use crate::types::resource::Attribution;

/// Transaction types for versioned dataset writes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Update,
    Append,
    Delete,
    Snapshot,
    Undefined,
}

/// Lifecycle status of a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Open,
    Committed,
    Aborted,
}

/// How files in a transaction are tracked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FilePathType {
    NoFiles,
    ManagedFiles,
    RegisteredFiles,
}

/// Whether a provenance dependency is secured.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DependencyType {
    Secured,
    Unsecured,
}

/// File counts and sizes for a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMetadata {
    pub file_count: u64,
    pub total_file_size: u64,
    pub hidden_file_count: u64,
    pub total_hidden_file_size: u64,
}

/// A half-open range of transactions on a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRange {
    pub start_transaction_rid: TransactionRid,
    pub end_transaction_rid: TransactionRid,
}

/// Provenance of a transaction against another catalog dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvenanceRecord {
    pub dataset_rid: DatasetRid,
    #[serde(default)]
    pub transaction_range: Option<TransactionRange>,
    #[serde(default)]
    pub schema_branch_id: Option<String>,
    #[serde(default)]
    pub schema_version_id: Option<String>,
    #[serde(default)]
    pub non_catalog_resources: Vec<Rid>,
    #[serde(default)]
    pub assumed_markings: BTreeSet<MarkingId>,
}

/// Provenance of a transaction against non-catalog resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonCatalogProvenanceRecord {
    pub resources: BTreeSet<Rid>,
    #[serde(default)]
    pub assumed_markings: BTreeSet<MarkingId>,
    #[serde(default)]
    pub dependency_type: Option<DependencyType>,
}

/// Full provenance attached to a transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionProvenance {
    pub provenance_records: Vec<ProvenanceRecord>,
    #[serde(default)]
    pub non_catalog_provenance_records: Vec<NonCatalogProvenanceRecord>,
}

/// A server-managed versioned write operation against a dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub rid: TransactionRid,
    pub dataset_rid: DatasetRid,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    pub file_path_type: FilePathType,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub close_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub permission_path: Option<String>,
    #[serde(default)]
    pub record: Option<serde_json::Value>,
    #[serde(default)]
    pub attribution: Option<Attribution>,
    #[serde(default)]
    pub metadata: Option<TransactionMetadata>,
    #[serde(default)]
    pub is_data_deleted: bool,
    #[serde(default)]
    pub is_deletion_complete: bool,
    #[serde(default)]
    pub provenance: Option<TransactionProvenance>,
}

/// A transaction wrapped with its own rid, as returned by secured lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecuredTransaction {
    pub transaction: Transaction,
    pub rid: TransactionRid,
}
