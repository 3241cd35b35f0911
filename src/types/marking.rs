//! Marking shapes for mandatory-access-control style restrictions.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::ids::{MarkingId, Rid};
use crate::types::roles::PatchOperation;

/// How markings within a category combine.
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
pub enum CategoryType {
    Disjunctive,
    Conjunctive,
}

/// A marking as reported on a decorated resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkingInfo {
    pub marking_id: MarkingId,
    pub marking_name: String,
    pub category_id: String,
    // The server reports this key all-lowercase.
    #[serde(rename = "categoryname")]
    pub category_name: String,
    pub category_type: CategoryType,
    #[serde(default)]
    pub organization_rid: Option<Rid>,
    pub is_organization: bool,
    #[serde(default)]
    pub is_directly_applied: Option<bool>,
    #[serde(default)]
    pub disjunctive_inherited_conjunctively: Option<bool>,
    pub is_cbac: bool,
}

/// One unit of a marking mutation (apply or remove one marking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkingPatch {
    pub marking_id: MarkingId,
    pub patch_operation: PatchOperation,
}

/// A CBAC marking constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CbacMarkingConstraint {
    pub marking_ids: BTreeSet<MarkingId>,
}

/// How a batch of mandatory-marking patches applies.
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
pub enum MandatoryMarkingConstraintPatchType {
    Allowed,
    Denied,
    None,
}

/// A batch of mandatory-marking constraint patches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MandatoryMarkingConstraintPatches {
    pub marking_patches: Vec<MarkingPatch>,
    #[serde(rename = "type")]
    pub patch_type: MandatoryMarkingConstraintPatchType,
}
