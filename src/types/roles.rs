//! Role grants and access-control patch shapes.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::ids::{PrincipalId, RoleId, RoleSetId};

/// Direction of a patch entry (role grant or marking).
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
pub enum PatchOperation {
    Add,
    Remove,
}

/// Kind of principal a role can be granted to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PrincipalType {
    Everyone,
    Group,
    User,
}

/// A principal (user, group, or everyone).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,
    #[serde(rename = "type")]
    pub principal_type: PrincipalType,
}

/// An association between a principal and a permission role on a resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoleGrant {
    pub role: RoleId,
    pub principal: Principal,
}

/// One unit of a role-grant mutation, grouped into batches sent atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrantPatch {
    pub role_grant: RoleGrant,
    pub patch_operation: PatchOperation,
}

/// Kind of principal inherited permissions can be disabled for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum UserGroupPrincipalType {
    Group,
    User,
}

/// A user or group principal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserGroupPrincipal {
    pub id: PrincipalId,
    #[serde(rename = "type")]
    pub principal_type: UserGroupPrincipalType,
}

/// One unit of an inherited-permissions mutation for a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupPrincipalPatch {
    pub principal: UserGroupPrincipal,
    pub patch_operation: PatchOperation,
}

/// How inherited permissions are disabled on a resource.
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
pub enum DisableInheritedPermissionsType {
    None,
    All,
    AllWithoutMandatory,
}

/// Role grants attached to one resource, as returned by the roles lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceGrantsResult {
    pub grants: BTreeSet<RoleGrant>,
    #[serde(default)]
    pub disable_inherited_permissions_for_principals: BTreeSet<UserGroupPrincipal>,
    #[serde(default)]
    pub disable_inherited_permissions: bool,
    #[serde(default)]
    pub disable_inherited_permissions_type: Option<DisableInheritedPermissionsType>,
}

/// Context a role set applies in.
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
pub enum RoleContext {
    MarketplaceInstallation,
    Ontology,
    Project,
    Tables,
    Telemetry,
    UseCase,
}

/// A role set migration: which roles of the current set map to which roles
/// of the target set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSetUpdate {
    pub current_role_set: RoleSetId,
    pub target_role_set: RoleSetId,
    pub roles_map: BTreeMap<RoleId, BTreeSet<RoleId>>,
}
