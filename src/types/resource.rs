//! The decorated resource record and its nested shapes.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::decoration::ResourceDecoration;
use crate::types::ids::{BackedObjectTypeId, CompassPath, PrincipalId, Rid, TransactionRid};
use crate::types::marking::MarkingInfo;
use crate::types::roles::{DisableInheritedPermissionsType, Principal};

/// User and timestamp for resource creation or modification.
///
/// The server reports the user key snake_cased, unlike the rest of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    pub time: DateTime<Utc>,
    pub user_id: PrincipalId,
}

/// A branch as reported on a decorated resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceBranch {
    pub name: String,
    pub rid: Rid,
    #[serde(default)]
    pub url_variables: Option<serde_json::Value>,
    #[serde(default)]
    pub classification_rids: Option<BTreeSet<Rid>>,
}

/// A dataset branch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub rid: Rid,
    #[serde(default)]
    pub ancestor_branch_ids: Vec<String>,
    pub creation_time: DateTime<Utc>,
    #[serde(default)]
    pub transaction_rid: Option<TransactionRid>,
}

/// Classification information rendered in banners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationBanner {
    pub classification_string: String,
}

/// A dataset branch together with the markings governing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchWithMarkings {
    pub branch: Branch,
    pub markings: Vec<MarkingInfo>,
    pub satisfies_constraints: bool,
    #[serde(default)]
    pub classification_banner: Option<ClassificationBanner>,
}

/// An object type backed by a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackedObjectTypeInfo {
    pub id: BackedObjectTypeId,
}

/// Deprecation info for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deprecation {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub alternative_resource_rid: Option<Rid>,
}

/// A rid paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResourceIdentifier {
    pub rid: Rid,
    pub name: String,
}

/// An item linked to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub rid: Rid,
    pub attribution: Attribution,
}

/// A resource contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub group_id: Option<String>,
    pub principal_id: PrincipalId,
}

/// Contact information attached to a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    pub primary_contact: Contact,
}

/// Classification banners for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    #[serde(default)]
    pub user_constraint_classification_banner: Option<ClassificationBanner>,
    #[serde(default)]
    pub resource_classification_banner: Option<ClassificationBanner>,
}

/// Options for permanent deletion.
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
pub enum DeleteOption {
    DoNotRequireTrashed,
    DoNotTrackPermanentlyDeletedRids,
}

/// Options accepted when moving resources.
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
pub enum MoveResourcesOption {
    AllowMovingToHidden,
    RemoveRoleGrants,
    DeconflictName,
}

/// Import kinds: compass-tracked (file-system) vs. external resources.
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
pub enum ImportType {
    External,
    FileSystem,
}

/// Display settings update for a project folder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFolderDisplaySettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_linked_ontology_entities_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_release_and_publish_tab: Option<bool>,
}

/// A decorated resource.
///
/// Only `rid` and `name` are always present; everything else is filled in
/// when the matching [`ResourceDecoration`] was requested, or when the
/// server includes it by default for the endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub rid: Rid,
    pub name: String,
    #[serde(default)]
    pub created: Option<Attribution>,
    #[serde(default)]
    pub modified: Option<Attribution>,
    #[serde(default)]
    pub directly_trashed: Option<bool>,
    #[serde(default)]
    pub operations: Option<BTreeSet<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub in_trash: Option<bool>,
    #[serde(default)]
    pub path: Option<CompassPath>,
    #[serde(default)]
    pub branches: Option<Vec<ResourceBranch>>,
    #[serde(default)]
    pub default_branch: Option<ResourceBranch>,
    #[serde(default)]
    pub default_branch_with_markings: Option<BranchWithMarkings>,
    #[serde(default)]
    pub branches_count: Option<u64>,
    #[serde(default)]
    pub has_branches: Option<bool>,
    #[serde(default)]
    pub has_multiple_branches: Option<bool>,
    #[serde(default)]
    pub backed_object_types: Option<Vec<BackedObjectTypeInfo>>,
    #[serde(default)]
    pub collections: Option<Vec<Rid>>,
    #[serde(default)]
    pub named_collections: Option<Vec<NamedResourceIdentifier>>,
    #[serde(default)]
    pub tags: Option<Vec<Rid>>,
    #[serde(default)]
    pub named_tags: Option<Vec<NamedResourceIdentifier>>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub collaborators: Option<Vec<Principal>>,
    #[serde(default)]
    pub named_ancestors: Option<Vec<NamedResourceIdentifier>>,
    #[serde(default)]
    pub markings: Option<Vec<MarkingInfo>>,
    #[serde(default)]
    pub project_access_markings: Option<Vec<MarkingInfo>>,
    #[serde(default)]
    pub linked_items: Option<Vec<LinkedItem>>,
    #[serde(default)]
    pub contact_information: Option<ContactInformation>,
    #[serde(default)]
    pub classification: Option<Classification>,
    #[serde(default)]
    pub disable_inherited_permissions: Option<DisableInheritedPermissionsType>,
    #[serde(default)]
    pub propagate_permissions: Option<bool>,
    #[serde(default)]
    pub resource_level_role_grants_allowed: Option<bool>,
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
}

impl Resource {
    /// Whether the field backing a decoration was filled in.
    pub fn has_decoration(&self, decoration: ResourceDecoration) -> bool {
        match decoration {
            ResourceDecoration::Description => self.description.is_some(),
            ResourceDecoration::Favorite => self.favorite.is_some(),
            ResourceDecoration::Branches => self.branches.is_some(),
            ResourceDecoration::DefaultBranch => self.default_branch.is_some(),
            ResourceDecoration::DefaultBranchWithMarkings => {
                self.default_branch_with_markings.is_some()
            }
            ResourceDecoration::BranchesCount => self.branches_count.is_some(),
            ResourceDecoration::HasBranches => self.has_branches.is_some(),
            ResourceDecoration::HasMultipleBranches => self.has_multiple_branches.is_some(),
            ResourceDecoration::BackedObjectTypes => self.backed_object_types.is_some(),
            ResourceDecoration::Path => self.path.is_some(),
            ResourceDecoration::LongDescription => self.long_description.is_some(),
            ResourceDecoration::InTrash => self.in_trash.is_some(),
            ResourceDecoration::Collections => self.collections.is_some(),
            ResourceDecoration::NamedCollections => self.named_collections.is_some(),
            ResourceDecoration::Tags => self.tags.is_some(),
            ResourceDecoration::NamedTags => self.named_tags.is_some(),
            ResourceDecoration::Alias => self.alias.is_some(),
            ResourceDecoration::Collaborators => self.collaborators.is_some(),
            ResourceDecoration::NamedAncestors => self.named_ancestors.is_some(),
            ResourceDecoration::Markings => self.markings.is_some(),
            ResourceDecoration::ProjectAccessMarkings => self.project_access_markings.is_some(),
            ResourceDecoration::LinkedItems => self.linked_items.is_some(),
            ResourceDecoration::ContactInformation => self.contact_information.is_some(),
            ResourceDecoration::Classification => self.classification.is_some(),
            ResourceDecoration::DisableInheritedPermissions => {
                self.disable_inherited_permissions.is_some()
            }
            ResourceDecoration::PropagatePermissions => self.propagate_permissions.is_some(),
            ResourceDecoration::ResourceLevelRoleGrantsAllowed => {
                self.resource_level_role_grants_allowed.is_some()
            }
        }
    }
}
