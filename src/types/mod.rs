//! Compass wire-format type catalog.
//!
//! Single source of truth for identifier aliases, enumerated literal
//! vocabularies, and the shape of every JSON object the API sends or
//! expects. Apart from the literal parse boundary in [`literal`], nothing
//! here has behavior.

mod decoration;
mod ids;
mod literal;
mod marking;
mod project;
mod resource;
mod roles;
mod sort;
mod transaction;

pub use decoration::{Decorations, ResourceDecoration};
pub use ids::*;
pub use literal::parse_label;
pub use marking::{
    CategoryType, CbacMarkingConstraint, MandatoryMarkingConstraintPatchType,
    MandatoryMarkingConstraintPatches, MarkingInfo, MarkingPatch,
};
pub use project::Project;
pub use resource::{
    Attribution, BackedObjectTypeInfo, Branch, BranchWithMarkings, Classification,
    ClassificationBanner, Contact, ContactInformation, DeleteOption, Deprecation, ImportType,
    LinkedItem, MoveResourcesOption, NamedResourceIdentifier, ProjectFolderDisplaySettingsUpdate,
    Resource, ResourceBranch,
};
pub use roles::{
    DisableInheritedPermissionsType, PatchOperation, Principal, PrincipalType,
    ResourceGrantsResult, RoleContext, RoleGrant, RoleGrantPatch, RoleSetUpdate,
    UserGroupPrincipal, UserGroupPrincipalPatch, UserGroupPrincipalType,
};
pub use sort::{SortDirection, SortField, SortSpec};
pub use transaction::{
    DependencyType, FilePathType, NonCatalogProvenanceRecord, ProvenanceRecord,
    SecuredTransaction, Transaction, TransactionMetadata, TransactionProvenance, TransactionRange,
    TransactionStatus, TransactionType,
};
