//! Opaque identifier aliases, for better readability of signatures.
//!
//! Identifiers are globally unique strings minted by the server; this crate
//! never parses them beyond interpolating them into URL paths.

/// A resource identifier.
pub type Rid = String;

/// A compass folder resource identifier.
pub type FolderRid = Rid;

/// A compass project root folder resource identifier.
pub type ProjectRid = Rid;

/// A dataset resource identifier.
pub type DatasetRid = Rid;

/// A transaction resource identifier.
pub type TransactionRid = Rid;

/// A slash-delimited path in the compass namespace.
pub type CompassPath = String;

/// A role identifier (Owner, Editor, Viewer, Discoverer, ...).
pub type RoleId = String;

/// A role set identifier.
pub type RoleSetId = String;

/// A marking identifier.
pub type MarkingId = String;

/// A principal (user or group) identifier.
pub type PrincipalId = String;

/// An object type identifier for dataset-backed object types.
pub type BackedObjectTypeId = String;
