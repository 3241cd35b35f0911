//! Resource decorations: optional enrichment tags requested on a fetch to
//! include extra computed fields in the response.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::error::Result;
use crate::types::literal::parse_label;

/// The fixed decoration vocabulary. Unknown tags are never sent.
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
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ResourceDecoration {
    Description,
    Favorite,
    Branches,
    DefaultBranch,
    DefaultBranchWithMarkings,
    BranchesCount,
    HasBranches,
    HasMultipleBranches,
    BackedObjectTypes,
    Path,
    LongDescription,
    InTrash,
    Collections,
    NamedCollections,
    Tags,
    NamedTags,
    Alias,
    Collaborators,
    NamedAncestors,
    Markings,
    ProjectAccessMarkings,
    LinkedItems,
    ContactInformation,
    Classification,
    DisableInheritedPermissions,
    PropagatePermissions,
    ResourceLevelRoleGrantsAllowed,
}

/// A requested decoration set: either the `all` sentinel or an explicit set.
///
/// "Unset" is expressed as `Option<&Decorations>` = `None` at call sites and
/// means the decoration parameter is absent from the request entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decorations {
    /// Expands to the full decoration vocabulary at request-construction time.
    All,
    /// An explicit set of decorations, passed through unchanged.
    Set(BTreeSet<ResourceDecoration>),
}

impl Decorations {
    /// Resolve to an ordered, duplicate-free sequence for serialization
    /// contexts where deterministic order matters.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ResourceDecoration> {
        match self {
            Decorations::All => ResourceDecoration::iter().collect(),
            Decorations::Set(set) => set.iter().copied().collect(),
        }
    }

    /// Resolve to the underlying set for membership contexts.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<ResourceDecoration> {
        match self {
            Decorations::All => ResourceDecoration::iter().collect(),
            Decorations::Set(set) => set.clone(),
        }
    }

    /// Build an explicit set from caller-supplied label strings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CompassError::InvalidLiteral`] when any label is not
    /// part of the decoration vocabulary.
    pub fn from_labels<'a, I>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set = labels
            .into_iter()
            .map(|label| parse_label::<ResourceDecoration>(label, "decoration"))
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Decorations::Set(set))
    }
}

impl FromIterator<ResourceDecoration> for Decorations {
    fn from_iter<I: IntoIterator<Item = ResourceDecoration>>(iter: I) -> Self {
        Decorations::Set(iter.into_iter().collect())
    }
}
