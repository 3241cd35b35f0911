//! Project record returned by project search and batch lookup.

use serde::{Deserialize, Serialize};

use crate::types::ids::{CompassPath, MarkingId, ProjectRid, Rid};
use crate::types::marking::MarkingInfo;
use crate::types::resource::Attribution;

/// A compass project (a project root folder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub rid: ProjectRid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<Attribution>,
    #[serde(default)]
    pub modified: Option<Attribution>,
    #[serde(default)]
    pub path: Option<CompassPath>,
    #[serde(default)]
    pub organization_rids: Option<Vec<Rid>>,
    #[serde(default)]
    pub project_access_markings: Option<Vec<MarkingInfo>>,
    #[serde(default)]
    pub marking_ids: Option<Vec<MarkingId>>,
    #[serde(default)]
    pub is_home_project: Option<bool>,
    #[serde(default)]
    pub is_service_project: Option<bool>,
    #[serde(default)]
    pub in_trash: Option<bool>,
}
