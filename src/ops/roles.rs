//! Role grant lookup and mutation.

use std::collections::HashMap;

use reqwest::Method;
use serde::Serialize;

use crate::client::CompassClient;
use crate::error::{CompassError, ErrorMap, Result};
use crate::types::{ResourceGrantsResult, Rid, RoleGrantPatch, UserGroupPrincipalPatch};

/// Role grant changes to apply to one resource. Unset fields are omitted
/// from the request body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrantsUpdate {
    /// Role grants to add or remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_patches: Option<Vec<RoleGrantPatch>>,
    /// Per-principal inherited-permission toggles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_inherited_permissions_for_principals: Option<Vec<UserGroupPrincipalPatch>>,
    /// Disable inherited permissions for the whole resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_inherited_permissions: Option<bool>,
}

impl CompassClient {
    /// Retrieve the role grants for a set of resources as a mapping from
    /// rid to its grants.
    #[tracing::instrument(skip(self, rids))]
    pub async fn get_resource_roles(
        &self,
        rids: &[Rid],
    ) -> Result<HashMap<Rid, ResourceGrantsResult>> {
        #[derive(Serialize)]
        struct Body<'a> {
            rids: &'a [Rid],
        }

        let response = self
            .request_json(Method::POST, "roles", &[], &Body { rids }, None, ErrorMap::new())
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Update the role grants for a resource.
    #[tracing::instrument(skip(self, update))]
    pub async fn update_resource_roles(&self, rid: &str, update: &RoleGrantsUpdate) -> Result<()> {
        let path = format!("roles/v2/{}", urlencoding::encode(rid));
        self.request_json(Method::POST, &path, &[], update, None, ErrorMap::new().rid(rid))
            .await?;
        Ok(())
    }
}
