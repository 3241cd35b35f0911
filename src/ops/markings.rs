//! Marking mutations.
//!
//! All mutations go through the single patch primitive; `add_marking` and
//! `remove_marking` only fix the patch direction.

use reqwest::Method;
use serde::Serialize;

use crate::client::CompassClient;
use crate::error::{ErrorMap, Result};
use crate::types::{MarkingPatch, PatchOperation};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Body {
    marking_patches: Vec<MarkingPatch>,
}

impl CompassClient {
    /// Apply one marking patch (add or remove) to a resource.
    ///
    /// `user_bearer_token` is needed when dealing with service project
    /// resources.
    #[tracing::instrument(skip(self, user_bearer_token))]
    pub async fn process_marking(
        &self,
        rid: &str,
        marking_id: &str,
        patch_operation: PatchOperation,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        let body = Body {
            marking_patches: vec![MarkingPatch {
                marking_id: marking_id.to_string(),
                patch_operation,
            }],
        };

        let path = format!("markings/{}", urlencoding::encode(rid));
        self.request_json(Method::POST, &path, &[], &body, user_bearer_token, ErrorMap::new().rid(rid))
            .await?;
        Ok(())
    }

    /// Add a marking to a resource.
    pub async fn add_marking(
        &self,
        rid: &str,
        marking_id: &str,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        self.process_marking(rid, marking_id, PatchOperation::Add, user_bearer_token)
            .await
    }

    /// Remove a marking from a resource.
    pub async fn remove_marking(
        &self,
        rid: &str,
        marking_id: &str,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        self.process_marking(rid, marking_id, PatchOperation::Remove, user_bearer_token)
            .await
    }
}
