//! Trash operations: move, restore, permanent deletion.

use std::collections::BTreeSet;

use reqwest::{Method, StatusCode};

use crate::client::CompassClient;
use crate::error::{CompassError, ErrorMap, Result};
use crate::types::{DeleteOption, Rid};

impl CompassClient {
    /// Move resources to trash.
    ///
    /// `user_bearer_token` is needed when dealing with service project
    /// resources.
    ///
    /// # Errors
    ///
    /// The only expected status is 204; anything else raises
    /// [`CompassError::UnexpectedStatus`] carrying the requested rids.
    #[tracing::instrument(skip(self, rids, user_bearer_token))]
    pub async fn add_to_trash(
        &self,
        rids: &BTreeSet<Rid>,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        let body: Vec<&Rid> = rids.iter().collect();
        let response = self
            .request_json(
                Method::POST,
                "batch/trash/add",
                &[],
                &body,
                user_bearer_token,
                ErrorMap::passthrough(),
            )
            .await?;
        Self::expect_no_content(&response, "issue while moving resource(s) to trash", rids)
    }

    /// Restore resources from trash.
    #[tracing::instrument(skip(self, rids, user_bearer_token))]
    pub async fn restore(
        &self,
        rids: &BTreeSet<Rid>,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        let body: Vec<&Rid> = rids.iter().collect();
        let response = self
            .request_json(
                Method::POST,
                "batch/trash/restore",
                &[],
                &body,
                user_bearer_token,
                ErrorMap::passthrough(),
            )
            .await?;
        Self::expect_no_content(&response, "issue while restoring resource(s) from trash", rids)
    }

    /// Permanently delete resources.
    #[tracing::instrument(skip(self, rids, delete_options, user_bearer_token))]
    pub async fn delete_permanently(
        &self,
        rids: &BTreeSet<Rid>,
        delete_options: Option<&BTreeSet<DeleteOption>>,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        let mut query = Vec::new();
        if let Some(options) = delete_options {
            for option in options {
                query.push(("deleteOptions", option.to_string()));
            }
        }

        let body: Vec<&Rid> = rids.iter().collect();
        self.request_json(
            Method::POST,
            "trash/delete",
            &query,
            &body,
            user_bearer_token,
            ErrorMap::new(),
        )
        .await?;
        Ok(())
    }

    fn expect_no_content(
        response: &reqwest::Response,
        context: &'static str,
        rids: &BTreeSet<Rid>,
    ) -> Result<()> {
        if response.status() != StatusCode::NO_CONTENT {
            return Err(CompassError::UnexpectedStatus {
                context,
                rids: rids.iter().cloned().collect(),
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}
