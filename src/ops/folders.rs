//! Folder creation and children listing.

use std::collections::BTreeSet;

use reqwest::Method;
use serde::Serialize;

use crate::client::CompassClient;
use crate::error::{CompassError, ErrorKind, ErrorMap, Result};
use crate::pagination::TokenPage;
use crate::types::{Decorations, MarkingId, Resource};

/// Optional parameters for the children listing.
#[derive(Debug, Clone, Default)]
pub struct ChildrenParams {
    /// Filter out resources, syntax "service.instance.type".
    pub filter: Option<BTreeSet<String>>,
    /// Extra decoration entries for the returned resources.
    pub decoration: Option<Decorations>,
    /// Maximum items in a page.
    pub limit: Option<u32>,
    /// A space-delimited specifier of the form "[a][ b]" where [a] is
    /// "name", "lastModified", or "rid" and the optional [b] is "asc" or
    /// "desc" (e.g. "rid asc", "name", "lastModified desc").
    pub sort: Option<String>,
    /// Allow folder access if any sub-resource is accessible, ignoring
    /// folder permissions. Defaults to non-hidden folders only.
    pub permissive_folders: Option<bool>,
    /// Controls inclusion of gatekeeper operations; kept off for
    /// performance.
    pub include_operations: bool,
    /// Adds specific user-permitted operations to the response. Requires
    /// `include_operations`.
    pub additional_operations: Option<String>,
}

impl ChildrenParams {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(filter) = &self.filter {
            for entry in filter {
                query.push(("filter", entry.clone()));
            }
        }
        if let Some(decoration) = &self.decoration {
            for entry in decoration.to_vec() {
                query.push(("decoration", entry.to_string()));
            }
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort", sort.clone()));
        }
        if let Some(permissive) = self.permissive_folders {
            query.push(("permissiveFolders", permissive.to_string()));
        }
        query.push(("includeOperations", self.include_operations.to_string()));
        if let Some(operations) = &self.additional_operations {
            query.push(("additionalOperations", operations.clone()));
        }
        query
    }
}

impl CompassClient {
    /// Create an empty folder.
    ///
    /// Returns the created folder as a resource record (rid, name and
    /// other properties).
    #[tracing::instrument(skip(self, marking_ids))]
    pub async fn create_folder(
        &self,
        name: &str,
        parent_id: &str,
        marking_ids: Option<&BTreeSet<MarkingId>>,
    ) -> Result<Resource> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            name: &'a str,
            parent_id: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            marking_ids: Option<&'a BTreeSet<MarkingId>>,
        }

        let response = self
            .request_json(
                Method::POST,
                "folders",
                &[],
                &Body {
                    name,
                    parent_id,
                    marking_ids,
                },
                None,
                ErrorMap::new().rid(parent_id),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Return one page of children of a folder.
    #[tracing::instrument(skip(self, params))]
    pub async fn get_children(
        &self,
        rid: &str,
        params: &ChildrenParams,
        page_token: Option<&str>,
    ) -> Result<TokenPage<Resource>> {
        let mut query = params.query();
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let path = format!("folders/{}/children", urlencoding::encode(rid));
        let response = self
            .request(
                Method::GET,
                &path,
                &query,
                None,
                ErrorMap::new()
                    .name("Compass:NotFound", ErrorKind::FolderNotFound)
                    .rid(rid),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Return all children of a folder (automatic pagination).
    ///
    /// Issues one request per page, following `nextPageToken` until the
    /// server reports no further results.
    pub async fn list_children(&self, rid: &str, params: &ChildrenParams) -> Result<Vec<Resource>> {
        let mut children = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let TokenPage {
                values,
                next_page_token,
            } = self.get_children(rid, params, page_token.as_deref()).await?;
            children.extend(values);
            match next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(children)
    }
}
