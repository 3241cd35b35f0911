//! Resource lookup, naming, and batch resolution operations.

use std::collections::{BTreeSet, HashMap};

use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::client::CompassClient;
use crate::error::{CompassError, ErrorKind, ErrorMap, Result};
use crate::ops::merge_batch;
use crate::types::{CompassPath, Decorations, Resource, Rid};

/// Chunk size for the batched rid-to-path lookup.
pub const PATHS_BATCH_SIZE: usize = 100;

/// Optional query parameters shared by the single-resource lookups.
#[derive(Debug, Clone, Default)]
pub struct GetResourceParams {
    /// Extra decoration entries to include in the response. `None` means
    /// the parameter is absent from the request.
    pub decoration: Option<Decorations>,
    /// If true, read permissions are not needed when the resource is not
    /// in a hidden folder.
    pub permissive_folders: Option<bool>,
    /// Include extra operations in the result if the user has them.
    pub additional_operations: Option<BTreeSet<String>>,
}

impl GetResourceParams {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(decoration) = &self.decoration {
            // Expanded to a list so serialization order is deterministic.
            for entry in decoration.to_vec() {
                query.push(("decoration", entry.to_string()));
            }
        }
        if let Some(permissive) = self.permissive_folders {
            query.push(("permissiveFolders", permissive.to_string()));
        }
        if let Some(operations) = &self.additional_operations {
            for operation in operations {
                query.push(("additionalOperations", operation.clone()));
            }
        }
        query
    }
}

impl CompassClient {
    /// Get the resource for a rid.
    ///
    /// # Errors
    ///
    /// A 204 response means the resource does not exist and is surfaced as
    /// [`CompassError::ResourceNotFound`].
    #[tracing::instrument(skip(self, params))]
    pub async fn get_resource(&self, rid: &str, params: &GetResourceParams) -> Result<Resource> {
        let path = format!("resources/{}", urlencoding::encode(rid));
        let response = self
            .request(
                Method::GET,
                &path,
                &params.query(),
                None,
                ErrorMap::new()
                    .status(204, ErrorKind::ResourceNotFound)
                    .rid(rid),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Get the resource at a compass path.
    #[tracing::instrument(skip(self, params))]
    pub async fn get_resource_by_path(
        &self,
        path: &str,
        params: &GetResourceParams,
    ) -> Result<Resource> {
        let mut query = params.query();
        query.push(("path", path.to_string()));
        let response = self
            .request(
                Method::GET,
                "resources",
                &query,
                None,
                ErrorMap::new()
                    .status(204, ErrorKind::ResourceNotFound)
                    .path(path),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Check whether the parent folder already contains a child with the
    /// given name. Returns true when the name is taken.
    #[tracing::instrument(skip(self))]
    pub async fn check_name(&self, parent_folder_rid: &str, name: &str) -> Result<bool> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let path = format!("resources/{}/checkName", urlencoding::encode(parent_folder_rid));
        let response = self
            .request_json(
                Method::POST,
                &path,
                &[],
                &Body { name },
                None,
                ErrorMap::new()
                    .name("Compass:NotFound", ErrorKind::FolderNotFound)
                    .rid(parent_folder_rid),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Rename a resource.
    #[tracing::instrument(skip(self))]
    pub async fn set_name(&self, rid: &str, name: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Body<'a> {
            name: &'a str,
        }

        let path = format!("resources/{}/name", urlencoding::encode(rid));
        self.request_json(Method::POST, &path, &[], &Body { name }, None, ErrorMap::new().rid(rid))
            .await?;
        Ok(())
    }

    /// Get the compass path for a rid, or `None` when the server reports
    /// no content for it.
    #[tracing::instrument(skip(self))]
    pub async fn get_path(&self, rid: &str) -> Result<Option<CompassPath>> {
        let path = format!("resources/{}/path-json", urlencoding::encode(rid));
        let response = self
            .request(Method::GET, &path, &[], None, ErrorMap::new().rid(rid))
            .await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Resolve paths for one batch of rids (single round trip).
    #[tracing::instrument(skip(self, rids))]
    pub async fn get_paths_batch(&self, rids: &[Rid]) -> Result<HashMap<Rid, CompassPath>> {
        let response = self
            .request_json(Method::POST, "batch/paths", &[], &rids, None, ErrorMap::new())
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Resolve paths for arbitrarily many rids.
    ///
    /// The input is split into chunks of [`PATHS_BATCH_SIZE`], one call per
    /// chunk, and the per-chunk mappings merged into one.
    pub async fn get_paths(&self, rids: &[Rid]) -> Result<HashMap<Rid, CompassPath>> {
        let mut result = HashMap::with_capacity(rids.len());
        for chunk in rids.chunks(PATHS_BATCH_SIZE) {
            merge_batch(&mut result, self.get_paths_batch(chunk).await?);
        }
        Ok(result)
    }

    /// Batch resource lookup: returns the decorated resources for the rids.
    #[tracing::instrument(skip(self, rids, decoration))]
    pub async fn get_resources(
        &self,
        rids: &[Rid],
        decoration: Option<&Decorations>,
        include_operations: bool,
        additional_operations: Option<&BTreeSet<String>>,
    ) -> Result<HashMap<Rid, Resource>> {
        let mut query = Vec::new();
        if let Some(decoration) = decoration {
            for entry in decoration.to_vec() {
                query.push(("decoration", entry.to_string()));
            }
        }
        query.push(("includeOperations", include_operations.to_string()));
        if let Some(operations) = additional_operations {
            for operation in operations {
                query.push(("additionalOperations", operation.clone()));
            }
        }

        let response = self
            .request_json(Method::POST, "batch/resources", &query, &rids, None, ErrorMap::new())
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Check which of the given resources exist.
    #[tracing::instrument(skip(self, rids))]
    pub async fn resources_exist(&self, rids: &[Rid]) -> Result<HashMap<Rid, bool>> {
        let response = self
            .request_json(Method::POST, "batch/resources/exist", &[], &rids, None, ErrorMap::new())
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Check whether a single resource exists.
    pub async fn resource_exists(&self, rid: &str) -> Result<bool> {
        let result = self.resources_exist(&[rid.to_string()]).await?;
        Ok(result.get(rid).copied().unwrap_or(false))
    }

    /// Fetch all resources that make up the components of a path.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_path(&self, path: &str) -> Result<Vec<Resource>> {
        let query = [("path", path.to_string())];
        let response = self
            .request(Method::GET, "paths", &query, None, ErrorMap::new().path(path))
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }
}
