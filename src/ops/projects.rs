//! Project lookup, imports, and search.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use reqwest::Method;
use serde::Serialize;

use crate::client::CompassClient;
use crate::error::{CompassError, ErrorMap, Result};
use crate::ops::merge_batch;
use crate::pagination::{
    clamp_page_size, validate_search_offset, TokenPage, DEFAULT_PROJECTS_PAGE_SIZE,
    MAXIMUM_PROJECTS_PAGE_SIZE,
};
use crate::types::{
    Decorations, PrincipalId, Project, ProjectRid, ResourceDecoration, Rid, RoleId, SortSpec,
};

/// Chunk size for the batched project lookup. Deliberately smaller than the
/// paths batch size; the hierarchy endpoint degrades with larger batches.
pub const PROJECTS_BATCH_SIZE: usize = 1;

/// Search criteria for the project search endpoint.
#[derive(Debug, Clone)]
pub struct ProjectSearchRequest {
    /// Search term for the project.
    pub query: Option<String>,
    /// Extra decoration entries for the returned projects.
    pub decorations: Option<Decorations>,
    /// Restrict to organizations with these marking identifiers.
    pub organizations: Option<BTreeSet<Rid>>,
    /// Only include projects with these tags.
    pub tags: Option<BTreeSet<Rid>>,
    /// Filter for projects where the user has one of the roles.
    pub roles: Option<BTreeSet<RoleId>>,
    /// Whether to consider home projects of the user.
    pub include_home_projects: Option<bool>,
    /// Only return projects where the given principals hold the given
    /// role identifiers directly.
    pub direct_role_grant_principal_ids: Option<BTreeMap<PrincipalId, BTreeSet<RoleId>>>,
    /// Sort specifier.
    pub sort: Option<SortSpec>,
    /// Maximum number of projects per page; clamped into 1..=500.
    pub page_size: u32,
}

impl Default for ProjectSearchRequest {
    fn default() -> Self {
        Self {
            query: None,
            decorations: None,
            organizations: None,
            tags: None,
            roles: None,
            include_home_projects: None,
            direct_role_grant_principal_ids: None,
            sort: None,
            page_size: DEFAULT_PROJECTS_PAGE_SIZE,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    decorations: Option<Vec<ResourceDecoration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    organizations: Option<&'a BTreeSet<Rid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a BTreeSet<Rid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roles: Option<&'a BTreeSet<RoleId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    include_home_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    direct_role_grant_principal_ids: Option<&'a BTreeMap<PrincipalId, BTreeSet<RoleId>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<&'a SortSpec>,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_token: Option<&'a str>,
}

impl CompassClient {
    /// Fetch one batch of projects by rid (single round trip).
    #[tracing::instrument(skip(self, rids))]
    pub async fn get_projects_batch(
        &self,
        rids: &[ProjectRid],
    ) -> Result<HashMap<ProjectRid, Project>> {
        let response = self
            .request_json(
                Method::PUT,
                "hierarchy/v2/batch/projects",
                &[],
                &rids,
                None,
                ErrorMap::new(),
            )
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Fetch projects for arbitrarily many rids, chunked by
    /// [`PROJECTS_BATCH_SIZE`] and merged into one mapping.
    pub async fn get_projects_by_rids(
        &self,
        rids: &[ProjectRid],
    ) -> Result<HashMap<ProjectRid, Project>> {
        let mut result = HashMap::with_capacity(rids.len());
        for chunk in rids.chunks(PROJECTS_BATCH_SIZE) {
            merge_batch(&mut result, self.get_projects_batch(chunk).await?);
        }
        Ok(result)
    }

    /// Fetch a single project, or `None` if the server does not know it.
    pub async fn get_project_by_rid(&self, rid: &str) -> Result<Option<Project>> {
        let mut result = self.get_projects_batch(&[rid.to_string()]).await?;
        Ok(result.remove(rid))
    }

    /// Add references to a project via import.
    #[tracing::instrument(skip(self, rids, user_bearer_token))]
    pub async fn add_imports(
        &self,
        project_rid: &str,
        rids: &BTreeSet<Rid>,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ImportRequest<'a> {
            resource_rid: &'a str,
        }
        #[derive(Serialize)]
        struct Body<'a> {
            requests: Vec<ImportRequest<'a>>,
        }

        let body = Body {
            requests: rids
                .iter()
                .map(|rid| ImportRequest { resource_rid: rid })
                .collect(),
        };
        let path = format!("projects/imports/{}/import", urlencoding::encode(project_rid));
        self.request_json(Method::POST, &path, &[], &body, user_bearer_token, ErrorMap::new().rid(project_rid))
            .await?;
        Ok(())
    }

    /// Remove imported references from a project.
    #[tracing::instrument(skip(self, rids, user_bearer_token))]
    pub async fn remove_imports(
        &self,
        project_rid: &str,
        rids: &BTreeSet<Rid>,
        user_bearer_token: Option<&str>,
    ) -> Result<()> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            resource_rid: &'a BTreeSet<Rid>,
        }

        let path = format!("projects/imports/{}/import", urlencoding::encode(project_rid));
        self.request_json(
            Method::DELETE,
            &path,
            &[],
            &Body { resource_rid: rids },
            user_bearer_token,
            ErrorMap::new().rid(project_rid),
        )
        .await?;
        Ok(())
    }

    /// Return one page of projects satisfying the search criteria.
    ///
    /// The page size is clamped into the accepted range with a warning;
    /// an ill-formed page token fails before any request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`CompassError::InvalidPageToken`] when `page_token` is not
    /// a decimal offset in the range 0..=500.
    #[tracing::instrument(skip(self, request))]
    pub async fn search_projects_page(
        &self,
        request: &ProjectSearchRequest,
        page_token: Option<&str>,
    ) -> Result<TokenPage<Project>> {
        let page_size = clamp_page_size(request.page_size);
        if let Some(token) = page_token {
            validate_search_offset(token)?;
        }

        let body = SearchBody {
            query: request.query.as_deref(),
            decorations: request.decorations.as_ref().map(Decorations::to_vec),
            organizations: request.organizations.as_ref(),
            tags: request.tags.as_ref(),
            roles: request.roles.as_ref(),
            include_home_projects: request.include_home_projects,
            direct_role_grant_principal_ids: request.direct_role_grant_principal_ids.as_ref(),
            sort: request.sort.as_ref(),
            page_size,
            page_token,
        };

        let response = self
            .request_json(Method::POST, "search/projects", &[], &body, None, ErrorMap::new())
            .await?;
        response.json().await.map_err(CompassError::HttpError)
    }

    /// Return all projects satisfying the search criteria (automatic
    /// pagination).
    ///
    /// The cursor loop follows `nextPageToken` until the server reports no
    /// further results. As a guard against responses that violate the
    /// declared offset bound, the loop also stops (with a warning) when the
    /// returned token does not parse as an offset within the maximum page
    /// size.
    pub async fn search_projects(&self, request: &ProjectSearchRequest) -> Result<Vec<Project>> {
        let mut projects = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let TokenPage {
                values,
                next_page_token,
            } = self.search_projects_page(request, page_token.as_deref()).await?;
            projects.extend(values);

            match next_page_token {
                None => break,
                Some(token) => {
                    let out_of_bounds = token
                        .parse::<u64>()
                        .map_or(true, |offset| offset > u64::from(MAXIMUM_PROJECTS_PAGE_SIZE));
                    if out_of_bounds {
                        tracing::warn!(
                            token,
                            "server returned a page token outside the allowed offset range, \
                             stopping pagination"
                        );
                        break;
                    }
                    page_token = Some(token);
                }
            }
        }
        Ok(projects)
    }
}
