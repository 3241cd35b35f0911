//! Project search, validation, and batched project lookup.

use std::collections::HashMap;

use compassapi::{
    CompassClient, CompassError, ProjectSearchRequest, MAXIMUM_PROJECTS_PAGE_SIZE,
    MAXIMUM_PROJECTS_SEARCH_OFFSET, MINIMUM_PROJECTS_PAGE_SIZE,
};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn project_json(index: u64) -> serde_json::Value {
    serde_json::json!({
        "rid": format!("ri.compass.main.folder.{index:08}"),
        "name": format!("project-{index}"),
    })
}

#[tokio::test]
async fn test_search_page_size_clamped_to_minimum() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/search/projects"))
        .and(body_partial_json(
            serde_json::json!({ "pageSize": MINIMUM_PROJECTS_PAGE_SIZE }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": [],
            "nextPageToken": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ProjectSearchRequest {
        page_size: MINIMUM_PROJECTS_PAGE_SIZE - 1,
        ..Default::default()
    };
    client.search_projects_page(&request, None).await.unwrap();
}

#[tokio::test]
async fn test_search_page_size_clamped_to_maximum() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/search/projects"))
        .and(body_partial_json(
            serde_json::json!({ "pageSize": MAXIMUM_PROJECTS_PAGE_SIZE }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": [],
            "nextPageToken": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ProjectSearchRequest {
        page_size: MAXIMUM_PROJECTS_PAGE_SIZE + 1,
        ..Default::default()
    };
    client.search_projects_page(&request, None).await.unwrap();
}

#[tokio::test]
async fn test_search_rejects_malformed_page_token_before_any_request() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/search/projects"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = ProjectSearchRequest::default();

    for token in ["wxyz", "-1", "12.5", ""] {
        assert!(matches!(
            client.search_projects_page(&request, Some(token)).await.unwrap_err(),
            CompassError::InvalidPageToken { .. }
        ));
    }

    let over = (MAXIMUM_PROJECTS_SEARCH_OFFSET + 1).to_string();
    assert!(matches!(
        client.search_projects_page(&request, Some(&over)).await.unwrap_err(),
        CompassError::InvalidPageToken { .. }
    ));
}

#[tokio::test]
async fn test_search_accepts_boundary_page_tokens() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/search/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": [],
            "nextPageToken": null,
        })))
        .expect(2)
        .mount(&server)
        .await;

    let request = ProjectSearchRequest::default();
    client.search_projects_page(&request, Some("0")).await.unwrap();
    client
        .search_projects_page(&request, Some(&MAXIMUM_PROJECTS_SEARCH_OFFSET.to_string()))
        .await
        .unwrap();
}

/// Generates pages the way the real endpoint does: `pageSize` projects per
/// page starting at the offset in `pageToken`, with the next token always
/// advanced by the page size.
struct SearchResponder;

impl Respond for SearchResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
        let page_size = body["pageSize"].as_u64().unwrap();
        let offset: u64 = body
            .get("pageToken")
            .and_then(|t| t.as_str())
            .map(|t| t.parse().unwrap())
            .unwrap_or(0);

        let values: Vec<serde_json::Value> =
            (offset..offset + page_size).map(project_json).collect();

        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": values,
            "nextPageToken": (offset + page_size).to_string(),
        }))
    }
}

#[tokio::test]
async fn test_search_projects_stops_when_token_exceeds_offset_bound() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/search/projects"))
        .respond_with(SearchResponder)
        .expect(6) // offsets 0, 100, ..., 500; token 600 stops the loop
        .mount(&server)
        .await;

    let request = ProjectSearchRequest {
        page_size: 100,
        ..Default::default()
    };
    let projects = client.search_projects(&request).await.unwrap();

    assert_eq!(projects.len(), 600);
    // Each backing element exactly once.
    let names: std::collections::BTreeSet<&str> =
        projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names.len(), 600);
}

/// Echoes a rid -> project mapping for whatever batch was sent.
struct ProjectsResponder;

impl Respond for ProjectsResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let rids: Vec<String> = serde_json::from_slice(&request.body).unwrap();
        let mapping: HashMap<String, serde_json::Value> = rids
            .into_iter()
            .map(|rid| {
                let value = serde_json::json!({ "rid": rid, "name": format!("name-{rid}") });
                (rid, value)
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(mapping)
    }
}

#[tokio::test]
async fn test_get_projects_by_rids_issues_one_call_per_rid() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("PUT"))
        .and(path("/hierarchy/v2/batch/projects"))
        .respond_with(ProjectsResponder)
        .expect(3)
        .mount(&server)
        .await;

    let rids: Vec<String> = (0..3).map(|i| format!("ri.compass.main.folder.{i:04}")).collect();
    let projects = client.get_projects_by_rids(&rids).await.unwrap();

    assert_eq!(projects.len(), 3);
    for rid in &rids {
        assert_eq!(projects[rid].name, format!("name-{rid}"));
    }
}

#[tokio::test]
async fn test_get_project_by_rid_absent_is_none() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("PUT"))
        .and(path("/hierarchy/v2/batch/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let project = client
        .get_project_by_rid("ri.compass.main.folder.ffff")
        .await
        .unwrap();
    assert!(project.is_none());
}
