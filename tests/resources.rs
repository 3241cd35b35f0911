//! Resource lookup and batch path resolution against a mock server.

use std::collections::HashMap;

use compassapi::{CompassClient, CompassError, Decorations, GetResourceParams};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const DATASET_RID: &str = "ri.compass.main.dataset.01234567-89ab-cdef-a618-819292bc3a10";
const FOLDER_RID: &str = "ri.compass.main.folder.01234567-89ab-cdef-a618-819292bc3a10";

fn resource_json(rid: &str, name: &str) -> serde_json::Value {
    serde_json::json!({ "rid": rid, "name": name })
}

#[tokio::test]
async fn test_get_resource_with_all_decorations_sends_full_vocabulary() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/resources/{DATASET_RID}")))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource_json(DATASET_RID, "events")))
        .expect(1)
        .mount(&server)
        .await;

    let resource = client
        .get_resource(
            DATASET_RID,
            &GetResourceParams {
                decoration: Some(Decorations::All),
                ..Default::default()
            },
        )
        .await
        .expect("get_resource failed");

    assert_eq!(resource.name, "events");

    // The decoration parameter must be the full vocabulary, sent as an
    // ordered list of repeated query values.
    let requests = server.received_requests().await.unwrap();
    let sent: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "decoration")
        .map(|(_, v)| v.into_owned())
        .collect();
    let expected: Vec<String> = Decorations::All.to_vec().iter().map(|d| d.to_string()).collect();
    assert_eq!(sent, expected);
    assert_eq!(sent.len(), 27);
    assert_eq!(sent[0], "description");
}

#[tokio::test]
async fn test_get_resource_unset_decoration_is_absent() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/resources/{DATASET_RID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(resource_json(DATASET_RID, "events")))
        .mount(&server)
        .await;

    client
        .get_resource(DATASET_RID, &GetResourceParams::default())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].url.query_pairs().all(|(k, _)| k != "decoration"));
}

#[tokio::test]
async fn test_get_resource_204_maps_to_resource_not_found() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/resources/{DATASET_RID}")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client
        .get_resource(DATASET_RID, &GetResourceParams::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CompassError::ResourceNotFound { rid: Some(ref rid), .. } if rid == DATASET_RID
    ));
}

#[tokio::test]
async fn test_get_resource_by_path_204_carries_path() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/resources"))
        .and(query_param("path", "/org/project/missing"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client
        .get_resource_by_path("/org/project/missing", &GetResourceParams::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CompassError::ResourceNotFound { path: Some(ref p), .. } if p == "/org/project/missing"
    ));
}

#[tokio::test]
async fn test_check_name_maps_server_not_found_to_folder_not_found() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/resources/{FOLDER_RID}/checkName")))
        .and(body_json(serde_json::json!({ "name": "report" })))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errorCode": "NOT_FOUND",
            "errorName": "Compass:NotFound",
            "errorInstanceId": "5f2e",
            "parameters": {}
        })))
        .mount(&server)
        .await;

    let err = client.check_name(FOLDER_RID, "report").await.unwrap_err();
    assert!(matches!(
        err,
        CompassError::FolderNotFound { rid: Some(ref rid) } if rid == FOLDER_RID
    ));
}

#[tokio::test]
async fn test_check_name_returns_bool_body() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/resources/{FOLDER_RID}/checkName")))
        .respond_with(ResponseTemplate::new(200).set_body_json(true))
        .mount(&server)
        .await;

    assert!(client.check_name(FOLDER_RID, "report").await.unwrap());
}

#[tokio::test]
async fn test_get_path_204_is_none() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/resources/{FOLDER_RID}/path-json")))
        .respond_with(ResponseTemplate::new(200).set_body_json("path/to/resource"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/resources/{FOLDER_RID}/path-json")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert_eq!(
        client.get_path(FOLDER_RID).await.unwrap().as_deref(),
        Some("path/to/resource")
    );
    assert_eq!(client.get_path(FOLDER_RID).await.unwrap(), None);
}

/// Echoes back a rid -> path mapping for whatever batch was posted.
struct PathsResponder;

impl Respond for PathsResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let rids: Vec<String> = serde_json::from_slice(&request.body).unwrap();
        let mapping: HashMap<String, String> = rids
            .into_iter()
            .map(|rid| (rid.clone(), format!("/paths/{rid}")))
            .collect();
        ResponseTemplate::new(200).set_body_json(mapping)
    }
}

#[tokio::test]
async fn test_get_paths_chunks_into_three_batches_and_merges() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/batch/paths"))
        .respond_with(PathsResponder)
        .expect(3)
        .mount(&server)
        .await;

    let rids: Vec<String> = (0..250)
        .map(|i| format!("ri.compass.main.dataset.{i:04}"))
        .collect();

    let paths = client.get_paths(&rids).await.expect("get_paths failed");

    assert_eq!(paths.len(), 250);
    for rid in &rids {
        assert_eq!(paths[rid], format!("/paths/{rid}"));
    }
}

#[tokio::test]
async fn test_resources_exist_and_single_convenience() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/batch/resources/exist"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ DATASET_RID: true, FOLDER_RID: false })),
        )
        .mount(&server)
        .await;

    let existence = client
        .resources_exist(&[DATASET_RID.to_string(), FOLDER_RID.to_string()])
        .await
        .unwrap();
    assert_eq!(existence[DATASET_RID], true);
    assert_eq!(existence[FOLDER_RID], false);

    assert!(client.resource_exists(DATASET_RID).await.unwrap());
}

#[tokio::test]
async fn test_resolve_path_returns_components() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/paths"))
        .and(query_param("path", "/org/project/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            resource_json("ri.compass.main.folder.0001", "org"),
            resource_json("ri.compass.main.folder.0002", "project"),
            resource_json("ri.compass.main.dataset.0003", "events"),
        ])))
        .mount(&server)
        .await;

    let components = client.resolve_path("/org/project/events").await.unwrap();
    assert_eq!(components.len(), 3);
    assert_eq!(components[2].name, "events");
}
