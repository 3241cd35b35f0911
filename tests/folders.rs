//! Folder creation and children pagination against a mock server.

use compassapi::{ChildrenParams, CompassClient, CompassError};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

const FOLDER_RID: &str = "ri.compass.main.folder.01234567-89ab-cdef-a618-819292bc3a10";

/// Serves a fixed backing collection in pages of two, keyed by the offset
/// carried in `pageToken`.
struct ChildrenResponder {
    names: Vec<&'static str>,
}

impl Respond for ChildrenResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let offset: usize = request
            .url
            .query_pairs()
            .find(|(k, _)| k == "pageToken")
            .map(|(_, v)| v.parse().unwrap())
            .unwrap_or(0);

        let page: Vec<serde_json::Value> = self
            .names
            .iter()
            .skip(offset)
            .take(2)
            .map(|name| serde_json::json!({ "rid": format!("ri.compass.main.dataset.{name}"), "name": name }))
            .collect();

        let next = offset + page.len();
        let next_page_token = if next < self.names.len() {
            serde_json::json!(next.to_string())
        } else {
            serde_json::Value::Null
        };

        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "values": page,
            "nextPageToken": next_page_token,
        }))
    }
}

#[tokio::test]
async fn test_list_children_yields_backing_collection_exactly_once() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    let names = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    Mock::given(method("GET"))
        .and(path(format!("/folders/{FOLDER_RID}/children")))
        .respond_with(ChildrenResponder { names: names.clone() })
        .expect(3) // 5 children in pages of 2
        .mount(&server)
        .await;

    let children = client
        .list_children(FOLDER_RID, &ChildrenParams::default())
        .await
        .expect("list_children failed");

    let got: Vec<&str> = children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(got, names);
}

#[tokio::test]
async fn test_get_children_maps_server_not_found_to_folder_not_found() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path(format!("/folders/{FOLDER_RID}/children")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "errorCode": "NOT_FOUND",
            "errorName": "Compass:NotFound",
            "errorInstanceId": "91aa",
            "parameters": {}
        })))
        .mount(&server)
        .await;

    let err = client
        .get_children(FOLDER_RID, &ChildrenParams::default(), None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CompassError::FolderNotFound { rid: Some(ref rid) } if rid == FOLDER_RID
    ));
}

#[tokio::test]
async fn test_create_folder_body_and_response() {
    let server = MockServer::start().await;
    let client = CompassClient::new("test-token", &server.uri()).unwrap();

    Mock::given(method("POST"))
        .and(path("/folders"))
        .and(body_json(serde_json::json!({
            "name": "staging",
            "parentId": FOLDER_RID,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "rid": "ri.compass.main.folder.aca0cce9",
            "name": "staging",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let folder = client
        .create_folder("staging", FOLDER_RID, None)
        .await
        .expect("create_folder failed");
    assert_eq!(folder.name, "staging");
}
