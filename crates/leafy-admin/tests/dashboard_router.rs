//! End-to-end tests: catalog dashboard router in front of a mocked backend.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use leafy_admin::catalog::catalog_dashboard;
use leafy_core::Settings;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn router(server: &MockServer) -> Router {
    let settings = Settings {
        api_base_url: server.uri(),
        ..Settings::default()
    };
    catalog_dashboard(&reqwest::Client::new(), &settings)
        .unwrap()
        .into_axum_router()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_index_lists_catalog() {
    let server = MockServer::start().await;
    let (status, json) = send(router(&server), get("/admin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["brand_name"], "Leafy ILS");
    let names: Vec<&str> = json["cruds"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["books", "families", "members", "circulations"]);
}

#[tokio::test]
async fn test_family_list_through_router() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/families"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "archived": false, "email": "a@example.org", "phone_number": null}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let (status, json) = send(router(&server), get("/admin/families/list")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_items"], 1);
    assert_eq!(json["items"][0]["email"], "a@example.org");
    assert_eq!(json["items"][0]["phone_number"], "-");
}

#[tokio::test]
async fn test_member_edit_through_router() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/members/3"))
        .and(body_json(json!({
            "id": 3,
            "firstname": "Ada",
            "surname": "Lovelace",
            "birthdate": "1815-12-10"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let data = json!({"firstname": "Ada", "surname": "Lovelace", "birthdate": "1815-12-10"});
    let (status, _) = send(router(&server), post("/admin/members/edit?id=3", &data)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_book_maps_to_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (status, json) = send(router(&server), get("/admin/books/view?id=404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("404"));
}

#[tokio::test]
async fn test_backend_failure_maps_to_502() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/circulations/8"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let request = Request::builder()
        .method("POST")
        .uri("/admin/circulations/delete?id=8")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(router(&server), request).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_bad_page_maps_to_400_without_backend_call() {
    let server = MockServer::start().await;
    let (status, _) = send(router(&server), get("/admin/books/list?page=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_schema_exposes_quick_add() {
    let server = MockServer::start().await;
    let (status, json) = send(router(&server), get("/admin/books/schema")).await;
    assert_eq!(status, StatusCode::OK);
    let kinds: Vec<&str> = json["list_actions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["kind"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["navigate", "delete", "quick_add"]);
}
