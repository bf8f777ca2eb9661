//! Integration tests for `EntityAdapter` against a mocked catalog backend.

use leafy_client::models::{Book, Member};
use leafy_client::{Entity, EntityAdapter};
use leafy_core::LeafyError;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

fn book_json(id: i64, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "archived": false,
        "created_date": null,
        "last_update_date": null,
        "title": title,
        "author": "Anonymous",
        "synopsis": null,
        "edition": null,
        "catalog": null,
        "category_type": null,
        "category_age": null,
        "category_topics": null,
        "langage": "fr",
        "cover": null,
        "available": true
    })
}

fn books(server: &MockServer) -> EntityAdapter<Book> {
    EntityAdapter::new(reqwest::Client::new(), &server.uri(), "books").unwrap()
}

// ── list ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_returns_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            book_json(2, "Second"),
            book_json(1, "First"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let items = books(&server).list(0, 100).await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Second");
    assert_eq!(items[1].id(), Some(&1));
}

#[tokio::test]
async fn test_list_backend_error_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = books(&server).list(0, 10).await.unwrap_err();
    match err {
        LeafyError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("Expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = books(&server).list(0, 10).await.unwrap_err();
    assert!(matches!(err, LeafyError::Serialization(_)));
}

// ── get ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json(4, "Dune")))
        .expect(1)
        .mount(&server)
        .await;

    let book = books(&server).get(&4).await.unwrap();
    assert_eq!(book.title, "Dune");
    assert_eq!(book.language.as_deref(), Some("fr"));
}

#[tokio::test]
async fn test_get_missing_is_not_found_with_type_and_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/books/999"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Book not found"})),
        )
        .mount(&server)
        .await;

    let err = books(&server).get(&999).await.unwrap_err();
    assert!(matches!(err, LeafyError::NotFound { .. }));
    let msg = err.to_string();
    assert!(msg.contains("book"), "message was: {msg}");
    assert!(msg.contains("999"), "message was: {msg}");
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Nothing listens on port 1.
    let adapter: EntityAdapter<Book> =
        EntityAdapter::new(reqwest::Client::new(), "http://127.0.0.1:1", "books").unwrap();
    let err = adapter.list(0, 10).await.unwrap_err();
    assert!(matches!(err, LeafyError::Http(_)));
}

// ── add / update / remove ───────────────────────────────────────────

#[tokio::test]
async fn test_add_posts_without_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/members"))
        .and(body_json(json!({
            "archived": false,
            "created_date": null,
            "last_update_date": null,
            "family_referent": true,
            "firstname": "Ada",
            "surname": "Lovelace",
            "birthdate": null,
            "family_id": 3
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 10})))
        .expect(1)
        .mount(&server)
        .await;

    let adapter: EntityAdapter<Member> =
        EntityAdapter::new(reqwest::Client::new(), &server.uri(), "members").unwrap();
    let member = Member {
        // A stale id must not leak into the create payload.
        id: Some(55),
        family_referent: true,
        firstname: "Ada".to_string(),
        surname: "Lovelace".to_string(),
        family_id: Some(3),
        ..Member::default()
    };
    adapter.add(&member).await.unwrap();
}

#[tokio::test]
async fn test_update_patches_own_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json(7, "X")))
        .expect(1)
        .mount(&server)
        .await;

    let book = Book {
        id: Some(7),
        title: "X".to_string(),
        ..Book::default()
    };
    books(&server).update(&book).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "X");
}

#[tokio::test]
async fn test_update_rejected_by_backend_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(422).set_body_string("title too long"))
        .mount(&server)
        .await;

    let book = Book {
        id: Some(7),
        ..Book::default()
    };
    let err = books(&server).update(&book).await.unwrap_err();
    assert!(matches!(err, LeafyError::Status { status: 422, .. }));
}

#[tokio::test]
async fn test_add_fields_posts_only_given_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/books"))
        .and(body_json(json!({"title": "Dune", "author": "Herbert"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json(1, "Dune")))
        .expect(1)
        .mount(&server)
        .await;

    let fields = json!({"id": 99, "title": "Dune", "author": "Herbert"});
    books(&server)
        .add_fields(fields.as_object().unwrap().clone())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_patch_fields_sends_given_fields_and_id() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(book_json(7, "X")))
        .expect(1)
        .mount(&server)
        .await;

    // A conflicting id in the fields is replaced by the addressed one.
    let fields = json!({"id": 3, "title": "X"});
    books(&server)
        .patch_fields(&7, fields.as_object().unwrap().clone())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body, json!({"id": 7, "title": "X"}));
}

#[tokio::test]
async fn test_patch_fields_rejected_by_backend_is_status() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/books/7"))
        .respond_with(ResponseTemplate::new(422).set_body_string("title too long"))
        .mount(&server)
        .await;

    let err = books(&server)
        .patch_fields(&7, serde_json::Map::new())
        .await
        .unwrap_err();
    assert!(matches!(err, LeafyError::Status { status: 422, .. }));
}

#[tokio::test]
async fn test_remove_deletes_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/books/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    books(&server).remove(&12).await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_is_status_404() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/books/12"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = books(&server).remove(&12).await.unwrap_err();
    assert!(matches!(err, LeafyError::Status { status: 404, .. }));
}
