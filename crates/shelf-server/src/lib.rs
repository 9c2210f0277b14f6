//! HTTP server for Shelf.
//!
//! A thin axum adapter over the record store and query engine: request
//! decoding, id generation for id-less creates, and status-code mapping.
//! All record semantics live in `shelf-store` and `shelf-query`.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::ShelfServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use axum::Router;
    use chrono::{DateTime, Utc};
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use shelf_types::{Label, Record};

    use super::*;

    fn app() -> Router {
        build_router(AppState::in_memory())
    }

    fn record_body(id: &str, labels: &[&str]) -> Value {
        json!({
            "id": id,
            "labels": labels,
            "payload": {"tag": id, "url": format!("https://example.com/{id}")},
        })
    }

    async fn create(app: &Router, body: Value) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/records")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn delete(app: &Router, id: &str) -> Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/v1/records/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn list(app: &Router, query: &str) -> Response {
        let uri = if query.is_empty() {
            "/v1/records".to_string()
        } else {
            format!("/v1/records?{query}")
        };
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_records(response: Response) -> Vec<Record> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn listed_ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    // -----------------------------------------------------------------------
    // Liveness
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn health_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn info_endpoint_reports_record_count() {
        let app = app();
        create(&app, record_body("r1", &[])).await;
        create(&app, record_body("r2", &[])).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/info")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let info = body_json(response).await;
        assert_eq!(info["name"], "shelf-server");
        assert_eq!(info["records"], 2);
    }

    // -----------------------------------------------------------------------
    // Create
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn create_returns_stored_record() {
        let app = app();
        let response = create(&app, record_body("r1", &["a"])).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["id"], "r1");
        assert_eq!(body["labels"], json!(["a"]));
        assert_eq!(body["payload"]["tag"], "r1");
        assert!(body["createdAt"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn create_generates_id_when_none_supplied() {
        let app = app();
        let response = create(&app, json!({"labels": ["x"], "payload": {}})).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert!(body["id"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn create_treats_empty_id_as_missing() {
        let app = app();
        let response = create(&app, json!({"id": "", "labels": []})).await;
        let body = body_json(response).await;
        assert!(body["id"].as_str().is_some_and(|s| !s.is_empty()));
    }

    #[tokio::test]
    async fn create_overwrites_existing_id() {
        let app = app();
        create(&app, record_body("dup", &["old"])).await;
        create(&app, record_body("dup", &["new"])).await;

        let records = body_records(list(&app, "").await).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].labels, vec![Label::from("new")]);
    }

    #[tokio::test]
    async fn malformed_json_body_is_rejected() {
        let app = app();
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/records")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn created_at_is_bounded_by_surrounding_instants() {
        let app = app();

        let before = Utc::now();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let response = create(&app, json!({"labels": [], "payload": {}})).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let after = Utc::now();

        let body = body_json(response).await;
        let created_at: DateTime<Utc> = body["createdAt"]
            .as_str()
            .unwrap()
            .parse()
            .expect("createdAt parses as RFC 3339");
        assert!(created_at > before);
        assert!(created_at < after);
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn delete_present_record() {
        let app = app();
        create(&app, record_body("r1", &[])).await;

        let response = delete(&app, "r1").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let records = body_records(list(&app, "").await).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let app = app();
        let response = delete(&app, "ghost").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let app = app();
        create(&app, record_body("r1", &[])).await;
        delete(&app, "r1").await;

        let response = delete(&app, "r1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // -----------------------------------------------------------------------
    // List: filtering
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn list_filter_is_or_across_labels() {
        let app = app();
        create(&app, record_body("r1", &["a"])).await;
        create(&app, record_body("r2", &["b"])).await;
        create(&app, record_body("r3", &["a", "b"])).await;
        create(&app, record_body("r4", &[])).await;

        let records = body_records(list(&app, "filtering=a,b").await).await;
        let mut matched = listed_ids(&records);
        matched.sort_unstable();
        assert_eq!(matched, vec!["r1", "r2", "r3"]);

        let all = body_records(list(&app, "").await).await;
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn list_with_no_matches_is_empty_success() {
        let app = app();
        create(&app, record_body("r1", &["a"])).await;

        let response = list(&app, "filtering=zzz").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_records(response).await.is_empty());
    }

    #[tokio::test]
    async fn list_empty_store_is_empty_array() {
        let response = list(&app(), "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    // -----------------------------------------------------------------------
    // List: ordering
    // -----------------------------------------------------------------------

    /// Create records far enough apart that their microsecond timestamps
    /// are strictly increasing.
    async fn create_spaced(app: &Router, ids: &[&str]) {
        for id in ids {
            create(app, record_body(id, &[])).await;
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
    }

    #[tokio::test]
    async fn default_order_is_creation_time_ascending() {
        let app = app();
        create_spaced(&app, &["first", "second", "third"]).await;

        let records = body_records(list(&app, "").await).await;
        assert_eq!(listed_ids(&records), vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn created_at_descending_reverses() {
        let app = app();
        create_spaced(&app, &["first", "second", "third"]).await;

        let records = body_records(list(&app, "ordering=createdAt:desc").await).await;
        assert_eq!(listed_ids(&records), vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn id_ordering_is_lexicographic() {
        let app = app();
        create(&app, record_body("1", &[])).await;
        create(&app, record_body("2", &[])).await;
        create(&app, record_body("10", &[])).await;

        let records = body_records(list(&app, "ordering=id:desc").await).await;
        assert_eq!(listed_ids(&records), vec!["2", "10", "1"]);

        let records = body_records(list(&app, "ordering=id:asc").await).await;
        assert_eq!(listed_ids(&records), vec!["1", "10", "2"]);
    }

    #[tokio::test]
    async fn malformed_ordering_is_rejected() {
        let app = app();
        let response = list(&app, "ordering=foo").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("ordering"));
    }

    #[tokio::test]
    async fn empty_ordering_is_accepted() {
        let app = app();
        let response = list(&app, "ordering=").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unrecognized_ordering_key_is_accepted() {
        let app = app();
        create_spaced(&app, &["first", "second"]).await;

        let response = list(&app, "ordering=color:desc").await;
        assert_eq!(response.status(), StatusCode::OK);

        // Falls back to default ordering.
        let records = body_records(response).await;
        assert_eq!(listed_ids(&records), vec!["first", "second"]);
    }
}
