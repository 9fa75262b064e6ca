use axum::{
    body::Body,
    http::{self, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use taskhub::standalone::{self, TodoDb};
use tower::ServiceExt;

fn app() -> Router {
    standalone::router().with_state(TodoDb::default())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "id": 1, "title": "buy milk", "description": "2 liters" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    assert_eq!(created["completed"], false);

    let resp = app.oneshot(get("/todos/1")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);
}

#[tokio::test]
async fn create_without_title_is_rejected_by_deserialization() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "id": 1, "description": "no title" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn duplicate_ids_are_allowed_and_first_match_wins() {
    let app = app();
    for title in ["first", "shadowed"] {
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/todos",
                json!({ "id": 7, "title": title, "description": "" }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = app.clone().oneshot(get("/todos")).await.unwrap();
    assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);

    let resp = app.oneshot(get("/todos/7")).await.unwrap();
    assert_eq!(body_json(resp).await["title"], "first");
}

#[tokio::test]
async fn put_replaces_the_record_wholesale() {
    let app = app();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "id": 2, "title": "old", "description": "old" }),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/todos/2",
            json!({ "id": 2, "title": "new", "description": "", "completed": true }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(get("/todos/2")).await.unwrap();
    let fetched = body_json(resp).await;
    assert_eq!(fetched["title"], "new");
    assert_eq!(fetched["completed"], true);
}

#[tokio::test]
async fn put_unknown_id_is_404() {
    let resp = app()
        .oneshot(json_request(
            "PUT",
            "/todos/99",
            json!({ "id": 99, "title": "ghost", "description": "" }),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await["error"], "Todo not found");
}

#[tokio::test]
async fn delete_then_get_is_404() {
    let app = app();
    app.clone()
        .oneshot(json_request(
            "POST",
            "/todos",
            json!({ "id": 3, "title": "temp", "description": "" }),
        ))
        .await
        .unwrap();

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["message"], "Todo deleted");

    let resp = app.oneshot(get("/todos/3")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_id_is_404() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/todos/404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
