use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, SecurityHeaders};
use crate::handlers::employees::{
    create_employee, delete_employee, get_employee, list_employees, update_employee,
};
use crate::handlers::health_check;
use crate::store::AppState;

pub fn create_routes(state: AppState) -> Router {
    let employee_routes = Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).patch(update_employee).delete(delete_employee),
        );

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api/employees", employee_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer());

    SecurityHeaders::from_env().apply(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        create_routes(AppState::default())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn valid_employee() -> Value {
        json!({
            "full_name": "Ada Lovelace",
            "avatar": "https://example.com/ada.png",
            "department": "Engineering",
            "birth_date": "1815-12-10",
            "salary": 95000.0
        })
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ok");
    }

    #[tokio::test]
    async fn create_then_fetch_employee() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/api/employees", Some(valid_employee())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], Value::Bool(true));
        assert_eq!(body["data"]["full_name"], "Ada Lovelace");
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/employees/{}", id);
        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id.as_str());

        let (status, body) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_listing_fields() {
        let app = app();
        let payload = json!({
            "full_name": "A",
            "avatar": "not-a-url",
            "department": "X",
            "birth_date": "10/12/1815",
            "salary": -1
        });

        let (status, body) = send(&app, Method::POST, "/api/employees", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let details = body["error"]["details"].as_object().unwrap();
        for field in ["full_name", "avatar", "department", "birth_date", "salary"] {
            assert!(details.contains_key(field), "missing detail for {}", field);
        }

        let (_, body) = send(&app, Method::GET, "/api/employees", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn create_rejects_malformed_json() {
        let app = app();
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/employees")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "MALFORMED_BODY");
    }

    #[tokio::test]
    async fn create_with_duplicate_id_conflicts() {
        let app = app();
        let mut payload = valid_employee();
        payload["id"] = json!("7c9e6679-7425-40de-944b-e07fc1f90ae7");

        let (status, _) =
            send(&app, Method::POST, "/api/employees", Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(&app, Method::POST, "/api/employees", Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn patch_updates_only_given_fields() {
        let app = app();
        let (_, body) =
            send(&app, Method::POST, "/api/employees", Some(valid_employee())).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/employees/{}", id);
        let patch = json!({ "department": "Research" });
        let (status, body) = send(&app, Method::PATCH, &uri, Some(patch)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["department"], "Research");
        assert_eq!(body["data"]["full_name"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn patch_rejects_invalid_partial_payload() {
        let app = app();
        let (_, body) =
            send(&app, Method::POST, "/api/employees", Some(valid_employee())).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/employees/{}", id);
        let patch = json!({ "salary": -100 });
        let (status, body) = send(&app, Method::PATCH, &uri, Some(patch)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["details"]
            .as_object()
            .unwrap()
            .contains_key("salary"));
    }

    #[tokio::test]
    async fn patch_unknown_id_is_not_found() {
        let app = app();
        let uri = format!("/api/employees/{}", uuid::Uuid::new_v4());
        let (status, body) =
            send(&app, Method::PATCH, &uri, Some(json!({ "salary": 1.0 }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn delete_removes_employee() {
        let app = app();
        let (_, body) =
            send(&app, Method::POST, "/api/employees", Some(valid_employee())).await;
        let id = body["data"]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/employees/{}", id);
        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], Value::Bool(true));

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, body) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_uuid_path_id_is_rejected() {
        let app = app();
        let (status, _) = send(&app, Method::GET, "/api/employees/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn responses_carry_security_headers() {
        let app = app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["x-frame-options"], "DENY");
    }
}
