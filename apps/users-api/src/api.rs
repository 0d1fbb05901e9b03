use axum::{Json, Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_users::{ApiDoc, UserRepository, UserService, handlers};
use utoipa::OpenApi;

/// Assembles the full application router.
///
/// - `/users`, `/users/{id}`: users API
/// - `/health`: liveness
/// - `/api-docs/openapi.json`: OpenAPI document
///
/// Anything else answers 404 `not Found`.
pub fn app<R: UserRepository + 'static>(service: UserService<R>, app_info: AppInfo) -> Router {
    let routes = handlers::router(service)
        .merge(health_router(app_info))
        .route("/api-docs/openapi.json", get(openapi_json));

    create_router(routes)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_users::{InMemoryUserRepository, seed};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let repository = InMemoryUserRepository::from_store(seed::seeded_store());
        app(
            UserService::new(repository),
            AppInfo {
                name: "users_api",
                version: "0.1.0",
            },
        )
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_users_route_is_mounted_at_root() {
        let (status, body) = get_json(test_app(), "/users").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_health_route() {
        let (status, body) = get_json(test_app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_user_paths() {
        let (status, body) = get_json(test_app(), "/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/users").is_some());
        assert!(body["paths"].get("/users/{id}").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_envelope() {
        let (status, body) = get_json(test_app(), "/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "not Found");
        assert_eq!(body["status"], 404);
    }
}
