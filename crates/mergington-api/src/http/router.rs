//! Axum router configuration with middleware.
//!
//! Middleware: request id, tracing, CORS.
//!
//! Every request gets an `x-request-id` (a UUIDv7 unless the client sent
//! one), which is recorded on the request span together with the response
//! latency and echoed back on the response.
//!
//! Static assets (the signup page) are served under `/static` from the
//! configured `static_dir` when it exists; `/` redirects to its
//! `index.html`. If the directory does not exist, only the API is served.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderValue, Request};
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(redirect_to_index))
        .route("/health", get(health_check))
        .route("/activities", get(handlers::activity::list_activities))
        .route(
            "/activities/{activity_name}",
            get(handlers::activity::get_activity),
        )
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activity::signup),
        )
        .route(
            "/activities/{activity_name}/participants/{email}",
            delete(handlers::activity::withdraw),
        );

    let static_dir = &state.config.static_dir;
    if static_dir.exists() {
        router = router.nest_service("/static", ServeDir::new(static_dir));
        tracing::info!(path = %static_dir.display(), "static file serving enabled");
    }

    let trace = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    // Last layer added runs first: the id is set before the span is made.
    router
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(trace)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .with_state(state)
}

/// Assigns time-ordered request ids.
#[derive(Clone, Copy, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// GET / - Temporary redirect to the signup page.
async fn redirect_to_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use axum::http::{Method, StatusCode, header};
    use tower::ServiceExt;

    use mergington_core::registry::ActivityRegistry;
    use mergington_core::service::activity::{ActivityService, CapacityPolicy};
    use mergington_infra::seed::default_seed;
    use mergington_types::config::ServiceConfig;

    fn test_router_with(config: ServiceConfig) -> Router {
        let registry = ActivityRegistry::from_seed(default_seed()).unwrap();
        let capacity = CapacityPolicy::from_enforce_flag(config.enforce_capacity);
        let service = ActivityService::new(registry, capacity);
        build_router(AppState::new(service, config))
    }

    fn test_router() -> Router {
        test_router_with(ServiceConfig {
            static_dir: PathBuf::from("/nonexistent/mergington/static"),
            ..ServiceConfig::default()
        })
    }

    async fn send(router: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn root_redirects_to_static_index() {
        let router = test_router();
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/static/index.html"
        );
    }

    #[tokio::test]
    async fn get_activities_returns_catalog() {
        let router = test_router();
        let (status, json) = send(&router, Method::GET, "/activities").await;

        assert_eq!(status, StatusCode::OK);
        let activities = json.as_object().unwrap();
        assert!(activities.contains_key("Chess Club"));
        assert!(activities.contains_key("Programming Class"));

        let chess = &activities["Chess Club"];
        assert!(chess["description"].is_string());
        assert!(chess["schedule"].is_string());
        assert!(chess["max_participants"].is_u64());
        assert!(chess["participants"].is_array());
    }

    #[tokio::test]
    async fn get_activities_respects_capacity() {
        let router = test_router();
        let (_, json) = send(&router, Method::GET, "/activities").await;

        for (name, activity) in json.as_object().unwrap() {
            let count = activity["participants"].as_array().unwrap().len() as u64;
            let max = activity["max_participants"].as_u64().unwrap();
            assert!(count <= max, "{name} is over capacity");
            assert!(!activity["description"].as_str().unwrap().trim().is_empty());
            assert!(!activity["schedule"].as_str().unwrap().trim().is_empty());
        }
    }

    #[tokio::test]
    async fn get_single_activity() {
        let router = test_router();
        let (status, json) = send(&router, Method::GET, "/activities/Gym%20Class").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["max_participants"], 30);

        let (status, json) =
            send(&router, Method::GET, "/activities/Nonexistent%20Activity").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn signup_success() {
        let router = test_router();
        let (status, json) = send(
            &router,
            Method::POST,
            "/activities/Basketball%20Team/signup?email=test@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("test@mergington.edu"));
        assert!(message.contains("Basketball Team"));
    }

    #[tokio::test]
    async fn signup_unknown_activity() {
        let router = test_router();
        let (status, json) = send(
            &router,
            Method::POST,
            "/activities/Nonexistent%20Activity/signup?email=x@y.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn signup_duplicate_rejected() {
        let router = test_router();
        let uri = "/activities/Swimming%20Club/signup?email=dup@mergington.edu";

        let (status, _) = send(&router, Method::POST, uri).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(&router, Method::POST, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["detail"].as_str().unwrap().contains("already signed up"));
    }

    #[tokio::test]
    async fn signup_without_email_is_bad_request() {
        let router = test_router();
        let (status, json) =
            send(&router, Method::POST, "/activities/Chess%20Club/signup").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["detail"].is_string());
    }

    #[tokio::test]
    async fn signup_decodes_percent_encoded_email() {
        let router = test_router();
        let (status, _) = send(
            &router,
            Method::POST,
            "/activities/Science%20Club/signup?email=test%40mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, json) = send(&router, Method::GET, "/activities").await;
        let participants = json["Science Club"]["participants"].as_array().unwrap();
        assert!(participants.iter().any(|p| p == "test@mergington.edu"));
    }

    #[tokio::test]
    async fn signup_full_activity_rejected() {
        let router = test_router();
        // Chess Club seeds 2 of 12 places.
        for i in 0..10 {
            let uri = format!("/activities/Chess%20Club/signup?email=s{i}@mergington.edu");
            let (status, _) = send(&router, Method::POST, &uri).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, json) = send(
            &router,
            Method::POST,
            "/activities/Chess%20Club/signup?email=late@mergington.edu",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Activity is full");
    }

    #[tokio::test]
    async fn signup_full_activity_allowed_when_permissive() {
        let router = test_router_with(ServiceConfig {
            static_dir: PathBuf::from("/nonexistent/mergington/static"),
            enforce_capacity: false,
            ..ServiceConfig::default()
        });
        for i in 0..11 {
            let uri = format!("/activities/Chess%20Club/signup?email=s{i}@mergington.edu");
            let (status, _) = send(&router, Method::POST, &uri).await;
            assert_eq!(status, StatusCode::OK);
        }

        let (_, json) = send(&router, Method::GET, "/activities/Chess%20Club").await;
        assert_eq!(json["participants"].as_array().unwrap().len(), 13);
    }

    #[tokio::test]
    async fn remove_participant_success() {
        let router = test_router();
        send(
            &router,
            Method::POST,
            "/activities/Art%20Studio/signup?email=toremove@mergington.edu",
        )
        .await;

        let (status, json) = send(
            &router,
            Method::DELETE,
            "/activities/Art%20Studio/participants/toremove@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["message"],
            "Removed toremove@mergington.edu from Art Studio"
        );

        let (_, json) = send(&router, Method::GET, "/activities/Art%20Studio").await;
        assert_eq!(json["participants"], serde_json::json!(["mia@mergington.edu"]));
    }

    #[tokio::test]
    async fn remove_unknown_participant() {
        let router = test_router();
        let (status, json) = send(
            &router,
            Method::DELETE,
            "/activities/Drama%20Club/participants/nonexistent@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Participant not found in this activity");
    }

    #[tokio::test]
    async fn remove_from_unknown_activity() {
        let router = test_router();
        let (status, json) = send(
            &router,
            Method::DELETE,
            "/activities/Nonexistent%20Activity/participants/test@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn responses_carry_generated_request_id() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/activities/Debate%20Team/signup?email=rid@mergington.edu")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers()["x-request-id"].to_str().unwrap();
        let id = uuid::Uuid::parse_str(id).unwrap();
        assert_eq!(id.get_version_num(), 7);
    }

    #[tokio::test]
    async fn client_request_id_is_echoed() {
        let router = test_router();
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/activities/Nonexistent%20Activity")
                    .header("x-request-id", "client-supplied-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()["x-request-id"], "client-supplied-42");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let router = test_router();
        let (status, json) = send(&router, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn serves_static_files_when_directory_exists() {
        let tmp = tempfile::TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("index.html"), "<h1>Mergington</h1>")
            .await
            .unwrap();

        let router = test_router_with(ServiceConfig {
            static_dir: tmp.path().to_path_buf(),
            ..ServiceConfig::default()
        });

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/static/index.html")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"<h1>Mergington</h1>");
    }
}
