use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Json, Router,
};
use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dotenvy::dotenv;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod models {
    pub mod contact_models;
}
mod repositories {
    pub mod contact_repository;
}
mod rate_limit;
mod schema;
mod utils {
    pub mod mailer;
}

use handlers::contact_handlers;
use rate_limit::AddressLimiter;
use repositories::contact_repository::ContactRepository;
use utils::mailer::Mailer;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub struct AppState {
    contacts: Option<Arc<ContactRepository>>,
    mailer: Option<Mailer>,
    api_limiter: AddressLimiter,
    contact_limiter: AddressLimiter,
    started_at: Instant,
}

impl AppState {
    pub fn new(contacts: Option<Arc<ContactRepository>>, mailer: Option<Mailer>) -> Self {
        Self {
            contacts,
            mailer,
            api_limiter: rate_limit::api_limiter(),
            contact_limiter: rate_limit::contact_limiter(),
            started_at: Instant::now(),
        }
    }
}

async fn service_banner() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Portfolio API Server",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}

async fn health_check(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "OK",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

// Missing or broken storage configuration degrades to demo mode instead of
// failing startup.
fn connect_db() -> Option<DbPool> {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::info!("DATABASE_URL not set, running in demo mode");
            return None;
        }
    };

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = match r2d2::Pool::builder().build(manager) {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("database connection error: {e}, running in demo mode");
            return None;
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                tracing::error!("database migration error: {e}, running in demo mode");
                return None;
            }
        }
        Err(e) => {
            tracing::error!("database connection error: {e}, running in demo mode");
            return None;
        }
    }

    tracing::info!("database connected successfully");
    Some(pool)
}

pub fn app(state: Arc<AppState>) -> Router {
    let client_origin =
        std::env::var("CLIENT_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    let contact_routes = Router::new()
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::contact_rate_limit,
        ));

    Router::new()
        .route("/", get(service_banner))
        .route("/api/health", get(health_check))
        .route("/api/contacts", get(contact_handlers::list_contacts))
        .merge(contact_routes)
        .fallback(contact_handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::api_rate_limit,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(
                    client_origin
                        .parse::<HeaderValue>()
                        .expect("CLIENT_URL must be a valid origin"),
                )
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let contacts = connect_db().map(|pool| Arc::new(ContactRepository::new(pool)));
    let mailer = Mailer::from_env();
    if mailer.is_none() {
        tracing::info!("email relay not configured, skipping notifications");
    }

    let demo_mode = contacts.is_none();
    let state = Arc::new(AppState::new(contacts, mailer));
    let app = app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(("0.0.0.0", port)).await.unwrap();
    tracing::info!(
        "server running on port {port}, database: {}",
        if demo_mode {
            "disconnected (demo mode)"
        } else {
            "connected"
        }
    );
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn demo_app() -> Router {
        app(Arc::new(AppState::new(None, None)))
    }

    fn contact_post(address: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", address)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn valid_submission() -> serde_json::Value {
        json!({
            "name": "Al",
            "email": "al@example.com",
            "subject": "Hello",
            "message": "hello there",
        })
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn banner_reports_service_info() {
        let response = demo_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "running");
        assert_eq!(body["message"], "Portfolio API Server");
    }

    #[tokio::test]
    async fn health_reports_status_and_uptime() {
        let response = demo_app()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "OK");
        assert!(body["uptime"].as_f64().unwrap() >= 0.0);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn minimal_valid_submission_is_accepted_without_storage() {
        // Demo mode: no storage, no mailer, submission still succeeds.
        let response = demo_app()
            .oneshot(contact_post("198.51.100.1", valid_submission()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["success"], true);
    }

    #[tokio::test]
    async fn short_name_is_rejected_with_field_error() {
        let mut submission = valid_submission();
        submission["name"] = json!("A");
        let response = demo_app()
            .oneshot(contact_post("198.51.100.2", submission))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
        let errors = body["errors"].as_array().unwrap();
        assert!(errors.iter().any(|e| e["field"] == "name"));
    }

    #[tokio::test]
    async fn sixth_submission_in_window_is_rate_limited() {
        let app = demo_app();
        for attempt in 1..=5 {
            let response = app
                .clone()
                .oneshot(contact_post("198.51.100.3", valid_submission()))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::OK,
                "attempt {attempt} should pass"
            );
        }
        let response = app
            .oneshot(contact_post("198.51.100.3", valid_submission()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn contact_listing_fails_without_storage() {
        let response = demo_app()
            .oneshot(
                Request::builder()
                    .uri("/api/contacts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn unmatched_route_returns_404() {
        let response = demo_app()
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Route not found");
    }
}
