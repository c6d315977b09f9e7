//! Folio web surface
//!
//! Server-rendered portfolio pages with HTMX partial swaps.
//!
//! - Full page loads get the layout shell, `HX-Request` loads get the fragment
//! - Listing pages carry their filter and selection in the query string
//! - Catalogs are read-only after startup, so state is a plain `Arc`

pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Result type for folio-web operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Content error: {0}")]
    Content(#[from] folio_core::Error),

    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let pages = Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/experience", get(handlers::experience))
        .route("/projects", get(handlers::projects))
        .route("/skills", get(handlers::skills))
        .route("/contact", get(handlers::contact_page).post(handlers::contact_submit))
        .route("/blog", get(handlers::blog))
        .route("/blog/:id", get(handlers::blog_post));

    let api = Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/:catalog", get(handlers::api_catalog));

    Router::new()
        .merge(pages)
        .merge(api)
        .route("/static/style.css", get(handlers::style_css))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Folio listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use folio_core::SiteContent;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(SiteContent::builtin()).unwrap();
        create_router(Arc::new(state))
    }

    async fn get(uri: &str, htmx: bool) -> (StatusCode, String) {
        fetch(app(), uri, htmx).await
    }

    async fn fetch(app: Router, uri: &str, htmx: bool) -> (StatusCode, String) {
        let mut request = Request::builder().uri(uri);
        if htmx {
            request = request.header("HX-Request", "true");
        }
        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_full_page_gets_layout() {
        let (status, body) = get("/blog", false).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("id=\"listing\" class=\"reveal\""));
    }

    #[tokio::test]
    async fn test_htmx_gets_fragment_without_entrance() {
        let (status, body) = get("/blog?q=react", true).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<!DOCTYPE html>"));
        assert!(body.contains("id=\"listing\" class=\"\""));
        assert!(body.contains("Building Scalable React Applications"));
        assert!(!body.contains("The Ethics of AI"));
    }

    #[tokio::test]
    async fn test_blog_category_query() {
        let (_, body) = get("/blog?category=Volunteer+Work", true).await;
        assert!(body.contains("class=\"tab active\" href=\"/blog?category=Volunteer+Work\""));
        assert!(body.contains("Nothing in this category yet"));
        assert!(!body.contains("Building Scalable React Applications"));
    }

    #[tokio::test]
    async fn test_blog_quick_view() {
        let (_, body) = get("/blog?selected=1", true).await;
        assert!(body.contains("modal-backdrop"));
        assert!(body.contains("href=\"/blog/1\""));
    }

    #[tokio::test]
    async fn test_all_tab_survives_opening_and_closing_a_card() {
        let mut content = SiteContent::builtin();
        content.projects.default_category = Some("Full Stack".to_string());
        let app = create_router(Arc::new(AppState::new(content).unwrap()));

        let (_, body) = fetch(app.clone(), "/projects", true).await;
        assert!(body.contains("class=\"tab active\" href=\"/projects?category=Full+Stack\""));

        let (_, body) = fetch(app.clone(), "/projects?category=All", true).await;
        assert!(body.contains("href=\"/projects?category=All&amp;selected=task-management-app\""));

        let (_, body) = fetch(
            app,
            "/projects?category=All&selected=task-management-app",
            true,
        )
        .await;
        assert!(body.contains("modal-backdrop"));
        assert!(body.contains("class=\"tab active\" href=\"/projects?category=All\""));
        assert!(body.contains("class=\"close\" href=\"/projects?category=All\""));
    }

    #[tokio::test]
    async fn test_blog_post_and_missing_post() {
        let (status, body) = get("/blog/1", true).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Key Ethical Considerations"));

        let (status, body) = get("/blog/999", true).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("&ldquo;999&rdquo;"));
    }

    #[tokio::test]
    async fn test_experience_default_and_all_tabs() {
        let (_, body) = get("/experience", true).await;
        assert!(!body.contains("Debate Team Leader"));

        let (_, body) = get("/experience?category=All", true).await;
        assert!(body.contains("Debate Team Leader"));
        assert!(body.contains("Software Engineering Intern"));
    }

    #[tokio::test]
    async fn test_api_catalog_filters() {
        let (status, body) = get("/api/projects?category=Dashboard", false).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["entries"][0]["id"], "weather-dashboard");
        assert_eq!(json["entries"][1]["id"], "social-media-analytics");
    }

    #[tokio::test]
    async fn test_api_unknown_catalog() {
        let (status, body) = get("/api/recipes", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("unknown catalog"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/api/health", false).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, _) = get("/nope", false).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let request = |body: &'static str| {
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header("content-type", "application/x-www-form-urlencoded")
                .header("HX-Request", "true")
                .body(Body::from(body))
                .unwrap()
        };

        let response = app()
            .oneshot(request("name=Ada&email=ada%40example.com&message=Hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(request("name=Ada&email=nope&message=Hello"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("flash-warn"));
    }
}
