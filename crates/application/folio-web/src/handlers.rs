//! HTTP handlers for the portfolio site
//!
//! Every listing handler mounts a fresh [`PageView`] from the request, so
//! filter and selection state lives exactly as long as the response.

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use folio_core::{Catalog, CatalogKind, Category, ContactMessage, PageView};
use serde::Deserialize;
use std::sync::Arc;

use crate::state::AppState;
use crate::templates::{self, Flash};

/// Related articles shown under a post
const RELATED_LIMIT: usize = 2;

/// Request made by HTMX rather than a full page load
pub fn is_htmx(headers: &HeaderMap) -> bool {
    headers.get("HX-Request").is_some()
}

/// Listing query string: `?q=&category=&selected=`
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub selected: Option<String>,
}

/// Mount a view for one request.
///
/// A missing `category` keeps the catalog's default tab. HTMX swaps happen
/// after the first paint, so they skip the entrance animation.
pub fn mount_view<'a>(
    catalog: &'a Catalog,
    query: &ListingQuery,
    headers: &HeaderMap,
) -> PageView<'a> {
    let mut view = PageView::mount(catalog);
    if let Some(q) = &query.q {
        view.set_query(q.as_str());
    }
    if let Some(category) = query.category.as_deref() {
        view.set_category(Category::from_param(Some(category)));
    }
    if let Some(id) = query.selected.as_deref().filter(|id| !id.is_empty()) {
        view.select(id);
    }
    if is_htmx(headers) {
        view.mark_revealed();
    }
    view
}

/// Fragment for HTMX, full page otherwise
fn page(headers: &HeaderMap, state: &AppState, title: &str, active: &str, content: String) -> Html<String> {
    if is_htmx(headers) {
        Html(content)
    } else {
        Html(templates::layout_html(
            title,
            active,
            &state.content.profile,
            &content,
        ))
    }
}

// ============== Pages ==============

pub async fn home(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = templates::home_html(&state.content, &state.catalogs);
    page(&headers, &state, "Home", "/", content)
}

pub async fn about(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = templates::about_html(&state.content);
    page(&headers, &state, "About", "/about", content)
}

pub async fn skills(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let content = templates::skills_html(&state.content);
    page(&headers, &state, "Skills", "/skills", content)
}

pub async fn experience(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let view = mount_view(&state.catalogs.experience, &query, &headers);
    let content = templates::experience_html(&view);
    page(&headers, &state, "Experience", "/experience", content)
}

pub async fn projects(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let view = mount_view(&state.catalogs.projects, &query, &headers);
    let content = templates::projects_html(&view);
    page(&headers, &state, "Projects", "/projects", content)
}

pub async fn blog(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let view = mount_view(&state.catalogs.blog, &query, &headers);
    let content = templates::blog_html(&view, &state.content.profile);
    page(&headers, &state, "Blog", "/blog", content)
}

pub async fn blog_post(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let catalog = &state.catalogs.blog;
    match catalog.get(&id) {
        Some(entry) => {
            let related = catalog.related(&id, RELATED_LIMIT);
            let content = templates::article_html(entry, &related, &state.content.profile);
            page(&headers, &state, &entry.title, "/blog", content).into_response()
        }
        None => {
            tracing::warn!(id = %id, "blog post not found");
            let content = templates::not_found_html(CatalogKind::Blog, &id);
            (
                StatusCode::NOT_FOUND,
                page(&headers, &state, "Not found", "/blog", content),
            )
                .into_response()
        }
    }
}

// ============== Contact ==============

pub async fn contact_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let content = templates::contact_html(&state.content.profile, &ContactMessage::default(), None);
    page(&headers, &state, "Contact", "/contact", content)
}

/// Validate and log a submission. HTMX requests get only the result banner.
pub async fn contact_submit(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Form(input): Form<ContactMessage>,
) -> Response {
    let (status, flash, draft) = match input.submit() {
        Ok(()) => (
            StatusCode::OK,
            Flash::Ok("Thanks for reaching out! I'll get back to you soon.".to_string()),
            ContactMessage::default(),
        ),
        Err(e) => (StatusCode::UNPROCESSABLE_ENTITY, Flash::Warn(e.to_string()), input),
    };

    if is_htmx(&headers) {
        return (status, Html(templates::flash_html(&flash))).into_response();
    }

    let content = templates::contact_html(&state.content.profile, &draft, Some(&flash));
    (status, page(&headers, &state, "Contact", "/contact", content)).into_response()
}

// ============== API Handlers ==============

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "folio-web",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs(),
    }))
}

/// Filtered entries of one catalog as JSON
pub async fn api_catalog(
    State(state): State<Arc<AppState>>,
    Path(catalog): Path<String>,
    Query(query): Query<ListingQuery>,
) -> Response {
    let kind: CatalogKind = match catalog.parse() {
        Ok(kind) => kind,
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": e })),
            )
                .into_response();
        }
    };

    let view = mount_view(state.catalogs.get(kind), &query, &HeaderMap::new());
    let entries = view.visible();

    Json(serde_json::json!({
        "catalog": kind.slug(),
        "query": view.filter().query,
        "category": view.filter().category.label(),
        "count": entries.len(),
        "entries": entries,
    }))
    .into_response()
}

// ============== Static Assets ==============

/// CSS stylesheet
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css")],
        templates::STYLE_CSS,
    )
}

/// Fallback for unknown paths
pub async fn not_found(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    uri: Uri,
) -> impl IntoResponse {
    tracing::debug!(path = %uri.path(), "no route");
    let content = templates::page_not_found_html(uri.path());
    (
        StatusCode::NOT_FOUND,
        page(&headers, &state, "Not found", "", content),
    )
}
