use crate::ServerConfig;
use crate::snapshot::{dropdown_snapshot, project_record, router_query, selection_context};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use switcher_api::{
    PROTOCOL_VERSION, ProjectDropdownSnapshot, ProjectSwitcherRequest, SanitizeRouteRequest,
    SanitizeRouteResponse, VersionSnapshot,
};
use switcher_domain::{ProjectRecord, ProjectSwitcherInput, project_dropdown, sanitize_route};

pub fn router(config: ServerConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/route/sanitize", post(post_sanitize_route))
        .route("/project-switcher", post(post_project_switcher))
        .with_state(config);

    Router::new().nest("/api", api)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionSnapshot> {
    Json(VersionSnapshot {
        protocol_version: PROTOCOL_VERSION,
    })
}

async fn post_sanitize_route(
    Json(request): Json<SanitizeRouteRequest>,
) -> Json<SanitizeRouteResponse> {
    let query = router_query(&request.query, request.search.as_deref());
    let route = sanitize_route(&request.route, &query);
    tracing::debug!(
        from = %request.route,
        to = %route,
        query_keys = query.len(),
        "sanitized route"
    );
    Json(SanitizeRouteResponse { route })
}

async fn post_project_switcher(
    State(config): State<ServerConfig>,
    Json(request): Json<ProjectSwitcherRequest>,
) -> Json<ProjectDropdownSnapshot> {
    let query = router_query(&request.query, request.search.as_deref());
    let projects: Vec<ProjectRecord> = request.projects.iter().map(project_record).collect();
    let selection = selection_context(&request.selection);
    let platform = request.platform.unwrap_or(config.platform);

    let dropdown = project_dropdown(&ProjectSwitcherInput {
        route: &request.route,
        query: &query,
        projects: &projects,
        selection: &selection,
        platform,
    });
    tracing::debug!(
        route = %request.route,
        platform,
        projects = projects.len(),
        items = dropdown.items().len(),
        "built project switcher"
    );

    Json(dropdown_snapshot(dropdown))
}
