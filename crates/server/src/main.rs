use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use shared::error::{ApiError, DatasetError, ErrorCode};
use speaking::{Catalog, ProjectCatalog};
use tower_http::services::ServeDir;
use tracing::{error, info};

mod api;
mod app_state;
mod config;
mod pages;

use api::http_list_talks;
use app_state::{AppState, SiteInfo};
use config::{load_settings, Settings};
use pages::{projects_page, speaking_page, STATIC_PREFIX};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let state = load_state(&settings)?;
    info!(
        talks = state.talks.len(),
        projects = state.projects.projects().len(),
        "datasets loaded"
    );
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "site listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn load_state(settings: &Settings) -> anyhow::Result<AppState> {
    let talks = match &settings.talks_path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin().context("built-in talk dataset is invalid"),
    }
    .map_err(report_findings)?;

    let projects = match &settings.projects_path {
        Some(path) => ProjectCatalog::load(path),
        None => ProjectCatalog::builtin().context("built-in project dataset is invalid"),
    }
    .map_err(report_findings)?;

    Ok(AppState {
        talks,
        projects,
        site: SiteInfo {
            title: settings.site_title.clone(),
            url: settings.public_url(),
            breakpoint: settings.breakpoint(),
            static_dir: settings.static_dir.clone(),
        },
    })
}

fn report_findings(error: anyhow::Error) -> anyhow::Error {
    if let Some(dataset) = error.downcast_ref::<DatasetError>() {
        for finding in dataset.findings() {
            error!(
                index = finding.index,
                field = finding.field,
                reason = %finding.reason,
                "invalid dataset entry"
            );
        }
    }
    error
}

fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(speaking_page))
        .route("/speaking", get(speaking_page))
        .route("/projects", get(projects_page))
        .route("/api/talks", get(http_list_talks))
        .fallback(not_found);
    if let Some(dir) = &state.site.static_dir {
        info!(dir = %dir.display(), "serving static assets");
        router = router.nest_service(STATIC_PREFIX, ServeDir::new(dir));
    }
    router.with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError::new(
            ErrorCode::NotFound,
            format!("no page at {}", uri.path()),
        )),
    )
}

async fn healthz() -> &'static str {
    "ok"
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
