use std::path::PathBuf;

use speaking::{Breakpoint, Catalog, ProjectCatalog};
use url::Url;

#[derive(Debug, Clone)]
pub(crate) struct SiteInfo {
    pub(crate) title: String,
    pub(crate) url: Option<Url>,
    pub(crate) breakpoint: Breakpoint,
    pub(crate) static_dir: Option<PathBuf>,
}

/// Loaded once at startup and shared read-only by every request.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) talks: Catalog,
    pub(crate) projects: ProjectCatalog,
    pub(crate) site: SiteInfo,
}
