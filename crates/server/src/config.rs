use std::{fs, path::PathBuf};

use serde::Deserialize;
use speaking::Breakpoint;
use tracing::warn;
use url::Url;

const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub site_title: String,
    pub site_url: Option<String>,
    pub talks_path: Option<PathBuf>,
    pub projects_path: Option<PathBuf>,
    /// Directory served under `/static`; local images are omitted without it.
    pub static_dir: Option<PathBuf>,
    pub md_breakpoint_px: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            site_title: "Portfolio".into(),
            site_url: None,
            talks_path: None,
            projects_path: None,
            static_dir: None,
            md_breakpoint_px: Breakpoint::DEFAULT.md,
        }
    }
}

impl Settings {
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::new(self.md_breakpoint_px)
    }

    /// The configured public URL, if it parses as an absolute URL.
    pub fn public_url(&self) -> Option<Url> {
        let raw = self.site_url.as_deref()?;
        match Url::parse(raw) {
            Ok(url) => Some(url),
            Err(error) => {
                warn!(site_url = raw, %error, "ignoring unparseable site_url");
                None
            }
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_config(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

/// Applies keys from a flat `site.toml`. Values may be strings or integers.
pub fn apply_file_config(settings: &mut Settings, raw: &str) {
    let table = match toml::from_str::<toml::Table>(raw) {
        Ok(table) => table,
        Err(error) => {
            warn!(file = SETTINGS_FILE, %error, "ignoring unparseable settings file");
            return;
        }
    };
    let value = |key: &str| match table.get(key) {
        Some(toml::Value::String(v)) => Some(v.clone()),
        Some(toml::Value::Integer(v)) => Some(v.to_string()),
        _ => None,
    };

    if let Some(v) = value("bind_addr") {
        settings.server_bind = v;
    }
    if let Some(v) = value("site_title") {
        settings.site_title = v;
    }
    if let Some(v) = value("site_url") {
        settings.site_url = Some(v);
    }
    if let Some(v) = value("talks_path") {
        settings.talks_path = Some(PathBuf::from(v));
    }
    if let Some(v) = value("projects_path") {
        settings.projects_path = Some(PathBuf::from(v));
    }
    if let Some(v) = value("static_dir") {
        settings.static_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = value("md_breakpoint_px") {
        set_breakpoint(settings, &v);
    }
}

/// Environment overrides. `APP__*` wins over the short names.
pub fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SITE_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("APP__SITE_TITLE") {
        settings.site_title = v;
    }
    if let Some(v) = var("APP__SITE_URL") {
        settings.site_url = Some(v);
    }

    if let Some(v) = var("APP__TALKS_PATH") {
        settings.talks_path = Some(PathBuf::from(v));
    }
    if let Some(v) = var("APP__PROJECTS_PATH") {
        settings.projects_path = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__STATIC_DIR") {
        settings.static_dir = Some(PathBuf::from(v));
    }

    if let Some(v) = var("APP__MD_BREAKPOINT_PX") {
        set_breakpoint(settings, &v);
    }
}

fn set_breakpoint(settings: &mut Settings, raw: &str) {
    match raw.trim().parse::<u32>() {
        Ok(parsed) => settings.md_breakpoint_px = parsed,
        Err(error) => warn!(value = raw, %error, "ignoring invalid md_breakpoint_px"),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
