use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use speaking::{html, html::Escaped, partition, Card, Listing, Presentation};
use tracing::debug;

use crate::{
    api::{parse_now, parse_width, ApiResult, ListingQuery},
    app_state::{AppState, SiteInfo},
};

const SPEAKING_TITLE: &str = "Speaking";
const SPEAKING_DESCRIPTION: &str = "Conferences & user groups I speak at";
const PROJECTS_TITLE: &str = "Projects";
const PROJECTS_DESCRIPTION: &str = "Things I have built";

/// Mount point for the configured asset directory.
pub(crate) const STATIC_PREFIX: &str = "/static";

pub(crate) async fn speaking_page(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListingQuery>,
) -> ApiResult<Html<String>> {
    let now = parse_now(q.now.as_deref())?;
    let width = parse_width(q.width.as_deref())?;
    let presentation = Presentation::for_width(width, state.site.breakpoint);

    let groups = partition(state.talks.entries(), now);
    debug!(
        %now,
        upcoming = groups.upcoming.len(),
        past = groups.past.len(),
        ?presentation,
        "rendering speaking page"
    );
    let listing = html::listing(&Listing::build(groups), presentation);

    let body = format!(
        "{}<div class=\"container\">\n{listing}</div>\n",
        intro(SPEAKING_TITLE, SPEAKING_DESCRIPTION)
    );
    Ok(Html(page_shell(
        &state.site,
        "/speaking",
        SPEAKING_TITLE,
        SPEAKING_DESCRIPTION,
        &body,
    )))
}

pub(crate) async fn projects_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let cards: Vec<Card> = state
        .projects
        .projects()
        .iter()
        .map(|project| {
            let mut card = Card::from_project(project);
            card.image = card
                .image
                .filter(|image| image_is_served(&image.src, &state.site));
            card
        })
        .collect();
    let body = format!(
        "{}<div class=\"container\">\n{}</div>\n",
        intro(PROJECTS_TITLE, PROJECTS_DESCRIPTION),
        html::cards(&cards)
    );
    Html(page_shell(
        &state.site,
        "/projects",
        PROJECTS_TITLE,
        PROJECTS_DESCRIPTION,
        &body,
    ))
}

/// Remote images always resolve; local ones only under a configured `/static`.
fn image_is_served(src: &str, site: &SiteInfo) -> bool {
    if src.starts_with("https://") || src.starts_with("http://") {
        return true;
    }
    let served = site.static_dir.is_some()
        && src
            .strip_prefix(STATIC_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'));
    if !served {
        debug!(src, "omitting image with no asset route");
    }
    served
}

fn intro(title: &str, description: &str) -> String {
    format!(
        "<div class=\"page-intro\">\n<h1>{}</h1>\n<p class=\"lead\">{}</p>\n</div>\n",
        Escaped(title),
        Escaped(description)
    )
}

fn page_shell(site: &SiteInfo, path: &str, title: &str, description: &str, body: &str) -> String {
    let canonical = site
        .url
        .as_ref()
        .and_then(|url| url.join(path).ok())
        .map(|url| format!("<link rel=\"canonical\" href=\"{}\" />\n", Escaped(url.as_str())))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{} | {}</title>\n\
         <meta name=\"description\" content=\"{}\" />\n\
         {canonical}\
         <style>{}</style>\n\
         </head>\n\
         <body>\n<main>\n{body}</main>\n</body>\n\
         </html>\n",
        Escaped(title),
        Escaped(&site.title),
        Escaped(description),
        stylesheet(site.breakpoint.md),
    )
}

/// Visibility rules for the responsive listing.
fn stylesheet(md_px: u32) -> String {
    format!(
        ".hidden{{display:none}}\
         @media (min-width:{md_px}px){{.md\\:block{{display:block}}.md\\:hidden{{display:none}}}}"
    )
}
