//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the health check and the Leptos SSR page under a
//! single Axum router and serves the compiled WASM/CSS bundle from `/pkg`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Routes that do not depend on the Leptos configuration.
pub fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full application router: health check + SSR page + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg_dir = bundle_dir(
        config.site_root.as_deref(),
        Path::new(leptos_options.site_root.as_ref()),
        leptos_options.site_pkg_dir.as_ref(),
    );
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving static bundle");

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the compiled bundle: `<site root>/<site pkg dir>`, where
/// `SITE_ROOT` replaces the configured site root when set.
fn bundle_dir(site_root_override: Option<&Path>, site_root: &Path, site_pkg_dir: &str) -> PathBuf {
    site_root_override.unwrap_or(site_root).join(site_pkg_dir)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
