//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the server-rendered registration page, the hydration bundle under
//! `/pkg`, and a health probe. The Users API itself lives elsewhere; its base
//! URL is injected into every render through Leptos context.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use client::util::config::ApiConfig;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

/// Leptos SSR frontend plus static assets and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(api: ApiConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the hydrate build.
    let pkg_path = PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_path))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
