//! Users API location shared by the host and the hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host resolves the base URL from its environment and provides it via
//! Leptos context during SSR. The shell writes it into a `<meta>` tag that
//! the browser build reads back on hydration, so both sides agree on the
//! endpoint without a separate config fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// `name` of the `<meta>` tag carrying the base URL into the browser.
pub const API_BASE_META: &str = "users-api-base-url";

/// Location of the remote Users service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme + authority (+ optional path prefix), without a trailing `/`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build a config from a raw base URL.
    ///
    /// Surrounding whitespace and trailing slashes are dropped; a blank value
    /// falls back to [`DEFAULT_API_BASE_URL`].
    pub fn new(raw: &str) -> Self {
        let base_url = raw.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Self::default();
        }
        Self { base_url: base_url.to_owned() }
    }

    /// Endpoint of the Users collection (`GET` list, `POST` create).
    pub fn users_endpoint(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Read the base URL the server rendered into the document head.
    ///
    /// Returns the default outside the browser or when the tag is missing.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;

            let selector = format!("meta[name=\"{API_BASE_META}\"]");
            web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
                .map_or_else(Self::default, |meta| Self::new(&meta.content()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
