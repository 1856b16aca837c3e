//! Static configuration for the frontend application.
//!
//! Values are fixed at build time; the HTTP client reads them once when it
//! is constructed.

/// Root path every API request is resolved against.
/// - Local development: "/api" (Trunk proxies it to the backend)
/// - Other deployments: set `AUTO_INFO_API_BASE` when building
pub const API_BASE: &str = match option_env!("AUTO_INFO_API_BASE") {
    Some(url) => url,
    None => "/api",
};

/// Overall per-request timeout enforced by the transport.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Suffix of every document title.
pub const SITE_NAME: &str = "AI智能资讯";

/// Page title used when a route has none.
pub const DEFAULT_PAGE_TITLE: &str = "Auto Info";

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Page size of the article list before the first response arrives.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of popular tags requested by default.
pub const HOT_TAG_LIMIT: u32 = 20;

/// Number of suggestions requested by instant search by default.
pub const INSTANT_SEARCH_LIMIT: u32 = 5;

/// Connection settings handed to [`crate::http::HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix joined in front of every request path.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u32,
    /// Headers attached to every request.
    pub default_headers: Vec<(&'static str, &'static str)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            default_headers: vec![("Content-Type", "application/json")],
        }
    }
}
