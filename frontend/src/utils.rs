use std::sync::OnceLock;

use ammonia::Builder;

/// Article HTML with scripts, event handlers and unknown tags removed.
/// Links get `rel="noopener noreferrer"`.
pub fn sanitize_article_html(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }
    static CLEANER: OnceLock<Builder<'static>> = OnceLock::new();
    CLEANER
        .get_or_init(|| {
            let mut builder = Builder::default();
            builder.add_generic_attributes(["class"]);
            builder
        })
        .clean(content)
        .to_string()
}

/// Text content of an HTML fragment.
pub fn html_to_text(content: &str) -> String {
    static STRIPPER: OnceLock<Builder<'static>> = OnceLock::new();
    STRIPPER
        .get_or_init(Builder::empty)
        .clean(content)
        .to_string()
}

/// `2024-05-01T08:30:00` → `2024-05-01`.
pub fn format_date(timestamp: &str) -> &str {
    timestamp.split(['T', ' ']).next().unwrap_or(timestamp)
}
