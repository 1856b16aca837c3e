//! Document head updates: title, description and canonical link.

use auto_info_shared::ArticleDetail;
use web_sys::{window, Document, Element};

use crate::{
    router::{document_title, Route},
    utils::html_to_text,
};

const DEFAULT_DESCRIPTION: &str =
    "AI智能资讯：自动收集与整理人工智能领域的新闻和文章，按分类与标签归档，支持全文搜索。";
const DESCRIPTION_MAX_CHARS: usize = 160;

fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn upsert_head_element(selector: &str, tag_name: &str) -> Option<Element> {
    let doc = document()?;
    if let Some(found) = doc.query_selector(selector).ok().flatten() {
        return Some(found);
    }
    let head = doc.query_selector("head").ok().flatten()?;
    let created = doc.create_element(tag_name).ok()?;
    let _ = head.append_child(&created);
    Some(created)
}

fn normalize_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// Single-line meta text of at most `max_chars` characters (plus an ellipsis).
fn normalize_meta_text(value: &str, max_chars: usize) -> String {
    truncate_chars(&normalize_whitespace(value), max_chars)
}

fn set_meta_name(name: &str, content: &str) {
    let selector = format!("meta[name=\"{name}\"]");
    let Some(element) = upsert_head_element(&selector, "meta") else {
        return;
    };
    let _ = element.set_attribute("name", name);
    let _ = element.set_attribute("content", content);
}

fn set_link_canonical(url: &str) {
    let Some(element) = upsert_head_element("link[rel=\"canonical\"]", "link") else {
        return;
    };
    let _ = element.set_attribute("rel", "canonical");
    let _ = element.set_attribute("href", url);
}

fn current_href() -> Option<String> {
    window()?.location().href().ok()
}

pub fn set_document_title(title: &str) {
    let Some(doc) = document() else {
        return;
    };
    doc.set_title(title);
}

/// Title and default description for the page `route` renders.
pub fn apply_route_seo(route: Option<&Route>) {
    set_document_title(&document_title(route));
    set_meta_name("description", DEFAULT_DESCRIPTION);
    if let Some(href) = current_href() {
        set_link_canonical(&href);
    }
}

/// Description from the article summary, falling back to its content.
pub fn apply_article_seo(article: &ArticleDetail) {
    set_meta_name("description", &article_description(article));
}

fn article_description(article: &ArticleDetail) -> String {
    let source = match article.summary.as_deref() {
        Some(summary) if !summary.trim().is_empty() => summary.to_string(),
        _ => html_to_text(&article.content),
    };
    let description = normalize_meta_text(&source, DESCRIPTION_MAX_CHARS);
    if description.is_empty() {
        DEFAULT_DESCRIPTION.to_string()
    } else {
        description
    }
}
