//! Wire models for the Auto Info blog API.
//!
//! Every type here mirrors one JSON shape produced or consumed by the
//! backend. Field defaults follow the backend: optional columns come back as
//! `null` or are omitted, so they deserialize into `Option`.

use serde::{Deserialize, Deserializer, Serialize};

/// Reads a list field that the backend may send as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 统一响应信封：`{ code, message, data }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// `0` on success.
    #[serde(default)]
    pub code: i64,
    /// Human-readable status text.
    #[serde(default)]
    pub message: String,
    /// Payload; `null` for actions that return nothing.
    pub data: T,
}

/// `{ items: [...] }` payload used by the category and tag endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemList<T> {
    /// Listed entities; `null` reads as empty.
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
}

/// Paginated list body. Counters are optional so callers decide defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Items on this page; `null` reads as empty.
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub items: Vec<T>,
    /// Total number of matching items.
    pub total: Option<u64>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size used by the server.
    pub page_size: Option<u32>,
    /// Number of pages for `total` at `page_size`.
    pub total_pages: Option<u32>,
}

/// Full-text search result page, echoing the keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching articles.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<ArticleListItem>,
    /// Total number of matches.
    #[serde(default)]
    pub total: u64,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: u32,
    /// Page size used by the server.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Number of result pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Keyword as received by the server.
    #[serde(default)]
    pub keyword: String,
}

fn first_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Publication state of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Not visible on the public site.
    Draft,
    /// Visible on the public site.
    #[default]
    Published,
}

impl ArticleStatus {
    /// Value used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

// 分类
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

// 标签；热门标签接口会额外带上文章数 count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Image or video attached to an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Media id.
    pub id: u64,
    /// `image` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Source URL.
    pub url: String,
    /// Optional preview image.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Optional caption.
    #[serde(default)]
    pub caption: Option<String>,
}

// 列表项（不含正文）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// 完整文章数据模型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: u64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub content: String, // HTML 正文
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_avatar: Option<String>,
    #[serde(default)]
    pub status: ArticleStatus,
    #[serde(default)]
    pub is_original: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub media_items: Vec<MediaItem>,
}

/// Minimal article projection used for search suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleBrief {
    /// Article id.
    pub id: u64,
    /// Title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Optional summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Optional cover image.
    #[serde(default)]
    pub cover_image: Option<String>,
}

/// Related articles grouped by how they relate to the source article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelatedArticles {
    /// Articles sharing at least one tag.
    #[serde(default)]
    pub by_tag: Vec<ArticleListItem>,
    /// Articles in the same category.
    #[serde(default)]
    pub by_category: Vec<ArticleListItem>,
}

impl RelatedArticles {
    /// True when neither group has entries.
    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty() && self.by_category.is_empty()
    }
}

/// Site-wide counters shown on the home page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteStats {
    /// Published articles.
    #[serde(default)]
    pub article_count: u64,
    /// Categories.
    #[serde(default)]
    pub category_count: u64,
    /// Tags.
    #[serde(default)]
    pub tag_count: u64,
    /// Sum of article views.
    #[serde(default)]
    pub total_views: u64,
    /// Five most recently published articles.
    #[serde(default)]
    pub latest_articles: Vec<ArticleListItem>,
}

/// Media entry submitted together with a new article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMediaItem {
    /// `image` or `video`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Source URL.
    pub url: String,
    /// Optional preview image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

// 创建文章请求体；未填写的可选字段交给后端默认值
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_original: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default)]
    pub media_items: Vec<NewMediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

// 更新文章请求体；只发送被修改的字段
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArticleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_original: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_items: Option<Vec<NewMediaItem>>,
}

/// Request body for creating a category.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewCategory {
    /// Display name, unique.
    pub name: String,
    /// URL slug; derived from the name when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
