//! Per-resource API modules.
//!
//! Each function only builds a path and query and hands the request to
//! [`HttpClient`]; envelope handling and error logging happen there.

use auto_info_shared::{
    ArticleBrief, ArticleDetail, ArticleListItem, ArticleStatus, ArticleUpdate, Category,
    ItemList, NewArticle, NewCategory, Page, RelatedArticles, SearchResults, SiteStats, Tag,
};

use crate::http::{ApiError, ApiRequest, HttpClient};

/// Filters and paging for `GET /articles`. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
    /// Category slug.
    pub category: Option<String>,
    /// Tag slug.
    pub tag: Option<String>,
    /// Publication state.
    pub status: Option<ArticleStatus>,
}

impl ArticleQuery {
    /// Query selecting one page.
    pub fn page(page: u32) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// Restricts the list to one category.
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    /// Restricts the list to one tag.
    pub fn with_tag(mut self, slug: impl Into<String>) -> Self {
        self.tag = Some(slug.into());
        self
    }

    /// Fills every unset field from `base`; fields set on `self` win.
    pub fn or(self, base: ArticleQuery) -> ArticleQuery {
        ArticleQuery {
            page: self.page.or(base.page),
            page_size: self.page_size.or(base.page_size),
            category: self.category.or(base.category),
            tag: self.tag.or(base.tag),
            status: self.status.or(base.status),
        }
    }

    fn apply(&self, request: ApiRequest) -> ApiRequest {
        request
            .query_opt("page", self.page)
            .query_opt("page_size", self.page_size)
            .query_opt("category", self.category.as_deref())
            .query_opt("tag", self.tag.as_deref())
            .query_opt("status", self.status.map(ArticleStatus::as_str))
    }
}

/// Paging for `GET /search`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Items per page.
    pub page_size: Option<u32>,
}

/// `/articles` endpoints.
#[derive(Clone)]
pub struct ArticleApi {
    client: HttpClient,
}

impl ArticleApi {
    /// Binds the module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }

    /// 获取文章列表（该接口直接返回分页体，没有信封）
    pub async fn list(&self, query: &ArticleQuery) -> Result<Page<ArticleListItem>, ApiError> {
        self.client
            .request_bare(query.apply(ApiRequest::get("/articles")))
            .await
    }

    /// 获取文章详情，支持 id 或 slug
    pub async fn detail(&self, id_or_slug: &str) -> Result<ArticleDetail, ApiError> {
        let path = format!("/articles/{}", urlencoding::encode(id_or_slug));
        self.client.request(ApiRequest::get(path)).await
    }

    /// 创建文章
    pub async fn create(&self, data: &NewArticle) -> Result<ArticleDetail, ApiError> {
        self.client
            .request(ApiRequest::post("/articles").json(data)?)
            .await
    }

    /// 更新文章
    pub async fn update(&self, id: u64, data: &ArticleUpdate) -> Result<ArticleDetail, ApiError> {
        self.client
            .request(ApiRequest::put(format!("/articles/{id}")).json(data)?)
            .await
    }

    /// 删除文章
    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let _: Option<serde_json::Value> = self
            .client
            .request(ApiRequest::delete(format!("/articles/{id}")))
            .await?;
        Ok(())
    }

    /// Title suggestions while the user types.
    pub async fn instant_search(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ArticleBrief>, ApiError> {
        self.client
            .request(
                ApiRequest::get("/articles/search")
                    .query("q", query)
                    .query("limit", limit),
            )
            .await
    }

    /// Articles sharing tags or the category with `article_id`.
    pub async fn related(&self, article_id: u64) -> Result<RelatedArticles, ApiError> {
        self.client
            .request(ApiRequest::get(format!("/articles/{article_id}/related")))
            .await
    }
}

/// `/categories` endpoints.
#[derive(Clone)]
pub struct CategoryApi {
    client: HttpClient,
}

impl CategoryApi {
    /// Binds the module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }

    /// 获取所有分类
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let data: ItemList<Category> = self.client.request(ApiRequest::get("/categories")).await?;
        Ok(data.items)
    }

    /// 创建分类
    pub async fn create(&self, data: &NewCategory) -> Result<Category, ApiError> {
        self.client
            .request(ApiRequest::post("/categories").json(data)?)
            .await
    }
}

/// `/tags` endpoints.
#[derive(Clone)]
pub struct TagApi {
    client: HttpClient,
}

impl TagApi {
    /// Binds the module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }

    /// 获取所有标签
    pub async fn list(&self) -> Result<Vec<Tag>, ApiError> {
        let data: ItemList<Tag> = self.client.request(ApiRequest::get("/tags")).await?;
        Ok(data.items)
    }

    /// 获取热门标签（按文章数排序）
    pub async fn popular(&self, limit: u32) -> Result<Vec<Tag>, ApiError> {
        let data: ItemList<Tag> = self
            .client
            .request(ApiRequest::get("/tags/popular").query("limit", limit))
            .await?;
        Ok(data.items)
    }
}

/// `/search` endpoint.
#[derive(Clone)]
pub struct SearchApi {
    client: HttpClient,
}

impl SearchApi {
    /// Binds the module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }

    /// 搜索文章标题和正文
    pub async fn search(
        &self,
        keyword: &str,
        params: &SearchParams,
    ) -> Result<SearchResults, ApiError> {
        let request = ApiRequest::get("/search")
            .query("q", keyword)
            .query_opt("page", params.page)
            .query_opt("page_size", params.page_size);
        self.client.request(request).await
    }
}

/// `/stats` endpoint.
#[derive(Clone)]
pub struct StatsApi {
    client: HttpClient,
}

impl StatsApi {
    /// Binds the module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
        }
    }

    /// 获取网站统计
    pub async fn stats(&self) -> Result<SiteStats, ApiError> {
        self.client.request(ApiRequest::get("/stats")).await
    }
}

/// All resource modules bound to one client.
#[derive(Clone)]
pub struct Api {
    /// Articles.
    pub articles: ArticleApi,
    /// Categories.
    pub categories: CategoryApi,
    /// Tags.
    pub tags: TagApi,
    /// Full-text search.
    pub search: SearchApi,
    /// Site statistics.
    pub stats: StatsApi,
}

impl Api {
    /// Binds every module to `client`.
    pub fn new(client: HttpClient) -> Self {
        Self {
            articles: ArticleApi::new(client.clone()),
            categories: CategoryApi::new(client.clone()),
            tags: TagApi::new(client.clone()),
            search: SearchApi::new(client.clone()),
            stats: StatsApi::new(client),
        }
    }
}

#[cfg(test)]
mod tests {
    use auto_info_shared::{ArticleStatus, NewArticle, NewCategory};
    use serde_json::json;

    use super::*;
    use crate::{http::Method, testing::MockTransport};

    #[test]
    fn query_overrides_win_over_base() {
        let base = ArticleQuery {
            page: Some(1),
            page_size: Some(20),
            status: Some(ArticleStatus::Published),
            ..ArticleQuery::default()
        };
        let merged = ArticleQuery::page(3).with_tag("rust").or(base);
        assert_eq!(merged.page, Some(3));
        assert_eq!(merged.page_size, Some(20));
        assert_eq!(merged.tag.as_deref(), Some("rust"));
        assert_eq!(merged.status, Some(ArticleStatus::Published));
    }

    #[tokio::test]
    async fn article_list_sends_only_set_filters() {
        let transport = MockTransport::new();
        transport.reply_json(Method::Get, "/articles", 200, json!({"items": []}));
        let api = ArticleApi::new(transport.client());

        let query = ArticleQuery {
            page: Some(2),
            category: Some("ai news".to_string()),
            status: Some(ArticleStatus::Published),
            ..ArticleQuery::default()
        };
        let page = api.list(&query).await.expect("list");
        assert!(page.items.is_empty());
        assert_eq!(
            transport.sent_urls(),
            vec!["/api/articles?page=2&category=ai%20news&status=published".to_string()]
        );
    }

    #[tokio::test]
    async fn detail_escapes_slug() {
        let transport = MockTransport::new();
        transport.reply_data(
            Method::Get,
            "/articles/hello%2Fworld",
            json!({"id": 1, "title": "Hello", "slug": "hello/world", "content": "<p>hi</p>"}),
        );
        let api = ArticleApi::new(transport.client());

        let article = api.detail("hello/world").await.expect("detail");
        assert_eq!(article.id, 1);
        assert_eq!(article.status, ArticleStatus::Published);
    }

    #[tokio::test]
    async fn create_and_delete_use_expected_verbs() {
        let transport = MockTransport::new();
        transport.reply_data(
            Method::Post,
            "/articles",
            json!({"id": 9, "title": "New", "slug": "new", "content": "<p>x</p>"}),
        );
        transport.reply_json(
            Method::Delete,
            "/articles/9",
            200,
            json!({"code": 0, "message": "文章删除成功", "data": null}),
        );
        let api = ArticleApi::new(transport.client());

        let created = api
            .create(&NewArticle {
                title: "New".to_string(),
                content: "<p>x</p>".to_string(),
                ..NewArticle::default()
            })
            .await
            .expect("create");
        api.delete(created.id).await.expect("delete");

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Post);
        assert!(sent[0].body.as_deref().is_some_and(|b| b.contains("\"title\":\"New\"")));
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, "/api/articles/9");
    }

    #[tokio::test]
    async fn taxonomy_endpoints_unwrap_items() {
        let transport = MockTransport::new();
        transport.reply_data(
            Method::Get,
            "/categories",
            json!({"items": [{"id": 1, "name": "AI", "slug": "ai", "icon": "robot"}]}),
        );
        transport.reply_data(
            Method::Get,
            "/tags/popular",
            json!({"items": [{"id": 2, "name": "llm", "slug": "llm", "count": 4}]}),
        );
        transport.reply_data(
            Method::Get,
            "/tags",
            json!({"items": [
                {"id": 2, "name": "llm", "slug": "llm"},
                {"id": 3, "name": "rust", "slug": "rust"}
            ]}),
        );
        transport.reply_data(Method::Post, "/categories", json!({"id": 5, "name": "Web", "slug": "web"}));
        let api = Api::new(transport.client());

        let categories = api.categories.list().await.expect("categories");
        assert_eq!(categories[0].icon.as_deref(), Some("robot"));

        let tags = api.tags.popular(8).await.expect("popular");
        assert_eq!(tags[0].count, Some(4));

        let all_tags = api.tags.list().await.expect("tags");
        assert_eq!(
            all_tags.iter().map(|tag| tag.slug.as_str()).collect::<Vec<_>>(),
            vec!["llm", "rust"]
        );
        assert_eq!(all_tags[0].count, None);

        let created = api
            .categories
            .create(&NewCategory {
                name: "Web".to_string(),
                ..NewCategory::default()
            })
            .await
            .expect("create category");
        assert_eq!(created.slug, "web");

        assert_eq!(transport.sent_urls()[1], "/api/tags/popular?limit=8");
        assert_eq!(transport.sent_urls()[2], "/api/tags");
    }

    #[tokio::test]
    async fn search_instant_search_and_related_build_expected_urls() {
        let transport = MockTransport::new();
        transport.reply_data(Method::Get, "/search", json!({"items": [], "total": 0, "keyword": "rust"}));
        transport.reply_data(Method::Get, "/articles/search", json!([]));
        transport.reply_data(Method::Get, "/articles/4/related", json!({"by_tag": [], "by_category": []}));
        let api = Api::new(transport.client());

        let results = api
            .search
            .search("rust", &SearchParams {
                page: Some(2),
                page_size: None,
            })
            .await
            .expect("search");
        assert_eq!(results.keyword, "rust");
        assert_eq!(results.page, 1);

        api.articles.instant_search("ru", 5).await.expect("instant");
        let related = api.articles.related(4).await.expect("related");
        assert!(related.is_empty());

        assert_eq!(
            transport.sent_urls(),
            vec![
                "/api/search?q=rust&page=2".to_string(),
                "/api/articles/search?q=ru&limit=5".to_string(),
                "/api/articles/4/related".to_string(),
            ]
        );
    }
}
