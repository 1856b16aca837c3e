//! Article list, current article, pagination and request status.
//!
//! List, detail and mutation actions surface failures: `error` receives the
//! message and the same error is returned to the caller. Instant search and
//! related articles back transient UI and degrade to empty results instead.
//!
//! List and detail fetches are numbered. When responses resolve out of
//! order, one older than the latest applied response is not written to state
//! (it is still returned to its own caller).

use std::{cell::RefCell, future::Future};

use auto_info_shared::{
    ArticleBrief, ArticleDetail, ArticleListItem, ArticleStatus, ArticleUpdate, NewArticle, Page,
    RelatedArticles,
};

use super::{
    policy::{best_effort, Sequence},
    Listener, Listeners, Observable, Subscription,
};
use crate::{
    api::{ArticleApi, ArticleQuery},
    config::DEFAULT_PAGE_SIZE,
    http::ApiError,
};

/// Paging info mirrored from the latest applied list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of matching articles.
    pub total: u64,
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Number of pages.
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Reads the counters of `page`, defaulting absent (or zero page/size)
    /// values to `0/1/20/0`.
    pub fn from_page<T>(page: &Page<T>) -> Self {
        let defaults = Self::default();
        Self {
            total: page.total.unwrap_or(defaults.total),
            page: page.page.filter(|p| *p > 0).unwrap_or(defaults.page),
            page_size: page.page_size.filter(|s| *s > 0).unwrap_or(defaults.page_size),
            total_pages: page.total_pages.unwrap_or(defaults.total_pages),
        }
    }
}

/// Snapshot of the article store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleState {
    /// 文章列表
    pub articles: Vec<ArticleListItem>,
    /// 当前文章
    pub current_article: Option<ArticleDetail>,
    /// 列表分页信息
    pub pagination: Pagination,
    /// 加载状态
    pub loading: bool,
    /// 错误信息
    pub error: Option<String>,
}

/// Article store.
pub struct ArticleStore {
    api: ArticleApi,
    state: RefCell<ArticleState>,
    list_seq: Sequence,
    detail_seq: Sequence,
    listeners: Listeners,
}

impl ArticleStore {
    /// Empty store backed by `api`.
    pub fn new(api: ArticleApi) -> Self {
        Self {
            api,
            state: RefCell::new(ArticleState::default()),
            list_seq: Sequence::default(),
            detail_seq: Sequence::default(),
            listeners: Listeners::default(),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ArticleState {
        self.state.borrow().clone()
    }

    /// Articles of the current list; the list only ever holds published ones.
    pub fn published_articles(&self) -> Vec<ArticleListItem> {
        self.state.borrow().articles.clone()
    }

    /// Total reported by the latest list response.
    pub fn total_count(&self) -> u64 {
        self.state.borrow().pagination.total
    }

    /// 获取文章列表
    ///
    /// The current page and page size plus `status=published` are sent
    /// unless `query` overrides them. On success `articles` and `pagination`
    /// are replaced wholesale.
    pub async fn fetch_articles(
        &self,
        query: ArticleQuery,
    ) -> Result<Page<ArticleListItem>, ApiError> {
        let base = {
            let state = self.state.borrow();
            ArticleQuery {
                page: Some(state.pagination.page),
                page_size: Some(state.pagination.page_size),
                status: Some(ArticleStatus::Published),
                ..ArticleQuery::default()
            }
        };
        let query = query.or(base);
        let ticket = self.list_seq.issue();

        self.propagate(Some((&self.list_seq, ticket)), self.api.list(&query), |state, page| {
            state.articles = page.items.clone();
            state.pagination = Pagination::from_page(page);
        })
        .await
    }

    /// 获取文章详情
    pub async fn fetch_article(&self, id_or_slug: &str) -> Result<ArticleDetail, ApiError> {
        let ticket = self.detail_seq.issue();
        let call = self.api.detail(id_or_slug);
        self.propagate(Some((&self.detail_seq, ticket)), call, |state, article| {
            state.current_article = Some(article.clone());
        })
        .await
    }

    /// 创建文章；列表不会自动刷新
    pub async fn create_article(&self, data: &NewArticle) -> Result<ArticleDetail, ApiError> {
        self.propagate(None, self.api.create(data), |_, _| {}).await
    }

    /// 更新文章；列表和当前文章不会自动刷新
    pub async fn update_article(
        &self,
        id: u64,
        data: &ArticleUpdate,
    ) -> Result<ArticleDetail, ApiError> {
        self.propagate(None, self.api.update(id, data), |_, _| {}).await
    }

    /// 删除文章；列表不会自动刷新
    pub async fn delete_article(&self, id: u64) -> Result<(), ApiError> {
        self.propagate(None, self.api.delete(id), |_, _| {}).await
    }

    /// Title suggestions; an empty list when the request fails.
    pub async fn instant_search(&self, query: &str, limit: u32) -> Vec<ArticleBrief> {
        best_effort("instant search", self.api.instant_search(query, limit))
            .await
            .unwrap_or_default()
    }

    /// Related articles; both groups empty when the request fails.
    pub async fn fetch_related(&self, article_id: u64) -> RelatedArticles {
        best_effort("fetch related articles", self.api.related(article_id))
            .await
            .unwrap_or_default()
    }

    /// 重置状态；尚未返回的请求结果会被丢弃
    pub fn reset(&self) {
        self.list_seq.expire();
        self.detail_seq.expire();
        self.update(|state| *state = ArticleState::default());
    }

    /// Resets the state and drops every listener.
    pub fn dispose(&self) {
        self.reset();
        self.listeners.clear();
    }

    async fn propagate<T, F>(
        &self,
        sequence: Option<(&Sequence, u64)>,
        call: F,
        apply: impl FnOnce(&mut ArticleState, &T),
    ) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });

        let result = call.await;
        let current = sequence.map_or(true, |(sequence, ticket)| sequence.try_apply(ticket));
        if !current {
            tracing::debug!("discarding stale article response");
        }

        self.update(|state| {
            if current {
                match &result {
                    Ok(value) => apply(state, value),
                    Err(err) => state.error = Some(err.to_string()),
                }
            }
            state.loading = false;
        });
        result
    }

    fn update(&self, mutate: impl FnOnce(&mut ArticleState)) {
        {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
        }
        self.listeners.notify();
    }
}

impl Observable for ArticleStore {
    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use auto_info_shared::NewArticle;
    use serde_json::{json, Value};

    use super::*;
    use crate::{http::Method, testing::MockTransport};

    fn item(id: u64) -> Value {
        json!({"id": id, "title": format!("Article {id}"), "slug": format!("article-{id}")})
    }

    fn detail(id: u64, slug: &str) -> Value {
        json!({"id": id, "title": slug, "slug": slug, "content": "<p>body</p>"})
    }

    fn store_for(transport: &Rc<MockTransport>) -> ArticleStore {
        ArticleStore::new(ArticleApi::new(transport.client()))
    }

    #[tokio::test]
    async fn null_items_produce_an_empty_list() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({"items": null, "total": 0, "page": 1, "page_size": 20, "total_pages": 0}),
        );
        let store = store_for(&transport);

        let page = store.fetch_articles(ArticleQuery::default()).await.expect("list");
        assert!(page.items.is_empty());

        let state = store.snapshot();
        assert!(state.articles.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.pagination, Pagination::default());
    }

    #[tokio::test]
    async fn page_two_response_is_mirrored_into_state() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({
                "items": [item(1), item(2), item(3)],
                "total": 50,
                "page": 2,
                "page_size": 20,
                "total_pages": 3
            }),
        );
        let store = store_for(&transport);

        store.fetch_articles(ArticleQuery::page(2)).await.expect("list");

        let state = store.snapshot();
        assert_eq!(state.articles.len(), 3);
        assert_eq!(
            state.pagination,
            Pagination {
                total: 50,
                page: 2,
                page_size: 20,
                total_pages: 3
            }
        );
        assert_eq!(store.total_count(), 50);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(
            transport.sent_urls(),
            vec!["/api/articles?page=2&page_size=20&status=published".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_counters_fall_back_to_defaults() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({"items": [item(1)], "total": 1, "page": 3, "page_size": 5, "total_pages": 1}),
        );
        transport.reply_json(Method::Get, "/articles", 200, json!({"items": [item(2)]}));
        let store = store_for(&transport);

        store.fetch_articles(ArticleQuery::page(3)).await.expect("first list");
        store.fetch_articles(ArticleQuery::default()).await.expect("second list");

        assert_eq!(store.snapshot().pagination, Pagination::default());
        assert_eq!(store.published_articles()[0].id, 2);
        // The second request reused the page/size applied by the first one.
        assert_eq!(
            transport.sent_urls()[1],
            "/api/articles?page=3&page_size=5&status=published"
        );
    }

    #[tokio::test]
    async fn failed_list_records_error_and_returns_it() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            500,
            json!({"code": 500, "message": "服务器内部错误", "data": null}),
        );
        let store = store_for(&transport);
        let notifications = Rc::new(Cell::new(0));
        let _subscription = {
            let notifications = notifications.clone();
            store.subscribe(Rc::new(move || notifications.set(notifications.get() + 1)))
        };

        let err = store
            .fetch_articles(ArticleQuery::default())
            .await
            .expect_err("500 must fail");

        let state = store.snapshot();
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some(err.to_string().as_str()));
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "服务器内部错误".to_string()
            }
        );
        assert!(state.articles.is_empty());
        assert_eq!(notifications.get(), 2);
    }

    #[tokio::test]
    async fn next_action_clears_previous_error() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "/articles/a", ApiError::Network("Network Error".to_string()));
        transport.reply_data(Method::Get, "/articles/b", detail(2, "b"));
        let store = store_for(&transport);

        assert!(store.fetch_article("a").await.is_err());
        assert_eq!(store.snapshot().error.as_deref(), Some("Network Error"));

        let article = store.fetch_article("b").await.expect("detail");
        let state = store.snapshot();
        assert_eq!(state.error, None);
        assert_eq!(state.current_article, Some(article));
    }

    #[tokio::test]
    async fn create_and_delete_leave_list_untouched() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({"items": [item(1)], "total": 1, "page": 1, "page_size": 20, "total_pages": 1}),
        );
        transport.reply_data(Method::Post, "/articles", detail(2, "fresh"));
        transport.reply_json(
            Method::Delete,
            "/articles/1",
            200,
            json!({"code": 0, "message": "文章删除成功", "data": null}),
        );
        transport.reply_json(
            Method::Put,
            "/articles/2",
            404,
            json!({"code": 404, "message": "文章不存在", "data": null}),
        );
        let store = store_for(&transport);
        store.fetch_articles(ArticleQuery::default()).await.expect("list");
        let before = store.snapshot();

        let created = store
            .create_article(&NewArticle {
                title: "fresh".to_string(),
                content: "<p>body</p>".to_string(),
                ..NewArticle::default()
            })
            .await
            .expect("create");
        assert_eq!(created.slug, "fresh");
        store.delete_article(1).await.expect("delete");
        assert_eq!(store.snapshot(), before);

        let err = store
            .update_article(2, &ArticleUpdate::default())
            .await
            .expect_err("404 must fail");
        assert_eq!(err.status(), Some(404));
        let after = store.snapshot();
        assert_eq!(after.articles, before.articles);
        assert_eq!(after.error.as_deref(), Some("文章不存在"));
    }

    #[tokio::test]
    async fn transient_lookups_never_fail() {
        let transport = MockTransport::new();
        transport.fail(Method::Get, "/articles/search", ApiError::Network("Network Error".to_string()));
        transport.reply_json(
            Method::Get,
            "/articles/7/related",
            503,
            json!({"code": 503, "message": "unavailable", "data": null}),
        );
        let store = store_for(&transport);

        assert!(store.instant_search("ru", 5).await.is_empty());
        let related = store.fetch_related(7).await;
        assert_eq!(related, RelatedArticles::default());

        let state = store.snapshot();
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn transient_lookups_return_server_data() {
        let transport = MockTransport::new();
        transport.reply_data(
            Method::Get,
            "/articles/search",
            json!([{"id": 3, "title": "Rust", "slug": "rust"}]),
        );
        transport.reply_data(
            Method::Get,
            "/articles/3/related",
            json!({"by_tag": [item(4)], "by_category": []}),
        );
        let store = store_for(&transport);

        let hits = store.instant_search("rus", 5).await;
        assert_eq!(hits[0].slug, "rust");
        let related = store.fetch_related(3).await;
        assert_eq!(related.by_tag.len(), 1);
        assert_eq!(transport.sent_urls()[0], "/api/articles/search?q=rus&limit=5");
    }

    #[tokio::test]
    async fn reset_restores_initial_values() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({"items": [item(1)], "total": 9, "page": 2, "page_size": 5, "total_pages": 2}),
        );
        transport.fail(Method::Get, "/articles/x", ApiError::Network("Network Error".to_string()));
        let store = store_for(&transport);
        store.fetch_articles(ArticleQuery::default()).await.expect("list");
        let _ = store.fetch_article("x").await;
        assert_ne!(store.snapshot(), ArticleState::default());

        store.reset();

        assert_eq!(store.snapshot(), ArticleState::default());
        assert_eq!(
            store.snapshot().pagination,
            Pagination {
                total: 0,
                page: 1,
                page_size: 20,
                total_pages: 0
            }
        );
    }

    #[tokio::test]
    async fn stale_detail_response_does_not_overwrite_newer_one() {
        let transport = MockTransport::new();
        transport.reply_data(Method::Get, "/articles/slow", detail(1, "slow"));
        transport.reply_data(Method::Get, "/articles/fast", detail(2, "fast"));
        let release = transport.hold(Method::Get, "/articles/slow");
        let store = store_for(&transport);

        let slow = store.fetch_article("slow");
        let fast = async {
            let result = store.fetch_article("fast").await;
            let _ = release.send(());
            result
        };
        let (slow, fast) = futures::join!(slow, fast);

        assert_eq!(slow.expect("slow still resolves").slug, "slow");
        assert_eq!(fast.expect("fast").slug, "fast");
        let state = store.snapshot();
        assert_eq!(state.current_article.map(|a| a.slug), Some("fast".to_string()));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn response_arriving_after_reset_is_dropped() {
        let transport = MockTransport::new();
        transport.reply_json(
            Method::Get,
            "/articles",
            200,
            json!({"items": [item(1)], "total": 1, "page": 1, "page_size": 20, "total_pages": 1}),
        );
        let release = transport.hold(Method::Get, "/articles");
        let store = store_for(&transport);

        let pending = store.fetch_articles(ArticleQuery::default());
        let reset_then_release = async {
            store.reset();
            let _ = release.send(());
        };
        let (result, ()) = futures::join!(pending, reset_then_release);

        assert_eq!(result.expect("caller still gets the page").items.len(), 1);
        assert!(store.snapshot().articles.is_empty());
    }
}
