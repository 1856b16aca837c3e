//! Site-wide state: categories, hot tags, stats, sidebar, search keyword and
//! theme.
//!
//! Loading here is best-effort: a failed request is logged and leaves the
//! previous state in place so page rendering never waits on it.

use std::{cell::RefCell, rc::Rc};

use auto_info_shared::{Category, SiteStats, Tag};

use super::{policy::best_effort, Listener, Listeners, Observable, Subscription};
use crate::{
    api::{Api, CategoryApi, StatsApi, TagApi},
    theme::{Theme, ThemeHost},
};

/// Snapshot of the application store.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// 分类列表
    pub categories: Vec<Category>,
    /// 热门标签
    pub hot_tags: Vec<Tag>,
    /// 网站统计
    pub stats: Option<SiteStats>,
    /// 侧边栏是否展开
    pub sidebar_open: bool,
    /// 搜索关键词
    pub search_keyword: String,
    /// 暗色主题
    pub is_dark: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            hot_tags: Vec::new(),
            stats: None,
            sidebar_open: false,
            search_keyword: String::new(),
            is_dark: true,
        }
    }
}

/// Navigation entry derived from a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMenuItem {
    /// Category id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Optional icon name.
    pub icon: Option<String>,
}

/// Application-wide store.
pub struct AppStore {
    categories: CategoryApi,
    tags: TagApi,
    stats: StatsApi,
    theme: Rc<dyn ThemeHost>,
    state: RefCell<AppState>,
    listeners: Listeners,
}

impl AppStore {
    /// Store backed by `api`; themes go through `theme`.
    pub fn new(api: &Api, theme: Rc<dyn ThemeHost>) -> Self {
        Self {
            categories: api.categories.clone(),
            tags: api.tags.clone(),
            stats: api.stats.clone(),
            theme,
            state: RefCell::new(AppState::default()),
            listeners: Listeners::default(),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Categories projected for the navigation menu.
    pub fn category_menu(&self) -> Vec<CategoryMenuItem> {
        self.state
            .borrow()
            .categories
            .iter()
            .map(|c| CategoryMenuItem {
                id: c.id,
                name: c.name.clone(),
                slug: c.slug.clone(),
                icon: c.icon.clone(),
            })
            .collect()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.state.borrow().is_dark)
    }

    /// 获取分类列表；失败时保留原有数据并返回 `None`
    pub async fn fetch_categories(&self) -> Option<Vec<Category>> {
        let categories = best_effort("fetch categories", self.categories.list()).await?;
        self.update(|state| state.categories = categories.clone());
        Some(categories)
    }

    /// 获取热门标签；失败时保留原有数据并返回 `None`
    pub async fn fetch_hot_tags(&self, limit: u32) -> Option<Vec<Tag>> {
        let tags = best_effort("fetch hot tags", self.tags.popular(limit)).await?;
        self.update(|state| state.hot_tags = tags.clone());
        Some(tags)
    }

    /// 获取网站统计；失败时保留原有数据并返回 `None`
    pub async fn fetch_stats(&self) -> Option<SiteStats> {
        let stats = best_effort("fetch stats", self.stats.stats()).await?;
        self.update(|state| state.stats = Some(stats.clone()));
        Some(stats)
    }

    /// Opens a closed sidebar and closes an open one.
    pub fn toggle_sidebar(&self) {
        self.update(|state| state.sidebar_open = !state.sidebar_open);
    }

    /// Closes the sidebar.
    pub fn close_sidebar(&self) {
        self.update(|state| state.sidebar_open = false);
    }

    /// Remembers the keyword typed into the search box.
    pub fn set_search_keyword(&self, keyword: impl Into<String>) {
        let keyword = keyword.into();
        self.update(|state| state.search_keyword = keyword);
    }

    /// Picks the persisted theme, or the OS preference when none was saved,
    /// and applies it.
    pub fn init_theme(&self) -> Theme {
        let theme = self
            .theme
            .stored()
            .unwrap_or_else(|| Theme::from_dark(self.theme.prefers_dark()));
        self.update(|state| state.is_dark = theme.is_dark());
        self.theme.apply(theme);
        theme
    }

    /// Flips the theme, applies it and persists it.
    pub fn toggle_theme(&self) -> Theme {
        let theme = self.theme().toggled();
        self.update(|state| state.is_dark = theme.is_dark());
        self.theme.apply(theme);
        self.theme.store(theme);
        theme
    }

    /// Drops every listener.
    pub fn dispose(&self) {
        self.listeners.clear();
    }

    fn update(&self, mutate: impl FnOnce(&mut AppState)) {
        {
            let mut state = self.state.borrow_mut();
            mutate(&mut state);
        }
        self.listeners.notify();
    }
}

impl Observable for AppStore {
    fn subscribe(&self, listener: Listener) -> Subscription {
        self.listeners.subscribe(listener)
    }
}
