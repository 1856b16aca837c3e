#![allow(dead_code, reason = "string table shared by optional views")]

pub mod titles {
    pub const HOME: &str = "首页";
    pub const ARTICLE_LIST: &str = "文章库";
    pub const ARTICLE_DETAIL: &str = "文章详情";
    pub const CATEGORY: &str = "分类";
    pub const TAG: &str = "标签";
    pub const SEARCH: &str = "搜索";
    pub const ABOUT: &str = "关于";
    pub const NOT_FOUND: &str = "404";
}

pub mod common {
    pub const LOADING: &str = "加载中...";
    pub const EMPTY: &str = "暂无文章";
    pub const VIEWS_TEMPLATE: &str = "{} 次阅读";
    pub const BACK_HOME: &str = "返回首页";
    pub const RETRY: &str = "重试";
}

pub mod header {
    pub const BRAND_NAME: &str = "AI智能资讯";
    pub const NAV_HOME: &str = "首页";
    pub const NAV_ARTICLES: &str = "文章库";
    pub const NAV_ABOUT: &str = "关于";
    pub const NAV_MAIN_ARIA: &str = "主导航";
    pub const SEARCH_PLACEHOLDER: &str = "搜索文章...";
    pub const SEARCH_ARIA: &str = "搜索";
    pub const OPEN_MENU_ARIA: &str = "打开菜单";
    pub const CLOSE_MENU_ARIA: &str = "关闭菜单";
    pub const SIDEBAR_CATEGORIES: &str = "分类";
    pub const SIDEBAR_HOT_TAGS: &str = "热门标签";
}

pub mod theme_toggle {
    pub const SWITCH_TO_LIGHT: &str = "切换到亮色模式";
    pub const SWITCH_TO_DARK: &str = "切换到暗色模式";
}

pub mod pagination {
    pub const ARIA_NAV: &str = "分页";
    pub const ARIA_PREV: &str = "上一页";
    pub const ARIA_NEXT: &str = "下一页";
    pub const ARIA_GOTO_PAGE_TEMPLATE: &str = "跳转到第 {} 页";
    pub const SUMMARY_TEMPLATE: &str = "共 {} 篇，第 {} 页";
}

pub mod error_banner {
    pub const TITLE: &str = "发生错误";
    pub const CLOSE_ARIA: &str = "关闭错误提示";
}

pub mod home {
    pub const LATEST: &str = "最新文章";
    pub const RECOMMENDED: &str = "推荐阅读";
    pub const HOT_TAGS: &str = "热门标签";
    pub const STATS_ARTICLES: &str = "文章";
    pub const STATS_CATEGORIES: &str = "分类";
    pub const STATS_TAGS: &str = "标签";
    pub const STATS_VIEWS: &str = "阅读";
    pub const VIEW_ALL: &str = "查看全部";
}

pub mod article_detail {
    pub const NOT_FOUND: &str = "文章不存在或已被删除";
    pub const RELATED_BY_TAG: &str = "相同标签";
    pub const RELATED_BY_CATEGORY: &str = "同类文章";
    pub const SOURCE: &str = "原文链接";
    pub const PUBLISHED_AT: &str = "发布于";
}

pub mod taxonomy {
    pub const CATEGORY_HEADING_TEMPLATE: &str = "分类：{}";
    pub const TAG_HEADING_TEMPLATE: &str = "标签：{}";
}

pub mod search {
    pub const PLACEHOLDER: &str = "输入关键词搜索";
    pub const SUBMIT: &str = "搜索";
    pub const SUGGESTIONS: &str = "快速结果";
    pub const RESULT_TEMPLATE: &str = "找到 {} 篇与“{}”相关的文章";
    pub const NO_RESULTS: &str = "没有找到相关文章";
    pub const PROMPT: &str = "输入关键词开始搜索";
}

pub mod about {
    pub const HEADING: &str = "关于 AI智能资讯";
    pub const BODY: &str = "AI智能资讯自动收集、整理并发布人工智能领域的新闻与文章，按分类和标签归档，支持全文搜索。";
}

pub mod not_found {
    pub const HEADING: &str = "404";
    pub const BODY: &str = "页面不存在";
}
