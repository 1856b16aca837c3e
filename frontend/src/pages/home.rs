use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api::ArticleQuery,
    components::{
        article_card::ArticleGrid, error_banner::ErrorBanner, loading_spinner::LoadingSpinner,
    },
    hooks::use_store,
    i18n::current::home as t,
    router::Route,
    stores::Stores,
};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub stores: Stores,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let Stores {
        app,
        articles,
        ..
    } = props.stores.clone();
    use_store(&app);
    use_store(&articles);

    {
        let app = app.clone();
        let articles = articles.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                app.fetch_stats().await;
            });
            wasm_bindgen_futures::spawn_local(async move {
                // Failures are recorded in the store and shown below.
                let _ = articles.fetch_articles(ArticleQuery::page(1)).await;
            });
            || ()
        });
    }

    let app_state = app.snapshot();
    let list_state = articles.snapshot();
    let stats = app_state.stats.clone().unwrap_or_default();

    let stat_items = [
        (t::STATS_ARTICLES, stats.article_count, "fa-file-lines"),
        (t::STATS_CATEGORIES, stats.category_count, "fa-folder-open"),
        (t::STATS_TAGS, stats.tag_count, "fa-tag"),
        (t::STATS_VIEWS, stats.total_views, "fa-eye"),
    ];

    html! {
        <main class="main home-page">
            <div class="container">
                <section class="stats-grid grid grid-cols-2 md:grid-cols-4 gap-4">
                    { for stat_items.iter().map(|(label, value, icon)| html! {
                        <div class="stats-card">
                            <i class={classes!("fas", *icon)} aria-hidden="true"></i>
                            <span class="stats-value">{ *value }</span>
                            <span class="stats-label">{ *label }</span>
                        </div>
                    }) }
                </section>

                if !stats.latest_articles.is_empty() {
                    <section class="home-section">
                        <h2 class="section-title">{ t::LATEST }</h2>
                        <ul class="latest-list">
                            { for stats.latest_articles.iter().map(|article| html! {
                                <li key={article.id}>
                                    <Link<Route> to={Route::ArticleDetail { slug: article.slug.clone() }}>
                                        { &article.title }
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </section>
                }

                if !app_state.hot_tags.is_empty() {
                    <section class="home-section">
                        <h2 class="section-title">{ t::HOT_TAGS }</h2>
                        <div class="flex flex-wrap gap-2">
                            { for app_state.hot_tags.iter().map(|tag| html! {
                                <Link<Route>
                                    key={tag.id}
                                    to={Route::Tag { slug: tag.slug.clone() }}
                                    classes={classes!("tag-pill")}
                                >
                                    { format!("#{}", tag.name) }
                                </Link<Route>>
                            }) }
                        </div>
                    </section>
                }

                <section class="home-section">
                    <div class="flex items-center justify-between">
                        <h2 class="section-title">{ t::RECOMMENDED }</h2>
                        <Link<Route> to={Route::ArticleList} classes={classes!("section-link")}>
                            { t::VIEW_ALL }
                        </Link<Route>>
                    </div>
                    if let Some(message) = list_state.error.clone() {
                        <ErrorBanner message={message} />
                    }
                    if list_state.loading && list_state.articles.is_empty() {
                        <LoadingSpinner />
                    } else {
                        <ArticleGrid articles={list_state.articles} />
                    }
                </section>
            </div>
        </main>
    }
}
