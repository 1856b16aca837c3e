use std::{cell::Cell, rc::Rc};

use auto_info_shared::{ArticleDetail, ArticleListItem, MediaItem, RelatedArticles};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        error_banner::ErrorBanner, loading_spinner::LoadingSpinner, raw_html::RawHtml,
    },
    hooks::use_store,
    i18n::{
        current::{article_detail as t, common},
        fill_one,
    },
    router::Route,
    seo::apply_article_seo,
    stores::Stores,
    utils::format_date,
};

#[derive(Properties, PartialEq)]
pub struct ArticleDetailPageProps {
    pub stores: Stores,
    pub slug: String,
}

/// True when `article` is the one addressed by `slug` (slug or numeric id).
fn matches_slug(article: &ArticleDetail, slug: &str) -> bool {
    article.slug == slug || article.id.to_string() == slug
}

/// Ties a spawned load to the effect run that started it. Once the effect is
/// torn down (the slug changed or the page unmounted) nothing the load
/// returns is applied to the page.
#[derive(Clone, Default)]
struct LoadGuard {
    cancelled: Rc<Cell<bool>>,
}

impl LoadGuard {
    fn cancel(&self) {
        self.cancelled.set(true);
    }

    fn admits(&self, article: &ArticleDetail, slug: &str) -> bool {
        !self.cancelled.get() && matches_slug(article, slug)
    }
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailPageProps) -> Html {
    let articles = props.stores.articles.clone();
    use_store(&articles);
    let related = use_state(RelatedArticles::default);

    {
        let articles = articles.clone();
        let related = related.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            related.set(RelatedArticles::default());
            let slug = slug.clone();
            let guard = LoadGuard::default();
            let load = guard.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let Ok(article) = articles.fetch_article(&slug).await else {
                    return;
                };
                if !load.admits(&article, &slug) {
                    return;
                }
                apply_article_seo(&article);
                let found = articles.fetch_related(article.id).await;
                if load.admits(&article, &slug) {
                    related.set(found);
                }
            });
            move || guard.cancel()
        });
    }

    let state = articles.snapshot();
    let article = state.current_article.filter(|article| matches_slug(article, &props.slug));

    let body = match article {
        Some(article) => render_article(&article, &related),
        None if state.loading => html! { <LoadingSpinner /> },
        None if state.error.is_some() => html! {
            <div class="article-missing">
                <p>{ t::NOT_FOUND }</p>
                <Link<Route> to={Route::Home}>{ common::BACK_HOME }</Link<Route>>
            </div>
        },
        None => html! { <LoadingSpinner /> },
    };

    html! {
        <main class="main article-detail-page">
            <div class="container">
                if let Some(message) = state.error.clone() {
                    <ErrorBanner message={message} />
                }
                { body }
            </div>
        </main>
    }
}

fn render_article(article: &ArticleDetail, related: &RelatedArticles) -> Html {
    let date = article.published_at.as_deref().or(article.created_at.as_deref()).map(format_date);

    html! {
        <article class="single">
            <h1 class="single-title">{ &article.title }</h1>
            <div class="post-meta">
                if !article.author_name.is_empty() {
                    <span class="post-meta-item">{ &article.author_name }</span>
                }
                if let Some(date) = date {
                    <span class="post-meta-item">{ format!("{} {date}", t::PUBLISHED_AT) }</span>
                }
                if let Some(category) = article.category.as_ref() {
                    <Link<Route>
                        to={Route::Category { slug: category.slug.clone() }}
                        classes={classes!("post-meta-item", "post-category")}
                    >
                        { &category.name }
                    </Link<Route>>
                }
                <span class="post-meta-item">{ fill_one(common::VIEWS_TEMPLATE, article.views) }</span>
            </div>
            if let Some(cover) = article.cover_image.as_ref() {
                <img class="article-cover" src={cover.clone()} alt={article.title.clone()} />
            }
            <RawHtml html={article.content.clone()} class={classes!("article-content")} />
            if !article.media_items.is_empty() {
                <div class="article-media grid gap-4">
                    { for article.media_items.iter().map(render_media) }
                </div>
            }
            if !article.tags.is_empty() {
                <ul class="post-tags">
                    { for article.tags.iter().map(|tag| html! {
                        <li key={tag.id}>
                            <Link<Route> to={Route::Tag { slug: tag.slug.clone() }} classes={classes!("tag-pill")}>
                                { format!("#{}", tag.name) }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
            }
            if !related.is_empty() {
                <aside class="related-articles">
                    { render_related(t::RELATED_BY_TAG, &related.by_tag) }
                    { render_related(t::RELATED_BY_CATEGORY, &related.by_category) }
                </aside>
            }
        </article>
    }
}

fn render_media(item: &MediaItem) -> Html {
    let media = if item.kind == "video" {
        html! {
            <video controls={true} preload="metadata" src={item.url.clone()} poster={item.thumbnail_url.clone()} />
        }
    } else {
        html! { <img src={item.url.clone()} alt={item.caption.clone().unwrap_or_default()} loading="lazy" /> }
    };

    html! {
        <figure key={item.id} class="article-media-item">
            { media }
            if let Some(caption) = item.caption.as_ref() {
                <figcaption>{ caption }</figcaption>
            }
        </figure>
    }
}

fn render_related(heading: &'static str, items: &[ArticleListItem]) -> Html {
    if items.is_empty() {
        return Html::default();
    }
    html! {
        <section class="related-group">
            <h3>{ heading }</h3>
            <ul>
                { for items.iter().map(|item| html! {
                    <li key={item.id}>
                        <Link<Route> to={Route::ArticleDetail { slug: item.slug.clone() }}>
                            { &item.title }
                        </Link<Route>>
                    </li>
                }) }
            </ul>
        </section>
    }
}
