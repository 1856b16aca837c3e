use auto_info_shared::ArticleListItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::{current::common as t, fill_one},
    router::Route,
    utils::format_date,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleListItem,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::ArticleDetail {
        slug: article.slug.clone(),
    };
    let date = article.published_at.as_deref().or(article.created_at.as_deref()).map(format_date);

    html! {
        <article class="article-card">
            {
                if let Some(image) = article.cover_image.as_ref() {
                    html! {
                        <Link<Route> to={detail_route.clone()} classes={classes!("featured-image")}>
                            <img src={image.clone()} alt={article.title.clone()} loading="lazy" />
                        </Link<Route>>
                    }
                } else {
                    html! {}
                }
            }
            <h3 class="article-title">
                <Link<Route> to={detail_route.clone()} classes={classes!("article-title-link")}>
                    { &article.title }
                </Link<Route>>
            </h3>
            <div class="post-meta">
                if !article.author_name.is_empty() {
                    <span class="post-meta-item">
                        <i class="fas fa-user-circle" aria-hidden="true"></i>
                        { &article.author_name }
                    </span>
                }
                if let Some(date) = date {
                    <span class="post-meta-item">
                        <i class="far fa-calendar-alt" aria-hidden="true"></i>
                        { date }
                    </span>
                }
                if let Some(category) = article.category.as_ref() {
                    <Link<Route>
                        to={Route::Category { slug: category.slug.clone() }}
                        classes={classes!("post-meta-item", "post-category")}
                    >
                        <i class="far fa-folder" aria-hidden="true"></i>
                        { &category.name }
                    </Link<Route>>
                }
                <span class="post-meta-item">
                    <i class="far fa-eye" aria-hidden="true"></i>
                    { fill_one(t::VIEWS_TEMPLATE, article.views) }
                </span>
            </div>
            if let Some(summary) = article.summary.as_ref() {
                <p class="article-excerpt">{ summary }</p>
            }
            if !article.tags.is_empty() {
                <ul class="post-tags">
                    { for article.tags.iter().map(|tag| html! {
                        <li key={tag.id}>
                            <Link<Route>
                                to={Route::Tag { slug: tag.slug.clone() }}
                                classes={classes!("tag-pill")}
                            >
                                { format!("#{}", tag.name) }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleGridProps {
    pub articles: Vec<ArticleListItem>,
}

#[function_component(ArticleGrid)]
pub fn article_grid(props: &ArticleGridProps) -> Html {
    if props.articles.is_empty() {
        return html! { <p class="empty-state">{ t::EMPTY }</p> };
    }

    html! {
        <div class="article-grid">
            { for props.articles.iter().map(|article| html! {
                <ArticleCard key={article.id} article={article.clone()} />
            }) }
        </div>
    }
}
