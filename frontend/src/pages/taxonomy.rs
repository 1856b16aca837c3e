use yew::prelude::*;

use crate::{
    api::ArticleQuery,
    components::{
        article_card::ArticleGrid, error_banner::ErrorBanner, loading_spinner::LoadingSpinner,
        pagination::PaginationBar,
    },
    hooks::{scroll_window_to_top, use_store},
    i18n::{current::taxonomy as t, fill_one},
    stores::{AppState, Stores},
};

/// Which filter a taxonomy page applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxonomyKind {
    Category,
    Tag,
}

impl TaxonomyKind {
    fn query(self, page: u32, slug: &str) -> ArticleQuery {
        let query = ArticleQuery::page(page);
        match self {
            TaxonomyKind::Category => query.with_category(slug),
            TaxonomyKind::Tag => query.with_tag(slug),
        }
    }

    /// Display name for `slug`, if the app store has loaded it.
    fn display_name(self, state: &AppState, slug: &str) -> Option<String> {
        match self {
            TaxonomyKind::Category => {
                state.categories.iter().find(|c| c.slug == slug).map(|c| c.name.clone())
            },
            TaxonomyKind::Tag => state.hot_tags.iter().find(|tag| tag.slug == slug).map(|tag| tag.name.clone()),
        }
    }

    fn heading_template(self) -> &'static str {
        match self {
            TaxonomyKind::Category => t::CATEGORY_HEADING_TEMPLATE,
            TaxonomyKind::Tag => t::TAG_HEADING_TEMPLATE,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TaxonomyPageProps {
    pub stores: Stores,
    pub kind: TaxonomyKind,
    pub slug: String,
}

#[function_component(TaxonomyPage)]
pub fn taxonomy_page(props: &TaxonomyPageProps) -> Html {
    let Stores {
        app,
        articles,
        ..
    } = props.stores.clone();
    use_store(&app);
    use_store(&articles);
    let kind = props.kind;

    {
        let articles = articles.clone();
        use_effect_with((kind, props.slug.clone()), move |(kind, slug)| {
            let query = kind.query(1, slug);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = articles.fetch_articles(query).await;
            });
            || ()
        });
    }

    let on_page_change = {
        let articles = articles.clone();
        let slug = props.slug.clone();
        Callback::from(move |page: u32| {
            let articles = articles.clone();
            let query = kind.query(page, &slug);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = articles.fetch_articles(query).await;
            });
            scroll_window_to_top();
        })
    };

    let name = kind.display_name(&app.snapshot(), &props.slug).unwrap_or_else(|| props.slug.clone());
    let state = articles.snapshot();

    html! {
        <main class="main taxonomy-page">
            <div class="container">
                <h1 class="single-title">{ fill_one(kind.heading_template(), name) }</h1>
                if let Some(message) = state.error.clone() {
                    <ErrorBanner message={message} />
                }
                if state.loading {
                    <LoadingSpinner />
                } else {
                    <ArticleGrid articles={state.articles.clone()} />
                }
                <PaginationBar pagination={state.pagination} {on_page_change} />
            </div>
        </main>
    }
}
