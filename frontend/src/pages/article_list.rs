use yew::prelude::*;

use crate::{
    api::ArticleQuery,
    components::{
        article_card::ArticleGrid, error_banner::ErrorBanner, loading_spinner::LoadingSpinner,
        pagination::PaginationBar,
    },
    hooks::{scroll_window_to_top, use_store},
    i18n::current::titles,
    stores::{ArticleStore, Stores},
};

#[derive(Properties, PartialEq)]
pub struct ArticleListPageProps {
    pub stores: Stores,
}

fn load_page(store: &std::rc::Rc<ArticleStore>, query: ArticleQuery) {
    let store = store.clone();
    wasm_bindgen_futures::spawn_local(async move {
        // The store records the error for the banner.
        let _ = store.fetch_articles(query).await;
    });
}

#[function_component(ArticleListPage)]
pub fn article_list_page(props: &ArticleListPageProps) -> Html {
    let articles = props.stores.articles.clone();
    use_store(&articles);

    {
        let articles = articles.clone();
        use_effect_with((), move |_| {
            load_page(&articles, ArticleQuery::page(1));
            || ()
        });
    }

    let on_page_change = {
        let articles = articles.clone();
        Callback::from(move |page: u32| {
            load_page(&articles, ArticleQuery::page(page));
            scroll_window_to_top();
        })
    };

    let state = articles.snapshot();

    html! {
        <main class="main article-list-page">
            <div class="container">
                <h1 class="single-title">{ titles::ARTICLE_LIST }</h1>
                if let Some(message) = state.error.clone() {
                    <ErrorBanner message={message} />
                }
                if state.loading && state.articles.is_empty() {
                    <LoadingSpinner />
                } else {
                    <ArticleGrid articles={state.articles.clone()} />
                }
                <PaginationBar pagination={state.pagination} {on_page_change} />
            </div>
        </main>
    }
}
