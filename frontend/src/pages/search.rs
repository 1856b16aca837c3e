use auto_info_shared::{ArticleBrief, SearchResults};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::SearchParams,
    components::{
        article_card::ArticleGrid, error_banner::ErrorBanner, header::SearchQuery,
        loading_spinner::LoadingSpinner, pagination::PaginationBar,
    },
    config::INSTANT_SEARCH_LIMIT,
    i18n::{current::search as t, fill_two},
    router::Route,
    stores::{Pagination, Stores},
};

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub stores: Stores,
}

fn keyword_from(location: Option<&Location>) -> String {
    location
        .and_then(|loc| loc.query::<SearchQuery>().ok())
        .and_then(|query| query.q)
        .map(|q| q.trim().to_string())
        .unwrap_or_default()
}

fn pagination_of(results: &SearchResults) -> Pagination {
    Pagination {
        total: results.total,
        page: results.page,
        page_size: results.page_size,
        total_pages: results.total_pages,
    }
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    let Stores {
        app,
        articles,
        api,
    } = props.stores.clone();
    let location = use_location();
    let navigator = use_navigator();
    let keyword = keyword_from(location.as_ref());

    let input = use_state(|| keyword.clone());
    let suggestions = use_state(Vec::<ArticleBrief>::new);
    let suggestion_seq = use_mut_ref(|| 0u64);
    let results = use_state(|| None::<SearchResults>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);
    let page = use_state(|| 1u32);
    let search_seq = use_mut_ref(|| 0u64);

    {
        let input = input.clone();
        let page = page.clone();
        let app = app.clone();
        use_effect_with(keyword.clone(), move |keyword| {
            input.set(keyword.clone());
            app.set_search_keyword(keyword.clone());
            page.set(1);
            || ()
        });
    }

    {
        let results = results.clone();
        let loading = loading.clone();
        let error = error.clone();
        let search = api.search.clone();
        let search_seq = search_seq.clone();
        use_effect_with((keyword.clone(), *page), move |(keyword, page)| {
            let ticket = {
                let mut seq = search_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            if keyword.is_empty() {
                results.set(None);
                error.set(None);
                loading.set(false);
            } else {
                let keyword = keyword.clone();
                let params = SearchParams {
                    page: Some(*page),
                    page_size: None,
                };
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = search.search(&keyword, &params).await;
                    if *search_seq.borrow() != ticket {
                        return;
                    }
                    match outcome {
                        Ok(found) => {
                            results.set(Some(found));
                            error.set(None);
                        },
                        Err(err) => error.set(Some(err.to_string())),
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let on_input = {
        let input = input.clone();
        let suggestions = suggestions.clone();
        let suggestion_seq = suggestion_seq.clone();
        let articles = articles.clone();
        Callback::from(move |event: InputEvent| {
            let Some(target) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let value = target.value();
            input.set(value.clone());

            let ticket = {
                let mut seq = suggestion_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            let query = value.trim().to_string();
            if query.is_empty() {
                suggestions.set(Vec::new());
                return;
            }
            let suggestions = suggestions.clone();
            let suggestion_seq = suggestion_seq.clone();
            let articles = articles.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let found = articles.instant_search(&query, INSTANT_SEARCH_LIMIT).await;
                if *suggestion_seq.borrow() == ticket {
                    suggestions.set(found);
                }
            });
        })
    };

    let on_submit = {
        let input = input.clone();
        let suggestions = suggestions.clone();
        let suggestion_seq = suggestion_seq.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let keyword = input.trim().to_string();
            if keyword.is_empty() {
                return;
            }
            *suggestion_seq.borrow_mut() += 1;
            suggestions.set(Vec::new());
            if let Some(navigator) = navigator.as_ref() {
                let query = SearchQuery {
                    q: Some(keyword),
                };
                if let Err(err) = navigator.replace_with_query(&Route::Search, &query) {
                    tracing::warn!("search navigation failed: {err}");
                }
            }
        })
    };

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let body = match (*results).as_ref() {
        _ if *loading => html! { <LoadingSpinner /> },
        None => html! { <p class="search-prompt">{ t::PROMPT }</p> },
        Some(found) if found.items.is_empty() => html! { <p class="empty-state">{ t::NO_RESULTS }</p> },
        Some(found) => html! {
            <>
                <p class="search-summary">{ fill_two(t::RESULT_TEMPLATE, found.total, &keyword) }</p>
                <ArticleGrid articles={found.items.clone()} />
                <PaginationBar pagination={pagination_of(found)} {on_page_change} />
            </>
        },
    };

    html! {
        <main class="main search-page">
            <div class="container">
                <form class="search-form flex gap-2" role="search" onsubmit={on_submit}>
                    <input
                        type="search"
                        class="search-input flex-1"
                        placeholder={t::PLACEHOLDER}
                        value={(*input).clone()}
                        oninput={on_input}
                    />
                    <button type="submit" class="btn-fluent-primary">{ t::SUBMIT }</button>
                </form>
                if !suggestions.is_empty() {
                    <div class="search-suggestions">
                        <p class="suggestions-title">{ t::SUGGESTIONS }</p>
                        <ul>
                            { for suggestions.iter().map(|brief| html! {
                                <li key={brief.id}>
                                    <Link<Route> to={Route::ArticleDetail { slug: brief.slug.clone() }}>
                                        { &brief.title }
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
                if let Some(message) = (*error).clone() {
                    <ErrorBanner message={message} />
                }
                { body }
            </div>
        </main>
    }
}
