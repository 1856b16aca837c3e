use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::header::Header,
    config::{DEFAULT_PAGE_TITLE, SITE_NAME},
    hooks::use_route_effects,
    i18n::current::titles as t,
    pages,
    stores::Stores,
};

/// Static path-to-view table. Unmatched paths resolve to [`Route::NotFound`].
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Paginated article library.
    #[at("/articles")]
    ArticleList,
    /// One article by slug (or id).
    #[at("/article/:slug")]
    ArticleDetail {
        /// Article slug or numeric id.
        slug: String,
    },
    /// Articles of one category.
    #[at("/category/:slug")]
    Category {
        /// Category slug.
        slug: String,
    },
    /// Articles with one tag.
    #[at("/tag/:slug")]
    Tag {
        /// Tag slug.
        slug: String,
    },
    /// Full-text search.
    #[at("/search")]
    Search,
    /// About the site.
    #[at("/about")]
    About,
    /// Catch-all.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Page title shown before the site name.
    pub fn title(&self) -> Option<&'static str> {
        let title = match self {
            Route::Home => t::HOME,
            Route::ArticleList => t::ARTICLE_LIST,
            Route::ArticleDetail {
                ..
            } => t::ARTICLE_DETAIL,
            Route::Category {
                ..
            } => t::CATEGORY,
            Route::Tag {
                ..
            } => t::TAG,
            Route::Search => t::SEARCH,
            Route::About => t::ABOUT,
            Route::NotFound => t::NOT_FOUND,
        };
        Some(title)
    }
}

/// Route for `path`; anything the table does not match is `NotFound`.
pub fn resolve(path: &str) -> Route {
    Route::recognize(path).unwrap_or(Route::NotFound)
}

/// `"{page title or default} - {site name}"`.
pub fn document_title(route: Option<&Route>) -> String {
    let page_title = route.and_then(Route::title).unwrap_or(DEFAULT_PAGE_TITLE);
    format!("{page_title} - {SITE_NAME}")
}

fn switch(route: Route, stores: &Stores) -> Html {
    let stores = stores.clone();
    match route {
        Route::Home => html! { <pages::home::HomePage {stores} /> },
        Route::ArticleList => html! { <pages::article_list::ArticleListPage {stores} /> },
        Route::ArticleDetail {
            slug,
        } => {
            html! { <pages::article_detail::ArticleDetailPage {stores} {slug} /> }
        },
        Route::Category {
            slug,
        } => {
            html! {
                <pages::taxonomy::TaxonomyPage {stores} kind={pages::taxonomy::TaxonomyKind::Category} {slug} />
            }
        },
        Route::Tag {
            slug,
        } => {
            html! {
                <pages::taxonomy::TaxonomyPage {stores} kind={pages::taxonomy::TaxonomyKind::Tag} {slug} />
            }
        },
        Route::Search => html! { <pages::search::SearchPage {stores} /> },
        Route::About => html! { <pages::about::AboutPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(RouteEffects)]
fn route_effects() -> Html {
    use_route_effects();
    Html::default()
}

/// Props of [`AppRouter`].
#[derive(Properties, PartialEq)]
pub struct AppRouterProps {
    /// Stores handed to every page.
    pub stores: Stores,
}

/// Browser router with the site chrome around the matched page.
#[function_component(AppRouter)]
pub fn app_router(props: &AppRouterProps) -> Html {
    let render = {
        let stores = props.stores.clone();
        Callback::from(move |route: Route| switch(route, &stores))
    };

    html! {
        <BrowserRouter>
            <RouteEffects />
            <div class="app-shell">
                <Header stores={props.stores.clone()} />
                <div class="app-main">
                    <Switch<Route> {render} />
                </div>
            </div>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_path_resolves_to_not_found_with_404_title() {
        let route = resolve("/xyz");
        assert_eq!(route, Route::NotFound);
        assert_eq!(document_title(Some(&route)), "404 - AI智能资讯");
    }

    #[test]
    fn dynamic_segments_are_captured() {
        assert_eq!(
            resolve("/article/hello-rust"),
            Route::ArticleDetail {
                slug: "hello-rust".to_string()
            }
        );
        assert_eq!(
            resolve("/tag/wasm"),
            Route::Tag {
                slug: "wasm".to_string()
            }
        );
        assert_eq!(resolve("/articles"), Route::ArticleList);
    }

    #[test]
    fn titles_follow_route_table() {
        assert_eq!(document_title(Some(&Route::Home)), "首页 - AI智能资讯");
        assert_eq!(
            document_title(Some(&Route::Category {
                slug: "ai".to_string()
            })),
            "分类 - AI智能资讯"
        );
        assert_eq!(document_title(None), "Auto Info - AI智能资讯");
    }
}
