use serde::{Deserialize, Serialize};
use web_sys::HtmlInputElement;
use yew::{events::InputEvent, prelude::*};
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    hooks::use_store,
    i18n::current::header as t,
    router::Route,
    stores::Stores,
};

/// `?q=` of the search page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub stores: Stores,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let app = props.stores.app.clone();
    use_store(&app);
    let state = app.snapshot();
    let menu = app.category_menu();
    let navigator = use_navigator();

    let toggle_sidebar = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.toggle_sidebar())
    };

    let close_sidebar = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| app.close_sidebar())
    };

    let on_search_input = {
        let app = app.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                app.set_search_keyword(target.value());
            }
        })
    };

    let on_search_submit = {
        let app = app.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let keyword = app.snapshot().search_keyword.trim().to_string();
            if keyword.is_empty() {
                return;
            }
            if let Some(navigator) = navigator.as_ref() {
                let query = SearchQuery {
                    q: Some(keyword),
                };
                if let Err(err) = navigator.push_with_query(&Route::Search, &query) {
                    tracing::warn!("search navigation failed: {err}");
                }
            }
            app.close_sidebar();
        })
    };

    let nav_items = [
        (t::NAV_HOME, Route::Home),
        (t::NAV_ARTICLES, Route::ArticleList),
        (t::NAV_ABOUT, Route::About),
    ];

    let sidebar_classes = classes!(
        "sidebar",
        "fixed",
        "inset-y-0",
        "left-0",
        "z-[120]",
        "w-72",
        "p-6",
        "overflow-y-auto",
        "bg-[var(--surface)]",
        "shadow-[var(--shadow-16)]",
        "transition-transform",
        "duration-300",
        if state.sidebar_open { "translate-x-0" } else { "-translate-x-full" }
    );

    html! {
        <>
            <header class="site-header flex items-center gap-4 px-4 py-3 border-b border-[var(--border)]">
                <button
                    type="button"
                    class="btn-fluent-icon md:hidden"
                    aria-label={if state.sidebar_open { t::CLOSE_MENU_ARIA } else { t::OPEN_MENU_ARIA }}
                    aria-expanded={state.sidebar_open.to_string()}
                    onclick={toggle_sidebar}
                >
                    <i class="fas fa-bars" aria-hidden="true"></i>
                </button>
                <Link<Route> to={Route::Home} classes={classes!("brand", "font-bold", "text-lg")}>
                    { t::BRAND_NAME }
                </Link<Route>>
                <nav class="hidden md:flex items-center gap-4" aria-label={t::NAV_MAIN_ARIA}>
                    { for nav_items.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()} classes={classes!("nav-link")}>{ *label }</Link<Route>>
                    }) }
                    { for menu.iter().map(|item| html! {
                        <Link<Route>
                            key={item.id}
                            to={Route::Category { slug: item.slug.clone() }}
                            classes={classes!("nav-link", "nav-category")}
                        >
                            if let Some(icon) = item.icon.as_ref() {
                                <i class={classes!("fas", format!("fa-{icon}"))} aria-hidden="true"></i>
                            }
                            { &item.name }
                        </Link<Route>>
                    }) }
                </nav>
                <form class="ml-auto flex items-center" role="search" onsubmit={on_search_submit}>
                    <input
                        type="search"
                        class="search-input"
                        placeholder={t::SEARCH_PLACEHOLDER}
                        aria-label={t::SEARCH_ARIA}
                        value={state.search_keyword.clone()}
                        oninput={on_search_input}
                    />
                </form>
                <ThemeToggle store={app.clone()} />
            </header>
            <aside class={sidebar_classes} aria-hidden={(!state.sidebar_open).to_string()}>
                <nav class="flex flex-col gap-3" onclick={close_sidebar.clone()}>
                    { for nav_items.iter().map(|(label, route)| html! {
                        <Link<Route> to={route.clone()} classes={classes!("nav-link")}>{ *label }</Link<Route>>
                    }) }
                    <h4 class="sidebar-heading">{ t::SIDEBAR_CATEGORIES }</h4>
                    { for menu.iter().map(|item| html! {
                        <Link<Route>
                            key={item.id}
                            to={Route::Category { slug: item.slug.clone() }}
                            classes={classes!("nav-link")}
                        >
                            { &item.name }
                        </Link<Route>>
                    }) }
                    <h4 class="sidebar-heading">{ t::SIDEBAR_HOT_TAGS }</h4>
                    <div class="flex flex-wrap gap-2">
                        { for state.hot_tags.iter().map(|tag| html! {
                            <Link<Route>
                                key={tag.id}
                                to={Route::Tag { slug: tag.slug.clone() }}
                                classes={classes!("tag-pill")}
                            >
                                { format!("#{}", tag.name) }
                                if let Some(count) = tag.count {
                                    <span class="tag-count">{ count }</span>
                                }
                            </Link<Route>>
                        }) }
                    </div>
                </nav>
            </aside>
            if state.sidebar_open {
                <div class="sidebar-backdrop fixed inset-0 z-[110] bg-black/40" onclick={close_sidebar}></div>
            }
        </>
    }
}
