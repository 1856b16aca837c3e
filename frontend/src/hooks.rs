use std::rc::Rc;

use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_route;

use crate::{router::Route, seo::apply_route_seo, stores::Observable};

/// Re-render the calling component whenever `store` changes.
///
/// The subscription lives as long as the component; stores are built once
/// at the root, so the first store handed in is the one observed.
///
/// ```ignore
/// #[function_component(Sidebar)]
/// fn sidebar(props: &SidebarProps) -> Html {
///     use_store(&props.stores.app);
///     let state = props.stores.app.snapshot();
///     html! { <aside>{ state.categories.len() }</aside> }
/// }
/// ```
#[hook]
pub fn use_store<S>(store: &Rc<S>)
where
    S: Observable + 'static,
{
    let update = use_force_update();
    let store = store.clone();

    use_effect_with((), move |_| {
        let subscription = store.subscribe(Rc::new(move || update.force_update()));
        move || drop(subscription)
    });
}

/// After every navigation: set the document title from the route table and
/// jump to the top of the page.
#[hook]
pub fn use_route_effects() {
    let route = use_route::<Route>();

    use_effect_with(route, move |route| {
        apply_route_seo(route.as_ref());
        scroll_window_to_top();
        || ()
    });
}

/// Jumps to the top of the page without animation.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
