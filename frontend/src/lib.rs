//! Auto Info web client: a Yew single-page app over the blog's REST API.
//!
//! Layers, bottom-up: [`http`] wraps the transport and the response
//! envelope, [`api`] binds one module per resource, [`stores`] hold the
//! observable state, and [`router`] maps paths to pages.

pub mod api;
mod components;
pub mod config;
pub mod hooks;
pub mod http;
mod i18n;
mod pages;
pub mod router;
mod seo;
pub mod stores;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod transport;
mod utils;

use yew::prelude::*;

use crate::{router::AppRouter, stores::Stores};

/// Props of [`App`].
#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Stores shared by every page for the lifetime of the app.
    pub stores: Stores,
}

/// Root component. Loads the navigation data once and tears the stores
/// down on unmount.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    {
        let stores = props.stores.clone();
        use_effect_with((), move |_| {
            let app = stores.app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                app.fetch_categories().await;
                app.fetch_hot_tags(config::HOT_TAG_LIMIT).await;
            });
            move || stores.dispose()
        });
    }

    html! { <AppRouter stores={props.stores.clone()} /> }
}

/// Installs the panic hook and logger, applies the theme and mounts [`App`]
/// on `<body>`.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let stores = Stores::browser();
    let theme = stores.app.init_theme();
    tracing::info!(api_base = config::API_BASE, theme = theme.as_str(), "starting app");

    yew::Renderer::<App>::with_props(AppProps {
        stores,
    })
    .render();
}
