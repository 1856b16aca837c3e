use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    i18n::current::{common, not_found as t},
    router::Route,
};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="main not-found-page">
            <h2>{ t::HEADING }</h2>
            <p>{ t::BODY }</p>
            <Link<Route> to={Route::Home}>{ common::BACK_HOME }</Link<Route>>
        </main>
    }
}
