use yew::prelude::*;

use crate::i18n::current::about as t;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <main class="main about-page">
            <div class="container">
                <h1 class="single-title">{ t::HEADING }</h1>
                <p class="page-description">{ t::BODY }</p>
            </div>
        </main>
    }
}
