use yew::prelude::*;

use crate::i18n::current::common as t;

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                class={classes!(
                    "w-10",
                    "h-10",
                    "rounded-full",
                    "border-[3px]",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            ></div>
            <span class="sr-only">{ t::LOADING }</span>
        </div>
    }
}
