use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

const AUTO_DISMISS_MS: u32 = 5000;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with((*is_open, props.auto_dismiss), move |(visible, auto_dismiss)| {
            if *auto_dismiss && *visible {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let close_button = Callback::from(move |_: MouseEvent| dismiss.emit(()));

    html! {
        <div
            class={classes!("error-banner", "flex", "items-start", "gap-3", "rounded-2xl", "px-5", "py-4", "text-sm", "shadow-xl", "w-full", "max-w-2xl")}
            role="alert"
            aria-live="assertive"
        >
            <span class="text-2xl" aria-hidden="true">{"⚠️"}</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class={classes!("ml-4", "inline-flex", "h-8", "w-8", "items-center", "justify-center", "rounded-full", "hover:bg-black/10")}
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
