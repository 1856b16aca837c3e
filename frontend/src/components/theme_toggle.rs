use std::rc::Rc;

use yew::prelude::*;

use crate::{hooks::use_store, i18n::current::theme_toggle as t, stores::AppStore};

#[derive(Properties)]
pub struct ThemeToggleProps {
    pub store: Rc<AppStore>,
    #[prop_or_default]
    pub class: Classes,
}

impl PartialEq for ThemeToggleProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && self.class == other.class
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        store,
        class,
    } = props;
    use_store(store);
    let is_dark = store.theme().is_dark();

    let onclick = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.toggle_theme();
        })
    };

    let label = if is_dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let icon_class = if is_dark { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "btn-fluent-icon",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={is_dark.to_string()}
        >
            <i
                class={classes!("fas", icon_class, "fa-lg", "text-[var(--text)]", "group-hover:text-[var(--primary)]")}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
