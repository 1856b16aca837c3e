use web_sys::Element;
use yew::prelude::*;

use crate::utils::sanitize_article_html;

#[derive(Properties, Clone, PartialEq)]
pub struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Article HTML rendered into a host element Yew does not diff. The markup
/// is sanitized before it reaches the DOM.
#[function_component(RawHtml)]
pub fn raw_html(props: &RawHtmlProps) -> Html {
    let host_ref = use_node_ref();

    {
        let host_ref = host_ref.clone();
        use_effect_with(props.html.clone(), move |next_html| {
            if let Some(host) = host_ref.cast::<Element>() {
                host.set_inner_html(&sanitize_article_html(next_html));
            }
            || ()
        });
    }

    html! {
        <div ref={host_ref} class={props.class.clone()} />
    }
}
