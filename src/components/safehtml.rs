use crate::components::gen_funcs::sanitize_html_with_blank_target;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders sanitized markup inside a wrapper div. Links open in a new tab.
#[function_component(SafeHtml)]
pub fn safe_html(props: &Props) -> Html {
    if props.html.trim().is_empty() {
        return html! { <div class={props.class.clone()}></div> };
    }

    let sanitized = sanitize_html_with_blank_target(&props.html);
    html! {
        <div class={props.class.clone()}>
            { Html::from_html_unchecked(AttrValue::from(sanitized)) }
        </div>
    }
}
