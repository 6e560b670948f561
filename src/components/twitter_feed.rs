use yew::prelude::*;

pub const TWITTER_WIDGETS_SRC: &str = "https://platform.twitter.com/widgets.js";

#[derive(Properties, PartialEq)]
pub struct TwitterFeedProps {
    pub widget_id: AttrValue,
    pub link_to: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// Timeline placeholder that the widgets script replaces with the live feed.
#[function_component(TwitterFeed)]
pub fn twitter_feed(props: &TwitterFeedProps) -> Html {
    html! {
        <div class="twitter-feed">
            <a
                class="twitter-timeline"
                href={props.link_to.clone()}
                data-widget-id={props.widget_id.clone()}
            >
                { props.children.clone() }
            </a>
        </div>
    }
}

#[function_component(TwitterWidgetScript)]
pub fn twitter_widget_script() -> Html {
    html! {
        <script defer=true src={TWITTER_WIDGETS_SRC} charset="utf-8"></script>
    }
}
