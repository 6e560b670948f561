use crate::components::safehtml::SafeHtml;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TranscriptSectionProps {
    #[prop_or_default]
    pub transcript_html: AttrValue,
}

#[function_component(TranscriptSection)]
pub fn transcript_section(props: &TranscriptSectionProps) -> Html {
    html! {
        <section class="episode-transcript">
            <h2>{"Transcript"}</h2>
            if props.transcript_html.trim().is_empty() {
                <p class="episode-transcript-pending">{"The transcript for this episode is not available yet."}</p>
            } else {
                <SafeHtml class="episode-transcript-body" html={props.transcript_html.clone()} />
            }
        </section>
    }
}
