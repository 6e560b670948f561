use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoSectionProps {
    pub you_tube_id: AttrValue,
    #[prop_or_default]
    pub hangout_url: Option<AttrValue>,
    #[prop_or(AttrValue::from("Watch"))]
    pub label: AttrValue,
}

#[function_component(VideoSection)]
pub fn video_section(props: &VideoSectionProps) -> Html {
    let embed_url = format!("https://www.youtube.com/embed/{}", props.you_tube_id);
    let watch_url = format!("https://www.youtube.com/watch?v={}", props.you_tube_id);

    html! {
        <section class="episode-video">
            <h2>{ props.label.clone() }</h2>
            <div class="episode-video-frame">
                <iframe
                    title="Episode video"
                    src={embed_url}
                    width="100%"
                    height="450"
                    frameborder="0"
                    allowfullscreen=true
                ></iframe>
            </div>
            <p class="episode-video-links">
                <a href={watch_url}>{"Watch on YouTube"}</a>
                if let Some(hangout_url) = &props.hangout_url {
                    {" \u{00b7} "}
                    <a class="episode-hangout-link" href={hangout_url.clone()}>{"Join the live hangout"}</a>
                }
            </p>
        </section>
    }
}
