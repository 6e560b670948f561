use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AudioSectionProps {
    pub podbean_id: AttrValue,
}

pub fn podbean_player_url(podbean_id: &str) -> String {
    format!(
        "https://www.podbean.com/media/player/{}?from=site&skin=1&share=1&fonts=Helvetica&auto=0&download=1",
        podbean_id
    )
}

#[function_component(AudioSection)]
pub fn audio_section(props: &AudioSectionProps) -> Html {
    html! {
        <section class="episode-audio">
            <h2>{"Listen"}</h2>
            <iframe
                title="Episode audio"
                class="episode-audio-player"
                src={podbean_player_url(&props.podbean_id)}
                width="100%"
                height="100"
                frameborder="0"
                scrolling="no"
            ></iframe>
        </section>
    }
}
