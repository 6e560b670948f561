use crate::components::gen_funcs::{
    deindent, head_tags, markdown_to_html, page_description, SITE_NAME,
};
use crate::components::header::{Header, HeaderBar};
use crate::components::page::Page;
use crate::components::sections::audio::AudioSection;
use crate::components::sections::show_notes::ShowNotes;
use crate::components::sections::transcript::TranscriptSection;
use crate::components::sections::video::VideoSection;
use crate::components::sponsors::SponsorsSection;
use crate::components::twitter_feed::{TwitterFeed, TwitterWidgetScript};
use crate::config::DEFAULT_SITE_URL;
use crate::models::{Episode, Person, Sponsors};
use yew::prelude::*;

pub const JAVASCRIPT_AIR_WIDGET_ID: &str = "675885424049393664";
pub const JS_AIR_QUESTION_WIDGET_ID: &str = "675879000950988805";

const TWITTER_FEED_CONTAINER_CLASS: &str = "future-episode-twitter-feeds";
const TWITTER_FEED_CONTAINER_STYLE: &str = "@media only screen and (min-width: 803px) { .future-episode-twitter-feeds { display: flex; } }";

#[derive(Clone, Debug, PartialEq)]
pub struct PastSections {
    pub audio: Option<AttrValue>,
    pub video: Option<AttrValue>,
    pub transcript_html: AttrValue,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LivePromotion {
    pub you_tube_id: AttrValue,
    pub hangout_url: Option<AttrValue>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FutureSections {
    pub live: Option<LivePromotion>,
    pub show_notes: bool,
}

/// Which sections an episode page shows, decided once from the episode data.
#[derive(Clone, Debug, PartialEq)]
pub enum EpisodeView {
    Past(PastSections),
    Future(FutureSections),
}

impl EpisodeView {
    pub fn from_episode(episode: &Episode) -> Self {
        if episode.past {
            EpisodeView::Past(PastSections {
                audio: episode.podbean_id.clone().map(AttrValue::from),
                video: episode.you_tube_id.clone().map(AttrValue::from),
                transcript_html: episode
                    .transcript_html
                    .clone()
                    .map(AttrValue::from)
                    .unwrap_or_default(),
            })
        } else {
            EpisodeView::Future(FutureSections {
                live: episode.you_tube_id.clone().map(|id| LivePromotion {
                    you_tube_id: id.into(),
                    hangout_url: episode.hangout_url.clone().map(AttrValue::from),
                }),
                show_notes: has_show_notes(episode),
            })
        }
    }
}

/// True when any guest, the host, or any panelist has links, tips or picks.
pub fn has_show_notes(episode: &Episode) -> bool {
    episode.people().any(Person::has_notes)
}

#[derive(Properties, PartialEq)]
pub struct EpisodePageProps {
    pub episode: Episode,
    #[prop_or_default]
    pub next_episode: Option<Episode>,
    pub sponsors: Sponsors,
    #[prop_or(AttrValue::from(DEFAULT_SITE_URL))]
    pub site_url: AttrValue,
}

#[function_component(EpisodePage)]
pub fn episode_page(props: &EpisodePageProps) -> Html {
    let episode = &props.episode;
    let description_html = markdown_to_html(&deindent(&episode.description));
    let title = format!("{} | {}", SITE_NAME, episode.title);
    let description = page_description(&episode.number_display, &description_html);
    let tags = head_tags(&props.site_url, episode, &description_html);

    let branch = match EpisodeView::from_episode(episode) {
        EpisodeView::Past(sections) => html! {
            <PastEpisodeStuff
                episode={episode.clone()}
                sponsors={props.sponsors.clone()}
                sections={sections}
            />
        },
        EpisodeView::Future(sections) => html! {
            <FutureEpisodeStuff
                episode={episode.clone()}
                sponsors={props.sponsors.clone()}
                sections={sections}
            />
        },
    };

    html! {
        <Page {title} {description} head_tags={tags}>
            <HeaderBar next_episode={props.next_episode.clone()} />
            <div class="episode-page container">
                <Header episode={episode.clone()} description_html={description_html} />
                { branch }
            </div>
        </Page>
    }
}

#[derive(Properties, PartialEq)]
pub struct PastEpisodeProps {
    pub episode: Episode,
    pub sponsors: Sponsors,
    pub sections: PastSections,
}

#[function_component(PastEpisodeStuff)]
pub fn past_episode_stuff(props: &PastEpisodeProps) -> Html {
    let sections = &props.sections;

    html! {
        <div class="past-episode" style="font-size: 23px;">
            if let Some(podbean_id) = &sections.audio {
                <div>
                    <hr />
                    <AudioSection podbean_id={podbean_id.clone()} />
                </div>
            }
            if let Some(you_tube_id) = &sections.video {
                <div>
                    <hr />
                    <VideoSection you_tube_id={you_tube_id.clone()} />
                </div>
            }
            <hr />
            <SponsorsSection sponsors={props.sponsors.clone()} />
            <hr />
            <ShowNotes episode={props.episode.clone()} />
            <hr />
            <TranscriptSection transcript_html={sections.transcript_html.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FutureEpisodeProps {
    pub episode: Episode,
    pub sponsors: Sponsors,
    pub sections: FutureSections,
}

#[function_component(FutureEpisodeStuff)]
pub fn future_episode_stuff(props: &FutureEpisodeProps) -> Html {
    let sections = &props.sections;

    html! {
        <div class="future-episode">
            if let Some(live) = &sections.live {
                <div>
                    <style>{ TWITTER_FEED_CONTAINER_STYLE }</style>
                    <hr />
                    <div class="+margin-bottom-large">
                        <VideoSection
                            you_tube_id={live.you_tube_id.clone()}
                            hangout_url={live.hangout_url.clone()}
                            label="Watch Live"
                        />
                    </div>

                    <div class={TWITTER_FEED_CONTAINER_CLASS}>
                        <TwitterFeed
                            widget_id={JAVASCRIPT_AIR_WIDGET_ID}
                            link_to="https://twitter.com/hashtag/JavaScriptAir"
                        >
                            {"Tweet about #JavaScriptAir"}
                        </TwitterFeed>

                        <TwitterFeed
                            widget_id={JS_AIR_QUESTION_WIDGET_ID}
                            link_to="https://twitter.com/hashtag/jsAirQuestion"
                        >
                            {"Ask a #jsAirQuestion"}
                        </TwitterFeed>
                        <TwitterWidgetScript />
                    </div>
                </div>
            }
            if sections.show_notes {
                <div>
                    <hr />
                    <ShowNotes episode={props.episode.clone()} />
                </div>
            }
            <hr />
            <SponsorsSection sponsors={props.sponsors.clone()} />
        </div>
    }
}
