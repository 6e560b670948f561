use crate::components::gen_funcs::SITE_NAME;
use crate::components::safehtml::SafeHtml;
use crate::models::{Episode, Person};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderBarProps {
    #[prop_or_default]
    pub next_episode: Option<Episode>,
}

#[function_component(HeaderBar)]
pub fn header_bar(props: &HeaderBarProps) -> Html {
    html! {
        <header class="header-bar">
            <div class="container header-bar-inner">
                <span class="header-bar-logo">{ SITE_NAME }</span>
                if let Some(next) = &props.next_episode {
                    <a class="header-bar-next" href={next.page.clone()}>
                        <span class="header-bar-next-label">{"Next episode: "}</span>
                        { &next.title }
                    </a>
                }
            </div>
        </header>
    }
}

fn person_link(person: &Person) -> Html {
    match &person.twitter {
        Some(handle) if !handle.is_empty() => html! {
            <a class="person" href={format!("https://twitter.com/{}", handle)}>{ &person.name }</a>
        },
        _ => html! { <span class="person">{ &person.name }</span> },
    }
}

fn people_row(label: &str, people: &[Person]) -> Html {
    if people.is_empty() {
        return html! {};
    }
    html! {
        <div class="episode-people-row">
            <span class="episode-people-label">{ label.to_string() }</span>
            { for people.iter().map(person_link) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub episode: Episode,
    /// Rendered markdown description.
    pub description_html: AttrValue,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let episode = &props.episode;
    let status = if episode.past { "Recorded" } else { "Upcoming" };

    html! {
        <div class="episode-header">
            <p class="episode-number">{ format!("Episode {}", episode.number_display) }</p>
            <h1 class="episode-title">{ &episode.title }</h1>
            <p class="episode-status">
                { status }
                if let Some(date) = &episode.date {
                    { format!(" \u{00b7} {}", date) }
                }
            </p>
            <SafeHtml class="episode-description" html={props.description_html.clone()} />
            <div class="episode-people">
                { people_row("Host", std::slice::from_ref(&episode.host)) }
                { people_row("Guests", &episode.guests) }
                { people_row("Panelists", &episode.panelists) }
            </div>
        </div>
    }
}
