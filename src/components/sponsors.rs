use crate::models::{Sponsor, Sponsors};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SponsorsSectionProps {
    pub sponsors: Sponsors,
}

fn sponsor_item(sponsor: &Sponsor, class: &'static str) -> Html {
    html! {
        <li class={class} key={sponsor.name.clone()}>
            <a href={sponsor.link.clone()} title={sponsor.name.clone()}>
                if let Some(image) = &sponsor.image {
                    <img src={image.clone()} alt={sponsor.name.clone()} />
                } else {
                    { &sponsor.name }
                }
            </a>
            if let Some(tagline) = &sponsor.tagline {
                <p class="sponsor-tagline">{ tagline }</p>
            }
        </li>
    }
}

#[function_component(SponsorsSection)]
pub fn sponsors_section(props: &SponsorsSectionProps) -> Html {
    let Sponsors { top, others } = &props.sponsors;

    html! {
        <section class="sponsors">
            <h2>{"Sponsors"}</h2>
            if top.is_empty() && others.is_empty() {
                <p class="sponsors-empty">{"Interested in sponsoring? Get in touch with the host."}</p>
            } else {
                <ul class="sponsors-top">
                    { for top.iter().map(|s| sponsor_item(s, "sponsor sponsor-top")) }
                </ul>
                <ul class="sponsors-others">
                    { for others.iter().map(|s| sponsor_item(s, "sponsor")) }
                </ul>
            }
        </section>
    }
}
