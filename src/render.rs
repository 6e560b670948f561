use crate::components::episode_page::{EpisodePage, EpisodePageProps};
use crate::models::{Episode, Sponsors};
use yew::ServerRenderer;

/// Renders a complete episode page document, doctype included.
pub async fn render_episode_page(
    site_url: String,
    episode: Episode,
    next_episode: Option<Episode>,
    sponsors: Sponsors,
) -> String {
    let renderer = ServerRenderer::<EpisodePage>::with_props(move || EpisodePageProps {
        episode,
        next_episode,
        sponsors,
        site_url: site_url.into(),
    })
    .hydratable(false);

    let body = renderer.render().await;
    format!("<!DOCTYPE html>{}", body)
}
