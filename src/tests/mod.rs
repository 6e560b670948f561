
use crate::components::episode_page::{has_show_notes, EpisodeView};
use crate::components::gen_funcs::{head_tags, markdown_to_html, MetaAttribute};
use crate::config::{Config, DEFAULT_SITE_URL};
use crate::error::AppError;
use crate::models::{Episode, Person, Sponsor, Sponsors};
use crate::store::EpisodeStore;
use chrono::{Datelike, Utc};
use std::collections::HashMap;

pub(crate) fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        ..Default::default()
    }
}

pub(crate) fn episode(past: bool) -> Episode {
    Episode {
        number_display: "5".to_string(),
        title: "Testing with <em>Friends</em>".to_string(),
        description: "\n      We talk about **testing** JavaScript.\n\n      Bring questions.\n    ".to_string(),
        past,
        host: person("Kent C. Dodds"),
        guests: vec![person("Guest One")],
        panelists: vec![person("Panelist One"), person("Panelist Two")],
        page: "/episodes/2016-01-20-testing".to_string(),
        ..Default::default()
    }
}

pub(crate) fn sponsors() -> Sponsors {
    Sponsors {
        top: vec![Sponsor {
            name: "Egghead".to_string(),
            link: "https://egghead.io".to_string(),
            image: Some("/sponsors/egghead.png".to_string()),
            tagline: Some("Bite-sized lessons".to_string()),
        }],
        others: vec![Sponsor {
            name: "Frontend Masters".to_string(),
            link: "https://frontendmasters.com".to_string(),
            ..Default::default()
        }],
    }
}

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn test_has_show_notes_with_host_tip() {
    let mut ep = episode(false);
    assert!(!has_show_notes(&ep));

    ep.host.tips = vec!["a".to_string()];
    assert!(has_show_notes(&ep));
}

#[test]
fn test_has_show_notes_checks_guests_and_panelists() {
    let mut ep = episode(false);
    ep.guests[0].links = vec!["[site](https://example.com)".to_string()];
    assert!(has_show_notes(&ep));

    let mut ep = episode(false);
    ep.panelists[1].picks = vec!["Coffee".to_string()];
    assert!(has_show_notes(&ep));
}

#[test]
fn test_view_for_past_episode() {
    let mut ep = episode(true);
    ep.podbean_id = Some("abc123".to_string());

    match EpisodeView::from_episode(&ep) {
        EpisodeView::Past(sections) => {
            assert_eq!(sections.audio.as_deref(), Some("abc123"));
            assert!(sections.video.is_none());
            assert!(sections.transcript_html.is_empty());
        }
        other => panic!("expected past view, got {:?}", other),
    }
}

#[test]
fn test_view_for_future_episode() {
    let mut ep = episode(false);
    ep.you_tube_id = Some("yt-live".to_string());
    ep.hangout_url = Some("https://hangouts.example.com/x".to_string());

    match EpisodeView::from_episode(&ep) {
        EpisodeView::Future(sections) => {
            let live = sections.live.expect("live promotion");
            assert_eq!(live.you_tube_id.as_str(), "yt-live");
            assert_eq!(live.hangout_url.as_deref(), Some("https://hangouts.example.com/x"));
            assert!(!sections.show_notes);
        }
        other => panic!("expected future view, got {:?}", other),
    }
}

#[test]
fn test_head_tags_order_and_content() {
    let ep = episode(true);
    let tags = head_tags(DEFAULT_SITE_URL, &ep, &markdown_to_html("Hello"));

    let keys: Vec<&str> = tags.iter().map(|t| t.key).collect();
    assert_eq!(
        keys,
        ["g1", "g2", "g3", "g4", "g5", "f1", "f2", "f3", "f4", "f5", "t1", "t2", "t3", "t4"]
    );
    assert_eq!(tags[0].attribute, MetaAttribute::Name("description"));
    assert_eq!(
        tags[0].content,
        "Episode 5 of the live JavaScript broadcast podcast. Hello"
    );
    assert_eq!(tags[1].content, "Testing with Friends");
    assert_eq!(tags[3].content, Utc::now().year().to_string());
    assert_eq!(tags[5].attribute, MetaAttribute::Property("og:title"));
    assert_eq!(
        tags[7].content,
        "https://javascriptair.com/episodes/2016-01-20-testing/screenshot.png"
    );
    assert_eq!(tags[8].content, "https://javascriptair.com/episodes/2016-01-20-testing");
    assert_eq!(tags[10].content, "JavaScript Air episode 5");
    assert_eq!(tags[13].attribute, MetaAttribute::Name("twitter:image"));
}

#[test]
fn test_head_tags_count_is_fixed() {
    let mut ep = episode(false);
    ep.title = String::new();
    ep.description = String::new();
    assert_eq!(head_tags("http://localhost:5000", &ep, "").len(), 14);
}

#[test]
fn test_validate_drops_blank_media_ids() {
    let mut ep = episode(true);
    ep.podbean_id = Some("".to_string());
    ep.you_tube_id = Some("  ".to_string());
    ep.hangout_url = Some("https://hangouts.example.com/x".to_string());

    let ep = ep.validate().expect("valid episode");
    assert!(ep.podbean_id.is_none());
    assert!(ep.you_tube_id.is_none());
    assert!(ep.hangout_url.is_some());
}

#[test]
fn test_validate_rejects_relative_page() {
    let mut ep = episode(true);
    ep.page = "episodes/no-slash".to_string();
    assert!(matches!(ep.validate(), Err(AppError::Validation(_))));

    let mut ep = episode(true);
    ep.title = " ".to_string();
    assert!(matches!(ep.validate(), Err(AppError::Validation(_))));
}

#[test]
fn test_episode_deserializes_from_page_data() {
    let json = r#"{
        "numberDisplay": "001",
        "title": "The Past, Present, and Future of JavaScript",
        "description": "Our first episode",
        "past": true,
        "podbeanId": "pb-1",
        "youTubeId": "yt-1",
        "transcriptHTML": "<p>Hello</p>",
        "host": {"name": "Kent C. Dodds", "twitter": "kentcdodds", "tips": ["Sleep"]},
        "guests": [{"name": "Brendan Eich"}],
        "page": "/episodes/2015-12-09-the-past-present-and-future-of-javascript"
    }"#;

    let ep: Episode = serde_json::from_str(json).expect("episode json");
    assert_eq!(ep.number_display, "001");
    assert_eq!(ep.you_tube_id.as_deref(), Some("yt-1"));
    assert_eq!(ep.transcript_html.as_deref(), Some("<p>Hello</p>"));
    assert_eq!(ep.host.tips, vec!["Sleep".to_string()]);
    assert!(ep.guests[0].links.is_empty());
    assert!(ep.panelists.is_empty());
}

#[test]
fn test_store_finds_pages_and_next_episode() {
    let mut upcoming = episode(false);
    upcoming.page = "/episodes/2016-02-03-next".to_string();
    upcoming.title = "Next Up".to_string();

    let store = EpisodeStore::new(vec![episode(true), upcoming], sponsors()).expect("store");
    assert!(store.find_by_page("/episodes/2016-01-20-testing").is_some());
    assert!(store.find_by_page("/episodes/2016-01-20-testing/").is_some());
    assert!(store.find_by_page("/episodes/missing").is_none());
    assert_eq!(store.next_episode().map(|e| e.title.as_str()), Some("Next Up"));
}

#[test]
fn test_store_rejects_duplicate_pages() {
    let result = EpisodeStore::new(vec![episode(true), episode(false)], Sponsors::default());
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn test_store_loads_bundled_data() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let store = EpisodeStore::load(&dir).expect("bundled data loads");
    assert!(!store.episodes().is_empty());
    assert!(store.next_episode().is_some());
}

#[test]
fn test_config_defaults() {
    let config = Config::from_lookup(lookup(&[])).expect("default config");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.site.url, DEFAULT_SITE_URL);
    assert_eq!(config.bind_address(), "0.0.0.0:5000");
}

#[test]
fn test_config_from_vars() {
    let config = Config::from_lookup(lookup(&[
        ("SERVER_HOST", "127.0.0.1"),
        ("SERVER_PORT", " 8080 "),
        ("SITE_URL", "https://staging.javascriptair.com/"),
        ("DATA_DIR", "/srv/jsair"),
    ]))
    .expect("config");
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.site.url, "https://staging.javascriptair.com");
    assert_eq!(config.data.dir, std::path::PathBuf::from("/srv/jsair"));
}

#[test]
fn test_config_rejects_bad_values() {
    let result = Config::from_lookup(lookup(&[("SERVER_PORT", "eighty")]));
    assert!(matches!(result, Err(AppError::Config(_))));

    let result = Config::from_lookup(lookup(&[("SITE_URL", "javascriptair.com")]));
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_config_new_reads_process_environment() {
    // No other test reads DATA_DIR from the process environment.
    std::env::set_var("DATA_DIR", "/tmp/jsair-config-new");
    let config = Config::new().expect("config from environment");
    std::env::remove_var("DATA_DIR");
    assert_eq!(config.data.dir, std::path::PathBuf::from("/tmp/jsair-config-new"));
}
