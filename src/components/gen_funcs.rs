use std::collections::HashMap;
use std::sync::LazyLock;
use ammonia::Builder;
use chrono::{Datelike, Utc};
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

use crate::models::Episode;

pub const SITE_NAME: &str = "JavaScript Air";
pub const APPLICATION_NAME: &str = "JavaScript Air Podcast";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Removes the shared indentation from a block of text, along with any blank
/// lines before and after it.
pub fn deindent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());
    let (first, last) = match (first, last) {
        (Some(first), Some(last)) => (first, last),
        _ => return String::new(),
    };
    let lines = &lines[first..=last];

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| l.get(indent..).unwrap_or_else(|| l.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").into_owned()
}

// Only the entities the markdown renderer produces for plain text.
fn decode_basic_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn page_description(number_display: &str, description_html: &str) -> String {
    let description = description_html
        .split("\n\n")
        .map(|paragraph| paragraph.replace('\n', " "))
        .collect::<Vec<_>>()
        .join("\n\n");
    let description = decode_basic_entities(&strip_tags(description.trim()));
    format!(
        "Episode {} of the live JavaScript broadcast podcast. {}",
        number_display, description
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetaAttribute {
    Name(&'static str),
    Property(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    pub key: &'static str,
    pub attribute: MetaAttribute,
    pub content: String,
}

impl HeadTag {
    fn name(key: &'static str, name: &'static str, content: impl Into<String>) -> Self {
        HeadTag { key, attribute: MetaAttribute::Name(name), content: content.into() }
    }

    fn property(key: &'static str, property: &'static str, content: impl Into<String>) -> Self {
        HeadTag { key, attribute: MetaAttribute::Property(property), content: content.into() }
    }
}

pub fn episode_url(site_url: &str, episode: &Episode) -> String {
    format!("{}{}", site_url, episode.page)
}

/// Search engine, Open Graph and Twitter card tags for an episode page, always
/// in that order.
pub fn head_tags(site_url: &str, episode: &Episode, description_html: &str) -> Vec<HeadTag> {
    let description = page_description(&episode.number_display, description_html);
    let url = episode_url(site_url, episode);
    let image = format!("{}/screenshot.png", url);
    let title = strip_tags(&episode.title);
    let year = Utc::now().year().to_string();

    vec![
        // Google
        HeadTag::name("g1", "description", description.clone()),
        HeadTag::name("g2", "keywords", title.clone()),
        HeadTag::name("g3", "author", SITE_NAME),
        HeadTag::name("g4", "copyright", year),
        HeadTag::name("g5", "application-name", APPLICATION_NAME),
        // Facebook
        HeadTag::property("f1", "og:title", title.clone()),
        HeadTag::property("f2", "og:type", "podcast"),
        HeadTag::property("f3", "og:image", image.clone()),
        HeadTag::property("f4", "og:url", url),
        HeadTag::property("f5", "og:description", description.clone()),
        // Twitter
        HeadTag::name("t1", "twitter:card", format!("{} episode {}", SITE_NAME, episode.number_display)),
        HeadTag::name("t2", "twitter:title", title),
        HeadTag::name("t3", "twitter:description", description),
        HeadTag::name("t4", "twitter:image", image),
    ]
}

pub fn sanitize_html_with_blank_target(description: &str) -> String {
    let mut attribute_values = HashMap::new();
    attribute_values.insert("target", "_blank");
    let mut tag_attribute_values = HashMap::new();
    tag_attribute_values.insert("a", attribute_values);

    let mut builder = Builder::default();
    builder.add_tags(&["a"]);
    builder.add_tag_attributes("a", &["href", "target"]);
    builder.set_tag_attribute_values(tag_attribute_values);

    builder.clean(description).to_string()
}
