use serde::{Deserialize, Serialize};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub number_display: String,
    pub title: String,
    /// Markdown, usually written as an indented template literal.
    pub description: String,
    #[serde(default)]
    pub past: bool,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub podbean_id: Option<String>,
    #[serde(default, rename = "youTubeId")]
    pub you_tube_id: Option<String>,
    #[serde(default)]
    pub hangout_url: Option<String>,
    #[serde(default, rename = "transcriptHTML")]
    pub transcript_html: Option<String>,
    #[serde(default)]
    pub guests: Vec<Person>,
    pub host: Person,
    #[serde(default)]
    pub panelists: Vec<Person>,
    pub page: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub picks: Vec<String>,
}

impl Person {
    pub fn has_notes(&self) -> bool {
        self.links.len() + self.tips.len() + self.picks.len() > 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sponsors {
    #[serde(default)]
    pub top: Vec<Sponsor>,
    #[serde(default)]
    pub others: Vec<Sponsor>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sponsor {
    pub name: String,
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Episode {
    /// Checks the fields the page cannot render without and drops blank media ids.
    pub fn validate(mut self) -> AppResult<Self> {
        if self.title.trim().is_empty() {
            return Err(AppError::validation(format!(
                "episode at '{}' has an empty title",
                self.page
            )));
        }
        if self.number_display.trim().is_empty() {
            return Err(AppError::validation(format!(
                "episode '{}' has an empty numberDisplay",
                self.title
            )));
        }
        if !self.page.starts_with('/') {
            return Err(AppError::validation(format!(
                "episode '{}' has page '{}', expected a path starting with '/'",
                self.title, self.page
            )));
        }

        self.date = blank_to_none(self.date);
        self.podbean_id = blank_to_none(self.podbean_id);
        self.you_tube_id = blank_to_none(self.you_tube_id);
        self.hangout_url = blank_to_none(self.hangout_url);
        Ok(self)
    }

    /// Guests, then the host, then panelists.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.guests
            .iter()
            .chain(std::iter::once(&self.host))
            .chain(self.panelists.iter())
    }
}
