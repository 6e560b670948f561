use std::fs;
use std::path::Path;
use crate::error::{AppError, AppResult};
use crate::models::{Episode, Sponsors};

pub const EPISODES_FILE: &str = "episodes.json";
pub const SPONSORS_FILE: &str = "sponsors.json";

/// The episode catalogue and sponsor list, validated once at load time.
#[derive(Debug, Clone, Default)]
pub struct EpisodeStore {
    episodes: Vec<Episode>,
    sponsors: Sponsors,
}

impl EpisodeStore {
    pub fn new(episodes: Vec<Episode>, sponsors: Sponsors) -> AppResult<Self> {
        let episodes = episodes
            .into_iter()
            .map(Episode::validate)
            .collect::<AppResult<Vec<_>>>()?;

        for (i, episode) in episodes.iter().enumerate() {
            if episodes[..i].iter().any(|e| e.page == episode.page) {
                return Err(AppError::validation(format!(
                    "duplicate episode page '{}'",
                    episode.page
                )));
            }
        }

        Ok(EpisodeStore { episodes, sponsors })
    }

    pub fn from_json(episodes_json: &str, sponsors_json: &str) -> AppResult<Self> {
        let episodes: Vec<Episode> = serde_json::from_str(episodes_json)?;
        let sponsors: Sponsors = serde_json::from_str(sponsors_json)?;
        Self::new(episodes, sponsors)
    }

    /// Reads `episodes.json` and, when present, `sponsors.json` from `dir`.
    pub fn load(dir: &Path) -> AppResult<Self> {
        let episodes_json = fs::read_to_string(dir.join(EPISODES_FILE))?;
        let sponsors_path = dir.join(SPONSORS_FILE);
        let sponsors_json = if sponsors_path.exists() {
            fs::read_to_string(sponsors_path)?
        } else {
            log::warn!("No {} in {}, rendering without sponsors", SPONSORS_FILE, dir.display());
            "{}".to_string()
        };

        let store = Self::from_json(&episodes_json, &sponsors_json)?;
        log::info!(
            "Loaded {} episodes and {} sponsors from {}",
            store.episodes.len(),
            store.sponsors.top.len() + store.sponsors.others.len(),
            dir.display()
        );
        Ok(store)
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn sponsors(&self) -> &Sponsors {
        &self.sponsors
    }

    pub fn find_by_page(&self, page: &str) -> Option<&Episode> {
        let page = page.trim_end_matches('/');
        self.episodes.iter().find(|e| e.page.trim_end_matches('/') == page)
    }

    /// The first upcoming episode in catalogue order.
    pub fn next_episode(&self) -> Option<&Episode> {
        self.episodes.iter().find(|e| !e.past)
    }
}
