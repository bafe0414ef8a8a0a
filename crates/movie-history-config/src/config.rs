use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryOptions,
    #[serde(default)]
    pub screening_room: ScreeningRoomConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HistoryOptions {
    /// Seed the three sample entries the first time the history is viewed
    #[serde(default = "default_true")]
    pub seed_on_first_run: bool,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            seed_on_first_run: default_true(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ScreeningRoomConfig {
    #[serde(default = "default_now_showing")]
    pub movies: Vec<NowShowing>,
}

impl Default for ScreeningRoomConfig {
    fn default() -> Self {
        Self {
            movies: default_now_showing(),
        }
    }
}

/// One entry on the screening-room board.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NowShowing {
    pub id: u32,
    pub title: String,
    pub poster: String,
    pub genre: String,
    pub year: u32,
    pub duration: u32,
}

fn default_true() -> bool {
    true
}

pub fn default_now_showing() -> Vec<NowShowing> {
    vec![
        NowShowing {
            id: 1,
            title: "Psych: The Movie".to_string(),
            poster: "🎬".to_string(),
            genre: "Comedy".to_string(),
            year: 2017,
            duration: 88,
        },
        NowShowing {
            id: 2,
            title: "The Matrix".to_string(),
            poster: "🕶️".to_string(),
            genre: "Sci-Fi".to_string(),
            year: 1999,
            duration: 136,
        },
        NowShowing {
            id: 3,
            title: "Inception".to_string(),
            poster: "🌀".to_string(),
            genre: "Thriller".to_string(),
            year: 2010,
            duration: 148,
        },
        NowShowing {
            id: 4,
            title: "The Shawshank Redemption".to_string(),
            poster: "🔒".to_string(),
            genre: "Drama".to_string(),
            year: 1994,
            duration: 142,
        },
        NowShowing {
            id: 5,
            title: "Pulp Fiction".to_string(),
            poster: "💼".to_string(),
            genre: "Crime".to_string(),
            year: 1994,
            duration: 154,
        },
    ]
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen_ids = HashSet::new();
        for movie in &self.screening_room.movies {
            if movie.title.is_empty() {
                return Err(anyhow::anyhow!(
                    "Screening room entry {} has an empty title",
                    movie.id
                ));
            }
            if !seen_ids.insert(movie.id) {
                return Err(anyhow::anyhow!(
                    "Duplicate screening room id: {}",
                    movie.id
                ));
            }
        }
        Ok(())
    }
}
