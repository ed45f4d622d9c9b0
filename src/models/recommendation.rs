use serde::{Deserialize, Serialize};

use super::{non_blank, MediaType};

/// Body of `POST /api/smart-search`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub ref_title: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: MediaType,
    /// Titles already shown to the user
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Comma separated genre names picked in the frontend
    #[serde(default)]
    pub genre_filter: Option<String>,
}

impl RecommendationRequest {
    pub fn ref_title(&self) -> Option<&str> {
        non_blank(&self.ref_title)
    }

    pub fn user_prompt(&self) -> Option<&str> {
        non_blank(&self.user_prompt)
    }

    pub fn genre_filter(&self) -> Option<&str> {
        non_blank(&self.genre_filter)
    }

    /// Exclusion titles with blank entries dropped, order preserved
    pub fn excluded_titles(&self) -> Vec<&str> {
        self.exclude
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Short label for logs
    pub fn subject(&self) -> &str {
        self.ref_title().unwrap_or("Mood")
    }

    /// Whether `title` matches one of the excluded titles, ignoring case
    pub fn is_excluded(&self, title: &str) -> bool {
        let title = title.trim().to_lowercase();
        self.excluded_titles()
            .iter()
            .any(|excluded| excluded.to_lowercase() == title)
    }
}

/// One recommended title as the model is asked to emit it
///
/// Replies are passed through as recovered JSON; this type only fixes the
/// format shown to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub title: String,
    pub reason: String,
    pub score: f64,
}

impl RecommendationItem {
    /// Example item embedded in the prompt
    pub fn example() -> Self {
        Self {
            title: "Name".to_string(),
            reason: "Why it matches".to_string(),
            score: 95.0,
        }
    }
}
