use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod intel_brief;
pub mod recommendation;

pub use intel_brief::{IntelBrief, IntelBriefRequest, UNAVAILABLE};
pub use recommendation::{RecommendationItem, RecommendationRequest};

/// Kind of media a request is about
///
/// Anything other than `"tv"` is treated as a movie request, so unknown
/// values from the frontend never reject the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Tv,
    #[default]
    #[serde(other)]
    Movie,
}

impl MediaType {
    /// Plural label used inside prompts
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Movie => "Movies",
            MediaType::Tv => "Series",
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Tv => write!(f, "tv"),
        }
    }
}

/// Treats missing and whitespace-only strings the same way
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
