use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::MediaType;

/// Placeholder value sent when a brief could not be produced
pub const UNAVAILABLE: &str = "Data Unavailable";

/// Body of `POST /api/intel-brief`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntelBriefRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub media_type: MediaType,
}

/// Fixed-shape analysis of a single title
///
/// Wire names match what the frontend reads. Fields left as `None` are
/// omitted, which is how the placeholder brief carries only a tagline.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntelBrief {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline_ai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_twist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_impact: Option<String>,
    #[serde(rename = "budget_est", skip_serializing_if = "Option::is_none")]
    pub budget_estimate: Option<String>,
    #[serde(rename = "revenue_est", skip_serializing_if = "Option::is_none")]
    pub revenue_estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_verdict: Option<String>,
}

impl IntelBrief {
    /// Brief returned when the upstream call or recovery failed
    pub fn unavailable() -> Self {
        Self {
            tagline_ai: Some(UNAVAILABLE.to_string()),
            ..Default::default()
        }
    }

    /// Fits a recovered reply into the six-field shape
    ///
    /// Missing or non-string fields become [`UNAVAILABLE`] and unknown keys
    /// are dropped. Returns `None` when the reply is not an object.
    pub fn from_reply(reply: &Value) -> Option<Self> {
        let object = reply.as_object()?;
        let field = |key: &str| {
            let value = object
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(UNAVAILABLE);
            Some(value.to_string())
        };

        Some(Self {
            tagline_ai: field("tagline_ai"),
            plot_twist: field("plot_twist"),
            cultural_impact: field("cultural_impact"),
            budget_estimate: field("budget_est"),
            revenue_estimate: field("revenue_est"),
            status_verdict: field("status_verdict"),
        })
    }

    /// Template object shown to the model
    pub fn template() -> Self {
        Self {
            tagline_ai: Some("Catchy phrase".to_string()),
            plot_twist: Some("Detailed spoiler paragraph".to_string()),
            cultural_impact: Some("Pop culture history".to_string()),
            budget_estimate: Some("e.g. $100M".to_string()),
            revenue_estimate: Some("e.g. $500M".to_string()),
            status_verdict: Some("Blockbuster/Cult Classic".to_string()),
        }
    }
}
