use crate::models::{IntelBrief, IntelBriefRequest, RecommendationItem, RecommendationRequest};

const RECOMMENDATION_TEMPERATURE: f64 = 0.5;
const INTEL_BRIEF_TEMPERATURE: f64 = 0.3;

/// Instruction pair plus sampling parameters for one completion call
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Builds the prompt asking for `count` recommendations
///
/// Exclusions and the genre filter are embedded verbatim. A clause whose
/// input is absent is left out entirely.
pub fn recommendation_prompt(
    request: &RecommendationRequest,
    count: usize,
    max_tokens: u32,
) -> Prompt {
    let example = serde_json::to_string(&RecommendationItem::example()).unwrap_or_default();

    let mut lines = vec![
        "You are a precise Movie/TV recommendation engine.".to_string(),
        "Your goal is HIGH SIMILARITY and VIBE MATCHING.".to_string(),
        format!("Task: Recommend exactly {} {}.", count, request.media_type.label()),
        format!(
            "User Vibe/Prompt: \"{}\".",
            request.user_prompt().unwrap_or("General Recommendation")
        ),
        format!(
            "Reference Title: \"{}\".",
            request.ref_title().unwrap_or("None")
        ),
    ];

    if let Some(genres) = request.genre_filter() {
        lines.push(format!(
            "STRICT CONSTRAINT: Every result MUST match these genres: [{}].",
            genres
        ));
    }

    let excluded = request.excluded_titles();
    if !excluded.is_empty() {
        lines.push(format!("Do NOT recommend: {}.", excluded.join(", ")));
    }

    lines.push(
        "STRICT OUTPUT: a JSON array only. No prose, no markdown, no code fences.".to_string(),
    );
    lines.push(format!("Format: [{}]", example));

    Prompt {
        system: lines.join("\n"),
        user: "Generate recommendations.".to_string(),
        temperature: RECOMMENDATION_TEMPERATURE,
        max_tokens,
    }
}

/// Builds the prompt asking for a single intel brief object
pub fn intel_brief_prompt(request: &IntelBriefRequest, max_tokens: u32) -> Prompt {
    let template = serde_json::to_string_pretty(&IntelBrief::template()).unwrap_or_default();

    let system = [
        "You are a classified archivist. Return a SINGLE JSON object and nothing else.",
        "No prose, no markdown, no code fences.",
        "Detail the plot twist fully and truthfully.",
        "Figures may be estimates; use \"N/A\" when a value is unknown.",
        "Format:",
        template.as_str(),
    ]
    .join("\n");

    Prompt {
        system,
        user: format!("Analyze: \"{}\" ({})", request.title, request.media_type),
        temperature: INTEL_BRIEF_TEMPERATURE,
        max_tokens,
    }
}
