use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Bearer credential for the chat-completion API
    pub groq_api_key: String,

    /// Chat-completion endpoint (OpenAI compatible)
    #[serde(default = "default_completion_api_url")]
    pub completion_api_url: String,

    /// Model name sent with every completion request
    #[serde(default = "default_completion_model")]
    pub completion_model: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Hard upper bound on a single upstream call, in seconds
    #[serde(default = "default_upstream_timeout_secs")]
    pub upstream_timeout_secs: u64,

    /// Cap on generated tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Number of titles requested from the model per search
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,
}

fn default_completion_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_completion_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_upstream_timeout_secs() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_recommendation_count() -> usize {
    6
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
