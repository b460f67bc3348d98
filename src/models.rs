use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upstream AI provider a model is served by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "openrouter")]
    OpenRouter,
}

impl Provider {
    pub const fn as_str(self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::OpenAi => "openai",
            Provider::OpenRouter => "openrouter",
        }
    }

    /// Server-side environment variable holding the fallback key for this provider
    pub const fn api_key_env(self) -> &'static str {
        match self {
            Provider::Google => "GOOGLE_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
            Provider::OpenRouter => "OPENROUTER_API_KEY",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "google" => Ok(Provider::Google),
            "openai" => Ok(Provider::OpenAi),
            "openrouter" => Ok(Provider::OpenRouter),
            _ => Err(Error::UnknownProvider(s.to_string())),
        }
    }
}

/// How the backend reaches a model, and which request header carries a user supplied key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelConfig {
    pub model_id: &'static str,
    pub provider: Provider,
    pub header_key: &'static str,
}

const OPENROUTER_HEADER: &str = "X-OpenRouter-API-Key";
const GOOGLE_HEADER: &str = "X-Google-API-Key";
const OPENAI_HEADER: &str = "X-OpenAI-API-Key";

const fn model(
    model_id: &'static str,
    provider: Provider,
    header_key: &'static str,
) -> ModelConfig {
    ModelConfig {
        model_id,
        provider,
        header_key,
    }
}

/// Display names accepted in `ChatRequest::model`, in catalog order
pub static SUPPORTED_MODELS: [(&str, ModelConfig); 7] = [
    (
        "Deepseek R1 0528",
        model("deepseek/deepseek-r1-0528:free", Provider::OpenRouter, OPENROUTER_HEADER),
    ),
    (
        "Deepseek V3",
        model("deepseek/deepseek-chat-v3-0324:free", Provider::OpenRouter, OPENROUTER_HEADER),
    ),
    ("Gemini 2.5 Pro", model("gemini-2.5-pro", Provider::Google, GOOGLE_HEADER)),
    ("Gemini 2.5 Flash", model("gemini-2.5-flash", Provider::Google, GOOGLE_HEADER)),
    ("Gemini 1.5 Flash", model("gemini-1.5-flash", Provider::Google, GOOGLE_HEADER)),
    ("GPT-4o", model("gpt-4o", Provider::OpenAi, OPENAI_HEADER)),
    ("GPT-4o-mini", model("gpt-4o-mini", Provider::OpenAi, OPENAI_HEADER)),
];

pub fn model_config(name: &str) -> Result<&'static ModelConfig> {
    SUPPORTED_MODELS
        .iter()
        .find(|(model_name, _)| *model_name == name)
        .map(|(_, config)| config)
        .ok_or_else(|| Error::UnsupportedModel(name.to_string()))
}

pub fn supported_model_names() -> impl Iterator<Item = &'static str> {
    SUPPORTED_MODELS.iter().map(|(name, _)| *name)
}
