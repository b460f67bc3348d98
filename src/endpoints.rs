use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Logical API operation exposed by the chat0 backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Streaming chat
    Chat,
    /// Title completion
    Completion,
    Health,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Chat, Endpoint::Completion, Endpoint::Health];

    /// Path relative to the base URL, always starting with `/`
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Chat => "/api/chat",
            Endpoint::Completion => "/api/completion",
            Endpoint::Health => "/api/health",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Endpoint::Chat => "CHAT",
            Endpoint::Completion => "COMPLETION",
            Endpoint::Health => "HEALTH",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownEndpoint(s.to_string()))
    }
}

/// Absolute URL of every [`Endpoint`], computed once from a base URL
///
/// Holds one field per endpoint so the key set can never drift from [`Endpoint::ALL`].
/// Serializes and debug-prints as `{"CHAT": .., "COMPLETION": .., "HEALTH": ..}`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct EndpointTable {
    chat: String,
    completion: String,
    health: String,
}

impl EndpointTable {
    pub fn new(base_url: &str) -> Self {
        let url = |endpoint: Endpoint| join(base_url, endpoint.path());

        Self {
            chat: url(Endpoint::Chat),
            completion: url(Endpoint::Completion),
            health: url(Endpoint::Health),
        }
    }

    pub fn get(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Chat => &self.chat,
            Endpoint::Completion => &self.completion,
            Endpoint::Health => &self.health,
        }
    }

    /// Iterate over `(endpoint, absolute URL)` pairs in [`Endpoint::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Endpoint, &str)> + '_ {
        Endpoint::ALL
            .into_iter()
            .map(move |endpoint| (endpoint, self.get(endpoint)))
    }
}

impl fmt::Debug for EndpointTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(endpoint, url)| (endpoint.name(), url)))
            .finish()
    }
}

/// Plain concatenation, no separator is added or removed
pub(crate) fn join(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}
