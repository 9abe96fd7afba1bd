//! Data models module
//!
//! Defines option inputs, raw Wikipedia API payloads, and normalized results

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

pub mod options;
pub mod results;
pub mod wikipedia;

/// Language edition of Wikipedia to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English Wikipedia (en.wikipedia.org)
    En,
    /// Dutch Wikipedia (nl.wikipedia.org)
    Nl,
}

impl Language {
    /// Subdomain code used in the endpoint URL
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}
