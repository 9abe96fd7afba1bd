//! Per-action option inputs and their default-value tables
//!
//! Every option field is optional; a field the caller leaves out falls back
//! to the entry in the action's defaults table. An explicitly supplied value
//! always wins, including `false` and `0`.

use async_graphql::{Enum, InputObject};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Search profile used by the OpenSearch action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum SearchProfile {
    /// Strict profile with few punctuation characters removed but diacritics and stress marks are kept
    Strict,
    /// Few punctuation characters, some diacritics and stopwords removed
    Normal,
    /// Similar to normal with typo correction (two typos supported)
    Fuzzy,
    /// Experimental fuzzy profile (may be removed at any time)
    FastFuzzy,
    /// Classic prefix, few punctuation characters and some diacritics removed
    Classic,
    /// Let the search engine decide on the best profile to use
    EngineAutoselect,
}

impl SearchProfile {
    /// Wire value expected by the action API
    pub fn as_param(&self) -> &'static str {
        match self {
            SearchProfile::Strict => "strict",
            SearchProfile::Normal => "normal",
            SearchProfile::Fuzzy => "fuzzy",
            SearchProfile::FastFuzzy => "fast-fuzzy",
            SearchProfile::Classic => "classic",
            SearchProfile::EngineAutoselect => "engine_autoselect",
        }
    }
}

/// How the random action filters redirect pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum RedirectFilter {
    /// Include both redirects and non-redirects
    All,
    /// Only redirects
    Redirects,
    /// Only non-redirect pages
    Nonredirects,
}

impl RedirectFilter {
    pub fn as_param(&self) -> &'static str {
        match self {
            RedirectFilter::All => "all",
            RedirectFilter::Redirects => "redirects",
            RedirectFilter::Nonredirects => "nonredirects",
        }
    }
}

/// Listing direction for category results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    Ascending,
    Descending,
}

impl ListOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            ListOrder::Ascending => "ascending",
            ListOrder::Descending => "descending",
        }
    }
}

/// Customize openSearch behaviours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, InputObject)]
pub struct OpenSearchOptions {
    /// Namespaces to search. Default: 0
    pub namespace: Option<u32>,
    /// Maximum number of results to return. Default: 10
    pub limit: Option<u32>,
    /// Search profile to use. Default: ENGINE_AUTOSELECT
    pub profile: Option<SearchProfile>,
    /// Enable OpenSearch suggestions requested by MediaWiki. Default: true
    pub suggest: Option<bool>,
    /// Return API warnings as an error instead of ignoring them. Default: false
    pub warningaserror: Option<bool>,
}

/// Customize random page retrieval behaviours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, InputObject)]
pub struct RandomOptions {
    /// Return pages in this namespace only. Default: all namespaces
    pub namespace: Option<u32>,
    /// How to filter for redirects. Default: NONREDIRECTS
    pub filter_redirect: Option<RedirectFilter>,
    /// Maximum number of results to return. Default: 10
    pub limit: Option<u32>,
}

/// Customize category listing behaviours
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, InputObject)]
pub struct CategoriesOptions {
    /// Maximum number of results to return. Default: 10
    pub limit: Option<u32>,
    /// Annotate each category with the time it was added. Default: false
    pub timestamp: Option<bool>,
    /// The direction in which to list. Default: ASCENDING
    pub order: Option<ListOrder>,
}

/// Fully populated defaults for the openSearch action
#[derive(Debug, Clone)]
pub struct OpenSearchDefaults {
    pub namespace: u32,
    pub limit: u32,
    pub profile: SearchProfile,
    pub suggest: bool,
    pub warningaserror: bool,
}

/// Fully populated defaults for the random action
#[derive(Debug, Clone)]
pub struct RandomDefaults {
    /// Wire value for "all namespaces"
    pub namespace: &'static str,
    pub filter_redirect: RedirectFilter,
    pub limit: u32,
}

/// Fully populated defaults for the categories action
#[derive(Debug, Clone)]
pub struct CategoriesDefaults {
    pub limit: u32,
    pub timestamp: bool,
    pub order: ListOrder,
}

/// Process-wide defaults table for openSearch; initialized once, never mutated
pub static OPEN_SEARCH_DEFAULTS: Lazy<OpenSearchDefaults> = Lazy::new(|| OpenSearchDefaults {
    namespace: 0,
    limit: 10,
    profile: SearchProfile::EngineAutoselect,
    suggest: true,
    warningaserror: false,
});

/// Process-wide defaults table for random; initialized once, never mutated
pub static RANDOM_DEFAULTS: Lazy<RandomDefaults> = Lazy::new(|| RandomDefaults {
    namespace: "*",
    filter_redirect: RedirectFilter::Nonredirects,
    limit: 10,
});

/// Process-wide defaults table for categories; initialized once, never mutated
pub static CATEGORIES_DEFAULTS: Lazy<CategoriesDefaults> = Lazy::new(|| CategoriesDefaults {
    limit: 10,
    timestamp: false,
    order: ListOrder::Ascending,
});
