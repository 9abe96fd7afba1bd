//! Raw Wikipedia action API payloads
//!
//! These shapes are owned by the remote API; only the fields the normalizer
//! needs are deserialized, everything else is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// OpenSearch response: positional parallel arrays
/// `[searchString, titles, descriptions, links]`
#[derive(Debug, Clone, Deserialize)]
pub struct OpenSearchResponse(
    pub String,
    pub Vec<String>,
    pub Vec<String>,
    pub Vec<String>,
);

/// Envelope for `action=query&list=random`
#[derive(Debug, Clone, Deserialize)]
pub struct RandomResponse {
    pub query: RandomQuery,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomQuery {
    pub random: Vec<RandomPageStub>,
}

/// One random page stub as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RandomPageStub {
    pub id: u64,
    pub ns: i32,
    pub title: String,
}

/// Envelope for `action=query&prop=categories`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub query: CategoriesQuery,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesQuery {
    /// Pages keyed by internal page id
    pub pages: BTreeMap<String, PageEntry>,
}

/// Page object inside a categories response; a page with no categories
/// comes back without the `categories` key at all
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub ns: i32,
    pub title: String,
    pub timestamp: Option<String>,
}
