//! Normalized results returned to GraphQL callers

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One openSearch hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct OpenSearchResult {
    /// Search result title
    pub title: String,
    /// A short description around the search result
    pub description: String,
    /// Link to the actual article
    pub link: String,
}

/// One random page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct RandomPage {
    /// Internal page id
    pub id: u64,
    /// Namespace the page lives in
    pub namespace: i32,
    /// Page title
    pub title: String,
}

/// One category a page belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct Category {
    /// Namespace of the category page (14 for categories)
    pub namespace: i32,
    /// Category title
    pub title: String,
    /// When the category was added, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Mapping from internal page id to the categories that page belongs to
pub type CategoryMap = BTreeMap<String, Vec<Category>>;

/// GraphQL-friendly view of one `CategoryMap` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
pub struct PageCategories {
    /// Internal page id
    pub page_id: String,
    /// Categories the page belongs to; empty when the page has none
    pub categories: Vec<Category>,
}

impl PageCategories {
    /// Flatten a category mapping into a list, preserving page-id order
    pub fn from_map(map: CategoryMap) -> Vec<Self> {
        map.into_iter()
            .map(|(page_id, categories)| PageCategories {
                page_id,
                categories,
            })
            .collect()
    }
}
