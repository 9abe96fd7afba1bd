//! Action service
//!
//! One method per supported action API operation. Each call merges caller
//! options over the defaults table, issues exactly one GET, and normalizes
//! the response. No caching, no retries, no cross-call state.

use crate::config::Settings;
use crate::models::options::{CategoriesOptions, OpenSearchOptions, RandomOptions};
use crate::models::results::{CategoryMap, OpenSearchResult, RandomPage};
use crate::models::wikipedia::{CategoriesResponse, OpenSearchResponse, RandomResponse};
use crate::models::Language;
use crate::services::{client::WikiClient, normalizer, params};
use crate::utils::error::AppResult;
use anyhow::Result;
use tracing::debug;

/// Wikipedia action API façade
#[derive(Debug, Clone)]
pub struct WikiActions {
    client: WikiClient,
}

impl WikiActions {
    /// Create a new action service instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = WikiClient::new(settings)?;
        Ok(Self { client })
    }

    /// Search the wiki using the OpenSearch protocol.
    ///
    /// An empty search string is a valid (likely zero-result) query and is
    /// not rejected. The result list is at most `limit` entries long, in the
    /// order returned by the remote service.
    pub async fn open_search(
        &self,
        language: Language,
        search_string: &str,
        options: &OpenSearchOptions,
    ) -> AppResult<Vec<OpenSearchResult>> {
        debug!("openSearch({:?}, {:?})", language, search_string);

        let params = params::open_search(search_string, options);
        let raw: OpenSearchResponse = self.client.get(language, &params).await?;

        Ok(normalizer::open_search(raw))
    }

    /// Get a set of random pages.
    pub async fn random(
        &self,
        language: Language,
        options: &RandomOptions,
    ) -> AppResult<Vec<RandomPage>> {
        debug!("random({:?})", language);

        let params = params::random(options);
        let raw: RandomResponse = self.client.get(language, &params).await?;

        Ok(normalizer::random(raw))
    }

    /// List all categories the pages matching `title` belong to.
    pub async fn categories(
        &self,
        language: Language,
        title: &str,
        options: &CategoriesOptions,
    ) -> AppResult<CategoryMap> {
        debug!("categories({:?}, {:?})", language, title);

        let params = params::categories(title, options);
        let raw: CategoriesResponse = self.client.get(language, &params).await?;

        Ok(normalizer::categories(raw))
    }
}
