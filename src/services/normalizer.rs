//! Response normalizer
//!
//! Pure, synchronous reshaping of raw action API payloads into the typed
//! output contract. One function per action, no shared state.

use crate::models::results::{Category, CategoryMap, OpenSearchResult, RandomPage};
use crate::models::wikipedia::{CategoriesResponse, OpenSearchResponse, RandomResponse};
use tracing::warn;

/// Zip the positional parallel arrays of an openSearch response into records.
///
/// The remote contract leaves mismatched array lengths undefined; the policy
/// here is to truncate to the shortest array rather than fail or pad.
pub fn open_search(raw: OpenSearchResponse) -> Vec<OpenSearchResult> {
    let OpenSearchResponse(_search, titles, descriptions, links) = raw;

    let len = titles.len().min(descriptions.len()).min(links.len());
    if titles.len() != len || descriptions.len() != len || links.len() != len {
        warn!(
            "openSearch arrays have mismatched lengths ({}/{}/{}), truncating to {}",
            titles.len(),
            descriptions.len(),
            links.len(),
            len
        );
    }

    titles
        .into_iter()
        .zip(descriptions)
        .zip(links)
        .map(|((title, description), link)| OpenSearchResult {
            title,
            description,
            link,
        })
        .collect()
}

/// Map random page stubs to `{id, namespace, title}` records 1:1
pub fn random(raw: RandomResponse) -> Vec<RandomPage> {
    raw.query
        .random
        .into_iter()
        .map(|stub| RandomPage {
            id: stub.id,
            namespace: stub.ns,
            title: stub.title,
        })
        .collect()
}

/// Reshape a categories response into a page-id → category-list mapping.
///
/// Pages without a `categories` key yield an empty list, never an absent
/// entry. All other page fields are dropped.
pub fn categories(raw: CategoriesResponse) -> CategoryMap {
    raw.query
        .pages
        .into_iter()
        .map(|(page_id, page)| {
            let categories = page
                .categories
                .into_iter()
                .map(|entry| Category {
                    namespace: entry.ns,
                    title: entry.title,
                    timestamp: entry.timestamp,
                })
                .collect();
            (page_id, categories)
        })
        .collect()
}
