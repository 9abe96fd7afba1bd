//! GraphQL schema module
//!
//! Exposes the action API operations as resolvers on `Query.wikipedia`

use crate::models::options::{CategoriesOptions, OpenSearchOptions, RandomOptions};
use crate::models::results::{OpenSearchResult, PageCategories, RandomPage};
use crate::models::Language;
use crate::services::WikiActions;
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};

/// Application schema type
pub type WikiSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema with the action service attached as context data
pub fn build_schema(actions: WikiActions) -> WikiSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(actions)
        .finish()
}

/// Root query object
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Wikipedia action API for the selected language edition
    async fn wikipedia(
        &self,
        #[graphql(default_with = "Language::En")] language: Language,
    ) -> Actions {
        Actions { language }
    }
}

/// Action API operations, bound to one language edition
pub struct Actions {
    language: Language,
}

#[Object]
impl Actions {
    /// Search the wiki using the OpenSearch protocol
    async fn open_search(
        &self,
        ctx: &Context<'_>,
        search_string: String,
        options: Option<OpenSearchOptions>,
    ) -> Result<Vec<OpenSearchResult>> {
        let actions = ctx.data_unchecked::<WikiActions>();
        let options = options.unwrap_or_default();
        Ok(actions
            .open_search(self.language, &search_string, &options)
            .await?)
    }

    /// Get a set of random pages
    async fn random(
        &self,
        ctx: &Context<'_>,
        options: Option<RandomOptions>,
    ) -> Result<Vec<RandomPage>> {
        let actions = ctx.data_unchecked::<WikiActions>();
        let options = options.unwrap_or_default();
        Ok(actions.random(self.language, &options).await?)
    }

    /// List all categories the pages matching `title` belong to
    async fn categories(
        &self,
        ctx: &Context<'_>,
        title: String,
        options: Option<CategoriesOptions>,
    ) -> Result<Vec<PageCategories>> {
        let actions = ctx.data_unchecked::<WikiActions>();
        let options = options.unwrap_or_default();
        let map = actions.categories(self.language, &title, &options).await?;
        Ok(PageCategories::from_map(map))
    }
}
