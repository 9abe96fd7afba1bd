//! Outbound query parameter builders
//!
//! One pure function per action. Caller-supplied option fields override the
//! defaults table by presence: `Some(false)` and `Some(0)` are honored, only
//! `None` falls back to the default.

use crate::models::options::{
    CategoriesOptions, OpenSearchOptions, RandomOptions, CATEGORIES_DEFAULTS,
    OPEN_SEARCH_DEFAULTS, RANDOM_DEFAULTS,
};

/// Query pair list sent to the action API
pub type ParamList = Vec<(&'static str, String)>;

/// Build parameters for `action=opensearch`
pub fn open_search(search_string: &str, options: &OpenSearchOptions) -> ParamList {
    let defaults = &*OPEN_SEARCH_DEFAULTS;

    vec![
        ("action", "opensearch".to_string()),
        ("format", "json".to_string()),
        ("search", search_string.to_string()),
        (
            "namespace",
            options.namespace.unwrap_or(defaults.namespace).to_string(),
        ),
        ("limit", options.limit.unwrap_or(defaults.limit).to_string()),
        (
            "profile",
            options
                .profile
                .unwrap_or(defaults.profile)
                .as_param()
                .to_string(),
        ),
        (
            "suggest",
            options.suggest.unwrap_or(defaults.suggest).to_string(),
        ),
        (
            "warningaserror",
            options
                .warningaserror
                .unwrap_or(defaults.warningaserror)
                .to_string(),
        ),
    ]
}

/// Build parameters for `action=query&list=random`
pub fn random(options: &RandomOptions) -> ParamList {
    let defaults = &*RANDOM_DEFAULTS;

    vec![
        ("action", "query".to_string()),
        ("format", "json".to_string()),
        ("list", "random".to_string()),
        (
            "rnnamespace",
            options
                .namespace
                .map(|ns| ns.to_string())
                .unwrap_or_else(|| defaults.namespace.to_string()),
        ),
        (
            "rnfilterredir",
            options
                .filter_redirect
                .unwrap_or(defaults.filter_redirect)
                .as_param()
                .to_string(),
        ),
        (
            "rnlimit",
            options.limit.unwrap_or(defaults.limit).to_string(),
        ),
    ]
}

/// Build parameters for `action=query&prop=categories`
pub fn categories(title: &str, options: &CategoriesOptions) -> ParamList {
    let defaults = &*CATEGORIES_DEFAULTS;

    let mut params = vec![
        ("action", "query".to_string()),
        ("format", "json".to_string()),
        ("prop", "categories".to_string()),
        ("titles", title.to_string()),
        (
            "cllimit",
            options.limit.unwrap_or(defaults.limit).to_string(),
        ),
        (
            "cldir",
            options
                .order
                .unwrap_or(defaults.order)
                .as_param()
                .to_string(),
        ),
    ];

    // clprop is only sent when timestamp annotation is requested
    if options.timestamp.unwrap_or(defaults.timestamp) {
        params.push(("clprop", "timestamp".to_string()));
    }

    params
}
