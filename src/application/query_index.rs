//! Boolean tag query use case

use crate::application::index_source::LoadedIndex;
use crate::domain::TagQuery;
use crate::error::Result;

/// Service evaluating boolean tag queries against a loaded index
pub struct QueryService {
    loaded: LoadedIndex,
}

impl QueryService {
    pub fn new(loaded: LoadedIndex) -> Self {
        QueryService { loaded }
    }

    /// Parse `expression` and return the matching values, sorted
    pub fn execute(&self, expression: &str) -> Result<Vec<String>> {
        let mut query = TagQuery::parse(expression)?;
        if self.loaded.config.case_insensitive {
            query = query.lowercased();
        }

        for tag in query.tags() {
            if !self.loaded.index.contains_tag(&tag.to_string()) {
                tracing::info!(tag, "query references a tag with no values");
            }
        }

        let mut values: Vec<String> = query.evaluate(&self.loaded.index).into_iter().collect();
        values.sort();

        tracing::debug!(query = %query, matched = values.len(), "query evaluated");
        Ok(values)
    }
}
