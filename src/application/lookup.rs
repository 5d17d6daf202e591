//! Set-algebra lookups use case

use crate::application::index_source::LoadedIndex;

/// A set-algebra lookup over tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOperation {
    Intersect(Vec<String>),
    Union(Vec<String>),
    Exact(Vec<String>),
    Difference { from: String, excluding: Vec<String> },
    Complement(String),
    SymmetricDifference(Vec<String>),
}

/// Service answering lookups against a loaded index.
/// Every result is sorted so output is stable.
pub struct LookupService {
    loaded: LoadedIndex,
}

impl LookupService {
    pub fn new(loaded: LoadedIndex) -> Self {
        LookupService { loaded }
    }

    /// Tags of one value, or every tag when `value` is None
    pub fn tags(&self, value: Option<&str>) -> Vec<String> {
        let tags = match value {
            Some(value) => self.loaded.index.tags_of(&value.to_string()),
            None => self.loaded.index.all_tags(),
        };
        sorted(tags)
    }

    /// Values of one tag, or every value when `tag` is None
    pub fn values(&self, tag: Option<&str>) -> Vec<String> {
        let values = match tag {
            Some(tag) => self.loaded.index.values_of(&self.loaded.normalize_tag(tag)),
            None => self.loaded.index.all_values(),
        };
        sorted(values)
    }

    pub fn has_tags(&self, value: &str, tags: &[String]) -> bool {
        self.loaded
            .index
            .has_tags(&value.to_string(), &self.loaded.normalize_tags(tags))
    }

    pub fn execute(&self, operation: &SetOperation) -> Vec<String> {
        let index = &self.loaded.index;
        let values = match operation {
            SetOperation::Intersect(tags) => index.intersect(&self.loaded.normalize_tags(tags)),
            SetOperation::Union(tags) => index.union(&self.loaded.normalize_tags(tags)),
            SetOperation::Exact(tags) => index.exact(&self.loaded.normalize_tags(tags)),
            SetOperation::Difference { from, excluding } => index.difference(
                &self.loaded.normalize_tag(from),
                &self.loaded.normalize_tags(excluding),
            ),
            SetOperation::Complement(tag) => index.complement(&self.loaded.normalize_tag(tag)),
            SetOperation::SymmetricDifference(tags) => {
                index.symmetric_difference(&self.loaded.normalize_tags(tags))
            }
        };

        tracing::debug!(?operation, matched = values.len(), "lookup finished");
        sorted(values)
    }
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items
}
