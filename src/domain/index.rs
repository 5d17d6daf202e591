//! Bidirectional tag index
//!
//! `TaggedIndex` keeps two maps over the same relation: tag -> values and
//! value -> tags. Every mutation leaves both maps consistent and drops any
//! entry whose set becomes empty.
//!
//! # Examples
//!
//! ```
//! use tagdex::domain::TaggedIndex;
//!
//! let mut index = TaggedIndex::new();
//! index.assign("v1", ["a", "b"]);
//! index.assign("v2", ["b"]);
//!
//! assert_eq!(index.intersect(&["a", "b"]), vec!["v1"]);
//! assert_eq!(index.exact(&["b"]), vec!["v2"]);
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// In-memory many-to-many index between tags and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedIndex<T, V>
where
    T: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    tag_to_values: HashMap<T, HashSet<V>>,
    value_to_tags: HashMap<V, HashSet<T>>,
}

impl<T, V> Default for TaggedIndex<T, V>
where
    T: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self {
            tag_to_values: HashMap::new(),
            value_to_tags: HashMap::new(),
        }
    }
}

impl<T, V> TaggedIndex<T, V>
where
    T: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tag set of `value` with exactly `tags`.
    ///
    /// Tags the value no longer carries are unlinked, and deleted from the
    /// index when no other value holds them. An empty `tags` removes the
    /// value from the index.
    pub fn assign<I>(&mut self, value: V, tags: I)
    where
        I: IntoIterator<Item = T>,
    {
        let new_tags: HashSet<T> = tags.into_iter().collect();

        if let Some(old_tags) = self.value_to_tags.remove(&value) {
            for tag in old_tags.iter().filter(|tag| !new_tags.contains(*tag)) {
                self.unlink_value_from_tag(tag, &value);
            }
        }

        if new_tags.is_empty() {
            tracing::trace!("assign left value without tags; value dropped");
            return;
        }

        for tag in &new_tags {
            self.tag_to_values
                .entry(tag.clone())
                .or_default()
                .insert(value.clone());
        }

        tracing::trace!(tags = new_tags.len(), "assigned tags to value");
        self.value_to_tags.insert(value, new_tags);
    }

    /// Add `tags` to the tag set of `value`, creating the value if needed.
    pub fn add<I>(&mut self, value: V, tags: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut tags = tags.into_iter().peekable();
        if tags.peek().is_none() {
            return;
        }

        let held = self.value_to_tags.entry(value.clone()).or_default();
        let mut added = 0usize;
        for tag in tags {
            self.tag_to_values
                .entry(tag.clone())
                .or_default()
                .insert(value.clone());
            if held.insert(tag) {
                added += 1;
            }
        }

        tracing::trace!(added, "added tags to value");
    }

    /// Unlink `tags` from `value` only. Other values keep these tags.
    ///
    /// The value leaves the index once it has no tags left.
    pub fn remove(&mut self, value: &V, tags: &[T]) {
        let Some(held) = self.value_to_tags.get_mut(value) else {
            return;
        };

        let mut unlinked = Vec::with_capacity(tags.len());
        for tag in tags {
            if held.remove(tag) {
                unlinked.push(tag);
            }
        }
        if held.is_empty() {
            self.value_to_tags.remove(value);
        }

        for tag in &unlinked {
            self.unlink_value_from_tag(tag, value);
        }

        tracing::trace!(removed = unlinked.len(), "removed tags from value");
    }

    /// Remove `value` from every tag it carries.
    ///
    /// Returns `false` if the value was not in the index.
    pub fn remove_value(&mut self, value: &V) -> bool {
        let Some(held) = self.value_to_tags.remove(value) else {
            return false;
        };

        for tag in &held {
            self.unlink_value_from_tag(tag, value);
        }
        true
    }

    /// Delete each tag from the index entirely.
    ///
    /// Values that lose their last tag this way are removed as well.
    pub fn delete_tags(&mut self, tags: &[T]) {
        for tag in tags {
            let Some(values) = self.tag_to_values.remove(tag) else {
                continue;
            };

            for value in &values {
                if let Some(held) = self.value_to_tags.get_mut(value) {
                    held.remove(tag);
                    if held.is_empty() {
                        self.value_to_tags.remove(value);
                    }
                }
            }

            tracing::debug!(values = values.len(), "deleted tag");
        }
    }

    /// Remove every tag and value
    pub fn clear(&mut self) {
        self.tag_to_values.clear();
        self.value_to_tags.clear();
    }

    /// Tags currently carried by `value`, empty if unknown.
    pub fn tags_of(&self, value: &V) -> Vec<T> {
        self.value_to_tags
            .get(value)
            .map(|tags| tags.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Values currently carrying `tag`, empty if unknown.
    pub fn values_of(&self, tag: &T) -> Vec<V> {
        self.tag_to_values
            .get(tag)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// True when `value` carries every tag in `tags`.
    ///
    /// An empty `tags` is vacuously true, even for unknown values.
    pub fn has_tags(&self, value: &V, tags: &[T]) -> bool {
        if tags.is_empty() {
            return true;
        }

        match self.value_to_tags.get(value) {
            Some(held) => tags.iter().all(|tag| held.contains(tag)),
            None => false,
        }
    }

    pub fn all_tags(&self) -> Vec<T> {
        self.tag_to_values.keys().cloned().collect()
    }

    pub fn all_values(&self) -> Vec<V> {
        self.value_to_tags.keys().cloned().collect()
    }

    pub fn contains_tag(&self, tag: &T) -> bool {
        self.tag_to_values.contains_key(tag)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.value_to_tags.contains_key(value)
    }

    pub fn tag_count(&self) -> usize {
        self.tag_to_values.len()
    }

    pub fn value_count(&self) -> usize {
        self.value_to_tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value_to_tags.is_empty()
    }

    /// Values carrying all of `tags`. An empty `tags` yields nothing.
    pub fn intersect(&self, tags: &[T]) -> Vec<V> {
        self.intersect_set(tags).into_iter().cloned().collect()
    }

    /// Values carrying any of `tags`, without duplicates.
    pub fn union(&self, tags: &[T]) -> Vec<V> {
        let mut result: HashSet<&V> = HashSet::new();
        for tag in tags {
            if let Some(values) = self.tag_to_values.get(tag) {
                result.extend(values);
            }
        }
        result.into_iter().cloned().collect()
    }

    /// Values whose whole tag set is exactly `tags`.
    pub fn exact(&self, tags: &[T]) -> Vec<V> {
        let wanted = tags.iter().collect::<HashSet<_>>().len();

        self.intersect_set(tags)
            .into_iter()
            .filter(|value| {
                self.value_to_tags
                    .get(*value)
                    .is_some_and(|held| held.len() == wanted)
            })
            .cloned()
            .collect()
    }

    /// Values tagged `from` that carry none of `excluding`.
    pub fn difference(&self, from: &T, excluding: &[T]) -> Vec<V> {
        self.difference_set(from, excluding.iter())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Values that do not carry `from`.
    pub fn complement(&self, from: &T) -> Vec<V> {
        let tagged = self.tag_to_values.get(from);
        self.value_to_tags
            .keys()
            .filter(|value| !tagged.is_some_and(|values| values.contains(*value)))
            .cloned()
            .collect()
    }

    /// Union over each `t` in `tags` of the values tagged `t` and none of
    /// the other listed tags.
    ///
    /// A value carrying two or more of the listed tags is never returned.
    pub fn symmetric_difference(&self, tags: &[T]) -> Vec<V> {
        let distinct: Vec<&T> = {
            let mut seen = HashSet::new();
            tags.iter().filter(|tag| seen.insert(*tag)).collect()
        };

        let mut result: HashSet<&V> = HashSet::new();
        for (position, tag) in distinct.iter().enumerate() {
            let others = distinct
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != position)
                .map(|(_, other_tag)| *other_tag);
            result.extend(self.difference_set(tag, others));
        }
        result.into_iter().cloned().collect()
    }

    fn intersect_set(&self, tags: &[T]) -> HashSet<&V> {
        let Some((first, rest)) = tags.split_first() else {
            return HashSet::new();
        };

        let mut result: HashSet<&V> = match self.tag_to_values.get(first) {
            Some(values) => values.iter().collect(),
            None => return HashSet::new(),
        };

        for tag in rest {
            match self.tag_to_values.get(tag) {
                Some(values) => result.retain(|value| values.contains(*value)),
                None => return HashSet::new(),
            }
            if result.is_empty() {
                break;
            }
        }
        result
    }

    fn difference_set<'a, I>(&self, from: &T, excluding: I) -> HashSet<&V>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let Some(values) = self.tag_to_values.get(from) else {
            return HashSet::new();
        };

        let mut result: HashSet<&V> = values.iter().collect();
        for tag in excluding {
            if let Some(excluded) = self.tag_to_values.get(tag) {
                result.retain(|value| !excluded.contains(*value));
            }
        }
        result
    }

    fn unlink_value_from_tag(&mut self, tag: &T, value: &V) {
        if let Some(values) = self.tag_to_values.get_mut(tag) {
            values.remove(value);
            if values.is_empty() {
                self.tag_to_values.remove(tag);
            }
        }
    }
}
