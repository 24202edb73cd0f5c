//! Ingredient records.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::tags::{Category, Tag};

/// An immutable ingredient record, created once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Unique identifier within a catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub tags: HashSet<Tag>,
    #[serde(default)]
    pub categories: HashSet<Category>,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tags: HashSet::new(),
            categories: HashSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories.extend(categories);
        self
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn is_in(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    /// True when none of this ingredient's tags are in `dislikes`.
    pub fn is_acceptable_to(&self, dislikes: &HashSet<Tag>) -> bool {
        self.tags.is_disjoint(dislikes)
    }
}
