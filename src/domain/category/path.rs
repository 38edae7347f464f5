// src/domain/category/path.rs
use std::fmt;

use crate::domain::category::entity::Category;

/// Maximum number of levels in the category hierarchy (level, skill, topic).
pub const MAX_CATEGORY_DEPTH: usize = 3;

/// Complete hierarchy trail from a root category down to a target leaf.
///
/// Renders as a slash-joined slug path like `a1/comprehension-ecrite/sports`
/// for routing and breadcrumb navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPath(Vec<Category>);

impl CategoryPath {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self(categories)
    }

    /// Hierarchy level of the leaf, counted from zero.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether the path stays within the configured hierarchy limit.
    #[must_use]
    pub fn is_valid_depth(&self) -> bool {
        self.0.len() <= MAX_CATEGORY_DEPTH
    }

    /// The most specific category in the path.
    #[must_use]
    pub fn leaf(&self) -> Option<&Category> {
        self.0.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for category in &self.0 {
            if !first {
                f.write_str("/")?;
            }
            f.write_str(category.slug.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<Category>> for CategoryPath {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl<'a> IntoIterator for &'a CategoryPath {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One element of a navigation trail.
#[derive(Debug, Clone)]
pub struct CategoryBreadcrumb {
    pub category: Category,
    /// True for the terminal node of the trail.
    pub is_last: bool,
    /// Zero-based level in the hierarchy.
    pub level: usize,
}
