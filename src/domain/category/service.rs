// src/domain/category/service.rs
use std::sync::Arc;

use percent_encoding::percent_decode_str;

use crate::domain::category::entity::Category;
use crate::domain::category::path::CategoryBreadcrumb;
use crate::domain::category::repository::CategoryPathRepository;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service for hierarchical category URLs and breadcrumb trails.
///
/// Trusts the paths the repository returns; depth limits are enforced when
/// hierarchies are persisted, not here.
pub struct CategoryPathService {
    repository: Arc<dyn CategoryPathRepository>,
}

impl CategoryPathService {
    #[must_use]
    pub fn new(repository: Arc<dyn CategoryPathRepository>) -> Self {
        Self { repository }
    }

    /// Renders the category hierarchy as a slash-joined slug path.
    pub async fn build_url(&self, id: &CategoryId) -> DomainResult<String> {
        let path = self.repository.build_path(id).await?;
        Ok(path.to_string())
    }

    /// Resolves a URL path back to the category it addresses.
    pub async fn parse_url(&self, url_path: &str) -> DomainResult<Category> {
        const OP: &str = "CategoryPathService::parse_url";

        let trimmed = url_path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(DomainError::invalid(OP, "Empty category path."));
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            match decode_segment(segment) {
                Some(decoded) => segments.push(decoded),
                None => {
                    tracing::debug!(segment, "rejected malformed URL segment");
                    return Err(DomainError::invalid(
                        OP,
                        format!("Invalid URL segment: {segment}."),
                    ));
                }
            }
        }

        match self.repository.find_by_path(&segments).await? {
            Some(category) => Ok(category),
            None => {
                tracing::debug!(path = trimmed, "no category at path");
                Err(DomainError::not_found(
                    OP,
                    format!("No category at path '{trimmed}'."),
                ))
            }
        }
    }

    /// Maps the category hierarchy onto a navigation trail.
    pub async fn breadcrumbs(&self, id: &CategoryId) -> DomainResult<Vec<CategoryBreadcrumb>> {
        let path = self.repository.build_path(id).await?;
        let last = path.len().saturating_sub(1);

        Ok(path
            .iter()
            .cloned()
            .enumerate()
            .map(|(level, category)| CategoryBreadcrumb {
                category,
                is_last: level == last,
                level,
            })
            .collect())
    }
}

/// Percent-decodes one URL segment, rejecting malformed escapes and
/// non-UTF-8 payloads.
fn decode_segment(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if !(bytes.get(i + 1)?.is_ascii_hexdigit() && bytes.get(i + 2)?.is_ascii_hexdigit()) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_segment_handles_escapes() {
        assert_eq!(decode_segment("a1"), Some("a1".to_string()));
        assert_eq!(decode_segment("caf%C3%A9"), Some("café".to_string()));
        assert_eq!(decode_segment("%zz"), None);
        assert_eq!(decode_segment("trailing%2"), None);
        assert_eq!(decode_segment("%FF"), None);
    }
}
