//! Filtering and ordering options for post listings

use std::str::FromStr;

use crate::error::DomainError;

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostSort {
    /// Newest first
    #[default]
    Recent,
    /// Highest score first, ties broken by newest
    Top,
}

impl FromStr for PostSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(Self::Recent),
            "top" => Ok(Self::Top),
            other => Err(DomainError::InvalidSort(other.to_string())),
        }
    }
}

/// Post listing filter. Empty filter matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub author_id: Option<i64>,
    /// Case-insensitive substring matched against title or content
    pub keyword: Option<String>,
}

impl PostFilter {
    pub fn by_author(author_id: i64) -> Self {
        Self {
            author_id: Some(author_id),
            keyword: None,
        }
    }

    /// Builder-style keyword setter. An all-blank keyword is dropped; any
    /// other keyword is kept verbatim, surrounding spaces included.
    pub fn with_keyword(mut self, keyword: Option<String>) -> Self {
        self.keyword = keyword.filter(|k| !k.trim().is_empty());
        self
    }
}
