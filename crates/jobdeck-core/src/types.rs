//! Core types for jobdeck-core.
//!
//! This module defines the data structures shared across all layers: the
//! canonical [`JobRecord`], the listing envelope [`JobsPage`], and the
//! [`FavoriteContext`] discriminant.

use serde::{Deserialize, Serialize};

/// A canonical job record produced by the normalizer and consumed by all
/// presentation code.
///
/// `id`, `title`, and `url` are always non-empty after normalization, even
/// when the raw payload lacks all three. Optional fields use `None` as the
/// single absent-marker; they are never an empty string, and `tags` is never
/// `Some` of an empty vec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Stable identity. Resolved from the raw payload or synthesized.
    pub id: String,
    /// Job title. Falls back to a placeholder label when the payload has none.
    pub title: String,
    /// Hiring company name.
    pub company: Option<String>,
    /// Job category (e.g. "Software Development").
    pub category: Option<String>,
    /// Employment type (e.g. "full_time").
    pub job_type: Option<String>,
    /// Required candidate location.
    pub location: Option<String>,
    /// Link to the posting. Falls back to `"#"` when no usable URL exists.
    pub url: String,
    /// Publication date string, kept verbatim from the payload.
    pub published_at: Option<String>,
    /// Whether the job is in the user's favorites. Defaults per
    /// [`FavoriteContext`] when the payload carries no flag.
    pub is_favorite: bool,
    /// Skill tags. Only string elements survive normalization.
    pub tags: Option<Vec<String>>,
}

impl JobRecord {
    /// Best-effort parse of [`published_at`](Self::published_at) for display.
    ///
    /// Tries RFC 3339, then `%Y-%m-%dT%H:%M:%S`, then a bare `%Y-%m-%d`.
    /// Returns `None` when the field is absent or matches no format; the
    /// stored string is never modified.
    pub fn published_date(&self) -> Option<chrono::NaiveDate> {
        let raw = self.published_at.as_deref()?;
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
            return Some(dt.date());
        }
        chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// One entry of the category listing used to drive search filters.
///
/// `value` is the machine slug passed back as a query filter; `label` is the
/// human-readable name. When the upstream payload has only one of the two,
/// the normalizer fills the other from it, so both are always non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub label: String,
}

/// One page of normalized job listings, with envelope metadata.
///
/// Metadata fields are tolerant: when the raw envelope omits or mistypes one,
/// the normalizer substitutes a value derived from the item count rather than
/// failing. See [`normalize_page`](crate::normalizer::normalize_page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobsPage {
    pub items: Vec<JobRecord>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
}

/// Which listing surface a payload is being normalized for.
///
/// The upstream favorites listing historically omits the favorite flag on
/// records that are, by construction, favorited; every other surface omits it
/// on records that are not. The normalizer therefore takes the default from
/// the call site instead of hard-coding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteContext {
    /// Search results, detail pages, anything that is not the favorites list.
    Listing,
    /// The favorites listing itself.
    Favorites,
}

impl FavoriteContext {
    /// The favorite-flag default applied when the raw payload has no usable
    /// value for it.
    pub fn default_flag(self) -> bool {
        match self {
            FavoriteContext::Listing => false,
            FavoriteContext::Favorites => true,
        }
    }
}

impl std::fmt::Display for FavoriteContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoriteContext::Listing => write!(f, "listing"),
            FavoriteContext::Favorites => write!(f, "favorites"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
