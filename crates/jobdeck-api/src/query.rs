//! Listing query parameters for the jobs endpoint.

/// Search/filter/pagination parameters for [`JobsClient::list_jobs`].
///
/// Absent fields are omitted from the query string entirely rather than sent
/// as empty values; the backend treats a present-but-empty `q` as a search
/// for the empty string.
///
/// [`JobsClient::list_jobs`]: crate::client::JobsClient::list_jobs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Free-text search term.
    pub q: Option<String>,
    /// Category slug or display name.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub per_page: Option<u32>,
}

impl JobQuery {
    /// Render as query-string pairs, omitting absent fields.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.q {
            params.push(("q", q.clone()));
        }
        if let Some(category) = &self.category {
            params.push(("category", category.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
