//! Static raw-payload corpora used across the harness.
//!
//! Each corpus is a `&'static str` of JSON captured from the shapes the
//! backend has actually emitted over time: bare arrays, `items`/`jobs`/`data`
//! wrappers, mixed field-name spellings, and junk elements.

use serde_json::Value;

/// Parse a corpus string. Panics on invalid JSON; fixtures are hand-written
/// and must stay valid.
pub fn payload(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture must be valid JSON")
}

/// A listing envelope in the current backend shape: `items` wrapper plus full
/// pagination metadata, records with canonical field names.
pub const ENVELOPE_CURRENT: &str = r#"{
    "items": [
        {
            "id": 101,
            "title": "Senior Rust Engineer",
            "company": "Acme",
            "category": "Software Development",
            "job_type": "full_time",
            "location": "Remote (EU)",
            "url": "https://example.com/jobs/101",
            "published_at": "2024-03-01T12:00:00+00:00",
            "is_favorite": false,
            "tags": ["rust", "tokio"]
        },
        {
            "id": 102,
            "title": "Platform Engineer",
            "company": "Globex",
            "url": "https://example.com/jobs/102",
            "published_at": "2024-02-28"
        }
    ],
    "total": 240,
    "page": 3,
    "per_page": 2,
    "total_pages": 120
}"#;

/// An older upstream shape: `jobs` wrapper, `job-count` total, aggregator
/// field spellings (`company_name`, `candidate_required_location`,
/// `publication_date`).
pub const ENVELOPE_LEGACY: &str = r#"{
    "jobs": [
        {
            "remotive_id": 9001,
            "title": "Backend Developer",
            "company_name": "Initech",
            "candidate_required_location": "Worldwide",
            "job_url": "https://example.com/jobs/9001",
            "publication_date": "2024-01-15T08:30:00",
            "skills": ["go", "postgres"]
        },
        {
            "slug": "data-eng-42",
            "position": "Data Engineer",
            "companyName": "Umbrella",
            "country": "BR",
            "href": "https://example.com/jobs/data-eng-42",
            "created_at": "2024-01-10",
            "keywords": ["python"]
        }
    ],
    "job-count": 2
}"#;

/// A favorites response in the bare-array shape, with junk elements mixed in
/// and a record carrying no id-like field at all.
pub const FAVORITES_BARE: &str = r#"[
    { "id": "fav-1", "title": "Engineer", "company_name": "Acme" },
    "corrupted-entry",
    42,
    { "title": "Mystery role", "tags": [] },
    null,
    { "id": "fav-2", "title": "Designer", "is_favorite": false }
]"#;

/// Degenerate payloads that must normalize to an empty sequence, not an
/// error.
pub const NON_COLLECTIONS: &[&str] = &[
    r#"{"items": []}"#,
    r#"{"detail": "rate limited"}"#,
    r#""service unavailable""#,
    "42",
    "null",
    "true",
];
