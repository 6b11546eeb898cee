//! Normalizer — reconciles raw, weakly-typed job API payloads into canonical
//! [`JobRecord`] values.
//!
//! The upstream API has historically emitted several field-name variants for
//! the same concept (`company` vs `company_name`, `published_at` vs
//! `created_at` vs `posted_at`, …) and two collection shapes (a bare array,
//! or a wrapper object holding one). Every canonical field is therefore
//! resolved through a fixed, priority-ordered candidate list; the first
//! candidate yielding a usable value wins.
//!
//! | canonical field | candidates (in order)                               | fallback            |
//! |-----------------|-----------------------------------------------------|---------------------|
//! | `id`            | `id`, `remotive_id`, `uuid`, `slug`                 | synthesized         |
//! | `title`         | `title`, `position`                                 | `"Untitled role"`   |
//! | `company`       | `company`, `company_name`, `companyName`            | absent              |
//! | `category`      | `category`, `job_category`                          | absent              |
//! | `job_type`      | `job_type`, `type`                                  | absent              |
//! | `location`      | `location`, `candidate_required_location`, `country`| absent              |
//! | `url`           | `url`, `job_url`, `href`                            | `"#"`               |
//! | `published_at`  | `published_at`, `created_at`, `posted_at`, `publication_date` | absent    |
//! | `tags`          | `tags`, `skills`, `keywords`                        | absent              |
//!
//! Normalization never fails: malformed or missing fields degrade to
//! defaults, non-object elements are dropped from collections, and a
//! non-collection input normalizes to an empty sequence. There is no error
//! channel — the point of this layer is to make partial data renderable, not
//! to report malformedness.
//!
//! Everything here is pure and synchronous. The only capability is
//! [`IdSource`], injected so that identifier synthesis is deterministic in
//! tests.

use serde_json::{Map, Value};

use crate::types::{Category, FavoriteContext, JobRecord, JobsPage};

/// Placeholder title for payloads that carry no usable title field.
pub const FALLBACK_TITLE: &str = "Untitled role";

/// Placeholder link target for payloads that carry no usable URL field.
pub const FALLBACK_URL: &str = "#";

const ID_FIELDS: &[&str] = &["id", "remotive_id", "uuid", "slug"];
const TITLE_FIELDS: &[&str] = &["title", "position"];
const COMPANY_FIELDS: &[&str] = &["company", "company_name", "companyName"];
const CATEGORY_FIELDS: &[&str] = &["category", "job_category"];
const JOB_TYPE_FIELDS: &[&str] = &["job_type", "type"];
const LOCATION_FIELDS: &[&str] = &["location", "candidate_required_location", "country"];
const URL_FIELDS: &[&str] = &["url", "job_url", "href"];
const PUBLISHED_FIELDS: &[&str] = &["published_at", "created_at", "posted_at", "publication_date"];
const TAG_FIELDS: &[&str] = &["tags", "skills", "keywords"];

/// Wrapper keys a collection-shaped response may hide its array behind.
const WRAPPER_FIELDS: &[&str] = &["items", "jobs", "data"];

const CATEGORY_VALUE_FIELDS: &[&str] = &["value", "slug"];
const CATEGORY_LABEL_FIELDS: &[&str] = &["label", "name", "category"];

/// Wrapper keys for the category feed. The upstream aggregator reuses its
/// `jobs` key for categories, so that one leads.
const CATEGORY_WRAPPER_FIELDS: &[&str] = &["jobs", "categories", "data"];

// ---------------------------------------------------------------------------
// Identifier synthesis
// ---------------------------------------------------------------------------

/// Source of synthesized identifiers for records whose payload has no usable
/// id-like field.
///
/// The UI needs a stable, non-empty key for every record; collisions across
/// calls must be overwhelmingly unlikely but need no cryptographic guarantee.
/// Injected as a capability so tests can supply a deterministic stub.
pub trait IdSource {
    /// Produce one fresh identifier.
    fn generate(&self) -> String;
}

/// Production [`IdSource`]: random UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

// ---------------------------------------------------------------------------
// Public operations
// ---------------------------------------------------------------------------

/// Normalize a single raw value into a canonical record.
///
/// Returns `Some` for any JSON object (however sparse) and `None` for any
/// non-object value. The favorite flag defaults per `ctx` when the payload
/// has no usable value for it.
pub fn normalize_record(raw: &Value, ctx: FavoriteContext) -> Option<JobRecord> {
    normalize_record_with(raw, ctx, &RandomIdSource)
}

/// [`normalize_record`] with an explicit [`IdSource`].
pub fn normalize_record_with(
    raw: &Value,
    ctx: FavoriteContext,
    ids: &dyn IdSource,
) -> Option<JobRecord> {
    raw.as_object().map(|obj| build_record(obj, ctx, ids))
}

/// Normalize a collection-shaped response into an ordered sequence of
/// canonical records.
///
/// Accepts either a bare array or a wrapper object exposing the array under
/// one of `items`, `jobs`, `data` (first present array wins). Non-object
/// elements are dropped; input order is preserved. Any other input shape
/// yields an empty vec, never an error.
pub fn normalize_listing(raw: &Value, ctx: FavoriteContext) -> Vec<JobRecord> {
    normalize_listing_with(raw, ctx, &RandomIdSource)
}

/// [`normalize_listing`] with an explicit [`IdSource`].
pub fn normalize_listing_with(
    raw: &Value,
    ctx: FavoriteContext,
    ids: &dyn IdSource,
) -> Vec<JobRecord> {
    let Some(seq) = sequence_of(raw, WRAPPER_FIELDS) else {
        return Vec::new();
    };
    seq.iter()
        .filter_map(|v| normalize_record_with(v, ctx, ids))
        .collect()
}

/// Normalize a listing response together with its envelope metadata.
///
/// Each metadata field is resolved independently and tolerantly: `total`
/// accepts the `total` or `job-count` spellings and falls back to the item
/// count, `page` falls back to 1, `per_page` to the item count, and
/// `total_pages` to 1. A bare array (no envelope at all) gets all four
/// fallbacks.
pub fn normalize_page(raw: &Value, ctx: FavoriteContext) -> JobsPage {
    normalize_page_with(raw, ctx, &RandomIdSource)
}

/// [`normalize_page`] with an explicit [`IdSource`].
pub fn normalize_page_with(raw: &Value, ctx: FavoriteContext, ids: &dyn IdSource) -> JobsPage {
    let items = normalize_listing_with(raw, ctx, ids);
    let count = items.len();

    let envelope = raw.as_object();
    let meta_u64 = |keys: &[&str]| -> Option<u64> {
        let obj = envelope?;
        keys.iter().find_map(|k| obj.get(*k).and_then(Value::as_u64))
    };
    let meta_u32 = |keys: &[&str]| -> Option<u32> {
        meta_u64(keys).and_then(|v| u32::try_from(v).ok())
    };

    JobsPage {
        total: meta_u64(&["total", "job-count"]).unwrap_or(count as u64),
        page: meta_u32(&["page"]).unwrap_or(1),
        per_page: meta_u32(&["per_page"]).unwrap_or(count as u32),
        total_pages: meta_u32(&["total_pages"]).unwrap_or(1),
        items,
    }
}

/// Normalize a category listing into filter entries.
///
/// Accepts a bare array or a wrapper object (`jobs`, `categories`, `data`),
/// and elements in either the `{value, label}` or the `{slug, name}` /
/// `{category}` spelling. An element yielding neither half is dropped; when
/// only one half is usable it fills both. Entries are deduplicated by
/// `value` (first occurrence wins) and sorted by lowercased label.
pub fn normalize_categories(raw: &Value) -> Vec<Category> {
    let Some(seq) = sequence_of(raw, CATEGORY_WRAPPER_FIELDS) else {
        return Vec::new();
    };
    let mut out: Vec<Category> = Vec::new();
    for cat in seq.iter().filter_map(category_of) {
        if !out.iter().any(|c| c.value == cat.value) {
            out.push(cat);
        }
    }
    out.sort_by_cached_key(|c| c.label.to_lowercase());
    out
}

// ---------------------------------------------------------------------------
// Field resolution
// ---------------------------------------------------------------------------

fn build_record(obj: &Map<String, Value>, ctx: FavoriteContext, ids: &dyn IdSource) -> JobRecord {
    JobRecord {
        id: first_string(obj, ID_FIELDS).unwrap_or_else(|| ids.generate()),
        title: first_string(obj, TITLE_FIELDS).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
        company: first_string(obj, COMPANY_FIELDS),
        category: first_string(obj, CATEGORY_FIELDS),
        job_type: first_string(obj, JOB_TYPE_FIELDS),
        location: first_string(obj, LOCATION_FIELDS),
        url: first_string(obj, URL_FIELDS).unwrap_or_else(|| FALLBACK_URL.to_string()),
        published_at: first_string(obj, PUBLISHED_FIELDS),
        is_favorite: favorite_flag(obj, ctx),
        tags: first_tags(obj),
    }
}

/// The array inside a collection-shaped response, if there is one.
fn sequence_of<'a>(raw: &'a Value, wrappers: &[&str]) -> Option<&'a Vec<Value>> {
    match raw {
        Value::Array(seq) => Some(seq),
        Value::Object(obj) => wrappers
            .iter()
            .find_map(|k| obj.get(*k).and_then(Value::as_array)),
        _ => None,
    }
}

/// One category entry, or `None` for a non-object or an entry with no usable
/// value or label.
fn category_of(raw: &Value) -> Option<Category> {
    let obj = raw.as_object()?;
    let value = first_string(obj, CATEGORY_VALUE_FIELDS);
    let label = first_string(obj, CATEGORY_LABEL_FIELDS)
        .or_else(|| value.clone())?
        .trim()
        .to_string();
    if label.is_empty() {
        return None;
    }
    let value = value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| label.clone());
    Some(Category { value, label })
}

/// First candidate field yielding a usable string, in declared order.
fn first_string(obj: &Map<String, Value>, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|f| obj.get(*f).and_then(string_value))
}

/// String coercion for string-typed canonical fields: non-empty strings pass
/// through, numbers become their decimal form, everything else is unusable.
fn string_value(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First candidate field yielding a non-empty string sequence.
fn first_tags(obj: &Map<String, Value>) -> Option<Vec<String>> {
    TAG_FIELDS.iter().find_map(|f| obj.get(*f).and_then(tag_value))
}

/// Tag coercion: only arrays are accepted, non-string and empty-string
/// elements are dropped, and an empty result is unusable (the next candidate
/// is tried). The output is therefore never an empty sequence.
fn tag_value(v: &Value) -> Option<Vec<String>> {
    let seq = v.as_array()?;
    let tags: Vec<String> = seq
        .iter()
        .filter_map(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags)
    }
}

/// Favorite flag: absent or `null` takes the context default; any present
/// value is reduced by truthiness, so an explicit `false` stays `false` even
/// in the favorites context.
fn favorite_flag(obj: &Map<String, Value>, ctx: FavoriteContext) -> bool {
    match obj.get("is_favorite") {
        None | Some(Value::Null) => ctx.default_flag(),
        Some(v) => truthy(v),
    }
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
