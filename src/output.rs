//! Plain-text rendering of canonical job records.
//!
//! Pure string builders only — printing is the command runners' job, which
//! keeps every format testable by direct comparison.

use jobdeck_core::config::OutputConfig;
use jobdeck_core::normalizer::FALLBACK_URL;
use jobdeck_core::{Category, JobRecord, JobsPage};

/// Render one record as an indented block.
///
/// Lines with nothing to say are omitted entirely; a record with only a
/// title renders as a single line. The placeholder URL (`"#"`) is never
/// printed — it exists for UI link targets, not for terminals.
pub fn render_record(rec: &JobRecord, cfg: &OutputConfig) -> String {
    let mut lines = Vec::new();

    let mut title = rec.title.clone();
    if rec.is_favorite {
        title.push_str(" ★");
    }
    lines.push(title);

    let origin: Vec<&str> = [
        rec.company.as_deref(),
        rec.location.as_deref(),
        rec.job_type.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !origin.is_empty() {
        lines.push(format!("  {}", origin.join(" · ")));
    }

    let mut detail = Vec::new();
    if let Some(date) = published_label(rec, cfg) {
        detail.push(date);
    }
    if cfg.show_tags {
        if let Some(tags) = &rec.tags {
            detail.push(format!("tags: {}", tags.join(", ")));
        }
    }
    if !detail.is_empty() {
        lines.push(format!("  {}", detail.join(" · ")));
    }

    if cfg.show_url && rec.url != FALLBACK_URL {
        lines.push(format!("  {}", rec.url));
    }

    lines.join("\n")
}

/// Render a whole listing page: one block per record, blank-line separated,
/// followed by a `page X of Y — N total` footer.
pub fn render_page(page: &JobsPage, cfg: &OutputConfig) -> String {
    if page.items.is_empty() {
        return "no jobs found".to_string();
    }
    let blocks: Vec<String> = page.items.iter().map(|r| render_record(r, cfg)).collect();
    format!(
        "{}\n\npage {} of {} — {} total",
        blocks.join("\n\n"),
        page.page,
        page.total_pages,
        page.total
    )
}

/// Render a bare record list (favorites) without a pagination footer.
pub fn render_listing(records: &[JobRecord], cfg: &OutputConfig) -> String {
    if records.is_empty() {
        return "no favorites yet".to_string();
    }
    let blocks: Vec<String> = records.iter().map(|r| render_record(r, cfg)).collect();
    blocks.join("\n\n")
}

/// Render the category filter listing, one `label (value)` line per entry.
/// The parenthesised value is omitted when it matches the label.
pub fn render_categories(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "no categories available".to_string();
    }
    let lines: Vec<String> = categories
        .iter()
        .map(|c| {
            if c.value == c.label {
                c.label.clone()
            } else {
                format!("{} ({})", c.label, c.value)
            }
        })
        .collect();
    lines.join("\n")
}

/// `"<id> is now a favorite"` after a toggle that turned the flag on,
/// `"<id> is no longer a favorite"` after one that turned it off.
pub fn toggle_status(id: &str, favorited: bool) -> String {
    if favorited {
        format!("{id} is now a favorite")
    } else {
        format!("{id} is no longer a favorite")
    }
}

/// `"<id> is a favorite"` / `"<id> is not a favorite"` for a plain check.
pub fn check_status(id: &str, favorited: bool) -> String {
    if favorited {
        format!("{id} is a favorite")
    } else {
        format!("{id} is not a favorite")
    }
}

/// `published 2024-03-01`, using the configured date format when the stored
/// string parses, the verbatim string when it does not.
fn published_label(rec: &JobRecord, cfg: &OutputConfig) -> Option<String> {
    let raw = rec.published_at.as_deref()?;
    let shown = rec
        .published_date()
        .map(|d| d.format(&cfg.date_format).to_string())
        .unwrap_or_else(|| raw.to_string());
    Some(format!("published {shown}"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> JobRecord {
        JobRecord {
            id: "42".to_string(),
            title: "Senior Rust Engineer".to_string(),
            company: Some("Acme".to_string()),
            category: Some("Software Development".to_string()),
            job_type: Some("full_time".to_string()),
            location: Some("Remote (EU)".to_string()),
            url: "https://example.com/jobs/42".to_string(),
            published_at: Some("2024-03-01T12:00:00+00:00".to_string()),
            is_favorite: false,
            tags: Some(vec!["rust".to_string(), "tokio".to_string()]),
        }
    }

    #[test]
    fn full_record_block() {
        let got = render_record(&record(), &OutputConfig::default());
        let want = "Senior Rust Engineer\n\
                    \x20 Acme · Remote (EU) · full_time\n\
                    \x20 published 2024-03-01 · tags: rust, tokio\n\
                    \x20 https://example.com/jobs/42";
        assert_eq!(got, want);
    }

    #[test]
    fn favorite_marker_on_title() {
        let rec = JobRecord {
            is_favorite: true,
            ..record()
        };
        assert!(render_record(&rec, &OutputConfig::default())
            .starts_with("Senior Rust Engineer ★"));
    }

    #[test]
    fn sparse_record_is_one_line() {
        let rec = JobRecord {
            company: None,
            location: None,
            job_type: None,
            published_at: None,
            tags: None,
            url: "#".to_string(),
            ..record()
        };
        assert_eq!(
            render_record(&rec, &OutputConfig::default()),
            "Senior Rust Engineer"
        );
    }

    #[test]
    fn placeholder_url_is_hidden() {
        let rec = JobRecord {
            url: "#".to_string(),
            ..record()
        };
        assert!(!render_record(&rec, &OutputConfig::default()).contains('#'));
    }

    #[test]
    fn unparseable_date_prints_verbatim() {
        let rec = JobRecord {
            published_at: Some("soon".to_string()),
            ..record()
        };
        assert!(render_record(&rec, &OutputConfig::default()).contains("published soon"));
    }

    #[test]
    fn output_toggles_respected() {
        let cfg = OutputConfig {
            show_tags: false,
            show_url: false,
            ..OutputConfig::default()
        };
        let got = render_record(&record(), &cfg);
        assert!(!got.contains("tags:"));
        assert!(!got.contains("https://"));
    }

    #[test]
    fn page_footer() {
        let page = JobsPage {
            items: vec![record()],
            total: 240,
            page: 3,
            per_page: 20,
            total_pages: 12,
        };
        let got = render_page(&page, &OutputConfig::default());
        assert!(got.ends_with("page 3 of 12 — 240 total"));
    }

    #[test]
    fn empty_surfaces() {
        let page = JobsPage {
            items: vec![],
            total: 0,
            page: 1,
            per_page: 0,
            total_pages: 1,
        };
        assert_eq!(render_page(&page, &OutputConfig::default()), "no jobs found");
        assert_eq!(
            render_listing(&[], &OutputConfig::default()),
            "no favorites yet"
        );
        assert_eq!(render_categories(&[]), "no categories available");
    }

    #[test]
    fn category_lines() {
        let cats = vec![
            Category {
                value: "software-dev".to_string(),
                label: "Software Development".to_string(),
            },
            Category {
                value: "writing".to_string(),
                label: "writing".to_string(),
            },
        ];
        assert_eq!(
            render_categories(&cats),
            "Software Development (software-dev)\nwriting"
        );
    }

    #[test]
    fn favorite_status_lines() {
        assert_eq!(toggle_status("42", true), "42 is now a favorite");
        assert_eq!(toggle_status("42", false), "42 is no longer a favorite");
        assert_eq!(check_status("42", true), "42 is a favorite");
        assert_eq!(check_status("42", false), "42 is not a favorite");
    }
}
