//! Command runners behind the CLI verbs.
//!
//! Each runner builds the API client from config, performs one request, and
//! prints either the plain-text rendering or pretty JSON of the canonical
//! records. Errors propagate as `anyhow` with a user-facing context line.

use anyhow::Context;
use jobdeck_api::{JobQuery, JobsClient};
use jobdeck_core::config::Config;

use crate::output;

/// `jobdeck search` — fetch one page of listings.
pub async fn search(
    cfg: &Config,
    q: Option<String>,
    category: Option<String>,
    page: u32,
    per_page: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let query = JobQuery {
        q,
        category,
        page: Some(page.max(1)),
        per_page: Some(per_page.unwrap_or(cfg.api.per_page)),
    };
    let result = client
        .list_jobs(&query)
        .await
        .context("failed to load jobs")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", output::render_page(&result, &cfg.output));
    }
    Ok(())
}

/// `jobdeck show` — fetch one job by id.
pub async fn show(cfg: &Config, id: &str, json: bool) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let record = client
        .job_by_id(id)
        .await
        .context("failed to load job")?
        .with_context(|| format!("no job with id {id}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", output::render_record(&record, &cfg.output));
    }
    Ok(())
}

/// `jobdeck categories` — list the category filter values.
pub async fn categories(cfg: &Config, json: bool) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let categories = client
        .list_categories()
        .await
        .context("failed to load categories")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        println!("{}", output::render_categories(&categories));
    }
    Ok(())
}

/// `jobdeck favorites list`.
pub async fn favorites_list(cfg: &Config, json: bool) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let records = client
        .favorites()
        .await
        .context("failed to load favorites")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        println!("{}", output::render_listing(&records, &cfg.output));
    }
    Ok(())
}

/// `jobdeck favorites add`.
pub async fn favorites_add(cfg: &Config, id: &str) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    client
        .add_favorite(id)
        .await
        .context("failed to add favorite")?;
    println!("added {id} to favorites");
    Ok(())
}

/// `jobdeck favorites remove`.
pub async fn favorites_remove(cfg: &Config, id: &str) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    client
        .remove_favorite(id)
        .await
        .context("failed to remove favorite")?;
    println!("removed {id} from favorites");
    Ok(())
}

/// `jobdeck favorites toggle`.
pub async fn favorites_toggle(cfg: &Config, id: &str) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let state = client
        .toggle_favorite(id)
        .await
        .context("failed to toggle favorite")?;
    println!("{}", output::toggle_status(id, state));
    Ok(())
}

/// `jobdeck favorites check`.
pub async fn favorites_check(cfg: &Config, id: &str) -> anyhow::Result<()> {
    let client = JobsClient::new(&cfg.api)?;
    let state = client
        .check_favorite(id)
        .await
        .context("failed to check favorite")?;
    println!("{}", output::check_status(id, state));
    Ok(())
}
