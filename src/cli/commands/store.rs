//! Store command - remember a page as the tag's only value.
//!
//! Existing instances are deleted before the new one is written, so a
//! successful store leaves exactly one. The two calls are not atomic: a
//! concurrent reader can briefly see no value, and a failed write is not
//! rolled back.

use anyhow::{Context, Result};
use chrono::Utc;

use crate::fluidinfo::TagStore;
use crate::tag::TagName;

/// Executes the store command.
///
/// `url` is expected to be normalized already.
pub fn run(store: &dyn TagStore, tag: &TagName, url: &str) -> Result<()> {
    store
        .delete_tag(tag)
        .with_context(|| format!("Failed to clear existing values of {tag}"))?;

    let now = Utc::now().timestamp();
    store
        .set_tag(tag, url, now)
        .with_context(|| format!("Failed to set {tag} on {url}"))?;

    tracing::debug!("Stored {url} as {tag}");
    Ok(())
}
