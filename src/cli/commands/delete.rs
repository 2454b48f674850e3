//! Delete command - remove every instance of the tag.

use anyhow::{Context, Result};

use crate::fluidinfo::TagStore;
use crate::tag::TagName;

/// Executes the delete command. Prints nothing on success.
pub fn run(store: &dyn TagStore, tag: &TagName) -> Result<()> {
    store
        .delete_tag(tag)
        .with_context(|| format!("Failed to delete {tag}"))?;
    tracing::debug!("Deleted all instances of {tag}");
    Ok(())
}
