//! Show command - print every URL the tag points to.

use std::io::Write;

use anyhow::{Context, Result};

use crate::fluidinfo::TagStore;
use crate::tag::TagName;

/// Executes the show command.
///
/// Writes one URL per line, in the order the store returns them.
pub fn run(store: &dyn TagStore, tag: &TagName, out: &mut dyn Write) -> Result<()> {
    let urls = store
        .get_tag(tag)
        .with_context(|| format!("Failed to read {tag}"))?;

    for url in &urls {
        writeln!(out, "{url}")?;
    }

    Ok(())
}
