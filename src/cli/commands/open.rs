//! Open command - browse to the stored page.
//!
//! Only a single stored value that looks like a URL is opened. With no
//! value or several values, the command reports what it found instead.

use std::io::Write;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::browser::Browser;
use crate::fluidinfo::TagStore;
use crate::page::looks_like_url;
use crate::tag::TagName;

/// Executes the open command.
///
/// Browser failures are reported on stderr and do not fail the command.
pub fn run(
    store: &dyn TagStore,
    browser: &dyn Browser,
    tag: &TagName,
    out: &mut dyn Write,
) -> Result<()> {
    let urls = store
        .get_tag(tag)
        .with_context(|| format!("Failed to read {tag}"))?;

    match urls.as_slice() {
        [] => {
            writeln!(
                out,
                "{}",
                format!("Tag {tag} currently does not point to any URL.").yellow()
            )?;
        }
        [url] if looks_like_url(url) => {
            if let Err(e) = browser.open(url) {
                tracing::debug!("Browser launch failed: {e:?}");
                eprintln!("{}", e.to_string().yellow());
            }
        }
        [value] => {
            writeln!(
                out,
                "{}",
                format!("Value {value} does not look like a URL.").yellow()
            )?;
        }
        values => {
            writeln!(
                out,
                "{}",
                format!("Multiple values of {tag} are set:").yellow()
            )?;
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
    }

    Ok(())
}
