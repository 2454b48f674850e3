//! CLI commands for lastpage.
//!
//! Each submodule implements one action on a lastpage tag. Commands
//! take the tag store and output sink explicitly so they can run
//! against in-memory fakes.

/// Generate shell completion scripts.
pub mod completions;

/// Delete every instance of the tag.
pub mod delete;

/// Open the stored URL in the browser.
pub mod open;

/// Print every stored URL.
pub mod show;

/// Replace the stored URL.
pub mod store;

#[cfg(test)]
pub(crate) mod test_common;
