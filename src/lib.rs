//! lastpage - remember the last page you were reading
//!
//! Stores a URL in a Fluidinfo tag named `<username>/lastpage`, and
//! shows, opens, or deletes it again from any machine.

pub mod browser;
pub mod cli;
pub mod config;
pub mod fluidinfo;
pub mod page;
pub mod tag;
