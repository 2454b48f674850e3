//! Command-line interface for lastpage.
//!
//! Turns the parsed options into a [`Plan`]: the Fluidinfo endpoint, the
//! login to use, and at most one action on one tag. Usage problems are
//! caught here, before anything talks to Fluidinfo.

/// Individual CLI command implementations.
pub mod commands;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_complete::Shell;

use crate::browser::Browser;
use crate::config::Config;
use crate::fluidinfo::client::Login;
use crate::fluidinfo::{TagStore, DEFAULT_API_URL};
use crate::page::normalize_url;
use crate::tag::{normalize_suffix, InvalidSuffix, TagName};

/// The main CLI command line interface.
#[derive(Parser, Debug)]
#[command(name = "lastpage")]
#[command(version)]
#[command(about = "Store, show, or open the last page you were reading")]
#[command(long_about = "lastpage keeps the URL of the last page you were reading in a\n\
    Fluidinfo tag named <username>/lastpage, so you can pick up where\n\
    you left off from any machine.")]
#[command(after_help = "EXAMPLES:\n    \
    lastpage --user alice --password pw -u example.com/article    Store a page\n    \
    lastpage --user alice -s                                       Show the stored page\n    \
    lastpage --user alice -o                                       Open it in the browser\n    \
    lastpage --user alice --password pw -c work -u intranet/wiki   Store under alice/lastpage-work\n    \
    lastpage --user alice --password pw -d                         Delete the tag")]
pub struct Cli {
    /// The Fluidinfo username
    #[arg(long, value_name = "USERNAME")]
    pub user: Option<String>,

    /// The Fluidinfo user's password (requires --user)
    #[arg(long, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// A custom suffix for the lastpage tag
    #[arg(short, long, value_name = "SUFFIX")]
    #[arg(
        long_help = "A custom suffix for the lastpage tag. The tag becomes\n\
        <username>/lastpage-<suffix>, with slashes turned into hyphens.\n\
        Only letters, digits, dot, hyphen, colon, and slash are allowed."
    )]
    pub custom: Option<String>,

    /// The URL to store ('http://' is added if missing)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Delete the tag
    #[arg(short, long)]
    pub delete: bool,

    /// Print the current URL
    #[arg(short, long)]
    pub show: bool,

    /// Open the current URL in the browser
    #[arg(short, long)]
    pub open: bool,

    /// Fluidinfo API endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Read defaults from this config file instead of ~/.lastpage/config.yaml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

/// Errors in how the command was invoked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error(transparent)]
    InvalidSuffix(#[from] InvalidSuffix),

    #[error("Please use --user USERNAME.")]
    MissingUser,

    #[error("Please use --password PASSWORD.")]
    MissingPassword,
}

/// The one thing an invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the tag's value with this (normalized) URL.
    Store(String),
    Delete,
    Show,
    Open,
}

impl Action {
    /// Picks the action by flag precedence: a URL wins over `--delete`,
    /// which wins over `--show`, which wins over `--open`.
    pub fn select(cli: &Cli) -> Option<Self> {
        match cli.url.as_deref() {
            Some(url) if !url.is_empty() => Some(Action::Store(normalize_url(url))),
            _ if cli.delete => Some(Action::Delete),
            _ if cli.show => Some(Action::Show),
            _ if cli.open => Some(Action::Open),
            _ => None,
        }
    }
}

/// An action bound to the tag it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub tag: TagName,
    pub action: Action,
}

/// Everything needed to run an invocation.
#[derive(Debug)]
pub struct Plan {
    pub api_url: String,
    /// `None` means anonymous access.
    pub login: Option<Login>,
    /// `None` when no action flag was given.
    pub task: Option<Task>,
}

/// Validates the options, filling gaps from `config`.
///
/// Checks run in a fixed order: the custom suffix, then the credential
/// pair, then that a username exists when there is something to do.
pub fn plan(cli: &Cli, config: &Config) -> Result<Plan, UsageError> {
    let custom = cli.custom.as_deref().filter(|custom| !custom.is_empty());
    if let Some(custom) = custom {
        normalize_suffix(custom)?;
    }

    let user = cli
        .user
        .as_deref()
        .or(config.user.as_deref())
        .filter(|user| !user.is_empty());
    let password = cli.password.as_deref().or(config.password.as_deref());

    let login = match (user, password) {
        (_, None) => None,
        (None, Some(_)) => return Err(UsageError::MissingUser),
        (Some(_), Some("")) => return Err(UsageError::MissingPassword),
        (Some(user), Some(password)) => Some(Login::new(user, password)),
    };

    let task = match Action::select(cli) {
        Some(action) => {
            let user = user.ok_or(UsageError::MissingUser)?;
            Some(Task {
                tag: TagName::new(user, custom)?,
                action,
            })
        }
        None => None,
    };

    let api_url = cli
        .api_url
        .as_deref()
        .or(config.api_url.as_deref())
        .unwrap_or(DEFAULT_API_URL)
        .to_string();

    Ok(Plan {
        api_url,
        login,
        task,
    })
}

/// Runs `task` against `store`, writing user-facing output to `out`.
pub fn execute(
    store: &dyn TagStore,
    browser: &dyn Browser,
    task: &Task,
    out: &mut dyn Write,
) -> Result<()> {
    match &task.action {
        Action::Store(url) => commands::store::run(store, &task.tag, url),
        Action::Delete => commands::delete::run(store, &task.tag),
        Action::Show => commands::show::run(store, &task.tag, out),
        Action::Open => commands::open::run(store, browser, &task.tag, out),
    }
}
