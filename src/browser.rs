//! Opening pages in the user's browser.
//!
//! Launching is best effort: the page opener is spawned and left to run
//! on its own, and callers report failures as warnings.

use std::io;
use std::process::{Command, Stdio};

/// Something that can show a URL to the user.
pub trait Browser {
    fn open(&self, url: &str) -> Result<(), BrowserError>;
}

/// Errors from launching a browser.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No page opener is known for this platform.
    #[error("Sorry, I don't know how to open pages on {0} systems.")]
    UnsupportedPlatform(String),

    /// The page opener could not be started.
    #[error("Could not run {program} to open pages on {os} systems: {source}")]
    LaunchFailed {
        program: &'static str,
        os: String,
        #[source]
        source: io::Error,
    },
}

/// The program that opens a page on a given platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    /// freedesktop.org `xdg-open`.
    XdgOpen,
    /// macOS `open`.
    Open,
    Unsupported,
}

impl Launcher {
    /// Maps a platform identifier, as in [`std::env::consts::OS`], to its
    /// page opener.
    pub fn for_platform(os: &str) -> Self {
        match os {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Launcher::XdgOpen,
            "macos" => Launcher::Open,
            _ => Launcher::Unsupported,
        }
    }

    pub fn program(self) -> Option<&'static str> {
        match self {
            Launcher::XdgOpen => Some("xdg-open"),
            Launcher::Open => Some("open"),
            Launcher::Unsupported => None,
        }
    }
}

/// Opens pages with the platform's default page opener.
pub struct SystemBrowser {
    os: String,
}

impl SystemBrowser {
    /// A browser for the platform this binary was built for.
    pub fn new() -> Self {
        Self::for_platform(std::env::consts::OS)
    }

    pub fn for_platform(os: &str) -> Self {
        Self { os: os.to_string() }
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        let program = Launcher::for_platform(&self.os)
            .program()
            .ok_or_else(|| BrowserError::UnsupportedPlatform(self.os.clone()))?;

        tracing::debug!("Opening {url} with {program}");

        // Not waited on; the opener outlives us if it needs to.
        Command::new(program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| BrowserError::LaunchFailed {
                program,
                os: self.os.clone(),
                source,
            })?;

        Ok(())
    }
}
