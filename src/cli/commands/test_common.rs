//! In-memory stand-ins for Fluidinfo and the browser, shared by the
//! command tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;

use crate::browser::{Browser, BrowserError};
use crate::fluidinfo::{FluidinfoError, TagStore};
use crate::tag::TagName;

/// A tag store holding `about -> tag -> value` in memory.
#[derive(Default)]
pub struct MemoryTagStore {
    objects: RefCell<BTreeMap<String, BTreeMap<String, i64>>>,
    calls: RefCell<Vec<String>>,
    fail: bool,
}

impl MemoryTagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `tag` on one object per URL.
    pub fn with_instances(self, tag: &TagName, urls: &[&str]) -> Self {
        for (i, url) in urls.iter().enumerate() {
            self.objects
                .borrow_mut()
                .entry(url.to_string())
                .or_default()
                .insert(tag.to_string(), i as i64);
        }
        self
    }

    /// Makes every operation fail as if Fluidinfo were down.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn value(&self, tag: &TagName, url: &str) -> Option<i64> {
        self.objects
            .borrow()
            .get(url)
            .and_then(|tags| tags.get(tag.as_str()))
            .copied()
    }

    fn check(&self) -> Result<(), FluidinfoError> {
        if self.fail {
            return Err(FluidinfoError::ServerError {
                status: 503,
                message: "Service Unavailable".to_string(),
            });
        }
        Ok(())
    }
}

impl TagStore for MemoryTagStore {
    fn delete_tag(&self, tag: &TagName) -> Result<(), FluidinfoError> {
        self.calls.borrow_mut().push(format!("delete {tag}"));
        self.check()?;
        for tags in self.objects.borrow_mut().values_mut() {
            tags.remove(tag.as_str());
        }
        Ok(())
    }

    fn get_tag(&self, tag: &TagName) -> Result<Vec<String>, FluidinfoError> {
        self.calls.borrow_mut().push(format!("get {tag}"));
        self.check()?;
        Ok(self
            .objects
            .borrow()
            .iter()
            .filter(|(_, tags)| tags.contains_key(tag.as_str()))
            .map(|(about, _)| about.clone())
            .collect())
    }

    fn set_tag(&self, tag: &TagName, url: &str, timestamp: i64) -> Result<(), FluidinfoError> {
        self.calls.borrow_mut().push(format!("set {tag} {url}"));
        self.check()?;
        self.objects
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .insert(tag.to_string(), timestamp);
        Ok(())
    }
}

/// A browser that remembers what it was asked to open.
#[derive(Default)]
pub struct RecordingBrowser {
    opened: RefCell<Vec<String>>,
    broken: bool,
}

impl RecordingBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// A browser whose opener cannot be started.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Browser for RecordingBrowser {
    fn open(&self, url: &str) -> Result<(), BrowserError> {
        if self.broken {
            return Err(BrowserError::LaunchFailed {
                program: "xdg-open",
                os: "linux".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            });
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
