//! Tag names for the last page a user was reading.
//!
//! Every user gets a `<username>/lastpage` tag. An optional custom suffix
//! namespaces several last pages per user, e.g. `alice/lastpage-work`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Base name of the tag under the user's namespace.
pub const BASE_TAG: &str = "lastpage";

/// Characters allowed in a custom suffix: word characters, dot, hyphen,
/// colon and slash.
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[:.\-\w/]+$").expect("suffix regex is invalid"));

/// A custom suffix contained characters that are not legal in a tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Custom suffixes can only contain letters, digits, dot, hyphen, colon, and slash.")]
pub struct InvalidSuffix(pub String);

/// Validates a custom suffix and turns it into the form appended to the
/// base tag: slashes become hyphens and a leading hyphen is added.
///
/// `work/project` becomes `-work-project`.
pub fn normalize_suffix(custom: &str) -> Result<String, InvalidSuffix> {
    if !SUFFIX_RE.is_match(custom) {
        return Err(InvalidSuffix(custom.to_string()));
    }
    Ok(format!("-{}", custom.replace('/', "-")))
}

/// Full name of a lastpage tag, e.g. `alice/lastpage-work`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    /// Builds the tag for `user`, with an optional custom suffix.
    ///
    /// An empty suffix is treated the same as no suffix.
    pub fn new(user: &str, custom: Option<&str>) -> Result<Self, InvalidSuffix> {
        let suffix = match custom {
            Some(custom) if !custom.is_empty() => normalize_suffix(custom)?,
            _ => String::new(),
        };
        Ok(Self(format!("{user}/{BASE_TAG}{suffix}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the tag into its path components (`alice`, `lastpage-work`).
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tag_without_suffix() {
        let tag = TagName::new("alice", None).unwrap();
        assert_eq!(tag.as_str(), "alice/lastpage");
    }

    #[test]
    fn test_tag_with_slashed_suffix() {
        let tag = TagName::new("alice", Some("work/project")).unwrap();
        assert_eq!(tag.as_str(), "alice/lastpage-work-project");
    }

    #[test]
    fn test_tag_with_empty_suffix() {
        let tag = TagName::new("alice", Some("")).unwrap();
        assert_eq!(tag.to_string(), "alice/lastpage");
    }

    #[test]
    fn test_normalize_suffix_keeps_punctuation() {
        assert_eq!(normalize_suffix("a.b-c:d").unwrap(), "-a.b-c:d");
    }

    #[test]
    fn test_normalize_suffix_accepts_unicode_letters() {
        assert_eq!(normalize_suffix("café/ñ").unwrap(), "-café-ñ");
    }

    #[test]
    fn test_normalize_suffix_rejects_space() {
        let err = normalize_suffix("my page").unwrap_err();
        assert_eq!(err, InvalidSuffix("my page".to_string()));
        assert!(err.to_string().contains("letters, digits"));
    }

    #[test]
    fn test_normalize_suffix_rejects_empty() {
        assert!(normalize_suffix("").is_err());
    }

    #[test]
    fn test_segments() {
        let tag = TagName::new("bob", Some("x")).unwrap();
        let parts: Vec<&str> = tag.segments().collect();
        assert_eq!(parts, vec!["bob", "lastpage-x"]);
    }

    proptest! {
        #[test]
        fn legal_suffixes_are_accepted_without_slashes(custom in "[a-zA-Z0-9_.:/-]{1,40}") {
            let suffix = normalize_suffix(&custom).unwrap();
            prop_assert!(suffix.starts_with('-'));
            prop_assert!(!suffix.contains('/'));
            prop_assert_eq!(suffix.len(), custom.len() + 1);
        }

        #[test]
        fn suffixes_with_illegal_characters_are_rejected(
            prefix in "[a-z]{0,8}",
            bad in "[ !@#$%^&*()+=?<>,;'\"\\[\\]{}|~`]",
            rest in "[a-z]{0,8}",
        ) {
            let custom = format!("{prefix}{bad}{rest}");
            prop_assert!(normalize_suffix(&custom).is_err());
        }
    }
}
