// src/github/repo.rs
// =============================================================================
// This module parses repository references.
//
// Users hand us either a pasted URL (https://github.com/owner/repo, possibly
// with a /tree/main/... tail, query string or .git suffix) or a bare
// "owner/repo" pair. Both collapse into a RepoRef.
//
// Rust concepts:
// - Regex captures: pulling substrings out of a pattern match
// - split_once: splitting a string at the first occurrence of a separator
// - Display: controlling how a type prints with {}
// =============================================================================

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// A parsed repository reference. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    // Parses a repository reference from user input
    //
    // Supported formats:
    //   - https://github.com/owner/repo (any scheme, any trailing path)
    //   - github.com/owner/repo
    //   - owner/repo
    //
    // Returns: RepoRef, or Error::InvalidFormat if the input has neither a
    // github.com/<owner>/<repo> substring nor a "/" separator
    pub fn parse(input: &str) -> Result<Self> {
        // Look for a github.com/<owner>/<repo> substring anywhere in the
        // input. Segments are word characters and hyphens, so trailing
        // paths, query strings and ".git" never leak into the captures.
        // The pattern is a constant and known to be valid, so .unwrap() is OK
        let url_pattern = Regex::new(r"github\.com/([\w-]+)/([\w-]+)").unwrap();

        if let Some(captures) = url_pattern.captures(input) {
            return Ok(RepoRef {
                owner: captures[1].to_string(),
                name: captures[2].to_string(),
            });
        }

        // Fall back to a bare "owner/repo" pair: split at the first '/'
        if let Some((owner, name)) = input.split_once('/') {
            return Ok(RepoRef {
                owner: owner.to_string(),
                name: name.to_string(),
            });
        }

        Err(Error::InvalidFormat(input.to_string()))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_https_url() {
        let repo = RepoRef::parse("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_url_ignores_trailing_path() {
        let repo = RepoRef::parse("https://github.com/rust-lang/rust/tree/master/src").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_url_ignores_query_string() {
        let repo = RepoRef::parse("https://github.com/octo/demo?tab=readme-ov-file").unwrap();
        assert_eq!((repo.owner.as_str(), repo.name.as_str()), ("octo", "demo"));
    }

    #[test]
    fn test_parse_url_drops_git_suffix() {
        // '.' is not a word character, so the capture stops before ".git"
        let repo = RepoRef::parse("https://github.com/user/repo.git").unwrap();
        assert_eq!(repo.name, "repo");
    }

    #[test]
    fn test_parse_schemeless_url() {
        let repo = RepoRef::parse("github.com/octo/demo").unwrap();
        assert_eq!((repo.owner.as_str(), repo.name.as_str()), ("octo", "demo"));
    }

    #[test]
    fn test_parse_bare_pair() {
        let repo = RepoRef::parse("octo/demo").unwrap();
        assert_eq!((repo.owner.as_str(), repo.name.as_str()), ("octo", "demo"));
    }

    #[test]
    fn test_url_and_bare_forms_agree() {
        let from_url = RepoRef::parse("https://github.com/octo/demo/tree/main").unwrap();
        let from_pair = RepoRef::parse("octo/demo").unwrap();
        assert_eq!(from_url, from_pair);
    }

    #[test]
    fn test_parse_rejects_input_without_separator() {
        let err = RepoRef::parse("justarepo").unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn test_display_roundtrip() {
        let repo = RepoRef::parse("octo/demo").unwrap();
        assert_eq!(repo.to_string(), "octo/demo");
    }
}
