//! Project identifiers: `"name"` or `"org/name"`.

use std::fmt;

/// A configured project resolved to its organization and repository name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub org: String,
    pub name: String,
}

impl ProjectRef {
    pub fn parse(identifier: &str, default_org: &str) -> Self {
        let (org, name) = project_org(identifier, default_org);
        Self {
            org: org.to_string(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// Splits a project identifier into GitHub organization and repository name.
/// Identifiers without an organization fall back to `default_org`. Only the
/// first `/` separates, so `"a/b/c"` yields `("a", "b/c")`.
pub fn project_org<'a>(identifier: &'a str, default_org: &'a str) -> (&'a str, &'a str) {
    match identifier.split_once('/') {
        Some((org, name)) => (org, name),
        None => (default_org, identifier),
    }
}
