//! Decoding of a single project's MAINTAINERS file.
//!
//! Only the parts the collector merges are modelled: the people groups under
//! `[Org]` and the `[people]` profiles. Anything else in the file (`[Rules]`,
//! `[Roles]`, comments) is ignored by the decoder.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::DecodeError;
use crate::model::{PeopleGroup, Person};

/// A decoded per-project MAINTAINERS file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Declaration {
    #[serde(rename = "Org", alias = "Organization", default)]
    pub organization: Organization,
    #[serde(alias = "People", default)]
    pub people: BTreeMap<String, Person>,
}

/// The `[Org]` table of a declaration. Every group is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Organization {
    #[serde(rename = "Maintainers", default)]
    pub maintainers: Option<PeopleGroup>,
    /// Older files name the primary group "Core maintainers".
    #[serde(rename = "Core maintainers", default)]
    pub core_maintainers: Option<PeopleGroup>,
    #[serde(rename = "Docs maintainers", default)]
    pub docs_maintainers: Option<PeopleGroup>,
    #[serde(rename = "Curators", default)]
    pub curators: Option<PeopleGroup>,
}

impl Declaration {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(toml::from_str(text)?)
    }

    /// The project's maintainers: the primary group if declared, otherwise the
    /// legacy "Core maintainers" group. The two are never combined.
    pub fn maintainers(&self) -> Option<&PeopleGroup> {
        self.organization
            .maintainers
            .as_ref()
            .or(self.organization.core_maintainers.as_ref())
    }
}
