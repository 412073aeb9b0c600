//! The combined maintainers model and its merge rules.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::declaration::Declaration;

pub const CURATORS: &str = "Curators";
pub const DOCS_MAINTAINERS: &str = "Docs maintainers";

/// A list of nicknames referencing entries of the `[people]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleGroup {
    #[serde(alias = "People", default)]
    pub people: Vec<String>,
}

impl PeopleGroup {
    pub fn new(people: Vec<String>) -> Self {
        Self { people }
    }
}

/// A person's profile. Passed through untouched, whatever keys it carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(pub toml::Table);

impl Person {
    pub fn name(&self) -> Option<&str> {
        self.field("Name")
    }

    pub fn email(&self) -> Option<&str> {
        self.field("Email")
    }

    pub fn github(&self) -> Option<&str> {
        self.field("GitHub")
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// Result of merging every fetched declaration.
///
/// `org` maps a project name (or one of the pseudo-groups [`CURATORS`] and
/// [`DOCS_MAINTAINERS`]) to its people. `people` maps a lowercased nickname to
/// the last profile seen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedModel {
    pub org: BTreeMap<String, PeopleGroup>,
    pub people: BTreeMap<String, Person>,
}

impl Default for CombinedModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinedModel {
    /// An empty model holding only the two (empty) pseudo-groups.
    pub fn new() -> Self {
        let mut org = BTreeMap::new();
        org.insert(CURATORS.to_string(), PeopleGroup::default());
        org.insert(DOCS_MAINTAINERS.to_string(), PeopleGroup::default());
        Self {
            org,
            people: BTreeMap::new(),
        }
    }

    /// Folds one project's declaration into the model, keyed by the bare
    /// project name.
    ///
    /// Maintainer nicknames are lowercased and sorted. Docs maintainers and
    /// curators are appended as decoded, without lowercasing; [`finalize`]
    /// dedupes them later. Profiles overwrite earlier ones with the same
    /// lowercased nickname.
    ///
    /// [`finalize`]: CombinedModel::finalize
    pub fn merge(&mut self, project: &str, declaration: Declaration) {
        let mut people: Vec<String> = declaration
            .maintainers()
            .map(|group| group.people.iter().map(|n| n.to_lowercase()).collect())
            .unwrap_or_default();
        people.sort();
        self.org.insert(project.to_string(), PeopleGroup::new(people));

        let Declaration {
            organization,
            people: profiles,
        } = declaration;

        if let Some(docs) = organization.docs_maintainers {
            self.group_mut(DOCS_MAINTAINERS).people.extend(docs.people);
        }
        if let Some(curators) = organization.curators {
            self.group_mut(CURATORS).people.extend(curators.people);
        }

        for (nick, person) in profiles {
            self.people.insert(nick.to_lowercase(), person);
        }
    }

    /// Dedupes and sorts the pseudo-groups, then warns about nicknames that
    /// have no profile.
    pub fn finalize(&mut self) {
        for name in [CURATORS, DOCS_MAINTAINERS] {
            let group = self.group_mut(name);
            group.people = remove_duplicates(std::mem::take(&mut group.people));
        }

        for (group, nick) in self.dangling_nicknames() {
            warn!(group = %group, nick = %nick, "Nickname has no entry in [people]");
        }
    }

    /// `(group, nickname)` pairs whose nickname has no profile, compared
    /// case-insensitively.
    pub fn dangling_nicknames(&self) -> Vec<(String, String)> {
        let profiles = &self.people;
        self.org
            .iter()
            .flat_map(move |(group, members)| {
                members
                    .people
                    .iter()
                    .filter(move |nick| !profiles.contains_key(&nick.to_lowercase()))
                    .map(move |nick| (group.clone(), nick.clone()))
            })
            .collect()
    }

    fn group_mut(&mut self, name: &str) -> &mut PeopleGroup {
        self.org.entry(name.to_string()).or_default()
    }
}

/// Drops repeated entries (keeping the first occurrence) and sorts the rest.
pub fn remove_duplicates(list: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut uniq: Vec<String> = list
        .into_iter()
        .filter(|element| seen.insert(element.clone()))
        .collect();
    uniq.sort();
    uniq
}
