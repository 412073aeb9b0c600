//! TOML rendering of the combined model.
//!
//! The layout mirrors what hand-maintained MAINTAINERS files look like: each
//! table header is indented one level per enclosing table, its keys one level
//! deeper, and arrays stay on one line.
//!
//! ```toml
//! [Org]
//!
//!     [Org.Curators]
//!         people = ["alice", "bob"]
//!
//! [people]
//!
//!     [people.alice]
//!         Name = "Alice"
//! ```

use std::fmt::Write;

use crate::error::Result;
use crate::model::CombinedModel;

/// One nesting level.
pub const INDENT: &str = "    ";

const ORG_TABLE: &str = "Org";
const PEOPLE_TABLE: &str = "people";

/// Renders the model and checks that the result parses back as TOML.
pub fn render(model: &CombinedModel) -> Result<String> {
    let mut out = String::new();

    write_header(&mut out, &[ORG_TABLE])?;
    for (name, group) in &model.org {
        write_header(&mut out, &[ORG_TABLE, name])?;
        write_entry(&mut out, 2, "people", &format_array(&group.people))?;
    }

    write_header(&mut out, &[PEOPLE_TABLE])?;
    for (nick, person) in &model.people {
        write_header(&mut out, &[PEOPLE_TABLE, nick])?;
        for (key, value) in &person.0 {
            write_entry(&mut out, 2, key, &format_value(value))?;
        }
    }

    toml::from_str::<toml::Table>(&out)?;
    Ok(out)
}

fn write_header(out: &mut String, path: &[&str]) -> std::fmt::Result {
    if !out.is_empty() {
        out.push('\n');
    }
    let key = path
        .iter()
        .map(|segment| format_key(segment))
        .collect::<Vec<_>>()
        .join(".");
    writeln!(out, "{}[{}]", INDENT.repeat(path.len() - 1), key)
}

fn write_entry(out: &mut String, depth: usize, key: &str, value: &str) -> std::fmt::Result {
    writeln!(out, "{}{} = {}", INDENT.repeat(depth), format_key(key), value)
}

/// Bare keys stay bare; anything else is emitted as a quoted key.
fn format_key(key: &str) -> String {
    let bare = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        key.to_string()
    } else {
        toml::Value::String(key.to_string()).to_string()
    }
}

fn format_array(items: &[String]) -> String {
    let items = items
        .iter()
        .map(|item| toml::Value::String(item.clone()).to_string())
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

/// Inline TOML for a profile value. Datetimes are written as TOML datetimes,
/// also inside arrays and inline tables.
fn format_value(value: &toml::Value) -> String {
    match value {
        toml::Value::Datetime(datetime) => datetime.to_string(),
        toml::Value::Array(items) => {
            let items = items.iter().map(format_value).collect::<Vec<_>>();
            format!("[{}]", items.join(", "))
        }
        toml::Value::Table(table) if table.is_empty() => "{}".to_string(),
        toml::Value::Table(table) => {
            let entries = table
                .iter()
                .map(|(key, value)| format!("{} = {}", format_key(key), format_value(value)))
                .collect::<Vec<_>>();
            format!("{{ {} }}", entries.join(", "))
        }
        other => other.to_string(),
    }
}
