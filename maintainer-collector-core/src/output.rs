//! Assembly and writing of the combined MAINTAINERS file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{error, info};

use crate::error::{CollectorError, Result};

/// Comment block opening the generated file.
pub const HEADER: &str = include_str!("../assets/header.toml");
/// `[Rules]` prose shared by every project.
pub const RULES: &str = include_str!("../assets/rules.toml");
/// `[Roles]` prose describing each group.
pub const ROLES: &str = include_str!("../assets/roles.toml");

/// Permission bits of a newly created output file.
pub const OUTPUT_MODE: u32 = 0o755;

/// Concatenates the four parts of the output file, in order.
pub fn assemble(header: &str, rules: &str, roles: &str, body: &str) -> String {
    let mut file = String::with_capacity(header.len() + rules.len() + roles.len() + body.len());
    file.push_str(header);
    file.push_str(rules);
    file.push_str(roles);
    file.push_str(body);
    file
}

/// The standard file: [`HEADER`], [`RULES`], [`ROLES`], then `body`.
pub fn assemble_default(body: &str) -> String {
    assemble(HEADER, RULES, ROLES, body)
}

/// Writes `contents` to `path`, creating it with [`OUTPUT_MODE`] or
/// truncating an existing file (whose mode is left alone).
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(OUTPUT_MODE);
        }
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()
    };

    match write() {
        Ok(()) => {
            info!(path = %path.display(), bytes = contents.len(), "Wrote combined MAINTAINERS file");
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, path = %path.display(), "Failed to write combined MAINTAINERS file");
            Err(CollectorError::Write {
                path: path.to_path_buf(),
                source: e,
            })
        }
    }
}
