use std::path::PathBuf;

use thiserror::Error;

use crate::contract::FetchError;

#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("{project}: {source}")]
    Fetch {
        project: String,
        #[source]
        source: FetchError,
    },

    #[error("{project}: parsing MAINTAINERS file failed: {source}")]
    Decode {
        project: String,
        #[source]
        source: DecodeError,
    },

    #[error("rendering combined MAINTAINERS failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("rendered MAINTAINERS is not valid TOML: {0}")]
    Verify(#[from] toml::de::Error),

    #[error("writing {path:?} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a fetched MAINTAINERS payload could not be turned into a declaration.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CollectorError>;
