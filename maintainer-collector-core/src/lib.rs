#![doc = "maintainer-collector-core: core logic library for maintainer-collector."]

//! This crate holds the data model and the whole collection pipeline: fetching
//! each project's MAINTAINERS file, decoding it, merging it into one combined
//! model, and rendering and writing the combined file.
//!
//! # Usage
//! Construct a [`fetch::HttpFetcher`] (or any [`contract::Fetcher`]) and call
//! [`collect::generate`] with a [`config::CollectorConfig`].

pub mod collect;
pub mod config;
pub mod contract;
pub mod declaration;
pub mod error;
pub mod fetch;
pub mod model;
pub mod output;
pub mod project;
pub mod render;

pub use error::{CollectorError, Result};
