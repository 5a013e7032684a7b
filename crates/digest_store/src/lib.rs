//! # DataStore Module
//!
//! This module provides persistence for finished video digests.
//!
//! A [`SummaryResult`] is the terminal record of the pipeline: the video id,
//! the flattened transcript, the generated summary and the time it was
//! produced. Records are written through the [`ResultStore`] abstraction; the
//! bundled [`JsonFileStore`] keeps one pretty-printed JSON file per video.

mod datastore;
mod domain;
mod error;

pub use datastore::json_file::JsonFileStore;
pub use datastore::ResultStore;
pub use domain::SummaryResult;
pub use error::StoreError;
