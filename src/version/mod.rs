//! Update-check layer
//!
//! Fetches the tag list for the project repository, picks the highest
//! qualifying release tag, and compares it against the version the running
//! instance reports.
//!
//! # Modules
//!
//! - [`checker`]: Top-level update check and its result value
//! - [`compare`]: Version string parsing and ordering
//! - [`registry`]: Trait for fetching release tags from a remote source
//! - [`registries`]: Concrete registry implementations (GitHub tags API)
//! - [`error`]: Error types for registry operations

pub mod checker;
pub mod compare;
pub mod error;
pub mod registries;
pub mod registry;
