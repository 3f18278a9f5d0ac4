//! Concrete registry implementations

pub mod github;

pub use github::GitHubTagRegistry;
