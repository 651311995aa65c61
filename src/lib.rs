//! Build-time helpers for GitLab CI.
//!
//! Two one-shot operations against a single project:
//! - [`build_number::increment`] keeps a build counter in a CI/CD variable
//! - [`release_notes::generate`] derives release notes from recent commits
//!   and the last successful master build

pub mod build_number;
pub mod cli;
pub mod config;
pub mod error;
pub mod gitlab;
pub mod release_notes;
