mod client;
mod repository;
mod types;
mod variables;

pub use client::GitLabClient;
pub use types::{Commit, Job, Variable};
