use log::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::gitlab::{Commit, GitLabClient, Job};

/// Builds release notes from the project's recent history.
///
/// A merge commit at the head is its own release note. Otherwise the notes are
/// the messages of every commit newer than the one the last successful master
/// job built. Falls back to `config.placeholder` when that yields nothing.
///
/// # Errors
///
/// Returns an error if listing commits or jobs fails.
pub async fn generate(client: &GitLabClient, config: &Config) -> Result<String> {
    let commits = client.list_commits().await?;
    info!("Fetched {} commits", commits.len());

    let Some(head) = commits.first() else {
        return Ok(config.placeholder.clone());
    };

    if head.is_merge() {
        info!("Head commit {} is a merge commit", head.short_sha());
        return Ok(head.message.clone());
    }

    let jobs = client.list_jobs("success", config.jobs_per_page).await?;
    let last_master = last_master_commit(&jobs, &config.master_job);

    Ok(notes_since(&commits, last_master, &config.placeholder))
}

/// Commit of the most recent job named `job_name`; jobs are listed newest first.
pub fn last_master_commit<'a>(jobs: &'a [Job], job_name: &str) -> Option<&'a Commit> {
    let job = jobs.iter().find(|job| job.name == job_name);
    match job {
        Some(job) => info!(
            "Last {job_name} build: job {} on {}{}",
            job.id,
            job.commit.short_sha(),
            job.finished_at
                .map(|at| format!(" (finished {})", at.to_rfc3339()))
                .unwrap_or_default()
        ),
        None => warn!("No successful {job_name} job found"),
    }
    job.map(|job| &job.commit)
}

/// Concatenates the messages of the commits listed before `mark`.
///
/// When `mark` is absent or not part of `commits` nothing is included, which
/// yields the placeholder.
pub fn notes_since(commits: &[Commit], mark: Option<&Commit>, placeholder: &str) -> String {
    let position = mark
        .and_then(|mark| commits.iter().position(|commit| commit.id == mark.id))
        .unwrap_or_else(|| {
            if let Some(mark) = mark {
                warn!(
                    "Commit {} is not among the {} fetched commits",
                    mark.short_sha(),
                    commits.len()
                );
            }
            0
        });

    let notes: String = commits[..position]
        .iter()
        .map(|commit| commit.message.as_str())
        .collect();

    if notes.is_empty() {
        placeholder.to_string()
    } else {
        notes
    }
}
