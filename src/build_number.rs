use log::info;

use crate::error::{GlBuildError, Result};
use crate::gitlab::GitLabClient;

/// Initial value written when the counter variable does not exist yet.
const FIRST_BUILD_NUMBER: &str = "1";

/// Increments the build counter stored in the project variable `key`.
///
/// Creates the variable at `1` when GitLab reports it missing, otherwise
/// writes back the stored value plus one. Returns the value GitLab reports
/// after the write.
///
/// The read and the write are separate requests, so two builds racing on the
/// same project can observe the same number.
///
/// # Errors
///
/// Returns an error if a request fails, the stored value is not a
/// non-negative integer, or the counter would overflow.
pub async fn increment(client: &GitLabClient, key: &str) -> Result<String> {
    let Some(variable) = client.get_variable(key).await? else {
        info!("Variable {key} not found, creating it");
        let created = client.create_variable(key, FIRST_BUILD_NUMBER).await?;
        return Ok(created.value);
    };

    let next = next_build_number(&variable.value)?;
    info!("Updating {key}: {} -> {next}", variable.value.trim());

    let updated = client.update_variable(key, &next).await?;
    Ok(updated.value)
}

fn next_build_number(stored: &str) -> Result<String> {
    let current: u64 = stored
        .trim()
        .parse()
        .map_err(|source| GlBuildError::InvalidBuildNumber {
            value: stored.to_string(),
            source,
        })?;

    current
        .checked_add(1)
        .map(|next| next.to_string())
        .ok_or(GlBuildError::BuildNumberOverflow(current))
}
