use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitLab CI/CD project variable as returned by the variables API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variable {
    /// Variable name (e.g., `GITLAB_BUILD_NUMBER`)
    pub key: String,
    /// Stored value, always string-encoded by GitLab
    pub value: String,
    /// "env_var" or "file"
    #[serde(default)]
    pub variable_type: Option<String>,
    #[serde(default)]
    pub protected: bool,
    #[serde(default)]
    pub masked: bool,
    #[serde(default)]
    pub environment_scope: Option<String>,
}

/// Request body for creating or updating a variable.
#[derive(Debug, Serialize)]
pub(crate) struct VariablePayload<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// A repository commit.
///
/// Only `id`, `message` and `parent_ids` drive any behavior; the remaining
/// fields are kept for logging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Commit {
    /// Full commit SHA
    pub id: String,
    #[serde(default)]
    pub short_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Full commit message
    pub message: String,
    /// Parent commit SHAs, in order
    #[serde(default)]
    pub parent_ids: Vec<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Commit {
    /// A merge commit has more than one parent.
    pub fn is_merge(&self) -> bool {
        self.parent_ids.len() > 1
    }

    /// Short SHA for log output.
    pub fn short_sha(&self) -> &str {
        self.short_id
            .as_deref()
            .unwrap_or_else(|| self.id.get(..8).unwrap_or(self.id.as_str()))
    }
}

/// A CI job from the project jobs API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
    pub id: u64,
    /// Job name as defined in .gitlab-ci.yml
    pub name: String,
    /// Final job status (e.g., "success", "failed")
    pub status: String,
    /// Git reference the job ran for
    #[serde(default, rename = "ref")]
    pub ref_: Option<String>,
    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
    /// Commit the job ran against
    pub commit: Commit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_commit_detection() {
        let commit: Commit = serde_json::from_value(serde_json::json!({
            "id": "aaaaaaaaaaaa",
            "message": "Merge branch 'feature' into 'master'",
            "parent_ids": ["p1", "p2"]
        }))
        .unwrap();
        assert!(commit.is_merge());

        let commit: Commit = serde_json::from_value(serde_json::json!({
            "id": "bbbbbbbbbbbb",
            "message": "fix bug",
            "parent_ids": ["p1"]
        }))
        .unwrap();
        assert!(!commit.is_merge());
    }

    #[test]
    fn test_short_sha_falls_back_to_id_prefix() {
        let commit = Commit {
            id: "0123456789abcdef".to_string(),
            short_id: None,
            title: None,
            message: String::new(),
            parent_ids: vec![],
            author_name: None,
            created_at: None,
        };
        assert_eq!(commit.short_sha(), "01234567");
    }

    #[test]
    fn test_job_deserializes_gitlab_payload() {
        let job: Job = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "master",
                "status": "success",
                "ref": "master",
                "stage": "build",
                "finished_at": "2024-05-01T10:00:00.000Z",
                "commit": {
                    "id": "abc123",
                    "short_id": "abc1",
                    "title": "fix bug",
                    "message": "fix bug\n",
                    "parent_ids": ["p1"]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(job.name, "master");
        assert_eq!(job.ref_.as_deref(), Some("master"));
        assert!(job.finished_at.is_some());
        assert_eq!(job.commit.id, "abc123");
        assert_eq!(job.commit.message, "fix bug\n");
    }

    #[test]
    fn test_variable_defaults_optional_fields() {
        let variable: Variable =
            serde_json::from_str(r#"{"key": "GITLAB_BUILD_NUMBER", "value": "41"}"#).unwrap();
        assert_eq!(variable.value, "41");
        assert!(!variable.protected);
        assert!(variable.variable_type.is_none());
    }
}
