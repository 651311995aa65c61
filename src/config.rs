use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Tunables shared by both helpers.
///
/// Every field has a default, so an empty file (or no file at all) reproduces
/// the stock behavior against a project using `GITLAB_BUILD_NUMBER` and a
/// `master` job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// CI/CD variable holding the build counter
    #[serde(default = "default_build_number_variable")]
    pub build_number_variable: String,

    /// Job whose last successful run marks the previous release
    #[serde(default = "default_master_job")]
    pub master_job: String,

    /// Page size when listing successful jobs
    #[serde(default = "default_jobs_per_page")]
    pub jobs_per_page: u32,

    /// Release notes printed when nothing new is found
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_number_variable: default_build_number_variable(),
            master_job: default_master_job(),
            jobs_per_page: default_jobs_per_page(),
            placeholder: default_placeholder(),
        }
    }
}

fn default_build_number_variable() -> String {
    "GITLAB_BUILD_NUMBER".to_string()
}

fn default_master_job() -> String {
    "master".to_string()
}

fn default_jobs_per_page() -> u32 {
    30
}

fn default_placeholder() -> String {
    "No changes detected".to_string()
}

/// Files looked up in the working directory when no path is given, by priority.
const CANDIDATES: [&str; 4] = ["glbuild.toml", "glbuild.json", "glbuild.yaml", "glbuild.yml"];

impl Config {
    /// Loads `path`, or the first of [`CANDIDATES`] present in the working
    /// directory, or the defaults when there is neither.
    ///
    /// An explicit path that is missing or malformed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.or_else(|| CANDIDATES.iter().map(Path::new).find(|path| path.is_file()));

        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        let parsed: Result<Self> = match format {
            "toml" => toml::from_str(&contents).context("invalid TOML"),
            "json" => serde_json::from_str(&contents).context("invalid JSON"),
            "yaml" | "yml" => serde_yaml::from_str(&contents).context("invalid YAML"),
            _ => Self::parse_any(&contents),
        };

        parsed.with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Format sniffing for files without a known extension: TOML, JSON, then YAML.
    fn parse_any(contents: &str) -> Result<Self> {
        if let Ok(config) = toml::from_str(contents) {
            return Ok(config);
        }
        if let Ok(config) = serde_json::from_str(contents) {
            return Ok(config);
        }
        serde_yaml::from_str(contents).context("not TOML, JSON or YAML")
    }
}
