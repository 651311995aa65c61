use anyhow::{Context, Result};
use clap::Parser;

use glbuild::cli::ProjectArgs;
use glbuild::release_notes;

/// Prints release notes for the commits since the last successful master build
#[derive(Parser)]
#[command(name = "gitlab-release-notes")]
#[command(author, version, long_about = None)]
struct Cli {
    #[command(flatten)]
    project: ProjectArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let (client, config) = cli.project.connect()?;

    let notes = release_notes::generate(&client, &config)
        .await
        .context("Failed to generate release notes")?;

    println!("{notes}");

    Ok(())
}
