use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use glbuild::build_number;
use glbuild::cli::ProjectArgs;

/// Increments the build number stored in a GitLab CI/CD variable and prints it
#[derive(Parser)]
#[command(name = "gitlab-build-number")]
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

    let build_number = build_number::increment(&client, &config.build_number_variable)
        .await
        .with_context(|| format!("Failed to increment {}", config.build_number_variable))?;
    info!("Build number is now {build_number}");

    println!("{build_number}");

    Ok(())
}
