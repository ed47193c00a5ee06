mod render;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use semgen_core::{CourseModel, RawCourse};

#[derive(Parser)]
#[command(name = "semgen")]
#[command(about = "Generate a syllabus, schedule, assignments list, calendar feed and task list from a course config")]
struct Cli {
    /// Course config files (TOML), processed independently
    #[arg(required = true)]
    configs: Vec<PathBuf>,

    /// Name of the rendered syllabus file
    #[arg(long, default_value = "readme.adoc")]
    syllabus: String,

    /// Directory to write the rendered documents into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // One bad course aborts that course only; the rest still render
    let mut failed = 0;
    for path in &cli.configs {
        if let Err(err) = generate(path, &cli) {
            tracing::error!(config = %path.display(), "{err:#}");
            failed += 1;
        }
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Build the course model for one config file and write every document.
fn generate(path: &Path, cli: &Cli) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read course config at {}", path.display()))?;
    let raw = RawCourse::from_toml_str(&text)
        .with_context(|| format!("Failed to parse course config at {}", path.display()))?;
    let model = CourseModel::build(raw)
        .with_context(|| format!("Failed to build course model for {}", path.display()))?;

    render::write_all(&model, &cli.out_dir, &cli.syllabus)
}
