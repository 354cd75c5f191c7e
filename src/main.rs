use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use git_vers::cli::{self, RunArgs};
use git_vers::domain::Language;
use git_vers::{config, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-vers",
    about = "Calculate versions from git repository state or convert version strings"
)]
struct Args {
    #[arg(help = "Git commitish to analyze or version string to convert (default: HEAD)")]
    commitish: Option<String>,

    #[arg(
        short,
        long,
        help = "Output format: generic, semver, python, javascript, js, node, dotnet, csharp, go, golang"
    )]
    language: Option<Language>,

    #[arg(short, long, help = "Repository path (default: current directory)")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Version prefix override (e.g., '3.0.0')")]
    version_prefix: Option<String>,

    #[arg(short, long, help = "Omit commit hash from version")]
    omit_commit_hash: bool,

    #[arg(long, help = "Mark as pre-release version")]
    is_pre_release: bool,

    #[arg(long, help = "Regex pattern to filter tags (e.g., '^sdk/')")]
    tag_pattern: Option<String>,

    #[arg(short, long, help = "Output as JSON")]
    json: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log diagnostics to stderr")]
    verbose: bool,

    #[arg(long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-vers {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let run_args = RunArgs {
        commitish: args.commitish,
        language: args.language,
        repo: args.repo,
        version_prefix: args.version_prefix,
        omit_commit_hash: args.omit_commit_hash,
        is_pre_release: args.is_pre_release,
        tag_pattern: args.tag_pattern,
        json: args.json,
    }
    .with_defaults(&config.defaults);

    let outcome = match cli::run(&run_args) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &outcome.warnings {
        ui::display_warning(warning);
    }

    let output = ui::render(
        &outcome.versions,
        run_args.language.unwrap_or_default(),
        run_args.json,
    )?;
    println!("{}", output);

    Ok(())
}
