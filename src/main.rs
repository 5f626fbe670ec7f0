use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use next_version::resolver::{self, ResolverArgs};
use next_version::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "next-version",
    about = "Compute the next semantic version from conventional commits"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Repository root to analyze")]
    repo: Option<PathBuf>,

    #[arg(long, help = "Path to the VERSION file (defaults to <repo>/VERSION)")]
    version_file: Option<PathBuf>,

    #[arg(long, help = "Print commit analysis details to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("next-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo_root = args.repo.unwrap_or_else(|| PathBuf::from("."));
    let version_file = args
        .version_file
        .or_else(|| config.version_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| repo_root.join("VERSION"));

    let resolver_args = ResolverArgs {
        repo_root,
        version_file,
    };

    match resolver::resolve(&resolver_args, &config) {
        Ok(resolution) => {
            if args.verbose {
                ui::display_analysis(
                    resolution.base_tag.as_deref(),
                    &resolution.commit_messages,
                    resolution.bump,
                );
            }
            println!("{}", resolution.next);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
