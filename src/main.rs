use anyhow::Result;
use clap::Parser;

use release_gate::config;
use release_gate::gate::{self, GateArgs};
use release_gate::refsource::{Git2RefSource, NoRefSource};
use release_gate::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-gate",
    about = "Check that a release tag matches the manifest version before building artifacts"
)]
struct Args {
    #[arg(short = 'r', long, help = "Triggering ref (tag or branch); overrides GITHUB_REF_NAME and the local repository")]
    git_ref: Option<String>,

    #[arg(short, long, help = "Path to the package manifest (default: ./Cargo.toml)")]
    manifest: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Also print the expected release asset names")]
    artifacts: bool,

    #[arg(short, long, help = "Only print the mismatch report, if any")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("release-gate {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(2);
        }
    };

    let gate_args = GateArgs {
        git_ref: args.git_ref.clone(),
        manifest_path: args.manifest.clone(),
    };

    // The repository is only consulted when neither the flag nor the CI
    // environment supplies a ref, so failing to find one is not fatal here.
    let outcome = match Git2RefSource::discover() {
        Ok(source) => gate::run_gate(&gate_args, &config, &source),
        Err(_) => gate::run_gate(&gate_args, &config, &NoRefSource),
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(2);
        }
    };

    if !args.quiet {
        for warning in &outcome.warnings {
            ui::display_warning(warning);
        }
    }

    ui::display_outcome(&outcome, args.quiet);

    if args.artifacts && !args.quiet {
        ui::display_artifacts(&outcome.artifacts);
    }

    if !outcome.result.allows_release() {
        std::process::exit(1);
    }

    Ok(())
}
