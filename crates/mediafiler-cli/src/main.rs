use std::path::PathBuf;

use clap::Parser;
use log::{debug, error, info};

use mediafiler_core::media::MediaKind;
use mediafiler_core::{process, ProcessOptions};

#[derive(Parser)]
#[command(
    name = "mediafiler",
    version,
    about = "Sort photos and videos into YYYY-MM folders by capture date"
)]
struct Cli {
    /// Source directory
    src: PathBuf,

    /// Destination directory
    dst: PathBuf,

    /// Type of files to look for
    #[arg(short = 't', long = "type", value_enum, default_value = "image")]
    kind: MediaKind,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    debug!("src: {}", cli.src.display());
    debug!("dst: {}", cli.dst.display());

    let options = ProcessOptions {
        source: cli.src,
        dest: cli.dst,
        kind: cli.kind,
    };

    // Setup failures (missing source, uncreatable destination) are fatal
    // and exit non-zero without a summary; per-file failures are already
    // contained and counted inside process().
    match process(&options) {
        Ok(result) => {
            info!("=== Files found:  {}", result.files_found);
            info!("=== Files copied: {}", result.files_copied);
            if result.files_skipped > 0 {
                info!("=== Files skipped (identical): {}", result.files_skipped);
            }
            if result.files_failed > 0 {
                info!("=== Files failed: {}", result.files_failed);
            }
        }
        Err(e) => {
            error!("failed: {e:#}");
            std::process::exit(1);
        }
    }
}
