//! Soundbite CLI
//!
//! Generates two-second `.ogg` previews for AIFF files, either for the
//! paths given on the command line or for every AIFF found under the
//! current directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use soundbite_core::{detect_ffmpeg, find_aiff_sources, FfmpegRunner, PreviewGenerator};

#[derive(Parser)]
#[command(name = "soundbite", version, about = "Audio file preview generator (ffmpeg)")]
struct Cli {
    /// Audio files to process; scans the current directory when empty
    paths: Vec<PathBuf>,
}

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .finish();

    // Avoid panics if already initialized.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();

    let ffmpeg = detect_ffmpeg().context("FFmpeg is required to generate previews")?;
    info!(path = %ffmpeg.path.display(), version = %ffmpeg.version, "Using FFmpeg");

    let sources = if cli.paths.is_empty() {
        let root = Path::new(".");
        info!(root = %root.display(), "No paths given, scanning for AIFF files");
        find_aiff_sources(root)?
    } else {
        cli.paths
    };

    if sources.is_empty() {
        info!("No AIFF files found, nothing to do");
        return Ok(());
    }

    let generator = PreviewGenerator::new(FfmpegRunner::new(ffmpeg));

    let mut failed = 0usize;
    for source in &sources {
        if let Err(e) = generator.create_preview(source).await {
            error!(input = %source.display(), error = %e, "Preview generation failed");
            failed += 1;
        }
    }

    info!(
        generated = sources.len() - failed,
        failed, "Preview run complete"
    );

    if failed > 0 {
        anyhow::bail!("{} of {} previews failed", failed, sources.len());
    }

    Ok(())
}
