//! FFmpeg Runner Module
//!
//! Executes FFmpeg commands for preview generation.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use super::{FfmpegError, FfmpegInfo, FfmpegResult};

/// Builds the argument list for one preview invocation
///
/// Pure boundary function: no I/O, no process state. The preview window is
/// capped at the first two seconds and the audio is re-encoded with
/// libvorbis. `-y` overwrites an existing preview on re-runs.
pub fn build_preview_args(input: &Path, filtergraph: &str, output: &Path) -> Vec<String> {
    vec![
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-ss".to_string(),
        "0".to_string(),
        "-t".to_string(),
        "2".to_string(),
        "-af".to_string(),
        filtergraph.to_string(),
        "-c:a".to_string(),
        "libvorbis".to_string(),
        "-y".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

/// FFmpeg runner for executing preview commands
#[derive(Clone)]
pub struct FfmpegRunner {
    info: Arc<FfmpegInfo>,
}

impl FfmpegRunner {
    /// Creates a runner from a detected FFmpeg installation
    pub fn new(info: FfmpegInfo) -> Self {
        Self {
            info: Arc::new(info),
        }
    }

    /// Returns the FFmpeg info
    pub fn info(&self) -> &FfmpegInfo {
        &self.info
    }

    /// Runs one preview invocation
    ///
    /// The input must exist before the process is spawned; the output's
    /// parent directory is created if missing. A nonzero exit surfaces
    /// ffmpeg's stderr in the error.
    pub async fn run_preview(
        &self,
        input: &Path,
        filtergraph: &str,
        output: &Path,
    ) -> FfmpegResult<()> {
        if !input.exists() {
            return Err(FfmpegError::InvalidInput(format!(
                "Input file does not exist: {}",
                input.display()
            )));
        }

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    FfmpegError::OutputError(format!("Failed to create output directory: {}", e))
                })?;
            }
        }

        let args = build_preview_args(input, filtergraph, output);

        debug!(
            input = %input.display(),
            output = %output.display(),
            filtergraph = filtergraph,
            "Running ffmpeg preview"
        );

        let output = tokio::process::Command::new(&self.info.path)
            .args(&args)
            .output()
            .await
            .map_err(FfmpegError::ProcessError)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FfmpegError::ExecutionFailed(format!(
                "Preview generation failed: {}",
                stderr
            )));
        }

        Ok(())
    }
}
