//! Preview Pipeline Module
//!
//! Generates short `.ogg` previews from audio sources: a fixed two-filter
//! chain (dynamic-range compressor, then fade-out) applied to the first
//! two seconds of each file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::ffmpeg::{FfmpegError, FfmpegRunner};
use crate::filters::{Filter, FilterError, FilterGraph, ParamValue};

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while generating a preview
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Filter graph error: {0}")]
    Filter(#[from] FilterError),

    #[error("FFmpeg error: {0}")]
    Ffmpeg(#[from] FfmpegError),
}

pub type PreviewResult<T> = Result<T, PreviewError>;

// =============================================================================
// Pipeline
// =============================================================================

/// Builds the fixed preview filtergraph
///
/// A dynamic-range compressor with the ratio raised to 8, followed by a
/// fade-out over the last 20 ms of the two-second preview window.
pub fn preview_graph() -> PreviewResult<FilterGraph> {
    let graph = FilterGraph::new(vec![
        Box::new(Filter::compressor(&[("ratio", ParamValue::Int(8))])),
        Box::new(Filter::fade_out(&[])),
    ])?;

    Ok(graph)
}

/// Derives the preview output path from a source path
///
/// Same directory and base name, with the extension replaced by `ogg`
/// (appended when the source has none).
pub fn preview_output_path(input: &Path) -> PathBuf {
    let mut output = input.to_path_buf();
    output.set_extension("ogg");
    output
}

/// Preview generator tying the filter graph to the FFmpeg runner
pub struct PreviewGenerator {
    ffmpeg: FfmpegRunner,
}

impl PreviewGenerator {
    /// Creates a generator backed by a detected FFmpeg installation
    pub fn new(ffmpeg: FfmpegRunner) -> Self {
        Self { ffmpeg }
    }

    /// Generates one preview and returns the output path
    pub async fn create_preview(&self, input: &Path) -> PreviewResult<PathBuf> {
        let graph = preview_graph()?;
        let output = preview_output_path(input);

        self.ffmpeg
            .run_preview(input, &graph.serialize(), &output)
            .await?;

        info!(input = %input.display(), output = %output.display(), "Generated preview");
        Ok(output)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffmpeg::FfmpegInfo;

    #[test]
    fn test_preview_graph_serialization() {
        let graph = preview_graph().unwrap();

        assert_eq!(
            graph.serialize(),
            "acompressor=level_in=1:mode=downward:threshold=0.1:ratio=8:attack=20:\
             release=250:makeup=1:knee=2.82843:link=average:detection=rms:mix=1,\
             afade=type=out:start_time=1.98:duration=0.02:curve=tri"
        );
    }

    #[test]
    fn test_preview_graph_has_two_filters() {
        let graph = preview_graph().unwrap();
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_output_path_replaces_extension() {
        assert_eq!(
            preview_output_path(Path::new("kick.aif")),
            PathBuf::from("kick.ogg")
        );
        assert_eq!(
            preview_output_path(Path::new("stems/vocal.aiff")),
            PathBuf::from("stems/vocal.ogg")
        );
    }

    #[test]
    fn test_output_path_appends_extension_when_missing() {
        assert_eq!(
            preview_output_path(Path::new("bounce")),
            PathBuf::from("bounce.ogg")
        );
    }

    #[test]
    fn test_output_path_keeps_parent_directory() {
        assert_eq!(
            preview_output_path(Path::new("/samples/kits/kick.aif")),
            PathBuf::from("/samples/kits/kick.ogg")
        );
    }

    #[tokio::test]
    async fn test_create_preview_rejects_missing_input() {
        let runner = FfmpegRunner::new(FfmpegInfo {
            path: PathBuf::from("/nonexistent/ffmpeg"),
            version: "0.0-test".to_string(),
        });
        let generator = PreviewGenerator::new(runner);

        let result = generator
            .create_preview(Path::new("/definitely/missing/input.aif"))
            .await;

        assert!(matches!(
            result,
            Err(PreviewError::Ffmpeg(FfmpegError::InvalidInput(_)))
        ));
    }
}
