//! Soundbite Core Library
//!
//! Batch audio preview generation built on FFmpeg.
//! This library contains the filter graph model, FFmpeg detection and
//! execution, audio source scanning, and the preview pipeline.

pub mod ffmpeg;
pub mod filters;
pub mod preview;
pub mod scan;

// Re-export common types
pub use ffmpeg::{build_preview_args, detect_ffmpeg, FfmpegError, FfmpegInfo, FfmpegRunner};
pub use filters::{AudioFilter, Filter, FilterError, FilterGraph, ParamValue};
pub use preview::{preview_graph, preview_output_path, PreviewError, PreviewGenerator};
pub use scan::{find_aiff_sources, ScanError};
