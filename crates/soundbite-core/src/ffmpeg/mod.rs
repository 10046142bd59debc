//! FFmpeg Integration Module
//!
//! Locates a system FFmpeg installation and executes preview commands
//! against it. The filter-graph model never touches a process; everything
//! that does lives here.

mod detection;
mod runner;

pub use detection::{detect_ffmpeg, FfmpegInfo};
pub use runner::{build_preview_args, FfmpegRunner};

/// FFmpeg-related error types
#[derive(Debug, thiserror::Error)]
pub enum FfmpegError {
    #[error("FFmpeg not found. Please install FFmpeg or add it to the PATH.")]
    NotFound,

    #[error("FFmpeg execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid input file: {0}")]
    InvalidInput(String),

    #[error("Output path error: {0}")]
    OutputError(String),

    #[error("Process error: {0}")]
    ProcessError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type FfmpegResult<T> = Result<T, FfmpegError>;
