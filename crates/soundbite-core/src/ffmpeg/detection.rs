//! FFmpeg Detection Module
//!
//! Finds a usable ffmpeg binary on this system and reads its version.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{FfmpegError, FfmpegResult};

/// Information about the detected FFmpeg installation
#[derive(Debug, Clone)]
pub struct FfmpegInfo {
    /// Path to the ffmpeg binary
    pub path: PathBuf,
    /// FFmpeg version string
    pub version: String,
}

/// Detect FFmpeg on this system
///
/// Checks common install locations first, then falls back to a PATH search.
pub fn detect_ffmpeg() -> FfmpegResult<FfmpegInfo> {
    let path = which_ffmpeg()?;
    let version = get_ffmpeg_version(&path)?;

    debug!(path = %path.display(), version = %version, "Detected ffmpeg");

    Ok(FfmpegInfo { path, version })
}

/// Find the ffmpeg binary
fn which_ffmpeg() -> FfmpegResult<PathBuf> {
    #[cfg(target_os = "windows")]
    let binary_name = "ffmpeg.exe";

    #[cfg(not(target_os = "windows"))]
    let binary_name = "ffmpeg";

    // Try common locations first
    for path in get_common_ffmpeg_paths() {
        let ffmpeg_path = path.join(binary_name);
        if ffmpeg_path.exists() {
            return Ok(ffmpeg_path);
        }
    }

    // Fall back to PATH search using `where` (Windows) or `which` (Unix)
    #[cfg(target_os = "windows")]
    {
        let output = Command::new("where")
            .arg("ffmpeg")
            .output()
            .map_err(|_| FfmpegError::NotFound)?;

        if output.status.success() {
            let path_str = String::from_utf8_lossy(&output.stdout);
            if let Some(first_line) = path_str.lines().next() {
                return Ok(PathBuf::from(first_line.trim()));
            }
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        let output = Command::new("which")
            .arg("ffmpeg")
            .output()
            .map_err(|_| FfmpegError::NotFound)?;

        if output.status.success() {
            let path_str = String::from_utf8_lossy(&output.stdout);
            return Ok(PathBuf::from(path_str.trim()));
        }
    }

    Err(FfmpegError::NotFound)
}

/// Get common FFmpeg installation paths for the current platform
fn get_common_ffmpeg_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "windows")]
    {
        paths.push(PathBuf::from(r"C:\ffmpeg\bin"));
        paths.push(PathBuf::from(r"C:\Program Files\ffmpeg\bin"));
        paths.push(PathBuf::from(r"C:\Program Files (x86)\ffmpeg\bin"));

        // Chocolatey installation
        if let Ok(programdata) = std::env::var("ProgramData") {
            paths.push(PathBuf::from(programdata).join("chocolatey").join("bin"));
        }

        // Scoop installation
        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            paths.push(PathBuf::from(userprofile).join("scoop").join("shims"));
        }
    }

    #[cfg(target_os = "macos")]
    {
        // Homebrew paths
        paths.push(PathBuf::from("/opt/homebrew/bin"));
        paths.push(PathBuf::from("/usr/local/bin"));
        paths.push(PathBuf::from("/opt/local/bin")); // MacPorts
    }

    #[cfg(target_os = "linux")]
    {
        paths.push(PathBuf::from("/usr/bin"));
        paths.push(PathBuf::from("/usr/local/bin"));
        paths.push(PathBuf::from("/snap/bin"));
    }

    paths
}

/// Get the FFmpeg version string
fn get_ffmpeg_version(ffmpeg_path: &Path) -> FfmpegResult<String> {
    let output = Command::new(ffmpeg_path)
        .arg("-version")
        .output()
        .map_err(FfmpegError::ProcessError)?;

    if !output.status.success() {
        return Err(FfmpegError::ExecutionFailed(
            "Failed to get FFmpeg version".to_string(),
        ));
    }

    parse_version_output(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the banner line of `ffmpeg -version` output
fn parse_version_output(output: &str) -> FfmpegResult<String> {
    if let Some(first_line) = output.lines().next() {
        // Banner shape: "ffmpeg version X.X.X ..."
        if let Some(version_part) = first_line.strip_prefix("ffmpeg version ") {
            if let Some(version) = version_part.split_whitespace().next() {
                return Ok(version.to_string());
            }
        }
        // Keep the whole first line if the banner shape is unexpected
        return Ok(first_line.to_string());
    }

    Err(FfmpegError::ParseError(
        "Could not parse FFmpeg version".to_string(),
    ))
}
