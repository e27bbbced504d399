//! Error types for the `unreel` crate.
//!
//! This module defines [`UnreelError`], the unified error type returned by all
//! fallible operations in the crate. Errors carry rich context to aid
//! debugging, including file paths, frame indices, and upstream error
//! messages.

use std::{io::Error as IoError, path::PathBuf};

use image::ImageError;
use thiserror::Error;

/// The unified error type for all `unreel` operations.
///
/// Every public method that can fail returns `Result<T, UnreelError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UnreelError {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    NotFound {
        /// Path that was passed to [`crate::Animation::open`].
        path: PathBuf,
    },

    /// The file exists but could not be opened as an animated GIF.
    #[error("Failed to open {path} as a GIF: {reason}")]
    Open {
        /// Path that was passed to [`crate::Animation::open`].
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The file decodes but holds fewer than two frames.
    #[error("Not an animated GIF: {path} contains {frame_count} frame(s)")]
    NotAnimated {
        /// Path of the rejected file.
        path: PathBuf,
        /// Number of frames the file actually contains.
        frame_count: u32,
    },

    /// A frame could not be decoded.
    #[error("Failed to decode frame {index}: {reason}")]
    FrameDecode {
        /// Zero-based index of the frame that failed to decode.
        index: u32,
        /// Underlying decoder error message.
        reason: String,
    },

    /// The requested frame index exceeds the total frame count.
    #[error("Frame {index} is out of range (animation has {frame_count} frames)")]
    FrameOutOfRange {
        /// The frame index that was requested.
        index: u32,
        /// The total number of frames in the animation.
        frame_count: u32,
    },

    /// A stride of zero was provided.
    #[error("Stride must be greater than zero")]
    InvalidStride,

    /// A frame budget of zero was provided.
    #[error("Maximum frame count must be greater than zero")]
    InvalidMaxFrames,

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// An error from the `image` crate while encoding a still.
    #[error("Image processing error: {0}")]
    Image(#[from] ImageError),
}
