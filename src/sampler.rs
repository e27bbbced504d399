//! Sampling configuration and plan resolution.
//!
//! [`SampleOptions`] is a builder that carries the caller's unresolved
//! choices (frame budget, explicit stride, output directory, progress
//! callback) through extraction methods without polluting every function
//! signature. [`SamplePlan`] is the validated result of resolving those
//! options against a concrete animation: all defaults filled in, all
//! invariants checked.
//!
//! # Example
//!
//! ```no_run
//! use unreel::{SampleOptions, extract_frames};
//!
//! let options = SampleOptions::new()
//!     .with_max_frames(60)
//!     .with_stride(2)
//!     .with_output_dir("stills");
//!
//! let summary = extract_frames("input.gif", &options).unwrap();
//! println!("{} frames written", summary.extracted);
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::UnreelError;
use crate::progress::{NoOpProgress, ProgressCallback};

/// Default frame budget when none is configured.
pub const DEFAULT_MAX_FRAMES: u32 = 30;

/// Configuration for a sampling extraction.
///
/// All fields have defaults — a default-constructed value extracts at most
/// [`DEFAULT_MAX_FRAMES`] frames with an automatically computed stride into a
/// directory derived from the input path.
#[derive(Clone)]
pub struct SampleOptions {
    /// Hard ceiling on the number of extracted frames.
    pub(crate) max_frames: u32,
    /// Explicit stride. `None` means compute from the frame count.
    pub(crate) stride: Option<u32>,
    /// Explicit output directory. `None` means derive from the input path.
    pub(crate) output_dir: Option<PathBuf>,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
}

impl Debug for SampleOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SampleOptions")
            .field("max_frames", &self.max_frames)
            .field("stride", &self.stride)
            .field("output_dir", &self.output_dir)
            .finish_non_exhaustive()
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleOptions {
    /// Create options with default settings.
    ///
    /// Defaults: budget of [`DEFAULT_MAX_FRAMES`] frames, automatic stride,
    /// derived output directory, no progress callback.
    pub fn new() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            stride: None,
            output_dir: None,
            progress: Arc::new(NoOpProgress),
        }
    }

    /// Set the maximum number of frames to extract.
    ///
    /// The extraction loop stops before decoding the next candidate once
    /// this many frames have been emitted. A value of zero is rejected at
    /// plan resolution with [`UnreelError::InvalidMaxFrames`].
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: u32) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Extract one frame every `stride` source frames.
    ///
    /// When unset, the stride is computed so the whole animation fits the
    /// frame budget. A value of zero is rejected at plan resolution with
    /// [`UnreelError::InvalidStride`].
    #[must_use]
    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    /// Write extracted stills into `dir` instead of the derived directory.
    #[must_use]
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Attach a progress callback.
    ///
    /// The callback is invoked once per saved frame and once more when the
    /// extraction completes.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }
}

/// A fully resolved, validated sampling plan.
///
/// Produced by [`SamplePlan::resolve`] from [`SampleOptions`] plus the frame
/// count of a concrete animation. Once a plan exists, `stride` and
/// `max_frames` are both at least 1 and `output_dir` is concrete.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct SamplePlan {
    /// Hard ceiling on the number of extracted frames.
    pub max_frames: u32,
    /// Sample one frame every `stride` source frames, starting at frame 0.
    pub stride: u32,
    /// Directory the stills are written into.
    pub output_dir: PathBuf,
}

impl SamplePlan {
    /// Resolve options against an animation's frame count.
    ///
    /// Fills in the automatic stride (`max(1, frame_count / max_frames)`,
    /// integer division) and the derived output directory, and validates
    /// everything the extraction loop relies on.
    ///
    /// # Errors
    ///
    /// - [`UnreelError::InvalidMaxFrames`] if the frame budget is zero.
    /// - [`UnreelError::NotAnimated`] if the animation has fewer than two
    ///   frames.
    /// - [`UnreelError::InvalidStride`] if an explicit stride of zero was
    ///   configured.
    pub fn resolve(
        input: &Path,
        frame_count: u32,
        options: &SampleOptions,
    ) -> Result<Self, UnreelError> {
        if options.max_frames == 0 {
            return Err(UnreelError::InvalidMaxFrames);
        }

        if frame_count < 2 {
            return Err(UnreelError::NotAnimated {
                path: input.to_path_buf(),
                frame_count,
            });
        }

        let stride = match options.stride {
            Some(0) => return Err(UnreelError::InvalidStride),
            Some(stride) => stride,
            None => (frame_count / options.max_frames).max(1),
        };

        let output_dir = options
            .output_dir
            .clone()
            .unwrap_or_else(|| crate::output::derive_output_dir(input));

        Ok(Self {
            max_frames: options.max_frames,
            stride,
            output_dir,
        })
    }

    /// Number of frames this plan will extract from an animation with
    /// `frame_count` frames: `min(max_frames, ceil(frame_count / stride))`.
    pub fn expected_count(&self, frame_count: u32) -> u32 {
        frame_count.div_ceil(self.stride).min(self.max_frames)
    }

    /// The source frame indices this plan selects, in order.
    ///
    /// Starts at frame 0 and steps by `stride`, capped at `max_frames`
    /// entries.
    pub fn source_indices(&self, frame_count: u32) -> Vec<u32> {
        (0..frame_count)
            .step_by(self.stride as usize)
            .take(self.max_frames as usize)
            .collect()
    }
}
