//! The sampling extraction pipeline.
//!
//! [`extract_frames`] is the one-call entry point: open the input, resolve a
//! [`SamplePlan`](crate::SamplePlan), create the output directory, and save
//! every selected frame as an annotated PNG still. The same pipeline is
//! available as [`Animation::extract`](crate::Animation::extract) for an
//! already-opened animation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    animation::Animation, error::UnreelError, progress::ProgressTracker, sampler::SampleOptions,
    sampler::SamplePlan,
};

/// What an extraction run produced.
///
/// Returned by [`extract_frames`] and
/// [`Animation::extract`](crate::Animation::extract).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ExtractionSummary {
    /// Directory the stills were written into.
    pub output_dir: PathBuf,
    /// Number of stills written.
    pub extracted: u32,
    /// Total number of frames in the source animation.
    pub total_frames: u32,
    /// The stride the run used (configured or computed).
    pub stride: u32,
}

/// Open `path` and extract a sampled subset of its frames as PNG stills.
///
/// Equivalent to [`Animation::open`] followed by
/// [`Animation::extract`](crate::Animation::extract).
///
/// # Errors
///
/// - [`UnreelError::NotFound`] if `path` does not exist.
/// - [`UnreelError::Open`] / [`UnreelError::FrameDecode`] if the file cannot
///   be decoded.
/// - [`UnreelError::NotAnimated`] if it holds fewer than two frames.
/// - [`UnreelError::InvalidStride`] / [`UnreelError::InvalidMaxFrames`] for
///   zero-valued options.
/// - [`UnreelError::Io`] / [`UnreelError::Image`] if the directory or a
///   still cannot be written. Stills written before the failure are left in
///   place.
///
/// # Example
///
/// ```no_run
/// use unreel::{SampleOptions, extract_frames};
///
/// let summary = extract_frames("input.gif", &SampleOptions::new())?;
/// println!(
///     "{} of {} frames -> {}",
///     summary.extracted,
///     summary.total_frames,
///     summary.output_dir.display(),
/// );
/// # Ok::<(), unreel::UnreelError>(())
/// ```
pub fn extract_frames<P: AsRef<Path>>(
    path: P,
    options: &SampleOptions,
) -> Result<ExtractionSummary, UnreelError> {
    let animation = Animation::open(path)?;
    animation.extract(options)
}

/// Drive the decode-and-save loop for an opened animation.
pub(crate) fn run(
    animation: &Animation,
    options: &SampleOptions,
) -> Result<ExtractionSummary, UnreelError> {
    let total_frames = animation.metadata.frame_count;
    let plan = SamplePlan::resolve(&animation.path, total_frames, options)?;

    // Idempotent: a pre-existing directory is reused, existing stills are
    // overwritten.
    fs::create_dir_all(&plan.output_dir)?;

    let expected = plan.expected_count(total_frames);
    log::debug!(
        "Extracting {} of {} frames from {} (stride {}) into {}",
        expected,
        total_frames,
        animation.path.display(),
        plan.stride,
        plan.output_dir.display(),
    );

    let mut tracker = ProgressTracker::new(options.progress.clone(), Some(u64::from(expected)));
    let mut extracted: u32 = 0;

    for result in animation.frames().sampled(&plan)? {
        let frame = result?;
        let output_path = frame.save_into(&plan.output_dir)?;
        extracted += 1;

        tracker.advance(u64::from(frame.source_index));
        log::debug!(
            "Saved frame {} -> {}",
            frame.source_index,
            output_path.display(),
        );
    }

    tracker.finish();

    log::info!(
        "Extracted {} frame(s) from {} to {}",
        extracted,
        animation.path.display(),
        plan.output_dir.display(),
    );

    Ok(ExtractionSummary {
        output_dir: plan.output_dir,
        extracted,
        total_frames,
        stride: plan.stride,
    })
}
