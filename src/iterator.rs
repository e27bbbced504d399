//! Lazy, pull-based sampled-frame iterator.
//!
//! [`SampledFrames`] implements [`Iterator`] and decodes on demand — each
//! call to [`next()`](Iterator::next) decodes just enough frames to reach
//! the next planned source index. Skipped frames are decoded and dropped
//! (GIF frames composite onto their predecessors, so they cannot be seeked
//! past), but only selected frames are materialized as annotated stills.
//!
//! Create a `SampledFrames` via
//! [`FrameHandle::sampled`](crate::FrameHandle::sampled).
//!
//! # Example
//!
//! ```no_run
//! use unreel::{Animation, SampleOptions, SamplePlan};
//!
//! let animation = Animation::open("input.gif")?;
//! let plan = SamplePlan::resolve(
//!     animation.path(),
//!     animation.metadata().frame_count,
//!     &SampleOptions::new(),
//! )?;
//!
//! for result in animation.frames().sampled(&plan)? {
//!     let frame = result?;
//!     frame.save_into(&plan.output_dir)?;
//! }
//! # Ok::<(), unreel::UnreelError>(())
//! ```

use image::Frames;

use crate::error::UnreelError;
use crate::frames::{SampledFrame, delay_to_millis};
use crate::sampler::SamplePlan;

/// A lazy iterator over the frames a [`SamplePlan`] selects.
///
/// Yields `Result<SampledFrame, UnreelError>` for source indices
/// `0, stride, 2×stride, …` in order. Iteration ends when:
///
/// - `max_frames` frames have been yielded — checked **before** decoding the
///   next candidate, so the budget is a hard ceiling on work as well as on
///   output, or
/// - the animation runs out of frames, or
/// - a frame fails to decode, in which case the error is yielded once and
///   the iterator fuses.
pub struct SampledFrames {
    frames: Frames<'static>,
    stride: u32,
    max_frames: u32,
    /// Source index of the next frame the decoder will produce.
    next_source_index: u32,
    /// How many frames have been yielded so far.
    emitted: u32,
    done: bool,
}

impl SampledFrames {
    pub(crate) fn new(frames: Frames<'static>, plan: &SamplePlan) -> Self {
        Self {
            frames,
            stride: plan.stride.max(1),
            max_frames: plan.max_frames,
            next_source_index: 0,
            emitted: 0,
            done: false,
        }
    }
}

impl Iterator for SampledFrames {
    type Item = Result<SampledFrame, UnreelError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        // Budget check comes first: once the ceiling is reached, the next
        // candidate is never decoded.
        if self.emitted >= self.max_frames {
            self.done = true;
            return None;
        }

        loop {
            let source_index = self.next_source_index;

            let frame = match self.frames.next() {
                Some(Ok(frame)) => frame,
                Some(Err(error)) => {
                    self.done = true;
                    return Some(Err(UnreelError::FrameDecode {
                        index: source_index,
                        reason: error.to_string(),
                    }));
                }
                None => {
                    self.done = true;
                    return None;
                }
            };

            self.next_source_index += 1;

            if source_index % self.stride != 0 {
                // Skipped frame: decoded for compositing, not yielded.
                continue;
            }

            let duration_ms = delay_to_millis(frame.delay());
            let sequence_index = self.emitted;
            self.emitted += 1;

            return Some(Ok(SampledFrame {
                sequence_index,
                source_index,
                duration_ms,
                image: frame.into_buffer(),
            }));
        }
    }
}
