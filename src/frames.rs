//! Frame extraction operations.
//!
//! This module provides [`FrameHandle`] for pulling frames out of an opened
//! [`Animation`](crate::Animation), and [`SampledFrame`] for the annotated
//! stills the sampling pipeline produces. Stills are fully composited RGBA
//! buffers: the decoder applies palette lookup, frame disposal, and
//! transparency before they reach this crate.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::{Path, PathBuf};

use image::{AnimationDecoder, Delay, RgbaImage};

use crate::{
    animation::Animation, error::UnreelError, iterator::SampledFrames, sampler::SamplePlan,
};

/// Frame extraction operations for one animation.
///
/// Obtained via [`Animation::frames`]. Each method opens a fresh decoder
/// over the input file and decodes forward from frame 0; the decoder is
/// dropped when the method (or the returned iterator) is done.
pub struct FrameHandle<'a> {
    pub(crate) animation: &'a Animation,
}

impl FrameHandle<'_> {
    /// Extract a single frame by index (0-based).
    ///
    /// Decodes forward from the start of the animation until the requested
    /// frame is reached. GIF frames composite onto their predecessors, so
    /// there is no cheaper way to materialize an arbitrary frame.
    ///
    /// # Errors
    ///
    /// - [`UnreelError::FrameOutOfRange`] if `index` exceeds the frame
    ///   count.
    /// - [`UnreelError::Open`] if the file can no longer be opened.
    /// - [`UnreelError::FrameDecode`] if decoding fails on the way.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use unreel::Animation;
    ///
    /// let animation = Animation::open("input.gif")?;
    /// let image = animation.frames().frame(3)?;
    /// image.save("third_frame.png")?;
    /// # Ok::<(), unreel::UnreelError>(())
    /// ```
    pub fn frame(&self, index: u32) -> Result<RgbaImage, UnreelError> {
        let frame_count = self.animation.metadata.frame_count;
        if index >= frame_count {
            return Err(UnreelError::FrameOutOfRange { index, frame_count });
        }

        let decoder = crate::animation::open_decoder(&self.animation.path)?;
        for (current, frame) in decoder.into_frames().enumerate() {
            let frame = frame.map_err(|error| UnreelError::FrameDecode {
                index: current as u32,
                reason: error.to_string(),
            })?;

            if current as u32 == index {
                return Ok(frame.into_buffer());
            }
        }

        Err(UnreelError::FrameDecode {
            index,
            reason: "animation ended before the requested frame".to_string(),
        })
    }

    /// Extract a frame and save it directly to a file.
    ///
    /// Convenience wrapper around [`frame`](FrameHandle::frame); the output
    /// format is inferred from the file extension.
    ///
    /// # Errors
    ///
    /// Returns errors from [`frame`](FrameHandle::frame), or
    /// [`UnreelError::Image`] if the image cannot be written.
    pub fn save_frame<P: AsRef<Path>>(&self, index: u32, path: P) -> Result<(), UnreelError> {
        let image = self.frame(index)?;
        image.save(path)?;
        Ok(())
    }

    /// Iterate over the frames a [`SamplePlan`] selects.
    ///
    /// The returned iterator decodes lazily: each call to `next()` decodes
    /// just enough frames to reach the next planned index, then yields it as
    /// a [`SampledFrame`]. See [`SampledFrames`] for the stopping rules.
    ///
    /// # Errors
    ///
    /// Returns [`UnreelError::Open`] if the file can no longer be opened.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use unreel::{Animation, SampleOptions, SamplePlan};
    ///
    /// let animation = Animation::open("input.gif")?;
    /// let plan = SamplePlan::resolve(
    ///     animation.path(),
    ///     animation.metadata().frame_count,
    ///     &SampleOptions::new(),
    /// )?;
    ///
    /// for result in animation.frames().sampled(&plan)? {
    ///     let frame = result?;
    ///     println!("{}", frame.file_name());
    /// }
    /// # Ok::<(), unreel::UnreelError>(())
    /// ```
    pub fn sampled(&self, plan: &SamplePlan) -> Result<SampledFrames, UnreelError> {
        let decoder = crate::animation::open_decoder(&self.animation.path)?;
        Ok(SampledFrames::new(decoder.into_frames(), plan))
    }
}

/// One extracted frame, annotated with its place in the animation.
pub struct SampledFrame {
    /// Dense extraction-order index (0, 1, 2, …).
    pub sequence_index: u32,
    /// Index of this frame in the source animation (0, stride, 2×stride, …).
    pub source_index: u32,
    /// Display duration of this frame in milliseconds; 0 when the file
    /// stores none.
    pub duration_ms: u32,
    /// The fully composited frame pixels.
    pub image: RgbaImage,
}

impl Debug for SampledFrame {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SampledFrame")
            .field("sequence_index", &self.sequence_index)
            .field("source_index", &self.source_index)
            .field("duration_ms", &self.duration_ms)
            .finish_non_exhaustive()
    }
}

impl SampledFrame {
    /// File name this frame is saved under, e.g. `frame_001_f3_d40ms.png`.
    pub fn file_name(&self) -> String {
        crate::output::frame_file_name(self.sequence_index, self.source_index, self.duration_ms)
    }

    /// Save this frame as a PNG inside `dir` and return the written path.
    ///
    /// Existing files are overwritten, which makes repeated extractions of
    /// the same input idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`UnreelError::Image`] if the encode or write fails.
    pub fn save_into(&self, dir: &Path) -> Result<PathBuf, UnreelError> {
        let path = dir.join(self.file_name());
        self.image.save(&path)?;
        Ok(path)
    }
}

/// Round a frame delay to whole milliseconds.
pub(crate) fn delay_to_millis(delay: Delay) -> u32 {
    let (numerator, denominator) = delay.numer_denom_ms();
    if denominator == 0 {
        0
    } else {
        (numerator + denominator / 2) / denominator
    }
}
