//! Core [`Animation`] implementation.
//!
//! `Animation` is the main entry point for the crate. It opens an animated
//! GIF, walks it once to gather exact metadata, and provides access to
//! [`FrameHandle`] for frame extraction.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::Duration,
};

use image::{AnimationDecoder, ImageDecoder, codecs::gif::GifDecoder};

use crate::{
    error::UnreelError,
    extract::ExtractionSummary,
    frames::FrameHandle,
    metadata::AnimationMetadata,
    sampler::SampleOptions,
};

/// An opened animated GIF.
///
/// Created via [`Animation::open`], this struct holds the input path and
/// cached metadata. It keeps no file handle: each extraction method opens a
/// fresh decoder and drops it when done. Use
/// [`frames()`](Animation::frames) to obtain an extractor, or
/// [`extract()`](Animation::extract) to run the whole sampling pipeline.
///
/// # Example
///
/// ```no_run
/// use unreel::{Animation, SampleOptions};
///
/// let animation = Animation::open("input.gif").unwrap();
/// println!("{} frames", animation.metadata().frame_count);
///
/// let summary = animation.extract(&SampleOptions::new()).unwrap();
/// println!("wrote {} stills to {}", summary.extracted, summary.output_dir.display());
/// ```
#[derive(Debug, Clone)]
pub struct Animation {
    /// Path to the opened file (kept for reopening and error messages).
    pub(crate) path: PathBuf,
    /// Cached metadata gathered at open time.
    pub(crate) metadata: AnimationMetadata,
}

impl Animation {
    /// Open an animated GIF for extraction.
    ///
    /// Checks that the file exists, constructs a GIF decoder, and walks
    /// every frame once to record the exact frame count and total duration.
    /// Frames are decoded and dropped one at a time, so peak memory stays at
    /// a single frame regardless of animation length.
    ///
    /// Single-frame files open successfully — metadata inspection is still
    /// useful for them — but any attempt to resolve a sampling plan against
    /// them fails with [`UnreelError::NotAnimated`].
    ///
    /// # Errors
    ///
    /// - [`UnreelError::NotFound`] if `path` does not exist.
    /// - [`UnreelError::Open`] if the file is not a decodable GIF.
    /// - [`UnreelError::FrameDecode`] if a frame fails to decode during the
    ///   counting scan.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use unreel::{Animation, UnreelError};
    ///
    /// let animation = Animation::open("input.gif")?;
    /// # Ok::<(), UnreelError>(())
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, UnreelError> {
        let path = path.as_ref();
        let canonical_path = path.to_path_buf();

        log::debug!("Opening animation: {}", canonical_path.display());

        if !path.exists() {
            return Err(UnreelError::NotFound {
                path: canonical_path,
            });
        }

        let decoder = open_decoder(&canonical_path)?;
        let (width, height) = decoder.dimensions();

        // Walk the animation once for an exact count; GIF headers carry no
        // trustworthy frame total.
        let mut frame_count: u32 = 0;
        let mut duration = Duration::ZERO;
        for frame in decoder.into_frames() {
            let frame = frame.map_err(|error| UnreelError::FrameDecode {
                index: frame_count,
                reason: error.to_string(),
            })?;
            duration += Duration::from(frame.delay());
            frame_count += 1;
        }

        let metadata = AnimationMetadata {
            width,
            height,
            frame_count,
            duration,
        };

        log::info!(
            "Opened animation: {} ({}x{}, {} frames, {:.2}s)",
            canonical_path.display(),
            metadata.width,
            metadata.height,
            metadata.frame_count,
            metadata.duration.as_secs_f64(),
        );

        Ok(Self {
            path: canonical_path,
            metadata,
        })
    }

    /// Get a reference to the cached metadata.
    ///
    /// Metadata is gathered once during [`open`](Animation::open) and does
    /// not require additional decoding.
    pub fn metadata(&self) -> &AnimationMetadata {
        &self.metadata
    }

    /// Path this animation was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Obtain a [`FrameHandle`] for extracting frames.
    pub fn frames(&self) -> FrameHandle<'_> {
        FrameHandle { animation: self }
    }

    /// Run the sampling pipeline: resolve a plan from `options`, create the
    /// output directory, and save every selected frame as a PNG still.
    ///
    /// See [`extract_frames`](crate::extract_frames) for the one-call
    /// variant that also opens the file.
    ///
    /// # Errors
    ///
    /// Returns plan-resolution errors from
    /// [`SamplePlan::resolve`](crate::SamplePlan::resolve), and
    /// [`UnreelError::FrameDecode`], [`UnreelError::Io`] or
    /// [`UnreelError::Image`] from the decode-and-save loop. Stills written
    /// before a failure are left in place.
    pub fn extract(&self, options: &SampleOptions) -> Result<ExtractionSummary, UnreelError> {
        crate::extract::run(self, options)
    }
}

/// Open a fresh GIF decoder over `path`.
pub(crate) fn open_decoder(path: &Path) -> Result<GifDecoder<BufReader<File>>, UnreelError> {
    let file = File::open(path).map_err(|error| UnreelError::Open {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })?;

    GifDecoder::new(BufReader::new(file)).map_err(|error| UnreelError::Open {
        path: path.to_path_buf(),
        reason: error.to_string(),
    })
}
