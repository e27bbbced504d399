//! Animation metadata types.
//!
//! This module defines [`AnimationMetadata`], returned by
//! [`Animation::metadata`](crate::Animation::metadata). Metadata is gathered
//! once when the file is opened and cached for the lifetime of the
//! [`Animation`](crate::Animation).

use std::time::Duration;

/// Metadata for an animated GIF.
///
/// Frame count and duration are exact: every frame is visited once at open
/// time rather than estimated from header fields.
///
/// # Example
///
/// ```no_run
/// use unreel::Animation;
///
/// let animation = Animation::open("input.gif").unwrap();
/// let metadata = animation.metadata();
/// println!("{} frames over {:?}", metadata.frame_count, metadata.duration);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct AnimationMetadata {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Total number of frames in the animation.
    pub frame_count: u32,
    /// Total play time of one loop, summed from per-frame delays.
    pub duration: Duration,
}
