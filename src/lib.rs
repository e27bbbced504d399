//! # unreel
//!
//! Unreel animated GIFs — sample a bounded set of frames and save each as an
//! annotated PNG still.
//!
//! `unreel` opens an animated GIF, picks every Nth frame up to a configurable
//! budget, and writes each pick as a lossless RGBA PNG whose file name
//! records its extraction order, source frame index, and display duration.
//! Decoding is powered by the [`image`](https://crates.io/crates/image)
//! crate, so palette lookup, frame disposal, and transparency are already
//! applied by the time a frame reaches you.
//!
//! ## Quick Start
//!
//! ### Extract a Sampled Frame Set
//!
//! ```no_run
//! use unreel::{SampleOptions, extract_frames};
//!
//! let summary = extract_frames("input.gif", &SampleOptions::new()).unwrap();
//! println!(
//!     "{} stills in {}",
//!     summary.extracted,
//!     summary.output_dir.display(),
//! );
//! ```
//!
//! ### Inspect Before Extracting
//!
//! ```no_run
//! use unreel::{Animation, SampleOptions};
//!
//! let animation = Animation::open("input.gif").unwrap();
//! println!("{} frames", animation.metadata().frame_count);
//!
//! let options = SampleOptions::new().with_max_frames(60).with_stride(2);
//! let summary = animation.extract(&options).unwrap();
//! ```
//!
//! ### Work With Frames Directly
//!
//! ```no_run
//! use unreel::{Animation, SampleOptions, SamplePlan};
//!
//! let animation = Animation::open("input.gif").unwrap();
//! let plan = SamplePlan::resolve(
//!     animation.path(),
//!     animation.metadata().frame_count,
//!     &SampleOptions::new(),
//! ).unwrap();
//!
//! for result in animation.frames().sampled(&plan).unwrap() {
//!     let frame = result.unwrap();
//!     println!("frame {} shown for {}ms", frame.source_index, frame.duration_ms);
//! }
//! ```
//!
//! ## Features
//!
//! - **Bounded sampling** — a hard frame budget (default 30) with an
//!   automatically computed stride, so a 300-frame animation and a 10-frame
//!   one both produce a manageable set of stills
//! - **Annotated file names** — `frame_001_f3_d40ms.png` carries the
//!   extraction order, source index, and display duration
//! - **Exact metadata** — frame count and total duration come from a full
//!   decode pass, not from header guesswork
//! - **Lazy iteration** — pull-based [`SampledFrames`] decodes one frame at
//!   a time; peak memory is a single frame
//! - **Single-frame access** — pull any frame by index as an
//!   [`image::RgbaImage`]
//! - **Progress callbacks** — observe long extractions via
//!   [`ProgressCallback`]
//! - **Idempotent output** — re-running an extraction overwrites the same
//!   files in place

pub mod animation;
pub mod error;
pub mod extract;
pub mod frames;
pub mod iterator;
pub mod metadata;
pub mod output;
pub mod progress;
pub mod sampler;

pub use animation::Animation;
pub use error::UnreelError;
pub use extract::{ExtractionSummary, extract_frames};
pub use frames::{FrameHandle, SampledFrame};
pub use iterator::SampledFrames;
pub use metadata::AnimationMetadata;
pub use progress::{ProgressCallback, ProgressInfo};
pub use sampler::{DEFAULT_MAX_FRAMES, SampleOptions, SamplePlan};
