//! Output path derivation and frame file naming.
//!
//! Helpers shared by the extraction pipeline and the CLI: deriving the
//! default output directory from the input path and building the per-frame
//! file names.

use std::path::{Path, PathBuf};

/// Derive the default output directory for an input animation.
///
/// The directory sits next to the input and is named after it with a
/// `_frames` suffix replacing the extension: `clips/loading.gif` becomes
/// `clips/loading_frames`. Inputs without an extension keep their full name:
/// `loading` becomes `loading_frames`.
pub fn derive_output_dir(input: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push("_frames");
    input.with_file_name(name)
}

/// Build the file name for one extracted still.
///
/// `sequence_index` is the dense extraction-order index and is zero-padded to
/// three digits so files sort correctly; `source_index` is the frame's index
/// in the animation; `duration_ms` is its display time in milliseconds.
/// Example: `frame_001_f3_d40ms.png`.
pub fn frame_file_name(sequence_index: u32, source_index: u32, duration_ms: u32) -> String {
    format!("frame_{sequence_index:03}_f{source_index}_d{duration_ms}ms.png")
}
