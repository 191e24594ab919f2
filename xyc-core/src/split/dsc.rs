//! Splits composite descriptor (DSC) files into one descriptor per frame.
//!
//! A composite descriptor is a single acquisition header followed by
//! `[F<n>]`-delimited frame blocks. Each block is re-wrapped with its own
//! header so downstream tools see an ordinary single-frame descriptor.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::format::micro::{self, DSC_HEADER};
use crate::util::paths::file_name_of;

/// Split `src` on frame markers and write one descriptor per non-empty
/// segment into `out_dir`, named `{source name minus .dsc}{index}.txt.dsc`.
/// Indices are dense over the kept segments: an empty segment between two
/// markers consumes no index, and the written `[F<n>]` lines are
/// renumbered accordingly. Returns the number of frames written.
pub fn split_file(src: &Path, out_dir: &Path) -> Result<usize> {
    let file_name = file_name_of(src)?;
    let base = file_name.strip_suffix(".dsc").unwrap_or(file_name);

    let contents = fs::read_to_string(src)?;
    // The top-level acquisition header belongs to no frame.
    let contents = micro::strip_acquisition_header(&contents);
    let contents = contents.trim();

    let mut index = 0;
    for segment in micro::split_on_frame_markers(contents) {
        if segment.is_empty() {
            continue;
        }
        // Drop the newline that followed the consumed marker.
        let body = drop_first_char(segment);
        let mut out = File::create(out_dir.join(format!("{base}{index}.txt.dsc")))?;
        write!(out, "{DSC_HEADER}\n[F{index}]\n{body}")?;
        index += 1;
    }
    Ok(index)
}

fn drop_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}
