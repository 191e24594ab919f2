//! First-line format sniffing. Every acquisition file gets exactly one
//! tag; the heuristics tolerate any byte content without failing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::format::micro::{DSC_HEADER, is_acquisition_header};
use crate::format::tag::FormatTag;

/// Classify a file by reading only its first line.
///
/// Filesystem failures propagate; undecodable content does not. A first
/// line that is not UTF-8 classifies as `Unknown`.
pub fn sniff_path(path: &Path) -> Result<FormatTag> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut raw = Vec::new();
    reader.read_until(b'\n', &mut raw)?;
    Ok(sniff_first_line(&raw))
}

/// Classify from the raw bytes of a first line (line terminator may be
/// included). Total: every byte sequence maps to exactly one tag.
///
/// The checks run in a fixed order and the first hit wins:
/// 1. descriptor header anywhere in the line, or the whole line is an
///    `A` + nine digit header
/// 2. empty line
/// 3. tab-separated floats: two of them is a packed-coordinate file,
///    three is the already-unpacked triple-column shape
/// 4. exactly 256 space-separated floats is a spectrum
pub fn sniff_first_line(raw: &[u8]) -> FormatTag {
    let mut raw = raw;
    if raw.last() == Some(&b'\n') {
        raw = &raw[..raw.len() - 1];
    }
    if raw.last() == Some(&b'\r') {
        raw = &raw[..raw.len() - 1];
    }
    let Ok(line) = std::str::from_utf8(raw) else {
        return FormatTag::Unknown;
    };

    if line.contains(DSC_HEADER) || is_acquisition_header(line) {
        return FormatTag::Descriptor;
    }
    if line.is_empty() {
        return FormatTag::EmptyFirstLine;
    }

    if let Some(n) = count_floats(line, '\t') {
        if n == 2 {
            return FormatTag::PackedCoordinate;
        }
        if n == 3 {
            return FormatTag::ThreeColumn;
        }
        // other widths fall through to the space-separated attempt
    }
    if let Some(n) = count_floats(line, ' ') {
        if n == 256 {
            return FormatTag::Spectrum;
        }
    }

    FormatTag::Unknown
}

/// Number of `sep`-separated tokens, if every token parses as a float.
/// Consecutive separators produce an empty token, which does not parse.
fn count_floats(line: &str, sep: char) -> Option<usize> {
    let mut n = 0;
    for tok in line.split(sep) {
        tok.trim().parse::<f64>().ok()?;
        n += 1;
    }
    Some(n)
}
