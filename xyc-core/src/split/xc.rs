//! Converts packed-coordinate (XC) files into per-frame XYC text.
//!
//! An XC file is a sequence of frames separated by a literal `#`. Each
//! data line is `packed_index<TAB>count`, where the packed index folds
//! the pixel column and row into one integer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, XycError};
use crate::util::paths::file_name_of;

/// Modulus of the packed (x, y) index encoding.
const PACKED_STRIDE: i64 = 255;

/// One decoded pixel hit: column, row, event count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub x: i64,
    pub y: i64,
    pub count: i64,
}

/// Decode one `packed<TAB>count` line. Anything short of two numeric
/// tab-separated fields is a hard error; XC files are machine-written
/// and a malformed line means the file cannot be trusted.
pub fn decode_line(line: &str) -> Result<Hit> {
    let mut fields = line.split('\t');
    let packed = next_int(&mut fields, line)?;
    let count = next_int(&mut fields, line)?;
    Ok(Hit {
        x: packed.div_euclid(PACKED_STRIDE),
        y: packed.rem_euclid(PACKED_STRIDE),
        count,
    })
}

fn next_int<'a>(fields: &mut impl Iterator<Item = &'a str>, line: &str) -> Result<i64> {
    let tok = fields
        .next()
        .ok_or_else(|| XycError::Parse(format!("expected two tab-separated fields: {line:?}")))?;
    tok.trim()
        .parse()
        .map_err(|_| XycError::Parse(format!("bad integer {tok:?} in line {line:?}")))
}

/// Split `src` on `#` and write one XYC file per frame into `out_dir`,
/// named `{source name}{frame index}.txt`. Every frame gets a file, even
/// when it holds no hits, so frame indices are never skipped. Returns
/// the number of frames written (always delimiter count + 1).
pub fn split_file(src: &Path, out_dir: &Path) -> Result<usize> {
    let file_name = file_name_of(src)?;
    let contents = fs::read_to_string(src)?;

    let mut frames = 0;
    for (index, frame) in contents.split('#').enumerate() {
        let mut out = File::create(out_dir.join(format!("{file_name}{index}.txt")))?;
        for line in frame.lines().filter(|l| !l.is_empty()) {
            let hit = decode_line(line)?;
            writeln!(out, "{}\t{}\t{}", hit.x, hit.y, hit.count)?;
        }
        frames += 1;
    }
    Ok(frames)
}
