use serde::Serialize;

use crate::format::tag::FormatTag;

/// One classified file in a scan listing. `path` is relative to the
/// input root.
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub tag: FormatTag,
    pub code: u16,
}
