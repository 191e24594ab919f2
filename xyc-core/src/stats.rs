use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub directories: u64,
    pub files_seen: u64,
    pub xc_converted: u64,
    pub dsc_split: u64,
    pub skipped: u64,
    pub frames_written: u64,
}
