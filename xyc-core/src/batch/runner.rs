//! Sequential batch driver: classify every file in every run directory
//! and dispatch the recognized formats to their splitter.

use std::fs;

use crate::batch::walker;
use crate::config::RunConfig;
use crate::error::Result;
use crate::format::sniff;
use crate::format::tag::FormatTag;
use crate::report::FileReport;
use crate::split::{dsc, xc};
use crate::stats::RunStats;

/// Convert everything under `cfg.input_root`. Files are processed one at
/// a time; the first fatal error aborts the whole batch.
pub fn run(cfg: &RunConfig) -> Result<RunStats> {
    let mut stats = RunStats::default();

    for dir in walker::subdirectories(&cfg.input_root)? {
        let out_dir = cfg.frame_output_dir(&dir);
        fs::create_dir_all(&out_dir)?;

        for file in walker::data_files(&dir)? {
            stats.files_seen += 1;
            match sniff::sniff_path(&file)? {
                FormatTag::PackedCoordinate => {
                    let frames = xc::split_file(&file, &out_dir)?;
                    stats.xc_converted += 1;
                    stats.frames_written += frames as u64;
                    log::info!("converted {} ({frames} frames)", file.display());
                }
                FormatTag::Descriptor => {
                    let frames = dsc::split_file(&file, &out_dir)?;
                    stats.dsc_split += 1;
                    stats.frames_written += frames as u64;
                    log::info!("split {} ({frames} frames)", file.display());
                }
                other => {
                    stats.skipped += 1;
                    log::debug!("skipping {} ({})", file.display(), other.name());
                }
            }
        }
        stats.directories += 1;
    }

    log::info!(
        "run finished: {} files in {} directories, {} frames written",
        stats.files_seen,
        stats.directories,
        stats.frames_written
    );
    Ok(stats)
}

/// Classify every file under `cfg.input_root` without writing anything.
pub fn scan(cfg: &RunConfig) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();

    for dir in walker::subdirectories(&cfg.input_root)? {
        for file in walker::data_files(&dir)? {
            let tag = sniff::sniff_path(&file)?;
            let rel = file.strip_prefix(&cfg.input_root).unwrap_or(&file);
            reports.push(FileReport {
                path: rel.to_string_lossy().to_string(),
                tag,
                code: tag.code(),
            });
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn write(path: &Path, contents: &str) {
        std::fs::write(path, contents).unwrap();
    }

    fn seed_run_dir(root: &Path) -> PathBuf {
        let run = root.join("run1");
        std::fs::create_dir(&run).unwrap();
        write(&run.join("frames.xc"), "0\t5\n260\t3\n#255\t1\n");
        write(&run.join("frames.dsc"), "A000000001\n[F0]\nhello\n[F1]\nworld");
        write(&run.join("noise.txt"), "not a data file\n");
        write(&run.join(".hidden.xc"), "0\t5\n");
        run
    }

    #[test]
    fn converts_recognized_files_and_skips_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        let run = seed_run_dir(dir.path());

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: None,
        };
        let stats = run_batch(&cfg);

        assert_eq!(stats.directories, 1);
        assert_eq!(stats.files_seen, 3);
        assert_eq!(stats.xc_converted, 1);
        assert_eq!(stats.dsc_split, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.frames_written, 4);

        let out = run.join("out");
        assert_eq!(
            std::fs::read_to_string(out.join("frames.xc0.txt")).unwrap(),
            "0\t0\t5\n1\t5\t3\n"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("frames.xc1.txt")).unwrap(),
            "1\t0\t1\n"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("frames0.txt.dsc")).unwrap(),
            "A000000001\n[F0]\nhello\n"
        );
        assert_eq!(
            std::fs::read_to_string(out.join("frames1.txt.dsc")).unwrap(),
            "A000000001\n[F1]\nworld"
        );
    }

    fn run_batch(cfg: &RunConfig) -> RunStats {
        run(cfg).unwrap()
    }

    #[test]
    fn rerunning_over_an_existing_out_dir_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        seed_run_dir(dir.path());

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: None,
        };
        run_batch(&cfg);
        let stats = run_batch(&cfg);
        assert_eq!(stats.xc_converted, 1);
    }

    #[test]
    fn output_root_redirects_frame_files() {
        let dir = tempfile::tempdir().unwrap();
        seed_run_dir(dir.path());
        let out_root = dir.path().join("converted");

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: Some(out_root.clone()),
        };
        run_batch(&cfg);

        assert!(out_root.join("run1/frames.xc0.txt").exists());
        assert!(!dir.path().join("run1/out").exists());
    }

    #[test]
    fn files_in_the_root_itself_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        seed_run_dir(dir.path());
        write(&dir.path().join("top-level.xc"), "0\t5\n");

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: None,
        };
        let stats = run_batch(&cfg);
        assert_eq!(stats.files_seen, 3);
    }

    #[test]
    fn malformed_xc_aborts_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let run_dir = dir.path().join("run1");
        std::fs::create_dir(&run_dir).unwrap();
        write(&run_dir.join("bad.xc"), "0\t5\nnonsense here\n");

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: None,
        };
        assert!(run(&cfg).is_err());
    }

    #[test]
    fn scan_reports_every_file_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let run = seed_run_dir(dir.path());

        let cfg = RunConfig {
            input_root: dir.path().to_path_buf(),
            output_root: None,
        };
        let reports = scan(&cfg).unwrap();

        assert_eq!(reports.len(), 3);
        let by_path: Vec<(&str, u16)> =
            reports.iter().map(|r| (r.path.as_str(), r.code)).collect();
        assert!(by_path.contains(&("run1/frames.xc", 8210)));
        assert!(by_path.contains(&("run1/frames.dsc", 9999)));
        assert!(by_path.contains(&("run1/noise.txt", 0)));
        assert!(!run.join("out").exists());
    }
}
