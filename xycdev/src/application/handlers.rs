use std::path::PathBuf;

use xyc_core::RunConfig;
use xyc_core::batch::runner;
use xyc_core::error::Result;

pub fn handle_convert(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let cfg = RunConfig {
        input_root: input,
        output_root: output,
    };
    let stats = runner::run(&cfg)?;
    eprintln!(
        "convert: {} dirs, {} files, {} xc, {} dsc, {} skipped, {} frames",
        stats.directories,
        stats.files_seen,
        stats.xc_converted,
        stats.dsc_split,
        stats.skipped,
        stats.frames_written
    );
    Ok(())
}

pub fn handle_scan(input: PathBuf, json: bool) -> Result<()> {
    let cfg = RunConfig {
        input_root: input,
        output_root: None,
    };
    let reports = runner::scan(&cfg)?;
    if json {
        let text = serde_json::to_string_pretty(&reports)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        println!("{text}");
    } else {
        for r in &reports {
            println!("{:<6} {:<18} {}", r.code, r.tag.name(), r.path);
        }
    }
    Ok(())
}
