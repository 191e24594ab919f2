mod application;
mod presentation;

use xyc_core::error::Result;

fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    application::run()
}
