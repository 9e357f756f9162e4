use std::io;

use anyhow::{Context, Result};
use log::{LevelFilter, debug};
use simple_logger::SimpleLogger;

use placeholder_lambda::demo::{self, DemoConfig};

fn main() -> Result<()> {
    // RUST_LOG overrides the default level.
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("failed to install logger")?;

    let config = DemoConfig::default();
    let stdout = io::stdout();
    let report = demo::run(&config, &mut stdout.lock())?;
    debug!("demo finished: {:?}", report);
    Ok(())
}
