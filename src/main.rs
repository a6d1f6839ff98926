use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use plum_board::demo::demo_config::DemoConfig;
use plum_board::demo::demo_driver::{run_demo, DemoError};

fn main() -> Result<(), DemoError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = DemoConfig::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
