use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use esgen::cli::{args::CliArgs, driver};

fn main() -> Result<()> {
    // Zero cost unless ESGEN_LOG or RUST_LOG is set; see src/tracing_config.rs.
    esgen::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let output = driver::run(&args)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("failed to write output")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}
