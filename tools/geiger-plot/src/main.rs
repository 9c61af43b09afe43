//! ## geiger-plot
//! Reads status frames from the counter's serial port and prints one count
//! per line, ready to pipe into a live plotter such as feedgnuplot.

use std::io::{self, Write};

use clap::Parser;
use tracing::{info, Level};

mod cli;
mod error;
mod feed;

use cli::Cli;
use error::PlotError;
use feed::{Feed, OnTimeout};

fn main() -> Result<(), PlotError> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let mut port = cli.port_builder().open().map_err(|source| PlotError::Open {
        path: cli.port.clone(),
        source,
    })?;
    info!(
        port = %cli.port,
        baud = cli.baud,
        parity = ?cli.parity,
        stop_bits = ?cli.stop_bits,
        data_bits = ?cli.data_bits,
        "Reading status frames"
    );

    if cli.reset {
        feed::send_reset(&mut port)?;
        info!("Counter reset requested");
    }

    let on_timeout = if cli.timeout.is_some() {
        OnTimeout::Stop
    } else {
        OnTimeout::Wait
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut feed = Feed::new(cli.field());
    let frames = feed.run(&mut port, &mut out, on_timeout)?;
    out.flush()?;

    info!(frames, "Port closed");
    Ok(())
}
