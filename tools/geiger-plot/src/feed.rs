//! Frame stream to count lines

use std::io::{self, ErrorKind, Read, Write};

use geiger_protocol::{PartialReadings, StatusParser, RESET_BYTE};
use tracing::{debug, warn};

use crate::error::PlotError;

/// Which reading each output line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    PerSecond,
    PerMinute,
}

impl Field {
    fn pick(self, readings: &PartialReadings) -> Option<u32> {
        match self {
            Field::PerSecond => readings.per_second.map(u32::from),
            Field::PerMinute => readings.per_minute,
        }
    }
}

/// What a read timeout means to [`Feed::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnTimeout {
    /// Keep waiting for the next frame
    Wait,
    /// The line went idle; stop reading
    Stop,
}

/// Ask the counter to zero its window and peaks
pub fn send_reset<W: Write>(port: &mut W) -> io::Result<()> {
    port.write_all(&[RESET_BYTE])?;
    port.flush()
}

/// Decodes status frames and writes the selected count, one per line
pub struct Feed {
    parser: StatusParser,
    field: Field,
}

impl Feed {
    pub fn new(field: Field) -> Self {
        Self {
            parser: StatusParser::new(),
            field,
        }
    }

    /// Handle one chunk of received bytes, returning frames written
    pub fn push<W: Write>(&mut self, bytes: &[u8], out: &mut W) -> io::Result<usize> {
        let mut frames = 0;

        for &byte in bytes {
            match self.parser.feed(byte) {
                Ok(Some(readings)) => {
                    debug!(?readings, "Frame decoded");
                    match self.field.pick(&readings) {
                        Some(count) => {
                            writeln!(out, "{count}")?;
                            out.flush()?;
                            frames += 1;
                        }
                        None => warn!(field = ?self.field, "Frame lacks the selected count"),
                    }
                }
                Ok(None) => {}
                Err(e) => warn!(error = ?e, "Dropping malformed frame"),
            }
        }

        Ok(frames)
    }

    /// Read until end of stream, returning the number of frames written
    pub fn run<R: Read, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        on_timeout: OnTimeout,
    ) -> Result<usize, PlotError> {
        let mut buf = [0u8; 64];
        let mut frames = 0;

        loop {
            let n = match input.read(&mut buf) {
                Ok(0) => return Ok(frames),
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == ErrorKind::TimedOut => match on_timeout {
                    OnTimeout::Wait => continue,
                    OnTimeout::Stop => {
                        debug!("Line idle, stopping");
                        return Ok(frames);
                    }
                },
                Err(e) => return Err(e.into()),
            };
            frames += self.push(&buf[..n], out)?;
        }
    }
}
