//! Status frame layout and stream parser
//!
//! Frame format (two lines, 18 bytes each):
//! - COMMAND (1 byte): 0xFE SerLCD command introducer
//! - CURSOR (1 byte): 0x80 for row 0, 0xC0 for row 1
//! - TEXT (16 bytes): ASCII, right padded with spaces
//!
//! Row 0 text reads `"<n> c/s (max <m>)"`, row 1 `"<n> c/m (max <m>)"`.

use heapless::Vec;

use crate::readings::{PartialReadings, Readings};

/// SerLCD command introducer byte
pub const SERLCD_COMMAND: u8 = 0xFE;

/// Control bytes at the start of every line
pub const PREFIX_LEN: usize = 2;

/// Bytes per line, prefix included
pub const LINE_LEN: usize = 18;

/// Lines per frame
pub const LINE_COUNT: usize = 2;

/// Bytes per complete frame
pub const FRAME_LEN: usize = LINE_LEN * LINE_COUNT;

/// Visible text columns per line
pub const TEXT_COLS: usize = LINE_LEN - PREFIX_LEN;

/// Cursor positioning prefix for each line
pub const LINE_PREFIXES: [[u8; PREFIX_LEN]; LINE_COUNT] =
    [[SERLCD_COMMAND, 0x80], [SERLCD_COMMAND, 0xC0]];

/// Padding byte for unused text columns
pub const PAD: u8 = b' ';

/// Unit suffix for each line
const LINE_UNITS: [&str; LINE_COUNT] = ["c/s", "c/m"];

/// Errors that can occur while reading a status frame back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusError {
    /// A line did not start with its cursor prefix
    InvalidPrefix,
    /// No line starts with a readable `<n> <unit>`, or (for
    /// [`StatusFrame::readings`]) a value was cut off
    Malformed,
}

/// One complete display payload
///
/// Always exactly [`FRAME_LEN`] bytes with both line prefixes in place;
/// text columns are only ever replaced a whole line at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFrame {
    bytes: [u8; FRAME_LEN],
}

impl Default for StatusFrame {
    fn default() -> Self {
        Self::blank()
    }
}

impl StatusFrame {
    /// A frame with both prefixes and all-space text
    pub const fn blank() -> Self {
        let mut bytes = [PAD; FRAME_LEN];
        let mut row = 0;
        while row < LINE_COUNT {
            bytes[row * LINE_LEN] = LINE_PREFIXES[row][0];
            bytes[row * LINE_LEN + 1] = LINE_PREFIXES[row][1];
            row += 1;
        }
        Self { bytes }
    }

    /// Wrap raw bytes received from the wire
    pub fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    /// Raw bytes in transmission order
    pub fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }

    /// Replace the text of a line
    ///
    /// Text longer than [`TEXT_COLS`] is truncated, shorter text is padded
    /// with spaces. Returns the number of text bytes kept, or 0 for an
    /// out-of-range row.
    pub fn set_text(&mut self, row: usize, text: &[u8]) -> usize {
        if row >= LINE_COUNT {
            return 0;
        }

        let start = row * LINE_LEN + PREFIX_LEN;
        let cols = &mut self.bytes[start..start + TEXT_COLS];
        let kept = text.len().min(TEXT_COLS);
        cols[..kept].copy_from_slice(&text[..kept]);
        cols[kept..].fill(PAD);
        kept
    }

    /// A full line, prefix included
    pub fn line(&self, row: usize) -> Option<&[u8]> {
        if row < LINE_COUNT {
            Some(&self.bytes[row * LINE_LEN..(row + 1) * LINE_LEN])
        } else {
            None
        }
    }

    /// The visible text of a line, padding included
    pub fn text(&self, row: usize) -> Option<&str> {
        let line = self.line(row)?;
        core::str::from_utf8(&line[PREFIX_LEN..]).ok()
    }

    /// Check that both lines carry their cursor prefix
    pub fn has_valid_prefixes(&self) -> bool {
        LINE_PREFIXES
            .iter()
            .enumerate()
            .all(|(row, prefix)| self.bytes[row * LINE_LEN..row * LINE_LEN + PREFIX_LEN] == prefix[..])
    }

    /// Read back whatever values the text columns still hold
    ///
    /// Each line is read on its own. The leading `<n> <unit>` always fits
    /// the display; the `(max <m>)` tail is only taken when it arrived
    /// whole. Fails with [`StatusError::Malformed`] only when neither line
    /// yields a value.
    pub fn decode(&self) -> Result<PartialReadings, StatusError> {
        if !self.has_valid_prefixes() {
            return Err(StatusError::InvalidPrefix);
        }

        let (per_second, peak_per_second) = match self.parse_line(0) {
            Some((value, peak)) => (
                u16::try_from(value).ok(),
                peak.and_then(|p| u16::try_from(p).ok()),
            ),
            None => (None, None),
        };
        let (per_minute, peak_per_minute) = match self.parse_line(1) {
            Some((value, peak)) => (Some(value), peak),
            None => (None, None),
        };

        if per_second.is_none() && per_minute.is_none() {
            return Err(StatusError::Malformed);
        }

        Ok(PartialReadings {
            per_second,
            peak_per_second,
            per_minute,
            peak_per_minute,
        })
    }

    /// Read back all four values, failing if any was cut off
    pub fn readings(&self) -> Result<Readings, StatusError> {
        self.decode()?.complete().ok_or(StatusError::Malformed)
    }

    fn parse_line(&self, row: usize) -> Option<(u32, Option<u32>)> {
        let text = self.text(row)?.trim_end_matches(PAD as char);

        let (value, rest) = text.split_once(' ')?;
        let rest = rest.strip_prefix(LINE_UNITS[row])?;
        let value = value.parse().ok()?;

        // A truncated tail loses its closing parenthesis, so a cut-short
        // peak is never mistaken for a complete one
        let peak = rest
            .strip_prefix(" (max ")
            .and_then(|r| r.strip_suffix(')'))
            .and_then(|r| r.parse().ok());

        Some((value, peak))
    }
}

/// State machine for picking status frames out of a byte stream
///
/// The line-1 prefix is the only synchronisation point, so a reader that
/// attaches mid-frame skips ahead to the next full frame.
#[derive(Debug, Clone)]
pub struct StatusParser {
    state: ParseState,
    buffer: Vec<u8, FRAME_LEN>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for a SerLCD command byte
    WaitingForCommand,
    /// Got the command byte, waiting for the row 0 cursor byte
    WaitingForCursor,
    /// Collecting the rest of the frame
    ReadingFrame,
}

impl Default for StatusParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusParser {
    /// Create a new status parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForCommand,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForCommand;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(readings))` when a complete frame decodes,
    /// `Ok(None)` when more bytes are needed, or `Err` when a complete
    /// frame was collected but nothing in it could be read.
    pub fn feed(&mut self, byte: u8) -> Result<Option<PartialReadings>, StatusError> {
        match self.state {
            ParseState::WaitingForCommand => {
                if byte == SERLCD_COMMAND {
                    self.state = ParseState::WaitingForCursor;
                }
                Ok(None)
            }
            ParseState::WaitingForCursor => {
                if byte == LINE_PREFIXES[0][1] {
                    self.buffer.clear();
                    // Cannot fail: the buffer was just cleared
                    let _ = self.buffer.extend_from_slice(&LINE_PREFIXES[0]);
                    self.state = ParseState::ReadingFrame;
                } else if byte != SERLCD_COMMAND {
                    self.state = ParseState::WaitingForCommand;
                }
                Ok(None)
            }
            ParseState::ReadingFrame => {
                let _ = self.buffer.push(byte);
                if self.buffer.len() < FRAME_LEN {
                    return Ok(None);
                }

                let mut bytes = [0u8; FRAME_LEN];
                bytes.copy_from_slice(&self.buffer);
                self.reset();
                StatusFrame::from_bytes(bytes).decode().map(Some)
            }
        }
    }

    /// Feed multiple bytes to the parser
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Result<Option<PartialReadings>, StatusError> {
        for &byte in bytes {
            if let Some(readings) = self.feed(byte)? {
                return Ok(Some(readings));
            }
        }
        Ok(None)
    }
}
