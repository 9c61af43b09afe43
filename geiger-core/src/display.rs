//! Status frame rendering
//!
//! Pure formatting: the same readings always produce the same bytes, and
//! every line comes out exactly `LINE_LEN` bytes long.

use core::fmt::Write;

use heapless::String;

use geiger_protocol::{Readings, StatusFrame};

/// Scratch capacity for one formatted line before truncation
///
/// Large enough for two `u32::MAX` values plus the fixed text, so `write!`
/// never runs out of room and truncation happens in one place.
const SCRATCH_LEN: usize = 32;

/// Render readings into a complete status frame
///
/// Row 0 shows counts per second, row 1 counts per minute, each followed
/// by the peak since the last reset. Text that does not fit the 16 visible
/// columns is cut off.
pub fn render(readings: &Readings) -> StatusFrame {
    let mut frame = StatusFrame::blank();
    render_into(&mut frame, readings);
    frame
}

/// Rebuild both lines of an existing frame
pub fn render_into(frame: &mut StatusFrame, readings: &Readings) {
    let mut line: String<SCRATCH_LEN> = String::new();

    let _ = write!(
        line,
        "{} c/s (max {})",
        readings.per_second, readings.peak_per_second
    );
    frame.set_text(0, line.as_bytes());

    line.clear();
    let _ = write!(
        line,
        "{} c/m (max {})",
        readings.per_minute, readings.peak_per_minute
    );
    frame.set_text(1, line.as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;
    use geiger_protocol::LINE_LEN;

    fn readings(a: u16, b: u16, c: u32, d: u32) -> Readings {
        Readings {
            per_second: a,
            peak_per_second: b,
            per_minute: c,
            peak_per_minute: d,
        }
    }

    #[test]
    fn test_render_layout() {
        let frame = render(&readings(12, 12, 20, 20));
        let bytes = frame.as_bytes();

        assert_eq!(&bytes[0..2], &[0xFE, 0x80]);
        assert_eq!(frame.text(0), Some("12 c/s (max 12) "));
        assert_eq!(&bytes[18..20], &[0xFE, 0xC0]);
        assert_eq!(frame.text(1), Some("20 c/m (max 20) "));
    }

    #[test]
    fn test_render_pads_short_lines() {
        let frame = render(&Readings::default());
        assert_eq!(frame.text(0), Some("0 c/s (max 0)   "));
        assert_eq!(frame.text(1), Some("0 c/m (max 0)   "));
    }

    #[test]
    fn test_render_truncates_long_lines() {
        let frame = render(&readings(u16::MAX, u16::MAX, u32::MAX, u32::MAX));

        assert_eq!(frame.as_bytes().len(), 2 * LINE_LEN);
        assert_eq!(frame.text(0), Some("65535 c/s (max 6"));
        assert_eq!(frame.text(1), Some("4294967295 c/m ("));
        assert!(frame.has_valid_prefixes());
    }

    #[test]
    fn test_render_is_deterministic() {
        let r = readings(7, 9, 300, 410);
        assert_eq!(render(&r), render(&r));
    }

    #[test]
    fn test_render_into_overwrites_previous_text() {
        let mut frame = render(&readings(1000, 1000, 9999, 9999));
        render_into(&mut frame, &readings(1, 1, 1, 1));
        assert_eq!(frame, render(&readings(1, 1, 1, 1)));
    }

    #[test]
    fn test_rendered_frame_reads_back() {
        let r = readings(3, 5, 8, 8);
        assert_eq!(render(&r).readings(), Ok(r));
    }

    #[test]
    fn test_long_minute_line_still_decodes_counts() {
        // "120 c/m (max 130)" is 17 characters, one past the display
        let frame = render(&readings(2, 5, 120, 130));
        assert_eq!(frame.text(1), Some("120 c/m (max 130"));

        let partial = frame.decode().unwrap();
        assert_eq!(partial.per_second, Some(2));
        assert_eq!(partial.peak_per_second, Some(5));
        assert_eq!(partial.per_minute, Some(120));
        assert_eq!(partial.peak_per_minute, None);
    }
}
