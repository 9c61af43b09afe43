//! Stream-level properties of the status parser

use geiger_protocol::{PartialReadings, Readings, StatusFrame, StatusParser};
use proptest::prelude::*;

fn encode(readings: &Readings) -> StatusFrame {
    let mut frame = StatusFrame::blank();
    let line1 = format!("{} c/s (max {})", readings.per_second, readings.peak_per_second);
    let line2 = format!("{} c/m (max {})", readings.per_minute, readings.peak_per_minute);
    frame.set_text(0, line1.as_bytes());
    frame.set_text(1, line2.as_bytes());
    frame
}

fn short_readings() -> impl Strategy<Value = Readings> {
    // Two-digit values always fit the 16 text columns
    (0u16..100, 0u16..100, 0u32..100, 0u32..100).prop_map(|(a, b, c, d)| Readings {
        per_second: a,
        peak_per_second: b,
        per_minute: c,
        peak_per_minute: d,
    })
}

proptest! {
    #[test]
    fn parser_finds_frame_after_noise(
        noise in prop::collection::vec(any::<u8>().prop_filter("no command byte", |b| *b != 0xFE), 0..64),
        readings in short_readings(),
    ) {
        let frame = encode(&readings);
        let mut stream = noise;
        stream.extend_from_slice(frame.as_bytes());

        let mut parser = StatusParser::new();
        prop_assert_eq!(parser.feed_bytes(&stream), Ok(Some(PartialReadings::from(readings))));
    }

    #[test]
    fn parser_decodes_back_to_back_frames(frames in prop::collection::vec(short_readings(), 1..8)) {
        let mut parser = StatusParser::new();
        for readings in frames {
            let frame = encode(&readings);
            prop_assert_eq!(
                parser.feed_bytes(frame.as_bytes()),
                Ok(Some(PartialReadings::from(readings)))
            );
        }
    }

    #[test]
    fn parser_keeps_leading_counts_at_any_width(
        per_second in any::<u16>(),
        peak_per_second in any::<u16>(),
        per_minute in any::<u32>(),
        peak_per_minute in any::<u32>(),
    ) {
        let frame = encode(&Readings { per_second, peak_per_second, per_minute, peak_per_minute });

        let mut parser = StatusParser::new();
        let partial = parser.feed_bytes(frame.as_bytes()).unwrap().unwrap();
        prop_assert_eq!(partial.per_second, Some(per_second));
        prop_assert_eq!(partial.per_minute, Some(per_minute));
        // A peak is either exact or absent, never a cut-short number
        prop_assert!(partial.peak_per_second.map_or(true, |p| p == peak_per_second));
        prop_assert!(partial.peak_per_minute.map_or(true, |p| p == peak_per_minute));
    }
}
