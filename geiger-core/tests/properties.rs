//! Counting and aggregation invariants

use geiger_core::counter::EventCounter;
use geiger_core::display::render;
use geiger_core::rate::RateTracker;
use geiger_core::window::{RollingWindow, WINDOW_SECONDS};
use geiger_protocol::LINE_LEN;
use proptest::prelude::*;

proptest! {
    #[test]
    fn snapshot_returns_pulses_since_last_tick(ticks in prop::collection::vec(0u32..70_000, 1..4)) {
        let counter = EventCounter::new();
        for pulses in ticks {
            for _ in 0..pulses {
                counter.record_pulse();
            }
            prop_assert_eq!(counter.snapshot_and_reset(), (pulses % 65_536) as u16);
            prop_assert_eq!(counter.pending(), 0);
        }
    }

    #[test]
    fn window_sum_covers_last_sixty(values in prop::collection::vec(any::<u16>(), 0..200)) {
        let mut window = RollingWindow::<WINDOW_SECONDS>::new();
        for &v in &values {
            window.insert(v);
        }

        let start = values.len().saturating_sub(WINDOW_SECONDS);
        let expected: u32 = values[start..].iter().map(|&v| u32::from(v)).sum();
        prop_assert_eq!(window.sum(), expected);
    }

    #[test]
    fn peaks_are_running_maxima(counts in prop::collection::vec(0u16..5_000, 1..150)) {
        let mut tracker = RateTracker::new();
        let mut max_second = 0u16;
        let mut max_minute = 0u32;
        let mut previous = None;

        for (i, &count) in counts.iter().enumerate() {
            let readings = tracker.record(count);

            let start = (i + 1).saturating_sub(WINDOW_SECONDS);
            let window_sum: u32 = counts[start..=i].iter().map(|&c| u32::from(c)).sum();
            max_second = max_second.max(count);
            max_minute = max_minute.max(window_sum);

            prop_assert_eq!(readings.per_second, count);
            prop_assert_eq!(readings.per_minute, window_sum);
            prop_assert_eq!(readings.peak_per_second, max_second);
            prop_assert_eq!(readings.peak_per_minute, max_minute);

            if let Some((prev_s, prev_m)) = previous {
                prop_assert!(readings.peak_per_second >= prev_s);
                prop_assert!(readings.peak_per_minute >= prev_m);
            }
            previous = Some((readings.peak_per_second, readings.peak_per_minute));
        }
    }

    #[test]
    fn reset_zeroes_everything(counts in prop::collection::vec(any::<u16>(), 0..100), pending in 0u16..1000) {
        let counter = EventCounter::new();
        let mut tracker = RateTracker::new();
        for &c in &counts {
            tracker.record(c);
        }
        for _ in 0..pending {
            counter.record_pulse();
        }

        geiger_core::command::reset_all(&counter, &mut tracker);

        prop_assert_eq!(counter.pending(), 0);
        prop_assert!(tracker.window().slots().iter().all(|&s| s == 0));
        prop_assert_eq!(tracker.peak_per_second(), 0);
        prop_assert_eq!(tracker.peak_per_minute(), 0);
    }

    #[test]
    fn rendered_lines_are_fixed_width(a in any::<u16>(), b in any::<u16>(), c in any::<u32>(), d in any::<u32>()) {
        let readings = geiger_core::Readings {
            per_second: a,
            peak_per_second: b,
            per_minute: c,
            peak_per_minute: d,
        };
        let frame = render(&readings);

        prop_assert_eq!(frame.line(0).unwrap().len(), LINE_LEN);
        prop_assert_eq!(frame.line(1).unwrap().len(), LINE_LEN);
        prop_assert!(frame.has_valid_prefixes());
        prop_assert_eq!(render(&readings), frame);
    }
}
