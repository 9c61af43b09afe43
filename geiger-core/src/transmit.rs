//! Status frame transmitter
//!
//! Two-state machine owning the single display buffer:
//!
//! ```text
//!            begin / load
//!   ┌──────┐ ───────────────▶ ┌──────────┐
//!   │ Idle │                  │ Draining │ ──┐ next_byte
//!   └──────┘ ◀─────────────── └──────────┘ ◀─┘ (one byte per ready event)
//!             last byte sent
//! ```
//!
//! The tick side only ever calls [`Transmitter::begin`]; bytes leave through
//! [`Transmitter::next_byte`] from whatever context sees the UART become
//! ready. Nothing here waits on the line.

use geiger_protocol::{StatusFrame, FRAME_LEN};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transmitter state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TxState {
    /// No frame pending
    Idle,
    /// A frame is partly sent
    Draining,
}

/// What to do when a tick produces a frame while the previous one is still
/// draining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverlapPolicy {
    /// Keep draining the old frame and drop the new one
    #[default]
    Skip,
    /// Overwrite the buffer and start again from its first byte
    ///
    /// Every line starts with a cursor command, so the display recovers
    /// from the cut-off line on the next frame.
    Restart,
}

/// Result of handing a new frame to the transmitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadOutcome {
    /// Transmitter was idle; the new frame is now draining
    Started,
    /// Previous frame still draining; the new one was dropped
    Skipped,
    /// Previous frame abandoned; the new one is draining from the start
    Restarted,
}

impl LoadOutcome {
    /// Whether the sender should be woken for a fresh frame
    pub fn needs_drain(self) -> bool {
        !matches!(self, LoadOutcome::Skipped)
    }
}

/// Single-buffer frame transmitter
#[derive(Debug, Clone)]
pub struct Transmitter {
    frame: StatusFrame,
    cursor: usize,
    state: TxState,
    policy: OverlapPolicy,
    skipped: u32,
}

impl Default for Transmitter {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}

impl Transmitter {
    /// Create an idle transmitter
    pub const fn new(policy: OverlapPolicy) -> Self {
        Self {
            frame: StatusFrame::blank(),
            cursor: 0,
            state: TxState::Idle,
            policy,
            skipped: 0,
        }
    }

    /// Rebuild the buffer in place and start draining it
    ///
    /// `fill` only runs when the buffer is free to be rebuilt under the
    /// current policy, so a skipped tick never touches bytes in flight.
    pub fn begin<F>(&mut self, fill: F) -> LoadOutcome
    where
        F: FnOnce(&mut StatusFrame),
    {
        let outcome = match (self.state, self.policy) {
            (TxState::Idle, _) => LoadOutcome::Started,
            (TxState::Draining, OverlapPolicy::Skip) => {
                self.skipped = self.skipped.wrapping_add(1);
                return LoadOutcome::Skipped;
            }
            (TxState::Draining, OverlapPolicy::Restart) => LoadOutcome::Restarted,
        };

        fill(&mut self.frame);
        self.cursor = 0;
        self.state = TxState::Draining;
        outcome
    }

    /// Copy a ready-made frame into the buffer and start draining it
    pub fn load(&mut self, frame: &StatusFrame) -> LoadOutcome {
        self.begin(|buf| buf.clone_from(frame))
    }

    /// Take the next byte to send, for one channel-ready event
    ///
    /// Returns `None` once idle. Handing out the last byte of a frame moves
    /// the transmitter back to idle.
    pub fn next_byte(&mut self) -> Option<u8> {
        if self.state != TxState::Draining {
            return None;
        }

        let byte = self.frame.as_bytes()[self.cursor];
        self.advance();
        Some(byte)
    }

    /// Drop any frame in flight and go idle
    ///
    /// Used after a write error; the next tick brings a fresh frame.
    pub fn abort(&mut self) {
        self.cursor = 0;
        self.state = TxState::Idle;
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor >= FRAME_LEN {
            self.abort();
        }
    }

    /// Current state
    pub fn state(&self) -> TxState {
        self.state
    }

    /// Whether a frame is in flight
    pub fn is_draining(&self) -> bool {
        self.state == TxState::Draining
    }

    /// Bytes of the current frame still to send
    pub fn remaining(&self) -> usize {
        match self.state {
            TxState::Idle => 0,
            TxState::Draining => FRAME_LEN - self.cursor,
        }
    }

    /// Frames dropped under [`OverlapPolicy::Skip`] (wrapping)
    pub fn skipped(&self) -> u32 {
        self.skipped
    }

    /// Active overlap policy
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Change the overlap policy; takes effect on the next tick
    pub fn set_policy(&mut self, policy: OverlapPolicy) {
        self.policy = policy;
    }

    /// The buffer being drained
    pub fn frame(&self) -> &StatusFrame {
        &self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    fn frame(text: &[u8]) -> StatusFrame {
        let mut frame = StatusFrame::blank();
        frame.set_text(0, text);
        frame
    }

    #[test]
    fn test_idle_yields_nothing() {
        let mut tx = Transmitter::default();
        assert_eq!(tx.state(), TxState::Idle);
        assert_eq!(tx.next_byte(), None);
        assert_eq!(tx.remaining(), 0);
    }

    #[test]
    fn test_drains_whole_frame_then_idles() {
        let mut tx = Transmitter::default();
        let f = frame(b"1 c/s (max 1)");
        assert_eq!(tx.load(&f), LoadOutcome::Started);
        assert!(tx.is_draining());

        let mut out = Vec::<u8, FRAME_LEN>::new();
        while let Some(byte) = tx.next_byte() {
            out.push(byte).unwrap();
        }

        assert_eq!(out.as_slice(), f.as_bytes());
        assert_eq!(tx.state(), TxState::Idle);
    }

    #[test]
    fn test_skip_policy_keeps_old_frame() {
        let mut tx = Transmitter::new(OverlapPolicy::Skip);
        let first = frame(b"first");
        tx.load(&first);
        tx.next_byte();

        let mut filled = false;
        let outcome = tx.begin(|_| filled = true);

        assert_eq!(outcome, LoadOutcome::Skipped);
        assert!(!outcome.needs_drain());
        assert!(!filled);
        assert_eq!(tx.skipped(), 1);
        assert_eq!(tx.frame(), &first);
        assert_eq!(tx.remaining(), FRAME_LEN - 1);
    }

    #[test]
    fn test_restart_policy_replaces_frame() {
        let mut tx = Transmitter::new(OverlapPolicy::Restart);
        tx.load(&frame(b"first"));
        for _ in 0..10 {
            tx.next_byte();
        }

        let second = frame(b"second");
        assert_eq!(tx.load(&second), LoadOutcome::Restarted);
        assert_eq!(tx.remaining(), FRAME_LEN);
        assert_eq!(tx.next_byte(), Some(0xFE));
        assert_eq!(tx.frame(), &second);
        assert_eq!(tx.skipped(), 0);
    }

    #[test]
    fn test_load_after_drain_starts_again() {
        let mut tx = Transmitter::new(OverlapPolicy::Skip);
        tx.load(&frame(b"a"));
        while tx.next_byte().is_some() {}

        assert_eq!(tx.load(&frame(b"b")), LoadOutcome::Started);
        assert_eq!(tx.skipped(), 0);
    }

    #[test]
    fn test_abort_mid_frame_goes_idle() {
        let mut tx = Transmitter::default();
        tx.load(&frame(b"x"));
        for _ in 0..5 {
            tx.next_byte();
        }

        tx.abort();
        assert_eq!(tx.state(), TxState::Idle);
        assert_eq!(tx.next_byte(), None);

        // The next frame starts from its first byte
        assert_eq!(tx.load(&frame(b"y")), LoadOutcome::Started);
        assert_eq!(tx.remaining(), FRAME_LEN);
    }
}
