//! Rolling window of per-tick samples
//!
//! Fixed-capacity ring: every slot always holds a value (zero after reset),
//! and each insert overwrites the oldest one.

/// Samples in the window; one per second gives a one-minute sum
pub const WINDOW_SECONDS: usize = 60;

/// Fixed-capacity circular buffer of tick counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollingWindow<const W: usize> {
    slots: [u16; W],
    offset: usize,
}

impl<const W: usize> Default for RollingWindow<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize> RollingWindow<W> {
    /// Create a zero-filled window
    pub const fn new() -> Self {
        Self {
            slots: [0; W],
            offset: 0,
        }
    }

    /// Zero every slot and restart insertion at slot 0
    pub fn reset(&mut self) {
        self.slots = [0; W];
        self.offset = 0;
    }

    /// Overwrite the oldest slot with `value`
    pub fn insert(&mut self, value: u16) {
        if W == 0 {
            return;
        }
        self.slots[self.offset] = value;
        self.offset += 1;
        if self.offset >= W {
            self.offset = 0;
        }
    }

    /// Sum of all slots
    ///
    /// Widened to `u32`: a full window of `u16::MAX` samples still fits for
    /// any window up to 65537 slots.
    pub fn sum(&self) -> u32 {
        self.slots.iter().map(|&s| u32::from(s)).sum()
    }

    /// Number of slots (always full)
    pub const fn capacity(&self) -> usize {
        W
    }

    /// Slot the next insert will overwrite
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Most recently inserted value
    pub fn latest(&self) -> u16 {
        if W == 0 {
            return 0;
        }
        let idx = if self.offset == 0 { W - 1 } else { self.offset - 1 };
        self.slots[idx]
    }

    /// Raw slot contents, in storage order
    pub fn slots(&self) -> &[u16; W] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_zeroed() {
        let window = RollingWindow::<WINDOW_SECONDS>::new();
        assert_eq!(window.capacity(), 60);
        assert_eq!(window.sum(), 0);
        assert!(window.slots().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_sum_of_full_window() {
        let mut window = RollingWindow::<WINDOW_SECONDS>::new();
        for i in 1..=60u16 {
            window.insert(i);
        }
        assert_eq!(window.sum(), 1830);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_overwrites_oldest() {
        let mut window = RollingWindow::<WINDOW_SECONDS>::new();
        for i in 1..=60u16 {
            window.insert(i);
        }
        // 61st insert replaces the first value (1)
        window.insert(100);
        assert_eq!(window.sum(), 1830 - 1 + 100);
        assert_eq!(window.latest(), 100);
        assert_eq!(window.offset(), 1);
    }

    #[test]
    fn test_sum_does_not_wrap() {
        let mut window = RollingWindow::<WINDOW_SECONDS>::new();
        for _ in 0..60 {
            window.insert(u16::MAX);
        }
        assert_eq!(window.sum(), 60 * u16::MAX as u32);
    }

    #[test]
    fn test_reset() {
        let mut window = RollingWindow::<4>::new();
        window.insert(5);
        window.insert(6);
        window.reset();

        assert_eq!(window.sum(), 0);
        assert_eq!(window.offset(), 0);
        assert_eq!(window.latest(), 0);
    }

    #[test]
    fn test_latest_wraps() {
        let mut window = RollingWindow::<3>::new();
        window.insert(1);
        window.insert(2);
        window.insert(3);
        assert_eq!(window.offset(), 0);
        assert_eq!(window.latest(), 3);
    }
}
