//! Single-byte commands received from the host
//!
//! Commands are not framed: every received byte is looked up on its own and
//! anything unrecognised is dropped.

/// Reset all counters, the rolling window and both peaks
pub const RESET_BYTE: u8 = b'z';

/// Flash the activity indicator to show the unit is alive
pub const SELF_TEST_BYTE: u8 = b't';

/// Commands accepted over the serial receive line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Zero the pulse count, rolling window and peaks
    Reset,
    /// Run the indicator toggle sequence
    SelfTest,
}

impl Command {
    /// Decode a received byte
    ///
    /// Returns `None` for bytes that are not commands.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            RESET_BYTE => Some(Command::Reset),
            SELF_TEST_BYTE => Some(Command::SelfTest),
            _ => None,
        }
    }

    /// The byte a host sends to issue this command
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Reset => RESET_BYTE,
            Command::SelfTest => SELF_TEST_BYTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(Command::from_byte(b'z'), Some(Command::Reset));
        assert_eq!(Command::from_byte(b't'), Some(Command::SelfTest));
    }

    #[test]
    fn test_unknown_bytes_ignored() {
        for byte in [b'Z', b'T', b'\n', 0x00, 0xFE, b'r'] {
            assert_eq!(Command::from_byte(byte), None);
        }
    }

    #[test]
    fn test_to_byte_matches_decoder() {
        for cmd in [Command::Reset, Command::SelfTest] {
            assert_eq!(Command::from_byte(cmd.to_byte()), Some(cmd));
        }
    }
}
