//! Display controller command bytes and wire constants

/// Display 7-bit bus address
pub const DISPLAY_ADDR: u8 = 0x3C;

/// Display width in columns
pub const WIDTH: u8 = 128;

/// Number of 8-pixel pages
pub const PAGES: u8 = 16;

/// Control byte: command stream follows
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: pixel data stream follows
pub const CONTROL_DATA: u8 = 0x40;

/// Controller commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
}

/// Power-on setup sequence, sent once as a single command transaction
pub const INIT_COMMANDS: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_ADDRESSING_MODE,
    0x00, // Horizontal addressing
    cmd::SET_MUX_RATIO,
    0x7F, // 128 lines
    cmd::DISPLAY_FOLLOW_RAM,
    cmd::DISPLAY_ON,
];

/// Cursor command triple for a column (0-127) and page (0-15)
///
/// Out-of-range values are masked into range.
pub const fn cursor_commands(column: u8, page: u8) -> [u8; 3] {
    let column = column & 0x7F;
    [
        cmd::SET_LOW_COLUMN | (column & 0x0F),
        cmd::SET_HIGH_COLUMN | (column >> 4),
        cmd::SET_PAGE_ADDR | (page & 0x0F),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_commands() {
        assert_eq!(cursor_commands(0, 0), [0x00, 0x10, 0xB0]);
        assert_eq!(cursor_commands(25, 5), [0x09, 0x11, 0xB5]);
        assert_eq!(cursor_commands(127, 15), [0x0F, 0x17, 0xBF]);
    }

    #[test]
    fn test_cursor_masks_out_of_range() {
        assert_eq!(cursor_commands(128, 16), [0x00, 0x10, 0xB0]);
    }

    #[test]
    fn test_init_sequence_ends_with_display_on() {
        assert_eq!(INIT_COMMANDS.first(), Some(&cmd::DISPLAY_OFF));
        assert_eq!(INIT_COMMANDS.last(), Some(&cmd::DISPLAY_ON));
    }
}
