//! OLED display driver
//!
//! Talks to the display controller through a write-only [`Transport`].
//! There is no framebuffer and no read-back, so every draw call sets the
//! cursor itself before streaming data; nothing assumes the controller's
//! internal cursor survived an earlier transaction.

use heapless::Vec;

use super::command::{
    cursor_commands, CONTROL_COMMAND, CONTROL_DATA, DISPLAY_ADDR, INIT_COMMANDS, PAGES, WIDTH,
};
use super::font::{clamp_scale, stretch, Glyph, GLYPH_WIDTH, MAX_SCALE};
use super::layout::NUMBER_DIGITS;
use crate::bus::Transport;

/// Widest data row: one stretched glyph
const MAX_ROW: usize = GLYPH_WIDTH * MAX_SCALE as usize;

/// Display wire configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Commands sent by `initialize`
    pub init_commands: &'static [u8],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DISPLAY_ADDR,
            init_commands: INIT_COMMANDS,
        }
    }
}

/// Page-addressed OLED driver
pub struct DisplayDriver<T> {
    transport: T,
    config: DisplayConfig,
}

impl<T: Transport> DisplayDriver<T> {
    /// Create a driver with the default address and init sequence
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DisplayConfig::default())
    }

    /// Create a driver with a custom configuration
    pub fn with_config(transport: T, config: DisplayConfig) -> Self {
        Self { transport, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    /// Send the power-on setup sequence
    ///
    /// Must run once at startup before any other display operation.
    pub fn initialize(&mut self) {
        let commands = self.config.init_commands;
        self.command(commands);
    }

    /// Address the next data write at `column` (0-127) and `page` (0-15)
    pub fn set_cursor(&mut self, column: u8, page: u8) {
        self.command(&cursor_commands(column, page));
    }

    /// Draw one glyph at its natural size
    pub fn draw_glyph(&mut self, glyph: Glyph, column: u8, page: u8) {
        self.set_cursor(column, page);
        self.data(glyph.bitmap());
    }

    /// Draw one glyph `scale` times larger in both directions
    ///
    /// Each column byte is bit-stretched and split across `scale` page
    /// rows, lowest byte on `page`; every stretched column is repeated
    /// `scale` times horizontally. Rows that would fall below the last
    /// page are not drawn.
    pub fn draw_glyph_stretched(&mut self, glyph: Glyph, column: u8, page: u8, scale: u8) {
        let scale = clamp_scale(scale);
        let bitmap = glyph.bitmap();
        let rows = scale.min(PAGES.saturating_sub(page));

        for row in 0..rows {
            let mut bytes: Vec<u8, MAX_ROW> = Vec::new();
            for &src in bitmap {
                let out = (stretch(src, scale) >> (8 * row as u32)) as u8;
                for _ in 0..scale {
                    // Capacity is GLYPH_WIDTH * MAX_SCALE and scale is clamped
                    let _ = bytes.push(out);
                }
            }
            self.set_cursor(column, page + row);
            self.data(&bytes);
        }
    }

    /// Draw a three-digit number, leading zeros included
    ///
    /// Values above 999 lose their thousands.
    pub fn draw_number(&mut self, value: u16, column: u8, page: u8) {
        let mut column = column;
        for digit in digits(value) {
            self.draw_glyph(Glyph::Digit(digit), column, page);
            column = column.wrapping_add(GLYPH_WIDTH as u8);
        }
    }

    /// Draw a three-digit number with stretched glyphs
    pub fn draw_number_stretched(&mut self, value: u16, column: u8, page: u8, scale: u8) {
        let advance = (GLYPH_WIDTH as u8) * clamp_scale(scale);
        let mut column = column;
        for digit in digits(value) {
            self.draw_glyph_stretched(Glyph::Digit(digit), column, page, scale);
            column = column.wrapping_add(advance);
        }
    }

    /// Blank the whole screen, one byte per cursor position
    ///
    /// This is thousands of transactions; use it at startup only.
    pub fn clear(&mut self) {
        self.paint(0x00);
    }

    /// Light every pixel (display self-test)
    pub fn fill(&mut self) {
        self.paint(0xFF);
    }

    fn paint(&mut self, byte: u8) {
        for page in 0..PAGES {
            for column in 0..WIDTH {
                self.set_cursor(column, page);
                self.data(&[byte]);
            }
        }
    }

    fn command(&mut self, bytes: &[u8]) {
        self.send(CONTROL_COMMAND, bytes);
    }

    fn data(&mut self, bytes: &[u8]) {
        self.send(CONTROL_DATA, bytes);
    }

    fn send(&mut self, control: u8, bytes: &[u8]) {
        self.transport.begin(self.config.address);
        self.transport.write(control);
        for &b in bytes {
            self.transport.write(b);
        }
        self.transport.end();
    }
}

/// Hundreds, tens and units of `value`
fn digits(value: u16) -> [u8; NUMBER_DIGITS] {
    [100, 10, 1].map(|div| ((value / div) % 10) as u8)
}
