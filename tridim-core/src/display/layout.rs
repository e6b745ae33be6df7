//! Screen layout
//!
//! Fixed at build time. Each channel owns a block of pages:
//!
//! ```text
//! page b     C H n   <-=     label + selection arrow
//! page b+2   ddd             duty (0-255)
//! page b+3   ppp%            percentage (0-100)
//! ```

use super::command::{PAGES, WIDTH};
use super::font::{clamp_scale, GLYPH_WIDTH, MAX_SCALE};
use crate::channel::{ChannelId, CHANNEL_COUNT};

/// Digits drawn per number
pub const NUMBER_DIGITS: usize = 3;

/// Errors in a layout definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// A channel block runs past the last page
    PageOutOfRange(ChannelId),
    /// Something is drawn past the last column
    ColumnOutOfRange,
    /// Two channel blocks share a page
    Overlap(ChannelId, ChannelId),
    /// Stretch factor outside 1..=MAX_SCALE
    InvalidScale(u8),
}

/// Pages used by one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelRegion {
    /// Label and arrow row
    pub label_page: u8,
    /// Duty readout row
    pub duty_page: u8,
    /// Percentage readout row (first row when stretched)
    pub percent_page: u8,
}

/// Placement of every screen element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Layout {
    /// First page of each channel's block
    pub blocks: [u8; CHANNEL_COUNT],
    /// Duty row offset within a block
    pub duty_offset: u8,
    /// Percentage row offset within a block
    pub percent_offset: u8,
    /// Column of both numbers
    pub number_column: u8,
    /// Columns of the `C`, `H` and channel digit glyphs
    pub label_columns: [u8; 3],
    /// Column of the arrow head
    pub arrow_head_column: u8,
    /// Column of the arrow tail
    pub arrow_tail_column: u8,
    /// Stretch factor of the percentage readout (1 = normal size)
    pub percent_scale: u8,
}

impl Default for Layout {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Layout {
    /// Device screen: blocks at pages 0, 5 and 10
    pub const DEFAULT: Self = Self {
        blocks: [0, 5, 10],
        duty_offset: 2,
        percent_offset: 3,
        number_column: 0,
        label_columns: [0, 7, 14],
        arrow_head_column: 25,
        arrow_tail_column: 31,
        percent_scale: 1,
    };

    /// Pages of a channel's block
    pub const fn region(&self, channel: ChannelId) -> ChannelRegion {
        let base = self.blocks[channel.index()];
        ChannelRegion {
            label_page: base,
            duty_page: base + self.duty_offset,
            percent_page: base + self.percent_offset,
        }
    }

    /// Stretch factor of the percentage readout, clamped to the supported range
    pub const fn percent_scale(&self) -> u8 {
        clamp_scale(self.percent_scale)
    }

    /// Column of the `%` sign after the percentage digits
    pub const fn percent_sign_column(&self) -> u8 {
        self.number_column + (NUMBER_DIGITS * GLYPH_WIDTH) as u8 * self.percent_scale()
    }

    /// Last page (inclusive) of a channel's block
    const fn block_end(&self, channel: ChannelId) -> u8 {
        let region = self.region(channel);
        let percent_end = region.percent_page + self.percent_scale() - 1;
        let mut end = region.label_page;
        if region.duty_page > end {
            end = region.duty_page;
        }
        if percent_end > end {
            end = percent_end;
        }
        end
    }

    /// Check that every element fits on screen and blocks do not overlap
    ///
    /// Usable in a `const` assertion.
    pub const fn validate(&self) -> Result<(), LayoutError> {
        if self.percent_scale == 0 || self.percent_scale > MAX_SCALE {
            return Err(LayoutError::InvalidScale(self.percent_scale));
        }

        let percent_last = self.percent_offset as u16 + self.percent_scale as u16 - 1;
        let offset_last = if self.duty_offset as u16 > percent_last {
            self.duty_offset as u16
        } else {
            percent_last
        };

        let mut i = 0;
        while i < CHANNEL_COUNT {
            if self.blocks[i] as u16 + offset_last >= PAGES as u16 {
                return Err(LayoutError::PageOutOfRange(ChannelId::ALL[i]));
            }
            i += 1;
        }

        let mut i = 0;
        while i < CHANNEL_COUNT {
            let mut j = i + 1;
            while j < CHANNEL_COUNT {
                let (a, b) = (ChannelId::ALL[i], ChannelId::ALL[j]);
                let (a_start, a_end) = (self.blocks[i], self.block_end(a));
                let (b_start, b_end) = (self.blocks[j], self.block_end(b));
                if a_start <= b_end && b_start <= a_end {
                    return Err(LayoutError::Overlap(a, b));
                }
                j += 1;
            }
            i += 1;
        }

        let glyph = GLYPH_WIDTH as u16;
        let digits = NUMBER_DIGITS as u16;
        let scale = self.percent_scale as u16;
        let numbers_fit = fits(self.number_column, digits * glyph)
            && fits(self.number_column, (digits + 1) * glyph * scale);
        let labels_fit = fits(self.label_columns[0], glyph)
            && fits(self.label_columns[1], glyph)
            && fits(self.label_columns[2], glyph);
        let arrows_fit = fits(self.arrow_head_column, glyph) && fits(self.arrow_tail_column, glyph);
        if !(numbers_fit && labels_fit && arrows_fit) {
            return Err(LayoutError::ColumnOutOfRange);
        }

        Ok(())
    }
}

/// Whether `width` columns starting at `column` stay on screen
const fn fits(column: u8, width: u16) -> bool {
    column as u16 + width <= WIDTH as u16
}
