//! Dimmer screen drawing
//!
//! Builds the channel readouts on top of the glyph primitives. After boot
//! only [`DisplayDriver::draw_channel_update`] runs, and it redraws just
//! the arrow positions and the active channel's two numbers.

use super::driver::DisplayDriver;
use super::font::Glyph;
use super::layout::Layout;
use crate::bus::Transport;
use crate::channel::{percent_of, ChannelId};

impl<T: Transport> DisplayDriver<T> {
    /// Draw `C`, `H` and the channel digit on `page`
    pub fn draw_channel_label(&mut self, layout: &Layout, page: u8, channel: ChannelId) {
        let [c, h, n] = layout.label_columns;
        self.draw_glyph(Glyph::LetterC, c, page);
        self.draw_glyph(Glyph::LetterH, h, page);
        self.draw_glyph(Glyph::digit(channel.number()), n, page);
    }

    /// Blank all three arrow positions
    ///
    /// There is no framebuffer to diff against, so every position is
    /// erased rather than only the previously active one.
    pub fn clear_arrows(&mut self, layout: &Layout) {
        for ch in ChannelId::ALL {
            let page = layout.region(ch).label_page;
            self.draw_glyph(Glyph::Blank, layout.arrow_head_column, page);
            self.draw_glyph(Glyph::Blank, layout.arrow_tail_column, page);
        }
    }

    /// Draw the selection arrow next to a channel's label
    pub fn draw_arrow(&mut self, layout: &Layout, channel: ChannelId) {
        let page = layout.region(channel).label_page;
        self.draw_glyph(Glyph::ArrowHead, layout.arrow_head_column, page);
        self.draw_glyph(Glyph::ArrowTail, layout.arrow_tail_column, page);
    }

    /// Draw a channel's duty and percentage numbers
    pub fn draw_readout(&mut self, layout: &Layout, channel: ChannelId, duty: u8) {
        let region = layout.region(channel);
        self.draw_number(duty as u16, layout.number_column, region.duty_page);

        let percent = percent_of(duty) as u16;
        match layout.percent_scale() {
            1 => self.draw_number(percent, layout.number_column, region.percent_page),
            scale => self.draw_number_stretched(
                percent,
                layout.number_column,
                region.percent_page,
                scale,
            ),
        }
    }

    /// Draw the `%` sign after a channel's percentage
    pub fn draw_percent_sign(&mut self, layout: &Layout, channel: ChannelId) {
        let page = layout.region(channel).percent_page;
        let column = layout.percent_sign_column();
        match layout.percent_scale() {
            1 => self.draw_glyph(Glyph::Percent, column, page),
            scale => self.draw_glyph_stretched(Glyph::Percent, column, page, scale),
        }
    }

    /// Incremental update after a channel change: arrow, duty, percentage
    pub fn draw_channel_update(&mut self, layout: &Layout, channel: ChannelId, duty: u8) {
        self.clear_arrows(layout);
        self.draw_arrow(layout, channel);
        self.draw_readout(layout, channel, duty);
    }

    /// Full boot screen: labels, zero readouts, `%` signs, arrow on `active`
    ///
    /// Expects a cleared display.
    pub fn draw_static_screen(&mut self, layout: &Layout, duties: &[u8; 3], active: ChannelId) {
        for ch in ChannelId::ALL {
            let region = layout.region(ch);
            self.draw_channel_label(layout, region.label_page, ch);
            self.draw_readout(layout, ch, duties[ch.index()]);
            self.draw_percent_sign(layout, ch);
        }
        self.draw_arrow(layout, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    /// Records (column, page, first data byte) for every glyph drawn
    #[derive(Default)]
    struct GlyphLog {
        cursor: Option<(u8, u8)>,
        in_data: bool,
        pending: Vec<u8, 4>,
        first_byte: bool,
        glyphs: Vec<(u8, u8, u8), 64>,
        byte_index: usize,
    }

    impl Transport for GlyphLog {
        fn begin(&mut self, _address: u8) {
            self.pending.clear();
            self.byte_index = 0;
            self.first_byte = true;
        }

        fn write(&mut self, byte: u8) {
            if self.byte_index == 0 {
                self.in_data = byte == 0x40;
            } else if !self.in_data && self.byte_index <= 3 {
                let _ = self.pending.push(byte);
            } else if self.in_data && self.first_byte {
                let (col, page) = self.cursor.expect("data before cursor");
                self.glyphs.push((col, page, byte)).unwrap();
                self.first_byte = false;
            }
            self.byte_index += 1;
        }

        fn end(&mut self) {
            if !self.in_data && self.pending.len() == 3 {
                let col = (self.pending[0] & 0x0F) | ((self.pending[1] & 0x07) << 4);
                let page = self.pending[2] & 0x0F;
                self.cursor = Some((col, page));
            }
        }
    }

    fn log() -> DisplayDriver<GlyphLog> {
        DisplayDriver::new(GlyphLog::default())
    }

    #[test]
    fn test_channel_label() {
        let mut d = log();
        d.draw_channel_label(&Layout::DEFAULT, 5, ChannelId::Two);
        let g = d.release().glyphs;
        assert_eq!(
            g.as_slice(),
            &[
                (0, 5, Glyph::LetterC.bitmap()[0]),
                (7, 5, Glyph::LetterH.bitmap()[0]),
                (14, 5, Glyph::Digit(2).bitmap()[0]),
            ]
        );
    }

    #[test]
    fn test_clear_arrows_blanks_all_positions() {
        let mut d = log();
        d.clear_arrows(&Layout::DEFAULT);
        let g = d.release().glyphs;
        let positions: Vec<(u8, u8), 8> = g.iter().map(|&(c, p, _)| (c, p)).collect();
        assert_eq!(
            positions.as_slice(),
            &[(25, 0), (31, 0), (25, 5), (31, 5), (25, 10), (31, 10)]
        );
        assert!(g.iter().all(|&(_, _, b)| b == 0));
    }

    #[test]
    fn test_channel_update_touches_only_its_region() {
        let mut d = log();
        d.draw_channel_update(&Layout::DEFAULT, ChannelId::Three, 3);
        let g = d.release().glyphs;

        // 6 blanks + 2 arrow parts + 3 duty digits + 3 percent digits
        assert_eq!(g.len(), 14);
        assert_eq!(&g[6..8], &[(25, 10, 0x00), (31, 10, 0x1C)]);
        // Duty 003 on page 12, percentage 001 on page 13
        assert_eq!(g[10], (12, 12, Glyph::Digit(3).bitmap()[0]));
        assert_eq!(g[13], (12, 13, Glyph::Digit(1).bitmap()[0]));
        assert!(g[8..].iter().all(|&(_, p, _)| p == 12 || p == 13));
    }

    #[test]
    fn test_static_screen() {
        let mut d = log();
        d.draw_static_screen(&Layout::DEFAULT, &[0; 3], ChannelId::One);
        let g = d.release().glyphs;

        // Per channel: 3 label + 3 duty + 3 percent + 1 sign; then arrow
        assert_eq!(g.len(), 3 * 10 + 2);
        assert!(g.contains(&(18, 3, Glyph::Percent.bitmap()[0])));
        assert!(g.contains(&(18, 8, Glyph::Percent.bitmap()[0])));
        assert!(g.contains(&(18, 13, Glyph::Percent.bitmap()[0])));
        assert_eq!(g[g.len() - 1], (31, 0, 0x1C));
    }
}
