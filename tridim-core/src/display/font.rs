//! 6x8 glyph table and the pixel-doubling transform
//!
//! Each glyph is six column bytes; bit 0 of a byte is the top pixel of the
//! page. The table only holds what the dimmer screen draws: digits, the
//! channel label letters, the percent sign and the selection arrow.

/// Glyph width in columns
pub const GLYPH_WIDTH: usize = 6;

/// Largest supported stretch factor (8 * 4 bits fit a `u32`)
pub const MAX_SCALE: u8 = 4;

#[rustfmt::skip]
static FONT: [[u8; GLYPH_WIDTH]; 17] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00], // 1
    [0x72, 0x49, 0x49, 0x49, 0x46, 0x00], // 2
    [0x21, 0x41, 0x49, 0x4D, 0x33, 0x00], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x31, 0x00], // 6
    [0x41, 0x21, 0x11, 0x09, 0x07, 0x00], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // 8
    [0x46, 0x49, 0x49, 0x29, 0x1E, 0x00], // 9
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0xC6, 0x66, 0x30, 0x18, 0xCC, 0xC4], // %
    [0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // C
    [0x7F, 0x04, 0x04, 0x04, 0x78, 0x00], // H
    [0x00, 0x08, 0x1C, 0x1C, 0x3E, 0x7F], // arrow head
    [0x1C, 0x1C, 0x1C, 0x1C, 0x1C, 0x1C], // arrow tail
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // blank segment
];

/// A drawable glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Decimal digit (taken modulo 10)
    Digit(u8),
    Space,
    Percent,
    LetterC,
    LetterH,
    ArrowHead,
    ArrowTail,
    /// Used to erase an arrow segment
    Blank,
}

impl Glyph {
    /// Glyph for the last decimal digit of `value`
    pub const fn digit(value: u8) -> Self {
        Glyph::Digit(value % 10)
    }

    /// Row in the font table
    pub const fn index(self) -> usize {
        match self {
            Glyph::Digit(d) => (d % 10) as usize,
            Glyph::Space => 10,
            Glyph::Percent => 11,
            Glyph::LetterC => 12,
            Glyph::LetterH => 13,
            Glyph::ArrowHead => 14,
            Glyph::ArrowTail => 15,
            Glyph::Blank => 16,
        }
    }

    /// Column bytes of the glyph
    pub fn bitmap(self) -> &'static [u8; GLYPH_WIDTH] {
        &FONT[self.index()]
    }
}

/// Expand each bit of `byte` into `scale` adjacent bits
///
/// Bit `k` of the source lands on bits `scale*k ..= scale*k + scale - 1`
/// of the result. Byte `r` of the result is the `r`-th page row of the
/// stretched column. `scale` is clamped to `1..=MAX_SCALE`.
pub const fn stretch(byte: u8, scale: u8) -> u32 {
    let scale = clamp_scale(scale) as u32;
    if scale == 2 {
        return stretch2(byte) as u32;
    }

    let run = (1u32 << scale) - 1;
    let mut out = 0u32;
    let mut k = 0;
    while k < 8 {
        if byte & (1 << k) != 0 {
            out |= run << (scale * k);
        }
        k += 1;
    }
    out
}

/// Clamp a stretch factor to the supported range
pub const fn clamp_scale(scale: u8) -> u8 {
    if scale == 0 {
        1
    } else if scale > MAX_SCALE {
        MAX_SCALE
    } else {
        scale
    }
}

/// Bit doubling by mask spreading: `abcdefgh -> aabbccddeeffgghh`
const fn stretch2(byte: u8) -> u16 {
    let mut x = byte as u16;
    x = ((x & 0xF0) << 4) | (x & 0x0F);
    x = ((x << 2) | x) & 0x3333;
    x = ((x << 1) | x) & 0x5555;
    x | (x << 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_glyphs() {
        assert_eq!(Glyph::digit(7), Glyph::Digit(7));
        assert_eq!(Glyph::digit(12), Glyph::Digit(2));
        assert_eq!(Glyph::Digit(0).bitmap(), &[0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00]);
        assert_eq!(Glyph::Digit(13).index(), 3);
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(Glyph::Percent.bitmap()[0], 0xC6);
        assert_eq!(Glyph::ArrowTail.bitmap(), &[0x1C; 6]);
        assert_eq!(Glyph::Blank.bitmap(), &[0x00; 6]);
        assert_eq!(Glyph::Space.bitmap(), Glyph::Blank.bitmap());
    }

    #[test]
    fn test_stretch_scale2_example() {
        // Bits 5 and 7 -> bits 10,11 and 14,15
        let out = stretch(0b1010_0000, 2);
        assert_eq!(out, 0xCC00);
        assert_eq!(out as u8, 0x00); // first page row
        assert_eq!((out >> 8) as u8, 0xCC); // second page row
    }

    #[test]
    fn test_stretch2_matches_interleave_formula() {
        for byte in 0..=255u8 {
            let mut expected = 0u32;
            for k in 0..8 {
                if byte & (1 << k) != 0 {
                    expected |= 0b11 << (2 * k);
                }
            }
            assert_eq!(stretch(byte, 2), expected, "byte {:#04x}", byte);
        }
    }

    #[test]
    fn test_stretch_other_scales() {
        assert_eq!(stretch(0xA5, 1), 0xA5);
        assert_eq!(stretch(0b0000_0011, 3), 0b11_1111);
        assert_eq!(stretch(0x80, 3), 0xE0_0000);
        assert_eq!(stretch(0xFF, 4), 0xFFFF_FFFF);
        assert_eq!(stretch(0x01, 4), 0x0F);
    }

    #[test]
    fn test_scale_clamped() {
        assert_eq!(stretch(0xA5, 0), 0xA5);
        assert_eq!(stretch(0xFF, 9), 0xFFFF_FFFF);
    }
}
