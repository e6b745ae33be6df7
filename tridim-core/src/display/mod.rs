//! Page-addressed monochrome OLED display
//!
//! The controller (SSD1327-class, 128 columns x 16 pages of 8 pixels) is
//! written to without a framebuffer: every draw call addresses its own
//! cursor and streams glyph columns straight to display RAM. Screen updates
//! are incremental, touching only the region of the channel that changed.

pub mod command;
pub mod driver;
pub mod font;
pub mod layout;
pub mod screen;

pub use driver::{DisplayConfig, DisplayDriver};
pub use font::{stretch, Glyph, GLYPH_WIDTH};
pub use layout::{ChannelRegion, Layout, LayoutError};
