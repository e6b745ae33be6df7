//! Write-only two-wire serial bus
//!
//! The display is the only device on the bus and is never read from, so
//! the bus layer is reduced to fire-and-forget transactions:
//! start + address, payload bytes, stop.

pub mod bitbang;

pub use bitbang::SerialBitEngine;

/// Sink for write-only bus transactions
///
/// A transaction is one `begin`, any number of `write`s and one `end`.
/// None of the operations can fail: acknowledgments are not sampled.
pub trait Transport {
    /// Issue a start condition followed by the 7-bit target address
    /// with the write-direction bit
    fn begin(&mut self, address: u8);

    /// Send one payload byte
    fn write(&mut self, byte: u8);

    /// Issue a stop condition
    fn end(&mut self);

    /// Send a complete transaction
    fn transaction(&mut self, address: u8, bytes: &[u8]) {
        self.begin(address);
        for &b in bytes {
            self.write(b);
        }
        self.end();
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn begin(&mut self, address: u8) {
        T::begin(self, address)
    }

    fn write(&mut self, byte: u8) {
        T::write(self, byte)
    }

    fn end(&mut self) {
        T::end(self)
    }
}
