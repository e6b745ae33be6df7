//! Bit-banged serial bus engine
//!
//! Emulates the controller side of an open-drain two-wire bus with two
//! GPIO lines. Only single-target write transactions are supported: no
//! arbitration, no reads, no clock stretching, and the acknowledgment slot
//! is clocked but never sampled.
//!
//! Every line transition is followed by a hold delay of half a clock
//! period (see [`BusTiming`]), so the waveform is deterministic regardless
//! of how fast the CPU runs.
//!
//! ```text
//!        start        bit 7   bit 6        ack       stop
//! SDA  ‾‾\________X=======X=======X ... ‾‾‾‾‾‾‾‾‾___/‾‾‾
//! SCL  ‾‾‾‾‾\_______/‾\_____/‾\____ ... ___/‾\___/‾‾‾‾‾‾
//! ```

use embedded_hal::delay::DelayNs;
use tridim_hal::{BusTiming, OutputPin};

use super::Transport;

/// Software two-wire bus master
pub struct SerialBitEngine<SCL, SDA, D> {
    scl: SCL,
    sda: SDA,
    delay: D,
    /// Hold time after each transition
    hold_ns: u32,
}

impl<SCL, SDA, D> SerialBitEngine<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: OutputPin,
    D: DelayNs,
{
    /// Create a new engine and release both lines to the idle state
    pub fn new(scl: SCL, sda: SDA, delay: D, timing: BusTiming) -> Self {
        let mut engine = Self {
            scl,
            sda,
            delay,
            hold_ns: timing.half_period_ns(),
        };
        engine.release();
        engine
    }

    /// Release both lines (bus idle, both high through the pull-ups)
    pub fn release(&mut self) {
        self.sda.set_high();
        self.scl.set_high();
        self.hold();
    }

    /// Start condition, then the address byte
    ///
    /// The address is shifted left by one with the direction bit forced to
    /// write (0). No acknowledgment is sampled.
    pub fn begin_transaction(&mut self, address: u8) {
        self.sda_low();
        self.scl_low();
        self.write_byte((address & 0x7F) << 1);
    }

    /// Clock out one byte, MSB first, plus the unchecked acknowledgment slot
    pub fn write_byte(&mut self, value: u8) {
        for bit in (0..8).rev() {
            self.set_sda(value & (1 << bit) != 0);
            self.pulse_scl();
        }

        // Ack slot: data released, one extra clock
        self.set_sda(true);
        self.pulse_scl();
    }

    /// Stop condition: data low, clock high, data released
    pub fn end_transaction(&mut self) {
        self.sda_low();
        self.scl_high();
        self.set_sda(true);
    }

    /// Give the pins and delay back
    pub fn release_parts(self) -> (SCL, SDA, D) {
        (self.scl, self.sda, self.delay)
    }

    fn pulse_scl(&mut self) {
        self.scl_high();
        self.scl_low();
    }

    fn set_sda(&mut self, high: bool) {
        self.sda.set_state(high);
        self.hold();
    }

    fn sda_low(&mut self) {
        self.set_sda(false);
    }

    fn scl_high(&mut self) {
        self.scl.set_high();
        self.hold();
    }

    fn scl_low(&mut self) {
        self.scl.set_low();
        self.hold();
    }

    fn hold(&mut self) {
        self.delay.delay_ns(self.hold_ns);
    }
}

impl<SCL, SDA, D> Transport for SerialBitEngine<SCL, SDA, D>
where
    SCL: OutputPin,
    SDA: OutputPin,
    D: DelayNs,
{
    fn begin(&mut self, address: u8) {
        self.begin_transaction(address);
    }

    fn write(&mut self, byte: u8) {
        self.write_byte(byte);
    }

    fn end(&mut self) {
        self.end_transaction();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Edge {
        Scl(bool),
        Sda(bool),
    }

    type Trace = RefCell<Vec<Edge, 1024>>;

    struct SclLine<'a>(&'a Trace);
    struct SdaLine<'a>(&'a Trace);

    impl OutputPin for SclLine<'_> {
        fn set_high(&mut self) {
            self.0.borrow_mut().push(Edge::Scl(true)).unwrap();
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().push(Edge::Scl(false)).unwrap();
        }
    }

    impl OutputPin for SdaLine<'_> {
        fn set_high(&mut self) {
            self.0.borrow_mut().push(Edge::Sda(true)).unwrap();
        }
        fn set_low(&mut self) {
            self.0.borrow_mut().push(Edge::Sda(false)).unwrap();
        }
    }

    #[derive(Default)]
    struct CountingDelay {
        calls: u32,
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.calls += 1;
            self.total_ns += ns as u64;
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    enum Symbol {
        Start,
        Bit(bool),
        Stop,
    }

    /// Decode a line trace the way a peripheral would see it
    fn decode(trace: &[Edge]) -> Vec<Symbol, 512> {
        let mut out = Vec::new();
        let (mut scl, mut sda) = (true, true);
        for &edge in trace {
            match edge {
                Edge::Scl(level) => {
                    if level && !scl {
                        out.push(Symbol::Bit(sda)).unwrap();
                    }
                    scl = level;
                }
                Edge::Sda(level) => {
                    if scl && sda && !level {
                        out.push(Symbol::Start).unwrap();
                    } else if scl && !sda && level {
                        out.push(Symbol::Stop).unwrap();
                    }
                    sda = level;
                }
            }
        }
        out
    }

    /// Collect 9-bit frames (8 data bits + ack slot)
    ///
    /// The clock rise of the stop condition samples one stray bit, which
    /// never completes a frame.
    fn frames(symbols: &[Symbol]) -> Vec<(u8, bool), 32> {
        let mut out = Vec::new();
        let bits: Vec<bool, 512> = symbols
            .iter()
            .filter_map(|s| match s {
                Symbol::Bit(b) => Some(*b),
                _ => None,
            })
            .collect();
        for chunk in bits.chunks_exact(9) {
            let byte = chunk[..8]
                .iter()
                .fold(0u8, |acc, &b| (acc << 1) | b as u8);
            out.push((byte, chunk[8])).unwrap();
        }
        out
    }

    fn engine(trace: &Trace) -> SerialBitEngine<SclLine<'_>, SdaLine<'_>, CountingDelay> {
        let engine = SerialBitEngine::new(
            SclLine(trace),
            SdaLine(trace),
            CountingDelay::default(),
            BusTiming::STANDARD,
        );
        trace.borrow_mut().clear();
        engine
    }

    #[test]
    fn test_idle_on_creation() {
        let trace = Trace::default();
        let _engine = SerialBitEngine::new(
            SclLine(&trace),
            SdaLine(&trace),
            CountingDelay::default(),
            BusTiming::STANDARD,
        );
        assert_eq!(trace.borrow().as_slice(), &[Edge::Sda(true), Edge::Scl(true)]);
    }

    #[test]
    fn test_write_byte_exact_trace() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.write_byte(0b1000_0001);

        let mut expected: Vec<Edge, 64> = Vec::new();
        for bit in [true, false, false, false, false, false, false, true] {
            expected.push(Edge::Sda(bit)).unwrap();
            expected.push(Edge::Scl(true)).unwrap();
            expected.push(Edge::Scl(false)).unwrap();
        }
        // Unchecked ack slot
        expected.push(Edge::Sda(true)).unwrap();
        expected.push(Edge::Scl(true)).unwrap();
        expected.push(Edge::Scl(false)).unwrap();

        assert_eq!(trace.borrow().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_begin_trace() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.begin_transaction(0x3C);

        let t = trace.borrow();
        assert_eq!(&t[..2], &[Edge::Sda(false), Edge::Scl(false)]);
        // 9 clock pulses follow: 8 address bits + ack slot
        let pulses = t.iter().filter(|e| **e == Edge::Scl(true)).count();
        assert_eq!(pulses, 9);
    }

    #[test]
    fn test_end_trace() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.end_transaction();

        assert_eq!(
            trace.borrow().as_slice(),
            &[Edge::Sda(false), Edge::Scl(true), Edge::Sda(true)]
        );
    }

    #[test]
    fn test_full_transaction_decodes() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.transaction(0x3C, &[0x40, 0xA5]);

        let symbols = decode(&trace.borrow());
        assert_eq!(symbols.first(), Some(&Symbol::Start));
        assert_eq!(symbols.last(), Some(&Symbol::Stop));
        assert_eq!(
            symbols.iter().filter(|s| **s == Symbol::Start).count(),
            1
        );

        let frames = frames(&symbols);
        // Address 0x3C with write bit -> 0x78, ack slot released high
        assert_eq!(frames.as_slice(), &[(0x78, true), (0x40, true), (0xA5, true)]);
    }

    #[test]
    fn test_address_masked_to_seven_bits() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.begin_transaction(0xBC);
        bus.end_transaction();

        let frames = frames(&decode(&trace.borrow()));
        assert_eq!(frames[0].0, 0x78);
    }

    #[test]
    fn test_every_transition_is_held() {
        let trace = Trace::default();
        let mut bus = engine(&trace);

        bus.transaction(0x3C, &[0x00, 0xAF]);

        let edges = trace.borrow().len() as u32;
        let (_, _, delay) = bus.release_parts();
        // One hold for the idle release at construction (two edges, one hold)
        assert_eq!(delay.calls, edges + 1);
        assert_eq!(delay.total_ns, (edges as u64 + 1) * 5_000);
    }
}
