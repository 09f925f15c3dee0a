//! Pad register write access
//!
//! Each pin multiplexer slot has two memory-mapped configuration registers:
//! a mux-function register selecting the routed peripheral function, and a
//! pad-control register holding the electrical configuration (drive strength,
//! pull, slew). The reset engine only ever writes these; it never reads them.

/// Write access to a chip's per-slot mux/pad control registers
///
/// Implementations on real hardware perform direct, unbuffered MMIO writes.
/// Host tests substitute an in-memory register file and assert the exact
/// values written.
///
/// The two registers of one slot are always written back-to-back as a single
/// unit; interleaving other pin-state mutations between them would leave the
/// pad in an inconsistent electrical state.
pub trait PadWriter {
    /// Write the mux-function register of `slot`
    fn write_mux(&mut self, slot: u8, value: u32);

    /// Write the pad-control register of `slot`
    fn write_pad(&mut self, slot: u8, value: u32);
}

impl<W: PadWriter> PadWriter for &mut W {
    fn write_mux(&mut self, slot: u8, value: u32) {
        (**self).write_mux(slot, value);
    }

    fn write_pad(&mut self, slot: u8, value: u32) {
        (**self).write_pad(slot, value);
    }
}
