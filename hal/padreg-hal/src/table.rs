//! Chip pin table
//!
//! The chip support crate enumerates every pad at build time and exposes the
//! mapping from multiplexer slot index to pin descriptor. Two numbering
//! systems exist on most parts (multiplexer slot vs. GPIO port/number); the
//! slot index is the only key the registry uses, because reset information is
//! stored per slot, not per GPIO.

/// Static description of one pin multiplexer slot
///
/// Pins are enumerated by the platform at build time; none are created or
/// destroyed at runtime. The descriptor carries the factory-default values
/// the reset engine writes back into the slot's two configuration registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinDesc {
    /// Stable multiplexer slot index, unique per pin for the process lifetime
    pub mux_idx: u8,
    /// Factory-default value of the mux-function register
    pub mux_default: u32,
    /// Factory-default value of the pad-control register
    pub pad_default: u32,
}

impl PinDesc {
    /// Create a pin descriptor
    pub const fn new(mux_idx: u8, mux_default: u32, pad_default: u32) -> Self {
        Self {
            mux_idx,
            mux_default,
            pad_default,
        }
    }
}

/// Slot index to pin descriptor lookup
///
/// The lookup is total over the valid slot range `[0, pin_count())`. Slot
/// indices are trusted build-time values supplied by the driver layer above;
/// an out-of-range slot is a caller contract violation, not a recoverable
/// error.
pub trait PinTable {
    /// Number of multiplexer slots on this chip
    fn pin_count(&self) -> usize;

    /// Look up the pin descriptor for `slot`
    ///
    /// # Panics
    ///
    /// Implementations may panic if `slot >= pin_count()`.
    fn pin(&self, slot: u8) -> &PinDesc;
}

impl<T: PinTable> PinTable for &T {
    fn pin_count(&self) -> usize {
        (**self).pin_count()
    }

    fn pin(&self, slot: u8) -> &PinDesc {
        (**self).pin(slot)
    }
}
