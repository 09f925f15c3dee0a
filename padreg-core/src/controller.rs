//! Pin claim and reset operations
//!
//! [`PadController`] ties the registry to the hardware seams: the chip pin
//! table for slot lookups, the pad register writer for restoring factory
//! defaults, and the special-pin strategy for indicator pads. Drivers claim a
//! pin before use, reset it when done, and bulk-reset everything at
//! controller (re)initialization.

use padreg_hal::{PadWriter, PinDesc, PinTable};

use crate::registry::PinRegistry;
use crate::special::SpecialPins;

/// Claim/reset controller for a chip with `N` multiplexer slots
///
/// Constructed once at power-on with every slot free and unexempt. All pin
/// identifiers and slot indices are trusted build-time values from the
/// driver layer; out-of-range slots panic rather than report an error.
pub struct PadController<T, W, S, const N: usize> {
    table: T,
    pads: W,
    special: S,
    registry: PinRegistry<N>,
}

impl<T, W, const N: usize> PadController<T, W, crate::special::NoSpecialPins, N>
where
    T: PinTable,
    W: PadWriter,
{
    /// Create a controller for a board without special pins
    pub fn generic(table: T, pads: W) -> Self {
        Self::new(table, pads, crate::special::NoSpecialPins)
    }
}

impl<T, W, S, const N: usize> PadController<T, W, S, N>
where
    T: PinTable,
    W: PadWriter,
    S: SpecialPins,
{
    /// Create a controller with every slot free and no exemptions
    ///
    /// The table must cover exactly the `N` slots this controller manages.
    pub fn new(table: T, pads: W, special: S) -> Self {
        debug_assert_eq!(table.pin_count(), N);
        Self {
            table,
            pads,
            special,
            registry: PinRegistry::new(),
        }
    }

    /// Registry state, for introspection by drivers and tests
    pub fn registry(&self) -> &PinRegistry<N> {
        &self.registry
    }

    /// The pad register writer
    pub fn pads(&self) -> &W {
        &self.pads
    }

    /// A pin's externally visible pin number: its multiplexer slot index
    ///
    /// Stable and unique for the process lifetime, unaffected by claim and
    /// reset operations.
    pub fn pin_number(&self, pin: &PinDesc) -> u8 {
        pin.mux_idx
    }

    /// Check whether `pin` is unclaimed
    ///
    /// Special pins answer from their dedicated in-use flag; everything else
    /// from the generic registry. No side effects.
    pub fn is_free(&self, pin: &PinDesc) -> bool {
        match self.special.is_free(pin.mux_idx) {
            Some(free) => free,
            None => !self.registry.is_claimed(pin.mux_idx),
        }
    }

    /// Mark `pin` as owned by a driver
    ///
    /// Idempotent; double-claiming is not an error. Callers needing
    /// exclusivity check [`Self::is_free`] first. Special pins additionally
    /// set their dedicated member flag.
    pub fn claim(&mut self, pin: &PinDesc) {
        self.registry.claim(pin.mux_idx);
        self.special.claim(pin.mux_idx);
    }

    /// Exempt `pin` from bulk reset
    ///
    /// The exemption protects both register configuration and claim status
    /// across [`Self::reset_all`]; only [`Self::reset_pin`] lifts it.
    /// Idempotent.
    pub fn never_reset(&mut self, pin: &PinDesc) {
        self.registry.protect(pin.mux_idx);
    }

    /// Reset one pin to factory defaults, unconditionally
    ///
    /// Clears the claim and any never-reset exemption, then writes the pin's
    /// default values into its mux and pad registers as one uninterrupted
    /// pair. A special pin's member flag is released afterwards, firing the
    /// indicator reinit callback once its whole cooperating set is free.
    pub fn reset_pin(&mut self, pin: &PinDesc) {
        let slot = pin.mux_idx;
        self.registry.release(slot);
        self.pads.write_mux(slot, pin.mux_default);
        self.pads.write_pad(slot, pin.pad_default);
        self.special.release(slot);
    }

    /// Reset every non-exempt pin to factory defaults
    ///
    /// The registry pass runs first over all slots (non-exempt slots become
    /// free, exempt slots keep claim and exemption); only then does the
    /// register pass rewrite both registers of every non-exempt slot in slot
    /// order, via the chip pin table. Special-pin flags are cleared last,
    /// without firing the reinit callback; exemptions do not protect them.
    pub fn reset_all(&mut self) {
        self.registry.bulk_reset();
        for slot in 0..N {
            let slot = slot as u8;
            if !self.registry.is_protected(slot) {
                let pin = *self.table.pin(slot);
                self.pads.write_mux(slot, pin.mux_default);
                self.pads.write_pad(slot, pin.pad_default);
            }
        }
        self.special.clear_all();
    }

    /// Reset the pin at `slot` to factory defaults
    ///
    /// Resolves the slot through the chip pin table and delegates to
    /// [`Self::reset_pin`].
    ///
    /// # Panics
    ///
    /// May panic if `slot` is outside the table's valid range (caller
    /// contract violation).
    pub fn reset_by_slot(&mut self, slot: u8) {
        let pin = *self.table.pin(slot);
        self.reset_pin(&pin);
    }
}
