//! Special-pin overlay strategy
//!
//! Some boards layer shared-resource semantics on top of one or two ordinary
//! pads, most commonly the pins driving a status indicator. Those pins track
//! their in-use status with dedicated flags outside the generic registry,
//! because the claim is cooperative across the whole set rather than
//! exclusive per pad. The overlay is a strategy object chosen at build time:
//! [`NoSpecialPins`] for boards without one, [`crate::IndicatorPins`] when
//! the `indicator` feature is enabled.

/// Strategy for pins with board-specific shared-resource semantics
///
/// All methods take the multiplexer slot index; slots the strategy does not
/// recognize fall through to the generic registry path.
pub trait SpecialPins {
    /// Check whether `slot` is a recognized special pin, and if so whether
    /// its dedicated in-use flag is clear
    ///
    /// Returns `None` for slots on the generic path.
    fn is_free(&self, slot: u8) -> Option<bool>;

    /// Set the dedicated in-use flag of `slot`, if it is a special pin
    fn claim(&mut self, slot: u8);

    /// Clear the dedicated in-use flag of `slot`, if it is a special pin
    ///
    /// Fires the board reinit callback exactly when the last member of the
    /// slot's cooperating set transitions in-use to free.
    fn release(&mut self, slot: u8);

    /// Clear every dedicated flag without firing any callback
    ///
    /// Bulk-reset path; special pins are not protected by never-reset
    /// exemptions.
    fn clear_all(&mut self);
}

/// Overlay for boards without special pins: every pad uses the generic path
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoSpecialPins;

impl SpecialPins for NoSpecialPins {
    fn is_free(&self, _slot: u8) -> Option<bool> {
        None
    }

    fn claim(&mut self, _slot: u8) {}

    fn release(&mut self, _slot: u8) {}

    fn clear_all(&mut self) {}
}
