//! Board status indicator reinitialization
//!
//! Some boards drive a status indicator (NeoPixel, DotStar) from one or two
//! ordinary pads. When a driver releases the last of those pads, the board
//! support code needs a chance to take the indicator back over.

/// Callback invoked when the last indicator pad transitions in-use to free
///
/// Fired exactly once per release of a whole cooperating pad set; never fired
/// by a bulk reset.
pub trait IndicatorReinit {
    /// Reinitialize the board status indicator
    fn reinit(&mut self);
}

// Closures are enough for most boards
impl<F: FnMut()> IndicatorReinit for F {
    fn reinit(&mut self) {
        self()
    }
}
