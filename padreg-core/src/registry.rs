//! Per-slot claim and exemption bookkeeping
//!
//! One [`PinState`] per multiplexer slot, indexed by the slot's stable
//! integer index. The registry is a pure state holder; register writes
//! happen in [`crate::controller`].

/// Claim and never-reset exemption state of one multiplexer slot
///
/// The exemption protects both the pad's register configuration and its
/// claim status from a bulk reset; only a direct single-pin reset lifts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// Unclaimed, participates in bulk reset
    #[default]
    Free,
    /// Owned by a driver, participates in bulk reset
    Claimed,
    /// Unclaimed, exempt from bulk reset
    Protected,
    /// Owned by a driver, exempt from bulk reset
    ProtectedClaimed,
}

impl PinState {
    /// Check if a driver currently owns the slot
    pub fn is_claimed(&self) -> bool {
        matches!(self, PinState::Claimed | PinState::ProtectedClaimed)
    }

    /// Check if the slot carries a never-reset exemption
    pub fn is_protected(&self) -> bool {
        matches!(self, PinState::Protected | PinState::ProtectedClaimed)
    }

    /// State after a claim; preserves any exemption
    fn with_claim(self) -> Self {
        if self.is_protected() {
            PinState::ProtectedClaimed
        } else {
            PinState::Claimed
        }
    }

    /// State after marking never-reset; preserves any claim
    fn with_protection(self) -> Self {
        if self.is_claimed() {
            PinState::ProtectedClaimed
        } else {
            PinState::Protected
        }
    }

    /// State after a bulk reset
    ///
    /// The claim flag is overwritten by the exemption flag: non-exempt slots
    /// become free, exempt slots come out claimed whether or not a claim was
    /// recorded beforehand. Exempt slots are conventionally claimed by the
    /// driver that protected them, which makes the overwrite equivalent to
    /// preservation in practice.
    fn after_bulk_reset(self) -> Self {
        if self.is_protected() {
            PinState::ProtectedClaimed
        } else {
            PinState::Free
        }
    }
}

/// Fixed-size claim/exemption table, one entry per multiplexer slot
///
/// `N` is the chip's slot count. The registry's lifetime equals the
/// controller's power-on session; [`PinRegistry::bulk_reset`] is the only
/// supported return to a known state.
#[derive(Debug, Clone)]
pub struct PinRegistry<const N: usize> {
    slots: [PinState; N],
}

impl<const N: usize> Default for PinRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PinRegistry<N> {
    /// Create a registry with every slot free and unexempt
    pub const fn new() -> Self {
        Self {
            slots: [PinState::Free; N],
        }
    }

    /// Number of slots
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the registry has no slots
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Get the state of `slot`
    ///
    /// # Panics
    ///
    /// Panics if `slot` is out of range (caller contract violation; slot
    /// indices are trusted build-time values).
    pub fn state(&self, slot: u8) -> PinState {
        self.slots[slot as usize]
    }

    /// Check if a driver currently owns `slot`
    pub fn is_claimed(&self, slot: u8) -> bool {
        self.slots[slot as usize].is_claimed()
    }

    /// Check if `slot` carries a never-reset exemption
    pub fn is_protected(&self, slot: u8) -> bool {
        self.slots[slot as usize].is_protected()
    }

    /// Mark `slot` as owned; idempotent, preserves any exemption
    pub fn claim(&mut self, slot: u8) {
        self.slots[slot as usize] = self.slots[slot as usize].with_claim();
    }

    /// Mark `slot` never-reset; idempotent, preserves any claim
    pub fn protect(&mut self, slot: u8) {
        self.slots[slot as usize] = self.slots[slot as usize].with_protection();
    }

    /// Clear both the claim and the exemption of `slot`
    ///
    /// Single-pin reset path; the only transition out of a protected state.
    pub fn release(&mut self, slot: u8) {
        self.slots[slot as usize] = PinState::Free;
    }

    /// Apply the bulk-reset rule to every slot
    ///
    /// Non-exempt slots become free; exempt slots come out claimed with their
    /// exemption intact (see [`PinState`] docs for the claim-overwrite rule).
    /// Pure state pass; the register pass in [`crate::controller`] runs after
    /// this completes.
    pub fn bulk_reset(&mut self) {
        for state in self.slots.iter_mut() {
            *state = state.after_bulk_reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_all_free() {
        let reg = PinRegistry::<8>::new();
        for slot in 0..8 {
            assert_eq!(reg.state(slot), PinState::Free);
            assert!(!reg.is_claimed(slot));
            assert!(!reg.is_protected(slot));
        }
    }

    #[test]
    fn test_claim_and_release() {
        let mut reg = PinRegistry::<8>::new();
        reg.claim(3);
        assert!(reg.is_claimed(3));
        assert!(!reg.is_claimed(2));

        reg.release(3);
        assert!(!reg.is_claimed(3));
    }

    #[test]
    fn test_claim_is_idempotent() {
        let mut reg = PinRegistry::<8>::new();
        reg.claim(5);
        let once = reg.state(5);
        reg.claim(5);
        assert_eq!(reg.state(5), once);
    }

    #[test]
    fn test_protect_preserves_claim() {
        let mut reg = PinRegistry::<8>::new();
        reg.claim(1);
        reg.protect(1);
        assert_eq!(reg.state(1), PinState::ProtectedClaimed);

        // Protect before claim works too
        reg.protect(2);
        reg.claim(2);
        assert_eq!(reg.state(2), PinState::ProtectedClaimed);
    }

    #[test]
    fn test_release_lifts_exemption() {
        let mut reg = PinRegistry::<8>::new();
        reg.protect(4);
        reg.claim(4);
        reg.release(4);
        assert_eq!(reg.state(4), PinState::Free);
    }

    #[test]
    fn test_bulk_reset_frees_unexempt_slots() {
        let mut reg = PinRegistry::<8>::new();
        reg.claim(0);
        reg.claim(1);
        reg.bulk_reset();
        assert_eq!(reg.state(0), PinState::Free);
        assert_eq!(reg.state(1), PinState::Free);
    }

    #[test]
    fn test_bulk_reset_keeps_exempt_claims() {
        let mut reg = PinRegistry::<8>::new();
        reg.claim(2);
        reg.protect(2);
        reg.bulk_reset();
        assert_eq!(reg.state(2), PinState::ProtectedClaimed);
    }

    #[test]
    fn test_bulk_reset_claim_follows_exemption() {
        // An exempt slot that was never claimed comes out of a bulk reset
        // claimed; the claim flag is overwritten by the exemption flag.
        let mut reg = PinRegistry::<8>::new();
        reg.protect(6);
        reg.bulk_reset();
        assert_eq!(reg.state(6), PinState::ProtectedClaimed);
        assert!(reg.is_claimed(6));
    }
}
