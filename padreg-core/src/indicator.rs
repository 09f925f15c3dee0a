//! Status indicator pin overlay
//!
//! Implements [`SpecialPins`] for boards whose status indicator hangs off
//! ordinary pads: a single data pin (NeoPixel style) or a clock/data pair
//! (DotStar style). Each group tracks per-member in-use flags; the shared
//! reinit callback fires when the last member of a group is released, handing
//! the indicator back to the board support code.

use heapless::Vec;
use padreg_hal::IndicatorReinit;

use crate::special::SpecialPins;

/// Maximum indicator groups per board
pub const MAX_GROUPS: usize = 4;

#[derive(Debug, Clone, Copy)]
struct Member {
    slot: u8,
    in_use: bool,
}

#[derive(Debug, Clone)]
struct Group {
    members: Vec<Member, 2>,
}

impl Group {
    fn member_mut(&mut self, slot: u8) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.slot == slot)
    }

    fn contains(&self, slot: u8) -> bool {
        self.members.iter().any(|m| m.slot == slot)
    }

    fn all_free(&self) -> bool {
        self.members.iter().all(|m| !m.in_use)
    }
}

/// Special-pin overlay for board status indicators
///
/// Built from a list of indicator groups registered at construction time;
/// groups share one reinit callback. Boards select this overlay (or
/// [`crate::NoSpecialPins`]) when constructing the controller.
pub struct IndicatorPins<R> {
    groups: Vec<Group, MAX_GROUPS>,
    reinit: R,
}

impl<R: IndicatorReinit> IndicatorPins<R> {
    /// Create an overlay with no groups registered yet
    pub fn new(reinit: R) -> Self {
        Self {
            groups: Vec::new(),
            reinit,
        }
    }

    /// Register a single distinguished pin (e.g. a NeoPixel data pad)
    ///
    /// # Panics
    ///
    /// Panics if `slot` is already registered or [`MAX_GROUPS`] is exceeded
    /// (board configuration contract violation).
    pub fn with_single(mut self, slot: u8) -> Self {
        self.add_group(&[slot]);
        self
    }

    /// Register a cooperating pin pair (e.g. DotStar SCK + MOSI pads)
    ///
    /// The pair acts as one logical resource: the reinit callback fires only
    /// when both members are free.
    ///
    /// # Panics
    ///
    /// Panics if either slot is already registered, the slots are equal, or
    /// [`MAX_GROUPS`] is exceeded.
    pub fn with_pair(mut self, slot_a: u8, slot_b: u8) -> Self {
        assert!(slot_a != slot_b, "pair members must be distinct slots");
        self.add_group(&[slot_a, slot_b]);
        self
    }

    fn add_group(&mut self, slots: &[u8]) {
        for &slot in slots {
            assert!(
                self.find(slot).is_none(),
                "slot already registered as an indicator pin"
            );
        }
        let mut members = Vec::new();
        members.extend(slots.iter().map(|&slot| Member {
            slot,
            in_use: false,
        }));
        if self.groups.push(Group { members }).is_err() {
            panic!("too many indicator groups");
        }
    }

    fn find(&self, slot: u8) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(slot))
    }

    fn find_mut(&mut self, slot: u8) -> Option<&mut Group> {
        self.groups.iter_mut().find(|g| g.contains(slot))
    }
}

impl<R: IndicatorReinit> SpecialPins for IndicatorPins<R> {
    fn is_free(&self, slot: u8) -> Option<bool> {
        let group = self.find(slot)?;
        let member = group.members.iter().find(|m| m.slot == slot)?;
        Some(!member.in_use)
    }

    fn claim(&mut self, slot: u8) {
        if let Some(group) = self.find_mut(slot) {
            if let Some(member) = group.member_mut(slot) {
                member.in_use = true;
            }
        }
    }

    fn release(&mut self, slot: u8) {
        let mut fire = false;
        if let Some(group) = self.find_mut(slot) {
            if let Some(member) = group.member_mut(slot) {
                member.in_use = false;
            }
            fire = group.all_free();
        }
        if fire {
            self.reinit.reinit();
        }
    }

    fn clear_all(&mut self) {
        for group in self.groups.iter_mut() {
            for member in group.members.iter_mut() {
                member.in_use = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_unregistered_slot_is_generic() {
        let overlay = IndicatorPins::new(|| {}).with_single(7);
        assert_eq!(overlay.is_free(3), None);
        assert_eq!(overlay.is_free(7), Some(true));
    }

    #[test]
    fn test_single_pin_claim_release() {
        let fired = Cell::new(0u32);
        let mut overlay = IndicatorPins::new(|| fired.set(fired.get() + 1)).with_single(7);

        overlay.claim(7);
        assert_eq!(overlay.is_free(7), Some(false));
        assert_eq!(fired.get(), 0);

        overlay.release(7);
        assert_eq!(overlay.is_free(7), Some(true));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_pair_fires_on_last_release_only() {
        let fired = Cell::new(0u32);
        let mut overlay = IndicatorPins::new(|| fired.set(fired.get() + 1)).with_pair(10, 11);

        overlay.claim(10);
        overlay.claim(11);

        overlay.release(10);
        assert_eq!(fired.get(), 0);
        assert_eq!(overlay.is_free(10), Some(true));
        assert_eq!(overlay.is_free(11), Some(false));

        overlay.release(11);
        assert_eq!(fired.get(), 1);
        assert_eq!(overlay.is_free(10), Some(true));
        assert_eq!(overlay.is_free(11), Some(true));
    }

    #[test]
    fn test_pair_member_flags_are_independent() {
        let mut overlay = IndicatorPins::new(|| {}).with_pair(10, 11);
        overlay.claim(10);
        assert_eq!(overlay.is_free(10), Some(false));
        assert_eq!(overlay.is_free(11), Some(true));
    }

    #[test]
    fn test_clear_all_fires_no_callback() {
        let fired = Cell::new(0u32);
        let mut overlay = IndicatorPins::new(|| fired.set(fired.get() + 1))
            .with_single(7)
            .with_pair(10, 11);

        overlay.claim(7);
        overlay.claim(10);
        overlay.clear_all();

        assert_eq!(fired.get(), 0);
        assert_eq!(overlay.is_free(7), Some(true));
        assert_eq!(overlay.is_free(10), Some(true));
        assert_eq!(overlay.is_free(11), Some(true));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_slot_panics() {
        let _ = IndicatorPins::new(|| {}).with_single(7).with_pair(7, 8);
    }
}
