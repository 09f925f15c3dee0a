//! Board-agnostic pin claim and reset registry
//!
//! This crate tracks, for every pin multiplexer slot on a chip, whether the
//! pad is claimed by a peripheral driver and whether it is exempt from bulk
//! reset, and restores chip-default mux/pad register configuration for one
//! pin or for all pins at once. It does not configure pin functions; routing
//! a pad to SPI/UART/GPIO is the business of the peripheral drivers above.
//!
//! Hardware access goes through the `padreg-hal` traits, so everything here
//! runs unmodified against an in-memory register model on the host.
//!
//! # Concurrency
//!
//! Single-threaded, synchronous, non-reentrant: the model is one cooperative
//! control thread owning pin configuration. Targets where interrupt handlers
//! or a second core touch pin state must add their own mutual exclusion
//! around the whole controller; a pin's two-register write pair must never be
//! split across a context switch.

#![no_std]
#![deny(unsafe_code)]

pub mod controller;
#[cfg(any(feature = "indicator", test))]
pub mod indicator;
pub mod registry;
pub mod special;

pub use controller::PadController;
#[cfg(any(feature = "indicator", test))]
pub use indicator::IndicatorPins;
pub use registry::{PinRegistry, PinState};
pub use special::{NoSpecialPins, SpecialPins};
