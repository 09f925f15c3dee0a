//! Padreg Hardware Abstraction Layer
//!
//! This crate defines the hardware seams the pin registry depends on, so the
//! registry and reset engine in `padreg-core` stay board-agnostic and
//! host-testable. Chip/board support crates implement these traits; tests
//! substitute in-memory models.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Peripheral drivers / binding layer     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  padreg-core (registry + reset engine)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  padreg-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ chip support  │       │ in-memory     │
//! │ (MMIO writes) │       │ model (tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`pads::PadWriter`] - Write access to the per-pad mux/pad control registers
//! - [`table::PinTable`] - Slot index to pin descriptor lookup
//! - [`indicator::IndicatorReinit`] - Board status indicator reinit callback

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod pads;
pub mod table;

// Re-export key items at crate root for convenience
pub use indicator::IndicatorReinit;
pub use pads::PadWriter;
pub use table::{PinDesc, PinTable};
