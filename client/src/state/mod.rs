//! Shared client-side state.
//!
//! DESIGN
//! ======
//! State here mirrors what was last rendered so components can react to it.
//! It is never read back as a preference: the store stays the source of truth.

pub mod ui;
