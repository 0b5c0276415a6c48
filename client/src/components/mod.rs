//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the rendered shell state from context and route every
//! change through the `util` glue, which owns all browser access.

pub mod asset_card;
pub mod tab_bar;
pub mod theme_controls;
pub mod toast_container;
pub mod toolbar;
pub mod units_select;
